//! Directory browsing state for file pickers.
//!
//! Listings come from a [`DirectoryProvider`]; the widget layer never
//! touches the file system itself.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::ListingError;
use crate::navigation::NavDirection;

/// A raw directory entry returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEntry {
    pub name: String,
    pub is_dir: bool,
}

impl ProviderEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Source of directory listings.
pub trait DirectoryProvider: Send + Sync {
    fn list(&self, dir: &str) -> Result<Vec<ProviderEntry>, ListingError>;
}

/// In-memory directory tree keyed by absolute path.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectoryProvider {
    dirs: BTreeMap<String, Vec<ProviderEntry>>,
}

impl StaticDirectoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the contents of `dir`.
    pub fn with_dir(mut self, dir: impl Into<String>, entries: Vec<ProviderEntry>) -> Self {
        self.dirs.insert(dir.into(), entries);
        self
    }
}

impl DirectoryProvider for StaticDirectoryProvider {
    fn list(&self, dir: &str) -> Result<Vec<ProviderEntry>, ListingError> {
        self.dirs
            .get(dir)
            .cloned()
            .ok_or_else(|| ListingError::NotFound(dir.to_string()))
    }
}

/// A row in the browser listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEntry {
    Parent,
    Directory(String),
    File(String),
}

impl BrowserEntry {
    /// Text shown in the listing.
    pub fn display_name(&self) -> String {
        match self {
            BrowserEntry::Parent => "..".to_string(),
            BrowserEntry::Directory(name) => format!("{name}/"),
            BrowserEntry::File(name) => name.clone(),
        }
    }
}

/// Which entries survive a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub show_hidden: bool,
    /// Accepted file suffixes, e.g. `[".rs", ".toml"]`. Directories and the
    /// parent entry are always kept.
    pub extensions: Option<Vec<String>>,
}

impl ListingFilter {
    pub fn accepts(&self, entry: &BrowserEntry) -> bool {
        match entry {
            BrowserEntry::Parent => true,
            BrowserEntry::Directory(name) => self.show_hidden || !name.starts_with('.'),
            BrowserEntry::File(name) => {
                (self.show_hidden || !name.starts_with('.'))
                    && self
                        .extensions
                        .as_ref()
                        .is_none_or(|exts| exts.iter().any(|ext| name.ends_with(ext.as_str())))
            }
        }
    }
}

/// How file activation affects the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Picking a file replaces the selection and closes the browser.
    Single,
    /// Picking a file toggles it; additions past `max_files` are refused.
    Multiple { max_files: Option<usize> },
}

/// Outcome of activating the highlighted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Moved into another directory.
    Navigated,
    /// The selection changed. `close` is set in single mode.
    Selected { files: Vec<String>, close: bool },
    /// Refused or nothing highlighted.
    Unchanged,
}

/// Cursor over one directory listing.
#[derive(Clone)]
pub struct FileBrowser {
    provider: Arc<dyn DirectoryProvider>,
    directory: String,
    entries: Vec<BrowserEntry>,
    cursor: usize,
    filter: ListingFilter,
}

impl FileBrowser {
    pub fn new(provider: Arc<dyn DirectoryProvider>, directory: impl Into<String>) -> Self {
        Self {
            provider,
            directory: directory.into(),
            entries: Vec::new(),
            cursor: 0,
            filter: ListingFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: ListingFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    /// Change directory without listing it yet.
    pub fn set_directory(&mut self, dir: impl Into<String>) {
        self.directory = dir.into();
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn entries(&self) -> &[BrowserEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&BrowserEntry> {
        self.entries.get(self.cursor)
    }

    /// List the current directory, apply the filter and reset the cursor.
    pub fn load(&mut self) {
        let listed = match self.provider.list(&self.directory) {
            Ok(listed) => listed,
            Err(err) => {
                log::warn!("file browser: {err}");
                Vec::new()
            }
        };

        let parent = (self.directory != "/").then_some(BrowserEntry::Parent);
        self.entries = parent
            .into_iter()
            .chain(listed.into_iter().map(|entry| {
                if entry.is_dir {
                    BrowserEntry::Directory(entry.name)
                } else {
                    BrowserEntry::File(entry.name)
                }
            }))
            .filter(|entry| self.filter.accepts(entry))
            .collect();
        self.cursor = 0;
        log::debug!(
            "file browser: loaded {} ({} entries)",
            self.directory,
            self.entries.len()
        );
    }

    /// Move the cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, direction: NavDirection) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        self.cursor = match direction {
            NavDirection::Forward => (self.cursor + 1) % len,
            NavDirection::Backward => (self.cursor + len - 1) % len,
        };
    }

    /// Absolute path of `name` inside the current directory.
    pub fn path_of(&self, name: &str) -> String {
        join(&self.directory, name)
    }

    /// Navigate to `dir` and reload.
    pub fn navigate(&mut self, dir: impl Into<String>) {
        self.set_directory(dir);
        self.load();
    }

    /// Activate the highlighted entry against the current selection.
    pub fn activate(&mut self, selected: &[String], mode: SelectionMode) -> Activation {
        let Some(entry) = self.current().cloned() else {
            return Activation::Unchanged;
        };

        match entry {
            BrowserEntry::Parent => {
                self.navigate(parent_of(&self.directory));
                Activation::Navigated
            }
            BrowserEntry::Directory(name) => {
                self.navigate(join(&self.directory, &name));
                Activation::Navigated
            }
            BrowserEntry::File(name) => {
                let path = join(&self.directory, &name);
                match mode {
                    SelectionMode::Single => Activation::Selected {
                        files: vec![path],
                        close: true,
                    },
                    SelectionMode::Multiple { max_files } => {
                        let files: Vec<String> = if selected.contains(&path) {
                            selected.iter().filter(|f| **f != path).cloned().collect()
                        } else {
                            selected.iter().cloned().chain(Some(path)).collect()
                        };
                        if max_files.is_some_and(|max| files.len() > max) {
                            log::debug!("file browser: max files reached");
                            return Activation::Unchanged;
                        }
                        Activation::Selected {
                            files,
                            close: false,
                        }
                    }
                }
            }
        }
    }

    /// Selection with the highlighted file removed, if it is a selected file.
    pub fn remove_current(&self, selected: &[String]) -> Option<Vec<String>> {
        let BrowserEntry::File(name) = self.current()? else {
            return None;
        };
        let path = join(&self.directory, name);
        selected
            .contains(&path)
            .then(|| selected.iter().filter(|f| **f != path).cloned().collect())
    }
}

impl std::fmt::Debug for FileBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileBrowser")
            .field("directory", &self.directory)
            .field("entries", &self.entries)
            .field("cursor", &self.cursor)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

/// Parent of an absolute path. The root is its own parent.
pub fn parent_of(dir: &str) -> String {
    match dir.trim_end_matches('/').rsplit_once('/') {
        Some(("", _)) | None => "/".to_string(),
        Some((parent, _)) => parent.to_string(),
    }
}

fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}
