//! File input: a selection summary plus a keyboard-driven file browser.

mod events;
mod render;
pub(crate) mod theme;

use std::sync::Arc;

use weft::{Element, Key};

use crate::controlled::ControlledValue;
use crate::file_browser::{
    Activation, DirectoryProvider, FileBrowser, ListingFilter, SelectionMode,
};
use crate::theme::Theme;
use crate::widgets::events::{EventResult, Widget};

/// Directory the browser opens in unless told otherwise.
pub const DEFAULT_DIRECTORY: &str = "/current/directory";

pub struct FileInput {
    files: ControlledValue<Vec<String>>,
    browser: FileBrowser,
    is_browsing: bool,
    has_multiple: bool,
    max_files: Option<usize>,
    is_disabled: bool,
    label: Option<String>,
    placeholder: String,
}

impl FileInput {
    pub const THEME: &'static str = "FileInput";

    pub fn new(provider: Arc<dyn DirectoryProvider>) -> Self {
        Self {
            files: ControlledValue::uncontrolled(Vec::new()),
            browser: FileBrowser::new(provider, DEFAULT_DIRECTORY),
            is_browsing: false,
            has_multiple: false,
            max_files: None,
            is_disabled: false,
            label: None,
            placeholder: "Press Enter to browse files...".to_string(),
        }
    }

    pub fn directory(mut self, directory: impl Into<String>) -> Self {
        self.browser.set_directory(directory);
        self
    }

    pub fn multiple(mut self, has_multiple: bool) -> Self {
        self.has_multiple = has_multiple;
        self
    }

    pub fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = Some(max_files);
        self
    }

    /// Only list files ending in one of `extensions`.
    pub fn accepted_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let filter = ListingFilter {
            extensions: Some(extensions.into_iter().map(Into::into).collect()),
            ..self.listing_filter()
        };
        self.browser = self.browser.with_filter(filter);
        self
    }

    pub fn hidden_files(mut self, show_hidden: bool) -> Self {
        let filter = ListingFilter {
            show_hidden,
            ..self.listing_filter()
        };
        self.browser = self.browser.with_filter(filter);
        self
    }

    fn listing_filter(&self) -> ListingFilter {
        self.browser.filter().clone()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn default_files(mut self, files: Vec<String>) -> Self {
        self.files.set_internal(files);
        self
    }

    /// Caller-owned selection.
    pub fn files(mut self, files: Vec<String>) -> Self {
        self.files.set_controlled(Some(files));
        self
    }

    pub fn set_files(&mut self, files: Option<Vec<String>>) {
        self.files.set_controlled(files);
    }

    /// Called with the requested selection on every change.
    pub fn on_files_change(mut self, handler: impl FnMut(&Vec<String>) + Send + 'static) -> Self {
        self.files.set_on_change(handler);
        self
    }

    pub fn selected_files(&self) -> &[String] {
        self.files.value()
    }

    pub fn is_browsing(&self) -> bool {
        self.is_browsing
    }

    pub fn browser(&self) -> &FileBrowser {
        &self.browser
    }

    fn mode(&self) -> SelectionMode {
        if self.has_multiple {
            SelectionMode::Multiple {
                max_files: self.max_files,
            }
        } else {
            SelectionMode::Single
        }
    }

    /// Open the browser on the current directory.
    pub fn open_browser(&mut self) -> bool {
        if self.is_disabled {
            return false;
        }
        self.browser.load();
        self.is_browsing = true;
        true
    }

    pub fn close_browser(&mut self) {
        self.is_browsing = false;
    }

    /// Activate the highlighted browser entry.
    pub fn activate(&mut self) -> bool {
        let selected = self.files.value().clone();
        match self.browser.activate(&selected, self.mode()) {
            Activation::Navigated => true,
            Activation::Selected { files, close } => {
                self.files.update(files);
                if close {
                    self.is_browsing = false;
                }
                true
            }
            Activation::Unchanged => false,
        }
    }

    /// Drop the highlighted file from the selection (multi mode only).
    pub fn remove_highlighted(&mut self) -> bool {
        if !self.has_multiple {
            return false;
        }
        match self.browser.remove_current(self.files.value()) {
            Some(files) => {
                self.files.update(files);
                true
            }
            None => false,
        }
    }
}

impl Widget for FileInput {
    fn handle_key(&mut self, key: Key) -> EventResult {
        self.on_key(key)
    }

    fn element(&self, theme: &Theme) -> Element {
        self.render(theme)
    }
}
