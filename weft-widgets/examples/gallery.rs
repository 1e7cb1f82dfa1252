//! Interactive widget gallery.
//!
//! Tab moves between widgets (when the focused widget ignores it), `q`
//! quits. Rendering is a plain-text dump of each element tree, so this is
//! for poking at behaviour, not for looks.
//!
//! Logs go to `gallery.log`.

use std::io::{self, Stdout, Write};
use std::panic;
use std::time::Duration;

use chrono::Local;
use crossterm::{
    cursor::MoveTo,
    execute, queue,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use futures::StreamExt;
use log::LevelFilter;
use weft_widgets::expansion::TreeNode;
use weft_widgets::logging::init_file_logger;
use weft_widgets::prelude::*;
use weft_widgets::wakeup;

struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            original_hook(info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(Self { stdout })
    }

    fn draw(&mut self, title: &str, body: &Element, toasts: &Element) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        write!(self.stdout, "== {title} ==  (Tab: next widget, q: quit)\r\n\r\n")?;
        for line in body.plain_text().lines() {
            write!(self.stdout, "{line}\r\n")?;
        }
        for line in toasts.plain_text().lines() {
            write!(self.stdout, "{line}\r\n")?;
        }
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn build_widgets(wakeup: &WakeupHandle) -> Vec<(&'static str, Box<dyn Widget>)> {
    let tree = Tree::new(vec![
        TreeNode::new("src", "src").children([
            TreeNode::new("lib", "lib.rs"),
            TreeNode::new("widgets", "widgets").child(TreeNode::new("tree", "tree.rs")),
        ]),
        TreeNode::new("cargo", "Cargo.toml"),
    ]);

    let accordion = Accordion::new(vec![
        AccordionItem::text("about", "About", "Stateful terminal widgets."),
        AccordionItem::text("keys", "Keys", "Up/Down to move, Enter to toggle."),
        AccordionItem::text("locked", "Locked", "Never opens.").disabled(true),
    ])
    .wakeup(wakeup.clone());

    let search = SearchInput::new(vec![
        SearchResult::new("apple", "Apple").category("Fruit"),
        SearchResult::new("banana", "Banana").category("Fruit"),
        SearchResult::new("carrot", "Carrot").category("Vegetable"),
    ])
    .grouping(true);

    let menu = Menu::new(vec![
        MenuItem::new("new", "New file"),
        MenuItem::new("open", "Open..."),
        MenuItem::separator("sep"),
        MenuItem::new("quit", "Quit").disabled(true),
    ]);

    let mut widgets: Vec<(&'static str, Box<dyn Widget>)> = Vec::new();
    widgets.push(("Tree", Box::new(tree)));
    widgets.push(("Accordion", Box::new(accordion)));
    widgets.push(("SearchInput", Box::new(search)));
    widgets.push(("Menu", Box::new(menu)));
    widgets.push(("DatePicker", Box::new(DatePicker::new().today(Local::now().date_naive()))));
    widgets.push(("Slider", Box::new(Slider::new().label("Volume").min_max_labels(true))));
    widgets.push(("Switch", Box::new(Switch::new().label("Dark mode").state_text(true))));
    widgets.push((
        "CodeBlock",
        Box::new(
            CodeBlock::new("fn main() {\n    let greeting = \"hello\"; // say it\n}")
                .title("main.rs")
                .language("rust")
                .syntax_highlight(true),
        ),
    ));
    widgets
}

#[tokio::main]
async fn main() -> io::Result<()> {
    init_file_logger("gallery.log", LevelFilter::Debug)?;
    log::info!("gallery starting");

    let (tx, mut rx) = wakeup::channel();
    let handle = WakeupHandle::new();
    handle.install(tx);

    let theme = default_theme();
    let mut widgets = build_widgets(&handle);
    let mut toasts = ToastManager::new()
        .position(ToastPosition::Bottom)
        .wakeup(handle.clone());
    let mut focus = 0;

    let mut terminal = TerminalGuard::new()?;
    let mut keys = std::pin::pin!(weft::key_stream());

    loop {
        let (title, widget) = &widgets[focus];
        terminal.draw(title, &widget.element(&theme), &toasts.element(&theme))?;

        tokio::select! {
            key = keys.next() => {
                let Some(key) = key else { break };
                let key = key?;
                let (title, widget) = &mut widgets[focus];
                if widget.handle_key(key).is_handled() {
                    continue;
                }
                match key {
                    Key::Char('q') => break,
                    Key::Tab => {
                        focus = (focus + 1) % widgets.len();
                        toasts.push(
                            Toast::new(format!("Focused {}", widgets[focus].0))
                                .duration(Some(Duration::from_secs(2))),
                        );
                    }
                    other => log::debug!("{title} ignored {other:?}"),
                }
            }
            Some(()) = rx.recv() => {
                rx.drain();
            }
        }
    }

    log::info!("gallery exiting");
    Ok(())
}
