use crate::{components::picker, keymap, theme::Theme};
use crossterm::event::{self, Event, KeyEventKind};
use hop_core::{Selector, SelectorEvent, Step};
use ratatui::DefaultTerminal;

/// What the interactive phase decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Checkout(String),
    Cancelled,
}

/// Run the selection loop until the user confirms or cancels. One
/// cooperative thread: draw, block on the next terminal event, feed it to
/// the engine, repeat. There is no background work, so a plain blocking
/// read is all the loop needs.
pub fn run(terminal: &mut DefaultTerminal, selector: &mut Selector) -> anyhow::Result<Selection> {
    let theme = Theme::default();

    let size = terminal.size()?;
    selector.handle(SelectorEvent::Resize {
        page_size: picker::page_size(size.height),
    });

    loop {
        terminal.draw(|f| picker::draw(f, f.area(), selector, &theme))?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(sel_event) = keymap::resolve(key) {
                    match selector.handle(sel_event) {
                        Step::Continue => {}
                        Step::Confirmed(branch) => {
                            log::info!("confirmed branch {branch}");
                            return Ok(Selection::Checkout(branch));
                        }
                        Step::Cancelled => return Ok(Selection::Cancelled),
                    }
                }
            }
            Event::Resize(_, height) => {
                selector.handle(SelectorEvent::Resize {
                    page_size: picker::page_size(height),
                });
            }
            _ => {}
        }
    }
}
