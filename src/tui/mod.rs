//! TUI (Text User Interface) hosting the glow chat screen.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;
mod text;

pub use app::App;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use tokio::runtime::Handle;

use crate::core::clock::{Clock, SystemClock};
use crate::core::config::Config;
use crate::core::screen::GlowChatScreen;
use crate::core::ticker::Ticker;

use draw::draw;
use handlers::{HandleResult, set_cursor_shape};

/// Key bindings for `--help`.
pub fn key_help() -> String {
    format!(
        "KEYS:\n  {:<16}Toggle the glow\n  {:<16}Scroll messages\n  {:<16}Quit\n",
        shortcuts::labels::TOGGLE,
        shortcuts::labels::SCROLL,
        shortcuts::labels::QUIT,
    )
}

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    fn new(mouse: bool) -> Self {
        Self { mouse }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        if self.mouse {
            let _ = execute!(io::stdout(), crossterm::event::DisableMouseCapture);
            set_cursor_shape(false);
        }
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

/// Run the TUI loop until the user quits. Frame ticks come from a task spawned on `handle`.
pub fn run(config: &Config, handle: Handle) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new(config.mouse);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    if config.mouse {
        execute!(stdout, crossterm::event::EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let period = Duration::from_millis(config.frame_interval_ms);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let mut screen = GlowChatScreen::new(clock, config.variant);
    screen.mount_with_ticker(Ticker::start(&handle, period));
    let mut app = App::new(screen);
    log::info!(
        "TUI started ({} glow, {} ms frames)",
        app.screen.variant(),
        config.frame_interval_ms
    );

    let mut dirty = true;
    loop {
        if app.screen.poll() || dirty {
            terminal.draw(|f| draw(f, &mut app, f.area()))?;
            dirty = false;
        }

        if event::poll(period)? {
            match event::read()? {
                Event::Key(key) => {
                    if handlers::handle_key(key, &mut app) == HandleResult::Break {
                        break;
                    }
                    dirty = true;
                }
                Event::Mouse(mouse) => {
                    handlers::handle_mouse(mouse, &mut app);
                    dirty = true;
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }
    }

    app.screen.unmount();
    log::info!("TUI stopped");
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::key_help;

    #[test]
    fn key_help_lists_every_binding() {
        let help = key_help();
        assert!(help.contains("Enter/Space/a"));
        assert!(help.contains("q/Esc/Ctrl+C"));
        assert!(help.contains("Scroll"));
    }
}
