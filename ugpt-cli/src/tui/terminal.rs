//! Terminal setup and cleanup for the ratatui front end

use crossterm::{
    event::{
        KeyCode, KeyEvent, KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

// Set when the terminal accepted keyboard enhancement flags and they must be popped.
static ENHANCED_KEYS: AtomicBool = AtomicBool::new(false);

/// Initialize terminal for TUI mode
///
/// Keyboard enhancement is requested where supported so Shift+Enter can be
/// told apart from Enter.
pub fn init_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if supports_keyboard_enhancement().unwrap_or(false) {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        ENHANCED_KEYS.store(true, Ordering::SeqCst);
    }
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore terminal to normal mode
pub fn restore_terminal() -> io::Result<()> {
    if ENHANCED_KEYS.swap(false, Ordering::SeqCst) {
        execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Navigation action from key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Up,
    Down,
    Select,
    Back,
    ForceQuit, // q or Ctrl+Q
    None,
}

impl From<KeyEvent> for NavAction {
    fn from(key: KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            return NavAction::ForceQuit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => NavAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavAction::Down,
            KeyCode::Enter | KeyCode::Char(' ') => NavAction::Select,
            KeyCode::Esc | KeyCode::Backspace => NavAction::Back,
            KeyCode::Char('q') => NavAction::ForceQuit,
            _ => NavAction::None,
        }
    }
}

/// Ctrl+Q quits from every screen
pub fn is_force_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q')
}
