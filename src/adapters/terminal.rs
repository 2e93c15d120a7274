use crate::domain::ports::SecretPrompter;
use crate::utils::error::{AppError, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};

/// Reads secrets from the controlling terminal with echo switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Continue,
    Submit,
    Abort,
}

fn apply_key(buffer: &mut String, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Continue;
    }

    match key.code {
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Char('c') | KeyCode::Char('d')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            KeyAction::Abort
        }
        KeyCode::Esc => KeyAction::Abort,
        KeyCode::Backspace => {
            buffer.pop();
            KeyAction::Continue
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

fn read_hidden_line() -> io::Result<String> {
    let _raw = RawModeGuard::enable()?;
    let mut buffer = String::new();

    loop {
        if let Event::Key(key) = event::read()? {
            match apply_key(&mut buffer, key) {
                KeyAction::Continue => {}
                KeyAction::Submit => return Ok(buffer),
                KeyAction::Abort => {
                    return Err(io::Error::new(
                        io::ErrorKind::Interrupted,
                        "secret entry cancelled",
                    ))
                }
            }
        }
    }
}

impl SecretPrompter for TerminalPrompter {
    fn prompt_secret(&self, name: &str, message: &str) -> Result<String> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{message}").map_err(AppError::PromptError)?;
        write!(stdout, "{name}: ").map_err(AppError::PromptError)?;
        stdout.flush().map_err(AppError::PromptError)?;

        let secret = read_hidden_line();
        // raw mode swallowed the Enter key's newline
        writeln!(stdout).map_err(AppError::PromptError)?;

        secret.map_err(AppError::PromptError)
    }
}
