//! Crossterm-backed input and display.

use std::io::{self, Stdout, Write};
use std::iter;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{QueueableCommand, cursor, terminal};
use slaprs::{BoardSnapshot, DisplaySink, InputSource, Key, Notice, Reaction};

/// Raw mode and the alternate screen, held for as long as this value lives.
///
/// Dropping it restores the terminal on every exit path.
pub struct TerminalSession {
    stdout: Stdout,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.queue(terminal::EnterAlternateScreen)?;
        stdout.queue(cursor::Hide)?;
        stdout.flush()?;
        Ok(Self { stdout })
    }

    fn exit(&mut self) -> io::Result<()> {
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Nothing useful can be done with a failure here.
        let _ = self.exit();
    }
}

fn map_key(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        KeyCode::Char(c) => Key::from_char(c),
        _ => Key::Other,
    }
}

fn as_press(event: Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

/// Settles a slap window from events stamped with the time since it opened.
///
/// The first key press before `deadline` wins the window. Anything else,
/// including a press stamped at or after the deadline, leaves it timed out.
fn window_reaction<E>(events: E, deadline: Duration) -> io::Result<Reaction>
where
    E: IntoIterator<Item = io::Result<(Duration, Event)>>,
{
    for item in events {
        let (elapsed, event) = item?;
        if elapsed >= deadline {
            break;
        }
        if let Some(key) = as_press(event) {
            return Ok(Reaction::Pressed {
                key: map_key(key),
                elapsed,
            });
        }
    }
    Ok(Reaction::TimedOut)
}

/// Reads keys from the terminal.
#[derive(Debug, Default)]
pub struct Keyboard;

impl InputSource for Keyboard {
    type Error = io::Error;

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = as_press(event::read()?) {
                return Ok(map_key(key));
            }
        }
    }

    fn read_key_with_deadline(&mut self, deadline: Duration) -> io::Result<Reaction> {
        let start = Instant::now();
        let events = iter::from_fn(|| {
            let remaining = deadline.checked_sub(start.elapsed())?;
            match event::poll(remaining) {
                Ok(true) => Some(event::read().map(|event| (start.elapsed(), event))),
                Ok(false) => None,
                Err(err) => Some(Err(err)),
            }
        });
        window_reaction(events, deadline)
    }

    fn discard_pending(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        Ok(())
    }
}

/// Writes the board and notices to the terminal.
pub struct Screen {
    stdout: Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    fn write_lines(&mut self, text: &str) -> io::Result<()> {
        // Raw mode does not translate "\n" into a carriage return.
        for line in text.lines() {
            write!(self.stdout, "{line}\r\n")?;
        }
        Ok(())
    }
}

impl DisplaySink for Screen {
    type Error = io::Error;

    fn render(&mut self, board: &BoardSnapshot) -> io::Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.write_lines(&board.to_string())?;
        self.stdout.flush()
    }

    fn notify(&mut self, notice: &Notice) -> io::Result<()> {
        if matches!(notice, Notice::StartPrompt | Notice::Instructions) {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
            self.stdout.queue(cursor::MoveTo(0, 0))?;
        } else {
            write!(self.stdout, "\r\n")?;
        }
        self.write_lines(&notice.to_string())?;
        self.stdout.flush()
    }

    fn pause(&mut self, duration: Duration) -> io::Result<()> {
        thread::sleep(duration);
        Ok(())
    }
}
