use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clock_render::{ClockController, ControlAction, TimeSource};
use crossterm::cursor::{Hide, MoveTo, MoveToNextLine, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use log::debug;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

const HELP: &str = "[c] mode  [h] 12/24h  [s] seconds  [+/-] size  [q] quit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    Control(ControlAction),
}

pub fn key_command(key: &KeyEvent) -> Option<KeyCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyCommand::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyCommand::Quit,
        KeyCode::Char('c') | KeyCode::Char('m') => KeyCommand::Control(ControlAction::ToggleMode),
        KeyCode::Char('h') => KeyCommand::Control(ControlAction::ToggleHourFormat),
        KeyCode::Char('s') => KeyCommand::Control(ControlAction::ToggleSeconds),
        KeyCode::Char('+') | KeyCode::Char('=') => KeyCommand::Control(ControlAction::ScaleUp),
        KeyCode::Char('-') | KeyCode::Char('_') => KeyCommand::Control(ControlAction::ScaleDown),
        KeyCode::Char(digit @ '1'..='5') => {
            KeyCommand::Control(ControlAction::SetScale(digit as usize - '0' as usize))
        },
        _ => return None,
    };

    Some(command)
}

/// Runs the live clock on the alternate screen until the user quits.
pub fn run<S: TimeSource>(controller: &mut ClockController<S>) -> Result<()> {
    let mut stdout = io::stdout();

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = terminal::disable_raw_mode();
        return Err(err).context("failed to enter alternate screen");
    }

    let result = event_loop(controller, &mut stdout);

    let restored =
        execute!(stdout, Show, LeaveAlternateScreen).and_then(|()| terminal::disable_raw_mode());

    result?;
    restored.context("failed to restore terminal")
}

fn event_loop<S: TimeSource, W: Write>(
    controller: &mut ClockController<S>,
    out: &mut W,
) -> Result<()> {
    let mut next_tick = Instant::now();

    loop {
        let now = Instant::now();
        if now >= next_tick {
            if let Some(frame) = controller.tick() {
                draw(out, frame)?;
            }
            next_tick = now + TICK_INTERVAL;
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if !event::poll(timeout).context("failed to poll terminal events")? {
            continue;
        }

        match event::read().context("failed to read terminal event")? {
            Event::Key(key) => match key_command(&key) {
                Some(KeyCommand::Quit) => return Ok(()),
                Some(KeyCommand::Control(action)) => {
                    if controller.apply(action) {
                        if let Some(frame) = controller.tick() {
                            draw(out, frame)?;
                        }
                    }
                },
                None => (),
            },
            Event::Resize(columns, rows) => {
                debug!("terminal resized to {columns}x{rows}");
                controller.invalidate();
                if let Some(frame) = controller.tick() {
                    draw(out, frame)?;
                }
            },
            _ => (),
        }
    }
}

fn draw<W: Write>(out: &mut W, frame: &str) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in frame.lines() {
        queue!(out, Print(line), MoveToNextLine(1))?;
    }
    queue!(out, MoveToNextLine(1), Print(HELP))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(key_command(&press(KeyCode::Char('q'))), Some(KeyCommand::Quit));
        assert_eq!(key_command(&press(KeyCode::Esc)), Some(KeyCommand::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_command(&ctrl_c), Some(KeyCommand::Quit));
    }

    #[test]
    fn option_keys() {
        assert_eq!(
            key_command(&press(KeyCode::Char('c'))),
            Some(KeyCommand::Control(ControlAction::ToggleMode))
        );
        assert_eq!(
            key_command(&press(KeyCode::Char('h'))),
            Some(KeyCommand::Control(ControlAction::ToggleHourFormat))
        );
        assert_eq!(
            key_command(&press(KeyCode::Char('s'))),
            Some(KeyCommand::Control(ControlAction::ToggleSeconds))
        );
        assert_eq!(
            key_command(&press(KeyCode::Char('+'))),
            Some(KeyCommand::Control(ControlAction::ScaleUp))
        );
        assert_eq!(
            key_command(&press(KeyCode::Char('-'))),
            Some(KeyCommand::Control(ControlAction::ScaleDown))
        );
        assert_eq!(
            key_command(&press(KeyCode::Char('4'))),
            Some(KeyCommand::Control(ControlAction::SetScale(4)))
        );
        assert_eq!(key_command(&press(KeyCode::Char('9'))), None);
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_command(&release), None);
    }

    #[test]
    fn draw_writes_every_line_and_help() {
        let mut out = Vec::new();
        draw(&mut out, "ab\ncd").unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("ab"));
        assert!(written.contains("cd"));
        assert!(written.ends_with(HELP));
    }
}
