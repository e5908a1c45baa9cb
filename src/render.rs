use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::grid::Grid;
use crate::sim::{Clock, Renderer, SimHandle};

const LIVE: &str = "@ ";
const DEAD: &str = ". ";

/// Raw-mode + alternate-screen session. Restores the terminal on drop so a
/// panic or quit leaves the shell usable.
pub(crate) struct TermGuard {
    out: Stdout,
}

impl TermGuard {
    pub(crate) fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            EnterAlternateScreen,
            Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        Ok(Self { out })
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Writes one frame per generation: cursor home, then one line per row, two
/// characters per cell, overwriting the previous frame in place.
pub(crate) struct TermRenderer<W: Write> {
    out: W,
}

impl TermRenderer<Stdout> {
    pub(crate) fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Renderer for TermRenderer<W> {
    fn frame(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;

        let mut line = String::with_capacity(grid.width() * LIVE.len());
        for row in 0..grid.height() {
            line.clear();
            for col in 0..grid.width() {
                line.push_str(if grid.get(row, col) == 1 { LIVE } else { DEAD });
            }
            queue!(self.out, Print(&line), Print("\r\n"))?;
        }

        self.out.flush()
    }
}

/// Inter-generation delay. Waits out the interval by polling the event queue
/// so quit keys are seen during the pause; the requested stop takes effect at
/// the simulator's next iteration boundary, never mid-wait.
pub(crate) struct TickClock {
    handle: SimHandle,
}

impl TickClock {
    pub(crate) fn new(handle: SimHandle) -> Self {
        Self { handle }
    }
}

fn is_quit(code: KeyCode, mods: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(code, KeyCode::Char('c') | KeyCode::Char('C'))
            && mods.contains(KeyModifiers::CONTROL))
}

impl Clock for TickClock {
    fn pause(&mut self, interval: Duration) -> io::Result<()> {
        let deadline = Instant::now() + interval;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return Ok(());
            }
            if event::poll(left)? {
                if let Event::Key(k) = event::read()? {
                    if k.kind == KeyEventKind::Press && is_quit(k.code, k.modifiers) {
                        self.handle.stop();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_homes_cursor_and_prints_rows() {
        let mut grid = Grid::dead(3, 2).unwrap();
        grid.set(0, 1, 1);

        let mut renderer = TermRenderer { out: Vec::new() };
        renderer.frame(&grid).unwrap();

        let text = String::from_utf8(renderer.out).unwrap();
        assert!(text.starts_with("\x1b[1;1H"));
        assert!(text.contains(". @ . \r\n"));
        assert!(text.contains(". . . \r\n"));
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(is_quit(KeyCode::Esc, KeyModifiers::NONE));
        assert!(is_quit(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!is_quit(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!is_quit(KeyCode::Char('x'), KeyModifiers::NONE));
    }
}
