//! Terminal window and keyboard, backed by crossterm
//!
//! One terminal character is one grid cell. Both services share a
//! [`CloseSignal`] so a quit key read by the keyboard closes the window.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::CloseSignal;
use crate::error::Result;
use crate::services::{InputService, RenderService};
use crate::settings::Settings;
use crate::sim::{Actor, Point};

/// Map a pixel position to a terminal cell (column, row)
pub fn cell_of(pos: Point, cell_size: i32) -> Option<(u16, u16)> {
    let col = u16::try_from(pos.x.div_euclid(cell_size)).ok()?;
    let row = u16::try_from(pos.y.div_euclid(cell_size)).ok()?;
    Some((col, row))
}

/// Reads arrow keys (or a/d) once per frame
pub struct KeyboardService {
    cell_size: i32,
    closed: CloseSignal,
}

impl KeyboardService {
    pub fn new(cell_size: i32, closed: CloseSignal) -> Self {
        Self { cell_size, closed }
    }
}

impl InputService for KeyboardService {
    fn get_direction(&mut self) -> Result<Point> {
        let mut dx = 0;
        // Drain everything queued since the last frame; the latest key wins
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match key.code {
                KeyCode::Left | KeyCode::Char('a') => dx = -1,
                KeyCode::Right | KeyCode::Char('d') => dx = 1,
                KeyCode::Esc | KeyCode::Char('q') => self.closed.set(true),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.closed.set(true)
                }
                _ => {}
            }
        }
        Ok(Point::new(dx * self.cell_size, 0))
    }
}

/// Draws actors into the terminal's alternate screen at a fixed frame rate
pub struct VideoService {
    width: i32,
    height: i32,
    cell_size: i32,
    frame: Duration,
    next_frame: Option<Instant>,
    out: Stdout,
    open: bool,
    /// Raw mode is on and must be undone, even if opening failed halfway
    raw: bool,
    closed: CloseSignal,
}

impl VideoService {
    pub fn new(settings: &Settings, closed: CloseSignal) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            cell_size: settings.cell_size,
            frame: Duration::from_secs_f64(1.0 / f64::from(settings.frame_rate)),
            next_frame: None,
            out: io::stdout(),
            open: false,
            raw: false,
            closed,
        }
    }

    /// Whether closing still has terminal state to undo
    pub fn needs_restore(&self) -> bool {
        self.raw
    }

    fn restore(&mut self) -> io::Result<()> {
        self.open = false;
        self.raw = false;
        execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

impl RenderService for VideoService {
    fn open_window(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        execute!(self.out, EnterAlternateScreen, cursor::Hide)?;

        let (cols, rows) = terminal::size()?;
        let need_cols = self.width / self.cell_size;
        let need_rows = self.height / self.cell_size;
        if i32::from(cols) < need_cols || i32::from(rows) < need_rows {
            log::warn!(
                "Terminal is {}x{} but the playfield needs {}x{}; edges will be clipped",
                cols,
                rows,
                need_cols,
                need_rows
            );
        }

        self.closed.set(false);
        self.open = true;
        self.next_frame = None;
        Ok(())
    }

    fn close_window(&mut self) -> Result<()> {
        if self.raw {
            self.restore()?;
        }
        Ok(())
    }

    fn is_window_open(&self) -> bool {
        self.open && !self.closed.get()
    }

    fn get_width(&self) -> i32 {
        self.width
    }

    fn get_height(&self) -> i32 {
        self.height
    }

    fn clear_buffer(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    fn draw_actor(&mut self, actor: &Actor) -> Result<()> {
        let Some((col, row)) = cell_of(actor.position(), self.cell_size) else {
            return Ok(());
        };
        let c = actor.color();
        queue!(
            self.out,
            cursor::MoveTo(col, row),
            SetForegroundColor(TermColor::Rgb { r: c.r, g: c.g, b: c.b }),
            Print(actor.text())
        )?;
        Ok(())
    }

    fn flush_buffer(&mut self) -> Result<()> {
        queue!(self.out, ResetColor)?;
        self.out.flush()?;

        let now = Instant::now();
        let due = self.next_frame.unwrap_or(now);
        if due > now {
            std::thread::sleep(due - now);
        }
        self.next_frame = Some(due.max(now) + self.frame);
        Ok(())
    }
}

impl Drop for VideoService {
    fn drop(&mut self) {
        if self.raw {
            let _ = self.restore();
        }
    }
}
