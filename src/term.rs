use crate::Cell;
use crate::grid::{GRID_HEIGHT, GRID_WIDTH};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

pub const BOARD_BACKGROUND_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const BORDER_COLOR: Color = Color::Rgb { r: 93, g: 216, b: 228 };
pub const APPLE_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };

// Terminal character cells are roughly twice as tall as they are wide, so
// one grid cell spans two columns to keep the board square-ish
const CELL_COLS: u16 = 2;

/// Thin wrapper around the terminal: a fixed-size drawing surface plus a
/// per-tick queue of key events. All drawing is queued and only hits the
/// screen on `present()`.
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) {
        let (cols, rows) = terminal::size().expect("Error reading size.");
        let (needed_cols, needed_rows) = (GRID_WIDTH as u16 * CELL_COLS, GRID_HEIGHT as u16);
        if cols < needed_cols || rows < needed_rows {
            panic!(
                "Terminal too small: need {}x{} characters, got {}x{}.",
                needed_cols, needed_rows, cols, rows
            );
        }

        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
        self.set_cursor_blink(false);
    }

    pub fn restore(&mut self) {
        self.set_raw_mode(false);
        self.set_cursor_visibility(true);
        self.set_cursor_blink(true);
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    pub fn clear(&mut self) {
        queue!(
            self.stdout,
            style::SetBackgroundColor(BOARD_BACKGROUND_COLOR),
            terminal::Clear(ClearType::All)
        ).expect("Error clearing.");
    }

    /// Draws one grid cell as a filled block with a contrasting border: the
    /// fill color as background, the border color as the bracket glyphs.
    pub fn draw_cell(&mut self, cell: Cell, fill: Color) {
        let (x, y) = cell;
        queue!(
            self.stdout,
            cursor::MoveTo(x as u16 * CELL_COLS, y as u16),
            style::SetBackgroundColor(fill),
            style::SetForegroundColor(BORDER_COLOR),
            style::Print("[]"),
            style::ResetColor
        ).expect("Error drawing cell.");
    }

    pub fn present(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_blink(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::EnableBlinking)
        } else {
            execute!(self.stdout, cursor::DisableBlinking)
        };

        res.expect("Error setting cursor blink.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}
