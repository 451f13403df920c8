//! Ordered row of four cells and its focus progression
//!
//! The row is always in one of five states, parameterised by `k`, the length
//! of the filled prefix. Cells `0..k` hold digits, cells `k..4` are empty, and
//! the only focusable cell is `k` while `k < 4`. At `k == 4` the row is
//! complete and no cell accepts input until something is cleared or the row
//! is reset.

use tracing::{debug, trace};

use crate::cell::{Cell, CellEvent};
use crate::pin::{Pin, PIN_LENGTH};

const LAST: usize = PIN_LENGTH - 1;

/// A single input event aimed at one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Insert a character into a cell
    Digit { cell: usize, ch: char },
    /// Erase a cell
    Clear { cell: usize },
}

impl InputEvent {
    /// Position within a frame: clears are applied before digits
    pub(crate) fn frame_order(&self) -> u8 {
        match self {
            InputEvent::Clear { .. } => 0,
            InputEvent::Digit { .. } => 1,
        }
    }
}

/// Effect of an input event on the row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTransition {
    /// The event was dropped
    Ignored,
    /// A digit was stored and focus moved forward
    Advanced { filled: usize },
    /// A digit was erased and focus moved back
    Retreated { filled: usize },
    /// The last cell was filled
    Completed,
}

/// The four cells and the focus rule that links them
#[derive(Debug)]
pub struct CellRow {
    cells: [Cell; PIN_LENGTH],
    filled: usize,
}

impl Default for CellRow {
    fn default() -> Self {
        Self::new()
    }
}

impl CellRow {
    /// Create an empty row with the first cell focused
    pub fn new() -> Self {
        let mut row = Self {
            cells: std::array::from_fn(Cell::new),
            filled: 0,
        };
        row.reset();
        row
    }

    /// Clear every cell and return focus to the first one
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
            cell.set_focusable(false);
        }
        self.cells[0].set_focusable(true);
        self.cells[0].request_focus();
        self.filled = 0;
        debug!("Pin boxes reset");
    }

    /// Apply one input event
    pub fn apply(&mut self, event: InputEvent) -> RowTransition {
        match event {
            InputEvent::Digit { cell, ch } => self.insert(cell, ch),
            InputEvent::Clear { cell } => self.erase(cell),
        }
    }

    fn insert(&mut self, index: usize, ch: char) -> RowTransition {
        let Some(cell) = self.cells.get_mut(index) else {
            trace!(index, "Digit for nonexistent cell dropped");
            return RowTransition::Ignored;
        };
        if !cell.is_focusable() {
            trace!(index, "Digit for inert cell dropped");
            return RowTransition::Ignored;
        }
        match cell.accept(ch) {
            Some(CellEvent::Filled { index }) => self.on_filled(index),
            _ => {
                trace!(index, "Non-digit input dropped");
                RowTransition::Ignored
            }
        }
    }

    fn erase(&mut self, index: usize) -> RowTransition {
        // Only the last filled cell can be erased without breaking the prefix
        if self.filled == 0 || index != self.filled - 1 {
            trace!(index, filled = self.filled, "Clear outside filled tail dropped");
            return RowTransition::Ignored;
        }
        match self.cells[index].clear() {
            CellEvent::Emptied { index } => self.on_emptied(index),
            CellEvent::Filled { .. } => RowTransition::Ignored,
        }
    }

    fn on_filled(&mut self, index: usize) -> RowTransition {
        if index != self.filled {
            return RowTransition::Ignored;
        }
        debug!(index, "Pin box filled");
        self.cells[index].set_focusable(false);
        if index < LAST {
            let next = &mut self.cells[index + 1];
            next.set_focusable(true);
            next.request_focus();
            self.filled = index + 1;
            RowTransition::Advanced {
                filled: self.filled,
            }
        } else {
            self.filled = PIN_LENGTH;
            debug!("Pin code entered");
            RowTransition::Completed
        }
    }

    fn on_emptied(&mut self, index: usize) -> RowTransition {
        debug!(index, "Pin box cleared");
        if let Some(next) = self.cells.get_mut(index + 1) {
            next.set_focusable(false);
        }
        let cell = &mut self.cells[index];
        cell.set_focusable(true);
        cell.request_focus();
        self.filled = index;
        RowTransition::Retreated {
            filled: self.filled,
        }
    }

    /// Whether `event` would fill the last cell
    pub(crate) fn would_complete(&self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::Digit { cell, ch } => {
                cell == LAST
                    && self.filled == LAST
                    && self.cells[LAST].is_focusable()
                    && ch.is_ascii_digit()
            }
            InputEvent::Clear { .. } => false,
        }
    }

    /// Length of the filled prefix
    pub fn filled_len(&self) -> usize {
        self.filled
    }

    pub fn is_complete(&self) -> bool {
        self.filled == PIN_LENGTH
    }

    /// Index of the cell holding focus, `None` once the row is complete
    pub fn focused(&self) -> Option<usize> {
        self.cells.iter().position(Cell::has_focus)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The entered PIN, available only when every cell is filled
    pub fn pin(&self) -> Option<Pin> {
        if !self.is_complete() {
            return None;
        }
        let mut digits = ['0'; PIN_LENGTH];
        for (slot, cell) in digits.iter_mut().zip(&self.cells) {
            *slot = cell.digit()?;
        }
        Some(Pin::from_digits(digits))
    }
}
