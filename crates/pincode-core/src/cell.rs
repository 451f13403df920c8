//! Single-digit input slot

use std::fmt;

use zeroize::Zeroize;

/// Glyph shown in place of an entered digit
pub const MASK_GLYPH: char = '●';

/// Fill transition reported by a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEvent {
    /// The cell now holds a digit
    Filled { index: usize },
    /// The cell no longer holds a digit
    Emptied { index: usize },
}

/// Background artifact a renderer draws for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellBackground {
    Empty,
    Filled,
}

/// One of the four digit slots
pub struct Cell {
    index: usize,
    content: Option<char>,
    focusable: bool,
    focused: bool,
}

impl Cell {
    /// Create an empty, inert cell at the given position
    pub fn new(index: usize) -> Self {
        Self {
            index,
            content: None,
            focusable: false,
            focused: false,
        }
    }

    /// Position of this cell within its row
    pub fn index(&self) -> usize {
        self.index
    }

    /// Store a digit, replacing any previous one.
    ///
    /// Returns `None` and leaves the cell unchanged for anything other
    /// than `'0'..='9'`.
    pub fn accept(&mut self, ch: char) -> Option<CellEvent> {
        if !ch.is_ascii_digit() {
            return None;
        }
        self.content.zeroize();
        self.content = Some(ch);
        Some(CellEvent::Filled { index: self.index })
    }

    /// Drop the stored digit
    pub fn clear(&mut self) -> CellEvent {
        self.content.zeroize();
        self.content = None;
        CellEvent::Emptied { index: self.index }
    }

    pub fn is_filled(&self) -> bool {
        self.content.is_some()
    }

    pub(crate) fn digit(&self) -> Option<char> {
        self.content
    }

    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Toggle whether the cell may receive input. Making a cell inert also
    /// drops its focus.
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
        if !focusable {
            self.focused = false;
        }
    }

    /// Take input focus. Refused for inert cells.
    pub fn request_focus(&mut self) -> bool {
        self.focused = self.focusable;
        self.focused
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn background(&self) -> CellBackground {
        if self.is_filled() {
            CellBackground::Filled
        } else {
            CellBackground::Empty
        }
    }

    /// The glyph a renderer shows for this cell, never the digit itself
    pub fn masked(&self) -> Option<char> {
        self.content.map(|_| MASK_GLYPH)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("index", &self.index)
            .field("filled", &self.is_filled())
            .field("focusable", &self.focusable)
            .field("focused", &self.focused)
            .finish()
    }
}

impl Drop for Cell {
    fn drop(&mut self) {
        self.content.zeroize();
    }
}
