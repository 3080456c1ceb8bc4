use crate::checkers::{Change, Move, Square};

/// An entry of the [`History`].
///
/// Records own copies of the pieces involved, so later moves never alter them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Record {
    /// The move played.
    pub played: Move,
    /// What the move did to the board.
    pub change: Change,
    /// The continuation pending before the move.
    pub resumed: Option<Square>,
    /// The continuation pending after the move.
    pub pending: Option<Square>,
}

/// A linear timeline of played moves that can be navigated back and forth.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct History {
    past: Vec<Record>,
    future: Vec<Record>,
}

impl History {
    /// Appends a [`Record`], discarding every record previously undone.
    pub fn push(&mut self, record: Record) {
        self.past.push(record);
        self.future.clear();
    }

    /// Steps back, returning the latest [`Record`] if any.
    pub fn undo(&mut self) -> Option<Record> {
        let record = self.past.pop()?;
        self.future.push(record);
        Some(record)
    }

    /// Steps forward, returning the latest undone [`Record`] if any.
    pub fn redo(&mut self) -> Option<Record> {
        let record = self.future.pop()?;
        self.past.push(record);
        Some(record)
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// The records that can be undone, oldest first.
    pub fn past(&self) -> &[Record] {
        &self.past
    }

    /// The records that can be redone, latest undone first.
    pub fn future(&self) -> impl DoubleEndedIterator<Item = &Record> + ExactSizeIterator {
        self.future.iter().rev()
    }
}
