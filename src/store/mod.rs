//! Board state store: holds the current snapshot and applies mutations.
//!
//! All access is single-threaded and serialized by the hosting event loop;
//! there is exactly one writer, so a `RefCell` around the snapshot is the
//! whole synchronization story. Every mutation reads the previous snapshot,
//! computes a new one through the pure transitions on [`Board`], and
//! replaces it wholesale. Observers never see a half-applied update.

use crate::domain::board::{Board, ColumnId};
use crate::domain::seed::{demo_columns, ColumnSeed};
use crate::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

pub mod context;

/// Request to relocate a card from one column to a different column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCard {
    pub start_column_id: ColumnId,
    pub finish_column_id: ColumnId,
    pub item_index_in_start_column: usize,
    /// Accepted for signature parity with drop-target collaborators; the
    /// destination position is always the end of the column, so this field
    /// has no effect.
    pub item_index_in_finish_column: Option<usize>,
}

/// Cleanup handle returned by [`BoardStore::register_card`]
///
/// Card creation is an extension point that is not implemented yet; the
/// handle performs no work today, but callers should hold it and release it
/// on teardown so they pick up the future contract unchanged.
#[must_use = "hold the registration and release it on teardown"]
#[derive(Debug)]
pub struct CardRegistration {
    _reserved: (),
}

impl CardRegistration {
    /// Unregisters the card. Currently a no-op.
    pub fn release(self) {}
}

/// Owns the current board snapshot and provides the mutation operations
///
/// Reads always go through the cell, so a handler installed long ago (for
/// example the drop-event subscription, which lives for the whole session)
/// still classifies against the latest committed snapshot rather than a
/// value captured at subscription time.
#[derive(Debug)]
pub struct BoardStore {
    current: RefCell<Board>,
}

impl BoardStore {
    /// Creates a store seeded with the given columns
    pub fn new(seed: Vec<ColumnSeed>) -> Result<Rc<Self>> {
        Ok(Rc::new(Self {
            current: RefCell::new(Board::from_seed(seed)?),
        }))
    }

    /// Creates a store seeded with the demo dataset
    pub fn demo() -> Rc<Self> {
        Self::new(demo_columns()).expect("demo seed has unique column ids")
    }

    /// Returns the most recently committed snapshot
    ///
    /// Cheap: the snapshot is a vector of shared column handles. Never
    /// fails and never observes a partially applied mutation.
    pub fn snapshot(&self) -> Board {
        self.current.borrow().clone()
    }

    /// Repositions a card within a single column
    ///
    /// Remove-then-insert semantics; see [`Board::with_reordered_card`].
    /// An unknown column or out-of-range start index is a silent no-op.
    pub fn reorder_card(&self, column_id: &ColumnId, start_index: usize, finish_index: usize) {
        let next = self
            .current
            .borrow()
            .with_reordered_card(column_id, start_index, finish_index);
        log::debug!("reorder in {column_id}: {start_index} -> {finish_index}");
        self.publish(next);
    }

    /// Relocates a card to the end of a different column
    ///
    /// Same-column requests are a no-op here; callers route those through
    /// [`BoardStore::reorder_card`]. A missing column or out-of-range index
    /// leaves the snapshot unchanged.
    pub fn move_card(&self, request: MoveCard) {
        if request.start_column_id == request.finish_column_id {
            log::trace!(
                "move within {} ignored; same-column drops reorder instead",
                request.start_column_id
            );
            return;
        }

        let next = self.current.borrow().with_moved_card(
            &request.start_column_id,
            &request.finish_column_id,
            request.item_index_in_start_column,
        );
        log::debug!(
            "move card {} from {} to {}",
            request.item_index_in_start_column,
            request.start_column_id,
            request.finish_column_id
        );
        self.publish(next);
    }

    /// Registers a new card. Stubbed: no state change occurs.
    pub fn register_card(&self) -> CardRegistration {
        CardRegistration { _reserved: () }
    }

    fn publish(&self, next: Board) {
        *self.current.borrow_mut() = next;
    }
}
