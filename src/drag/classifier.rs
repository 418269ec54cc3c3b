//! Classifies completed drops into board operations.
//!
//! One subscription, installed for the life of the owning scope, reads each
//! drop event and decides between a same-column reorder and a cross-column
//! move. Every malformed or degenerate event resolves to "nothing to do";
//! no failure propagates back to the gesture bridge.

use crate::domain::board::{Board, ColumnId};
use crate::drag::event::{DropEvent, CARD_KIND};
use crate::drag::monitor::{DragMonitor, Subscription};
use crate::store::{BoardStore, MoveCard};
use std::rc::Rc;

/// Board operation derived from a drop event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    Reorder {
        column_id: ColumnId,
        start_index: usize,
        finish_index: usize,
    },
    Move(MoveCard),
}

/// Decides what a drop event means against the given snapshot
///
/// Returns `None` for every event that calls for no state change: no drop
/// target, a non-card draggable, a negative source index, a degenerate
/// same-column interaction.
///
/// Same-column drops use a coarse two-bucket policy rather than the drop
/// geometry: cards dragged from the front half go to the last position,
/// cards from the back half go to the front. A known simplification of the
/// interaction design, kept as-is.
pub fn classify(board: &Board, event: &DropEvent) -> Option<DropAction> {
    let target = event.first_target()?;
    if event.source.data.kind != CARD_KIND {
        log::trace!("drop ignored: source kind {:?}", event.source.data.kind);
        return None;
    }

    let source_column_id = &event.source.data.column_id;
    let target_column_id = &target.column_id;
    if event.source.data.card_index < 0 {
        log::trace!("drop ignored: negative card index from {source_column_id}");
        return None;
    }
    let card_index = event.source.data.card_index as usize;

    if source_column_id == target_column_id {
        let column = board.find_column(source_column_id)?;
        let count = column.cards.len();
        if count <= 1 {
            return None;
        }

        let middle = count / 2;
        let finish_index = if card_index < middle { count - 1 } else { 0 };
        if finish_index == card_index {
            return None;
        }

        return Some(DropAction::Reorder {
            column_id: source_column_id.clone(),
            start_index: card_index,
            finish_index,
        });
    }

    Some(DropAction::Move(MoveCard {
        start_column_id: source_column_id.clone(),
        finish_column_id: target_column_id.clone(),
        item_index_in_start_column: card_index,
        item_index_in_finish_column: None,
    }))
}

/// Wires the classifier between a monitor and a store
///
/// Subscribes once; each event is classified against the store's current
/// snapshot (never a stale capture) and dispatched to the matching store
/// operation. Dropping the returned subscription tears the wiring down.
pub fn attach(monitor: &DragMonitor, store: Rc<BoardStore>) -> Subscription {
    monitor.subscribe(move |event| match classify(&store.snapshot(), event) {
        Some(DropAction::Reorder {
            column_id,
            start_index,
            finish_index,
        }) => store.reorder_card(&column_id, start_index, finish_index),
        Some(DropAction::Move(request)) => store.move_card(request),
        None => log::trace!("drop event produced no action"),
    })
}
