//! # Tablero Core
//!
//! Core board state and drag-and-drop logic for Tablero, a lightweight
//! kanban board.
//!
//! This crate provides the fundamental types and operations for an
//! in-memory board of ordered columns and cards, the store that publishes
//! immutable snapshots of it, and the classifier that turns gesture-bridge
//! drop events into reorder and move operations, without any dependency on
//! a specific UI implementation or rendering layer.
//!
//! Typical wiring:
//!
//! ```
//! use std::rc::Rc;
//! use tablero_core::{attach, BoardStore, DragMonitor};
//!
//! let store = BoardStore::demo();
//! let monitor = DragMonitor::new();
//! let subscription = attach(&monitor, Rc::clone(&store));
//!
//! // The UI adapter feeds completed drops into the monitor; reads go
//! // through store.snapshot(). Dropping `subscription` tears the wiring
//! // down.
//! # drop(subscription);
//! ```

pub mod domain;
pub mod drag;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{Board, Card, Column, ColumnId},
    seed::{demo_columns, ColumnSeed},
};
pub use drag::{
    classifier::{attach, classify, DropAction},
    event::{DropEvent, SourceData, TargetData, CARD_KIND},
    monitor::{DragMonitor, Subscription},
};
pub use error::{BoardError, Result};
pub use store::{BoardStore, CardRegistration, MoveCard};
