pub mod board;
pub mod seed;

pub use board::{Board, Card, Column, ColumnId};
pub use seed::{demo_columns, ColumnSeed};
