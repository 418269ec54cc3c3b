use crate::domain::seed::ColumnSeed;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// Identifier for a board column (e.g., "todo", "in-progress")
///
/// Unique within a board and immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A titled unit of work on the board
///
/// Cards carry no stored identity of their own; a card's identity is its
/// position within its owning column. Serializes as a bare title string,
/// matching the seed contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    pub title: String,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// A named, ordered list of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub column_id: ColumnId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(column_id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Synthesizes the render-correlation key for the card at `index`
    ///
    /// The key is derived from position, not stored: it relabels whenever
    /// preceding cards are removed or reordered. Suitable only for transient
    /// render reconciliation, never for durable identity.
    pub fn card_key(&self, index: usize) -> String {
        format!("{}-card-{}", self.column_id, index)
    }
}

/// Immutable point-in-time view of the full board
///
/// Columns are held behind `Rc` so that a snapshot produced by a mutation
/// shares every untouched column with its predecessor; downstream consumers
/// can detect unchanged columns with [`Rc::ptr_eq`] instead of deep
/// comparison. Column order is display order and is never mutated; no
/// operation adds or removes columns.
#[derive(Debug, Clone)]
pub struct Board {
    columns: Vec<Rc<Column>>,
}

impl Board {
    /// Builds the initial board from seed records
    ///
    /// The seed is supplied once at application start. Column ids must be
    /// unique across the seed.
    pub fn from_seed(seed: Vec<ColumnSeed>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(seed.len());

        for record in seed {
            if !seen.insert(record.column_id.clone()) {
                return Err(BoardError::DuplicateColumnId(record.column_id.to_string()));
            }
            columns.push(Rc::new(Column {
                column_id: record.column_id,
                title: record.title,
                cards: record.cards,
            }));
        }

        Ok(Self { columns })
    }

    /// The columns in display order
    pub fn columns(&self) -> &[Rc<Column>] {
        &self.columns
    }

    /// Finds a column by id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Rc<Column>> {
        self.columns.iter().find(|col| &col.column_id == id)
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|col| col.cards.len()).sum()
    }

    /// Returns a new board with one card repositioned within its column
    ///
    /// Remove-then-insert semantics: the card at `start_index` is removed
    /// first, then reinserted at `finish_index` against the post-removal
    /// sequence (the two indices are not symmetric; this is not a swap).
    /// A `finish_index` past the end clamps to an append.
    ///
    /// An unknown `column_id` or out-of-range `start_index` yields a board
    /// in which every column is carried over unchanged. On success exactly
    /// one column is replaced; all others stay reference-identical.
    pub fn with_reordered_card(
        &self,
        column_id: &ColumnId,
        start_index: usize,
        finish_index: usize,
    ) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|col| {
                if col.column_id != *column_id || start_index >= col.cards.len() {
                    return Rc::clone(col);
                }

                let mut cards = col.cards.clone();
                let moved = cards.remove(start_index);
                let insert_at = finish_index.min(cards.len());
                cards.insert(insert_at, moved);

                Rc::new(Column {
                    column_id: col.column_id.clone(),
                    title: col.title.clone(),
                    cards,
                })
            })
            .collect();

        Self { columns }
    }

    /// Returns a new board with one card relocated to a different column
    ///
    /// The card at `index` is removed from the source column and appended to
    /// the end of the destination column. The destination position is always
    /// the end; no insertion index is computed from the drop. This is a
    /// deliberate simplification of the interaction design, kept as-is.
    ///
    /// Same-column requests, a missing source or destination column, or an
    /// out-of-range `index` leave the board unchanged as a whole. The
    /// operation never mutates partially, so the total card count is
    /// conserved for every input.
    pub fn with_moved_card(
        &self,
        start_column_id: &ColumnId,
        finish_column_id: &ColumnId,
        index: usize,
    ) -> Self {
        if start_column_id == finish_column_id {
            return self.clone();
        }

        let card = match self
            .find_column(start_column_id)
            .and_then(|col| col.cards.get(index))
        {
            Some(card) => card.clone(),
            None => return self.clone(),
        };
        if self.find_column(finish_column_id).is_none() {
            return self.clone();
        }

        let columns = self
            .columns
            .iter()
            .map(|col| {
                if col.column_id == *start_column_id {
                    let mut cards = col.cards.clone();
                    cards.remove(index);
                    Rc::new(Column {
                        column_id: col.column_id.clone(),
                        title: col.title.clone(),
                        cards,
                    })
                } else if col.column_id == *finish_column_id {
                    let mut cards = col.cards.clone();
                    cards.push(card.clone());
                    Rc::new(Column {
                        column_id: col.column_id.clone(),
                        title: col.title.clone(),
                        cards,
                    })
                } else {
                    Rc::clone(col)
                }
            })
            .collect();

        Self { columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(column_id: &str, cards: &[&str]) -> ColumnSeed {
        ColumnSeed::new(column_id, column_id.to_uppercase(), cards.iter().copied())
    }

    fn sample_board() -> Board {
        Board::from_seed(vec![
            seed("todo", &["A", "B", "C", "D"]),
            seed("doing", &["X", "Y"]),
            seed("done", &[]),
        ])
        .unwrap()
    }

    fn titles(board: &Board, column_id: &str) -> Vec<String> {
        board
            .find_column(&ColumnId::new(column_id))
            .unwrap()
            .cards
            .iter()
            .map(|card| card.title.clone())
            .collect()
    }

    fn all_titles_sorted(board: &Board) -> Vec<String> {
        let mut titles: Vec<String> = board
            .columns()
            .iter()
            .flat_map(|col| col.cards.iter().map(|card| card.title.clone()))
            .collect();
        titles.sort();
        titles
    }

    #[test]
    fn test_from_seed() {
        let board = sample_board();

        assert_eq!(board.columns().len(), 3);
        assert_eq!(board.card_count(), 6);
        assert_eq!(titles(&board, "todo"), ["A", "B", "C", "D"]);
        assert_eq!(board.columns()[1].title, "DOING");
    }

    #[test]
    fn test_from_seed_rejects_duplicate_column_ids() {
        let result = Board::from_seed(vec![seed("todo", &["A"]), seed("todo", &["B"])]);

        assert!(matches!(result, Err(BoardError::DuplicateColumnId(id)) if id == "todo"));
    }

    #[test]
    fn test_card_key_is_positional() {
        let board = sample_board();
        let column = board.find_column(&ColumnId::new("todo")).unwrap();

        assert_eq!(column.card_key(0), "todo-card-0");
        assert_eq!(column.card_key(3), "todo-card-3");
    }

    #[test]
    fn test_reorder_uses_remove_then_insert_semantics() {
        let board = sample_board();

        // A removed first gives [B, C, D]; insert at 2 gives [B, C, A, D].
        let next = board.with_reordered_card(&ColumnId::new("todo"), 0, 2);

        assert_eq!(titles(&next, "todo"), ["B", "C", "A", "D"]);
    }

    #[test]
    fn test_reorder_to_last_position() {
        let board = sample_board();

        let next = board.with_reordered_card(&ColumnId::new("todo"), 0, 3);

        assert_eq!(titles(&next, "todo"), ["B", "C", "D", "A"]);
    }

    #[test]
    fn test_reorder_clamps_finish_index() {
        let board = sample_board();

        let next = board.with_reordered_card(&ColumnId::new("todo"), 1, 99);

        assert_eq!(titles(&next, "todo"), ["A", "C", "D", "B"]);
    }

    #[test]
    fn test_reorder_conserves_column_card_count() {
        let board = sample_board();

        let next = board.with_reordered_card(&ColumnId::new("todo"), 2, 0);

        assert_eq!(
            next.find_column(&ColumnId::new("todo")).unwrap().cards.len(),
            4
        );
        assert_eq!(all_titles_sorted(&next), all_titles_sorted(&board));
    }

    #[test]
    fn test_reorder_unknown_column_keeps_every_column_shared() {
        let board = sample_board();

        let next = board.with_reordered_card(&ColumnId::new("nope"), 0, 1);

        for (before, after) in board.columns().iter().zip(next.columns()) {
            assert!(Rc::ptr_eq(before, after));
        }
    }

    #[test]
    fn test_reorder_out_of_range_start_keeps_every_column_shared() {
        let board = sample_board();

        let next = board.with_reordered_card(&ColumnId::new("todo"), 10, 0);

        for (before, after) in board.columns().iter().zip(next.columns()) {
            assert!(Rc::ptr_eq(before, after));
        }
    }

    #[test]
    fn test_reorder_replaces_only_the_target_column() {
        let board = sample_board();

        let next = board.with_reordered_card(&ColumnId::new("todo"), 0, 2);

        assert!(!Rc::ptr_eq(&board.columns()[0], &next.columns()[0]));
        assert!(Rc::ptr_eq(&board.columns()[1], &next.columns()[1]));
        assert!(Rc::ptr_eq(&board.columns()[2], &next.columns()[2]));
    }

    #[test]
    fn test_move_appends_to_destination() {
        let board = Board::from_seed(vec![
            seed("src", &["A", "B", "C"]),
            seed("dst", &["X", "Y"]),
        ])
        .unwrap();

        let next = board.with_moved_card(&ColumnId::new("src"), &ColumnId::new("dst"), 1);

        assert_eq!(titles(&next, "src"), ["A", "C"]);
        assert_eq!(titles(&next, "dst"), ["X", "Y", "B"]);
    }

    #[test]
    fn test_move_conserves_total_card_count() {
        let board = sample_board();

        let next = board.with_moved_card(&ColumnId::new("todo"), &ColumnId::new("done"), 0);

        assert_eq!(next.card_count(), board.card_count());
        assert_eq!(all_titles_sorted(&next), all_titles_sorted(&board));
    }

    #[test]
    fn test_move_same_column_is_unchanged() {
        let board = sample_board();

        let next = board.with_moved_card(&ColumnId::new("todo"), &ColumnId::new("todo"), 1);

        for (before, after) in board.columns().iter().zip(next.columns()) {
            assert!(Rc::ptr_eq(before, after));
        }
    }

    #[test]
    fn test_move_out_of_range_index_is_unchanged() {
        let board = sample_board();

        let next = board.with_moved_card(&ColumnId::new("todo"), &ColumnId::new("done"), 10);

        for (before, after) in board.columns().iter().zip(next.columns()) {
            assert!(Rc::ptr_eq(before, after));
        }
    }

    #[test]
    fn test_move_unknown_source_is_unchanged() {
        let board = sample_board();

        let next = board.with_moved_card(&ColumnId::new("nope"), &ColumnId::new("done"), 0);

        for (before, after) in board.columns().iter().zip(next.columns()) {
            assert!(Rc::ptr_eq(before, after));
        }
    }

    #[test]
    fn test_move_unknown_destination_is_unchanged() {
        let board = sample_board();

        let next = board.with_moved_card(&ColumnId::new("todo"), &ColumnId::new("nope"), 0);

        assert_eq!(next.card_count(), board.card_count());
        for (before, after) in board.columns().iter().zip(next.columns()) {
            assert!(Rc::ptr_eq(before, after));
        }
    }

    #[test]
    fn test_duplicate_titles_are_positional() {
        let board = Board::from_seed(vec![seed("todo", &["Same", "Same", "Other"])]).unwrap();

        let next = board.with_reordered_card(&ColumnId::new("todo"), 2, 0);

        assert_eq!(titles(&next, "todo"), ["Other", "Same", "Same"]);
    }

    #[test]
    fn test_conservation_across_operation_sequence() {
        let mut board = sample_board();
        let before = all_titles_sorted(&board);

        board = board.with_moved_card(&ColumnId::new("todo"), &ColumnId::new("done"), 1);
        board = board.with_reordered_card(&ColumnId::new("doing"), 0, 1);
        board = board.with_moved_card(&ColumnId::new("doing"), &ColumnId::new("todo"), 0);
        board = board.with_reordered_card(&ColumnId::new("todo"), 2, 0);

        assert_eq!(all_titles_sorted(&board), before);
    }
}
