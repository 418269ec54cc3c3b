use crate::domain::board::{Card, ColumnId};
use serde::{Deserialize, Serialize};

/// One column record of the seed dataset
///
/// The seed contract: an ordered sequence of `{ columnId, title, cards }`
/// records with unique column ids, supplied once at store initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSeed {
    pub column_id: ColumnId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl ColumnSeed {
    pub fn new(
        column_id: impl Into<ColumnId>,
        title: impl Into<String>,
        cards: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            title: title.into(),
            cards: cards.into_iter().map(Card::new).collect(),
        }
    }
}

/// The fixed demo dataset the board is seeded with at application start
///
/// State lives in memory for the session; there is no remote fetch and no
/// persistence, so this mock data is the whole input.
pub fn demo_columns() -> Vec<ColumnSeed> {
    vec![
        ColumnSeed::new(
            "todo",
            "To Do",
            [
                "Set up the project scaffold",
                "Design the board layout",
                "Implement sign-in",
            ],
        ),
        ColumnSeed::new(
            "in-progress",
            "In Progress",
            ["Build the column widget", "Wire up drag and drop"],
        ),
        ColumnSeed::new(
            "done",
            "Done",
            ["Install dependencies", "Initial configuration"],
        ),
    ]
}
