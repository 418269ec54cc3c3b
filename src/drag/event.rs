//! Wire types for the gesture-bridge drop events.
//!
//! The bridge is generic over draggable kinds and delivers one global
//! notification per completed drop. The shapes here mirror the event
//! payload field-for-field:
//!
//! ```json
//! {
//!   "location": { "current": { "dropTargets": [ { "data": { "columnId": "done" } } ] } },
//!   "source": { "data": { "type": "card", "columnId": "todo", "cardIndex": 1 } }
//! }
//! ```
//!
//! Only `dropTargets[0]` and the fields above are consumed; anything else a
//! bridge carries is its own concern.

use crate::domain::board::ColumnId;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Draggable kind handled by this crate
pub const CARD_KIND: &str = "card";

/// A completed drop, as reported by the gesture bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    pub location: DragLocation,
    pub source: DragSource,
}

impl DropEvent {
    pub fn new(source: SourceData, targets: Vec<TargetData>) -> Self {
        Self {
            location: DragLocation {
                current: TargetRecord {
                    drop_targets: targets.into_iter().map(|data| DropTarget { data }).collect(),
                },
            },
            source: DragSource { data: source },
        }
    }

    /// Parses a bridge event delivered as JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The topmost drop target, if the drop landed on one
    pub fn first_target(&self) -> Option<&TargetData> {
        self.location
            .current
            .drop_targets
            .first()
            .map(|target| &target.data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub current: TargetRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRecord {
    pub drop_targets: Vec<DropTarget>,
}

/// One drop target under the pointer, topmost first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    pub data: TargetData,
}

/// Identity payload each column publishes as a drop target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetData {
    pub column_id: ColumnId,
}

impl TargetData {
    pub fn column(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSource {
    pub data: SourceData,
}

/// Identity payload the dragged entity declared when the drag began
///
/// `card_index` is signed because it arrives from the bridge unvalidated;
/// the classifier rejects negatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceData {
    #[serde(rename = "type")]
    pub kind: String,
    pub column_id: ColumnId,
    pub card_index: i64,
}

impl SourceData {
    /// The payload a card publishes when its drag begins
    pub fn card(column_id: impl Into<ColumnId>, card_index: usize) -> Self {
        Self {
            kind: CARD_KIND.to_string(),
            column_id: column_id.into(),
            card_index: card_index as i64,
        }
    }
}
