pub mod classifier;
pub mod event;
pub mod monitor;

pub use classifier::{attach, classify, DropAction};
pub use event::{DropEvent, SourceData, TargetData, CARD_KIND};
pub use monitor::{DragMonitor, Subscription};
