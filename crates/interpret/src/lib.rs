pub mod extract;
pub mod intent;
pub mod merge;

pub use extract::{BestEffort, ExtractionOutcome, IntentExtractor, InterpretError};
pub use intent::{DimensionsIntent, FilletIntent, HoleIntent, PartIntent};
pub use merge::{merge_intent, MergeError};
