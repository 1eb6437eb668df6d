pub mod chinese;
pub mod colour;
pub mod options;
pub mod definition;
pub mod sentence;
#[allow(clippy::module_inception)]
pub mod entry;

pub use definition::{Definition, DefinitionsSet};
pub use entry::Entry;
pub use sentence::{SentenceSet, SourceSentence, TargetSentence};
