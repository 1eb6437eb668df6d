pub mod modifiers;
pub mod types;
pub mod sql;
pub mod builder;

pub use builder::QueryBuilder;
pub use types::{BuiltQuery, MatchStrategy};
