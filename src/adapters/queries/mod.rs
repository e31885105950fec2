//! Cross-module query adapters.

mod local_group_queries;

pub use local_group_queries::LocalGroupQueries;
