//! Word search (workspace facade crate).
//!
//! Re-exports the member crates under one name so hosts and integration tests
//! can depend on `word_search::{types,core,catalog,engine,adapter}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use word_search_adapter as adapter;
pub use word_search_catalog as catalog;
pub use word_search_core as core;
pub use word_search_engine as engine;
pub use word_search_types as types;
