//! Procedural level catalog
//!
//! Turns the curated word bank into 1000 numbered levels grouped into 20 worlds.
//! A level is fully determined by its id and language:
//!
//! - block (world) `= (id - 1) / 50`, category cycles with the block
//! - tier from the position inside the block (see [`types::Difficulty`])
//! - words `= seeded_shuffle(pool, id)[..word_count]`
//!
//! # Example
//!
//! ```
//! use word_search_catalog::LevelCatalog;
//! use word_search_catalog::types::Language;
//!
//! let catalog = LevelCatalog::new();
//! let level = catalog.level(137, Language::En);
//! assert_eq!(level.title, "Food");
//! assert_eq!(catalog.block_for_level(137, Language::En).unwrap().id, "block_3");
//! ```

pub mod cache;
pub mod level;
pub mod word_bank;

pub use word_search_core as core;
pub use word_search_types as types;

pub use cache::LevelCatalog;
pub use level::{
    block_index_for_level, block_summary, build_block, clamp_level_id, generate_level,
    validate_level_id, BlockSummary, CatalogError, Level, LevelBlock, Trophy,
};
pub use word_bank::{is_grid_word, Category};
