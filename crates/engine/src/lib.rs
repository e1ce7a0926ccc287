//! Session engine - level state machine, hints, snapshots and progress
//!
//! Sits on top of the catalog and the packer. A host drives one
//! [`GameSession`] at a time:
//!
//! 1. `start` a level (resolves it, packs the grid, assigns colors)
//! 2. feed finished drags to `submit_selection`, call `tick` once per second
//! 3. spend hints with `use_hint` after charging [`PlayerProgress::try_spend`]
//! 4. once the phase is `Complete`, call `complete` and book the report
//!
//! # Example
//!
//! ```
//! use word_search_engine::{GameSession, PlayerProgress};
//! use word_search_engine::catalog::LevelCatalog;
//! use word_search_engine::types::Language;
//!
//! let catalog = LevelCatalog::new();
//! let mut progress = PlayerProgress::new();
//! let mut session = GameSession::new();
//! session.start(&catalog, 1, Language::En).unwrap();
//!
//! let placed: Vec<_> = session
//!     .words()
//!     .iter()
//!     .map(|w| (w.word.clone(), w.cells.clone()))
//!     .collect();
//! for (word, cells) in placed {
//!     session.word_found(&word, &cells);
//! }
//!
//! let report = session.complete(&progress).unwrap();
//! progress.apply_completion(&report);
//! assert_eq!(progress.current_level_id, 2);
//! ```

pub mod hints;
pub mod progress;
pub mod session;
pub mod snapshot;

pub use word_search_catalog as catalog;
pub use word_search_core as core;
pub use word_search_types as types;

pub use hints::{hint_order, letter_target, HintReveal};
pub use progress::{PlayerProgress, PlayerStats};
pub use session::{
    pack_level, pack_level_with, word_color, CompletionLedger, CompletionReport, FoundCell,
    GameSession, Phase, SessionEvent, StartError, WordInfo,
};
pub use snapshot::{SessionSnapshot, SessionSummary, SnapshotError};
