//! Adapter module - host glue around the session engine
//!
//! Everything a host needs that touches the outside world:
//!
//! - [`AdapterConfig`]: settings from `WORD_SEARCH_*` environment variables
//! - [`init_logger`]: `env_logger` setup honouring `RUST_LOG`
//! - [`SessionStore`] / [`ProgressStore`]: JSON files in the data directory;
//!   sessions older than the configured age are discarded on load
//! - [`GenerationWorker`]: packs grids on a tokio blocking pool so the host
//!   loop never stalls; results for superseded requests are dropped
//!
//! # Environment Variables
//!
//! - `WORD_SEARCH_DATA_DIR`: where `session.json` and `progress.json` live
//! - `WORD_SEARCH_LANGUAGE`: `en` or `es`
//! - `WORD_SEARCH_SESSION_MAX_AGE_SECS`: saved session expiry
//! - `WORD_SEARCH_DEBUG`: set to `1` or `true` for debug logging
//!
//! # Example
//!
//! ```no_run
//! use word_search_adapter::{init_logger, unix_now, AdapterConfig, GenerationWorker, SessionStore};
//! use word_search_adapter::catalog::LevelCatalog;
//! use word_search_adapter::engine::GameSession;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = AdapterConfig::from_env();
//! init_logger(config.debug);
//!
//! let catalog = LevelCatalog::new();
//! let store = SessionStore::from_config(&config);
//! let mut session = match store.resume(&catalog, config.language, unix_now()) {
//!     Some(session) => session,
//!     None => {
//!         let mut worker = GenerationWorker::new(config.max_pending_results)?;
//!         let (level, block) = catalog.level_with_block(1, config.language).unwrap();
//!         worker.request(level, block);
//!         let mut session = GameSession::new();
//!         worker.wait().unwrap().begin(&mut session)?;
//!         session
//!     }
//! };
//! session.tick();
//! store.save_session(&session)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod log;
pub mod store;
pub mod worker;

pub use word_search_catalog as catalog;
pub use word_search_core as core;
pub use word_search_engine as engine;
pub use word_search_types as types;

pub use config::AdapterConfig;
pub use self::log::init_logger;
pub use store::{unix_day, unix_now, ProgressStore, SessionStore};
pub use worker::{recv_fresh, GenerationResult, GenerationWorker};
