//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains the algorithms every level is built from. It has **no
//! dependencies** on UI, storage, or I/O, which makes it:
//!
//! - **Deterministic**: the same seed produces the same grid on every platform
//! - **Testable**: every rule is covered by unit tests next to its module
//! - **Portable**: usable from a terminal, a GUI, a server or a background worker
//! - **Light on the hot path**: drag tracking never touches the heap
//!
//! # Module Structure
//!
//! - [`rng`]: Mulberry32 generator and seeded Fisher-Yates shuffle
//! - [`grid`]: square letter grid with flat storage
//! - [`packer`]: word placement with seeded retries and a time budget
//! - [`selection`]: drag gesture to straight cell line
//! - [`scoring`]: star and coin tables
//!
//! # Packing Rules
//!
//! - Words are placed longest-first in one of 8 directions
//! - Two words may share a cell only if they agree on its letter
//! - A word that cannot be placed abandons the whole attempt; the next attempt
//!   reseeds with `seed + retry * 7919`
//! - Once every word is placed, blanks are filled with random `A-Z` letters
//! - If every retry fails, the result is an all-blank grid with no placements
//!
//! # Example
//!
//! ```
//! use word_search_core::{cells_between, generate_grid, read_line, PackSeed};
//! use word_search_core::types::Coord;
//!
//! let words = ["SNOW", "GLEN", "TREE"];
//! let packed = generate_grid(4, &words, PackSeed::Fixed(1));
//! assert!(packed.covers(&words));
//!
//! // Every placement reads back as its word
//! let snow = &packed.placements["SNOW"];
//! assert_eq!(read_line(&packed.grid, snow).as_deref(), Some("SNOW"));
//!
//! // A diagonal drag resolves to four cells
//! let line = cells_between(Coord::new(0, 0), Coord::new(3, 3));
//! assert_eq!(line.len(), 4);
//! ```

pub mod grid;
pub mod packer;
pub mod rng;
pub mod scoring;
pub mod selection;

pub use word_search_types as types;

// Re-export commonly used types for convenience
pub use grid::{Grid, GridError};
pub use packer::{generate_grid, GridPacker, PackSeed, PackedGrid, PackerConfig, Placements};
pub use rng::{seeded_shuffle, shuffle_in_place, SeededRandom};
pub use scoring::{calculate_stars, completion_reward, format_time};
pub use selection::{cells_between, cells_between_into, read_line, Line, SelectionTracker};
