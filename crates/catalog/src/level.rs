//! Level module - derives levels and blocks from their ids
//!
//! Everything here is a pure function of `(id, language)`. The level id seeds
//! the word selection shuffle and, later, the grid packer; nothing else feeds
//! in, so level 137 is the same puzzle for every player.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::seeded_shuffle;
use crate::types::{Difficulty, Language, LEVELS_PER_BLOCK, TOTAL_BLOCKS, TOTAL_LEVELS};
use crate::word_bank::{master_title, world_names, Category};

/// Explicit rejection of ids outside the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("level id {0} is outside 1..=1000")]
    LevelOutOfRange(u32),
    #[error("block index {0} is outside 0..20")]
    BlockOutOfRange(u32),
}

/// One puzzle definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: u32,
    /// Localized category name
    pub title: String,
    pub category: Category,
    pub words: Vec<String>,
    pub grid_size: usize,
    pub difficulty: Difficulty,
    pub reward_coins: u32,
}

impl Level {
    /// 0-based block (world) index
    pub fn block_index(&self) -> u32 {
        block_index_for_level(self.id)
    }

    /// 0-based position inside the block
    pub fn index_in_block(&self) -> u32 {
        (self.id - 1) % LEVELS_PER_BLOCK
    }

    /// Whether finishing this level completes its block
    pub fn is_last_in_block(&self) -> bool {
        self.index_in_block() == LEVELS_PER_BLOCK - 1 || self.id == TOTAL_LEVELS
    }
}

/// Reward for finishing every level of a block
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trophy {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub unlocked_at_block_id: String,
}

/// Block metadata without its levels (menu listing)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    pub index: u32,
    pub id: String,
    pub name: String,
    pub trophy: Trophy,
    /// First and last level id, inclusive
    pub level_range: (u32, u32),
}

impl BlockSummary {
    pub fn levels(&self) -> RangeInclusive<u32> {
        self.level_range.0..=self.level_range.1
    }

    pub fn contains(&self, level_id: u32) -> bool {
        self.levels().contains(&level_id)
    }
}

/// A world: fifty contiguous levels and their trophy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelBlock {
    pub index: u32,
    pub id: String,
    pub name: String,
    pub levels: Vec<Level>,
    pub trophy: Trophy,
}

impl LevelBlock {
    pub fn level(&self, level_id: u32) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == level_id)
    }

    pub fn last_level_id(&self) -> Option<u32> {
        self.levels.last().map(|l| l.id)
    }
}

/// Clamp any id into `1..=TOTAL_LEVELS`
pub fn clamp_level_id(id: u32) -> u32 {
    id.clamp(1, TOTAL_LEVELS)
}

/// Reject ids outside `1..=TOTAL_LEVELS` instead of clamping
pub fn validate_level_id(id: u32) -> Result<u32, CatalogError> {
    if (1..=TOTAL_LEVELS).contains(&id) {
        Ok(id)
    } else {
        Err(CatalogError::LevelOutOfRange(id))
    }
}

/// 0-based block index of a (clamped) level id
pub fn block_index_for_level(id: u32) -> u32 {
    (clamp_level_id(id) - 1) / LEVELS_PER_BLOCK
}

/// Derive a level. Out-of-range ids are clamped.
///
/// # Examples
///
/// ```
/// use word_search_catalog::generate_level;
/// use word_search_catalog::types::{Difficulty, Language};
///
/// let level = generate_level(1, Language::En);
/// assert_eq!(level.words, ["SNOW", "GLEN", "TREE"]);
/// assert_eq!(level.difficulty, Difficulty::Easy);
/// assert_eq!(level.grid_size, 4);
/// ```
pub fn generate_level(id: u32, lang: Language) -> Level {
    let id = clamp_level_id(id);
    let block_index = (id - 1) / LEVELS_PER_BLOCK;
    let difficulty = Difficulty::for_index_in_block((id - 1) % LEVELS_PER_BLOCK);
    let category = Category::for_block(block_index);
    let grid_size = difficulty.grid_size();

    let pool = category.pool(lang, grid_size);
    let words = seeded_shuffle(&pool, id)
        .into_iter()
        .take(difficulty.word_count())
        .map(str::to_owned)
        .collect();

    Level {
        id,
        title: category.name(lang).to_owned(),
        category,
        words,
        grid_size,
        difficulty,
        reward_coins: difficulty.reward_coins(),
    }
}

/// Id, name, trophy and level range of a block, or `None` past the last block
pub fn block_summary(index: u32, lang: Language) -> Option<BlockSummary> {
    if index >= TOTAL_BLOCKS {
        return None;
    }
    let names = world_names(lang);
    let world = names[index as usize % names.len()];
    let id = format!("block_{}", index + 1);
    let description = match lang {
        Language::En => format!("Completed all levels in {world}."),
        Language::Es => format!("Completados todos los niveles de {world}."),
    };
    let first = index * LEVELS_PER_BLOCK + 1;
    let last = ((index + 1) * LEVELS_PER_BLOCK).min(TOTAL_LEVELS);

    Some(BlockSummary {
        index,
        trophy: Trophy {
            id: format!("trophy_{id}"),
            name: format!("{world} {}", master_title(lang)),
            icon: "Trophy".to_owned(),
            description,
            unlocked_at_block_id: id.clone(),
        },
        id,
        name: world.to_owned(),
        level_range: (first, last),
    })
}

/// Materialize a block with all of its levels
pub fn build_block(index: u32, lang: Language) -> Option<LevelBlock> {
    let summary = block_summary(index, lang)?;
    let levels = summary.levels().map(|id| generate_level(id, lang)).collect();
    Some(LevelBlock {
        index,
        id: summary.id,
        name: summary.name,
        levels,
        trophy: summary.trophy,
    })
}
