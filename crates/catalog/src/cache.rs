//! Memoizing level and block accessor
//!
//! Levels and blocks are pure functions of `(language, id)`, so the cache never
//! goes stale on its own. It only needs clearing when the host switches
//! language and wants the memory back, see [`LevelCatalog::invalidate`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;

use crate::level::{
    block_index_for_level, block_summary, clamp_level_id, generate_level, BlockSummary, Level,
    LevelBlock,
};
use crate::types::{Language, TOTAL_BLOCKS, TOTAL_LEVELS};

#[derive(Debug, Default)]
struct Memo {
    levels: HashMap<(Language, u32), Arc<Level>>,
    blocks: HashMap<(Language, u32), Arc<LevelBlock>>,
}

/// Shared memo cache over generated levels and blocks
///
/// Construct once and pass by reference. Handles are `Arc`s so callers can keep
/// a level alive across an `invalidate`.
#[derive(Debug, Default)]
pub struct LevelCatalog {
    memo: Mutex<Memo>,
}

impl LevelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn memo(&self) -> MutexGuard<'_, Memo> {
        // Entries are inserted whole; a poisoned map is still consistent
        self.memo.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Level `id` (clamped into range)
    pub fn level(&self, id: u32, lang: Language) -> Arc<Level> {
        let id = clamp_level_id(id);
        if let Some(level) = self.memo().levels.get(&(lang, id)) {
            return Arc::clone(level);
        }
        let level = Arc::new(generate_level(id, lang));
        self.memo()
            .levels
            .entry((lang, id))
            .or_insert(level)
            .clone()
    }

    /// Block at 0-based `index`, `None` past the last block
    pub fn block(&self, index: u32, lang: Language) -> Option<Arc<LevelBlock>> {
        if let Some(block) = self.memo().blocks.get(&(lang, index)) {
            return Some(Arc::clone(block));
        }
        let summary = block_summary(index, lang)?;
        let levels = summary
            .levels()
            .map(|id| self.level(id, lang).as_ref().clone())
            .collect();
        let block = Arc::new(LevelBlock {
            index,
            id: summary.id,
            name: summary.name,
            levels,
            trophy: summary.trophy,
        });
        debug!("built block {} ({})", block.id, lang.as_str());
        Some(self.memo().blocks.entry((lang, index)).or_insert(block).clone())
    }

    /// Block containing level `id` (clamped)
    pub fn block_for_level(&self, id: u32, lang: Language) -> Option<Arc<LevelBlock>> {
        self.block(block_index_for_level(id), lang)
    }

    /// Level `id` together with its block
    pub fn level_with_block(
        &self,
        id: u32,
        lang: Language,
    ) -> Option<(Arc<Level>, Arc<LevelBlock>)> {
        let block = self.block_for_level(id, lang)?;
        Some((self.level(id, lang), block))
    }

    /// Metadata for every block without generating any level
    pub fn block_list(&self, lang: Language) -> Vec<BlockSummary> {
        (0..TOTAL_BLOCKS)
            .filter_map(|index| block_summary(index, lang))
            .collect()
    }

    /// Every block in order, materialized lazily as the iterator advances
    pub fn iter_blocks(&self, lang: Language) -> impl Iterator<Item = Arc<LevelBlock>> + '_ {
        (0..TOTAL_BLOCKS).filter_map(move |index| self.block(index, lang))
    }

    /// First block whose metadata matches `pred`; only that block is materialized
    pub fn find_block(
        &self,
        lang: Language,
        mut pred: impl FnMut(&BlockSummary) -> bool,
    ) -> Option<Arc<LevelBlock>> {
        let summary = self.block_list(lang).into_iter().find(|s| pred(s))?;
        self.block(summary.index, lang)
    }

    /// Warm the cache for `count` levels starting at `start` (stops at the last level)
    pub fn preload(&self, start: u32, count: u32, lang: Language) {
        let start = clamp_level_id(start);
        let end = start.saturating_add(count).min(TOTAL_LEVELS + 1);
        for id in start..end {
            self.level(id, lang);
        }
        debug!("preloaded levels {start}..{end} ({})", lang.as_str());
    }

    /// Drop every cached entry for `lang`
    pub fn invalidate(&self, lang: Language) {
        let mut memo = self.memo();
        memo.levels.retain(|(l, _), _| *l != lang);
        memo.blocks.retain(|(l, _), _| *l != lang);
        debug!("invalidated catalog cache for {}", lang.as_str());
    }

    /// Drop everything
    pub fn clear(&self) {
        let mut memo = self.memo();
        memo.levels.clear();
        memo.blocks.clear();
    }

    pub fn cached_levels(&self) -> usize {
        self.memo().levels.len()
    }

    pub fn cached_blocks(&self) -> usize {
        self.memo().blocks.len()
    }
}
