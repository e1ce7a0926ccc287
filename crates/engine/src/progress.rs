//! Player progress ledger
//!
//! Books completions, coins and stats between sessions. Scoring:
//!
//! | Event | Score | Coins |
//! |-------|-------|-------|
//! | First completion | +100 | tier reward |
//! | Replay | +20 | +5 |
//! | Single-letter hint | | -50 |
//! | Full-word hint | | -150 |

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::session::{CompletionLedger, CompletionReport};
use crate::types::{
    HintKind, FAST_LEVEL_SECS, FIRST_COMPLETION_SCORE, REPLAY_COMPLETION_SCORE, STARTING_COINS,
    TOTAL_LEVELS,
};

/// Lifetime counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    pub total_words_found: u32,
    pub total_levels_completed: u32,
    pub total_stars_earned: u32,
    /// Levels finished with 3 stars
    pub perfect_levels: u32,
    pub no_hint_levels: u32,
    /// Levels finished within `FAST_LEVEL_SECS`
    pub fast_levels: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Seconds
    pub total_play_time: u64,
    pub hints_used: u32,
    pub coins_earned: u32,
    /// Day number (days since the Unix epoch) of the last play
    pub last_play_day: Option<u32>,
}

impl PlayerStats {
    fn record(&mut self, report: &CompletionReport) {
        self.total_words_found += report.words_found;
        self.total_levels_completed += 1;
        self.total_stars_earned += report.stars as u32;
        self.coins_earned += report.coins;
        if report.stars == 3 {
            self.perfect_levels += 1;
        }
        if report.hints_used == 0 {
            self.no_hint_levels += 1;
        }
        if report.time_elapsed <= FAST_LEVEL_SECS {
            self.fast_levels += 1;
        }
        self.total_play_time += report.time_elapsed as u64;
        self.hints_used += report.hints_used;
    }
}

/// Everything a player has earned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerProgress {
    pub completed_level_ids: Vec<u32>,
    /// Best stars per level
    pub stars: BTreeMap<u32, u8>,
    pub coins: u32,
    /// Next level to offer
    pub current_level_id: u32,
    pub unlocked_trophy_ids: Vec<String>,
    pub total_score: u32,
    pub stats: PlayerStats,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            completed_level_ids: Vec::new(),
            stars: BTreeMap::new(),
            coins: STARTING_COINS,
            current_level_id: 1,
            unlocked_trophy_ids: Vec::new(),
            total_score: 0,
            stats: PlayerStats::default(),
        }
    }
}

impl CompletionLedger for PlayerProgress {
    fn has_completed(&self, level_id: u32) -> bool {
        self.completed_level_ids.contains(&level_id)
    }
}

impl PlayerProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best_stars(&self, level_id: u32) -> u8 {
        self.stars.get(&level_id).copied().unwrap_or(0)
    }

    pub fn total_stars(&self) -> u32 {
        self.stars.values().map(|&s| s as u32).sum()
    }

    pub fn can_afford(&self, kind: HintKind) -> bool {
        self.coins >= kind.cost()
    }

    /// Charge for a hint. Returns false (and charges nothing) if coins are short.
    pub fn try_spend(&mut self, kind: HintKind) -> bool {
        if !self.can_afford(kind) {
            return false;
        }
        self.coins -= kind.cost();
        true
    }

    pub fn add_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Book a completion report from a session
    pub fn apply_completion(&mut self, report: &CompletionReport) {
        let first = !self.has_completed(report.level_id);
        if first {
            self.completed_level_ids.push(report.level_id);
            self.total_score += FIRST_COMPLETION_SCORE;
            if report.level_id >= self.current_level_id {
                self.current_level_id = (report.level_id + 1).min(TOTAL_LEVELS);
            }
        } else {
            self.total_score += REPLAY_COMPLETION_SCORE;
        }
        self.coins = self.coins.saturating_add(report.coins);

        let best = self.stars.entry(report.level_id).or_insert(0);
        *best = (*best).max(report.stars);

        if let Some(trophy) = &report.trophy {
            if !self.unlocked_trophy_ids.contains(&trophy.id) {
                self.unlocked_trophy_ids.push(trophy.id.clone());
            }
        }
        self.stats.record(report);
        debug!(
            "booked level {} (first: {first}), coins now {}",
            report.level_id, self.coins
        );
    }

    /// Streak bookkeeping for a play on `day` (days since the Unix epoch)
    pub fn record_play_day(&mut self, day: u32) {
        let stats = &mut self.stats;
        match stats.last_play_day {
            Some(last) if last == day => return,
            Some(last) if last.checked_add(1) == Some(day) => stats.current_streak += 1,
            _ => stats.current_streak = 1,
        }
        stats.longest_streak = stats.longest_streak.max(stats.current_streak);
        stats.last_play_day = Some(day);
    }
}
