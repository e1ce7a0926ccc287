//! Scoring module - star ratings and coin rewards
//!
//! Both are table lookups on the difficulty tier, see
//! [`Difficulty::star_thresholds`] and [`Difficulty::reward_coins`].

use crate::types::{Difficulty, REPLAY_REWARD_COINS};

/// Stars earned for finishing a `difficulty` level in `time_secs`.
///
/// Thresholds are inclusive: finishing in exactly the 3-star time still earns 3.
///
/// # Examples
///
/// ```
/// use word_search_core::calculate_stars;
/// use word_search_core::types::Difficulty;
///
/// assert_eq!(calculate_stars(30, Difficulty::Easy), 3);
/// assert_eq!(calculate_stars(31, Difficulty::Easy), 2);
/// assert_eq!(calculate_stars(61, Difficulty::Easy), 1);
/// ```
pub fn calculate_stars(time_secs: u32, difficulty: Difficulty) -> u8 {
    let t = difficulty.star_thresholds();
    if time_secs <= t.three_star_secs {
        3
    } else if time_secs <= t.two_star_secs {
        2
    } else {
        1
    }
}

/// Coins paid for a completion: the tier reward the first time, a flat amount on replays
pub fn completion_reward(difficulty: Difficulty, is_first_completion: bool) -> u32 {
    if is_first_completion {
        difficulty.reward_coins()
    } else {
        REPLAY_REWARD_COINS
    }
}

/// Format seconds as `m:ss`
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
