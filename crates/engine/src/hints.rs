//! Hint targeting
//!
//! Unfound words are ranked hardest-first: longer words before shorter ones,
//! then words with fewer hinted cells. The sort is stable, so full ties keep
//! the level's word order.

use serde::{Deserialize, Serialize};

use crate::session::{FoundCell, WordInfo};
use crate::types::Coord;

/// What a successful hint revealed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum HintReveal {
    /// One cell added to the hinted set
    Letter { cell: Coord },
    /// A whole word marked found
    Word { word: String },
}

/// Indices into `words` of every unfound word, hardest first
pub fn hint_order(words: &[WordInfo], hinted: &[Coord]) -> Vec<usize> {
    let hinted_in = |w: &WordInfo| w.cells.iter().filter(|c| hinted.contains(c)).count();

    let mut order: Vec<usize> = (0..words.len()).filter(|&i| !words[i].found).collect();
    order.sort_by(|&a, &b| {
        let (wa, wb) = (&words[a], &words[b]);
        wb.word
            .chars()
            .count()
            .cmp(&wa.word.chars().count())
            .then_with(|| hinted_in(wa).cmp(&hinted_in(wb)))
    });
    order
}

/// Next cell to reveal for a single-letter hint.
///
/// Walks words in `order`; for each one tries its first cell, then its last,
/// then its first cell in reading order that is neither hinted nor found.
/// `None` once every candidate cell is already covered.
pub fn letter_target(
    words: &[WordInfo],
    order: &[usize],
    hinted: &[Coord],
    found: &[FoundCell],
) -> Option<Coord> {
    let open = |c: &Coord| !hinted.contains(c) && !found.iter().any(|f| f.coord() == *c);

    order.iter().find_map(|&i| {
        let cells = &words[i].cells;
        let first = cells.first().filter(|c| open(c));
        let last = cells.last().filter(|c| open(c));
        first.or(last).or_else(|| cells.iter().find(|c| open(c))).copied()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(word: &str, cells: &[(u8, u8)]) -> WordInfo {
        WordInfo {
            word: word.to_owned(),
            found: false,
            color: "#000000".to_owned(),
            cells: cells.iter().map(|&p| Coord::from(p)).collect(),
        }
    }

    fn row_word(word: &str, row: u8) -> WordInfo {
        let cells: Vec<(u8, u8)> = (0..word.len() as u8).map(|c| (row, c)).collect();
        info(word, &cells)
    }

    #[test]
    fn test_longest_first() {
        let words = vec![row_word("CAT", 0), row_word("HORSE", 1), row_word("BIRD", 2)];
        assert_eq!(hint_order(&words, &[]), vec![1, 2, 0]);
    }

    #[test]
    fn test_fewer_hints_first_on_equal_length() {
        let words = vec![row_word("LION", 0), row_word("BEAR", 1)];
        let hinted = [Coord::new(0, 0)];
        assert_eq!(hint_order(&words, &hinted), vec![1, 0]);
    }

    #[test]
    fn test_ties_keep_word_order() {
        let words = vec![row_word("ONE", 0), row_word("TWO", 1), row_word("SIX", 2)];
        assert_eq!(hint_order(&words, &[]), vec![0, 1, 2]);
    }

    #[test]
    fn test_found_words_skipped() {
        let mut words = vec![row_word("HORSE", 0), row_word("CAT", 1)];
        words[0].found = true;
        assert_eq!(hint_order(&words, &[]), vec![1]);
    }

    #[test]
    fn test_letter_progression() {
        let words = vec![row_word("BIRD", 0)];
        let order = hint_order(&words, &[]);
        let mut hinted = Vec::new();
        let mut revealed = Vec::new();
        while let Some(c) = letter_target(&words, &order, &hinted, &[]) {
            hinted.push(c);
            revealed.push(c);
        }
        assert_eq!(
            revealed,
            vec![Coord::new(0, 0), Coord::new(0, 3), Coord::new(0, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn test_letter_skips_found_cells() {
        let words = vec![row_word("BIRD", 0)];
        let found = [FoundCell::new(Coord::new(0, 0), "#fff")];
        let target = letter_target(&words, &[0], &[], &found);
        assert_eq!(target, Some(Coord::new(0, 3)));
    }

    #[test]
    fn test_letter_falls_through_to_next_word() {
        let words = vec![row_word("BIRD", 0), row_word("CAT", 1)];
        let hinted: Vec<Coord> = words[0].cells.clone();
        let order = hint_order(&words, &hinted);
        assert_eq!(letter_target(&words, &order, &hinted, &[]), Some(Coord::new(1, 0)));
    }
}
