//! Grid packer properties across the whole catalog

use word_search::catalog::{generate_level, Level};
use word_search::core::{generate_grid, GridPacker, PackSeed, PackedGrid, PackerConfig};
use word_search::engine::pack_level;
use word_search::types::{Coord, Language, DIRECTIONS, TOTAL_LEVELS};

fn assert_valid_pack(level: &Level, packed: &PackedGrid) {
    let grid = &packed.grid;
    assert_eq!(grid.size(), level.grid_size, "level {}", level.id);
    assert!(grid.is_filled(), "level {} has blanks", level.id);
    assert!(grid
        .cells()
        .all(|cell| matches!(cell.letter, Some('A'..='Z'))));

    for word in &level.words {
        let cells = packed
            .placements
            .get(word)
            .unwrap_or_else(|| panic!("level {}: {word} not placed", level.id));
        assert_eq!(cells.len(), word.len());
        assert!(is_straight(cells), "level {}: {word} bent", level.id);
        assert_eq!(grid.read_line(cells).as_deref(), Some(word.as_str()));
    }
}

fn is_straight(cells: &[Coord]) -> bool {
    if cells.len() < 2 {
        return true;
    }
    let step = (
        cells[1].row as i8 - cells[0].row as i8,
        cells[1].col as i8 - cells[0].col as i8,
    );
    DIRECTIONS.contains(&step)
        && cells.windows(2).all(|w| {
            (w[1].row as i8 - w[0].row as i8, w[1].col as i8 - w[0].col as i8) == step
        })
}

#[test]
fn test_every_level_packs() {
    for lang in Language::ALL {
        for id in 1..=TOTAL_LEVELS {
            let level = generate_level(id, lang);
            let packed = pack_level(&level)
                .unwrap_or_else(|| panic!("level {id} ({}) did not pack", lang.as_str()));
            assert_valid_pack(&level, &packed);
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    for id in [1, 24, 37, 50, 333, 999] {
        let level = generate_level(id, Language::En);
        let a = generate_grid(level.grid_size, &level.words, PackSeed::Fixed(id));
        let b = generate_grid(level.grid_size, &level.words, PackSeed::Fixed(id));
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.placements, b.placements);
        assert_eq!(a.retries, b.retries);
    }
}

#[test]
fn test_level_one_golden() {
    let level = generate_level(1, Language::En);
    let packed = generate_grid(4, &level.words, PackSeed::Fixed(1));
    assert_eq!(packed.retries, 0);
    assert_eq!(packed.grid.rows(), vec!["ESAG", "ENUL", "ROUE", "TWFN"]);
    assert_eq!(
        packed.placements["TREE"],
        vec![
            Coord::new(3, 0),
            Coord::new(2, 0),
            Coord::new(1, 0),
            Coord::new(0, 0)
        ]
    );
}

#[test]
fn test_entropy_seed_still_valid() {
    let level = generate_level(45, Language::Es);
    for _ in 0..5 {
        let packed = generate_grid(level.grid_size, &level.words, PackSeed::Entropy);
        assert_valid_pack(&level, &packed);
    }
}

#[test]
fn test_too_long_word_gives_blank_grid() {
    let packer = GridPacker::new(PackerConfig {
        max_retries: 3,
        ..PackerConfig::default()
    });
    let packed = packer.pack(4, &["ABCDE"], PackSeed::Fixed(9));
    assert!(packed.is_failure());
    assert!(packed.grid.is_empty());
    assert!(packed.placements.is_empty());
    assert_eq!(packed.retries, 3);
}
