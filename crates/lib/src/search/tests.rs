use super::{count_matches, count_word_directions, find_all, CrossPattern, Pos};
use crate::grid::Grid;

const WORD_SAMPLE: [&str; 5] = ["..X...", ".SAMX.", ".A..A.", "XMAS.S", ".X...."];

const CROSS_SAMPLE: [&str; 10] = [
    ".M.S......",
    "..A..MSMS.",
    ".M.S.MAA..",
    "..A.ASMSM.",
    ".M.S.M....",
    "..........",
    "S.S.S.S.S.",
    ".A.A.A.A..",
    "M.M.M.M.M.",
    "..........",
];

const FULL_SAMPLE: [&str; 10] = [
    "MMMSXXMASM",
    "MSAMXMSMSA",
    "AMXSXMAAMM",
    "MSAMASMSMX",
    "XMASAMXAMM",
    "XXAMMXXAMA",
    "SMSMSASXSS",
    "SAXAMASAAA",
    "MAMMMXMMMM",
    "MXMXAXMASX",
];

fn word_total(grid: &Grid, anchor: u8, word: &[u8]) -> u64 {
    let starts = find_all(grid, anchor, 0);
    count_matches(&starts, |pos| count_word_directions(grid, pos, word) as u64)
}

fn cross_total(grid: &Grid, pattern: CrossPattern) -> u64 {
    let centers = find_all(grid, pattern.pivot(), 1);
    count_matches(&centers, |pos| u64::from(pattern.matches(grid, pos)))
}

#[test]
fn single_character_word_matches_every_direction() {
    let grid = Grid::from_rows(["AB", "CD"]);
    assert_eq!(count_word_directions(&grid, Pos::new(0, 0), b"A"), 8);
    assert_eq!(count_word_directions(&grid, Pos::new(1, 1), b"D"), 8);
}

#[test]
fn word_forced_out_of_bounds() {
    let grid = Grid::from_rows(["X"]);
    assert_eq!(count_word_directions(&grid, Pos::new(0, 0), b"XM"), 0);
}

#[test]
fn word_in_a_single_direction() {
    let grid = Grid::from_rows(["XMAS"]);
    assert_eq!(count_word_directions(&grid, Pos::new(0, 0), b"XMAS"), 1);
}

#[test]
fn word_sample() {
    let grid = Grid::from_rows(WORD_SAMPLE);
    assert_eq!(word_total(&grid, b'X', b"XMAS"), 4);
}

#[test]
fn full_sample() {
    let grid = Grid::from_rows(FULL_SAMPLE);
    assert_eq!(word_total(&grid, b'X', b"XMAS"), 18);
    assert_eq!(cross_total(&grid, CrossPattern::new(b'A', [b'M', b'S'])), 9);
}

#[test]
fn cross_sample() {
    let grid = Grid::from_rows(CROSS_SAMPLE);
    assert_eq!(cross_total(&grid, CrossPattern::new(b'A', [b'M', b'S'])), 9);
}

#[test]
fn cross_pattern_cases() {
    let pattern = CrossPattern::new(b'A', [b'M', b'S']);

    // Arms in either order along each axis.
    let grid = Grid::from_rows(["M.M", ".A.", "S.S"]);
    assert!(pattern.matches(&grid, Pos::new(1, 1)));

    let grid = Grid::from_rows(["M.S", ".A.", "M.S"]);
    assert!(pattern.matches(&grid, Pos::new(1, 1)));

    // The same arm on both ends of an axis.
    let grid = Grid::from_rows(["M.M", ".A.", "M.M"]);
    assert!(!pattern.matches(&grid, Pos::new(1, 1)));

    // The pivot itself on a diagonal.
    let grid = Grid::from_rows(["A.M", ".A.", "S.S"]);
    assert!(!pattern.matches(&grid, Pos::new(1, 1)));

    // A foreign character on a diagonal.
    let grid = Grid::from_rows(["X.M", ".A.", "S.S"]);
    assert!(!pattern.matches(&grid, Pos::new(1, 1)));
}

#[test]
fn find_all_respects_margin() {
    let grid = Grid::from_rows(["XX", "XX"]);

    let all = find_all(&grid, b'X', 0);
    assert_eq!(
        all,
        [
            Pos::new(0, 0),
            Pos::new(1, 0),
            Pos::new(0, 1),
            Pos::new(1, 1)
        ]
    );

    assert!(find_all(&grid, b'X', 1).is_empty());
}

#[test]
fn find_all_excludes_border_cells() {
    let grid = Grid::from_rows(WORD_SAMPLE);
    let interior = find_all(&grid, b'X', 1);

    assert_eq!(interior, [Pos::new(4, 1)]);
    assert!(interior.iter().all(|&pos| grid.contains(pos, 1)));
}

#[test]
fn find_all_is_deterministic() {
    let grid = Grid::from_rows(FULL_SAMPLE);
    assert_eq!(find_all(&grid, b'A', 1), find_all(&grid, b'A', 1));
}

#[test]
fn empty_fold_is_zero() {
    assert_eq!(count_matches(&[], |_| 1), 0);
}
