use super::Grid;
use crate::search::Pos;

fn sample() -> Grid {
    Grid::from_rows(["..X...", ".SAMX.", ".A..A.", "XMAS.S", ".X...."])
}

#[test]
fn dimensions() {
    let grid = sample();
    assert_eq!(grid.width(), 6);
    assert_eq!(grid.height(), 5);

    let empty = Grid::from_rows(core::iter::empty::<&[u8]>());
    assert_eq!(empty.width(), 0);
    assert_eq!(empty.height(), 0);
}

#[test]
fn cell_access() {
    let grid = sample();
    assert_eq!(grid.at(Pos::new(2, 0)), b'X');
    assert_eq!(grid.try_at(Pos::new(0, 3)), Some(b'X'));
    assert_eq!(grid.try_at(Pos::new(6, 0)), None);
    assert_eq!(grid.try_at(Pos::new(0, 5)), None);
    assert_eq!(grid.try_at(Pos::new(-1, 0)), None);
    assert_eq!(grid.try_at(Pos::new(0, -1)), None);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn at_out_of_bounds() {
    sample().at(Pos::new(6, 0));
}

#[test]
fn contains_with_margin() {
    let grid = sample();

    assert!(grid.contains(Pos::new(0, 0), 0));
    assert!(grid.contains(Pos::new(5, 4), 0));
    assert!(!grid.contains(Pos::new(6, 4), 0));
    assert!(!grid.contains(Pos::new(-1, 0), 0));

    assert!(!grid.contains(Pos::new(0, 0), 1));
    assert!(grid.contains(Pos::new(1, 1), 1));
    assert!(grid.contains(Pos::new(4, 3), 1));
    assert!(!grid.contains(Pos::new(5, 3), 1));
    assert!(!grid.contains(Pos::new(4, 4), 1));
}

#[test]
fn jagged_rows() {
    let grid = Grid::from_rows(["abc", "a"]);
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.try_at(Pos::new(0, 1)), Some(b'a'));
    assert_eq!(grid.try_at(Pos::new(2, 1)), None);
}
