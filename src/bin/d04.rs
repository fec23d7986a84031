use lib::prelude::*;

lib::entry!("d04.txt", expect = (18, 9), solve);

fn solve(mut input: Input) -> Result<(u64, u64)> {
    let mut rows = Vec::new();

    while let Some(line) = input.try_line::<&BStr>()? {
        if line.is_empty() {
            continue;
        }

        rows.push(line);
    }

    ensure!(!rows.is_empty(), "empty grid");

    let grid = Grid::from_rows(rows);

    let starts = search::find_all(&grid, b'X', 0);

    let o1 = search::count_matches(&starts, |pos| {
        search::count_word_directions(&grid, pos, b"XMAS") as u64
    });

    let cross = CrossPattern::new(b'A', [b'M', b'S']);
    let centers = search::find_all(&grid, cross.pivot(), 1);

    let o2 = search::count_matches(&centers, |pos| u64::from(cross.matches(&grid, pos)));

    Ok((o1, o2))
}
