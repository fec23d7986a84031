use lib::prelude::*;

lib::entry!("d02.txt", expect = (2, 4), solve);

fn solve(mut input: Input) -> Result<(u32, u32)> {
    let mut o1 = 0;
    let mut o2 = 0;

    while let Some(levels) = input.try_line::<ArrayVec<i64>>()? {
        if levels.is_empty() {
            continue;
        }

        ensure!(levels.len() > 1, "report with a single level");

        if safe(&levels) {
            o1 += 1;
            o2 += 1;
            continue;
        }

        if dampened(&levels) {
            o2 += 1;
        }
    }

    Ok((o1, o2))
}

#[inline]
fn inc(a: i64, b: i64) -> bool {
    matches!(b - a, 1..=3)
}

#[inline]
fn dec(a: i64, b: i64) -> bool {
    matches!(a - b, 1..=3)
}

fn safe(levels: &[i64]) -> bool {
    monotonic(levels, inc) || monotonic(levels, dec)
}

fn monotonic(levels: &[i64], ok: fn(i64, i64) -> bool) -> bool {
    levels.windows(2).all(|w| ok(w[0], w[1]))
}

/// Retry with one level removed at the first position where the rule breaks,
/// trying both ends of the offending pair.
fn dampened(levels: &[i64]) -> bool {
    retry(levels, inc) || retry(levels, dec)
}

fn retry(levels: &[i64], ok: fn(i64, i64) -> bool) -> bool {
    let Some(n) = levels.windows(2).position(|w| !ok(w[0], w[1])) else {
        return true;
    };

    without(levels, n, ok) || without(levels, n + 1, ok)
}

fn without(levels: &[i64], skip: usize, ok: fn(i64, i64) -> bool) -> bool {
    let mut fixed = ArrayVec::<i64>::new();

    fixed.extend(
        levels
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &value)| value),
    );

    monotonic(&fixed, ok)
}
