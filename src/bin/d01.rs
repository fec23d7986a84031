use std::collections::HashMap;

use anyhow::{Context, Result};
use lib::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
enum DayError {
    #[error("input contains no location pairs")]
    Empty,
}

lib::entry!("d01.txt", expect = (11, 31), solve);

fn solve(mut input: Input) -> Result<(u64, u64)> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    while let Some((l, r)) = input
        .try_line::<(i64, i64)>()
        .context("parsing location pairs")?
    {
        left.push(l);
        right.push(r);
    }

    if left.is_empty() {
        return Err(DayError::Empty.into());
    }

    left.sort_unstable();
    right.sort_unstable();

    let o1 = left
        .iter()
        .zip(&right)
        .map(|(l, r)| l.abs_diff(*r))
        .sum::<u64>();

    let mut frequencies = HashMap::new();

    for &value in &right {
        *frequencies.entry(value).or_insert(0u64) += 1;
    }

    let o2 = left
        .iter()
        .map(|l| *l as u64 * frequencies.get(l).copied().unwrap_or_default())
        .sum::<u64>();

    Ok((o1, o2))
}
