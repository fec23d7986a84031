use lib::prelude::*;
use lib::Input;

lib::entry!("d03.txt", expect = (161, 48), solve);

fn solve(input: Input) -> Result<(u64, u64)> {
    let memory = input.as_bstr().as_bytes();

    let o1 = sum_of_muls(input.path(), memory)?;
    let o2 = enabled_sum(input.path(), memory)?;

    Ok((o1, o2))
}

/// Sum the products of every well-formed `mul(a,b)` in `memory`.
fn sum_of_muls(path: &'static str, memory: &'static [u8]) -> Result<u64> {
    let mut scanner = Input::new(path, memory);
    let mut total = 0;

    while !scanner.is_empty() {
        if !scanner.eat(b"mul(") {
            scanner.advance(1);
            continue;
        }

        if let Some((a, b)) = arguments(&mut scanner)? {
            total += a * b;
        }
    }

    Ok(total)
}

/// Like [sum_of_muls], but only over the enabled sections of `memory`.
///
/// A `do()` is implied at the start, and everything from a `don't()` up to
/// the next `do()` is dropped.
fn enabled_sum(path: &'static str, memory: &'static [u8]) -> Result<u64> {
    let mut total = 0;

    for section in memory.split_str("do()") {
        let enabled = section.split_str("don't()").next().unwrap_or_default();
        total += sum_of_muls(path, enabled)?;
    }

    Ok(total)
}

/// The `a,b)` argument tail of a `mul` instruction, if well formed.
fn arguments(scanner: &mut Input) -> Result<Option<(u64, u64)>> {
    let Some(a) = scanner.try_digits::<u64>()? else {
        return Ok(None);
    };

    if !scanner.eat(b",") {
        return Ok(None);
    }

    let Some(b) = scanner.try_digits::<u64>()? else {
        return Ok(None);
    };

    if !scanner.eat(b")") {
        return Ok(None);
    }

    Ok(Some((a, b)))
}
