pub mod cli;
pub mod grid;
pub mod input;
pub mod search;

pub use self::input::{FromLine, FromWord, Input};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cli;
    pub use crate::grid::Grid;
    pub use crate::input::Input;
    pub use crate::search::{self, CrossPattern, Pos};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
}

/// Input processing.
///
/// Reads the file at `read_path` and leaks it, so that the returned cursor is
/// freely copyable for the lifetime of the process.
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<Input> {
    use anyhow::{anyhow, Context};

    let data = std::fs::read(read_path).with_context(|| anyhow!("{path}"))?;
    Ok(Input::new(path, Box::leak(data.into_boxed_slice())))
}

/// Prepare an input processor over `inputs/<path>`.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        $crate::input(path, read_path)?
    }};
}

/// Build the entry point for a day binary.
///
/// Parses CLI options, reads the given input, and hands a copy of the input
/// cursor to the solver either once (timed) or repeatedly under `--bench`.
#[macro_export]
macro_rules! entry {
    ($path:literal, expect = $expect:expr, $solve:expr) => {
        fn main() -> $crate::prelude::Result<()> {
            let opts = $crate::cli::Opts::parse()?;
            let input = $crate::input!($path);
            $crate::cli::run(&opts, Some($expect), || ($solve)(input.clone()))
        }
    };
}
