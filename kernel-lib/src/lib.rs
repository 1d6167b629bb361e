//! Batch kernels for the Haircut and ConvIntervals problems.

#[macro_use]
extern crate log;

pub mod bit;
pub mod coverage;
pub mod error;
pub mod haircut;
pub mod input;
pub mod monoid;

use std::fmt::Display;
use std::time::{Duration, Instant};

pub use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kernel {
    Haircut,
    ConvIntervals,
}

impl Kernel {
    pub const ALL: [Kernel; 2] = [Kernel::Haircut, Kernel::ConvIntervals];

    pub fn name(self) -> &'static str {
        match self {
            Kernel::Haircut => "haircut",
            Kernel::ConvIntervals => "conv-intervals",
        }
    }

    pub fn from_name(name: &str) -> Option<Kernel> {
        Kernel::ALL.iter().cloned().find(|k| k.name() == name)
    }

    /// Parses `input`, computes, and renders one value per line.
    pub fn run(self, input: &str) -> Result<String> {
        match self {
            Kernel::Haircut => {
                let hairs = haircut::parse(input)?;
                Ok(render_lines(&haircut::badness(&hairs)?))
            }
            Kernel::ConvIntervals => {
                let set = coverage::parse(input)?;
                Ok(render_lines(&coverage::coverage(&set)?))
            }
        }
    }
}

pub fn render_lines<T: Display>(values: &[T]) -> String {
    values.iter().map(|value| format!("{}\n", value)).collect()
}

/// Runs `f` and measures its wall-clock time.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        for &kernel in Kernel::ALL.iter() {
            assert_eq!(Some(kernel), Kernel::from_name(kernel.name()));
        }
        assert_eq!(None, Kernel::from_name("haircuts"));
    }

    #[test]
    fn test_run() {
        assert_eq!("0\n4\n4\n5\n7\n", Kernel::Haircut.run("5\n5 2 3 3 0\n").unwrap());
        assert_eq!("0\n", Kernel::Haircut.run("1\n0\n").unwrap());
        assert_eq!(
            "0\n0\n1\n3\n4\n4\n4\n3\n3\n1\n1\n",
            Kernel::ConvIntervals.run("2 5\n1 3\n2 5\n").unwrap()
        );
        assert!(Kernel::ConvIntervals.run("1 5\n3 1\n").is_err());
    }

    #[test]
    fn test_timed() {
        let (value, elapsed) = timed(|| 6 * 7);
        assert_eq!(42, value);
        assert!(elapsed < Duration::from_secs(60));
    }
}
