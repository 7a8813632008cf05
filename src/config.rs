use crate::{alphabet::Ladder, lanes::Intersect, pool};

/// How lines in the word list are terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LineEnding {
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn terminator(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::Crlf => b"\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        if cfg!(windows) {
            LineEnding::Crlf
        } else {
            LineEnding::Lf
        }
    }
}

/// Sizes of the fixed buffers. Running past one is an error, never a resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub words: usize,
    pub bucket: usize,
    pub seeds: usize,
    pub solutions: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            words: 65536,
            bucket: 8192,
            seeds: 4096,
            solutions: 8192,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub threads: usize,
    pub line_ending: LineEnding,
    pub ladder: Ladder,
    pub intersect: Intersect,
    pub limits: Limits,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            threads: pool::cpu_count(),
            line_ending: LineEnding::default(),
            ladder: Ladder::default(),
            intersect: Intersect::default(),
            limits: Limits::default(),
        }
    }
}
