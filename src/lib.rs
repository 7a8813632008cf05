//! Finds every set of five five-letter words that together use 25 distinct
//! letters.
//!
//! A run goes through two parallel phases with a full join in between:
//!
//! - **load**: the word list is parsed on every worker, then deduplicated by
//!   letter set and filed into an index by rarest letter ([`loader`]).
//! - **search**: the words anchored on the two rarest letters seed independent
//!   backtracking searches, one slice of seeds per worker ([`search`]).
//!
//! State lives in a [`Context`] built per run, so repeated runs share nothing.

use std::{fs, path::Path, time::Instant};

use tracing::info;

pub mod alphabet;
pub mod config;
pub mod error;
pub mod hashset;
pub mod index;
pub mod lanes;
pub mod loader;
pub mod output;
pub mod pool;
pub mod search;
pub mod slots;
pub mod word;

pub use config::{Config, LineEnding, Limits};
pub use error::{Error, Result};
pub use loader::Corpus;
pub use search::Solution;
pub use word::Word;

use pool::WorkerPool;

/// Solutions of one run together with the words their ids refer to.
#[derive(Debug)]
pub struct Outcome {
    pub corpus: Corpus,
    pub solutions: Vec<Solution>,
}

impl Outcome {
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.solutions
            .iter()
            .map(|solution| output::line(self.corpus.words(), solution))
    }

    pub fn write_to<W: std::io::Write>(&self, out: W) -> Result<()> {
        output::write_solutions(out, self.corpus.words(), &self.solutions)?;
        Ok(())
    }
}

/// Everything one run needs, owned by that run.
pub struct Context {
    config: Config,
    pool: WorkerPool,
}

impl Context {
    pub fn new(config: Config) -> Result<Self> {
        let pool = WorkerPool::new(config.threads)?;
        Ok(Context { config, pool })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn solve(&self, bytes: &[u8]) -> Result<Outcome> {
        let start = Instant::now();
        let corpus = loader::load(bytes, &self.config, &self.pool)?;
        let solutions = search::solve(
            corpus.index(),
            self.config.intersect,
            self.config.limits.solutions,
            &self.pool,
        )?;
        info!(
            threads = self.pool.threads(),
            solutions = solutions.len(),
            elapsed = ?start.elapsed(),
            "run finished"
        );
        Ok(Outcome { corpus, solutions })
    }
}

/// Solves the word list in `bytes` with a fresh context.
pub fn run(bytes: &[u8], config: Config) -> Result<Outcome> {
    Context::new(config)?.solve(bytes)
}

/// Reads the word list at `path` and solves it with a fresh context.
pub fn run_file(path: impl AsRef<Path>, config: Config) -> Result<Outcome> {
    let path = path.as_ref();
    let start = Instant::now();
    let bytes = fs::read(path).map_err(|source| Error::Input {
        path: path.to_owned(),
        source,
    })?;
    info!(bytes = bytes.len(), elapsed = ?start.elapsed(), "read {}", path.display());
    run(&bytes, config)
}
