use std::{fs::File, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info_span;
use tracing_subscriber::EnvFilter;

use five_five::{alphabet::Ladder, lanes::Intersect, Config, LineEnding, Limits, Outcome};

/// Find five five-letter words that use 25 different letters.
#[derive(Parser)]
#[clap(version)]
struct Args {
    /// Word list, one word per line
    #[clap(default_value = "words_alpha.txt")]
    words: PathBuf,

    /// Where to write the solutions
    #[clap(short, long, default_value = "solution.txt")]
    output: PathBuf,

    /// Worker threads [default: number of CPUs]
    #[clap(short = 'j', long)]
    threads: Option<usize>,

    /// Line terminator of the word list [default: platform's]
    #[clap(long, value_enum)]
    line_ending: Option<LineEnding>,

    /// Letters that split each anchor's words into buckets [default: rarest]
    #[clap(long, value_enum)]
    ladder: Option<Ladder>,

    /// How candidate words are tested against the letters used [default: lanes]
    #[clap(long, value_enum)]
    intersect: Option<Intersect>,

    /// Repeat the whole run this many times, each from scratch
    #[clap(long, default_value_t = 1)]
    runs: usize,

    #[clap(long)]
    max_words: Option<usize>,

    #[clap(long)]
    max_bucket: Option<usize>,

    #[clap(long)]
    max_seeds: Option<usize>,

    #[clap(long)]
    max_solutions: Option<usize>,
}

impl Args {
    fn config(&self) -> Config {
        let defaults = Config::default();
        let limits = Limits {
            words: self.max_words.unwrap_or(defaults.limits.words),
            bucket: self.max_bucket.unwrap_or(defaults.limits.bucket),
            seeds: self.max_seeds.unwrap_or(defaults.limits.seeds),
            solutions: self.max_solutions.unwrap_or(defaults.limits.solutions),
        };
        Config {
            threads: self.threads.unwrap_or(defaults.threads),
            line_ending: self.line_ending.unwrap_or(defaults.line_ending),
            ladder: self.ladder.unwrap_or(defaults.ladder),
            intersect: self.intersect.unwrap_or(defaults.intersect),
            limits,
        }
    }
}

fn solve(args: &Args, config: &Config, run: usize) -> Result<Outcome> {
    let _span = info_span!("run", run).entered();
    five_five::run_file(&args.words, config.clone())
        .with_context(|| format!("solving {}", args.words.display()))
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = args.config();
    let start = Instant::now();

    let mut outcome = solve(&args, &config, 1)?;
    for run in 2..=args.runs {
        outcome = solve(&args, &config, run)?;
    }

    let output = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    outcome
        .write_to(output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("{} solutions", outcome.solutions.len());
    println!("{:.2} seconds", start.elapsed().as_secs_f32());
    Ok(())
}
