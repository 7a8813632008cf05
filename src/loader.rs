//! Turns a raw word list into the word table and the search index.
//!
//! Parsing runs on every worker, each over its own run of whole lines, and
//! drops words into a shared slot buffer. Once the workers are joined the table
//! is put back in file order, so that deduplication keeps the first spelling in
//! the file no matter how many workers took part, and is then indexed on a
//! single thread.

use std::{ops::Range, time::Instant};

use itertools::Itertools;
use tracing::{debug, info};

use crate::{
    alphabet::WORD_LEN,
    config::{Config, LineEnding},
    error::Result,
    hashset::IntHashSet,
    index::Index,
    pool::{self, WorkerPool},
    slots::SlotBuffer,
    word::Word,
};

/// Everything the search needs, built once per run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<Word>,
    index: Index,
}

impl Corpus {
    /// Every parsed word, id order. Includes anagrams that were not indexed.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn word(&self, id: u32) -> &Word {
        &self.words[id as usize]
    }
}

pub fn load(bytes: &[u8], config: &Config, pool: &WorkerPool) -> Result<Corpus> {
    let start = Instant::now();
    let words = parse(bytes, config, pool)?;
    info!(
        words = words.len(),
        elapsed = ?start.elapsed(),
        "parsed word list"
    );

    let start = Instant::now();
    let corpus = build(words, config)?;
    info!(
        unique = corpus.index.len(),
        seeds = corpus.index.seeds().len(),
        elapsed = ?start.elapsed(),
        "indexed words"
    );
    Ok(corpus)
}

fn parse(bytes: &[u8], config: &Config, pool: &WorkerPool) -> Result<Vec<Word>> {
    let table = SlotBuffer::new("word table", config.limits.words);
    let ranges = line_ranges(bytes, pool.threads());

    pool.run(ranges, |worker, range| {
        debug!(worker, ?range, "parsing");
        parse_range(bytes, range, config.line_ending, &table)
    })?;

    Ok(table
        .into_vec()
        .into_iter()
        .sorted_unstable_by_key(|&(offset, _)| offset)
        .enumerate()
        .map(|(id, (_, word))| word.with_id(id as u32))
        .collect())
}

/// Splits `bytes` into `parts` contiguous ranges that each start on a line.
///
/// A nominal boundary in the middle of a line is moved forward past that line,
/// so every line belongs to the range holding its first byte.
fn line_ranges(bytes: &[u8], parts: usize) -> Vec<Range<usize>> {
    let starts = pool::partition(bytes.len(), parts)
        .into_iter()
        .map(|range| {
            let start = range.start;
            if start == 0 || bytes[start - 1] == b'\n' {
                return start;
            }
            bytes[start..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(bytes.len(), |newline| start + newline + 1)
        })
        .collect_vec();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| start..starts.get(i + 1).copied().unwrap_or(bytes.len()))
        .collect()
}

fn parse_range(
    bytes: &[u8],
    range: Range<usize>,
    ending: LineEnding,
    table: &SlotBuffer<(usize, Word)>,
) -> Result<()> {
    let mut offset = range.start;
    for line in bytes[range].split_inclusive(|&b| b == b'\n') {
        if let Some(word) = word_text(line, ending).and_then(|text| Word::new(0, text)) {
            table.push((offset, word))?;
        }
        offset += line.len();
    }
    Ok(())
}

/// The letters of `line` if it has exactly the fixed width. A last line without
/// a terminator counts as terminated.
fn word_text(line: &[u8], ending: LineEnding) -> Option<&[u8]> {
    let terminator = ending.terminator();
    let text = match line.strip_suffix(terminator) {
        Some(text) => text,
        None if line.last() == Some(&b'\n') => return None,
        None => line,
    };
    (text.len() == WORD_LEN).then_some(text)
}

/// Deduplicates by letter set, first occurrence first, and indexes the rest.
fn build(words: Vec<Word>, config: &Config) -> Result<Corpus> {
    let mut seen = IntHashSet::with_capacity(words.len() as u32);
    let mut index = Index::new(config.ladder, config.limits);
    for word in &words {
        if seen.add(word.bitword()) {
            index.insert(word)?;
        }
    }
    debug!(
        anagrams = words.len() - seen.len(),
        nodes = seen.allocated(),
        "deduplicated"
    );
    Ok(Corpus { words, index })
}
