//! Letter bitmasks and the rarity ordering that drives both indexing and search.
//!
//! A word is reduced to a 26 bit mask, bit `n` standing for the `n`-th letter of
//! the alphabet. Letters are then ranked from rarest to most common; the rank of
//! a word's rarest letter (its anchor) decides where the word is filed and when
//! the search gets to consider it.

pub const LETTERS: usize = 26;
pub const WORD_LEN: usize = 5;

/// Slots per anchor letter in the index: one per ladder rung plus a catch-all.
pub const BUCKETS: usize = 6;
pub const RUNGS: usize = BUCKETS - 1;

/// Words anchored on one of this many rarest letters seed the search.
pub const SEED_ANCHORS: usize = 2;

/// Letters from least to most frequent.
pub const RARITY_ORDER: [u8; LETTERS] = *b"qxjzvfwbkgpmhdcytlnuroisea";

/// Bitmask of the letter at each rarity rank.
pub const RARITY_BITS: [u32; LETTERS] = {
    let mut bits = [0; LETTERS];
    let mut rank = 0;
    while rank < LETTERS {
        bits[rank] = letter_bit(RARITY_ORDER[rank]);
        rank += 1;
    }
    bits
};

pub const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

/// Letter mask of `word`, or `None` if a byte is not a lowercase ASCII letter
/// or a letter repeats.
pub fn bitmask(word: &[u8; WORD_LEN]) -> Option<u32> {
    word.iter().try_fold(0u32, |bits, &letter| {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        let bit = letter_bit(letter);
        (bits & bit == 0).then_some(bits | bit)
    })
}

/// Rarity rank of the rarest letter in `bits`.
pub fn anchor(bits: u32) -> Option<usize> {
    RARITY_BITS.iter().position(|&bit| bits & bit != 0)
}

/// Letters that split an anchor's words into buckets.
///
/// A word lands in the bucket of the first rung whose letter it contains, or in
/// the last bucket when it contains none. Once a rung's letter is used up, the
/// search can pass over that whole bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Ladder {
    /// The five rarest letters, rarest first.
    #[default]
    Rarest,
    /// The five most common letters, most common first.
    Commonest,
}

impl Ladder {
    pub fn rungs(self) -> [u32; RUNGS] {
        let mut rungs = [0; RUNGS];
        for (i, rung) in rungs.iter_mut().enumerate() {
            *rung = match self {
                Ladder::Rarest => RARITY_BITS[i],
                Ladder::Commonest => RARITY_BITS[LETTERS - 1 - i],
            };
        }
        rungs
    }
}

/// Bucket of a word with letter mask `bits` on the given rungs.
pub fn bucket(rungs: &[u32; RUNGS], bits: u32) -> usize {
    rungs
        .iter()
        .position(|&rung| bits & rung != 0)
        .unwrap_or(RUNGS)
}
