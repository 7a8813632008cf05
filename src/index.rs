use std::array;

use crate::{
    alphabet::{self, Ladder, BUCKETS, LETTERS, RUNGS, SEED_ANCHORS},
    config::Limits,
    error::{Error, Result},
    word::Word,
};

/// Words filed under one (anchor, bucket) slot, as parallel id and mask columns
/// so the masks can be scanned in batches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bucket {
    ids: Vec<u32>,
    bits: Vec<u32>,
}

impl Bucket {
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn bits(&self) -> &[u32] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Unique words by anchor letter and rarity bucket, plus the words that seed
/// the search. Read-only once loading is done.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Index {
    rungs: [u32; RUNGS],
    slots: [[Bucket; BUCKETS]; LETTERS],
    seeds: Vec<Word>,
    limits: Limits,
}

impl Index {
    pub fn new(ladder: Ladder, limits: Limits) -> Self {
        Index {
            rungs: ladder.rungs(),
            slots: array::from_fn(|_| array::from_fn(|_| Bucket::default())),
            seeds: Vec::new(),
            limits,
        }
    }

    pub fn rungs(&self) -> &[u32; RUNGS] {
        &self.rungs
    }

    pub fn bucket(&self, anchor: usize, bucket: usize) -> &Bucket {
        &self.slots[anchor][bucket]
    }

    pub fn seeds(&self) -> &[Word] {
        &self.seeds
    }

    /// Total number of indexed words.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().map(Bucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Files `word` under its anchor and bucket, and among the seeds if its
    /// anchor is rare enough.
    pub fn insert(&mut self, word: &Word) -> Result<()> {
        let anchor = word.anchor();
        let bucket = alphabet::bucket(&self.rungs, word.bitword());

        let slot = &mut self.slots[anchor][bucket];
        if slot.len() >= self.limits.bucket {
            return Err(Error::CapacityExceeded {
                what: "index bucket",
                capacity: self.limits.bucket,
            });
        }
        slot.ids.push(word.id());
        slot.bits.push(word.bitword());

        if anchor < SEED_ANCHORS {
            if self.seeds.len() >= self.limits.seeds {
                return Err(Error::CapacityExceeded {
                    what: "seed list",
                    capacity: self.limits.seeds,
                });
            }
            self.seeds.push(*word);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: u32, text: &str) -> Word {
        Word::new(id, text.as_bytes()).unwrap()
    }

    #[test]
    fn files_by_anchor_and_bucket() {
        let mut index = Index::new(Ladder::Rarest, Limits::default());
        for (id, text) in ["abcde", "pqrst", "uvwxy", "fghij"].into_iter().enumerate() {
            index.insert(&word(id as u32, text)).unwrap();
        }

        assert_eq!(index.len(), 4);
        // b anchors abcde, none of q x j z v appear
        assert_eq!(index.bucket(7, RUNGS).ids(), &[0]);
        assert_eq!(index.bucket(0, 0).ids(), &[1]);
        assert_eq!(index.bucket(1, 1).ids(), &[2]);
        assert_eq!(index.bucket(2, 2).ids(), &[3]);
        assert_eq!(index.bucket(2, 2).bits(), &[word(3, "fghij").bitword()]);

        let seeds: Vec<u32> = index.seeds().iter().map(Word::id).collect();
        assert_eq!(seeds, vec![1, 2]);
    }

    #[test]
    fn commonest_ladder_splits_common_anchors() {
        let mut index = Index::new(Ladder::Commonest, Limits::default());
        index.insert(&word(0, "abcde")).unwrap();
        index.insert(&word(1, "brick")).unwrap();
        assert_eq!(index.bucket(7, 0).ids(), &[0]);
        assert_eq!(index.bucket(7, 3).ids(), &[1]);
    }

    #[test]
    fn full_bucket_is_an_error() {
        let limits = Limits {
            bucket: 1,
            ..Limits::default()
        };
        let mut index = Index::new(Ladder::Rarest, limits);
        index.insert(&word(0, "abcde")).unwrap();
        let err = index.insert(&word(1, "bdghk")).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { what: "index bucket", .. }));
    }

    #[test]
    fn full_seed_list_is_an_error() {
        let limits = Limits {
            seeds: 1,
            ..Limits::default()
        };
        let mut index = Index::new(Ladder::Rarest, limits);
        index.insert(&word(0, "pqrst")).unwrap();
        let err = index.insert(&word(1, "quack")).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { what: "seed list", .. }));
    }
}
