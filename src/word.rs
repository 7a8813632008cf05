use std::fmt::{Debug, Display};

use crate::alphabet::{self, WORD_LEN};

/// A five letter word without repeated letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    id: u32,
    bytes: [u8; WORD_LEN],
    bitword: u32,
    anchor: u8,
}

impl Word {
    /// `None` unless `bytes` is exactly five distinct lowercase letters.
    pub fn new(id: u32, bytes: &[u8]) -> Option<Word> {
        let bytes: [u8; WORD_LEN] = bytes.try_into().ok()?;
        let bitword = alphabet::bitmask(&bytes)?;
        let anchor = alphabet::anchor(bitword)? as u8;
        Some(Word {
            id,
            bytes,
            bitword,
            anchor,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn bytes(&self) -> &[u8; WORD_LEN] {
        &self.bytes
    }

    pub fn bitword(&self) -> u32 {
        self.bitword
    }

    /// Rarity rank of the word's rarest letter.
    pub fn anchor(&self) -> usize {
        self.anchor as usize
    }

    pub(crate) fn with_id(self, id: u32) -> Word {
        Word { id, ..self }
    }
}

impl Debug for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {:#028b} {self}", self.id, self.bitword)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}
