//! Candidate filtering: which bitmasks in a bucket share no letter with the
//! letters already used.
//!
//! `Lanes` tests eight masks per step and collects the hits in a byte, which the
//! compiler turns into vector compares on targets that have them. `Scalar`
//! tests one mask at a time. Both visit the same candidates in the same order.

pub const LANES: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Intersect {
    Scalar,
    #[default]
    Lanes,
}

impl Intersect {
    /// Calls `visit` with the position of every mask in `bits` disjoint from
    /// `used`, in ascending order, stopping at the first error.
    pub fn try_for_each_disjoint<E>(
        self,
        bits: &[u32],
        used: u32,
        visit: impl FnMut(usize) -> Result<(), E>,
    ) -> Result<(), E> {
        match self {
            Intersect::Scalar => scalar(bits, used, 0, visit),
            Intersect::Lanes => lanes(bits, used, visit),
        }
    }
}

fn scalar<E>(
    bits: &[u32],
    used: u32,
    base: usize,
    mut visit: impl FnMut(usize) -> Result<(), E>,
) -> Result<(), E> {
    for (i, &word) in bits.iter().enumerate() {
        if word & used == 0 {
            visit(base + i)?;
        }
    }
    Ok(())
}

fn lanes<E>(
    bits: &[u32],
    used: u32,
    mut visit: impl FnMut(usize) -> Result<(), E>,
) -> Result<(), E> {
    let mut chunks = bits.chunks_exact(LANES);
    for (c, chunk) in chunks.by_ref().enumerate() {
        let mut hits = disjoint_lanes(chunk, used);
        while hits != 0 {
            visit(c * LANES + hits.trailing_zeros() as usize)?;
            hits &= hits - 1;
        }
    }
    let base = bits.len() - chunks.remainder().len();
    scalar(chunks.remainder(), used, base, visit)
}

#[inline]
fn disjoint_lanes(chunk: &[u32], used: u32) -> u8 {
    let mut lanes = [0u32; LANES];
    lanes.copy_from_slice(chunk);
    lanes
        .iter()
        .enumerate()
        .fold(0u8, |hits, (lane, &word)| hits | (((word & used == 0) as u8) << lane))
}
