//! Deterministic string-seeded PRNG.
//!
//! ARC4 keystream keyed from the seed string, the same construction the
//! mobile app's seeded-random library uses, so a given seed yields the same
//! targets on every platform. The key schedule mixes the seed's UTF-16 code
//! units, the first 256 keystream bytes are discarded, and each float is
//! assembled from keystream bytes until it carries 52 bits of significance.

use serde::{Deserialize, Serialize};

const WIDTH: u32 = 256;
const MASK: usize = 255;
/// Bytes drawn for the first chunk of every float.
const CHUNKS: u32 = 6;

/// Raw ARC4 keystream state.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Arc4 {
    i: usize,
    j: usize,
    s: Vec<u8>,
}

impl Arc4 {
    fn new(key: &[u8]) -> Self {
        let key: &[u8] = if key.is_empty() { &[0] } else { key };
        let mut s: Vec<u8> = (0..=255).collect();
        let mut j = 0usize;
        for i in 0..WIDTH as usize {
            j = MASK & (j + key[i % key.len()] as usize + s[i] as usize);
            s.swap(i, j);
        }
        let mut arc4 = Self { i: 0, j: 0, s };
        for _ in 0..WIDTH {
            arc4.next_bytes(1);
        }
        arc4
    }

    /// Next `count` keystream bytes as a big-endian integer (`count <= 8`).
    fn next_bytes(&mut self, count: u32) -> u64 {
        let mut r = 0u64;
        for _ in 0..count {
            self.i = MASK & (self.i + 1);
            let t = self.s[self.i];
            self.j = MASK & (self.j + t as usize);
            self.s.swap(self.i, self.j);
            let k = self.s[MASK & (self.s[self.i] as usize + self.s[self.j] as usize)];
            r = r * u64::from(WIDTH) + u64::from(k);
        }
        r
    }
}

/// Folds the seed into a key of at most 256 bytes.
fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear: u32 = 0;
    for (j, unit) in seed.encode_utf16().enumerate() {
        let slot = MASK & j;
        let previous = key.get(slot).copied().unwrap_or(0);
        smear ^= u32::from(previous) * 19;
        let mixed = (MASK as u32 & smear.wrapping_add(u32::from(unit))) as u8;
        if slot < key.len() {
            key[slot] = mixed;
        } else {
            key.push(mixed);
        }
    }
    key
}

/// String-seeded generator of floats in [0, 1).
///
/// Two instances built from the same seed yield identical sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededRng {
    arc4: Arc4,
}

impl SeededRng {
    /// Any string is a valid seed, including the empty string.
    pub fn new(seed: &str) -> Self {
        Self {
            arc4: Arc4::new(&mix_key(seed)),
        }
    }

    /// Returns the next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        const SIGNIFICANCE: f64 = 4_503_599_627_370_496.0; // 2^52
        const OVERFLOW: f64 = 9_007_199_254_740_992.0; // 2^53

        let mut n = self.arc4.next_bytes(CHUNKS) as f64;
        let mut d = (u64::from(WIDTH)).pow(CHUNKS) as f64;
        let mut x = 0u64;
        while n < SIGNIFICANCE {
            n = (n + x as f64) * f64::from(WIDTH);
            d *= f64::from(WIDTH);
            x = self.arc4.next_bytes(1);
        }
        while n >= OVERFLOW {
            n /= 2.0;
            d /= 2.0;
            x >>= 1;
        }
        (n + x as f64) / d
    }

    /// Uniform index in [0, len) via `floor(draw * len)`.
    pub fn next_index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64).floor() as usize).min(len.saturating_sub(1))
    }
}
