//! String-seeded deterministic random stream
//!
//! The generator is an RC4 keystream keyed by mixing the seed string, with the first
//! 256 bytes discarded. Floats are assembled from the keystream with 52 significant
//! bits so that a given seed string always reproduces the same floor.

use crate::io::configuration::SEED_ALPHABET;
use rand::Rng;

const WIDTH: usize = 256;
const MASK: usize = WIDTH - 1;
/// Keystream bytes consumed for the initial numerator
const CHUNKS: usize = 6;
/// 2^48, the denominator matching `CHUNKS` bytes
const START_DENOM: f64 = 281_474_976_710_656.0;
/// 2^52
const SIGNIFICANCE: u64 = 1 << 52;
/// 2^53
const OVERFLOW: u64 = 1 << 53;

#[derive(Debug, Clone)]
struct Arc4 {
    i: usize,
    j: usize,
    s: [u8; WIDTH],
}

// Indices into `s` are always masked to the table width
#[allow(clippy::indexing_slicing)]
impl Arc4 {
    fn new(key: &[u8]) -> Self {
        let key: &[u8] = if key.is_empty() { &[0] } else { key };
        let mut s = [0_u8; WIDTH];
        for (slot, value) in s.iter_mut().zip(0..=u8::MAX) {
            *slot = value;
        }

        let mut j = 0_usize;
        for i in 0..WIDTH {
            let k = key.get(i % key.len()).copied().unwrap_or(0);
            j = MASK & (j + usize::from(k) + usize::from(s[i]));
            s.swap(i, j);
        }

        let mut arc4 = Self { i: 0, j: 0, s };
        // RC4-drop[256]
        arc4.next_bytes(WIDTH);
        arc4
    }

    /// Read `count` keystream bytes as a big-endian integer
    fn next_bytes(&mut self, count: usize) -> u64 {
        let mut r = 0_u64;
        for _ in 0..count {
            self.i = MASK & (self.i + 1);
            let t = self.s[self.i];
            self.j = MASK & (self.j + usize::from(t));
            self.s.swap(self.i, self.j);
            let index = MASK & (usize::from(self.s[self.i]) + usize::from(self.s[self.j]));
            r = r.wrapping_mul(WIDTH as u64) + u64::from(self.s[index]);
        }
        r
    }
}

// Folds the UTF-16 code units of the seed into a key of at most 256 bytes
fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear = 0_u32;

    for (j, unit) in seed.encode_utf16().enumerate() {
        let index = MASK & j;
        if index >= key.len() {
            key.resize(index + 1, 0);
        }
        if let Some(slot) = key.get_mut(index) {
            smear ^= u32::from(*slot) * 19;
            *slot = ((smear + u32::from(unit)) & MASK as u32) as u8;
        }
    }

    key
}

/// Deterministic random stream producing values in `[0, 1)` from a string seed
///
/// The stream is consumed monotonically; there is no way to rewind it. Every
/// consumer in the generation pipeline draws from the same instance in a fixed
/// order, which is what makes a floor reproducible from its seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    arc4: Arc4,
    draws: u64,
}

impl SeededRandom {
    /// Create a stream keyed by `seed`
    pub fn new(seed: &str) -> Self {
        Self {
            arc4: Arc4::new(&mix_key(seed)),
            draws: 0,
        }
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.draws += 1;

        let mut n = self.arc4.next_bytes(CHUNKS);
        let mut d = START_DENOM;
        let mut x = 0_u64;

        while n < SIGNIFICANCE {
            n = (n + x) * WIDTH as u64;
            d *= WIDTH as f64;
            x = self.arc4.next_bytes(1);
        }
        while n >= OVERFLOW {
            n /= 2;
            d /= 2.0;
            x >>= 1;
        }

        (n + x) as f64 / d
    }

    /// `floor(next * (max - min) + min)`, an integer in `[min, max)` for `min < max`
    // A fused multiply-add rounds differently and would break seed compatibility
    #[allow(clippy::suboptimal_flops)]
    pub fn next_int(&mut self, min: f64, max: f64) -> i64 {
        (self.next_f64() * (max - min) + min).floor() as i64
    }

    /// Integer in `[min, max]`
    #[allow(clippy::suboptimal_flops)]
    pub fn next_int_inclusive(&mut self, min: i64, max: i64) -> i64 {
        let span = (max - min + 1) as f64;
        (self.next_f64() * span + min as f64).floor() as i64
    }

    /// Number of values drawn so far
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

/// Random alphanumeric seed string of the given length
pub fn random_seed<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    let alphabet = SEED_ALPHABET.as_bytes();
    (0..length)
        .filter_map(|_| alphabet.get(rng.random_range(0..alphabet.len())))
        .map(|&byte| char::from(byte))
        .collect()
}
