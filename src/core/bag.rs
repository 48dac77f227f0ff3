//! Letter bag for one round
//!
//! A small multiset of ASCII lowercase letters. One bag is sampled fresh per
//! round attempt; the enumeration search keeps its own used-mask, so the bag
//! itself stays immutable once sampled.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Error type for invalid bag input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for BagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Letter bag must contain at least one letter"),
            Self::InvalidCharacters => {
                write!(f, "Letter bag must contain only ASCII letters")
            }
        }
    }
}

impl std::error::Error for BagError {}

/// The multiset of letters for one round
///
/// # Examples
/// ```
/// use scramble::core::LetterBag;
///
/// let bag: LetterBag = "tac".parse().unwrap();
/// assert_eq!(bag.len(), 3);
/// assert_eq!(bag.as_str(), "tac");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBag {
    letters: Vec<u8>,
}

impl LetterBag {
    /// Sample a bag of `size` letters, each uniform over the 26-letter alphabet
    ///
    /// Deliberately not frequency-weighted, so bags may lack vowels entirely;
    /// the round generator's retry loop absorbs the resulting empty rounds.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Self {
        let letters = (0..size)
            .map(|_| b'a' + rng.random_range(0..26u8))
            .collect();
        Self { letters }
    }

    /// Shuffle the presentation order in place
    ///
    /// Has no effect on enumeration, which considers all orderings anyway.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.letters.shuffle(rng);
    }

    /// The letters in presentation order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Number of letters in the bag
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True iff the bag holds no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The bag rendered as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Letters are validated ASCII on every construction path
        std::str::from_utf8(&self.letters).expect("bag letters are ASCII")
    }

    /// How many times `letter` appears in the bag
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&b| b == letter).count()
    }
}

impl FromStr for LetterBag {
    type Err = BagError;

    /// Parse caller-supplied letters, normalizing to lowercase
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BagError::Empty);
        }
        if !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(BagError::InvalidCharacters);
        }
        Ok(Self {
            letters: s.to_ascii_lowercase().into_bytes(),
        })
    }
}

impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sample_produces_requested_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let bag = LetterBag::sample(&mut rng, 8);
        assert_eq!(bag.len(), 8);
        assert!(bag.letters().iter().all(u8::is_ascii_lowercase));
    }

    #[test]
    fn sample_is_deterministic_for_fixed_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(LetterBag::sample(&mut a, 8), LetterBag::sample(&mut b, 8));
    }

    #[test]
    fn shuffle_preserves_multiset() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut bag: LetterBag = "aabbccdd".parse().unwrap();
        let before = bag.clone();
        bag.shuffle(&mut rng);

        for letter in b'a'..=b'z' {
            assert_eq!(bag.count_of(letter), before.count_of(letter));
        }
    }

    #[test]
    fn parse_normalizes_case() {
        let bag: LetterBag = "TaC".parse().unwrap();
        assert_eq!(bag.as_str(), "tac");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!("".parse::<LetterBag>(), Err(BagError::Empty));
        assert_eq!("  ".parse::<LetterBag>(), Err(BagError::Empty));
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(
            "ab1".parse::<LetterBag>(),
            Err(BagError::InvalidCharacters)
        );
        assert_eq!(
            "a b".parse::<LetterBag>(),
            Err(BagError::InvalidCharacters)
        );
    }

    #[test]
    fn count_of_tracks_multiplicity() {
        let bag: LetterBag = "banana".parse().unwrap();
        assert_eq!(bag.count_of(b'a'), 3);
        assert_eq!(bag.count_of(b'n'), 2);
        assert_eq!(bag.count_of(b'b'), 1);
        assert_eq!(bag.count_of(b'z'), 0);
    }
}
