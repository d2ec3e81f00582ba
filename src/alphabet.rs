use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

pub const DNA: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// A non-empty set of distinct single-byte symbols that sequence positions are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet must contain at least one symbol")]
    Empty,

    #[error(
        "invalid symbol {symbol:?}: symbols must be printable ASCII characters other than '>'"
    )]
    InvalidSymbol { symbol: String },

    #[error("symbol '{symbol}' appears more than once in the alphabet")]
    Duplicate { symbol: char },

    #[error(
        "alphabet entry {entry:?} is not a single character; separate symbols with commas, e.g. A,C,G,T"
    )]
    NotSingleChar { entry: String },
}

impl Alphabet {
    /// The four DNA bases, `A, C, G, T`.
    pub fn dna() -> Self {
        Alphabet {
            symbols: DNA.to_vec(),
        }
    }

    pub fn new(symbols: Vec<u8>) -> Result<Self, AlphabetError> {
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }

        for (i, &s) in symbols.iter().enumerate() {
            if !s.is_ascii_graphic() || s == b'>' {
                return Err(AlphabetError::InvalidSymbol {
                    symbol: (s as char).to_string(),
                });
            }
            if symbols[..i].contains(&s) {
                return Err(AlphabetError::Duplicate { symbol: s as char });
            }
        }

        Ok(Alphabet { symbols })
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Draws one symbol uniformly at random.
    #[inline(always)]
    pub fn sample(&self, rng: &mut impl Rng) -> u8 {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }

    /// Clears `buf` and fills it with `len` symbols, each sampled independently
    /// and with replacement.
    pub fn fill(&self, buf: &mut Vec<u8>, len: usize, rng: &mut impl Rng) {
        buf.clear();
        buf.extend((0..len).map(|_| self.sample(rng)));
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::dna()
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    /// Parses a comma-separated list of symbols, e.g. `A,C,G,T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(AlphabetError::Empty);
        }

        let symbols = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                match (part.as_bytes(), part.chars().count()) {
                    ([b], _) => Ok(*b),
                    // a single non-ASCII character
                    (_, 1) => Err(AlphabetError::InvalidSymbol {
                        symbol: part.to_string(),
                    }),
                    _ => Err(AlphabetError::NotSingleChar {
                        entry: part.to_string(),
                    }),
                }
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Alphabet::new(symbols)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", *s as char)?;
        }
        Ok(())
    }
}
