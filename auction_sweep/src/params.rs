//! Parameter tuples and the grid they are swept over.

use crate::SweepError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of positional arguments the simulator expects.
pub const TUPLE_ARITY: usize = 7;

/// Typical key sizes accepted by the simulator.
const KEY_BITS_RANGE: std::ops::RangeInclusive<u64> = 256..=2048;

/// Typical bidder counts (larger counts only make sense for small keys).
const BIDDERS_RANGE: std::ops::RangeInclusive<u64> = 2..=128;

/// One simulator run: seven integers in the simulator's argument order.
///
/// Field names are for readers of this crate only. The simulator sees
/// nothing but position, so [`ParameterTuple::to_args`] is the single place
/// that decides the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u64; 7]", into = "[u64; 7]")]
pub struct ParameterTuple {
    iterations: u64,
    key_bits: u64,
    message_space: u64,
    bidders: u64,
    max_random: u64,
    max_bid: u64,
    seed: u64,
}

impl ParameterTuple {
    /// Creates a tuple from its fields in simulator order.
    pub const fn new(
        iterations: u64,
        key_bits: u64,
        message_space: u64,
        bidders: u64,
        max_random: u64,
        max_bid: u64,
        seed: u64,
    ) -> Self {
        Self {
            iterations,
            key_bits,
            message_space,
            bidders,
            max_random,
            max_bid,
            seed,
        }
    }
    
    /// Number of simulation rounds.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
    
    /// Key size in bits.
    pub fn key_bits(&self) -> u64 {
        self.key_bits
    }
    
    /// Size of the plaintext message space.
    pub fn message_space(&self) -> u64 {
        self.message_space
    }
    
    /// Number of bidders.
    pub fn bidders(&self) -> u64 {
        self.bidders
    }
    
    /// Upper bound for blinding randomness.
    pub fn max_random(&self) -> u64 {
        self.max_random
    }
    
    /// Upper bound for a bid.
    pub fn max_bid(&self) -> u64 {
        self.max_bid
    }
    
    /// Simulator RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
    
    /// Returns the values in simulator argument order.
    pub fn as_array(&self) -> [u64; TUPLE_ARITY] {
        [
            self.iterations,
            self.key_bits,
            self.message_space,
            self.bidders,
            self.max_random,
            self.max_bid,
            self.seed,
        ]
    }
    
    /// Returns the values stringified, in simulator argument order.
    pub fn to_args(&self) -> [String; TUPLE_ARITY] {
        self.as_array().map(|v| v.to_string())
    }
    
    /// Reports values outside the ranges the simulator is normally run with.
    ///
    /// Advisory only. The harness still runs the tuple unchanged.
    pub fn advisories(&self) -> Vec<Advisory> {
        const NAMES: [&str; TUPLE_ARITY] = [
            "iterations",
            "key_bits",
            "message_space",
            "bidders",
            "max_random",
            "max_bid",
            "seed",
        ];
        
        let mut out: Vec<Advisory> = NAMES
            .iter()
            .zip(self.as_array())
            .filter(|(_, v)| *v == 0)
            .map(|(name, _)| Advisory::Zero(*name))
            .collect();
        
        if !KEY_BITS_RANGE.contains(&self.key_bits) {
            out.push(Advisory::UnusualKeyBits(self.key_bits));
        }
        if self.bidders != 0 && !BIDDERS_RANGE.contains(&self.bidders) {
            out.push(Advisory::UnusualBidders(self.bidders));
        }
        out
    }
}

impl From<[u64; TUPLE_ARITY]> for ParameterTuple {
    fn from(v: [u64; TUPLE_ARITY]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5], v[6])
    }
}

impl From<ParameterTuple> for [u64; TUPLE_ARITY] {
    fn from(t: ParameterTuple) -> Self {
        t.as_array()
    }
}

impl std::fmt::Display for ParameterTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d, e, g, h] = self.as_array();
        write!(f, "{},{},{},{},{},{},{}", a, b, c, d, e, g, h)
    }
}

impl std::str::FromStr for ParameterTuple {
    type Err = SweepError;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SweepError::InvalidTuple(s.to_string());
        
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        
        let values: [u64; TUPLE_ARITY] = values.try_into().map_err(|_| invalid())?;
        Ok(values.into())
    }
}

/// A value the simulator is not normally run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// A field is zero; every field is expected to be positive
    Zero(&'static str),
    
    /// Key size outside 256..=2048 bits
    UnusualKeyBits(u64),
    
    /// Bidder count outside 2..=128
    UnusualBidders(u64),
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::Zero(name) => write!(f, "{} is zero", name),
            Advisory::UnusualKeyBits(bits) => {
                write!(f, "key size {} bits is outside {:?}", bits, KEY_BITS_RANGE)
            }
            Advisory::UnusualBidders(n) => {
                write!(f, "{} bidders is outside {:?}", n, BIDDERS_RANGE)
            }
        }
    }
}

/// Ordered list of tuples. Insertion order is execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterGrid {
    tuples: Vec<ParameterTuple>,
}

impl ParameterGrid {
    /// Creates a grid from tuples, keeping their order.
    pub fn new(tuples: Vec<ParameterTuple>) -> Self {
        Self { tuples }
    }
    
    /// Creates a grid with no tuples.
    pub fn empty() -> Self {
        Self::default()
    }
    
    /// The standard bidder-count sweep: 512-bit keys, 10^10 message space,
    /// seed 76, with 5, 10, 15, 20 and 40 bidders.
    pub fn default_sweep() -> Self {
        const MESSAGE_SPACE: u64 = 10_000_000_000;
        
        Self::new(
            [5, 10, 15, 20, 40]
                .into_iter()
                .map(|bidders| ParameterTuple::new(5, 512, MESSAGE_SPACE, bidders, 10_000, 100_000, 76))
                .collect(),
        )
    }
    
    /// Parses a JSON array of seven-element integer arrays.
    pub fn from_json_str(json: &str) -> Result<Self, SweepError> {
        let rows: Vec<Vec<u64>> = serde_json::from_str(json)?;
        
        let tuples = rows
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                let len = values.len();
                <[u64; TUPLE_ARITY]>::try_from(values)
                    .map(ParameterTuple::from)
                    .map_err(|_| SweepError::TupleShape { row, len })
            })
            .collect::<Result<Vec<_>, _>>()?;
        
        Ok(Self::new(tuples))
    }
    
    /// Loads a grid from a JSON file (see [`ParameterGrid::from_json_str`]).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SweepError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SweepError::GridFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
    
    /// Number of tuples.
    pub fn len(&self) -> usize {
        self.tuples.len()
    }
    
    /// Returns true if there is nothing to run.
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }
    
    /// Iterates tuples in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, ParameterTuple> {
        self.tuples.iter()
    }
}

impl<'a> IntoIterator for &'a ParameterGrid {
    type Item = &'a ParameterTuple;
    type IntoIter = std::slice::Iter<'a, ParameterTuple>;
    
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<ParameterTuple> for ParameterGrid {
    fn from_iter<I: IntoIterator<Item = ParameterTuple>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
