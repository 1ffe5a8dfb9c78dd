//! Puzzle state types: banks, roles, and the four-role state vector.
//!
//! A state records which bank each role stands on. The digit encoding
//! (`0` origin, `1` destination, roles in fixed order) is used both for
//! the visited-set key and for parsing states given on the command line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of roles in the puzzle.
pub const ROLE_COUNT: usize = 4;

/// Side of the river
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Bank {
    Origin,
    Destination,
}

impl Bank {
    /// The opposite bank
    pub fn other(self) -> Bank {
        match self {
            Bank::Origin => Bank::Destination,
            Bank::Destination => Bank::Origin,
        }
    }

    pub fn bit(self) -> u8 {
        match self {
            Bank::Origin => 0,
            Bank::Destination => 1,
        }
    }

    pub fn from_bit(bit: u8) -> Option<Bank> {
        match bit {
            0 => Some(Bank::Origin),
            1 => Some(Bank::Destination),
            _ => None,
        }
    }
}

impl From<Bank> for u8 {
    fn from(bank: Bank) -> u8 {
        bank.bit()
    }
}

impl TryFrom<u8> for Bank {
    type Error = InvalidStateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Bank::from_bit(value).ok_or(InvalidStateError::InvalidBank { value })
    }
}

/// The four fixed roles, in state-vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The only role that can row; ferries at most one cargo item per crossing
    Escort,
    Wolf,
    Sheep,
    Cabbage,
}

impl Role {
    pub const ALL: [Role; ROLE_COUNT] = [Role::Escort, Role::Wolf, Role::Sheep, Role::Cabbage];

    /// Cargo roles, in neighbor generation order
    pub const CARGO: [Role; ROLE_COUNT - 1] = [Role::Wolf, Role::Sheep, Role::Cabbage];

    pub fn index(self) -> usize {
        match self {
            Role::Escort => 0,
            Role::Wolf => 1,
            Role::Sheep => 2,
            Role::Cabbage => 3,
        }
    }

    /// Label used when rendering a state
    pub fn label(self) -> &'static str {
        match self {
            Role::Escort => "Man",
            Role::Wolf => "Wolf",
            Role::Sheep => "Sheep",
            Role::Cabbage => "Cabbage",
        }
    }
}

/// Errors raised when building a state from external input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidStateError {
    /// Input did not have exactly four entries.
    WrongLength { len: usize },

    /// Entry at `index` was a number other than 0 or 1.
    InvalidValue { index: usize, value: u8 },

    /// Character at `index` was not the digit 0 or 1.
    InvalidChar { index: usize, ch: char },

    /// A lone bank value other than 0 or 1.
    InvalidBank { value: u8 },
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidStateError::WrongLength { len } => {
                write!(f, "state must have {} entries, got {}", ROLE_COUNT, len)
            }
            InvalidStateError::InvalidValue { index, value } => {
                write!(f, "entry {} is {}, expected 0 or 1", index, value)
            }
            InvalidStateError::InvalidChar { index, ch } => {
                write!(f, "character {:?} at position {} is not 0 or 1", ch, index)
            }
            InvalidStateError::InvalidBank { value } => {
                write!(f, "bank value {} is not 0 or 1", value)
            }
        }
    }
}

impl std::error::Error for InvalidStateError {}

/// Canonical visited-set key: the four bank bits packed, escort in the high bit.
///
/// Displays as the concatenated digits, e.g. `0101`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey(u8);

impl StateKey {
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

/// Bank of every role, indexed by [`Role::index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State([Bank; ROLE_COUNT]);

impl State {
    /// Everyone on the origin bank
    pub const INITIAL: State = State([Bank::Origin; ROLE_COUNT]);

    /// Everyone on the destination bank
    pub const GOAL: State = State([Bank::Destination; ROLE_COUNT]);

    pub fn new(banks: [Bank; ROLE_COUNT]) -> Self {
        Self(banks)
    }

    /// Build a state from raw 0/1 values, one per role.
    pub fn from_bits(bits: &[u8]) -> Result<Self, InvalidStateError> {
        if bits.len() != ROLE_COUNT {
            return Err(InvalidStateError::WrongLength { len: bits.len() });
        }
        let mut banks = [Bank::Origin; ROLE_COUNT];
        for (index, (&value, slot)) in bits.iter().zip(banks.iter_mut()).enumerate() {
            *slot = Bank::from_bit(value).ok_or(InvalidStateError::InvalidValue { index, value })?;
        }
        Ok(Self(banks))
    }

    pub fn bank(&self, role: Role) -> Bank {
        self.0[role.index()]
    }

    pub fn escort(&self) -> Bank {
        self.bank(Role::Escort)
    }

    pub fn banks(&self) -> &[Bank; ROLE_COUNT] {
        &self.0
    }

    /// Copy with `role` placed on `bank`
    pub fn with_bank(&self, role: Role, bank: Bank) -> Self {
        let mut next = *self;
        next.0[role.index()] = bank;
        next
    }

    pub fn key(&self) -> StateKey {
        StateKey(self.0.iter().fold(0u8, |acc, bank| (acc << 1) | bank.bit()))
    }

    pub fn bits(&self) -> [u8; ROLE_COUNT] {
        self.0.map(Bank::bit)
    }
}

impl Default for State {
    fn default() -> Self {
        State::INITIAL
    }
}

impl FromStr for State {
    type Err = InvalidStateError;

    /// Parse the digit form, e.g. `"0000"` or `"1010"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != ROLE_COUNT {
            return Err(InvalidStateError::WrongLength { len: chars.len() });
        }
        let mut bits = [0u8; ROLE_COUNT];
        for (index, &ch) in chars.iter().enumerate() {
            bits[index] = match ch {
                '0' => 0,
                '1' => 1,
                _ => return Err(InvalidStateError::InvalidChar { index, ch }),
            };
        }
        State::from_bits(&bits)
    }
}

impl fmt::Display for State {
    /// One `"<label><digit> "` token per role, in role order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for role in Role::ALL {
            write!(f, "{}{} ", role.label(), self.bank(role).bit())?;
        }
        Ok(())
    }
}
