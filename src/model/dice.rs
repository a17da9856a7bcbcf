//! Dice specifications and roll results.
//!
//! A dice specification has the form `<count>d<sides>[(+|-)<modifier>]`, for example
//! `2d6`, `1d20+5` or `4d8-2`.

use std::fmt;

use rand::Rng;

use crate::error::AppError;

/// Die sizes that may be rolled.
pub const VALID_SIDES: [u32; 6] = [4, 6, 8, 10, 12, 20];

/// Largest number of dice accepted in a single roll.
pub const MAX_DICE: u32 = 100;

pub const INVALID_SPEC_MESSAGE: &str =
    "Invalid dice specification. Usage: /roll <number of dice>d<dice type>[+/-<modifier>]";

pub const INVALID_SIDES_MESSAGE: &str = "Invalid dice type. Available types: 4, 6, 8, 10, 12, 20";

/// Parsed `NdT[+/-M]` dice specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceSpec {
    pub count: u32,
    pub sides: u32,
    pub modifier: i64,
}

/// Outcome of rolling a [`DiceSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    pub spec: DiceSpec,
    pub rolls: Vec<u32>,
    pub total: i64,
}

impl DiceSpec {
    /// Parses and validates a dice specification.
    ///
    /// Whitespace around the numbers is tolerated and the `d` separator is case-insensitive.
    ///
    /// # Returns
    /// - `Ok(DiceSpec)` - Well-formed spec with an allowed die size and dice count
    /// - `Err(AppError::BadRequest)` - Malformed spec, disallowed die size or dice count
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let invalid = || AppError::BadRequest(INVALID_SPEC_MESSAGE.to_string());

        let lowered = input.trim().to_lowercase();
        let (count, rest) = lowered.split_once('d').ok_or_else(invalid)?;
        let count = parse_unsigned(count).ok_or_else(invalid)?;

        let (sides, modifier) = match rest.find(|c: char| c == '+' || c == '-') {
            Some(index) => {
                let magnitude = parse_unsigned(&rest[index + 1..]).ok_or_else(invalid)?;
                let magnitude = i64::from(magnitude);
                let modifier = if rest[index..].starts_with('-') {
                    -magnitude
                } else {
                    magnitude
                };
                (parse_unsigned(&rest[..index]).ok_or_else(invalid)?, modifier)
            }
            None => (parse_unsigned(rest).ok_or_else(invalid)?, 0),
        };

        if !VALID_SIDES.contains(&sides) {
            return Err(AppError::BadRequest(INVALID_SIDES_MESSAGE.to_string()));
        }

        if count == 0 || count > MAX_DICE {
            return Err(AppError::BadRequest(format!(
                "You can roll between 1 and {} dice at a time.",
                MAX_DICE
            )));
        }

        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Rolls every die uniformly in `1..=sides` and adds the modifier.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> DiceRoll {
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| rng.random_range(1..=self.sides))
            .collect();
        let total = rolls.iter().map(|r| i64::from(*r)).sum::<i64>() + self.modifier;

        DiceRoll {
            spec: *self,
            rolls,
            total,
        }
    }

    fn sign(&self) -> char {
        if self.modifier < 0 {
            '-'
        } else {
            '+'
        }
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d{}{}{}",
            self.count,
            self.sides,
            self.sign(),
            self.modifier.unsigned_abs()
        )
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rolls = self
            .rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "You rolled {}: [{}] {} {} = {}",
            self.spec,
            rolls,
            self.spec.sign(),
            self.spec.modifier.unsigned_abs(),
            self.total
        )
    }
}

/// Parses a run of ASCII digits, allowing surrounding whitespace but no sign.
fn parse_unsigned(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
