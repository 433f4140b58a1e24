use serde::Serialize;

use crate::error::LineError;

/// A lottery number. Drawn numbers always fall in `MIN_NUMBER..=MAX_NUMBER`;
/// leniently loaded winning numbers may not.
pub type Number = i32;

pub const MIN_NUMBER: Number = 1;
pub const MAX_NUMBER: Number = 50;
pub const LINE_LEN: usize = 7;

/// Seven numbers picked for one ticket, bonus or winning combination.
///
/// Storage order is kept for display and replay; matching treats the line as a set.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct Line([Number; LINE_LEN]);

impl Line {
    /// Builds a line, rejecting out-of-range and repeated numbers.
    pub fn new(numbers: [Number; LINE_LEN]) -> Result<Self, LineError> {
        for (i, &n) in numbers.iter().enumerate() {
            if !(MIN_NUMBER..=MAX_NUMBER).contains(&n) {
                return Err(LineError::OutOfRange(n));
            }
            if numbers[..i].contains(&n) {
                return Err(LineError::Duplicate(n));
            }
        }
        Ok(Self(numbers))
    }

    /// Accepts externally supplied numbers verbatim, without range or uniqueness checks.
    pub fn lenient(numbers: [Number; LINE_LEN]) -> Self {
        Self(numbers)
    }

    pub fn numbers(&self) -> &[Number; LINE_LEN] {
        &self.0
    }

    pub fn contains(&self, n: Number) -> bool {
        self.0.contains(&n)
    }

    /// Count of numbers of `self` that also appear in `other`.
    pub fn matches(&self, other: &Line) -> usize {
        self.0.iter().filter(|&&n| other.contains(n)).count()
    }

    /// True if the two lines have at least one number in common.
    pub fn shares_any(&self, other: &Line) -> bool {
        self.0.iter().any(|&n| other.contains(n))
    }

    /// Whether the line satisfies the range and uniqueness rules of a drawn line.
    pub fn is_well_formed(&self) -> bool {
        Self::new(self.0).is_ok()
    }

    pub fn to_vec(&self) -> Vec<Number> {
        self.0.to_vec()
    }
}

impl TryFrom<&[Number]> for Line {
    type Error = LineError;

    fn try_from(numbers: &[Number]) -> Result<Self, Self::Error> {
        let arr: [Number; LINE_LEN] = numbers
            .try_into()
            .map_err(|_| LineError::Length(numbers.len()))?;
        Self::new(arr)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}
