use std::{fmt, io, path::Path};

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::{
    draw::DrawGenerator,
    error::LineError,
    line::{Line, Number, LINE_LEN},
};

/// How loaded winning numbers are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Take the first seven integers as they are.
    #[default]
    Lenient,
    /// Also require them to be in range and distinct.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackReason {
    Missing,
    TooFewNumbers { found: usize },
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinningLineOrigin {
    Loaded,
    Generated(FallbackReason),
}

impl fmt::Display for WinningLineOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinningLineOrigin::Loaded => f.write_str("loaded from source"),
            WinningLineOrigin::Generated(FallbackReason::Missing) => {
                f.write_str("source missing, generated randomly")
            }
            WinningLineOrigin::Generated(FallbackReason::TooFewNumbers { found }) => write!(
                f,
                "source has only {found} of {LINE_LEN} numbers, generated randomly"
            ),
            WinningLineOrigin::Generated(FallbackReason::Rejected(why)) => {
                write!(f, "source rejected ({why}), generated randomly")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub line: Line,
    pub origin: WinningLineOrigin,
}

/// Leading integers of `text`, stopping at the first token that is not one.
pub fn parse_numbers(text: &str, limit: usize) -> Vec<Number> {
    text.split_whitespace()
        .map_while(|tok| tok.parse::<Number>().ok())
        .take(limit)
        .collect()
}

/// Reads the winning-numbers file. Any I/O failure counts as an absent source.
pub fn read_source(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "winning numbers file not found");
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "winning numbers file unreadable");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WinningLineSource {
    pub validation: Validation,
}

impl WinningLineSource {
    pub fn new(validation: Validation) -> Self {
        Self { validation }
    }

    /// Loads the line from `source` without falling back.
    pub fn load(&self, source: Option<&str>) -> Result<Line, FallbackReason> {
        let text = source.ok_or(FallbackReason::Missing)?;
        let numbers = parse_numbers(text, LINE_LEN);
        let numbers: [Number; LINE_LEN] = numbers
            .as_slice()
            .try_into()
            .map_err(|_| FallbackReason::TooFewNumbers {
                found: numbers.len(),
            })?;
        match self.validation {
            Validation::Lenient => Ok(Line::lenient(numbers)),
            Validation::Strict => {
                Line::new(numbers).map_err(|e: LineError| FallbackReason::Rejected(e.to_string()))
            }
        }
    }

    /// The session's winning line: loaded from `source` when possible, drawn otherwise.
    pub fn obtain<R: RngCore>(
        &self,
        source: Option<&str>,
        draws: &mut DrawGenerator<R>,
    ) -> WinningLine {
        let winning = match self.load(source) {
            Ok(line) => WinningLine {
                line,
                origin: WinningLineOrigin::Loaded,
            },
            Err(reason) => WinningLine {
                line: draws.draw_one(),
                origin: WinningLineOrigin::Generated(reason),
            },
        };
        match &winning.origin {
            WinningLineOrigin::Loaded => {
                tracing::info!(line = %winning.line, "winning numbers loaded from source")
            }
            WinningLineOrigin::Generated(_) => tracing::warn!(
                line = %winning.line,
                origin = %winning.origin,
                "invalid or missing winning numbers, generated randomly"
            ),
        }
        winning
    }
}
