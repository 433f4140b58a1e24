use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LineResultEntry {
    /// One-based, as printed on the ticket.
    pub line: usize,
    pub numbers: Vec<i32>,
    pub matches: usize,
    pub encore_match: bool,
    pub payout: u64,
}

/// Everything needed to print, replay or audit one play session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub ts: DateTime<Utc>,
    pub server_seed: String,
    pub server_seed_hash: String,
    pub client_seed: String,
    pub nonce: u64,
    pub ticket_lines: Vec<Vec<i32>>,
    pub encore_lines: Vec<Vec<i32>>,
    pub extra_encore: bool,
    pub total_cost: u64,
    pub winning_line: Vec<i32>,
    pub winning_origin: String,
    pub results: Vec<LineResultEntry>,
    pub total_payout: u64,
}

impl SessionRecord {
    pub fn from_json(text: &str) -> RecordResult<Self> {
        let record: Self = serde_json::from_str(text)?;
        if record.results.len() != record.ticket_lines.len() {
            return Err(RecordError::Invalid(format!(
                "{} results for {} ticket lines",
                record.results.len(),
                record.ticket_lines.len()
            )));
        }
        if record.encore_lines.len() != 1 + usize::from(record.extra_encore) {
            return Err(RecordError::Invalid(format!(
                "{} encore lines with extra_encore={}",
                record.encore_lines.len(),
                record.extra_encore
            )));
        }
        Ok(record)
    }

    pub fn to_json_pretty(&self) -> RecordResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("malformed session record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid session record: {0}")]
    Invalid(String),
}

pub type RecordResult<T> = Result<T, RecordError>;
