pub mod draw;
pub mod engine;
pub mod error;
pub mod line;
pub mod paytable;
pub mod rng;
pub mod winning;

pub use crate::draw::DrawGenerator;
pub use crate::engine::{
    evaluate_line, evaluate_prize, evaluate_ticket, play_session, verify_session, LineOutcome,
    PlayOutcome, PlayRequest, TicketEvaluation, WinningEntry,
};
pub use crate::error::{LineError, PlayError};
pub use crate::line::{Line, Number, LINE_LEN, MAX_NUMBER, MIN_NUMBER};
pub use crate::paytable::{ticket_cost, Paytable, PaytableEntry, LOTTO_MAX};
pub use crate::rng::{derive_hash_hex, random_server_seed, ProvablyFairRng};
pub use crate::winning::{
    read_source, FallbackReason, Validation, WinningLine, WinningLineOrigin, WinningLineSource,
};
