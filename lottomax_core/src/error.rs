use crate::line::{Number, LINE_LEN, MAX_NUMBER, MIN_NUMBER};
use crate::paytable::{MAX_LINES, MIN_LINES};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("number {0} is outside {}..={}", MIN_NUMBER, MAX_NUMBER)]
    OutOfRange(Number),
    #[error("number {0} appears more than once")]
    Duplicate(Number),
    #[error("a line needs exactly {} numbers, got {0}", LINE_LEN)]
    Length(usize),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("line count {0} is outside {}..={}", MIN_LINES, MAX_LINES)]
    LineCount(usize),
}
