use thiserror::Error;

pub type StringRingResult<T, E = StringRingError> = Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StringRingError {
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(i64),
}
