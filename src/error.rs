use thiserror::Error;

pub type StocktakeResult<T> = Result<T, StocktakeError>;

#[derive(Error, Debug)]
pub enum StocktakeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid spreadsheet: {0}")]
    Input(String),

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("no active session")]
    NoActiveSession,

    #[error("internal error: {0}")]
    Internal(String),
}
