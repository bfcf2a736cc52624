//! Error types for clickchess-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid square name: {0:?}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0:?}")]
    InvalidNotation(String),

    #[error("FEN parsing failed: {0}")]
    Fen(String),

    #[error("illegal starting position: {0}")]
    Position(String),

    #[error("promotion resolver entered without a legal completion for {0}")]
    InconsistentPromotion(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
