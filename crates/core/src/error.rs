//! Core error types

use thiserror::Error;

/// Errors surfaced by core types and the transport boundary
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
