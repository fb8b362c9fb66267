// src/error.rs

//! Error type shared by the sampler, the registry and both emitters.

use std::io;

use thiserror::Error;

/// Errors raised while resolving, sampling or emitting color maps.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown color map {name:?}")]
    UnknownColorMap { name: String },

    #[error("resolution must be a positive number of steps, got {0}")]
    InvalidResolution(usize),

    #[error("invalid color literal {literal:?}: {reason}")]
    InvalidColor { literal: String, reason: String },

    #[error("alias group at position {0} of the name list is empty")]
    EmptyAliasGroup(usize),

    #[error("color map {0:?} is listed more than once")]
    DuplicateName(String),

    #[error("array {name:?} has shape {shape:?}, expected (rows, 4) or (rows, 5)")]
    MalformedArray { name: String, shape: Vec<usize> },

    #[error("failed to parse generator configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to write archive: {0}")]
    NpzWrite(#[from] ndarray_npy::WriteNpzError),

    #[error("failed to read archive: {0}")]
    Npz(#[from] ndarray_npy::ReadNpzError),
}

pub type Result<T> = std::result::Result<T, Error>;
