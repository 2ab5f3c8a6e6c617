//! Errors raised by the simulator.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UvSimError {
    #[error("Mask shape {mask:?} does not match spectrum shape {spectrum:?}; resample the mask first")]
    ShapeMismatch {
        mask: (usize, usize),
        spectrum: (usize, usize),
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Npy(#[from] ndarray_npy::WriteNpyError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
