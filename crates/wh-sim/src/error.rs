use thiserror::Error;

use wh_core::GridPos;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("warehouse configuration error: {0}")]
    Config(String),

    #[error("{what} at {pos} is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        what: &'static str,
        pos:  GridPos,
        rows: usize,
        cols: usize,
    },

    #[error("{what} at {pos} overlaps an existing marker")]
    Occupied { what: &'static str, pos: GridPos },

    #[error("could not find a free starting cell for agent {index} after {attempts} attempts")]
    NoFreeCell { index: usize, attempts: usize },
}

pub type SimResult<T> = Result<T, SimError>;
