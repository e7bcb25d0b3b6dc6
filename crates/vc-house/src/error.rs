use thiserror::Error;

use vc_core::Position;

#[derive(Debug, Error)]
pub enum HouseError {
    #[error("cannot move into a wall at {0}")]
    InvalidMove(Position),

    #[error("dock position {0} is out of bounds")]
    DockOutOfBounds(Position),
}

pub type HouseResult<T> = Result<T, HouseError>;
