use thiserror::Error;

use crate::NodeId;

#[derive(Debug, Error)]
pub enum PathTreeError {
    #[error("path tree node {0} does not exist")]
    OutOfRange(NodeId),
}

pub type PathTreeResult<T> = Result<T, PathTreeError>;
