use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("missing {0} parameter in house file")]
    MissingParameter(&'static str),

    #[error("parameter {name} has a non-integer value {value:?}")]
    NotAnInteger { name: &'static str, value: String },

    #[error("parameter {name} has a negative value {value:?}")]
    Negative { name: &'static str, value: String },

    #[error("missing docking station position in house file")]
    MissingDock,

    #[error("more than one docking station was given in house file")]
    DuplicateDock,

    #[error("house error: {0}")]
    House(#[from] vc_house::HouseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EnvResult<T> = Result<T, EnvError>;
