use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatteryError {
    #[error("battery is empty")]
    Empty,
}

pub type BatteryResult<T> = Result<T, BatteryError>;
