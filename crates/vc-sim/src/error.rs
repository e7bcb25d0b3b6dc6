use vc_battery::BatteryError;
use vc_house::HouseError;
use vc_planner::PlannerError;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("planner error: {0}")]
    Planner(#[from] PlannerError),

    #[error("house error: {0}")]
    House(#[from] HouseError),

    #[error("battery error: {0}")]
    Battery(#[from] BatteryError),
}

pub type SimResult<T> = Result<T, SimError>;
