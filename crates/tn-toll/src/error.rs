use thiserror::Error;

use tn_core::VehicleClass;

#[derive(Debug, Error)]
pub enum TollError {
    #[error("invalid discount window: {0}")]
    InvalidWindow(String),

    #[error("invalid {class} coefficient {value}: must be finite and non-negative")]
    InvalidCoefficient { class: VehicleClass, value: f64 },
}

pub type TollResult<T> = Result<T, TollError>;
