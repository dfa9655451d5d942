use super::{RoadSlope, TrafficRegime, VehicleClass};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmissionError {
    #[error("invalid {category} '{value}', expected one of: {expected}")]
    InvalidCategory {
        category: &'static str,
        value: String,
        expected: String,
    },
    #[error("no {class} vehicle speed bracket for traffic regime '{regime}' and slope '{slope}' matches speed {speed} km/h")]
    UnresolvedBracket {
        class: VehicleClass,
        regime: TrafficRegime,
        slope: RoadSlope,
        speed: f64,
    },
    #[error("invalid emission model configuration: {0}")]
    ConfigurationError(String),
}
