use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// vehicle classes distinguished by the emission model.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    /// vehicles under 3.5 tonnes
    Light,
    /// vehicles of 3.5 tonnes and over
    Heavy,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 2] = [VehicleClass::Light, VehicleClass::Heavy];
}

impl Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleClass::Light => write!(f, "light"),
            VehicleClass::Heavy => write!(f, "heavy"),
        }
    }
}
