use crate::app::NmpbCliError;
use crate::model::PorousCorrectionPolicy;
use serde::{Deserialize, Serialize};

/// parameters of an emission model run
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct EmissionModelConfig {
    /// speed tiers for the porous asphalt surface correction
    #[serde(default)]
    pub porous_correction: PorousCorrectionPolicy,
}

impl TryFrom<&String> for EmissionModelConfig {
    type Error = NmpbCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)?;
            Ok(toml::from_str(&s)?)
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)?;
            Ok(serde_json::from_str(&s)?)
        } else {
            Err(NmpbCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
