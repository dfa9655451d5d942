use super::NmpbCliError;
use crate::config::EmissionModelConfig;
use crate::model::{
    coefficients, EmissionModel, RoadSlope, SurfaceType, TrafficFlowRecord, TrafficRegime,
};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// Command line tool for computing road traffic sound power levels with the
/// NMPB-Routes-96 emission model
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct NmpbApp {
    #[command(subcommand)]
    pub op: NmpbOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum NmpbOperation {
    /// compute the sound power level of one road segment
    Compute {
        /// light vehicles per hour
        #[arg(long, allow_negative_numbers = true)]
        light_count: Option<f64>,
        /// heavy vehicles per hour
        #[arg(long, allow_negative_numbers = true)]
        heavy_count: Option<f64>,
        /// representative speed of light vehicles in km/h
        #[arg(long, allow_negative_numbers = true)]
        light_speed: Option<f64>,
        /// representative speed of heavy vehicles in km/h
        #[arg(long, allow_negative_numbers = true)]
        heavy_speed: Option<f64>,
        #[arg(long, default_value_t = TrafficRegime::Continuous)]
        traffic_regime: TrafficRegime,
        #[arg(long, default_value_t = SurfaceType::Smooth)]
        surface_type: SurfaceType,
        #[arg(long, default_value_t = RoadSlope::Flat)]
        slope: RoadSlope,
        #[arg(long, help = "path to .toml or .json file with emission model parameters")]
        configuration_file: Option<String>,
        /// print the level of each vehicle class as JSON along with the total
        #[arg(long)]
        breakdown: bool,
    },
    /// print the emission coefficient tables as JSON
    Tables,
}

impl NmpbOperation {
    pub fn run(&self) -> Result<String, NmpbCliError> {
        match self {
            NmpbOperation::Compute {
                light_count,
                heavy_count,
                light_speed,
                heavy_speed,
                traffic_regime,
                surface_type,
                slope,
                configuration_file,
                breakdown,
            } => {
                let config = match configuration_file {
                    None => EmissionModelConfig::default(),
                    Some(f) => {
                        log::info!("reading emission model configuration from {f}");
                        EmissionModelConfig::try_from(f)?
                    }
                };
                let model = EmissionModel::new(config);
                let record = TrafficFlowRecord {
                    light_count: *light_count,
                    heavy_count: *heavy_count,
                    light_speed: *light_speed,
                    heavy_speed: *heavy_speed,
                    traffic_regime: *traffic_regime,
                    surface_type: *surface_type,
                    slope: *slope,
                };
                log::debug!("evaluating {record}");
                let result = model.evaluate(&record)?;
                if *breakdown {
                    Ok(serde_json::to_string_pretty(&result)?)
                } else {
                    Ok(result.total_level.to_string())
                }
            }
            NmpbOperation::Tables => {
                coefficients::validate_tables()?;
                let tables = coefficients::coefficient_tables();
                Ok(serde_json::to_string_pretty(&tables)?)
            }
        }
    }
}
