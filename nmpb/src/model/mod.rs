mod category_ops;
pub mod coefficients;
pub mod decibel_ops;
mod emission_error;
mod emission_model;
mod emission_result;
mod porous_correction_policy;
mod road_slope;
mod surface_type;
mod traffic_flow_record;
mod traffic_regime;
mod vehicle_class;

pub use emission_error::EmissionError;
pub use emission_model::{compute_power, EmissionModel, REFERENCE_SPEED_KPH};
pub use emission_result::{ClassEmission, EmissionResult};
pub use porous_correction_policy::PorousCorrectionPolicy;
pub use road_slope::RoadSlope;
pub use surface_type::SurfaceType;
pub use traffic_flow_record::{TrafficFlowRecord, VehicleFlow};
pub use traffic_regime::TrafficRegime;
pub use vehicle_class::VehicleClass;
