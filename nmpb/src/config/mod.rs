mod emission_model_config;

pub use emission_model_config::EmissionModelConfig;
