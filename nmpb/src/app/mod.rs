mod nmpb_app;
mod nmpb_cli_error;

pub use nmpb_app::{NmpbApp, NmpbOperation};
pub use nmpb_cli_error::NmpbCliError;
