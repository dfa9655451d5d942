//! computes road traffic sound power levels with the NMPB-Routes-96 emission
//! model from the command line. set RUST_LOG=debug to see the selected
//! coefficients.
use clap::Parser;
use nmpb::app::NmpbApp;

fn main() {
    env_logger::init();
    let args = NmpbApp::parse();
    match args.op.run() {
        Ok(output) => println!("{output}"),
        Err(e) => {
            // env_logger reports errors even when RUST_LOG is unset
            log::error!("nmpb failed: {e}");
            std::process::exit(1);
        }
    }
}
