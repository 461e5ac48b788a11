//! gen-dockercfg - Print a docker config.json holding registry credentials

use std::process::ExitCode;

use dockercfg::{cli, logging};

fn main() -> ExitCode {
    logging::init();
    cli::run()
}
