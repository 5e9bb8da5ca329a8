#![allow(non_snake_case)]

use clap::{Arg, Command};
use log::{debug, info};
use rCBMC::{config::DriverConfig, flags, session::Session};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let cmd = Command::new("rCBMC")
        .version(env!("CARGO_PKG_VERSION"))
        .about("CBMC-based model checking driver for Rust programs")
        .arg(
            Arg::new("input")
                .required(true)
                .value_name("FILE")
                .help("Rust program to verify"),
        );
    let (cmd, ok) = flags::add_flags(cmd, &[], &[]);
    assert!(ok, "driver exclusions out of sync with the flag catalog");
    let matches = cmd.get_matches();
    let cfg = DriverConfig::from_matches(&matches);
    env_logger::Builder::new()
        .filter_level(cfg.loudness.level_filter())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
    let input = PathBuf::from(matches.get_one::<String>("input").unwrap()).canonicalize()?;
    info!("the program to be verified: {}", input.display());
    info!("verification entry point: {}", cfg.harness.function);
    if !cfg.harness.c_lib.is_empty() {
        info!("external C libraries: {:?}", cfg.harness.c_lib);
    }
    if !cfg.cbmc_args.is_empty() {
        debug!("extra CBMC arguments: {:?}", cfg.cbmc_args);
    }
    let session = Session::new(&cfg.artifact)?;
    info!("artifacts go to {}", session.dir().display());
    session.cleanup();
    Ok(())
}
