#![allow(non_snake_case)]

use clap::Command;
use log::info;
use rCBMC::{config::DriverConfig, flags, session::Session};
use std::env;

// Harness entry points and referenced C files come from the build itself,
// so the whole group is dropped from the plugin's surface.
const EXCLUDE_GROUPS: &[&str] = &["Proof harness flags"];

fn main() -> anyhow::Result<()> {
    // cargo invokes the plugin as `cargo-rCBMC rCBMC <args>`
    let mut args: Vec<String> = env::args().collect();
    if args.get(1).is_some_and(|a| a == "rCBMC") {
        args.remove(1);
    }
    let cmd = Command::new("cargo-rCBMC")
        .bin_name("cargo rCBMC")
        .version(env!("CARGO_PKG_VERSION"))
        .about("CBMC-based model checking for cargo packages");
    let (cmd, ok) = flags::add_flags(cmd, &[], EXCLUDE_GROUPS);
    assert!(ok, "plugin exclusions out of sync with the flag catalog");
    let matches = cmd.get_matches_from(args);
    let cfg = DriverConfig::from_matches(&matches);
    env_logger::Builder::new()
        .filter_level(cfg.loudness.level_filter())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
    info!(
        "verifying the cargo package in {}",
        env::current_dir()?.display()
    );
    let session = Session::new(&cfg.artifact)?;
    info!("artifacts go to {}", session.dir().display());
    session.cleanup();
    Ok(())
}
