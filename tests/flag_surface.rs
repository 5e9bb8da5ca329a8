#![allow(non_snake_case)]

use clap::{Arg, Command};
use rCBMC::{config::DriverConfig, flags};
use std::path::PathBuf;

/// the surface of the standalone driver: full catalog plus the input file
fn driver_surface() -> Command {
    let cmd = Command::new("rCBMC").arg(
        Arg::new("input")
            .required(true)
            .value_name("FILE")
            .help("Rust program to verify"),
    );
    let (cmd, ok) = flags::add_flags(cmd, &[], &[]);
    assert!(ok);
    cmd
}

/// the surface of the cargo plugin: no proof harness flags, no input file
fn plugin_surface() -> Command {
    let (cmd, ok) = flags::add_flags(Command::new("cargo-rCBMC"), &[], &["Proof harness flags"]);
    assert!(ok);
    cmd
}

#[test]
fn driver_full_invocation() {
    let m = driver_surface()
        .try_get_matches_from([
            "rCBMC",
            "main.rs",
            "-v",
            "--function",
            "check_add",
            "--c-lib",
            "lib/helpers.c",
            "--target-dir",
            "build",
            "--keep-temps",
            "--no-unwinding-checks",
            "--visualize",
            "--cbmc-args",
            "--unwind",
            "5",
        ])
        .unwrap();
    assert_eq!(m.get_one::<String>("input").unwrap(), "main.rs");
    let cfg = DriverConfig::from_matches(&m);
    assert!(cfg.loudness.verbose && !cfg.loudness.quiet);
    assert_eq!(cfg.harness.function, "check_add");
    assert_eq!(cfg.harness.c_lib, [PathBuf::from("lib/helpers.c")]);
    assert_eq!(cfg.artifact.target_dir, PathBuf::from("build"));
    assert!(cfg.artifact.keep_temps);
    assert!(cfg.check.memory_safety());
    assert!(!cfg.check.unwinding());
    assert!(cfg.visualizer.visualize);
    assert_eq!(cfg.cbmc_args, ["--unwind", "5"]);
}

#[test]
fn driver_requires_input() {
    assert!(driver_surface().try_get_matches_from(["rCBMC"]).is_err());
}

#[test]
fn driver_rejects_unknown_flags() {
    assert!(
        driver_surface()
            .try_get_matches_from(["rCBMC", "main.rs", "--no-such-flag"])
            .is_err()
    );
}

#[test]
fn cbmc_args_swallow_flag_like_tokens() {
    let m = driver_surface()
        .try_get_matches_from(["rCBMC", "main.rs", "--cbmc-args", "--quiet", "--object-bits", "12"])
        .unwrap();
    let cfg = DriverConfig::from_matches(&m);
    // everything after --cbmc-args goes to CBMC, even names we also define
    assert!(!cfg.loudness.quiet);
    assert_eq!(cfg.cbmc_args, ["--quiet", "--object-bits", "12"]);
}

#[test]
fn plugin_rejects_harness_flags() {
    assert!(
        plugin_surface()
            .try_get_matches_from(["cargo-rCBMC", "--function", "check_add"])
            .is_err()
    );
    assert!(
        plugin_surface()
            .try_get_matches_from(["cargo-rCBMC", "--c-lib", "lib/helpers.c"])
            .is_err()
    );
}

#[test]
fn plugin_shares_the_remaining_surface() {
    let m = plugin_surface()
        .try_get_matches_from(["cargo-rCBMC", "-q", "--mangler", "legacy", "--dry-run"])
        .unwrap();
    let cfg = DriverConfig::from_matches(&m);
    assert!(cfg.loudness.quiet);
    assert_eq!(cfg.other.mangler, "legacy");
    assert!(cfg.other.dry_run);
    // excluded group falls back to its defaults
    assert_eq!(cfg.harness.function, "main");
    assert!(cfg.harness.c_lib.is_empty());
}

#[test]
fn surfaces_agree_on_shared_flags() {
    let driver = driver_surface();
    let plugin = plugin_surface();
    for arg in plugin.get_arguments() {
        let twin = driver
            .get_arguments()
            .find(|a| a.get_id() == arg.get_id())
            .expect("plugin flag missing from driver surface");
        assert_eq!(twin.get_default_values(), arg.get_default_values());
        assert_eq!(twin.get_help_heading(), arg.get_help_heading());
    }
}
