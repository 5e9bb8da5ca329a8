use crate::flags;
use clap::{ArgMatches, Command};
use log::LevelFilter;
use std::path::PathBuf;

/// resolved driver configuration, one sub-struct per flag group
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub loudness: LoudnessConfig,
    pub harness: HarnessConfig,
    pub artifact: ArtifactConfig,
    pub check: CheckConfig,
    pub visualizer: VisualizerConfig,
    pub other: OtherConfig,
    /// arguments passed through to CBMC verbatim
    pub cbmc_args: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LoudnessConfig {
    pub debug: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl LoudnessConfig {
    /// log level implied by the loudness flags, --quiet winning over the rest
    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.debug {
            LevelFilter::Debug
        } else if self.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        }
    }
}

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// external C files referenced by the Rust code under verification
    pub c_lib: Vec<PathBuf>,
    /// entry point for verification
    pub function: String,
}

#[derive(Debug, Clone)]
pub struct ArtifactConfig {
    pub target_dir: PathBuf,
    pub keep_temps: bool,
    pub gen_c: bool,
    pub gen_symbols: bool,
}

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub no_default_checks: bool,
    pub no_memory_safety_checks: bool,
    pub no_overflow_checks: bool,
    pub no_unwinding_checks: bool,
}

impl CheckConfig {
    pub fn memory_safety(&self) -> bool {
        !(self.no_default_checks || self.no_memory_safety_checks)
    }

    pub fn overflow(&self) -> bool {
        !(self.no_default_checks || self.no_overflow_checks)
    }

    pub fn unwinding(&self) -> bool {
        !(self.no_default_checks || self.no_unwinding_checks)
    }
}

#[derive(Debug, Clone)]
pub struct VisualizerConfig {
    pub srcdir: PathBuf,
    pub wkdir: PathBuf,
    pub visualize: bool,
}

#[derive(Debug, Clone)]
pub struct OtherConfig {
    pub allow_cbmc_verification_failure: bool,
    pub mangler: String,
    pub dry_run: bool,
}

// Lookups go through the fallible accessors: an entry point may have
// excluded a flag or a whole group at registration time, in which case the
// catalog default applies.

fn flag(m: &ArgMatches, id: &str) -> bool {
    m.try_get_one::<bool>(id)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}

fn single(m: &ArgMatches, id: &str, default: &str) -> String {
    m.try_get_one::<String>(id)
        .ok()
        .flatten()
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

fn many(m: &ArgMatches, id: &str) -> Vec<String> {
    m.try_get_many::<String>(id)
        .ok()
        .flatten()
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

impl DriverConfig {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            loudness: LoudnessConfig {
                debug: flag(m, "debug"),
                verbose: flag(m, "verbose"),
                quiet: flag(m, "quiet"),
            },
            harness: HarnessConfig {
                c_lib: many(m, "c-lib").into_iter().map(PathBuf::from).collect(),
                function: single(m, "function", "main"),
            },
            artifact: ArtifactConfig {
                target_dir: PathBuf::from(single(m, "target-dir", ".")),
                keep_temps: flag(m, "keep-temps"),
                gen_c: flag(m, "gen-c"),
                gen_symbols: flag(m, "gen-symbols"),
            },
            check: CheckConfig {
                no_default_checks: flag(m, "no-default-checks"),
                no_memory_safety_checks: flag(m, "no-memory-safety-checks"),
                no_overflow_checks: flag(m, "no-overflow-checks"),
                no_unwinding_checks: flag(m, "no-unwinding-checks"),
            },
            visualizer: VisualizerConfig {
                srcdir: PathBuf::from(single(m, "srcdir", ".")),
                wkdir: PathBuf::from(single(m, "wkdir", ".")),
                visualize: flag(m, "visualize"),
            },
            other: OtherConfig {
                allow_cbmc_verification_failure: flag(m, "allow-cbmc-verification-failure"),
                mangler: single(m, "mangler", "v0"),
                dry_run: flag(m, "dry-run"),
            },
            cbmc_args: many(m, "cbmc-args"),
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        let (cmd, _) = flags::add_flags(Command::new(""), &[], &[]);
        Self::from_matches(&cmd.get_matches_from([""]))
    }
}
