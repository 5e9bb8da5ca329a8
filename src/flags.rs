use clap::{Arg, ArgAction, Command};
use log::error;
use std::collections::HashSet;

/// value arity of a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// present or absent, no value
    Toggle,
    /// zero or more values per occurrence, accumulated across occurrences
    Append,
    /// single value with a static default
    Single(&'static str),
    /// consume all remaining command-line tokens verbatim, must be the last flag
    Remainder,
}

#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    /// dashed long form, also the exclusion key
    pub name: &'static str,
    pub short: Option<char>,
    pub arity: FlagArity,
    pub help: &'static str,
}

impl FlagSpec {
    /// arg id in the parser, the long form without the leading dashes
    pub fn id(&self) -> &'static str {
        self.name.trim_start_matches('-')
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FlagGroup {
    /// unique title, the exclusion key and the help heading
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub flags: &'static [FlagSpec],
}

/// the flag surface shared by the driver and the cargo plugin
pub const CATALOG: &[FlagGroup] = &[
    FlagGroup {
        title: "Loudness flags",
        description: Some("Determine how much textual output to produce."),
        flags: &[
            FlagSpec {
                name: "--debug",
                short: None,
                arity: FlagArity::Toggle,
                help: "Produce full debug information",
            },
            FlagSpec {
                name: "--verbose",
                short: Some('v'),
                arity: FlagArity::Toggle,
                help: "Output processing stages and commands, along with minor debug information",
            },
            FlagSpec {
                name: "--quiet",
                short: Some('q'),
                arity: FlagArity::Toggle,
                help: "Produces no output, just an exit code and requested artifacts. Overrides --verbose",
            },
        ],
    },
    FlagGroup {
        title: "Proof harness flags",
        description: Some("Provide information about the proof harness for rCBMC."),
        flags: &[
            FlagSpec {
                name: "--c-lib",
                short: None,
                arity: FlagArity::Append,
                help: "External C files referenced by Rust code",
            },
            FlagSpec {
                name: "--function",
                short: None,
                arity: FlagArity::Single("main"),
                help: "Entry point for verification",
            },
        ],
    },
    FlagGroup {
        title: "Artifact flags",
        description: Some("Produce artifacts in addition to a basic rCBMC report."),
        flags: &[
            FlagSpec {
                name: "--target-dir",
                short: None,
                arity: FlagArity::Single("."),
                help: "Directory for all generated artifacts",
            },
            FlagSpec {
                name: "--keep-temps",
                short: None,
                arity: FlagArity::Toggle,
                help: "Keep temporary files generated throughout the rCBMC process",
            },
            FlagSpec {
                name: "--gen-c",
                short: None,
                arity: FlagArity::Toggle,
                help: "Generate C file equivalent to inputted program",
            },
            FlagSpec {
                name: "--gen-symbols",
                short: None,
                arity: FlagArity::Toggle,
                help: "Generate a symbol table",
            },
        ],
    },
    FlagGroup {
        title: "Check flags",
        description: Some("Disable some or all default checks."),
        flags: &[
            FlagSpec {
                name: "--no-default-checks",
                short: None,
                arity: FlagArity::Toggle,
                help: "Disable all default checks",
            },
            FlagSpec {
                name: "--no-memory-safety-checks",
                short: None,
                arity: FlagArity::Toggle,
                help: "Disable default memory safety checks",
            },
            FlagSpec {
                name: "--no-overflow-checks",
                short: None,
                arity: FlagArity::Toggle,
                help: "Disable default overflow checks",
            },
            FlagSpec {
                name: "--no-unwinding-checks",
                short: None,
                arity: FlagArity::Toggle,
                help: "Disable default unwinding checks",
            },
        ],
    },
    FlagGroup {
        title: "Visualizer flags",
        description: Some(
            "Generate an HTML-based UI for the generated rCBMC report. See https://github.com/awslabs/aws-viewer-for-cbmc.",
        ),
        flags: &[
            FlagSpec {
                name: "--srcdir",
                short: None,
                arity: FlagArity::Single("."),
                help: "The source directory. The root of the source tree.",
            },
            FlagSpec {
                name: "--wkdir",
                short: None,
                arity: FlagArity::Single("."),
                help: "The working directory. Used to determine source locations in output. This is generally the location from which rCBMC is currently being invoked.",
            },
            FlagSpec {
                name: "--visualize",
                short: None,
                arity: FlagArity::Toggle,
                help: "Generate visualizer report; open report/html/index.html",
            },
        ],
    },
    FlagGroup {
        title: "Other flags",
        description: None,
        flags: &[
            FlagSpec {
                name: "--allow-cbmc-verification-failure",
                short: None,
                arity: FlagArity::Toggle,
                help: "Do not produce error return code on CBMC verification failure",
            },
            FlagSpec {
                name: "--mangler",
                short: None,
                arity: FlagArity::Single("v0"),
                help: "Change what mangler is used by the Rust compiler",
            },
            FlagSpec {
                name: "--dry-run",
                short: None,
                arity: FlagArity::Toggle,
                help: "Print commands instead of running them",
            },
        ],
    },
    FlagGroup {
        title: "Developer flags",
        description: Some(
            "These are generally meant for use by rCBMC developers, and are not stable.",
        ),
        flags: &[FlagSpec {
            name: "--cbmc-args",
            short: None,
            arity: FlagArity::Remainder,
            help: "Pass through directly to CBMC; must be the last flag",
        }],
    },
];

fn build_arg(group: &FlagGroup, flag: &FlagSpec) -> Arg {
    let mut arg = Arg::new(flag.id())
        .long(flag.id())
        .help(flag.help)
        .help_heading(group.title);
    if let Some(short) = flag.short {
        arg = arg.short(short);
    }
    match flag.arity {
        FlagArity::Toggle => arg.action(ArgAction::SetTrue),
        FlagArity::Append => arg.action(ArgAction::Append).num_args(0..),
        FlagArity::Single(default) => arg.action(ArgAction::Set).default_value(default),
        FlagArity::Remainder => arg
            .action(ArgAction::Append)
            .num_args(0..)
            .allow_hyphen_values(true)
            .trailing_var_arg(true),
    }
}

/// Declares the shared flag surface into `cmd`, one pass over the catalog.
///
/// `exclude_flags` and `exclude_groups` drop individual flags or whole groups
/// for entry points that do not support them; a skipped group suppresses all
/// of its flags. Exclusions that match nothing in the catalog are reported
/// together after the pass and make the returned bool false, while the ones
/// that did match stay applied.
pub fn add_flags(
    mut cmd: Command,
    exclude_flags: &[&str],
    exclude_groups: &[&str],
) -> (Command, bool) {
    let mut matched_groups: HashSet<&str> = HashSet::new();
    let mut matched_flags: HashSet<&str> = HashSet::new();
    for group in CATALOG {
        if exclude_groups.contains(&group.title) {
            matched_groups.insert(group.title);
            continue;
        }
        for flag in group.flags {
            if exclude_flags.contains(&flag.name) {
                matched_flags.insert(flag.name);
                continue;
            }
            cmd = cmd.arg(build_arg(group, flag));
        }
    }
    let extra_groups = unmatched(exclude_groups, &matched_groups);
    let extra_flags = unmatched(exclude_flags, &matched_flags);
    if !extra_groups.is_empty() {
        error!("attempt to exclude groups which don't exist: {extra_groups:?}");
    }
    if !extra_flags.is_empty() {
        error!("attempt to exclude flags which don't exist: {extra_flags:?}");
    }
    (cmd, extra_groups.is_empty() && extra_flags.is_empty())
}

/// requested names that matched nothing, in request order, deduplicated
fn unmatched<'a>(requested: &[&'a str], matched: &HashSet<&'a str>) -> Vec<&'a str> {
    let mut extra = Vec::new();
    for name in requested {
        if !matched.contains(name) && !extra.contains(name) {
            extra.push(*name);
        }
    }
    extra
}
