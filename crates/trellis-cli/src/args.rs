//! Command-line argument definitions for the Trellis CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global options select the configuration file and logging
//! verbosity; each [`Command`] covers one workflow.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for the Trellis fabric tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a fabric description as an SVG snapshot or topology JSON
    Render {
        /// Path to the input description (YAML)
        input: String,

        /// Path to the output file
        #[arg(short, long, default_value = "out.svg")]
        output: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Svg)]
        format: Format,
    },

    /// Validate a fabric description and report every broken rule
    Check {
        /// Path to the input description (YAML)
        input: String,
    },

    /// Write the canonical description for a fabric name
    New {
        /// Fabric name
        #[arg(default_value = "myfabric-1")]
        name: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate a description from a preset or from device counts
    Quick {
        /// Preset name, e.g. "Large OSPF" (overrides the counts)
        #[arg(short, long)]
        preset: Option<String>,

        /// Number of spines
        #[arg(long, default_value_t = 2)]
        spines: usize,

        /// Number of leaves
        #[arg(long, default_value_t = 3)]
        leaves: usize,

        /// Underlay and overlay protocol
        #[arg(long, default_value = "EBGP")]
        protocol: String,

        /// Fabric name
        #[arg(long, default_value = "myfabric-1")]
        name: String,

        /// List the available presets and exit
        #[arg(long)]
        list: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print a summary of a fabric description
    Info {
        /// Path to the input description (YAML)
        input: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Svg,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let args = Args::parse_from(["trellis", "render", "fabric.yaml"]);
        assert_eq!(args.log_level, "info");
        match args.command {
            Command::Render {
                input,
                output,
                format,
            } => {
                assert_eq!(input, "fabric.yaml");
                assert_eq!(output, "out.svg");
                assert_eq!(format, Format::Svg);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_quick_with_global_options() {
        let args = Args::parse_from([
            "trellis",
            "quick",
            "--preset",
            "Small ISIS",
            "--log-level",
            "off",
            "-c",
            "cfg.toml",
        ]);
        assert_eq!(args.config.as_deref(), Some("cfg.toml"));
        assert_eq!(args.log_level, "off");
        assert!(matches!(
            args.command,
            Command::Quick { preset: Some(ref p), spines: 2, leaves: 3, .. } if p == "Small ISIS"
        ));
    }

    #[test]
    fn test_command_is_required() {
        assert!(Args::try_parse_from(["trellis"]).is_err());
    }
}
