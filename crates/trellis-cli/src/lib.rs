//! CLI logic for the Trellis fabric tool.
//!
//! This module contains the core CLI logic: each [`Command`] reads its input,
//! runs it through the library and writes the result to a file or stdout.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, Format};

use std::{fs, io::Write};

use log::info;

use trellis::{
    FabricBuilder, TrellisError,
    serialize::{self, PRESETS, QuickConfig},
    summary::FabricSummary,
};

/// Run the Trellis CLI application, writing console output to stdout.
///
/// # Errors
///
/// Returns `TrellisError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parse errors and broken description rules
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), TrellisError> {
    let stdout = std::io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Run the Trellis CLI application, writing console output to `out`.
///
/// Commands that take an output path write there instead.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_output(args: &Args, out: &mut dyn Write) -> Result<(), TrellisError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = FabricBuilder::new(app_config);

    match &args.command {
        Command::Render {
            input,
            output,
            format,
        } => {
            info!(input_path = input, output_path = output, format:?; "Rendering fabric");

            let source = fs::read_to_string(input)?;
            let description = builder.parse(&source)?;
            let topology = builder.generate(&description);
            let rendered = match format {
                Format::Svg => builder.render_svg(&topology)?,
                Format::Json => builder.render_json(&topology)?,
            };
            fs::write(output, rendered)?;

            info!(output_file = output; "Topology exported successfully");
        }
        Command::Check { input } => {
            let source = fs::read_to_string(input)?;
            let description = builder.parse(&source)?;
            writeln!(
                out,
                "{input}: valid fabric `{}`",
                description.name().unwrap_or_default()
            )?;
            // Only warnings remain once parsing succeeded.
            for warning in trellis_parser::check(&description) {
                writeln!(out, "{input}: {warning}")?;
            }
        }
        Command::New { name, output } => {
            let text = serialize::serialize(&serialize::to_description(name))?;
            emit(out, output.as_deref(), &text)?;
        }
        Command::Quick { list: true, .. } => {
            for preset in &PRESETS {
                writeln!(out, "{:<12} {}", preset.name, preset.summary())?;
            }
        }
        Command::Quick {
            preset,
            spines,
            leaves,
            protocol,
            name,
            output,
            ..
        } => {
            let config = match preset {
                Some(preset_name) => serialize::preset(preset_name)
                    .ok_or_else(|| unknown_preset(preset_name))?
                    .config()
                    .with_fabric_name(name.as_str()),
                None => QuickConfig::new(*spines, *leaves, protocol.as_str())
                    .with_fabric_name(name.as_str()),
            };
            info!(
                spines = config.spine_count,
                leaves = config.leaf_count,
                protocol = config.protocol.as_str();
                "Generating quick configuration"
            );
            emit(out, output.as_deref(), &serialize::quick_config(&config))?;
        }
        Command::Info { input } => {
            let source = fs::read_to_string(input)?;
            let description = trellis_parser::parse(&source)
                .map_err(|err| TrellisError::new_parse_error(err, source.as_str()))?;
            writeln!(out, "{}", FabricSummary::from_description(&description))?;
        }
    }

    Ok(())
}

fn emit(out: &mut dyn Write, path: Option<&str>, text: &str) -> Result<(), TrellisError> {
    match path {
        Some(path) => {
            fs::write(path, text)?;
            info!(output_file = path; "Description written");
        }
        None => out.write_all(text.as_bytes())?,
    }
    Ok(())
}

fn unknown_preset(name: &str) -> TrellisError {
    let known: Vec<_> = PRESETS.iter().map(|preset| preset.name).collect();
    TrellisError::Config(format!(
        "unknown preset `{name}` (available: {})",
        known.join(", ")
    ))
}
