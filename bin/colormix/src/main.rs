//! Blend the colors in a color file and on the command line, and print the
//! result as RGBA, hex and HSL.

mod tracing_config;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colormix::{BlendConfig, Error, HexStyle, Report, DEFAULT_INPUT_FILE};
use tracing::debug;

use crate::tracing_config::TracingConfig;

/// Blend hex or decimal RGBA colors into one.
///
/// Options must come before the tokens. Tokens are colors (`rgb`, `rrggbb`,
/// `rrggbbaa` or `r,g,b,a`) and `--mode <MODE>` or `-m <MODE>`, where MODE is
/// one of mix, lowest, highest or mix-saturate. Other tokens are ignored.
#[derive(Parser, Debug)]
#[command(name = "colormix", author, version, about, long_about = None)]
pub struct Cli {
    /// File with one color per line
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INPUT_FILE)]
    pub file: PathBuf,

    /// Write the hex line without zero padding each channel
    #[arg(long)]
    pub legacy_hex: bool,

    /// Enable verbose logging (-v: DEBUG, -vv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colors and mode selection
    #[arg(value_name = "TOKENS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Build the blending configuration from the command line.
    fn config(&self) -> BlendConfig {
        let hex_style = if self.legacy_hex {
            HexStyle::Legacy
        } else {
            HexStyle::Padded
        };

        BlendConfig::new()
            .with_input_file(&self.file)
            .with_hex_style(hex_style)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    TracingConfig::new()
        .with_verbosity(cli.verbose)
        .init()
        .context("Failed to initialize tracing")?;

    let config = cli.config();
    debug!(file = %config.input_file.display(), tokens = cli.tokens.len(), "starting");

    finish(colormix::run(&config, &cli.tokens), &mut io::stdout().lock())
}

/// Write the outcome of a blend to `out` and pick the exit status. Having
/// nothing to blend is reported on `out` as a failure; other errors are
/// returned.
fn finish(result: colormix::Result<Report>, out: &mut impl Write) -> Result<ExitCode> {
    let status = match result {
        Ok(report) => {
            write!(out, "{report}").context("Failed to write the report")?;
            ExitCode::SUCCESS
        }
        Err(err @ Error::NoColors) => {
            writeln!(out, "{err}").context("Failed to write the report")?;
            ExitCode::FAILURE
        }
        Err(err) => return Err(err).context("Failed to blend colors"),
    };

    out.flush().context("Failed to write the report")?;
    Ok(status)
}
