//! CLI argument definitions for the sky spectrum viewer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "skyspec",
    version,
    about = "Sky Spectrum Viewer - static export tooling",
    long_about = "Project two sky-background spectra (air/vacuum wavelengths,\n\
                  photon/CGS flux) and export a standalone, script-free HTML\n\
                  viewer with every unit and visibility action precomputed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the standalone HTML artifact.
    Export(ExportArgs),

    /// List the precomputed menu actions the artifact will carry.
    Actions(ActionsArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// First spectrum source (whitespace-delimited, four columns).
    #[arg(value_name = "SPECTRUM_A", default_value = "UVEX.txt")]
    pub spectrum_a: PathBuf,

    /// Second spectrum source.
    #[arg(value_name = "SPECTRUM_B", default_value = "GIANO.txt")]
    pub spectrum_b: PathBuf,

    /// Output path for the HTML document.
    #[arg(long = "output", value_name = "PATH", default_value = "spectrum_plot.html")]
    pub output: PathBuf,

    /// Page and plot title (first line).
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Second title line, typically data provenance.
    #[arg(long = "subtitle")]
    pub subtitle: Option<String>,

    /// Link text/markup rendered above the plot.
    #[arg(long = "source-link")]
    pub source_link: Option<String>,
}

#[derive(Parser)]
pub struct ActionsArgs {
    /// First spectrum source.
    #[arg(value_name = "SPECTRUM_A", default_value = "UVEX.txt")]
    pub spectrum_a: PathBuf,

    /// Second spectrum source.
    #[arg(value_name = "SPECTRUM_B", default_value = "GIANO.txt")]
    pub spectrum_b: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
