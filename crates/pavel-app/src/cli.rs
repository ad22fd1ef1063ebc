use std::path::PathBuf;

use clap::Parser;
use pavel_common::ModelTier;

/// Pavel: a PhD-level research assistant for physics and applied maths, in your terminal.
#[derive(Parser, Debug)]
#[command(name = "pavel", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model tier to start with (flash, pro).
    #[arg(short = 'm', long)]
    pub model: Option<ModelTier>,

    /// Files to pre-select for every prompt (pdf, png, jpg, jpeg).
    #[arg(short = 'a', long = "attach", num_args = 1..)]
    pub attach: Vec<PathBuf>,

    /// Store the persona seed as a hidden system turn.
    #[arg(long)]
    pub hide_persona: bool,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
