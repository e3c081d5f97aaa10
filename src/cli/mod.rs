//! Command line interface for the VSIX signer.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::{OutputManager, error_annotation};

use crate::error::Result;
use crate::pipeline::{self, Platform, SystemHost};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    log::debug!("Parsed arguments: {:?}", args);

    let (inputs, environment) = RuntimeConfig::from_args(&args)?.into_parts();
    pipeline::run(&SystemHost, Platform::current(), inputs, &environment).await?;

    Ok(0)
}
