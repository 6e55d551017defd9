//! Explain command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use diadoc_core::{Error, ErrorClassifier, Resource};

use crate::output;

#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Resource name, e.g. GetDepartment
    pub resource: String,

    /// HTTP status code
    pub code: u16,
}

pub fn run(args: ExplainArgs) -> Result<()> {
    let resource = Resource::get(&args.resource).context("Run 'diadoc resources' for the list")?;

    match ErrorClassifier::new().classify(args.code, resource.name(), &[]) {
        Error::Classified(e) => {
            output::field("Resource", resource.name());
            output::field("Status", &e.code.to_string());
            println!("{}", e.message);
        }
        _ => {
            output::field("Resource", resource.name());
            output::field("Status", &args.code.to_string());
            println!("{}", "No diagnostic registered for this status".yellow());
        }
    }

    Ok(())
}
