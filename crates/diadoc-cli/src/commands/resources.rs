//! Resources command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use diadoc_core::{Completion, Resource};
use serde::Serialize;

use crate::output;

#[derive(Args, Debug)]
pub struct ResourcesArgs {
    /// Print one JSON object per line
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ResourceLine<'a> {
    name: &'a str,
    method: &'a str,
    path: &'a str,
    completion: &'a str,
    statuses: Vec<u16>,
}

fn completion(resource: &Resource) -> &'static str {
    match resource.completion() {
        Completion::Immediate => "immediate",
        Completion::Polled => "polled",
        Completion::EmptyOnNoContent => "empty-on-no-content",
    }
}

pub fn run(args: ResourcesArgs) -> Result<()> {
    for resource in Resource::all() {
        if args.json {
            output::json(&ResourceLine {
                name: resource.name(),
                method: resource.method().as_str(),
                path: resource.path(),
                completion: completion(resource),
                statuses: resource.status_codes().collect(),
            })?;
        } else {
            println!(
                "{:<40} {:<6} {} {}",
                resource.name(),
                resource.method().as_str(),
                resource.path(),
                completion(resource).dimmed()
            );
        }
    }
    Ok(())
}
