//! Command line surface.
//!
//! Argument parsing lives here rather than in `main.rs` so it can be tested.

use crate::config::Config;
use crate::models::AddressFamily;
use crate::output::{to_json, to_json_pretty};
use crate::processing::{collapse_to_cidr, expand_cidr_limited};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::error::Error;

/// Expand CIDR blocks into address lists, or collapse a range into a CIDR.
#[derive(Parser, Debug)]
#[command(name = "ip-cidr-utils", version, about)]
pub struct Cli {
    /// Indent JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every address in a CIDR block as a JSON array
    Expand(ExpandArgs),
    /// Print the CIDR block covering FIRST..=LAST as a JSON string
    Collapse(CollapseArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct CidrInput {
    /// IPv4 CIDR, e.g. 128.14.35.7/20
    #[arg(long)]
    pub ipv4: Option<String>,

    /// IPv6 CIDR with all 8 groups, e.g. fe80:0:982:2a5c:0:0:0:ffff/120
    #[arg(long)]
    pub ipv6: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExpandArgs {
    #[command(flatten)]
    pub input: CidrInput,

    /// Drop addresses whose last group is all zeros or all ones
    #[arg(long)]
    pub clean: bool,

    /// Refuse blocks larger than this (overrides IP_CIDR_MAX_ADDRESSES)
    #[arg(long)]
    pub max_addresses: Option<u128>,
}

#[derive(Args, Debug)]
pub struct CollapseArgs {
    /// First IPv4 address of the range
    pub first: String,
    /// Last IPv4 address of the range
    pub last: String,
}

impl CidrInput {
    fn family_and_text(&self) -> Result<(AddressFamily, &str), Box<dyn Error>> {
        match (&self.ipv4, &self.ipv6) {
            (Some(cidr), None) => Ok((AddressFamily::Ipv4, cidr.as_str())),
            (None, Some(cidr)) => Ok((AddressFamily::Ipv6, cidr.as_str())),
            _ => Err("Exactly one of --ipv4 or --ipv6 is required".into()),
        }
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, Box<dyn Error>> {
    if pretty {
        to_json_pretty(value)
    } else {
        to_json(value)
    }
}

/// Execute the parsed command and return what should go to stdout.
pub fn run(cli: &Cli, config: Config) -> Result<String, Box<dyn Error>> {
    match &cli.command {
        Command::Expand(args) => {
            let (family, cidr) = args.input.family_and_text()?;
            let config = config.with_max_addresses(args.max_addresses);
            log::info!("{family}: {cidr} clean={}", args.clean);
            let ips = expand_cidr_limited(cidr, family, args.clean, config.max_addresses)?;
            log::info!("{cidr}: {} addresses", ips.len());
            render(&ips, cli.pretty)
        }
        Command::Collapse(args) => {
            let cidr = collapse_to_cidr(&args.first, &args.last)?;
            log::info!("{}..{} -> {cidr}", args.first, args.last);
            render(&cidr, cli.pretty)
        }
    }
}
