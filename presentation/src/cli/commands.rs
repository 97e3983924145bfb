//! CLI command definitions

use crate::input::parse_field;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for evaluation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every question with its advice and next steps
    Full,
    /// JSON output
    Json,
}

/// CLI arguments for casewise
#[derive(Parser, Debug)]
#[command(name = "casewise")]
#[command(author, version, about = "Rule-based legal guidance for common disputes")]
#[command(long_about = r#"
casewise answers a fixed set of legal questions for one subject area
(tenancy, consumer rights, contracts, traffic, cyber fraud, employment)
from a handful of facts you supply.

Facts are given as key=value fields, a flat JSON file, or both:

  casewise evaluate tenant --field rent_paid=Yes --field notice_given=Yes
  casewise evaluate traffic --input answers.json --output json
  casewise facts consumer --field defective=Yes --field days_since_purchase=12

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./casewise.toml       Project-level config
3. ~/.config/casewise/config.toml   Global config
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available legal domains
    Domains,

    /// Answer every question of a domain
    Evaluate(EvaluateArgs),

    /// Print the normalized facts for a domain without evaluating
    Facts(FactsArgs),
}

/// Where the raw answers come from
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// A form answer as key=value (repeatable)
    #[arg(short, long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Flat JSON object of answers; --field values take precedence
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Domain identifier (see `casewise domains`)
    pub domain: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Output format [default: from config, else full]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write the normalized facts to this file before evaluating
    #[arg(long, value_name = "PATH")]
    pub dump_facts: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args, Debug)]
pub struct FactsArgs {
    /// Domain identifier (see `casewise domains`)
    pub domain: String,

    #[command(flatten)]
    pub input: InputArgs,
}
