//! CLI entrypoint for casewise
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use casewise_application::{EvaluateDomainError, EvaluateDomainInput, EvaluateDomainUseCase};
use casewise_domain::DomainRegistry;
use casewise_infrastructure::{
    BundledRuleLoader, ConfigLoader, DirectoryRuleLoader, FileConfig, FileOutputFormat,
    JsonlEvaluationLogger, RuleEngineGateway, RuleSourceLoader, write_facts,
};
use casewise_presentation::{
    Cli, Command, ConsoleFormatter, EvaluateArgs, FactsArgs, OutputConfig, OutputFormat,
    collect_raw_input,
};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Unknown domain id
const EXIT_ROUTING: u8 = 2;
/// Rules could not be loaded
const EXIT_FAILURE: u8 = 1;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stderr keeps stdout clean for --output json
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    for issue in config.validate() {
        warn!("{}", issue.message);
    }

    let registry = Arc::new(DomainRegistry::builtin()?);
    for issue in registry.validate() {
        warn!("{}", issue.message);
    }

    match cli.command.unwrap_or(Command::Domains) {
        Command::Domains => {
            print!("{}", ConsoleFormatter::format_domains(&registry));
            Ok(ExitCode::SUCCESS)
        }
        Command::Facts(args) => show_facts(&registry, args),
        Command::Evaluate(args) => evaluate(registry, &config, args).await,
    }
}

fn show_facts(registry: &DomainRegistry, args: FactsArgs) -> Result<ExitCode> {
    let raw = collect_raw_input(&args.input.fields, args.input.input.as_deref())?;
    let Ok(domain) = registry.lookup(&args.domain) else {
        eprintln!(
            "{}",
            ConsoleFormatter::format_error(&EvaluateDomainError::DomainNotFound(args.domain))
        );
        return Ok(ExitCode::from(EXIT_ROUTING));
    };

    print!(
        "{}",
        ConsoleFormatter::format_facts(domain, &domain.normalize(&raw))
    );
    Ok(ExitCode::SUCCESS)
}

async fn evaluate(
    registry: Arc<DomainRegistry>,
    config: &FileConfig,
    args: EvaluateArgs,
) -> Result<ExitCode> {
    let output = output_config(config).with_overrides(args.output, args.no_color);
    if !output.use_color() {
        colored::control::set_override(false);
    }

    let raw = collect_raw_input(&args.input.fields, args.input.input.as_deref())?;

    // Debug dump of the facts the engine will see
    let dump_path = args
        .dump_facts
        .clone()
        .or_else(|| config.diagnostics.facts_dump.clone());
    if let (Some(path), Ok(domain)) = (dump_path, registry.lookup(&args.domain)) {
        if let Err(e) = write_facts(&path, &domain.normalize(&raw)) {
            warn!("Could not write facts to {}: {}", path.display(), e);
        }
    }

    // === Dependency Injection ===
    let loader: Arc<dyn RuleSourceLoader> = match &config.rules.dir {
        Some(dir) => {
            info!("Loading rules from {}", dir.display());
            Arc::new(DirectoryRuleLoader::new(dir))
        }
        None => Arc::new(BundledRuleLoader::new()),
    };
    let (max_depth, _) = config.rules.parse_max_depth();
    let gateway = Arc::new(RuleEngineGateway::new(loader).with_max_depth(max_depth));

    let mut use_case = EvaluateDomainUseCase::new(registry, gateway);
    if let Some(path) = &config.diagnostics.log_file
        && let Some(logger) = JsonlEvaluationLogger::open(path)
    {
        use_case = use_case.with_logger(Arc::new(logger));
    }

    match use_case
        .execute(EvaluateDomainInput::new(args.domain, raw))
        .await
    {
        Ok(result) => {
            let text = match output.format {
                OutputFormat::Full => ConsoleFormatter::format(&result),
                OutputFormat::Json => ConsoleFormatter::format_json(&result),
            };
            println!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            debug!("Evaluation failed: {:?}", e);
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            let code = if e.is_routing_error() {
                EXIT_ROUTING
            } else {
                EXIT_FAILURE
            };
            Ok(ExitCode::from(code))
        }
    }
}

fn output_config(config: &FileConfig) -> OutputConfig {
    let format = match config.output.parse_format().0 {
        FileOutputFormat::Full => OutputFormat::Full,
        FileOutputFormat::Json => OutputFormat::Json,
    };
    OutputConfig::new(format, config.output.color)
}
