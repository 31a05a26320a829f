use crate::config::{resolve_format, ResolvedConfig};
use crate::errors::{AppError, AppResult};
use crate::fetcher::{fetch_page, read_page};
use crate::models::{ProbePolicy, Strategy};
use crate::output;
use crate::pipeline::extract_notices;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

fn build_command() -> Command<'static> {
    Command::new("armp-notices")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("cli")
                .about("Fetch the result page and extract its notices")
                .after_help("Environment: FORMAT, OUTPUT_FILE and SHOW_HTML apply when the matching flag is absent.\nExample:\n  armp-notices cli -s probe -f json -o notices.json")
                .arg(
                    Arg::new("url")
                        .short('u')
                        .long("url")
                        .help("Result page URL to fetch")
                        .action(ArgAction::Set),
                )
                .args(shared_args()),
        )
        .subcommand(
            Command::new("toml")
                .about("Run using a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .args(shared_args()),
        )
}

fn shared_args() -> Vec<Arg<'static>> {
    vec![
        Arg::new("input")
            .short('i')
            .long("input")
            .help("Read a saved HTML page instead of fetching")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
        Arg::new("strategy")
            .short('s')
            .long("strategy")
            .help("Extraction strategy: 'probe' (dom), 'dictionary' (dict) or 'markup' (regex)")
            .action(ArgAction::Set),
        Arg::new("probe_policy")
            .long("probe-policy")
            .help("DOM probe on an empty value: 'stop-on-match' or 'skip-empty'")
            .action(ArgAction::Set),
        Arg::new("format")
            .short('f')
            .long("format")
            .help("Output format: json or yaml (default yaml)")
            .action(ArgAction::Set),
        Arg::new("output")
            .short('o')
            .long("output")
            .help("Output file path; stdout if absent")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
        Arg::new("show_html")
            .long("show-html")
            .help("Also log each item's inner HTML before parsing")
            .action(ArgAction::SetTrue),
    ]
}

/// Parses command-line arguments and runs the extraction.
///
/// Two subcommands are available:
/// - `cli`: built-in defaults, overridden by environment variables and flags
/// - `toml`: settings from a TOML file, overridden by environment variables and flags
///
/// Both run the same workflow: obtain the page source, extract the notices
/// with the chosen strategy, render them and write the result.
///
/// # Returns
///
/// Returns an error if:
/// - A flag or configuration value is invalid
/// - The page cannot be fetched or read
/// - Extraction hits a structural failure
/// - The output cannot be rendered or written
pub async fn cli() -> AppResult<()> {
    let cmd = build_command();
    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("cli", sub)) => {
            let mut config = ResolvedConfig::default();
            if let Some(url) = sub.get_one::<String>("url") {
                config.url = url.clone();
            }
            config.apply_env();
            apply_flags(&mut config, sub)?;
            run_workflow(&config).await?;
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .ok_or_else(|| AppError::InvalidInput("config path is required".into()))?;
            let mut config = ResolvedConfig::from_toml_file(config_path)?;
            config.apply_env();
            apply_flags(&mut config, sub)?;
            run_workflow(&config).await?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

/// Applies flags shared by both subcommands; flags win over every other layer.
fn apply_flags(config: &mut ResolvedConfig, sub: &ArgMatches) -> AppResult<()> {
    if let Some(input) = sub.get_one::<PathBuf>("input") {
        config.input = Some(input.clone());
    }
    if let Some(strategy) = sub.get_one::<String>("strategy") {
        config.strategy = strategy.parse::<Strategy>()?;
    }
    if let Some(policy) = sub.get_one::<String>("probe_policy") {
        config.probe_policy = policy.parse::<ProbePolicy>()?;
    }
    if let Some(format) = sub.get_one::<String>("format") {
        if !format.trim().is_empty() {
            config.format = resolve_format(format);
        }
    }
    if let Some(path) = sub.get_one::<PathBuf>("output") {
        config.output = Some(path.clone());
    }
    if sub.get_flag("show_html") {
        config.show_html = true;
    }
    Ok(())
}

async fn run_workflow(config: &ResolvedConfig) -> AppResult<()> {
    let source = match &config.input {
        Some(path) => read_page(path).await?,
        None => {
            let client = reqwest::Client::new();
            fetch_page(&client, &config.url).await?
        }
    };

    let notices = extract_notices(&source, config)?;
    let rendered = output::render(&notices, config.format)?;
    output::write(&rendered, config.output.as_deref()).await?;

    info!(
        notices = notices.len(),
        strategy = config.strategy.display_name(),
        "All operations completed successfully"
    );

    Ok(())
}
