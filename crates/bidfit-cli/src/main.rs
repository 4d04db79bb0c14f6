//! bidfit command line
//!
//! `bidfit evaluate` runs the four-step pipeline against the real
//! providers and renders the evaluation. API keys come from the
//! environment; everything else is flags.

use anyhow::{Context, Result};
use bidfit_providers::{GeminiConfig, GeminiModel, TavilyClient, TavilyConfig};
use bidfit_steps::standard_pipeline;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::sync::Arc;

mod render;

fn cli() -> Command {
    Command::new("bidfit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Construction company fit evaluator")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("evaluate")
                .about("Evaluate a company against project requirements")
                .arg(
                    Arg::new("requirements")
                        .long("requirements")
                        .required(true)
                        .help("Project requirements text, or @path to read a file"),
                )
                .arg(
                    Arg::new("company")
                        .long("company")
                        .required(true)
                        .help("Company name to research"),
                )
                .arg(
                    Arg::new("max-results")
                        .long("max-results")
                        .default_value("5")
                        .value_parser(value_parser!(usize))
                        .help("Bound on ranked search results"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the raw evaluation record as JSON"),
                ),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("evaluate", args)) => evaluate(args).await,
        _ => unreachable!("arg_required_else_help"),
    }
}

async fn evaluate(args: &ArgMatches) -> Result<()> {
    let raw = args.get_one::<String>("requirements").unwrap();
    let requirements = read_requirements(raw)?;
    let company = args.get_one::<String>("company").unwrap();
    let max_results = *args.get_one::<usize>("max-results").unwrap();

    let gemini_key =
        std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY is not set")?;
    let tavily_key =
        std::env::var("TAVILY_API_KEY").context("TAVILY_API_KEY is not set")?;

    let mut gemini = GeminiConfig::new(gemini_key);
    if let Ok(model) = std::env::var("BIDFIT_GEMINI_MODEL") {
        gemini = gemini.with_model(model);
    }
    let model = Arc::new(GeminiModel::new(gemini)?);
    let search = Arc::new(TavilyClient::new(TavilyConfig::new(tavily_key))?);

    let pipeline = standard_pipeline(model, search, max_results);
    tracing::info!(company = %company, "starting evaluation");
    let result = pipeline.evaluate(&requirements, company).await?;

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::render(&result));
    }
    Ok(())
}

/// Resolve the requirements argument: literal text, or `@path`
fn read_requirements(raw: &str) -> Result<String> {
    match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading requirements file {path}")),
        None => Ok(raw.to_string()),
    }
}
