//! Command-line selection host for the langpick language picker.

mod interactive;
mod render;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use langpick_core::{filter_options, results_header, Config, LanguageOption, OptionSet};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "langpick", about = "Searchable language picker", version)]
struct Cli {
    /// JSON option file (overrides LANGPICK_OPTIONS_PATH)
    #[arg(short, long, global = true)]
    options: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Print options matching a query
    Search {
        query: String,
        /// Result cap (defaults to LANGPICK_MAX_RESULTS or 50)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print every option in display order
    List,
    /// Print the label for a value or alias
    Resolve { value: String },
    /// Drive a picker from stdin lines
    Interactive,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("langpick=warn,langpick_core=warn,langpick_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn resolve_config(cli_options: Option<PathBuf>) -> Config {
    let mut config = Config::from_env();
    if cli_options.is_some() {
        config.options_path = cli_options;
    }
    config
}

fn format_options(options: &[&LanguageOption], json: bool) -> anyhow::Result<String> {
    if json {
        return serde_json::to_string_pretty(options).context("response encoding error");
    }
    let rows: Vec<String> = options
        .iter()
        .map(|option| format!("{:<16} {}", option.value, option.label))
        .collect();
    Ok(rows.join("\n"))
}

fn format_resolved(value: &str, options: &OptionSet, json: bool) -> anyhow::Result<Option<String>> {
    let Some(option) = options.find(value) else {
        return Ok(None);
    };
    if json {
        return serde_json::to_string_pretty(option)
            .map(Some)
            .context("response encoding error");
    }
    Ok(Some(option.label.clone()))
}

fn print_output(output: &str) {
    if !output.is_empty() {
        println!("{}", output);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "langpick", &mut io::stdout());
        return Ok(());
    }

    let config = resolve_config(cli.options);
    let options = config
        .load_options()
        .context("failed to load language options")?;

    match cli.command {
        Commands::Completions { .. } => Ok(()),
        Commands::Search { query, limit } => {
            let limit = limit.unwrap_or(config.max_results);
            let matches = filter_options(options.as_slice(), Some(query.as_str()), limit);
            if !cli.json {
                eprintln!("{}", results_header(matches.len()));
            }
            print_output(&format_options(&matches, cli.json)?);
            Ok(())
        }
        Commands::List => {
            let all: Vec<&LanguageOption> = options.as_slice().iter().collect();
            print_output(&format_options(&all, cli.json)?);
            Ok(())
        }
        Commands::Resolve { value } => match format_resolved(&value, &options, cli.json)? {
            Some(output) => {
                print_output(&output);
                Ok(())
            }
            None => {
                eprintln!("Unknown language: {}", value);
                std::process::exit(1);
            }
        },
        Commands::Interactive => {
            let stdout = io::stdout();
            let sink = render::TerminalSink::new(stdout.lock(), cli.json);
            let sink = interactive::run_session(options, config.picker_settings(), sink)?;
            sink.into_inner().flush()?;
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests;
