use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use tracing_subscriber::EnvFilter;

use hypernymgraph::config::{
    get_config_path, load_config, save_config, HypernymGraphConfig, CONFIG_FILENAME,
    OVERRIDES_FILENAME,
};
use hypernymgraph::errors::{HypernymGraphError, Result};
use hypernymgraph::hypernymgraph::HypernymGraph;
use hypernymgraph::overrides::OverrideTable;
use hypernymgraph::report::{
    format_overrides_as_json, format_overrides_as_text, format_summary_as_json,
    format_summary_as_text,
};
use hypernymgraph::types::FailurePolicy;

/// Adjective hypernymy graph builder.
#[derive(Parser)]
#[command(
    name = "hypernymgraph",
    about = "Resolve adjective hypernymy pairs to wordnet senses and emit an RDF graph"
)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = CONFIG_FILENAME)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every row and write the graph
    Convert {
        /// Semicolon-delimited input table
        input: PathBuf,
        /// Output Turtle file, or '-' for stdout
        output: String,
        /// Sense inventory snapshot (JSON)
        #[arg(short, long)]
        inventory: Option<String>,
        /// Override table (TOML); defaults to the built-in table
        #[arg(short, long)]
        overrides: Option<String>,
        /// Keep going after a row fails and report all failures at the end
        #[arg(short = 'k', long)]
        keep_going: bool,
        /// Resolve rows on a single thread
        #[arg(long)]
        sequential: bool,
    },
    /// Resolve every row without writing output
    Check {
        /// Semicolon-delimited input table
        input: PathBuf,
        /// Sense inventory snapshot (JSON)
        #[arg(short, long)]
        inventory: Option<String>,
        /// Override table (TOML); defaults to the built-in table
        #[arg(short, long)]
        overrides: Option<String>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// List the override table
    Overrides {
        /// Override table (TOML); defaults to the built-in table
        #[arg(short, long)]
        overrides: Option<String>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Write a default configuration and override table
    Init {
        /// Target directory (default: current directory)
        path: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "hypernymgraph=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Runs a command, returning `false` when it finished with row failures.
fn run(cli: Cli) -> Result<bool> {
    let mut config = load_config(&cli.config)?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            inventory,
            overrides,
            keep_going,
            sequential,
        } => {
            apply_sources(&mut config, inventory, overrides);
            if keep_going {
                config.failure_policy = FailurePolicy::CollectAndContinue;
            }
            if sequential {
                config.parallel = false;
            }

            let graph = HypernymGraph::open(config)?;
            let writer: Box<dyn Write> = if output == "-" {
                Box::new(io::stdout().lock())
            } else {
                let file = File::create(&output).map_err(|e| HypernymGraphError::File {
                    message: format!("failed to create output: {e}"),
                    path: output.clone(),
                })?;
                Box::new(file)
            };

            let summary = graph.convert(&input, BufWriter::new(writer))?;
            eprint!("{}", format_summary_as_text(&summary));
            Ok(summary.is_clean())
        }
        Commands::Check {
            input,
            inventory,
            overrides,
            json,
        } => {
            apply_sources(&mut config, inventory, overrides);
            let graph = HypernymGraph::open(config)?;
            let summary = graph.check(&input)?;
            if json {
                println!("{}", format_summary_as_json(&summary));
            } else {
                print!("{}", format_summary_as_text(&summary));
            }
            Ok(summary.is_clean())
        }
        Commands::Overrides { overrides, json } => {
            let path = overrides.or(config.overrides_path);
            let table = match path {
                Some(p) => OverrideTable::load(Path::new(&p))?,
                None => OverrideTable::builtin(),
            };
            if json {
                println!("{}", format_overrides_as_json(&table));
            } else {
                print!("{}", format_overrides_as_text(&table));
            }
            Ok(true)
        }
        Commands::Init { path } => {
            let dir = resolve_path(path);
            let config = HypernymGraphConfig {
                overrides_path: Some(dir.join(OVERRIDES_FILENAME).to_string_lossy().to_string()),
                ..HypernymGraphConfig::default()
            };
            let config_path = get_config_path(&dir);
            save_config(&config_path, &config)?;
            OverrideTable::builtin().save(&dir.join(OVERRIDES_FILENAME))?;
            println!("Initialized {}", config_path.display());
            Ok(true)
        }
    }
}

/// Lets command-line paths take precedence over the configuration file.
fn apply_sources(
    config: &mut HypernymGraphConfig,
    inventory: Option<String>,
    overrides: Option<String>,
) {
    if inventory.is_some() {
        config.inventory_path = inventory;
    }
    if overrides.is_some() {
        config.overrides_path = overrides;
    }
}

/// Resolves an optional path argument to a `PathBuf`.
///
/// Defaults to the current working directory if no path is provided.
fn resolve_path(path: Option<String>) -> PathBuf {
    match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
