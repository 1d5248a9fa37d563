//! docfixture CLI - fixtures for docstring generators
//!
//! Emit fixture sources, check documented output, and run the fixture
//! functions directly.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use docfixture::compare::{compare, try_compare};
use docfixture::config::SuiteConfig;
use docfixture::fixture::{catalog, Fixture, FixtureKind};
use docfixture::oracle::DocOracle;
use docfixture::random::random_alphabets_for;
use docfixture::{query, Error, Language};
use tracing::{debug, info};

/// docfixture - Multi-language fixtures for docstring generators
#[derive(Parser)]
#[command(name = "docfixture")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the fixture catalogue
    List {
        /// JSON suite configuration
        #[arg(short, long)]
        config: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Print the undocumented source of one fixture
    Emit {
        /// Fixture language (python, java, cpp, javascript)
        #[arg(short, long, default_value = "python")]
        language: String,

        /// Fixture (sum, compare, query, random)
        #[arg(short, long)]
        fixture: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Check a documented snippet produced by a docstring generator
    Check {
        /// Fixture language
        #[arg(short, long, default_value = "python")]
        language: String,

        /// Fixture the snippet documents
        #[arg(short, long)]
        fixture: String,

        /// Path to the documented snippet
        #[arg(long)]
        file: String,
    },

    /// Generate a random alphabetic string
    Random {
        /// JSON suite configuration supplying seed and length
        #[arg(short, long)]
        config: Option<String>,

        /// Number of characters (overrides the configuration, default 16)
        #[arg(short, long)]
        length: Option<usize>,

        /// Seed for reproducible output (overrides the configuration)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run a query against a SQLite database and print rows
    Query {
        /// Database file
        #[arg(long)]
        db: String,

        /// SQL query
        #[arg(long)]
        sql: String,
    },

    /// Three-way compare two values through a key map
    Compare {
        /// Key map (identity, length, numeric)
        #[arg(short, long, default_value = "identity")]
        key: String,

        /// First item
        item1: String,

        /// Second item
        item2: String,
    },
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("docfixture=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> docfixture::Result<ExitCode> {
    match command {
        Commands::List { config, output } => {
            let config = load_config(config.as_deref())?;
            let fixtures = catalog(&config);
            info!(count = fixtures.len(), "listing fixtures");

            if output == "json" {
                println!("{}", serde_json::to_string_pretty(&fixtures)?);
            } else {
                for fixture in &fixtures {
                    println!(
                        "{:<12} {:<18} {}({})",
                        fixture.language,
                        fixture.file_name(),
                        fixture.function_name,
                        fixture.params.join(", ")
                    );
                }
                println!("\n{} fixtures", fixtures.len());
            }
        }

        Commands::Emit {
            language,
            fixture,
            output,
        } => {
            let fixture = Fixture::new(fixture.parse()?, language.parse()?);
            if output == "json" {
                println!("{}", serde_json::to_string_pretty(&fixture)?);
            } else {
                print!("{}", fixture.source);
            }
        }

        Commands::Check {
            language,
            fixture,
            file,
        } => {
            let kind: FixtureKind = fixture.parse()?;
            let language: Language = language.parse()?;
            let fixture = Fixture::new(kind, language);
            let documented = std::fs::read_to_string(&file)?;
            debug!(file = %file, "read documented snippet");

            let verdict = DocOracle::new().check(&fixture, &documented);
            println!("{}: {verdict}", fixture.file_name());
            if !verdict.is_pass() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Random {
            config,
            length,
            seed,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(length) = length {
                config = config.with_random_length(length);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            println!("{}", random_alphabets_for(&config));
        }

        Commands::Query { db, sql } => {
            let conn = query::open_database(&db)?;
            for row in query::sqlite(&conn, &sql)? {
                println!("{}", row.join("|"));
            }
        }

        Commands::Compare { key, item1, item2 } => {
            println!("{}", compare_with_key(&key, &item1, &item2)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(path: Option<&str>) -> docfixture::Result<SuiteConfig> {
    match path {
        Some(path) => SuiteConfig::load(path),
        None => Ok(SuiteConfig::default()),
    }
}

/// Compare two command-line items through a named key map
fn compare_with_key(key: &str, item1: &str, item2: &str) -> docfixture::Result<i32> {
    match key {
        "identity" => Ok(compare(|s: &&str| s.to_string(), &item1, &item2)),
        "length" => Ok(compare(|s: &&str| s.chars().count(), &item1, &item2)),
        "numeric" => {
            let a = parse_number(item1)?;
            let b = parse_number(item2)?;
            try_compare(|x: &f64| *x, &a, &b)
        }
        other => Err(Error::Configuration(format!(
            "unknown key map '{other}' (identity, length, numeric)"
        ))),
    }
}

fn parse_number(s: &str) -> docfixture::Result<f64> {
    s.trim()
        .parse()
        .map_err(|_| Error::Configuration(format!("'{s}' is not a number")))
}
