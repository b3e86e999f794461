//! stash CLI
//!
//! Command-line interface for the flat-file secret store.

use std::io::{self, BufRead, Write};

use chrono::{Local, TimeZone};
use clap::{Parser, Subcommand};
use stash::{Config, StashError, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// stash CLI
#[derive(Parser, Debug)]
#[command(name = "stash")]
#[command(about = "Flat-file secret store for shell-environment bootstrapping")]
#[command(version)]
struct Args {
    /// Store file (overrides STASH_FILE)
    #[arg(short, long)]
    file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Set a key-value pair; prompts for the value when omitted
    Set {
        /// The key to set
        key: String,

        /// The value to set (read interactively when absent)
        value: Option<String>,
    },

    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// List keys with their last-modified dates, sorted by key
    List,

    /// Print the raw store file verbatim
    Dump,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stash=info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("stash: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> stash::Result<()> {
    let mut config = Config::from_env();
    if let Some(file) = args.file {
        config.store_path = file.into();
    }
    let store = Store::new(config);

    match args.command {
        Commands::Set { key, value } => {
            let value = match value {
                Some(v) => v.into_bytes(),
                None => prompt_value()?,
            };
            store.set(key.as_bytes(), &value)
        }
        Commands::Get { key } => {
            // Exit code reflects store readability, not key presence
            if let Some(value) = store.get(key.as_bytes())? {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                out.write_all(&value)?;
                out.write_all(b"\n")?;
            }
            Ok(())
        }
        Commands::Del { key } => store.del(key.as_bytes()),
        Commands::List => {
            let config = store.config().clone();
            for (key, timestamp) in store.list()? {
                println!("{}", render_entry(&config, &key, timestamp));
            }
            Ok(())
        }
        Commands::Dump => {
            print!("{}", store.dump()?);
            Ok(())
        }
    }
}

/// Read a value interactively; an empty value is refused before any write
fn prompt_value() -> stash::Result<Vec<u8>> {
    eprint!("value: ");
    io::stderr().flush()?;

    let mut value = String::new();
    io::stdin().lock().read_line(&mut value)?;
    let value = value.trim_end_matches(['\n', '\r']);

    if value.is_empty() {
        return Err(StashError::EmptyValue);
    }
    Ok(value.as_bytes().to_vec())
}

/// Render one `list` line through the configured templates
fn render_entry(config: &Config, key: &[u8], timestamp: u64) -> String {
    let date = match Local.timestamp_opt(timestamp as i64, 0) {
        chrono::LocalResult::Single(t) => t.format(&config.date_format).to_string(),
        _ => timestamp.to_string(),
    };
    config
        .list_format
        .replace("{key}", &String::from_utf8_lossy(key))
        .replace("{date}", &date)
}
