use std::error::Error as _;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::error;
use wordbst::{Config, Dictionary, Result};

const DEFAULT_FIND: &str = "яблуко";
const DEFAULT_DELETE: &str = "банан";
const DEFAULT_COMPARE: &str = "виноград";

/// Builds a word tree from a text file and keeps a flat-file mirror of it.
#[derive(Parser, Debug)]
#[clap(name = "wordbst", version, about)]
struct Cli {
    /// Text file the dictionary is built from.
    #[clap(long, env = "WORDBST_SOURCE", default_value = Config::DEFAULT_SOURCE)]
    source: PathBuf,

    /// Mirror file holding one word per line.
    #[clap(long, env = "WORDBST_MIRROR", default_value = Config::DEFAULT_MIRROR)]
    mirror: PathBuf,

    /// Log what the dictionary and mirror are doing.
    #[clap(short, long)]
    verbose: bool,

    /// No logs at all, not even warnings.
    #[clap(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the dictionary, search for a word (adding it when missing), delete a word and time
    /// a lookup. This is what runs without a subcommand.
    Demo {
        #[clap(long, default_value = DEFAULT_FIND)]
        find: String,
        #[clap(long, default_value = DEFAULT_DELETE)]
        delete: String,
        #[clap(long, default_value = DEFAULT_COMPARE)]
        compare: String,
    },
    /// Print every word in sorted order.
    Print,
    /// Report whether the dictionary holds a word.
    Search { word: String },
    /// Add a word and append it to the mirror.
    Add { word: String },
    /// Delete a word from the dictionary and the mirror.
    Delete { word: String },
    /// Time a dictionary lookup against a scan of the mirror.
    Compare { word: String },
    /// Rewrite the mirror from the dictionary.
    Sync,
}

impl Default for Command {
    fn default() -> Self {
        Self::Demo {
            find: DEFAULT_FIND.to_owned(),
            delete: DEFAULT_DELETE.to_owned(),
            compare: DEFAULT_COMPARE.to_owned(),
        }
    }
}

fn init_tracing(cli: &Cli) {
    // --quiet silences everything. Otherwise RUST_LOG wins, falling back to debug with
    // --verbose and to warnings only without it.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else {
        let fallback = if cli.verbose { "debug" } else { "warn" };
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = Config {
        source: cli.source,
        mirror: cli.mirror,
    };

    if let Err(e) = run(cli.command.unwrap_or_default(), &config) {
        eprintln!("error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}

fn run(command: Command, config: &Config) -> Result<()> {
    let mut dict = Dictionary::open(config);
    dict.build_from_file(&config.source)?;

    match command {
        Command::Demo {
            find,
            delete,
            compare,
        } => demo(&mut dict, &find, &delete, &compare),
        Command::Print => print_words(&dict),
        Command::Search { word } => {
            if dict.contains(&word) {
                println!("'{}' found in dictionary", word);
            } else {
                println!("'{}' not found in dictionary", word);
            }
        }
        Command::Add { word } => {
            dict.add_word(&word)?;
            println!("added '{}'", word);
        }
        Command::Delete { word } => {
            let removed = dict.delete_word(&word)?;
            println!("deleted '{}' ({} mirror lines dropped)", word, removed);
        }
        Command::Compare { word } => println!("{}", dict.compare_search_time(&word)?),
        Command::Sync => {
            dict.sync_mirror()?;
            println!(
                "wrote {} words to {}",
                dict.len(),
                dict.mirror().path().display()
            );
        }
    }
    Ok(())
}

/// Runs the whole sequence. Mirror failures are logged and the sequence carries on.
fn demo(dict: &mut Dictionary, find: &str, delete: &str, compare: &str) {
    println!("Dictionary:");
    print_words(dict);

    println!("Searching for '{}':", find);
    if dict.contains(find) {
        println!("word found in dictionary");
    } else {
        println!("word not found in dictionary, adding it");
        if let Err(e) = dict.add_word(find) {
            error!(error = %e, word = find, "could not add word");
        }
    }

    println!("Deleting '{}' from dictionary", delete);
    if let Err(e) = dict.delete_word(delete) {
        error!(error = %e, word = delete, "could not delete word");
    }

    match dict.compare_search_time(compare) {
        Ok(comparison) => println!("{}", comparison),
        Err(e) => error!(error = %e, word = compare, "could not compare search times"),
    }
}

fn print_words(dict: &Dictionary) {
    if dict.is_empty() {
        println!("dictionary is empty");
        return;
    }
    for word in dict.words() {
        println!("{}", word);
    }
}
