// ABOUTME: CLI binary that looks words up in a learner's dictionary and exports flashcard rows.
// ABOUTME: Prints each entry as it is found and optionally writes a tab-separated import file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use lexicard_dict::{write_tsv_file, Client, DictionaryRules, WordRecord};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Dictionary {
    Oxford,
    Cambridge,
}

impl Dictionary {
    fn preset_name(self) -> &'static str {
        match self {
            Dictionary::Oxford => "oxford",
            Dictionary::Cambridge => "cambridge",
        }
    }
}

/// Look words up in an online learner's dictionary and format them for flashcard import.
#[derive(Parser, Debug)]
#[command(name = "lexicard", version)]
struct Args {
    /// Word(s) to search for
    #[arg()]
    words: Vec<String>,

    /// Read words from a file (one word per line)
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Output file for flashcard import (tab-separated)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Suppress console output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Built-in dictionary to search
    #[arg(short = 'd', long = "dictionary", value_enum, default_value_t = Dictionary::Oxford)]
    dictionary: Dictionary,

    /// JSON rule set to use instead of a built-in dictionary
    #[arg(long = "rules", conflicts_with = "dictionary")]
    rules: Option<PathBuf>,

    /// Override the dictionary's base URL
    #[arg(long = "base-url")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Print each entry as a JSON line instead of a text block
    #[arg(long = "json")]
    json_output: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Words from the command line first, then non-blank lines of the word file.
fn collect_words(args: &Args) -> Result<Vec<String>> {
    let mut words = args.words.clone();
    if let Some(path) = &args.file {
        words.extend(read_word_file(path)?);
    }
    Ok(words)
}

fn read_word_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

fn load_rules(args: &Args) -> Result<DictionaryRules> {
    let rules = match &args.rules {
        Some(path) => DictionaryRules::from_json_file(path)?,
        None => DictionaryRules::preset(args.dictionary.preset_name())?,
    };
    Ok(match &args.base_url {
        Some(base) => rules.with_base_url(base.clone()),
        None => rules,
    })
}

fn build_client(args: &Args) -> Result<Client> {
    let rules = load_rules(args)?;
    info!(dictionary = %rules.name, base_url = %rules.base_url, "using dictionary");
    let client = Client::builder()
        .rules(rules)
        .timeout(Duration::from_secs(args.timeout))
        .build()?;
    Ok(client)
}

fn render(record: &WordRecord, json_output: bool) -> Result<String> {
    if json_output {
        Ok(serde_json::to_string(record)?)
    } else {
        Ok(record.to_display())
    }
}

async fn search_all(client: &Client, words: &[String], args: &Args) -> Result<Vec<WordRecord>> {
    let mut results = Vec::new();
    for word in words {
        if !args.quiet {
            eprintln!("Searching for '{}'...", word);
        }

        match client.lookup(word).await {
            Ok(Some(record)) => {
                if !args.quiet {
                    println!("{}", render(&record, args.json_output)?);
                }
                results.push(record);
            }
            Ok(None) => {
                eprintln!("No results found for '{}'", word);
            }
            Err(e) => {
                debug!(error = ?e, "lookup failed");
                eprintln!("Error fetching data for '{}': {}", word, e);
                eprintln!("No results found for '{}'", word);
            }
        }
    }
    Ok(results)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let words = match collect_words(&args) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::from(1);
        }
    };

    if words.is_empty() {
        let _ = Args::command().print_help();
        eprintln!(
            "\nError: Please provide words to search either as arguments or via -f/--file"
        );
        return ExitCode::from(1);
    }

    let client = match build_client(&args) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(1);
        }
    };

    let results = match search_all(&client, &words, &args).await {
        Ok(results) => results,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(1);
        }
    };

    if let Some(output) = &args.output {
        if !results.is_empty() {
            if let Err(e) = write_tsv_file(output, &results) {
                eprintln!("Error writing to file: {}", e);
                return ExitCode::from(1);
            }
            eprintln!("\nResults exported to {}", output.display());
            eprintln!("Import this file into Anki with tab-separated fields.");
        }
    }

    if results.is_empty() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
