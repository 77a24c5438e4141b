//! `sempress` - compress sentences into structured semantic records, and
//! optionally expand them back into prose through the Gemini API.

use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sempress_core::{Lexicon, SemanticAttributes, SemanticCompressor};
use sempress_runtime::{GeminiReconstructor, Reconstructor};
use tracing_subscriber::EnvFilter;

/// Sample input used by `roundtrip` when no sentence is given.
const DEMO_SENTENCE: &str = "Hey man, let's meet for lunch!";

#[derive(Parser)]
#[command(name = "sempress", version, about = "Deterministic semantic sentence compression")]
struct Cli {
    /// Load a custom lexicon from a YAML file instead of the built-in one.
    #[arg(long, global = true, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress sentences into JSON records (reads stdin when no sentence
    /// is given).
    Compress {
        /// Sentences to compress, one record per sentence.
        sentences: Vec<String>,

        /// Pretty-print the JSON records.
        #[arg(long)]
        pretty: bool,
    },

    /// Compress sentences, then reconstruct them through the Gemini API.
    /// Requires the GEMINI_API_KEY environment variable.
    Roundtrip {
        /// Sentences to round-trip; defaults to a demo sentence.
        sentences: Vec<String>,
    },

    /// Summarize the lexicon: category names and marker counts.
    Lexicon,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let lexicon = match &cli.lexicon {
        Some(path) => Lexicon::from_yaml_file(path)
            .with_context(|| format!("loading lexicon from {}", path.display()))?,
        None => Lexicon::default(),
    };
    tracing::debug!(
        custom = cli.lexicon.is_some(),
        tone_categories = lexicon.tone_markers.len(),
        "lexicon loaded"
    );
    let compressor = SemanticCompressor::with_lexicon(lexicon);

    match cli.command {
        Command::Compress { sentences, pretty } => {
            for sentence in gather_inputs(sentences)? {
                let record = compressor.compress(&sentence);
                println!("{}", render(&record, pretty)?);
            }
        }
        Command::Roundtrip { sentences } => {
            let reconstructor =
                GeminiReconstructor::from_env().context("Gemini reconstruction unavailable")?;

            let sentences = if sentences.is_empty() {
                vec![DEMO_SENTENCE.to_string()]
            } else {
                sentences
            };

            for (i, sentence) in sentences.iter().enumerate() {
                println!("Original {}: {}", i + 1, sentence);
                let record = compressor.compress(sentence);
                println!("Compressed: {}", render(&record, false)?);
                let reconstructed = reconstructor
                    .reconstruct(&record)
                    .await
                    .context("reconstruction failed")?;
                println!("Reconstructed: {}", reconstructed);
                println!("{}", "-".repeat(50));
            }
        }
        Command::Lexicon => {
            print_lexicon_summary(compressor.lexicon());
        }
    }

    Ok(())
}

/// Use the positional sentences, or fall back to reading lines from stdin.
fn gather_inputs(sentences: Vec<String>) -> Result<Vec<String>> {
    if !sentences.is_empty() {
        return Ok(sentences);
    }
    if std::io::stdin().is_terminal() {
        anyhow::bail!("no sentences given and stdin is a terminal");
    }
    let mut lines = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn render(record: &SemanticAttributes, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    Ok(json)
}

fn print_lexicon_summary(lexicon: &Lexicon) {
    let groups = [
        ("formal markers", &lexicon.formal_markers),
        ("informal markers", &lexicon.informal_markers),
        ("tone markers", &lexicon.tone_markers),
        ("type markers", &lexicon.type_markers),
        ("verb classes", &lexicon.verb_classes),
        ("noun categories", &lexicon.noun_categories),
    ];
    for (label, categories) in groups {
        println!("{}:", label);
        for category in categories.iter() {
            println!("  {:<16} {} markers", category.name, category.markers.len());
        }
    }
    println!("pronouns:          {} words", lexicon.pronouns.len());
    println!("notable objects:   {} words", lexicon.notable_objects.len());
    println!("function words:    {} words", lexicon.function_words.len());
}
