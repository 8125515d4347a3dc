//*** START FILE: src/main.rs ***//
use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use vocab_gapper::config::load_config_from_file;
use vocab_gapper::entries_io::{load_word_entries, word_bank};
use vocab_gapper::{
    substitutor_from_config, Exercise, ExerciseGatherer, ExerciseKind, ExerciseSheet, Marker, VocabError,
};

#[derive(Parser, Debug)]
#[command(name = "vocab-gapper", version, about = "Gap-fill exercises from vocabulary material")]
struct Cli {
    /// TOML config; defaults are used when the file does not exist.
    #[arg(long, global = true, default_value = "vocab_gapper.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Blank a term in one sentence and print the result as JSON.
    Substitute {
        #[arg(long)]
        term: String,
        /// Literal marker text. Overrides --style.
        #[arg(long)]
        marker: Option<String>,
        /// fill-in, fill-in-blank, rule or underscore.
        #[arg(long, default_value = "underscore")]
        style: String,
        sentence: String,
    },
    /// Render a model response into exercise and solution LaTeX.
    Exercise {
        #[arg(long)]
        kind: String,
        #[arg(long, required_unless_present = "entries")]
        response: Option<PathBuf>,
        /// Word-entry file; translation sheets can be built from it without a response.
        #[arg(long)]
        entries: Option<PathBuf>,
        /// Write exercise.tex and solution.tex here instead of printing.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Render several responses as numbered parts of one worksheet.
    Gather {
        /// `kind=response.json`, once per part, in order.
        #[arg(long = "part", value_parser = parse_part, required = true)]
        parts: Vec<(ExerciseKind, PathBuf)>,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the word bank for a word-entry file.
    Bank {
        #[arg(long)]
        entries: PathBuf,
    },
}

fn parse_part(value: &str) -> Result<(ExerciseKind, PathBuf), String> {
    let (kind, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected kind=path, got '{}'", value))?;
    let kind = kind.parse::<ExerciseKind>().map_err(|e| e.to_string())?;
    Ok((kind, PathBuf::from(path)))
}

fn load_response(kind: ExerciseKind, response: &Path) -> Result<Exercise, VocabError> {
    let text = fs::read_to_string(response).map_err(|e| VocabError::io(response, e))?;
    Exercise::from_response(kind, &text)
}

fn write_sheet(sheet: &ExerciseSheet, out_dir: Option<PathBuf>) -> Result<(), VocabError> {
    match out_dir {
        Some(dir) => {
            fs::create_dir_all(&dir).map_err(|e| VocabError::io(&dir, e))?;
            let exercise_path = dir.join("exercise.tex");
            let solution_path = dir.join("solution.tex");
            fs::write(&exercise_path, &sheet.exercise).map_err(|e| VocabError::io(&exercise_path, e))?;
            fs::write(&solution_path, &sheet.solution).map_err(|e| VocabError::io(&solution_path, e))?;
            println!(
                "Wrote {} question(s) to {} and {}",
                sheet.questions,
                exercise_path.display(),
                solution_path.display()
            );
        }
        None => {
            println!("{}", sheet.exercise);
            println!("{}", sheet.solution);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config_from_file(&cli.config)?;

    match cli.command {
        Command::Substitute { term, marker, style, sentence } => {
            let substitutor = substitutor_from_config(&config)?;
            let marker = match marker {
                Some(literal) => literal,
                None => Marker::from_style(&style)
                    .ok_or_else(|| VocabError::Config(format!("Unknown marker style '{}'", style)))?
                    .render(&term, &config.markers),
            };
            let result = substitutor.substitute(&sentence, &term, &marker);
            if !result.is_match() {
                tracing::info!("'{}' not found; nothing to turn into an exercise", term);
            }
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Exercise { kind, response, entries, out_dir } => {
            let kind: ExerciseKind = kind.parse()?;
            let exercise = match (response, entries) {
                (Some(response), _) => load_response(kind, &response)?,
                (None, Some(entries)) if kind == ExerciseKind::Translation => {
                    Exercise::translation_from_entries(&load_word_entries(&entries)?)
                }
                (None, _) => {
                    return Err(VocabError::Config(format!("{} needs --response", kind)).into());
                }
            };
            let substitutor = substitutor_from_config(&config)?;
            let sheet = exercise.render(&substitutor, &config.markers);
            write_sheet(&sheet, out_dir)?;
        }
        Command::Gather { parts, out_dir } => {
            let substitutor = substitutor_from_config(&config)?;
            let mut gatherer = ExerciseGatherer::new();
            for (kind, response) in parts {
                let sheet = load_response(kind, &response)?.render(&substitutor, &config.markers);
                gatherer.push(kind, sheet);
            }
            write_sheet(&gatherer.assemble(), out_dir)?;
        }
        Command::Bank { entries } => {
            let entries = load_word_entries(&entries)?;
            println!("{}", word_bank(&entries));
        }
    }

    Ok(())
}
//*** END FILE: src/main.rs ***//
