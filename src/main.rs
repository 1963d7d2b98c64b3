use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tulk::{
    assemble_labeled, assemble_unlabeled, count_words, parse_participants, read_transcript_file,
    render, speaker_word_totals, ConsoleOracle, MachineTranscript,
};

#[derive(Parser)]
#[command(name = "tulk")]
#[command(author, version, about = "Dialogue transcript tokenizer, assembler and renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a labeled transcript and render it normalized
    Render {
        /// Input transcript file (plain text with speaker labels)
        #[arg(short, long)]
        input: PathBuf,

        /// Write rendered text to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write a machine-readable JSON view
        #[arg(long)]
        json: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Label an unlabeled transcript interactively, sentence by sentence
    Label {
        /// Input transcript file (plain text without speaker labels)
        #[arg(short, long)]
        input: PathBuf,

        /// Comma-separated participant names
        #[arg(short, long)]
        participants: String,

        /// Write rendered text to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write a machine-readable JSON view
        #[arg(long)]
        json: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Count word frequencies for one speaker
    Count {
        /// Input transcript file (plain text with speaker labels)
        #[arg(short, long)]
        input: PathBuf,

        /// Speaker to count words for (case-sensitive)
        #[arg(short, long)]
        speaker: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Summarize a labeled transcript without rendering it
    Stats {
        /// Input transcript file (plain text with speaker labels)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            json,
            verbose,
        } => {
            setup_logging(verbose);
            render_transcript(input, output, json)
        }
        Commands::Label {
            input,
            participants,
            output,
            json,
            verbose,
        } => {
            setup_logging(verbose);
            label_transcript(input, &participants, output, json)
        }
        Commands::Count {
            input,
            speaker,
            verbose,
        } => {
            setup_logging(verbose);
            count_transcript(input, &speaker)
        }
        Commands::Stats { input, verbose } => {
            setup_logging(verbose);
            stats_transcript(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn render_transcript(
    input: PathBuf,
    output: Option<PathBuf>,
    json: Option<PathBuf>,
) -> Result<()> {
    let text = read_transcript_file(&input)?;
    let transcript = assemble_labeled(&text).context("Failed to assemble transcript")?;

    info!(
        "Assembled {} elements, {} lines, {} speakers",
        transcript.elements.len(),
        transcript.lines().count(),
        transcript.speakers().len()
    );

    let rendered = render(&transcript);
    match output {
        Some(path) => {
            tulk::io::write_text(&path, &rendered)?;
            info!("Rendered transcript written to {:?}", path);
        }
        None => print!("{}", rendered),
    }

    if let Some(path) = json {
        MachineTranscript::from_transcript(&transcript).write_json(&path)?;
        info!("Machine transcript written to {:?}", path);
    }

    Ok(())
}

fn label_transcript(
    input: PathBuf,
    participants: &str,
    output: Option<PathBuf>,
    json: Option<PathBuf>,
) -> Result<()> {
    let text = read_transcript_file(&input)?;
    let participants = parse_participants(participants);
    anyhow::ensure!(!participants.is_empty(), "No participants given");

    let mut oracle = ConsoleOracle;
    let transcript = assemble_unlabeled(&text, &participants, &mut oracle)
        .context("Failed to assemble transcript")?;

    info!(
        "Labeled {} lines across {} speakers",
        transcript.lines().count(),
        transcript.speakers().len()
    );

    let rendered = render(&transcript);
    match output {
        Some(path) => {
            tulk::io::write_text(&path, &rendered)?;
            info!("Rendered transcript written to {:?}", path);
        }
        None => print!("{}", rendered),
    }

    if let Some(path) = json {
        MachineTranscript::from_transcript(&transcript).write_json(&path)?;
        info!("Machine transcript written to {:?}", path);
    }

    Ok(())
}

fn count_transcript(input: PathBuf, speaker: &str) -> Result<()> {
    let text = read_transcript_file(&input)?;
    let transcript = assemble_labeled(&text).context("Failed to assemble transcript")?;

    let frequencies = count_words(&transcript, speaker);
    if frequencies.is_empty() {
        println!("No words spoken by {}", speaker);
        return Ok(());
    }

    let mut sorted: Vec<(&String, &usize)> = frequencies.iter().collect();
    sorted.sort();

    println!("Word frequencies for {}", speaker);
    for (word, count) in sorted {
        println!("{:>6}  {}", count, word);
    }

    Ok(())
}

fn stats_transcript(input: PathBuf) -> Result<()> {
    let text = read_transcript_file(&input)?;
    let transcript = assemble_labeled(&text).context("Failed to assemble transcript")?;

    println!("Transcript Summary");
    println!("==================");
    println!("Total elements: {}", transcript.elements.len());
    println!("Total lines: {}", transcript.lines().count());
    println!("Speakers: {:?}", transcript.speakers());
    println!();

    println!("Speaker Statistics");
    println!("------------------");
    for (name, words) in speaker_word_totals(&transcript) {
        let turns = transcript.lines().filter(|l| l.speaker == name).count();
        println!("{}: {} words, {} turns", name, words, turns);
    }

    Ok(())
}
