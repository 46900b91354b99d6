use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use lineweave::{paint, AnnotatedReader, Color, FileReader, ReadOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a config file (default: .lineweave.yaml, then the global config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable ANSI colors in status output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a one-line summary of a file (path, line and word counts)
    Show {
        /// File to summarize
        file: PathBuf,
    },

    /// Print word and character counts for a file
    Stats {
        /// File to count
        file: PathBuf,

        /// Emit the counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the lines of a file containing a keyword (case-insensitive)
    Filter {
        /// File to filter
        file: PathBuf,

        /// Keyword to match; an empty keyword matches every line
        keyword: String,
    },

    /// Combine two files into combined_<left>_<right>.txt
    Combine {
        /// First file; its lines come first
        left: PathBuf,

        /// Second file
        right: PathBuf,
    },

    /// Fold files into a chain of combined files, one per step
    Concat {
        /// Starting file
        file: PathBuf,

        /// Files to fold in; missing files are skipped
        #[arg(required = true)]
        rest: Vec<PathBuf>,
    },

    /// Merge files into a single output file, no intermediates
    Merge {
        /// Files to merge, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output file (default: output_path from config, or output.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = ReadOptions::load_from(cli.config.as_deref())
        .map_err(|e| anyhow!("failed to load config: {e}"))?
        .merge_with_cli(None, cli.no_color.then_some(false), None);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(options.log_level.clone())),
        )
        .init();
    tracing::debug!("options: {:?}", options);

    run(cli.command, &options)
}

fn run(command: Commands, options: &ReadOptions) -> Result<()> {
    match command {
        Commands::Show { file } => {
            let reader = AnnotatedReader::new(&file);
            println!("{}", decorate(reader.render(), Color::Blue, options.color));
            Ok(())
        }
        Commands::Stats { file, json } => {
            let reader = AnnotatedReader::new(&file);
            let stats = reader.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!(
                    "{}: {} words, {} chars",
                    file.display().to_string().blue(),
                    stats.words,
                    stats.chars
                );
            }
            Ok(())
        }
        Commands::Filter { file, keyword } => {
            let reader = AnnotatedReader::new(&file);
            let filtered = reader.filter_lines(&keyword);
            for line in &filtered {
                println!("{line}");
            }
            println!(
                "\nFound {} matching lines in {}",
                filtered.len().to_string().green(),
                file.display()
            );
            Ok(())
        }
        Commands::Combine { left, right } => {
            let left = FileReader::new(&left);
            let right = FileReader::new(&right);
            let combined = left.combine(&right)?;
            println!("{}", combined.render());
            Ok(())
        }
        Commands::Concat { file, rest } => {
            let reader = FileReader::new(&file);
            let status = reader.concatenate_into(&rest)?;
            println!("{}", decorate(status, Color::Green, options.color));
            Ok(())
        }
        Commands::Merge { files, output } => {
            let output = output.unwrap_or_else(|| options.output_path.clone());
            let reader = AnnotatedReader::new(&files[0]);
            let status = reader.concatenate_multiple(&files[1..], &output)?;
            println!("{status}");
            Ok(())
        }
    }
}

fn decorate(text: String, color: Color, enabled: bool) -> String {
    if enabled {
        paint(color, &text)
    } else {
        text
    }
}
