//! mkdeck CLI - builds the Student Assessment Tracker presentation
//!
//! Running without a subcommand writes the deck to
//! `Student_Assessment_Tracker_Presentation.pptx` in the current directory.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use mkdeck::deck;
use mkdeck::render::{JsonFormat, RenderOptions};
use mkdeck::{Compression, WriteOptions};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Build the Student Assessment Tracker presentation
#[derive(Parser)]
#[command(
    name = "mkdeck",
    author = "iyulab",
    version,
    about = "Build the Student Assessment Tracker presentation",
    long_about = "mkdeck - writes the eight-slide Student Assessment & Performance Tracker deck \
                  as a PowerPoint (.pptx) file.\n\n\
                  Without a subcommand the deck is saved as \
                  Student_Assessment_Tracker_Presentation.pptx in the current directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the deck and save it as a .pptx file
    Build {
        /// Output file path
        #[arg(short, long, default_value = deck::OUTPUT_FILENAME)]
        output: PathBuf,

        /// Store package entries without compression
        #[arg(long)]
        stored: bool,
    },

    /// Print the deck outline without writing a file
    Outline {
        /// Outline format
        #[arg(short, long, default_value = "markdown")]
        format: OutlineFormat,

        /// Include YAML frontmatter (markdown only)
        #[arg(long)]
        frontmatter: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the slides of an existing .pptx file
    Info {
        /// Input file path
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Outline format
#[derive(Clone, Copy, ValueEnum)]
enum OutlineFormat {
    /// Markdown headings and lists
    Markdown,
    /// Plain text
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        None => build(Path::new(deck::OUTPUT_FILENAME), false)?,

        Some(Commands::Build { output, stored }) => build(&output, stored)?,

        Some(Commands::Outline {
            format,
            frontmatter,
            output,
        }) => {
            let presentation = deck::build_student_tracker()?;
            let options = RenderOptions::new().with_frontmatter(frontmatter);

            let content = match format {
                OutlineFormat::Markdown => mkdeck::render::to_markdown(&presentation, &options)?,
                OutlineFormat::Text => mkdeck::render::to_text(&presentation, &options)?,
                OutlineFormat::Json => mkdeck::render::to_json(&presentation, JsonFormat::Pretty)?,
            };

            write_output(output.as_ref(), &content)?;

            if let Some(path) = output {
                println!("{} Outline written to {}", "✓".green().bold(), path.display());
            }
        }

        Some(Commands::Info { input }) => {
            let pb = create_spinner("Reading presentation...");
            let presentation = mkdeck::parse_file(&input)?;
            pb.finish_and_clear();

            println!("{}", "Presentation Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            if let Some(ref title) = presentation.metadata.title {
                println!("{}: {}", "Title".bold(), title);
            }
            if let Some(ref author) = presentation.metadata.author {
                println!("{}: {}", "Author".bold(), author);
            }
            if let Some(ref application) = presentation.metadata.application {
                println!("{}: {}", "Application".bold(), application);
            }
            println!("{}: {}", "Slides".bold(), presentation.slide_count());

            println!("\n{}", "Slides".cyan().bold());
            println!("{}", "─".repeat(40));
            for (i, slide) in presentation.slides().iter().enumerate() {
                println!(
                    "{:>3}. {} {}",
                    i + 1,
                    slide.title_text().unwrap_or_default(),
                    format!("({})", slide.layout).dimmed()
                );
            }
        }

        Some(Commands::Version) => print_version(),
    }

    Ok(())
}

fn build(output: &Path, stored: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_spinner("Building presentation...");

    let mut options = WriteOptions::new();
    if stored {
        options = options.with_compression(Compression::Stored);
    }
    let result = mkdeck::generate(output, &options);

    pb.finish_and_clear();
    result?;

    println!(
        "{} Presentation saved successfully as '{}'",
        "✓".green().bold(),
        output.display()
    );
    Ok(())
}

fn print_version() {
    println!("{} {}", "mkdeck".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Builds the Student Assessment & Performance Tracker deck");
    println!();
    println!("Output format: PPTX (Office Open XML)");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_builds() {
        let cli = Cli::try_parse_from(["mkdeck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_build_defaults() {
        let cli = Cli::try_parse_from(["mkdeck", "build"]).unwrap();
        match cli.command {
            Some(Commands::Build { output, stored }) => {
                assert_eq!(output, PathBuf::from(deck::OUTPUT_FILENAME));
                assert!(!stored);
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_run_without_subcommand_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let result = run(Cli { command: None });
        std::env::set_current_dir(previous).unwrap();
        result.unwrap();

        let path = dir.path().join(deck::OUTPUT_FILENAME);
        let presentation = mkdeck::parse_file(&path).unwrap();
        assert_eq!(presentation.slide_count(), 8);
    }

    #[test]
    fn test_run_build_and_info() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("tracker.pptx");

        run(Cli {
            command: Some(Commands::Build {
                output: output.clone(),
                stored: true,
            }),
        })
        .unwrap();
        assert!(output.exists());

        run(Cli {
            command: Some(Commands::Info { input: output }),
        })
        .unwrap();
    }

    #[test]
    fn test_outline_format() {
        let cli = Cli::try_parse_from(["mkdeck", "outline", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Outline {
                format: OutlineFormat::Json,
                ..
            })
        ));
    }
}
