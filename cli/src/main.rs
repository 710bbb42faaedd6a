//! noteblocks CLI - summary text to content block converter

use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use noteblocks::summary::summarize_with_fallback;
use noteblocks::{
    render, ChunkMode, ConversionStats, Document, FallbackSummarizer, JsonFormat, PageRequest,
    ParseOptions, SummaryParser, VideoInfo,
};

#[derive(Parser)]
#[command(name = "noteblocks")]
#[command(version)]
#[command(about = "Convert Markdown summary text into typed content blocks", long_about = None)]
struct Cli {
    /// Input summary file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert summary text to block JSON
    Convert {
        /// Input summary file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output Notion block objects instead of the block model
        #[arg(long)]
        notion: bool,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Build a Notion page-create request body
    Page {
        /// Input summary file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Target database ID
        #[arg(long, env = "NOTION_DATABASE_ID")]
        database_id: String,

        /// Page title
        #[arg(long)]
        title: String,

        /// Video URL property
        #[arg(long)]
        video_url: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Re-render summary text as normalized Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input summary file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Convert summary text to plain text
    Text {
        /// Input summary file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Show conversion statistics
    Info {
        /// Input summary file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Convert many summary files to block JSON
    Batch {
        /// Input summary files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Generate a basic summary from a transcript or description
    Summarize {
        /// Video title
        #[arg(long)]
        title: Option<String>,

        /// Transcript file
        #[arg(long, value_name = "FILE")]
        transcript: Option<PathBuf>,

        /// Description file
        #[arg(long, value_name = "FILE")]
        description: Option<PathBuf>,

        /// Output the summary as block JSON
        #[arg(long)]
        blocks: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone)]
struct LimitArgs {
    /// Maximum characters in one paragraph block
    #[arg(
        long,
        env = "NOTEBLOCKS_MAX_PARAGRAPH_CHARS",
        default_value_t = noteblocks::parser::DEFAULT_MAX_PARAGRAPH_CHARS
    )]
    max_paragraph_chars: usize,

    /// Characters per chunk of an over-length paragraph
    #[arg(
        long,
        env = "NOTEBLOCKS_CHUNK_CHARS",
        default_value_t = noteblocks::parser::DEFAULT_CHUNK_CHARS
    )]
    chunk_chars: usize,

    /// How over-length paragraphs are split
    #[arg(long, value_enum, default_value = "legacy")]
    chunk_mode: ChunkModeArg,
}

impl LimitArgs {
    fn parser(&self) -> noteblocks::Result<SummaryParser> {
        let options = ParseOptions::new()
            .with_max_paragraph_chars(self.max_paragraph_chars)
            .with_chunk_chars(self.chunk_chars)
            .with_chunk_mode(self.chunk_mode.into());
        SummaryParser::with_options(options)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ChunkModeArg {
    /// Raw fixed-size slices, formatting dropped
    Legacy,
    /// Split between runs, formatting kept
    RunAware,
}

impl From<ChunkModeArg> for ChunkMode {
    fn from(mode: ChunkModeArg) -> Self {
        match mode {
            ChunkModeArg::Legacy => ChunkMode::Legacy,
            ChunkModeArg::RunAware => ChunkMode::RunAware,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            compact,
            notion,
            limits,
        }) => cmd_convert(&input, output.as_deref(), compact, notion, &limits),
        Some(Commands::Page {
            input,
            database_id,
            title,
            video_url,
            output,
            compact,
            limits,
        }) => cmd_page(
            &input,
            &database_id,
            &title,
            video_url.as_deref(),
            output.as_deref(),
            compact,
            &limits,
        ),
        Some(Commands::Markdown {
            input,
            output,
            limits,
        }) => cmd_markdown(&input, output.as_deref(), &limits),
        Some(Commands::Text {
            input,
            output,
            limits,
        }) => cmd_text(&input, output.as_deref(), &limits),
        Some(Commands::Info { input, limits }) => cmd_info(&input, &limits),
        Some(Commands::Batch {
            inputs,
            output,
            compact,
            limits,
        }) => cmd_batch(&inputs, output.as_deref(), compact, &limits),
        Some(Commands::Summarize {
            title,
            transcript,
            description,
            blocks,
            output,
        }) => cmd_summarize(
            title,
            transcript.as_deref(),
            description.as_deref(),
            blocks,
            output.as_deref(),
        ),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                let limits = LimitArgs {
                    max_paragraph_chars: noteblocks::parser::DEFAULT_MAX_PARAGRAPH_CHARS,
                    chunk_chars: noteblocks::parser::DEFAULT_CHUNK_CHARS,
                    chunk_mode: ChunkModeArg::Legacy,
                };
                cmd_convert(&input, None, false, false, &limits)
            } else {
                println!("{}", "Usage: noteblocks <FILE>".yellow());
                println!("       noteblocks --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read a UTF-8 input file, or stdin for `-`.
fn read_input(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn parse_input(input: &Path, limits: &LimitArgs) -> Result<Document, Box<dyn std::error::Error>> {
    let parser = limits.parser()?;
    let text = read_input(input)?;
    Ok(parser.parse(&text))
}

fn write_output(content: &str, output: Option<&Path>) -> io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    notion: bool,
    limits: &LimitArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_input(input, limits)?;
    let format = json_format(compact);

    let json = if notion {
        render::to_notion_json(&doc, format)?
    } else {
        render::to_json(&doc, format)?
    };

    write_output(&json, output)?;
    Ok(())
}

fn cmd_page(
    input: &Path,
    database_id: &str,
    title: &str,
    video_url: Option<&str>,
    output: Option<&Path>,
    compact: bool,
    limits: &LimitArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_input(input, limits)?;

    let mut request = PageRequest::new(database_id, title).with_document(&doc);
    if let Some(url) = video_url {
        request = request.with_video_url(url);
    }

    let json = request.to_json(json_format(compact))?;
    write_output(&json, output)?;
    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    limits: &LimitArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_input(input, limits)?;
    let markdown = render::to_markdown(&doc);
    write_output(&markdown, output)?;
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    limits: &LimitArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_input(input, limits)?;
    let text = render::to_text(&doc);
    write_output(&text, output)?;
    Ok(())
}

fn cmd_info(input: &Path, limits: &LimitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let parser = limits.parser()?;
    let text = read_input(input)?;
    let (_, stats) = parser.parse_with_stats(&text);

    println!("{}", "Summary Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Input characters".bold(), text.chars().count());
    println!(
        "{}: {} / {}",
        "Limits".bold(),
        parser.options().max_paragraph_chars,
        parser.options().chunk_chars
    );

    println!();
    println!("{}", "Block Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    print_stats(&stats);

    Ok(())
}

fn print_stats(stats: &ConversionStats) {
    println!("{}: {}", "Blocks".bold(), stats.block_count());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!(
        "{}: {}",
        "Chunked paragraphs".bold(),
        stats.chunked_paragraph_count
    );
    println!("{}: {}", "Bold runs".bold(), stats.bold_run_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
}

fn cmd_batch(
    inputs: &[PathBuf],
    output: Option<&Path>,
    compact: bool,
    limits: &LimitArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = limits.parser()?;
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading summaries...");
    let mut texts = Vec::with_capacity(inputs.len());
    for input in inputs {
        texts.push(fs::read_to_string(input)?);
        pb.inc(1);
    }

    pb.set_message("Converting...");
    let docs = parser.parse_many(&texts);

    let format = json_format(compact);
    let written = output_names(inputs);
    for (filename, doc) in written.iter().zip(&docs) {
        pb.set_message(format!("Writing {}", filename));
        fs::write(output_dir.join(filename), render::to_json(doc, format)?)?;
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, filename) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), filename);
    }

    Ok(())
}

/// Name each input's JSON output after its stem. Repeated stems get a
/// numeric suffix (`notes.json`, `notes-2.json`) so no output is overwritten.
fn output_names(inputs: &[PathBuf]) -> Vec<String> {
    let mut used = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            let mut filename = format!("{}.json", stem);
            let mut n = 2;
            while !used.insert(filename.clone()) {
                filename = format!("{}-{}.json", stem, n);
                n += 1;
            }
            filename
        })
        .collect()
}

fn cmd_summarize(
    title: Option<String>,
    transcript: Option<&Path>,
    description: Option<&Path>,
    blocks: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut info = match title {
        Some(title) => VideoInfo::new(title),
        None => VideoInfo::default(),
    };
    if let Some(path) = transcript {
        info = info.with_transcript(read_input(path)?);
    }
    if let Some(path) = description {
        info = info.with_description(read_input(path)?);
    }

    let summary = summarize_with_fallback(None, &FallbackSummarizer::new(), &info);
    log::debug!("Summary origin: {:?}", summary.origin);

    if blocks {
        let doc = SummaryParser::new().parse(&summary.text);
        write_output(&render::to_json(&doc, JsonFormat::Pretty)?, output)?;
    } else {
        write_output(&summary.text, output)?;
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "noteblocks".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Summary text to content block converter");
    println!();
    println!("License: MIT");
}
