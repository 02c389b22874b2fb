use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use mdconv_core::{
    CONVERSION_ERROR_PLACEHOLDER, ConversionOptions, Direction, FetchConfig, HeadingStyle, calculate_stats,
    fetch_file, fetch_stdin, fetch_url, html_to_text, SAMPLE_HTML, SAMPLE_MARKDOWN,
};

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which tool runs: one of the two conversion directions, or plain text
/// extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    HtmlToMarkdown,
    MarkdownToHtml,
    HtmlToText,
}

impl Mode {
    fn extension(&self) -> &'static str {
        match self {
            Mode::HtmlToMarkdown => Direction::HtmlToMarkdown.extension(),
            Mode::MarkdownToHtml => Direction::MarkdownToHtml.extension(),
            Mode::HtmlToText => "txt",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html-to-md" | "html-to-markdown" | "md" => Ok(Self::HtmlToMarkdown),
            "md-to-html" | "markdown-to-html" | "html" => Ok(Self::MarkdownToHtml),
            "html-to-text" | "text" | "txt" => Ok(Self::HtmlToText),
            _ => Err(format!(
                "Invalid direction: {}. Valid options: html-to-md, md-to-html, html-to-text",
                s
            )),
        }
    }
}

/// Heading notation argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeadingArg(HeadingStyle);

impl FromStr for HeadingArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "atx" => Ok(Self(HeadingStyle::Atx)),
            "setext" => Ok(Self(HeadingStyle::Setext)),
            _ => Err(format!("Invalid heading style: {}. Valid options: atx, setext", s)),
        }
    }
}

/// Convert between HTML and Markdown with GitHub Flavored Markdown support
#[derive(Parser, Debug)]
#[command(name = "mdconv")]
#[command(author = "mdconv contributors")]
#[command(version = VERSION)]
#[command(about = "Convert between HTML and Markdown", long_about = None)]
struct Args {
    /// URL to fetch, local file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "sample")]
    input: Option<String>,

    /// Conversion direction (html-to-md, md-to-html, html-to-text)
    #[arg(short, long, default_value = "html-to-md", value_name = "DIRECTION")]
    direction: Mode,

    /// Output file (default: stdout; use extension .md, .html, or .txt)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Heading style for generated Markdown (atx, setext)
    #[arg(long, default_value = "atx", value_name = "STYLE")]
    heading_style: HeadingArg,

    /// Disable GitHub Flavored Markdown (tables, strikethrough, task lists)
    #[arg(long)]
    no_gfm: bool,

    /// Disable pipe tables
    #[arg(long)]
    no_tables: bool,

    /// Disable task list items
    #[arg(long)]
    no_task_lists: bool,

    /// Disable strikethrough
    #[arg(long)]
    no_strikethrough: bool,

    /// Use the bundled sample document as input
    #[arg(long)]
    sample: bool,

    /// Print character/word/line counts for input and output
    #[arg(long)]
    stats: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable verbose progress output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            heading_style: self.heading_style.0,
            gfm_support: !self.no_gfm,
            tables: !self.no_tables,
            task_lists: !self.no_task_lists,
            strikethrough: !self.no_strikethrough,
        }
    }

    fn sample_input(&self) -> &'static str {
        match self.direction {
            Mode::MarkdownToHtml => SAMPLE_MARKDOWN,
            Mode::HtmlToMarkdown | Mode::HtmlToText => SAMPLE_HTML,
        }
    }
}

/// Reads the input from the sample, stdin, a URL, or a file.
async fn read_input(args: &Args) -> anyhow::Result<String> {
    if args.sample {
        if args.verbose {
            echo::print_step(1, 3, "Loading bundled sample");
        }
        return Ok(args.sample_input().to_string());
    }

    let Some(input) = args.input.as_deref() else {
        anyhow::bail!("INPUT is required unless --sample is set");
    };

    if input == "-" {
        if args.verbose {
            echo::print_step(1, 3, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")
    } else if input.starts_with("http://") || input.starts_with("https://") {
        if args.verbose {
            echo::print_step(1, 3, &format!("Fetching from {}", input));
        }
        let config = FetchConfig {
            timeout: args.timeout,
            user_agent: args.user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
        };
        fetch_url(input, &config).await.context("Failed to fetch URL")
    } else {
        if args.verbose {
            echo::print_step(1, 3, &format!("Reading from file {}", input));
        }
        fetch_file(input).with_context(|| format!("Failed to read file: {}", input))
    }
}

/// Runs the selected tool, soft-failing on conversion errors.
///
/// A serializer failure is reported to stderr and replaced by the literal
/// placeholder string; it never aborts the run.
fn run_conversion(args: &Args, input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let options = args.conversion_options();
    let result = match args.direction {
        Mode::HtmlToMarkdown => Direction::HtmlToMarkdown.convert(input, &options),
        Mode::MarkdownToHtml => Direction::MarkdownToHtml.convert(input, &options),
        Mode::HtmlToText => Ok(html_to_text(input)),
    };

    match result {
        Ok(output) => output,
        Err(e) => {
            echo::print_error(&format!("Conversion error: {}", e));
            CONVERSION_ERROR_PLACEHOLDER.to_string()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
    }

    let input = read_input(&args).await?;

    if args.verbose {
        eprintln!("  Size: {}", echo::format_size(input.len()));
        echo::print_step(2, 3, "Converting");
    }

    let output = run_conversion(&args, &input);

    if args.stats || args.verbose {
        echo::print_stats("Input", &calculate_stats(&input));
        echo::print_stats("Output", &calculate_stats(&output));
    }

    if args.verbose {
        echo::print_step(3, 3, "Writing output");
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {} ({})", path.display(), args.direction.extension()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}
