//! unfold CLI - collapsible-section page extraction tool

mod batch;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unfold::{
    output_filename, to_json, Document, ExtractionStats, JsonFormat, LogObserver, OutputFormat,
    Unfold,
};

use batch::{BatchEntry, NO_CONTENT};

#[derive(Parser)]
#[command(name = "unfold")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract collapsible-section pages to text, Markdown, and HTML", long_about = None)]
struct Cli {
    /// Show extraction decisions (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Origin prepended to path-absolute image URLs
    #[arg(long, global = true, env = "UNFOLD_SITE_ORIGIN")]
    site_origin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one saved page
    Convert {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert every page listed in a file
    Batch {
        /// File with one input path per line
        #[arg(value_name = "LIST")]
        list: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatArg,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "unfold_output")]
        output: PathBuf,

        /// Random delay range between inputs, in seconds
        #[arg(
            long,
            num_args = 2,
            value_names = ["MIN", "MAX"],
            default_values_t = [0.0, 0.0],
            value_parser = batch::parse_delay
        )]
        delay: Vec<f64>,
    },

    /// Convert a saved page to JSON
    Json {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Plain text with section banners
    #[value(alias = "plain", alias = "txt")]
    Text,
    /// Markdown
    #[value(alias = "md")]
    Markdown,
    /// Standalone HTML page
    #[value(alias = "htm")]
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut app = Unfold::new();
    if let Some(origin) = cli.site_origin {
        app = app.with_site_origin(origin);
    }

    let result = match cli.command {
        Commands::Convert {
            input,
            format,
            output,
        } => cmd_convert(&app, &input, format.into(), output.as_deref()),
        Commands::Batch {
            list,
            format,
            output,
            delay,
        } => cmd_batch(&app, &list, format.into(), &output, &delay),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&app, &input, output.as_deref(), compact),
        Commands::Info { input, json } => cmd_info(&app, &input, json),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Extract a document from a file, logging decisions at debug level.
fn load(app: &Unfold, input: &Path) -> Result<Option<Document>, Box<dyn std::error::Error>> {
    let markup = fs::read_to_string(input)
        .map_err(|e| format!("cannot read {}: {}", input.display(), e))?;
    Ok(app
        .parse_observed(&markup, &mut LogObserver)
        .into_document())
}

/// Render one input to a batch entry and its title.
///
/// Read failures become a failure-marked result instead of an error.
fn render_input(app: &Unfold, input: &str, format: OutputFormat) -> (BatchEntry, Option<String>) {
    match load(app, Path::new(input)) {
        Ok(Some(doc)) => (
            BatchEntry::new(input, unfold::render(&doc, format))
                .with_stats(ExtractionStats::from_document(&doc)),
            doc.title().map(str::to_string),
        ),
        Ok(None) => (BatchEntry::new(input, NO_CONTENT), None),
        Err(e) => (
            BatchEntry::new(input, format!("{} reading {input}: {e}", batch::FAILURE_MARKER)),
            None,
        ),
    }
}

fn cmd_convert(
    app: &Unfold,
    input: &Path,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = match load(app, input)? {
        Some(doc) => unfold::render(&doc, format),
        None => NO_CONTENT.to_string(),
    };

    if let Some(path) = output {
        fs::write(path, &content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn cmd_batch(
    app: &Unfold,
    list: &Path,
    format: OutputFormat,
    output_dir: &Path,
    delay: &[f64],
) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = batch::read_input_list(list)?;
    if inputs.is_empty() {
        return Err(format!("no inputs listed in {}", list.display()).into());
    }

    fs::create_dir_all(output_dir)?;
    let (min_delay, max_delay) = match delay {
        [min, max] => (*min, *max),
        _ => (0.0, 0.0),
    };

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut entries = Vec::with_capacity(inputs.len());
    for (i, input) in inputs.iter().enumerate() {
        if i > 0 {
            let pause = batch::random_delay(min_delay, max_delay);
            if !pause.is_zero() {
                pb.set_message(format!("waiting {:.1}s", pause.as_secs_f64()));
                std::thread::sleep(pause);
            }
        }
        pb.set_message(input.clone());

        let (entry, title) = render_input(app, input, format);
        if entry.failed() {
            pb.println(format!("  {} {}", "✗".red(), entry.result));
        } else {
            let filename = batch::batch_filename(i + 1, title.as_deref(), input, format);
            fs::write(output_dir.join(&filename), &entry.result)?;
            pb.println(format!("  {} {}", "✓".green(), filename));
        }

        entries.push(entry);
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let summary_path = output_dir.join(batch::summary_filename(format));
    fs::write(&summary_path, batch::summary(&entries, format, &generated))?;

    let failed = entries.iter().filter(|e| e.failed()).count();
    println!(
        "\n{} Success: {}, Failed: {}",
        "Completed!".green().bold(),
        entries.len() - failed,
        failed
    );
    println!("{} {}", "Summary saved to".green(), summary_path.display());

    Ok(())
}

fn cmd_json(
    app: &Unfold,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(app, input)?.ok_or(NO_CONTENT)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(app: &Unfold, input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(app, input)?.ok_or(NO_CONTENT)?;
    let stats = ExtractionStats::from_document(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), doc.title().unwrap_or("(none)"));
    for format in OutputFormat::ALL {
        println!(
            "{}: {}",
            format!("{} file", format.name()).bold(),
            output_filename(doc.title(), &input.to_string_lossy(), format)
        );
    }

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (i, section) in doc.sections().iter().enumerate() {
        println!(
            "  {:>2}. {} {}",
            i + 1,
            section.title(),
            format!("({} blocks)", section.blocks().len()).dimmed()
        );
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Callouts".bold(), stats.callout_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unfold".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Collapsible-section page extraction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unfold".dimmed());
    println!("License: MIT");
}
