//! pdfmd CLI - convert a PDF's text to Markdown

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfmd::{
    CleanupOptions, ConversionReport, ConvertOptions, Converter, ExtractOptions, HeadingRules,
    Locale, PageSelection, TitleMode,
};

#[derive(Parser)]
#[command(name = "pdfmd")]
#[command(version)]
#[command(about = "Convert a PDF's extracted text to structured Markdown", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output Markdown file (defaults to the input path with a .md extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Language of footer markers and section keywords
    #[arg(long, value_enum, env = "PDFMD_LOCALE", default_value = "zh")]
    locale: LocaleArg,

    /// Keep line breaks when cleaning so paragraphs and headings survive
    #[arg(long)]
    keep_lines: bool,

    /// Title heading (defaults to the input file name)
    #[arg(long, conflicts_with = "no_title")]
    title: Option<String>,

    /// Do not emit a title heading
    #[arg(long)]
    no_title: bool,

    /// Lines this long or longer are never promoted to headings
    #[arg(long, value_name = "CHARS", default_value_t = pdfmd::markdown::DEFAULT_MAX_HEADING_LEN)]
    max_heading_len: usize,

    /// Extra footer regex to strip (repeatable)
    #[arg(long, value_name = "REGEX")]
    footer_pattern: Vec<String>,

    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Skip pages whose text cannot be extracted instead of failing
    #[arg(long)]
    lenient: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Suppress the summary and progress output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LocaleArg {
    /// Chinese (第 X 页 共 Y 页, 摘要, 引言, ...)
    Zh,
    /// English (Page X of Y, Abstract, Introduction, ...)
    En,
    /// Both Chinese and English
    All,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Zh => Locale::Chinese,
            LocaleArg::En => Locale::English,
            LocaleArg::All => Locale::All,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(cli)?;
    log::debug!("Converting {} with {:?}", cli.input.display(), options);
    let converter = Converter::new(options)?;

    let show_progress = !cli.quiet && !cli.json;
    let report = if show_progress {
        convert_with_spinner(&converter, &cli.input, cli.output.as_deref())?
    } else {
        converter.convert(&cli.input, cli.output.as_deref())?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !cli.quiet {
        print_summary(&report);
    }

    Ok(())
}

fn build_options(cli: &Cli) -> Result<ConvertOptions, Box<dyn std::error::Error>> {
    let page_selection = match cli.pages.as_deref() {
        Some(p) => PageSelection::parse(p)?,
        None => PageSelection::All,
    };

    let mut extract = ExtractOptions::new().with_pages(page_selection);
    if cli.lenient {
        extract = extract.lenient();
    }

    let locale = Locale::from(cli.locale);
    let mut cleanup = CleanupOptions::new()
        .with_locale(locale)
        .with_line_breaks(cli.keep_lines);
    for pattern in &cli.footer_pattern {
        cleanup = cleanup.with_footer_pattern(pattern);
    }

    let title = if cli.no_title {
        TitleMode::None
    } else if let Some(ref title) = cli.title {
        TitleMode::Custom(title.clone())
    } else {
        TitleMode::FromFileName
    };

    Ok(ConvertOptions::new()
        .with_extract_options(extract)
        .with_cleanup(cleanup)
        .with_headings(HeadingRules::for_locale(locale).with_max_len(cli.max_heading_len))
        .with_title(title))
}

fn convert_with_spinner(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
) -> Result<ConversionReport, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = converter.convert_with_progress(input, output, |stage| {
        pb.set_message(stage.to_string());
    });

    match result {
        Ok(report) => {
            pb.finish_and_clear();
            Ok(report)
        }
        Err(e) => {
            pb.abandon();
            Err(e.into())
        }
    }
}

fn print_summary(report: &ConversionReport) {
    println!("{}", "Conversion succeeded".green().bold());
    println!("  {} {}", "Input: ".bold(), report.input.display());
    println!("  {} {}", "Output:".bold(), report.output.display());
    if report.extracted_pages == report.pages {
        println!("  {} {}", "Pages: ".bold(), report.pages);
    } else {
        println!(
            "  {} {} of {}",
            "Pages: ".bold(),
            report.extracted_pages,
            report.pages
        );
    }
    println!("  {} {} characters", "Text:  ".bold(), report.chars);
    println!(
        "  {} {} headings, {} paragraphs",
        "Blocks:".bold(),
        report.headings,
        report.paragraphs
    );
}
