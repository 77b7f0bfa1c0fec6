//! Risou CLI
//!
//! Usage:
//!   risou --text "your statement"            # Single analysis
//!   risou --interactive                      # Read statements from stdin
//!   risou --serve                            # HTTP API server
//!   risou --text "text" --json               # JSON output
//!   risou --load-last --certificate          # Re-render the saved result

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use risou::core::{
    delay_certificate, load_last, normalize, run_server, save_last, Analyzer,
    KeywordTables, LastResult, RandomChooser,
};
use risou::types::AnalysisResult;
use risou::{RisouError, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "risou",
    version = VERSION,
    about = "Risou - Measure how far a current state lags behind its goal",
    long_about = "Risou reads a free-text description of where you stand on a goal\n\
                  and reports it as a train delay: five readiness scores, a total\n\
                  delay in minutes, its split across the scores, and next actions.\n\n\
                  Modes:\n  \
                  --text         Single statement\n  \
                  --interactive  One statement per line\n  \
                  --serve        HTTP API server mode\n\n\
                  Levels:\n  \
                  OK     - delay of 10 minutes or less\n  \
                  WARN   - delay of 30 minutes or less\n  \
                  ALERT  - anything longer"
)]
struct Args {
    /// Statement to analyze (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read statements from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Category override (study, health, work, finance, relationship, habit, other or auto)
    #[arg(short, long, default_value = "auto")]
    category: String,

    /// Keyword tables as JSON (missing tables fall back to the built-in ones)
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Show scores, features and the delay breakdown
    #[arg(long)]
    verbose: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Print the pseudo delay certificate
    #[arg(long)]
    certificate: bool,

    /// Save the result as the last result
    #[arg(long)]
    save: bool,

    /// Re-render the last saved result instead of analyzing
    #[arg(long)]
    load_last: bool,

    /// Last-result file
    #[arg(long, default_value = "./.risou/last.json")]
    state_file: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args).await {
        eprintln!("error [{}]: {}", e.code(), e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), RisouError> {
    let analyzer = build_analyzer(args.keywords.as_deref())?;

    if args.serve {
        run_server(&args.addr, analyzer).await
    } else if args.load_last {
        run_load_last(&analyzer, args)
    } else if let Some(ref text) = args.text {
        run_single(&analyzer, text, args)
    } else {
        // Default to interactive if no mode specified
        run_interactive(&analyzer, args)
    }
}

fn build_analyzer(keywords: Option<&Path>) -> Result<Analyzer, RisouError> {
    let tables = match keywords {
        Some(path) => KeywordTables::from_json_file(path)?,
        None => KeywordTables::default(),
    };
    Ok(Analyzer::new(Arc::new(tables)))
}

/// Run single statement analysis
fn run_single(analyzer: &Analyzer, text: &str, args: &Args) -> Result<(), RisouError> {
    if normalize(text).is_empty() {
        return Err(RisouError::EmptyInput);
    }

    let mut chooser = RandomChooser::new();
    let result = analyzer.analyze(text, Some(&args.category), &mut chooser);
    print_result(&result, args, true)?;

    if args.save {
        save_last(&LastResult::from_result(text, &result), &args.state_file)?;
        if !args.json {
            println!("{}", format!("saved: {}", args.state_file.display()).dimmed());
        }
    }
    Ok(())
}

/// Rebuild and print the saved result
fn run_load_last(analyzer: &Analyzer, args: &Args) -> Result<(), RisouError> {
    let record = load_last(&args.state_file)?;
    let mut chooser = RandomChooser::new();
    let result = analyzer.rebuild(record.category, record.scores, record.quantities, &mut chooser);

    if !args.json {
        println!("{}", format!("input: {}", record.input).dimmed());
    }
    print_result(&result, args, true)
}

/// Run interactive mode
fn run_interactive(analyzer: &Analyzer, args: &Args) -> Result<(), RisouError> {
    let mut chooser = RandomChooser::new();
    let mut count = 0usize;

    if !args.json {
        print_header();
        println!("Describe your current state and press Enter. Type 'quit' to exit.");
        println!();
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if !args.json {
            print!("> ");
            stdout.flush()?;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            if !args.json {
                println!("\nSession ended. Analyses: {}", count);
            }
            break;
        }
        if normalize(line).is_empty() {
            continue;
        }

        let result = analyzer.analyze(line, Some(&args.category), &mut chooser);
        count += 1;
        print_result(&result, args, false)?;

        if args.save {
            save_last(&LastResult::from_result(line, &result), &args.state_file)?;
        }
    }
    Ok(())
}

/// Print one result in the selected format
fn print_result(result: &AnalysisResult, args: &Args, pretty: bool) -> Result<(), RisouError> {
    if args.json {
        let json = if pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        println!("{}", json);
        return Ok(());
    }

    println!("{}", result.to_terminal_string());

    if args.verbose {
        println!();
        println!("{}", result.to_parseable_string().dimmed());
        println!("{}", result.debug_summary());
        println!();
        println!("{}", "内訳".bold());
        for line in result.breakdown_lines() {
            println!("  {}", line);
        }
    }

    println!();
    println!("{}", "理想の状態".bold());
    println!("  {}", result.ideal);
    println!("{}", "ギャップ".bold());
    for gap in &result.gaps {
        println!("  - {}", gap);
    }
    println!("{}", "次のアクション".bold());
    for action in &result.actions {
        println!("  - {}", action);
    }

    if args.certificate {
        println!();
        println!("{}", delay_certificate(result, chrono::Local::now()));
    }
    println!();
    Ok(())
}

/// Print header
fn print_header() {
    let rule = "========================================";
    println!("{}", rule.bold());
    println!("{}", format!("  Risou v{} - Interactive", VERSION).bold());
    println!("{}", rule.bold());
    println!();
}
