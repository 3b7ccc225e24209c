//! codelight - render source code as syntax-highlighted HTML

use std::env;
use std::io::{self, Read};
use std::process;

use codelight::{CodeElement, Config, HighlightError, Result};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    element: CodeElement,
    /// Code read from stdin is escaped markup
    inline: bool,
    list_languages: bool,
    verbose: u8,
    file: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(args) = parse_args(&args)? else {
        return Ok(());
    };

    init_logging(args.verbose);
    tracing::info!("Starting codelight v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    let registry = config.registry()?;

    if args.list_languages {
        for name in registry.list_languages() {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut element = args.element;
    element.prevent_select |= config.prevent_select;
    let style = config.style_config();

    let html = match args.file {
        Some(file) => {
            element.source_file_name = Some(file);
            let cwd = env::current_dir()?;
            element.render(&registry, Some(&cwd), &style)?
        }
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            if args.inline {
                element.inline = Some(input);
                element.render(&registry, None, &style)?
            } else {
                element.prepare(&registry)?;
                element.render_source(&registry, &input, &style)?
            }
        }
    };

    println!("{}", html);
    Ok(())
}

/// Parse arguments; `None` means help or version was printed
fn parse_args(args: &[String]) -> Result<Option<Args>> {
    let mut parsed = Args::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                print_version();
                return Ok(None);
            }
            "--language" | "-l" => parsed.element.language = Some(value(&mut iter, arg)?),
            "--highlight-lines" | "-H" => parsed.element.highlight_lines = Some(value(&mut iter, arg)?),
            "--highlight-color" | "-c" => parsed.element.highlight_lines_color = Some(value(&mut iter, arg)?),
            "--no-highlight" => parsed.element.no_highlight = true,
            "--prevent-select" => parsed.element.prevent_select = true,
            "--inline" => parsed.inline = true,
            "--list-languages" => parsed.list_languages = true,
            s if s.len() > 1 && s.starts_with('-') && s[1..].chars().all(|c| c == 'v') => {
                parsed.verbose = parsed.verbose.saturating_add((s.len() - 1) as u8);
            }
            s if s.starts_with('-') && s != "-" => return Err(usage_error(format!("unknown option '{}'", s))),
            s => {
                if parsed.file.is_some() {
                    return Err(usage_error("only one FILE may be given".to_string()));
                }
                if s != "-" {
                    parsed.file = Some(s.to_string());
                }
            }
        }
    }

    if parsed.inline && parsed.file.is_some() {
        return Err(HighlightError::InlineWithSourceFile);
    }

    Ok(Some(parsed))
}

/// Take the value following an option
fn value<'a>(iter: &mut impl Iterator<Item = &'a String>, option: &str) -> Result<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| usage_error(format!("option '{}' needs a value", option)))
}

fn usage_error(message: String) -> HighlightError {
    HighlightError::InvalidArgument(message)
}

/// Log to stderr; `RUST_LOG` directives refine the `-v` level
fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn print_usage() {
    println!("codelight {} - syntax-highlighted HTML for code blocks", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: codelight [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin) and writes an HTML fragment to stdout.");
    println!();
    println!("Options:");
    println!("  -l, --language NAME          Language name or alias");
    println!("      --no-highlight           Render as plain text");
    println!("  -H, --highlight-lines SPEC   Lines to emphasize, e.g. 1-3,5");
    println!("  -c, --highlight-color COLOR  Background for emphasized lines");
    println!("      --prevent-select         Mark the block as not selectable");
    println!("      --inline                 Stdin holds HTML-escaped code");
    println!("      --list-languages         List known languages and exit");
    println!("  -v                           More logging (repeat for more)");
    println!("  -h, --help                   Show this help message");
    println!("  -V, --version                Show version information");
    println!();
    println!("Settings are read from ~/.codelight.conf");
    println!("RUST_LOG adds per-module log directives");
}

fn print_version() {
    println!("codelight {}", env!("CARGO_PKG_VERSION"));
}
