//! stcstyle - preview how a theme lands on wx.stc style slots

use std::env;
use std::io;
use std::process;

use tracing_subscriber::EnvFilter;

use stcstyle::config::Config;
use stcstyle::error::{Result, StyleError};
use stcstyle::{preview, Formatter, Lexer, RecordingSurface, Theme};

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("STCSTYLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let mut config = Config::load();
    let args: Vec<String> = env::args().skip(1).collect();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--theme" | "-t" => {
                config.theme = iter
                    .next()
                    .ok_or_else(|| StyleError::Message("--theme needs a value".to_string()))?
                    .clone();
            }
            "--lexer" | "-l" => {
                let name = iter
                    .next()
                    .ok_or_else(|| StyleError::Message("--lexer needs a value".to_string()))?;
                config.lexer =
                    Lexer::from_name(name).ok_or_else(|| StyleError::UnknownLexer(name.clone()))?;
            }
            "--pooled" => config.pooled = true,
            "--no-color" => config.color = false,
            other => return Err(StyleError::Message(format!("Unknown option: {}", other))),
        }
    }

    let theme = load_theme(&config)?;
    let formatter = Formatter::new(theme).with_pooled_table(config.pooled);

    let mut surface = RecordingSurface::new(config.lexer.id());
    formatter.format(&mut surface)?;

    println!(
        "theme {} on lexer {} ({})",
        formatter.theme().name,
        config.lexer.name(),
        config.lexer.id()
    );
    let stdout = io::stdout();
    let mut out = stdout.lock();
    preview::render(
        &mut out,
        &surface,
        formatter.slot_table(config.lexer),
        config.color,
    )
}

/// Built-in theme by name, otherwise a TOML file
fn load_theme(config: &Config) -> Result<Theme> {
    match Theme::builtin(&config.theme) {
        Some(theme) => theme,
        None => Theme::load(&config.theme_path()),
    }
}

fn print_usage() {
    println!("stcstyle {} - preview themes on wx.stc style slots", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: stcstyle [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -t, --theme FILE   Theme TOML file or built-in name (default: default)");
    println!("  -l, --lexer NAME   python, cpp, html, yaml, r, json or a lexer id");
    println!("      --pooled       Apply every lexer's slots, not just the active one's");
    println!("      --no-color     Do not colour the sample column");
    println!("  -h, --help         Show this help message");
    println!("  -V, --version      Show version information");
    println!();
    println!("Settings are also read from ~/.stcstyle.conf.");
    println!("Set STCSTYLE_LOG=debug to trace slot assignments.");
}

fn print_version() {
    println!("stcstyle {}", env!("CARGO_PKG_VERSION"));
}
