use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use chordsmith::{chord_report, ChordError, OutputFormat, Settings};

const USAGE: &str = "Usage: chordsmith [--config <settings.yaml>] [--json] [SYMBOL ...]";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut settings_path: Option<&String> = None;
    let mut force_json = false;
    let mut symbols: Vec<&String> = Vec::new();

    // Parse flags
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(path) => settings_path = Some(path),
                None => {
                    eprintln!("{}", USAGE);
                    process::exit(1);
                }
            },
            "--json" => force_json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            _ => symbols.push(arg),
        }
    }

    let mut settings = match settings_path {
        Some(path) => match Settings::load(Path::new(path)) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => Settings::default(),
    };
    if force_json {
        settings.output = OutputFormat::Json;
    }

    let result = if symbols.is_empty() {
        interactive(&settings)
    } else {
        resolve_all(&settings, &symbols)
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Print one symbol's tones, or the error line. Returns whether it was valid.
fn resolve(settings: &Settings, symbol: &str, out: &mut impl Write) -> Result<bool, ChordError> {
    match chord_report(symbol) {
        Some(report) => {
            let line = settings.format_report(&report)?;
            match settings.output {
                OutputFormat::Text if settings.prompt => writeln!(out, " => {}", line)?,
                _ => writeln!(out, "{}", line)?,
            }
            Ok(true)
        }
        None => {
            eprintln!("Invalid chord symbol detected!: '{}'", symbol);
            Ok(false)
        }
    }
}

fn resolve_all(settings: &Settings, symbols: &[&String]) -> Result<bool, ChordError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let batch = Settings {
        prompt: false,
        ..settings.clone()
    };

    let mut all_valid = true;
    for symbol in symbols {
        all_valid &= resolve(&batch, symbol, &mut out)?;
    }
    Ok(all_valid)
}

/// Read symbols line by line until a blank line or end of input.
fn interactive(settings: &Settings) -> Result<bool, ChordError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if settings.prompt {
        writeln!(out, "+++ Welcome to chordsmith +++")?;
        write!(out, "Enter a chord symbol: ")?;
        out.flush()?;
    }

    for line in stdin.lock().lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }

        resolve(settings, &line, &mut out)?;

        if settings.prompt {
            write!(out, "More?...or hit enter to exit: ")?;
            out.flush()?;
        }
    }

    if settings.prompt {
        writeln!(out, "Goodbye!")?;
    }
    Ok(true)
}
