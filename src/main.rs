use anyhow::{Context, Result, bail};
use clap::Parser;
use clap::builder::FalseyValueParser;
use colored::Colorize;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cowsay",
    about = "Print a message in a speech bubble, followed by a cow",
    disable_version_flag = true
)]
struct Cli {
    /// Words of the message. Read from stdin when neither words nor --file are given.
    message: Vec<String>,

    /// Read the message from a file
    #[arg(short, long, value_name = "PATH", conflicts_with = "message")]
    file: Option<PathBuf>,

    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Print diagnostics to stderr
    #[arg(long, env = "COWSAY_DEBUG", value_parser = FalseyValueParser::new())]
    debug: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        let version = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return cowsay::cowsay(&version).context("writing to stdout");
    }

    let message = read_message(&cli)?;

    if cli.debug {
        eprintln!(
            "COWSAY_DEBUG: message_len={}, bytes={}",
            cowsay::say::message_len(&message),
            message.len()
        );
    }

    cowsay::cowsay(&message).context("writing to stdout")
}

/// Pick the message source: positional words, then --file, then stdin.
fn read_message(cli: &Cli) -> Result<String> {
    if !cli.message.is_empty() {
        if cli.debug {
            eprintln!("COWSAY_DEBUG: source=args, words={}", cli.message.len());
        }
        return Ok(cli.message.join(" "));
    }

    if let Some(path) = &cli.file {
        if cli.debug {
            eprintln!("COWSAY_DEBUG: source=file, path={}", path.display());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading message from {}", path.display()))?;
        return Ok(single_line(&text));
    }

    // Waiting on a terminal with no prompt looks like a hang.
    if atty::is(atty::Stream::Stdin) {
        bail!("no message given; pass words, --file, or pipe text on stdin");
    }
    if cli.debug {
        eprintln!("COWSAY_DEBUG: source=stdin");
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("reading message from stdin")?;
    Ok(single_line(&text))
}

/// Fold line breaks into single spaces so the bubble stays one line.
fn single_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}
