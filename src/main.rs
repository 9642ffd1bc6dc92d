//! Wordle Sessions - CLI
//!
//! Plays concurrent Wordle games from stdin, one game per chat session.
//! Prefix a line with `<session>:` to act as another chat.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;
use wordle_sessions::{
    error::SessionError,
    output::{
        print_guess_outcome, print_hint_outcome, print_start_info, print_summary,
    },
    session::{SessionConfig, SessionRegistry, TimeoutNotice},
    wordlists::{
        WordBank,
        loader::{load_dictionary_dir, load_word_list},
    },
};

/// Session used for lines without a `<session>:` prefix
const LOCAL_SESSION: &str = "local";

#[derive(Parser)]
#[command(
    name = "wordle_sessions",
    about = "Concurrent Wordle games, one per chat session, with inactivity timeouts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seconds without activity before a game is dropped
    #[arg(short, long, global = true, env = "WORDLE_TIMEOUT", default_value = "300")]
    timeout: u64,

    /// Directory of extra dictionaries, one <NAME>.tsv per dictionary
    #[arg(long, global = true, env = "WORDLE_WORDS_DIR")]
    words_dir: Option<PathBuf>,

    /// File of extra words accepted as guesses, one per line
    #[arg(long, global = true, env = "WORDLE_ALLOWED")]
    allowed: Option<PathBuf>,

    /// Log session activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play from stdin (default)
    Play,

    /// List recognized dictionaries and their word counts
    Dictionaries,
}

/// Embedded word data plus whatever the flags point at
fn load_word_bank(cli: &Cli) -> Result<WordBank> {
    let mut bank = WordBank::embedded();

    if let Some(dir) = &cli.words_dir {
        let dictionaries = load_dictionary_dir(dir)
            .with_context(|| format!("failed to load dictionaries from {}", dir.display()))?;
        for dictionary in dictionaries {
            tracing::info!(name = dictionary.name(), words = dictionary.len(), "dictionary loaded");
            bank = bank.with_dictionary(dictionary);
        }
    }

    if let Some(path) = &cli.allowed {
        let words = load_word_list(path)
            .with_context(|| format!("failed to load word list {}", path.display()))?;
        tracing::info!(words = words.len(), "allowed words loaded");
        bank = bank.with_allowed(words);
    }

    Ok(bank)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let bank = load_word_bank(&cli)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let config =
                SessionConfig::default().with_inactivity_timeout(Duration::from_secs(cli.timeout));
            let dictionaries: Vec<String> =
                bank.dictionary_names().into_iter().map(String::from).collect();
            let (registry, timeouts) = SessionRegistry::new(config, Arc::new(bank));
            run_play_command(&registry, timeouts, &dictionaries).await
        }
        Commands::Dictionaries => {
            run_dictionaries_command(&bank);
            Ok(())
        }
    }
}

fn run_dictionaries_command(bank: &WordBank) {
    for name in bank.dictionary_names() {
        let Some(dictionary) = bank.dictionary(name) else {
            continue;
        };
        let counts: Vec<String> = dictionary
            .length_counts()
            .iter()
            .map(|(length, count)| format!("{length}:{count}"))
            .collect();
        println!(
            "{:<8} {:>5} words  ({})",
            name.bright_white().bold(),
            dictionary.len(),
            counts.join(" ")
        );
    }
    println!("{} legal guesses", bank.known_words());
}

async fn run_play_command(
    registry: &SessionRegistry,
    mut timeouts: UnboundedReceiver<TimeoutNotice>,
    dictionaries: &[String],
) -> Result<()> {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "W O R D L E".bright_green().bold());
    println!("{}", "═".repeat(60).cyan());
    print_usage(dictionaries);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                if handle_line(registry, &line, dictionaries).is_break() {
                    break;
                }
            }
            Some(notice) = timeouts.recv() => print_timeout(&notice),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Split `session: text` into its parts; unprefixed lines belong to the local session
fn split_session(line: &str) -> (&str, &str) {
    match line.split_once(':') {
        Some((session, rest))
            if !session.trim().is_empty() && !session.trim().contains(char::is_whitespace) =>
        {
            (session.trim(), rest.trim())
        }
        _ => (LOCAL_SESSION, line.trim()),
    }
}

fn handle_line(registry: &SessionRegistry, line: &str, dictionaries: &[String]) -> ControlFlow<()> {
    let (session, text) = split_session(line);
    let mut tokens = text.split_whitespace();
    let Some(command) = tokens.next() else {
        return ControlFlow::Continue(());
    };

    match command.to_lowercase().as_str() {
        "quit" | "exit" => return ControlFlow::Break(()),
        "help" => print_usage(dictionaries),
        "start" | "wordle" => {
            let args: Vec<&str> = tokens.collect();
            match parse_start_args(&args, registry.config()) {
                Ok((length, dictionary)) => match registry.start(session, &dictionary, length) {
                    Ok(info) => print_start_info(session, &info),
                    Err(err @ SessionError::UnknownDictionary(_)) => {
                        print_error(session, &err);
                        println!("  Dictionaries: {}", dictionaries.join(", "));
                    }
                    Err(err) => print_error(session, &err),
                },
                Err(err) => println!("[{}] {}", session.cyan(), err.to_string().trim_end().red()),
            }
        }
        "hint" => match registry.hint(session) {
            Ok(outcome) => print_hint_outcome(session, &outcome),
            Err(err) => print_error(session, &err),
        },
        "stop" => match registry.stop(session) {
            Ok(summary) => {
                println!("[{}] Game over.", session.cyan());
                if let Some(summary) = summary {
                    print_summary(&summary);
                }
            }
            Err(err) => print_error(session, &err),
        },
        _ if registry.is_running(session) => match registry.guess(session, command) {
            Ok(outcome) => print_guess_outcome(session, command, &outcome),
            Err(err) => print_error(session, &err),
        },
        _ => println!(
            "[{}] No game running. Type `start` to begin.",
            session.cyan()
        ),
    }

    ControlFlow::Continue(())
}

/// Options of the in-game `start` command
#[derive(Parser, Debug)]
#[command(name = "start", about = "Start a new game in this session")]
struct StartArgs {
    /// Word length (3-8)
    #[arg(short, long)]
    length: Option<usize>,

    /// Dictionary to pick the word from
    #[arg(short, long)]
    dictionary: Option<String>,
}

/// Parse `start` options, falling back to the configured defaults
fn parse_start_args(args: &[&str], config: &SessionConfig) -> Result<(usize, String), clap::Error> {
    let args = StartArgs::try_parse_from(std::iter::once("start").chain(args.iter().copied()))?;

    Ok((
        args.length.unwrap_or(config.default_length),
        args.dictionary.unwrap_or_else(|| config.default_dictionary.clone()),
    ))
}

fn print_timeout(notice: &TimeoutNotice) {
    println!(
        "\n[{}] {}",
        notice.session.cyan(),
        "Nobody guessed for a while, game over.".yellow()
    );
    if let Some(summary) = &notice.summary {
        print_summary(summary);
    }
}

fn print_error(session: &str, err: &SessionError) {
    println!("[{}] {}", session.cyan(), err.to_string().red());
}

fn print_usage(dictionaries: &[String]) {
    println!("\nGuess the hidden word. Green: right letter, right spot.");
    println!("Yellow: the letter is in the word. Gray: it is not.");
    println!("You get one more attempt than the word has letters.\n");
    println!("  start [-l 3..8] [-d NAME]   new game (default: 5 letters, CET4)");
    println!("  <word>                      guess");
    println!("  hint                        show letters found so far");
    println!("  stop                        give up");
    println!("  quit                        exit\n");
    println!("Prefix a line with `name:` to play in another session, e.g. `bob: start -l 6`.");
    println!("Dictionaries: {}\n", dictionaries.join(", "));
}
