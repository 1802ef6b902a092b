//! Wardle - CLI
//!
//! Play the word game in a TUI or line mode, and create shareable challenges.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wardle::{
    commands::{
        CreateConfig, SEARCH_LIMIT, create_challenge, inspect_challenge, random_challenge,
        run_simple, start_session,
    },
    interactive::{App, run_tui},
    output::{print_challenge_created, print_decoded, print_search_results},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wardle",
    about = "Wordle-style word game with shareable challenge links",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Base URL for challenge links
    #[arg(
        long,
        global = true,
        env = "WARDLE_BASE_URL",
        default_value = "https://wardle.app"
    )]
    base_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Challenge token or link to play instead of a random word
        #[arg(short, long)]
        challenge: Option<String>,
    },

    /// Simple line-mode game without the TUI
    Simple {
        /// Challenge token or link to play instead of a random word
        #[arg(short, long)]
        challenge: Option<String>,
    },

    /// Create a challenge link for a word
    Create {
        /// The secret word
        word: String,

        /// Message shown to the solver when they win
        #[arg(short, long)]
        message: Option<String>,

        /// Emit an old-style token holding only the word
        #[arg(long, conflicts_with = "message")]
        bare: bool,
    },

    /// Create a challenge link for a random word
    Random {
        /// Message shown to the solver when they win
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Show what a challenge token or link contains
    Decode {
        /// Token or full challenge link
        token: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the word list by prefix
    Search {
        /// Start of the word
        prefix: String,

        /// Maximum number of matches to show
        #[arg(short = 'n', long, default_value_t = SEARCH_LIMIT)]
        limit: usize,
    },
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordList> {
    let words = match wordlist {
        "embedded" => WordList::embedded(),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}"))?,
    };
    anyhow::ensure!(!words.is_empty(), "Word list '{wordlist}' has no valid words");
    debug!(count = words.len(), "Word list ready");
    Ok(words)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("WARDLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { challenge: None });

    match command {
        Commands::Play { challenge } => run_play_command(&words, challenge.as_deref()),
        Commands::Simple { challenge } => run_simple_command(&words, challenge.as_deref()),
        Commands::Create {
            word,
            message,
            bare,
        } => {
            let config = CreateConfig {
                message: message.as_deref(),
                bare,
                base_url: cli.base_url,
            };
            let created = create_challenge(&word, &config, &words)?;
            print_challenge_created(&created.word, config.message, &created.token, &created.url);
            Ok(())
        }
        Commands::Random { message } => {
            let config = CreateConfig {
                message: message.as_deref(),
                bare: false,
                base_url: cli.base_url,
            };
            let created = random_challenge(&mut rand::rng(), &config, &words)?;
            print_challenge_created(&created.word, config.message, &created.token, &created.url);
            Ok(())
        }
        Commands::Decode { token, json } => {
            let challenge = inspect_challenge(&token);
            if json {
                println!("{}", serde_json::to_string_pretty(&challenge)?);
            } else {
                print_decoded(&challenge);
            }
            Ok(())
        }
        Commands::Search { prefix, limit } => {
            print_search_results(&prefix, &words.search(&prefix, limit));
            Ok(())
        }
    }
}

fn run_play_command(words: &WordList, challenge: Option<&str>) -> Result<()> {
    let (session, challenge) = start_session(words, challenge)?;
    let stats = run_tui(App::new(words, session, challenge))?;
    println!(
        "Played {} game(s), won {}. Wins by guess count: {}",
        stats.total_games,
        stats.games_won,
        stats.distribution_line()
    );
    Ok(())
}

fn run_simple_command(words: &WordList, challenge: Option<&str>) -> Result<()> {
    let (session, challenge) = start_session(words, challenge)?;
    run_simple(session, challenge.as_ref())?;
    Ok(())
}
