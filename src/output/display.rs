//! Display functions for session results

use super::formatters::{board_to_emoji, hint_text};
use crate::core::LetterFeedback;
use crate::game::{Board, Cell, GuessOutcome, Reveal, Summary};
use crate::session::{HintOutcome, StartInfo};
use colored::Colorize;

/// Print a board with colored letter tiles
pub fn print_board(board: &Board) {
    for row in board.rows() {
        let tiles: Vec<String> = row
            .iter()
            .map(|cell| match *cell {
                Cell::Blank => " · ".bright_black().to_string(),
                Cell::Letter { letter, feedback } => {
                    let tile = format!(" {} ", letter.to_ascii_uppercase());
                    match feedback {
                        LetterFeedback::Correct => tile.black().on_green().bold(),
                        LetterFeedback::Present => tile.black().on_yellow().bold(),
                        LetterFeedback::Absent => tile.white().on_bright_black(),
                    }
                    .to_string()
                }
            })
            .collect();
        println!("  {}", tiles.join(" "));
    }
}

/// Print the greeting for a new game
pub fn print_start_info(session: &str, info: &StartInfo) {
    println!(
        "\n[{}] You have {} attempts to guess a {}-letter word from {}.",
        session.cyan(),
        info.attempts.to_string().bright_yellow().bold(),
        info.length,
        info.dictionary.bright_white()
    );
    print_board(&info.board);
}

/// Print the response to a guess
pub fn print_guess_outcome(session: &str, word: &str, outcome: &GuessOutcome) {
    let tag = format!("[{}]", session.cyan());
    match outcome {
        GuessOutcome::Win { board, reveal } => {
            println!("\n{tag} {}", "🎉 You got it!".bright_green().bold());
            print_board(board);
            print_reveal(reveal);
        }
        GuessOutcome::Loss { board, reveal } => {
            println!("\n{tag} {}", "Out of attempts, nobody got it.".red().bold());
            print_board(board);
            print_reveal(reveal);
        }
        GuessOutcome::Duplicate { word } => {
            println!("{tag} You already guessed {}.", word.to_uppercase().bold());
        }
        GuessOutcome::Illegal { word } => {
            println!("{tag} Is {} really a word?", word.to_uppercase().bold());
        }
        GuessOutcome::WrongLength { expected, actual } => {
            println!(
                "{tag} {} has {actual} letters; the answer has {expected}.",
                word.to_uppercase().bold()
            );
        }
        GuessOutcome::Continue {
            board, remaining, ..
        } => {
            println!(
                "\n{tag} {} attempts left",
                remaining.to_string().bright_yellow()
            );
            print_board(board);
        }
    }
}

/// Print the response to a hint request
pub fn print_hint_outcome(session: &str, outcome: &HintOutcome) {
    let tag = format!("[{}]", session.cyan());
    match outcome {
        HintOutcome::NothingRevealed => {
            println!("{tag} You haven't found a single letter yet. Keep guessing!");
        }
        HintOutcome::Revealed(hint) => {
            println!("{tag} Hint: {}", hint_text(hint).bright_green().bold());
        }
    }
}

/// Print what was played before a game was stopped or timed out
pub fn print_summary(summary: &Summary) {
    println!(
        "  {} of {} attempts used",
        summary.attempts_used, summary.max_attempts
    );
    for line in board_to_emoji(&summary.board).lines().take(summary.attempts_used) {
        println!("  {line}");
    }
}

fn print_reveal(reveal: &Reveal) {
    println!("  Word:    {}", reveal.word.bright_yellow().bold());
    if !reveal.meaning.is_empty() {
        println!("  Meaning: {}", reveal.meaning);
    }
}
