//! Terminal front end: an interactive game loop plus one-shot commands.
//!
//! Input and output are passed in, so the loop runs the same against a
//! terminal or an in-memory script.

use crate::config::RunnerConfig;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_minimax::{
    Board, Evaluation, GameRecord, Minimax, Outcome, Player, Position, apply, current_player,
    initial_board, rules, self_play,
};
use tracing::{debug, info, instrument, warn};

const HELP: &str =
    "Enter a move as \"row col\" (0-2 each) or a cell number 1-9:\n1|2|3\n4|5|6\n7|8|9";

/// Plays one game between the human (reading `input`) and the engine.
///
/// Returns the outcome once the board is terminal.
///
/// # Errors
///
/// Fails if `input` closes before the game ends or writing to `output`
/// fails.
#[instrument(skip_all, fields(human = %config.human()))]
pub fn play<R: BufRead, W: Write>(
    config: &RunnerConfig,
    mut input: R,
    mut output: W,
) -> Result<Outcome> {
    let human = *config.human();
    let mut board = initial_board();
    let mut searcher = Minimax::new();

    writeln!(output, "You are {}. {}", human, HELP)?;

    loop {
        writeln!(output, "\n{}\n", board)?;

        if let Some(outcome) = rules::outcome(&board) {
            writeln!(output, "Game over: {}", outcome)?;
            writeln!(output, "{}", verdict(outcome, human))?;
            info!(%outcome, "Game finished");
            return Ok(outcome);
        }

        let Some(player) = current_player(&board) else {
            bail!("non-terminal board has no player to move");
        };

        if player == human {
            board = human_turn(&board, &mut input, &mut output)?;
        } else {
            let before = searcher.nodes();
            let eval = searcher
                .evaluate(&board)
                .context("engine found no move on a live board")?;
            board = apply(&board, eval.action)?;
            writeln!(output, "Engine ({}) plays {}", player, eval.action)?;
            if *config.show_stats() {
                writeln!(output, "Searched {} boards", searcher.nodes() - before)?;
            }
        }
    }
}

/// One-line summary of a finished game from the human's side of the board.
fn verdict(outcome: Outcome, human: Player) -> &'static str {
    if outcome.is_draw() {
        "Nobody wins."
    } else if outcome.winner() == Some(human) {
        "You win!"
    } else {
        "The engine wins."
    }
}

/// Reads lines until one names a legal move, then applies it.
fn human_turn<R: BufRead, W: Write>(
    board: &Board,
    input: &mut R,
    output: &mut W,
) -> Result<Board> {
    loop {
        write!(output, "Your move: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game ended");
        }

        let Some(position) = Position::parse_input(&line) else {
            warn!(input = line.trim(), "Unrecognised move");
            writeln!(output, "Could not read {:?}. {}", line.trim(), HELP)?;
            continue;
        };

        match apply(board, position) {
            Ok(next) => {
                debug!(%position, "Human moved");
                return Ok(next);
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

/// Prints the engine's choice for `board_text`, as text or as JSON.
///
/// Returns the evaluation, or `None` for a finished board. In JSON mode a
/// finished board prints `null`.
#[instrument(skip(output))]
pub fn best<W: Write>(board_text: &str, json: bool, mut output: W) -> Result<Option<Evaluation>> {
    let board: Board = board_text.parse().context("invalid board")?;
    let evaluation = Minimax::new().evaluate(&board);

    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&evaluation)?)?;
        return Ok(evaluation);
    }

    writeln!(output, "{}\n", board)?;
    match evaluation {
        Some(eval) => {
            let player = current_player(&board).context("no player to move")?;
            write!(output, "{} to move: {}", player, eval.action)?;
            match eval.value {
                Some(value) => {
                    writeln!(output, " (value {}, {} boards searched)", value, eval.nodes)?
                }
                None => writeln!(output, " (opening move)")?,
            }
        }
        None => {
            let outcome = rules::outcome(&board).context("terminal board without outcome")?;
            writeln!(output, "Game over: {}", outcome)?;
        }
    }
    Ok(evaluation)
}

/// Plays the engine against itself and prints the record.
#[instrument(skip(output))]
pub fn self_play_command<W: Write>(
    board_text: Option<&str>,
    json: bool,
    mut output: W,
) -> Result<GameRecord> {
    let start = match board_text {
        Some(text) => text.parse().context("invalid board")?,
        None => initial_board(),
    };
    let record = self_play(start)?;

    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&record)?)?;
    } else {
        for (ply, mv) in record.moves.iter().enumerate() {
            writeln!(output, "{:>2}. {} plays {}", ply + 1, mv.player(), mv.position())?;
        }
        writeln!(
            output,
            "\n{}\n\n{} ({} boards searched)",
            record.board, record.outcome, record.nodes
        )?;
    }
    Ok(record)
}
