use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use cylinder_chess::chess_errors::ChessErrors;
use cylinder_chess::engines::engine_random::RandomEngine;
use cylinder_chess::engines::engine_trait::Engine;
use cylinder_chess::game_state::chess_types::{Color, GameStatus, PieceKind};
use cylinder_chess::game_state::game_state::{CylinderGame, MoveOutcome};
use cylinder_chess::utils::algebraic::{
    algebraic_to_move, algebraic_to_square, square_to_algebraic,
};
use cylinder_chess::utils::render_game_state::render_board;

const COMPUTER_MOVE_DELAY_MS: u64 = 600;

fn main() {
    let mut game = CylinderGame::new_game_vs_computer();
    let mut engine = RandomEngine::new();

    println!("Cylinder chess: columns wrap, a-file and h-file are neighbors.");
    println!("You are White. Enter moves like e2e4, or: moves <square>, new, quit.");
    println!("{}", render_board(game.board()));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if game.status().is_terminal() {
            println!("{}", status_banner(&game));
            println!("Enter 'new' for another game or 'quit' to leave.");
        }

        print!("white> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return,
        };
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => return,
            "new" => {
                game = CylinderGame::new_game_vs_computer();
                engine.new_game();
                println!("{}", render_board(game.board()));
                continue;
            }
            _ => {}
        }

        if let Some(square_text) = input.strip_prefix("moves ") {
            show_moves(&game, square_text.trim());
            continue;
        }

        if game.status().is_terminal() {
            println!("The game is over; start a 'new' one.");
            continue;
        }

        let (from, to) = match algebraic_to_move(input) {
            Ok(parsed) => parsed,
            Err(error) => {
                println!("Could not read that move: {error:?}");
                continue;
            }
        };

        match game.submit_move(from, to) {
            Ok(MoveOutcome::AwaitingPromotion(_)) => {
                prompt_promotion(&mut game, &mut lines);
            }
            Ok(MoveOutcome::Completed(_)) => {}
            Err(error) => {
                println!("{}", reject_message(&error));
                continue;
            }
        }

        println!("{}", render_board(game.board()));
        println!("{}", status_banner(&game));

        if game.current_player() == Color::Black && !game.status().is_terminal() {
            computer_turn(&mut game, &mut engine);
        }
    }
}

fn computer_turn(game: &mut CylinderGame, engine: &mut RandomEngine) {
    thread::sleep(Duration::from_millis(COMPUTER_MOVE_DELAY_MS));

    let output = match engine.choose_move(game) {
        Ok(output) => output,
        Err(error) => {
            println!("Engine failure: {error:?}");
            return;
        }
    };

    let Some(chosen) = output.chosen_move else {
        // No legal reply; submit_move can never be called, so the status
        // already says mate or stalemate.
        println!("{}", status_banner(game));
        return;
    };

    let from = square_to_algebraic(chosen.from).unwrap_or_default();
    let to = square_to_algebraic(chosen.to).unwrap_or_default();
    println!("{} plays {from}{to}", engine.name());

    if let Err(error) = game.submit_move(chosen.from, chosen.to) {
        println!("Engine move rejected: {error:?}");
        return;
    }

    println!("{}", render_board(game.board()));
    println!("{}", status_banner(game));
}

fn prompt_promotion(
    game: &mut CylinderGame,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    loop {
        print!("promote to (q/r/b/n)> ");
        if io::stdout().flush().is_err() {
            return;
        }
        let Some(Ok(line)) = lines.next() else {
            return;
        };
        let kind = match line.trim() {
            "q" | "queen" => PieceKind::Queen,
            "r" | "rook" => PieceKind::Rook,
            "b" | "bishop" => PieceKind::Bishop,
            "n" | "knight" => PieceKind::Knight,
            other => {
                println!("'{other}' is not a promotion piece.");
                continue;
            }
        };
        match game.complete_promotion(kind) {
            Ok(_) => return,
            Err(error) => println!("Promotion rejected: {error:?}"),
        }
    }
}

fn show_moves(game: &CylinderGame, square_text: &str) {
    let square = match algebraic_to_square(square_text) {
        Ok(square) => square,
        Err(error) => {
            println!("Could not read that square: {error:?}");
            return;
        }
    };
    match game.legal_moves_from(square) {
        Ok(moves) if moves.is_empty() => println!("No moves from {square_text}."),
        Ok(moves) => {
            let targets: Vec<String> = moves
                .iter()
                .filter_map(|mv| square_to_algebraic(mv.to).ok())
                .collect();
            println!("{square_text}: {}", targets.join(" "));
        }
        Err(error) => println!("Move query failed: {error:?}"),
    }
}

fn status_banner(game: &CylinderGame) -> String {
    match game.status() {
        GameStatus::Playing => format!("{} to move.", color_name(game.current_player())),
        GameStatus::Check => format!("Check! {} to move.", color_name(game.current_player())),
        GameStatus::Checkmate => format!(
            "Checkmate! {} wins.",
            color_name(game.current_player().opposite())
        ),
        GameStatus::Stalemate => "Stalemate. Draw.".to_owned(),
        GameStatus::Timeout => format!(
            "Time out! {} wins.",
            color_name(game.current_player().opposite())
        ),
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn reject_message(error: &ChessErrors) -> String {
    match error {
        ChessErrors::IllegalMove { .. } => "Illegal move.".to_owned(),
        ChessErrors::EmptySquare(_) => "That square is empty.".to_owned(),
        ChessErrors::OutOfTurn(_) => "That is not your piece.".to_owned(),
        ChessErrors::PromotionPending => "Choose a promotion piece first.".to_owned(),
        ChessErrors::GameOver(_) => "The game is over.".to_owned(),
        other => format!("Move rejected: {other:?}"),
    }
}
