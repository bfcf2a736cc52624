//! Plays a game in the terminal: type a square name to click it

use std::io::{self, BufRead, Write};
use std::process;

use clickchess_core::{BoardEvents, BoardView, ClickOutcome, Game, InterfaceConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match InterfaceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            process::exit(1);
        }
    };

    let mut game = match Game::from_config(BoardView::new(), &config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            process::exit(1);
        }
    };

    print_usage();
    print_board(&game);

    let stdin = io::stdin();
    loop {
        if game.is_awaiting_promotion() {
            let choices: Vec<String> = game
                .view()
                .promotion_choices()
                .iter()
                .map(|c| format!("{} ({})", c.glyph, c.letter))
                .collect();
            print!("Promote to {}: ", choices.join("  "));
        } else {
            print!("> ");
        }
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_usage();
                continue;
            }
            "undo" => {
                if !game.on_undo_requested() {
                    println!("Nothing to undo");
                }
            }
            _ if game.is_awaiting_promotion() => {
                if game.on_promotion_choice_clicked(input) == ClickOutcome::Ignored {
                    println!("Choose one of q, r, b, n");
                    continue;
                }
            }
            _ => match game.on_square_clicked(input) {
                ClickOutcome::Ignored => {
                    println!("(nothing to select on {})", input);
                    continue;
                }
                ClickOutcome::Selected(_) | ClickOutcome::PromotionPending(_) => {
                    println!("{}", game.view().render_text());
                    continue;
                }
                _ => {}
            },
        }

        for notification in game.view_mut().take_notifications() {
            println!("*** {} ***", notification.message);
        }
        print_board(&game);
    }
}

fn print_usage() {
    println!("Click Chess");
    println!("==================");
    println!();
    println!("Commands:");
    println!("  <square>   Click a square, e.g. e2 then e4");
    println!("  q|r|b|n    Choose a promotion piece when asked");
    println!("  undo       Take back the last move");
    println!("  quit       Leave the game");
    println!();
}

fn print_board(game: &Game) {
    let view = game.view();
    println!("{}", view.render_text());
    if !view.last_move_text().is_empty() {
        println!("Last move: {}", view.last_move_text());
    }
    println!("Moves: {}", view.history().join(", "));
    println!();
}
