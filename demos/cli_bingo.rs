//! CLI bingo example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bingors::{ActiveGame, Board, Column, DraftGame, GameOptions, Shape};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Bingo CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let shape = prompt_shape();
    let mut draft = match DraftGame::new("cli", GameOptions::default().with_shape(shape)) {
        Ok(draft) => draft,
        Err(err) => {
            println!("Config error: {err}");
            return;
        }
    };

    loop {
        let name = prompt_line("Player name (empty to finish): ");
        if name.is_empty() {
            break;
        }
        if name == "q" {
            return;
        }
        if let Err(err) = draft.add_player(name.as_str()) {
            println!("Player error: {err}");
            continue;
        }
        let boards = prompt_usize(&format!("Boards for {name}: ")).unwrap_or(1).max(1);
        for _ in 0..boards {
            if let Err(err) = draft.add_board(&name, &mut rng) {
                println!("Board error: {err}");
            }
        }
    }

    let mut game = match draft.start() {
        Ok(game) => game,
        Err(err) => {
            println!("Cannot start: {err}");
            return;
        }
    };

    print_boards(&game);

    loop {
        if prompt_line("Press Enter to call a ball: ") == "q" {
            println!("Goodbye.");
            return;
        }

        match game.play_random_ball(&mut rng) {
            Ok(ball) => println!("Called {ball} ({} left)", game.remaining_balls()),
            Err(err) => {
                println!("{err}");
                return;
            }
        }

        let winners: Vec<String> = game
            .potential_winners()
            .iter()
            .map(|winner| winner.name().to_string())
            .collect();
        if winners.is_empty() {
            continue;
        }

        print_boards(&game);
        println!("Bingo for: {}", winners.join(", "));
        match game.set_winner(&winners[0]) {
            Ok(finished) => {
                println!(
                    "{} wins after {} balls.",
                    finished.winner().name(),
                    finished.called().len()
                );
            }
            Err(err) => println!("Winner error: {err}"),
        }
        return;
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn prompt_shape() -> Shape {
    match prompt_line("Shape (standard/t/l/o/x): ")
        .to_lowercase()
        .as_str()
    {
        "t" => Shape::T,
        "l" => Shape::L,
        "o" => Shape::O,
        "x" => Shape::X,
        _ => Shape::Standard,
    }
}

fn print_boards(game: &ActiveGame) {
    for player in game.players() {
        println!("== {} ==", player.name());
        for board in player.boards() {
            println!("{}", format_board(board));
        }
    }
}

fn format_board(board: &Board) -> String {
    Column::ALL
        .iter()
        .map(|&column| {
            let balls = board
                .column(column)
                .iter()
                .map(|&ball| {
                    if board.is_played(ball) {
                        colorize(&format!("{:>2}", ball.number), "32")
                    } else {
                        format!("{:>2}", ball.number)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            format!("{column}: {balls}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
