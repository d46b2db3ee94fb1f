//! Gomoku agent CLI
//!
//! Plays a game on an 11x11 board, either interactively against a human
//! on stdin or as an agent-vs-agent demo (`--selfplay`). Win and draw
//! detection live here, in the game loop, not in the agent core.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use gomoku_agent::{Agent, Board, Pos, Stone, BOARD_SIZE};

struct Config {
    depth: u8,
    selfplay: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let config = parse_args()?;
    if config.selfplay {
        run_selfplay(config.depth)
    } else {
        run_interactive(config.depth)
    }
}

fn parse_args() -> Result<Config> {
    let mut config = Config {
        depth: 3,
        selfplay: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--selfplay" => config.selfplay = true,
            "--depth" => {
                let value = args.next().context("--depth requires a value")?;
                config.depth = value
                    .parse()
                    .with_context(|| format!("invalid depth '{value}'"))?;
            }
            "--help" | "-h" => {
                println!("usage: gomoku-agent [--depth N] [--selfplay]");
                std::process::exit(0);
            }
            other => bail!("unknown argument '{other}'"),
        }
    }
    Ok(config)
}

/// Human (X, moves first) against the agent (O).
fn run_interactive(depth: u8) -> Result<()> {
    let mut agent = Agent::with_depth(depth);
    let mut board = Board::new();
    let stdin = io::stdin();

    println!("Gomoku 11x11 - you are X, enter moves as: row col");

    loop {
        println!("{board}");

        let pos = read_move(&stdin, &board)?;
        board.place_stone(pos, Stone::Black);
        if has_five(&board, Stone::Black) {
            println!("{board}");
            println!("You win!");
            return Ok(());
        }
        if board.is_full() {
            println!("{board}");
            println!("Draw.");
            return Ok(());
        }

        let result = agent.decide_move_with_stats(&board, Stone::White)?;
        println!(
            "Agent plays ({}, {}) [{:?}, {} nodes, {}ms]",
            result.pos.row, result.pos.col, result.source, result.nodes, result.time_ms
        );
        board.place_stone(result.pos, Stone::White);
        if has_five(&board, Stone::White) {
            println!("{board}");
            println!("Agent wins!");
            return Ok(());
        }
        if board.is_full() {
            println!("{board}");
            println!("Draw.");
            return Ok(());
        }
    }
}

fn read_move(stdin: &io::Stdin, board: &Board) -> Result<Pos> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line)?;
        if read == 0 {
            bail!("input closed");
        }

        let mut parts = line.split_whitespace();
        let (Some(row), Some(col)) = (parts.next(), parts.next()) else {
            println!("enter two numbers: row col");
            continue;
        };
        let (Ok(row), Ok(col)) = (row.parse::<i32>(), col.parse::<i32>()) else {
            println!("enter two numbers: row col");
            continue;
        };

        match Pos::try_new(row, col) {
            Ok(pos) if board.is_empty_at(pos) => return Ok(pos),
            Ok(_) => println!("cell ({row}, {col}) is occupied"),
            Err(err) => println!("{err}"),
        }
    }
}

/// Two agents play each other until a win, a full board, or a move cap.
fn run_selfplay(depth: u8) -> Result<()> {
    let mut black = Agent::with_depth(depth);
    let mut white = Agent::with_depth(depth);
    let mut board = Board::new();

    for ply in 0..(BOARD_SIZE * BOARD_SIZE) {
        let side = if ply % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        };
        let agent = if side == Stone::Black {
            &mut black
        } else {
            &mut white
        };

        let result = agent.decide_move_with_stats(&board, side)?;
        println!(
            "{ply:3}: {side:?} plays ({}, {}) [{:?}, score {}, {} nodes, {}ms]",
            result.pos.row, result.pos.col, result.source, result.score, result.nodes, result.time_ms
        );
        board.place_stone(result.pos, side);

        if has_five(&board, side) {
            println!("{board}");
            println!("{side:?} wins after {} plies", ply + 1);
            return Ok(());
        }
        if board.is_full() {
            break;
        }
    }

    println!("{board}");
    println!("Draw.");
    Ok(())
}

/// Game-loop win check: five or more in a row in any of the 4 directions.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn has_five(board: &Board, side: Stone) -> bool {
    const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.get(Pos::new(row as u8, col as u8)) != side {
                continue;
            }
            for (dr, dc) in DIRECTIONS {
                let mut count = 1;
                let mut r = row as i32 + dr;
                let mut c = col as i32 + dc;
                while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == side {
                    count += 1;
                    r += dr;
                    c += dc;
                }
                if count >= 5 {
                    return true;
                }
            }
        }
    }
    false
}
