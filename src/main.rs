use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seastrike::{init_logging, Board, CellState, Game, PlayerKind, TargetingAi};

#[derive(Parser)]
#[command(author, version, about = "Seeded AI-vs-AI naval combat simulator", long_about = None)]
struct Cli {
    /// Fix the RNG seed for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of games to simulate.
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// Print both boards after each game.
    #[arg(long)]
    show_boards: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut human_wins = 0u32;
    let mut computer_wins = 0u32;
    for game_index in 0..cli.games {
        let mut rng = match cli.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(game_index as u64)),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let winner = run_game(&mut rng, cli.show_boards)?;
        match winner {
            PlayerKind::Human => human_wins += 1,
            PlayerKind::Automated => computer_wins += 1,
        }
        println!("game {}: {:?} wins", game_index + 1, winner);
    }
    println!("totals: human {human_wins} / computer {computer_wins}");
    Ok(())
}

/// Drive one full game, standing in for the human with a second targeting AI
/// aimed at the computer's board.
fn run_game(rng: &mut SmallRng, show_boards: bool) -> anyhow::Result<PlayerKind> {
    let mut game = Game::new();
    game.place_fleet_randomly(PlayerKind::Human, rng)?;
    game.place_fleet_randomly(PlayerKind::Automated, rng)?;

    let mut stand_in = TargetingAi::new();
    let mut moves = 0usize;
    while !game.is_game_over() {
        // Human move against the computer board.
        let (row, col) = stand_in.select_target(rng, game.board(PlayerKind::Automated));
        game.apply_attack(PlayerKind::Automated, row, col)?;
        stand_in.record_outcome(game.board(PlayerKind::Automated), (row, col));
        moves += 1;
        if game.is_game_over() {
            break;
        }
        game.advance_turn();

        // Computer reply through the scheduling contract; the simulator
        // skips the presentation delay.
        if let Some(token) = game.schedule_computer_turn() {
            if game.fire_computer_turn(token, rng)?.is_some() {
                moves += 1;
            }
        }
    }

    let winner = game
        .winner()
        .ok_or_else(|| anyhow::anyhow!("game ended with no winner"))?;
    println!("finished in {moves} moves");
    if show_boards {
        print_board("human", game.board(PlayerKind::Human));
        print_board("computer", game.board(PlayerKind::Automated));
    }
    Ok(winner)
}

fn print_board(label: &str, board: &Board) {
    println!("\n{label} board:");
    print!("   ");
    for col in 0..board.size() {
        print!(" {}", (b'A' + col as u8) as char);
    }
    println!();
    for (row, cells) in board.cell_states().iter().enumerate() {
        print!("{:2} ", row + 1);
        for state in cells {
            let glyph = match state {
                CellState::Empty => '.',
                CellState::Ship => '#',
                CellState::Hit => 'x',
                CellState::Miss => 'o',
                CellState::Sunk => '*',
            };
            print!(" {glyph}");
        }
        println!();
    }
}
