//! Command line front end for the pawn-race engine.
//!
//! `pawn_race best` picks a move for the side to move, `pawn_race perft`
//! counts the move tree, `pawn_race play` lets two engines race to the end.

use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};

use pawn_race::engines::engine_minimax::MinimaxEngine;
use pawn_race::engines::engine_random::RandomEngine;
use pawn_race::engines::engine_trait::{Engine, GoParams};
use pawn_race::game_state::game_state::GameState;
use pawn_race::game_state::pawn_types::Colour;
use pawn_race::game_state::race_game::RaceGame;
use pawn_race::game_state::race_rules::DEFAULT_DIMENSION;
use pawn_race::move_generation::perft::{perft, perft_divide};
use pawn_race::search::alpha_beta::SearchConfig;
use pawn_race::utils::algebraic::long_algebraic_to_move;
use pawn_race::utils::position_parser::generate_diagram;
use pawn_race::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log search progress (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Choose a move for the side to move.
    Best {
        #[command(flatten)]
        position: PositionArgs,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Count move-tree nodes to a fixed depth.
    Perft {
        #[command(flatten)]
        position: PositionArgs,
        #[arg(long, default_value_t = 4)]
        depth: u8,
        /// Print the count under every root move.
        #[arg(long)]
        divide: bool,
    },
    /// Play engine against engine until the race is decided.
    Play {
        #[command(flatten)]
        position: PositionArgs,
        #[command(flatten)]
        engine: EngineArgs,
        /// Let Black move randomly instead of searching.
        #[arg(long)]
        random_black: bool,
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
    },
}

#[derive(Args, Debug)]
struct PositionArgs {
    /// Diagram such as "..../BB.B/..../WW.W w"; overrides the race opening.
    #[arg(long)]
    position: Option<String>,
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    dim: i8,
    /// File (0-based) left open in White's start rank.
    #[arg(long, default_value_t = 0)]
    white_gap: i8,
    /// File (0-based) left open in Black's start rank.
    #[arg(long, default_value_t = 0)]
    black_gap: i8,
    /// Moves to play before anything else, e.g. "b2b4 c7c5".
    #[arg(long, num_args = 1.., value_delimiter = ' ')]
    moves: Vec<String>,
}

#[derive(Args, Debug)]
struct EngineArgs {
    #[arg(long, default_value_t = SearchConfig::default().max_depth)]
    depth: u8,
    #[arg(long, default_value_t = SearchConfig::default().quiescence_depth)]
    quiescence: u8,
    /// Pick uniformly among the generated moves instead of searching.
    #[arg(long)]
    random: bool,
    /// Seed for the random engine.
    #[arg(long)]
    seed: Option<u64>,
}

impl PositionArgs {
    fn build(&self) -> Result<GameState, String> {
        let mut game = match &self.position {
            Some(diagram) => GameState::from_diagram(diagram),
            None => GameState::new_race(self.dim, self.white_gap, self.black_gap),
        }
        .map_err(|e| e.to_string())?;

        for text in &self.moves {
            let mv = long_algebraic_to_move(text, &game, game.side_to_move()).map_err(|e| e.to_string())?;
            game.apply_checked(mv).map_err(|e| e.to_string())?;
        }
        Ok(game)
    }
}

impl EngineArgs {
    fn config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.depth,
            quiescence_depth: self.quiescence,
        }
    }

    fn random_engine(&self) -> RandomEngine {
        self.seed.map_or_else(RandomEngine::new, RandomEngine::seeded)
    }

    fn engine(&self) -> Box<dyn Engine> {
        if self.random {
            Box::new(self.random_engine())
        } else {
            Box::new(MinimaxEngine::new(self.config()))
        }
    }
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|e| e.to_string())?;

    match cli.command {
        Command::Best { position, engine } => run_best(&position, &engine),
        Command::Perft {
            position,
            depth,
            divide,
        } => run_perft(&position, depth, divide),
        Command::Play {
            position,
            engine,
            random_black,
            max_plies,
        } => run_play(&position, &engine, random_black, max_plies),
    }
}

fn run_best(position: &PositionArgs, engine_args: &EngineArgs) -> Result<(), String> {
    let mut game = position.build()?;
    println!("{}\n", render_game_state(&game));

    let side = game.side_to_move();
    let mut engine = engine_args.engine();
    let out = engine
        .choose_move(&mut game, side, &GoParams::default())
        .map_err(|e| e.to_string())?;

    for line in &out.info_lines {
        println!("{line}");
    }
    match out.best_move {
        Some(mv) => {
            println!("{} plays {mv}", engine.name());
            if let Some(score) = out.best_score {
                println!("score {score}");
            }
        }
        None => println!("{side} has no moves and loses"),
    }
    Ok(())
}

fn run_perft(position: &PositionArgs, depth: u8, divide: bool) -> Result<(), String> {
    let mut game = position.build()?;
    let side = game.side_to_move();
    println!("{}\n", render_game_state(&game));

    if divide {
        for (mv, counts) in perft_divide(&mut game, side, depth) {
            println!("{mv}: {}", counts.nodes);
        }
    }
    let counts = perft(&mut game, side, depth);
    println!(
        "perft {depth}: nodes {} captures {} en_passant {} promotions {}",
        counts.nodes, counts.captures, counts.en_passant, counts.promotions
    );
    Ok(())
}

fn run_play(
    position: &PositionArgs,
    engine_args: &EngineArgs,
    random_black: bool,
    max_plies: usize,
) -> Result<(), String> {
    let mut game = position.build()?;
    let mut white = engine_args.engine();
    let mut black: Box<dyn Engine> = if random_black {
        Box::new(engine_args.random_engine())
    } else {
        engine_args.engine()
    };
    info!("{} (White) vs {} (Black)", white.name(), black.name());

    while game.ply() < max_plies && !game.is_finished(true) {
        let side = game.side_to_move();
        let engine = match side {
            Colour::White => &mut white,
            Colour::Black => &mut black,
        };
        let out = engine
            .choose_move(&mut game, side, &GoParams::default())
            .map_err(|e| e.to_string())?;
        let Some(mv) = out.best_move else {
            break;
        };
        game.apply_checked(mv).map_err(|e| e.to_string())?;
        println!("{:>3}. {side} {mv}", game.ply());
    }

    println!("\n{}\n", render_game_state(&game));
    println!("final position: {}", generate_diagram(&game));
    match game.game_result() {
        Some(winner) => println!("{winner} wins after {} plies", game.ply()),
        None => println!("undecided after {} plies", game.ply()),
    }
    Ok(())
}
