//! Command-line card game.

use std::ffi::OsString;

use clap::{ArgAction, Parser};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use suitscore::{Card, Deck, Game, GameOptions, RunError};

#[derive(Debug, Parser)]
#[command(name = "suitscore", about = "Deal a suit-times-rank card game")]
struct Args {
    /// Player names in seating order
    #[arg(default_values = ["Bob", "Chuck"])]
    players: Vec<OsString>,

    /// Maximum number of players allowed at the table
    #[arg(long, default_value_t = 2)]
    max_players: usize,

    /// Turns per game; every player draws once per turn
    #[arg(long, default_value_t = 3)]
    turns: usize,

    /// Shuffle seed (drawn from the OS when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play with the same players
    #[arg(long, default_value_t = 1)]
    rounds: usize,

    /// Refill the deck between games instead of playing on from what is left
    #[arg(long)]
    reset_deck: bool,

    /// Print each player's hand, sorted, after every game
    #[arg(long)]
    show_hands: bool,

    /// Log verbosity (-v warnings, -vv outcomes, -vvv every draw)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("logger already initialized");
    }
}

fn print_events(game: &mut Game) {
    for event in game.take_events() {
        if event.is_diagnostic() {
            eprintln!("{event}");
        } else {
            println!("{event}");
        }
    }
}

fn format_hand(cards: &[Card]) -> String {
    Deck::sort_cards(cards)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = GameOptions::default()
        .with_max_players(args.max_players)
        .with_turns(args.turns);
    let mut game = match args.seed {
        Some(seed) => Game::new(options, seed),
        None => Game::from_entropy(options),
    };

    for name in &args.players {
        // Rejections are reported through the transcript.
        let _ = game.add_player(name.as_encoded_bytes());
    }
    print_events(&mut game);

    for round in 1..=args.rounds.max(1) {
        if round > 1 {
            game.new_game(args.reset_deck);
            game.take_events();
            println!();
        }
        if args.rounds > 1 {
            println!("Game {round} ({} cards in deck)", game.cards_remaining());
        }

        let result = game.run_game();
        print_events(&mut game);

        if args.show_hands {
            for player in game.players() {
                println!("{}: {}", player.name(), format_hand(player.hand()));
            }
        }

        match result {
            Ok(_) => {}
            Err(RunError::NotEnoughPlayers { .. }) => break,
            Err(_) if !args.reset_deck => break,
            Err(_) => {}
        }
    }
}
