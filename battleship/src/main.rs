use std::io;

use clap::{value_t, App, Arg};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::console::{Console, FirstTurn};

mod console;
mod parse;

fn main() -> io::Result<()> {
    pretty_env_logger::init_custom_env("BATTLESHIP_LOG");

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Two-player battleship for a shared terminal.")
        .arg(
            Arg::with_name("player1")
                .long("player1")
                .value_name("NAME")
                .help("name of the first player")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("player2")
                .long("player2")
                .value_name("NAME")
                .help("name of the second player")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("first")
                .short("f")
                .long("first")
                .value_name("FIRST")
                .help("pre-specify which player goes first instead of flipping a coin")
                .takes_value(true)
                .possible_values(&["p1", "p2", "random"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for the coin flip and random ship placement")
                .takes_value(true),
        )
        .get_matches();

    let first_turn = match matches.value_of("first").map(str::to_ascii_lowercase) {
        Some(ref choice) if choice == "p1" => FirstTurn::First,
        Some(ref choice) if choice == "p2" => FirstTurn::Second,
        _ => FirstTurn::Random,
    };
    let rng = if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        info!("using seed {}", seed);
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), rng);
    let result = console.run(
        matches.value_of("player1").map(String::from),
        matches.value_of("player2").map(String::from),
        first_turn,
    );
    match result {
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            println!();
            info!("input closed, leaving the game");
            Ok(())
        }
        other => other,
    }
}
