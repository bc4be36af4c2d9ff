//! Interactive console front end: name prompts, the setup and play menus, turn order, and
//! board rendering. All text goes through a generic writer and all randomness through an
//! injected [`Rng`], so whole sessions can be scripted.

use std::io::{self, BufRead, Write};

use log::{debug, info};
use rand::Rng;

use navalcombat::{
    board::BOARD_WIDTH, Coordinate, Game, Orientation, Player, ShotOutcome, VesselKind, FLEET,
};

use crate::parse::{format_square, parse_orientation, parse_square};

/// ANSI sequence that clears the terminal and homes the cursor.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Which of the two named players takes the first turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FirstTurn {
    /// The player named first.
    First,
    /// The player named second.
    Second,
    /// Decided by a coin flip.
    Random,
}

/// Helper to read input from the players.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B: BufRead> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }

    /// Read one line and trim it. Closed input is reported as
    /// [`io::ErrorKind::UnexpectedEof`].
    fn read_line(&mut self) -> io::Result<&str> {
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(self.buf.trim())
    }
}

/// A console session between two players sharing one terminal.
pub struct Console<B, W, R> {
    input: InputReader<B>,
    out: W,
    rng: R,
}

impl<B: BufRead, W: Write, R: Rng> Console<B, W, R> {
    /// Create a console reading commands from `read` and printing to `out`.
    pub fn new(read: B, out: W, rng: R) -> Self {
        Self {
            input: InputReader::new(read),
            out,
            rng,
        }
    }

    /// Run a whole session: names, turn order, both setups, and play until one fleet is
    /// gone or a player exits. Names not given are asked for.
    pub fn run(
        &mut self,
        player1: Option<String>,
        player2: Option<String>,
        first_turn: FirstTurn,
    ) -> io::Result<()> {
        let name1 = match player1 {
            Some(name) => name,
            None => self.ask_name("first", "Player 1")?,
        };
        let name2 = match player2 {
            Some(name) => name,
            None => self.ask_name("second", "Player 2")?,
        };
        let named_first_goes_first = match first_turn {
            FirstTurn::First => true,
            FirstTurn::Second => false,
            FirstTurn::Random => self.rng.gen::<Player>() == Player::P1,
        };
        // Whoever shoots first plays on player 1's side.
        let (first, second) = if named_first_goes_first {
            (name1, name2)
        } else {
            (name2, name1)
        };
        writeln!(self.out, "{}, you're going first!", first)?;
        writeln!(self.out, "{}, you're going second!", second)?;
        writeln!(self.out)?;
        info!("{} takes the first turn against {}", first, second);
        let mut game = Game::new(first, second);

        if self.setup(&mut game, Player::P1)? && self.setup(&mut game, Player::P2)? {
            self.play(&mut game)?;
            if let Some(winner) = game.winner() {
                let winner_name = game.player_name(winner);
                writeln!(
                    self.out,
                    "{} sank all of {}'s ships. {} wins!",
                    winner_name,
                    game.player_name(winner.opponent()),
                    winner_name
                )?;
            }
        } else {
            writeln!(self.out, "Player wants to quit.")?;
        }
        writeln!(self.out, "Thanks for playing.")
    }

    /// Print the prompt and read the answer.
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{} ", prompt)?;
        self.out.flush()?;
        Ok(self.input.read_line()?.to_owned())
    }

    /// Ask for a menu command. Returns the first word, uppercased.
    fn ask_command(&mut self, prompt: &str) -> io::Result<String> {
        let line = self.ask(prompt)?;
        Ok(line
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_ascii_uppercase())
    }

    fn ask_name(&mut self, ordinal: &str, default: &str) -> io::Result<String> {
        let name = self.ask(&format!("Name of the {} player [{}]:", ordinal, default))?;
        Ok(if name.is_empty() {
            default.to_owned()
        } else {
            name
        })
    }

    /// Setup menu for one player. Returns false if the player chose to exit.
    fn setup(&mut self, game: &mut Game, player: Player) -> io::Result<bool> {
        let name = game.player_name(player).to_owned();
        self.print_setup_menu(&name)?;
        loop {
            match self.ask_command("Enter command.")?.as_str() {
                "M" => self.print_setup_menu(&name)?,
                "I" => self.print_setup_instructions()?,
                "S" => {
                    self.place_fleet(game, player)?;
                    return Ok(true);
                }
                "A" => {
                    self.auto_place_fleet(game, player)?;
                    return Ok(true);
                }
                "O" => self.show_offensive(game, player)?,
                "D" => self.show_defensive(game, player)?,
                "R" => self.reset_screen()?,
                "E" => {
                    writeln!(self.out, "OK. We'll exit setup.")?;
                    return Ok(false);
                }
                _ => writeln!(self.out, "Invalid input. Please try again.")?,
            }
        }
    }

    /// Prompt for every fleet slot the player has not filled yet, re-prompting until each
    /// placement is accepted.
    fn place_fleet(&mut self, game: &mut Game, player: Player) -> io::Result<()> {
        let name = game.player_name(player).to_owned();
        writeln!(
            self.out,
            "{}: place your ships by typing <start square> and <orientation: DD DU V or H> and then pressing ENTER.",
            name
        )?;
        for slot in game.board().fleet(player).len()..FLEET.len() {
            let kind = FLEET[slot];
            let prompt = format!("{}'s {}", name, slot_label(slot));
            loop {
                let line = self.ask(&prompt)?;
                let tokens: Vec<&str> = line.split_whitespace().collect();
                let (anchor, orientation) = match tokens[..] {
                    [square, dir] => match (parse_square(square), parse_orientation(dir)) {
                        (Some(anchor), Some(orientation)) => (anchor, orientation),
                        _ => {
                            writeln!(self.out, "Invalid placement. Try again.")?;
                            continue;
                        }
                    },
                    _ => {
                        writeln!(
                            self.out,
                            "Invalid input. Please type <start square> and <orientation - DD DU V or H> and then press ENTER."
                        )?;
                        continue;
                    }
                };
                match game.place(player, kind, anchor, orientation) {
                    Ok(()) => break,
                    Err(err) => {
                        debug!("{}", err);
                        writeln!(self.out, "Invalid placement: {}. Try again.", err.reason())?;
                    }
                }
            }
            writeln!(self.out)?;
            writeln!(self.out, "Here's what your board looks like:")?;
            self.show_defensive(game, player)?;
        }
        Ok(())
    }

    /// Place every slot the player has not filled yet at a random legal position.
    fn auto_place_fleet(&mut self, game: &mut Game, player: Player) -> io::Result<()> {
        for &kind in FLEET[game.board().fleet(player).len()..].iter() {
            loop {
                let anchor: Coordinate = self.rng.gen();
                let orientation: Orientation = self.rng.gen();
                if game.place(player, kind, anchor, orientation).is_ok() {
                    debug!(
                        "auto-placed {} at {} facing {:?}",
                        kind,
                        format_square(anchor),
                        orientation
                    );
                    break;
                }
            }
        }
        writeln!(
            self.out,
            "{}'s fleet has been placed at random.",
            game.player_name(player)
        )?;
        self.show_defensive(game, player)
    }

    /// Play menu. Runs until the game is over or a player exits; player 1 shoots first.
    fn play(&mut self, game: &mut Game) -> io::Result<()> {
        let mut current = Player::P1;
        self.print_play_menu(game, current)?;
        while !game.is_over() {
            let prompt = format!("{}: please enter a command.", game.player_name(current));
            match self.ask_command(&prompt)?.as_str() {
                "T" => {
                    if self.take_shots(game, current)? {
                        current = current.opponent();
                        writeln!(self.out, "{}: it's your turn now.", game.player_name(current))?;
                    }
                }
                "I" => {
                    self.print_play_instructions()?;
                    self.print_play_menu(game, current)?;
                }
                "O" => self.show_offensive(game, current)?,
                "D" => self.show_defensive(game, current)?,
                "R" => self.reset_screen()?,
                "E" => {
                    writeln!(self.out, "OK. We'll exit the game.")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Invalid input. Please try again.")?,
            }
        }
        Ok(())
    }

    /// Let `attacker` keep firing until they miss or end the game. Returns true if the
    /// turn passes to the opponent.
    fn take_shots(&mut self, game: &mut Game, attacker: Player) -> io::Result<bool> {
        let prompt = format!(
            "{}: take a shot by specifying a square A1 through J10 you have not yet fired on.",
            game.player_name(attacker)
        );
        let defender = game.player_name(attacker.opponent()).to_owned();
        loop {
            let line = self.ask(&prompt)?;
            let target = match line.split_whitespace().next().and_then(parse_square) {
                Some(target) => target,
                None => {
                    writeln!(self.out, "Invalid target.")?;
                    continue;
                }
            };
            match game.fire_shot(attacker, target) {
                Ok(ShotOutcome::Hit) => writeln!(self.out, "Congratulations: Hit")?,
                Ok(ShotOutcome::HitAndSunk(kind)) => {
                    writeln!(
                        self.out,
                        "Congratulations: Hit and sunk {}'s {}!",
                        defender, kind
                    )?;
                    if game.is_over() {
                        return Ok(false);
                    }
                }
                Ok(ShotOutcome::AlreadyShot) => {
                    writeln!(self.out, "Unsuccessful")?;
                    writeln!(self.out, "You fired in the same spot. Please try again.")?;
                }
                Ok(ShotOutcome::Miss) => {
                    writeln!(self.out, "Miss")?;
                    return Ok(true);
                }
                Err(err) => {
                    debug!("{}", err);
                    writeln!(self.out, "Invalid target.")?;
                }
            }
        }
    }

    fn show_offensive(&mut self, game: &Game, player: Player) -> io::Result<()> {
        writeln!(self.out, "{}'s offensive board.", game.player_name(player))?;
        write_board(&mut self.out, &game.offensive_view(player))
    }

    fn show_defensive(&mut self, game: &Game, player: Player) -> io::Result<()> {
        writeln!(self.out, "{}'s defensive board.", game.player_name(player))?;
        write_board(&mut self.out, &game.defensive_view(player))
    }

    fn reset_screen(&mut self) -> io::Result<()> {
        write!(self.out, "{}", CLEAR_SCREEN)?;
        self.out.flush()
    }

    fn print_setup_menu(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "Hi {} you're in SETUP MODE.", name)?;
        writeln!(
            self.out,
            "Here's your battleship setup menu. Enter letter at the prompt below."
        )?;
        writeln!(
            self.out,
            "M - View menu options.
I - View setup instructions.
S - Setup my defensive board.
A - Setup my defensive board at random.
O - View my offensive board.
D - View my defensive board.
R - Reset screen to remove view of board(s).
E - Exit game."
        )?;
        writeln!(self.out)
    }

    fn print_setup_instructions(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "Setup Instructions.
During setup mode, you will need to place your aircraft
carrier, battleship, cruiser, and two destroyers
on a 10x10 grid. Specify the starting position for each ship by
entering a starting square of A1 through J10 and specify the
orientation by entering H for horizontal, V for vertical,
DD for diagonal down and DU for diagonal up. See sample input below.
Player1's aircraft carrier <starting square> <orientation: DD DU V or H>
Player1's aircraft carrier B2 H

The game will let you know if your placement is invalid or if
you already placed a ship in the specified location. The game shows
you your board after each ship placement.
"
        )
    }

    fn print_play_menu(&mut self, game: &Game, player: Player) -> io::Result<()> {
        writeln!(
            self.out,
            "Hi {} you're in PLAY MODE.",
            game.player_name(player)
        )?;
        writeln!(
            self.out,
            "Battleship Play Menu. Enter letter at the prompt below."
        )?;
        writeln!(self.out, "I - View play instructions.")?;
        writeln!(
            self.out,
            "T - Take a shot at {}'s ships.",
            game.player_name(player.opponent())
        )?;
        writeln!(
            self.out,
            "O - View my offensive board.
D - View my defensive board.
R - Reset screen to remove view of board(s).
E - Exit game."
        )
    }

    fn print_play_instructions(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "Play Instructions.
When it's a player's turn, the player can take several actions.
O and ENTER to view offensive board, D and ENTER to view defensive board.
To take a shot, a player types 'T' and then presses ENTER.
Then the player enters a square A1 through J10 where a missile will be shot.
The game responds three ways: Miss, Hit and continue, Hit and ship sunk.
If a player hits the other player's ship, they get another shot.
Play continues until one player has sunk all the other player's ships."
        )
    }
}

/// Label for a fleet slot during setup. Kinds that fill more than one slot are numbered.
fn slot_label(slot: usize) -> String {
    let kind = FLEET[slot];
    let same_kind = |other: &&VesselKind| **other == kind;
    if FLEET.iter().filter(same_kind).count() > 1 {
        let nth = FLEET[..=slot].iter().filter(same_kind).count();
        format!("{}{}", kind.name(), nth)
    } else {
        kind.name().to_owned()
    }
}

/// Print a row-major view as a bordered grid with column numbers and row letters.
fn write_board<W: Write>(out: &mut W, cells: &[char]) -> io::Result<()> {
    write!(out, "  ")?;
    for col in 1..=BOARD_WIDTH {
        write!(out, "{:>4}", col)?;
    }
    writeln!(out)?;
    writeln!(out, "   +{}", "---+".repeat(BOARD_WIDTH))?;
    for (row, cells) in cells.chunks(BOARD_WIDTH).enumerate() {
        write!(out, " {} |", (b'A' + row as u8) as char)?;
        for cell in cells {
            write!(out, " {} |", cell)?;
        }
        writeln!(out)?;
        writeln!(out, "   |{}---|", "---+".repeat(BOARD_WIDTH - 1))?;
    }
    writeln!(out)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use navalcombat::CELL_COUNT;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    type TestConsole<'a> = Console<Cursor<&'a [u8]>, Vec<u8>, StdRng>;

    fn console(script: &str) -> TestConsole {
        Console::new(
            Cursor::new(script.as_bytes()),
            Vec::new(),
            StdRng::seed_from_u64(7),
        )
    }

    /// Run a scripted session between Ahab and Nemo. Returns the result and everything
    /// printed.
    fn run_script(lines: &[&str], first_turn: FirstTurn) -> (io::Result<()>, String) {
        let mut script = lines.join("\n");
        script.push('\n');
        let mut console = console(&script);
        let result = console.run(Some("Ahab".into()), Some("Nemo".into()), first_turn);
        let output = String::from_utf8(console.out).unwrap();
        (result, output)
    }

    /// Fleet on rows A..E, each vessel starting in column 1.
    const ROW_FLEET: [&str; 5] = ["A1 H", "B1 H", "C1 H", "D1 H", "E1 H"];

    fn setup_rows() -> Vec<&'static str> {
        let mut lines = vec!["S"];
        lines.extend_from_slice(&ROW_FLEET);
        lines
    }

    #[test]
    fn full_game() {
        let mut lines = setup_rows();
        lines.extend(setup_rows());
        lines.push("T");
        lines.extend_from_slice(&[
            "A1", "A2", "A3", "A4", "A5", "B1", "B2", "B3", "B4", "C1", "C2", "C3", "D1", "D2",
            "E1", "E2",
        ]);
        let (result, output) = run_script(&lines, FirstTurn::First);
        result.unwrap();

        assert!(output.contains("Ahab, you're going first!\nNemo, you're going second!\n"));
        assert!(output.contains("Hi Ahab you're in SETUP MODE."));
        assert!(output.contains("Hi Nemo you're in SETUP MODE."));
        assert!(output.contains("Ahab's destroyer1"));
        assert!(output.contains("Nemo's destroyer2"));
        assert_eq!(output.matches("Congratulations: Hit\n").count(), 11);
        for kind in VesselKind::ALL {
            assert!(output.contains(&format!(
                "Congratulations: Hit and sunk Nemo's {}!",
                kind.name()
            )));
        }
        assert!(!output.contains("it's your turn now"));
        assert!(output.ends_with("Ahab sank all of Nemo's ships. Ahab wins!\nThanks for playing.\n"));
    }

    #[test]
    fn second_named_player_can_go_first() {
        let (result, output) = run_script(&["E"], FirstTurn::Second);
        result.unwrap();
        assert!(output.starts_with("Nemo, you're going first!\nAhab, you're going second!\n"));
        assert!(output.contains("Hi Nemo you're in SETUP MODE."));
        assert!(output.contains("OK. We'll exit setup.\nPlayer wants to quit.\nThanks for playing.\n"));
    }

    #[test]
    fn coin_flip_picks_one_of_the_players() {
        let (result, output) = run_script(&["E"], FirstTurn::Random);
        result.unwrap();
        assert!(
            output.starts_with("Ahab, you're going first!")
                || output.starts_with("Nemo, you're going first!")
        );
    }

    #[test]
    fn missing_names_are_prompted() {
        let mut console = console("Ahab\n\nE\n");
        console.run(None, None, FirstTurn::First).unwrap();
        let output = String::from_utf8(console.out).unwrap();
        assert!(output.contains("Name of the first player [Player 1]:"));
        assert!(output.contains("Ahab, you're going first!\nPlayer 2, you're going second!\n"));
    }

    #[test]
    fn bad_setup_input_is_reprompted() {
        let lines = [
            "X", "S", "Z1 H", "A1", "A8 H", "A1 H", "A1 V", "B1 H", "C1 H", "D1 H", "E1 H", "E",
        ];
        let (result, output) = run_script(&lines, FirstTurn::First);
        result.unwrap();

        assert!(output.contains("Invalid input. Please try again."));
        assert!(output.contains("Invalid placement. Try again."));
        assert!(output.contains("Invalid input. Please type <start square>"));
        assert!(output.contains(
            "Invalid placement: insufficient space for the vessel at the specified position. Try again."
        ));
        assert!(output.contains(
            "Invalid placement: the requested position was already occupied. Try again."
        ));
        assert_eq!(output.matches("Here's what your board looks like:").count(), 5);
        assert!(output.contains("OK. We'll exit setup.\nPlayer wants to quit."));
    }

    #[test]
    fn repeat_shot_and_miss() {
        let mut lines = setup_rows();
        lines.extend(setup_rows());
        lines.extend_from_slice(&["T", "A1", "A1", "K1", "", "J10", "O", "E"]);
        let (result, output) = run_script(&lines, FirstTurn::First);
        result.unwrap();

        assert!(output.contains("Congratulations: Hit\n"));
        assert!(output.contains("Unsuccessful\nYou fired in the same spot. Please try again.\n"));
        assert_eq!(output.matches("Invalid target.").count(), 2);
        assert!(output.contains("Miss\nNemo: it's your turn now.\n"));
        assert!(output.contains("Nemo's offensive board."));
        assert!(output.contains("OK. We'll exit the game.\nThanks for playing.\n"));
        assert!(!output.contains("wins!"));
    }

    #[test]
    fn closed_input_is_eof() {
        let (result, _) = run_script(&["S", "A1 H"], FirstTurn::First);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn auto_placement_fills_remaining_slots() {
        let mut console = console("A\n");
        let mut game = Game::new("Ahab", "Nemo");
        game.place(
            Player::P1,
            VesselKind::AircraftCarrier,
            Coordinate::new(9, 0),
            Orientation::Horizontal,
        )
        .unwrap();
        assert!(console.setup(&mut game, Player::P1).unwrap());

        assert_eq!(game.live_ships(Player::P1), FLEET.len());
        let kinds: Vec<_> = game
            .board()
            .fleet(Player::P1)
            .iter()
            .map(|vessel| vessel.kind())
            .collect();
        assert_eq!(kinds, FLEET.to_vec());
        let view = game.defensive_view(Player::P1);
        assert_eq!(view.iter().filter(|&&c| c != ' ').count(), 16);
        assert!(view[90..95].iter().all(|&c| c == 'A'));
        assert_eq!(game.live_ships(Player::P2), 0);
    }

    #[test]
    fn fleet_slot_labels() {
        assert_eq!(slot_label(0), "aircraft carrier");
        assert_eq!(slot_label(2), "cruiser");
        assert_eq!(slot_label(3), "destroyer1");
        assert_eq!(slot_label(4), "destroyer2");
    }

    #[test]
    fn board_layout() {
        let mut cells = [' '; CELL_COUNT];
        cells[0] = 'H';
        cells[CELL_COUNT - 1] = 'M';
        let mut out = Vec::new();
        write_board(&mut out, &cells).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "     1   2   3   4   5   6   7   8   9  10");
        assert_eq!(lines[1], "   +---+---+---+---+---+---+---+---+---+---+");
        assert_eq!(lines[2], " A | H |   |   |   |   |   |   |   |   |   |");
        assert_eq!(lines[3], "   |---+---+---+---+---+---+---+---+---+---|");
        assert_eq!(lines[4], " B |   |   |   |   |   |   |   |   |   |   |");
        assert_eq!(lines[20], " J |   |   |   |   |   |   |   |   |   | M |");
        assert_eq!(lines.len(), 24);
    }
}
