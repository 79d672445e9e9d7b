//! Console I/O - board printing and keyboard-driven player

use std::io::{self, BufRead, BufReader, Stdin, Write};
use std::sync::Mutex;

use rand::RngCore;
use streak_core::{Board, Mark, Player, Pos, Renderer};
use tracing::{debug, warn};

// ============================================================================
// CONSOLE RENDERER
// ============================================================================

/// Prints every board to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render(&self, board: &Board) {
        println!("{}", board);
    }
}

// ============================================================================
// HUMAN PLAYER
// ============================================================================

/// Why a line of input was not accepted as a move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rejection {
    NotANumber,
    OutOfBounds,
    Occupied,
}

impl Rejection {
    fn prompt(self) -> &'static str {
        match self {
            Rejection::NotANumber => "Please type a number such as 12 for row 1, column 2: ",
            Rejection::OutOfBounds => "Invalid mark position. Please choose a valid position: ",
            Rejection::Occupied => "Mark position is already occupied. Please choose a valid position: ",
        }
    }
}

/// Reads moves typed as `row * 10 + col`, re-prompting until a free cell is given
pub struct HumanPlayer<R> {
    input: Mutex<R>,
}

impl HumanPlayer<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead + Send> HumanPlayer<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }
}

impl<R: BufRead + Send> Player for HumanPlayer<R> {
    fn select_move(&self, board: &Board, mark: Mark, _rng: &mut dyn RngCore) -> Option<Pos> {
        if board.is_full() {
            return None;
        }
        let mut input = self.input.lock().ok()?;

        prompt(&format!("Player {} type coordinates: ", mark));
        loop {
            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => {
                    warn!("failed to read move: {}", err);
                    return None;
                }
            }

            match parse_move(board, &line) {
                Ok(pos) => return Some(pos),
                Err(rejection) => {
                    debug!(typed = line.trim(), ?rejection, "rejected move");
                    prompt(rejection.prompt());
                }
            }
        }
    }
}

/// Decode one line of input into a free cell on `board`
fn parse_move(board: &Board, line: &str) -> Result<Pos, Rejection> {
    let code: i32 = line.trim().parse().map_err(|_| Rejection::NotANumber)?;
    let pos = Pos::decode(code);

    if !board.contains(pos) {
        Err(Rejection::OutOfBounds)
    } else if !board.get(pos).is_empty() {
        Err(Rejection::Occupied)
    } else {
        Ok(pos)
    }
}

fn prompt(text: &str) {
    print!("{}", text);
    // A failed flush only delays the prompt
    let _ = io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0)
    }

    #[test]
    fn test_parse_move() {
        let mut board = Board::new(4).unwrap();
        board.put(Mark::X, Pos::new(1, 1));

        assert_eq!(parse_move(&board, "23\n"), Ok(Pos::new(2, 3)));
        assert_eq!(parse_move(&board, " 0 "), Ok(Pos::new(0, 0)));
        assert_eq!(parse_move(&board, "11"), Err(Rejection::Occupied));
        assert_eq!(parse_move(&board, "44"), Err(Rejection::OutOfBounds));
        assert_eq!(parse_move(&board, "-3"), Err(Rejection::OutOfBounds));
        assert_eq!(parse_move(&board, "abc"), Err(Rejection::NotANumber));
        assert_eq!(parse_move(&board, ""), Err(Rejection::NotANumber));
    }

    #[test]
    fn test_human_player_retries_until_valid() {
        let mut board = Board::new(3).unwrap();
        board.put(Mark::O, Pos::new(0, 0));
        let player = HumanPlayer::new(Cursor::new("x\n99\n0\n12\n"));

        let pos = player.select_move(&board, Mark::X, &mut rng());
        assert_eq!(pos, Some(Pos::new(1, 2)));
    }

    #[test]
    fn test_human_player_reads_successive_moves() {
        let board = Board::new(3).unwrap();
        let player = HumanPlayer::new(Cursor::new("1\n21\n"));

        assert_eq!(player.select_move(&board, Mark::X, &mut rng()), Some(Pos::new(0, 1)));
        assert_eq!(player.select_move(&board, Mark::X, &mut rng()), Some(Pos::new(2, 1)));
    }

    #[test]
    fn test_human_player_end_of_input() {
        let board = Board::new(3).unwrap();
        let player = HumanPlayer::new(Cursor::new("77\n"));
        assert_eq!(player.select_move(&board, Mark::O, &mut rng()), None);
    }
}
