//! The hot-seat game loop: prompt, submit, render, repeat.

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use gobblet_core::{Coord, GameState, Origin, Player, Status};
use tracing::{debug, info};

/// One local game between two named players.
pub struct Session {
    game: GameState,
    names: [String; 2],
    save: Option<PathBuf>,
}

impl Session {
    pub fn new(game: GameState, names: [String; 2], save: Option<PathBuf>) -> Self {
        Self { game, names, save }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.names[0],
            Player::Two => &self.names[1],
        }
    }

    /// Both reserves, then the board.
    pub fn render(&self) -> String {
        let width = self.names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
        let mut out = String::new();
        for player in Player::all() {
            out.push_str(&format!(
                "{:>width$}:  {}\n",
                self.name(player),
                self.game.inventory(player)
            ));
        }
        out.push('\n');
        out.push_str(&self.game.board().to_string());
        out.push('\n');
        out
    }

    /// Play until someone wins or input runs out. Returns the winner, if any.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<Option<Player>> {
        loop {
            writeln!(output, "\n{}", self.render())?;

            if let Status::Won(winner) = self.game.status() {
                writeln!(output, "{} wins!", self.name(winner))?;
                return Ok(Some(winner));
            }

            let player = self.game.current_player();
            let prompt = format!("{}, move from a stack (0-2) or a cell (x,y): ", self.name(player));
            let Some(origin) = ask::<Origin, _, _>(&mut input, &mut output, &prompt)? else {
                return Ok(None);
            };
            let Some(destination) = ask::<Coord, _, _>(&mut input, &mut output, "to cell (x,y): ")? else {
                return Ok(None);
            };

            match self.game.apply_move(origin, destination) {
                Ok(_) => self.persist()?,
                Err(err) => writeln!(output, "Illegal move: {err}")?,
            }
        }
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.save else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.game)?;
        fs::write(path, json).with_context(|| format!("failed to save game to {}", path.display()))?;
        debug!(path = %path.display(), "game saved");
        Ok(())
    }
}

/// Prompt until the answer parses. `None` on end of input.
fn ask<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = gobblet_core::GameError>,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            info!("input closed");
            return Ok(None);
        }
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn names() -> [String; 2] {
        ["Ada".to_string(), "Bo".to_string()]
    }

    fn play(script: &str) -> (Session, Option<Player>, String) {
        let mut session = Session::new(GameState::standard(), names(), None);
        let mut output = Vec::new();
        let winner = session.run(Cursor::new(script.to_string()), &mut output).unwrap();
        (session, winner, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_game_to_a_win() {
        let script = "0\n0,0\n0\n0,2\n0\n1,0\n0\n1,2\n0\n2,0\n0\n2,2\n1\n3,0\n";
        let (session, winner, output) = play(script);

        assert_eq!(winner, Some(Player::One));
        assert!(output.ends_with("Ada wins!\n"));
        assert_eq!(session.game().moves_played(), 7);
    }

    #[test]
    fn test_bad_input_is_reported_and_asked_again() {
        let (session, winner, output) = play("7\nhello\n0\n9,9\n1,1\n");

        assert_eq!(winner, None);
        assert!(output.contains("reserve stack 7 does not exist"));
        assert!(output.contains("cannot read"));
        assert!(output.contains("outside the 4x4 board"));
        assert_eq!(session.game().current_player(), Player::Two);
    }

    #[test]
    fn test_illegal_move_keeps_the_turn() {
        let (session, _, output) = play("0\n0,0\n0\n0,0\n");

        assert!(output.contains("Illegal move:"));
        assert_eq!(session.game().current_player(), Player::Two);
        assert_eq!(session.game().moves_played(), 1);
    }

    #[test]
    fn test_render_aligns_names() {
        let session = Session::new(GameState::standard(), names(), None);
        let rendered = session.render();
        assert!(rendered.starts_with("Ada:  □   □   □\n Bo:  ■   ■   ■\n\n3 "));
    }

    #[test]
    fn test_save_after_each_move() {
        let path = std::env::temp_dir().join(format!("gobblet-session-{}.json", std::process::id()));
        let mut session = Session::new(GameState::standard(), names(), Some(path.clone()));
        session.run(Cursor::new("2\n3,3\n"), Vec::new()).unwrap();

        let saved: GameState = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(&saved, session.game());
        fs::remove_file(path).ok();
    }
}
