//! Parsing and printing of moves in letter notation.
//!
//! A token is a face letter (`U` or `T`, `L`, `F`, `R`, `B`, `D`) followed
//! by an optional amount: `1`, `2` or `3` clockwise quarter turns, `0` for a
//! logged no-op, or `I`/`'` for anticlockwise. A leading `@` makes the token
//! a whole-cube reorientation instead of a face turn. Case doesn't matter.

use std::fmt::{self, Display, Formatter, Write};
use std::str::FromStr;

use anyhow::bail;

use crate::{Face, Move, MoveKind};

/// Parses whitespace-separated move tokens, dropping anything that isn't
/// one. Use [`Move`]'s `FromStr` to reject bad tokens instead.
pub fn parse_moves(input: &str) -> Vec<Move> {
    input
        .split_whitespace()
        .filter_map(|token| token.parse().ok())
        .collect()
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = match s.strip_prefix('@') {
            Some(rest) => (MoveKind::Reorient, rest),
            None => (MoveKind::Turn, s),
        };
        let mut chars = rest.chars();
        let Some(letter) = chars.next() else {
            bail!("empty move")
        };
        let face = match letter.to_ascii_uppercase() {
            'U' | 'T' => Face::Up,
            'L' => Face::Left,
            'F' => Face::Front,
            'R' => Face::Right,
            'B' => Face::Back,
            'D' => Face::Down,
            _ => bail!("unknown face {letter:?}"),
        };
        let amount = match chars.as_str() {
            "" => 1,
            "0" => 0,
            "1" => 1,
            "2" => 2,
            "3" | "i" | "I" | "'" => 3,
            suffix => bail!("unknown turn amount {suffix:?}"),
        };
        Ok(Self { kind, face, amount })
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.kind == MoveKind::Reorient {
            f.write_char('@')?;
        }
        f.write_char(self.face.letter())?;
        match self.amount & 0b11 {
            1 => Ok(()),
            3 => f.write_char('\''),
            amount => write!(f, "{amount}"),
        }
    }
}
