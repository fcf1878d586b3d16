//! The cube itself: six sticker grids driven by face turns and whole-cube
//! spins, plus the history that records everything applied to them.

use std::array;
use std::fmt::{self, Display, Formatter, Write};

use arbitrary::Arbitrary;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Face, Grid};
use Face::*;

/// Which kind of operation a [`Move`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Arbitrary)]
pub enum MoveKind {
    /// Turning one face's outer layer.
    Turn,
    /// Spinning the whole cube about a face's axis.
    Reorient,
}

/// One entry in a cube's history.
///
/// `amount` is in clockwise quarter turns; the constructors normalize it to
/// 0..=3, and everything consuming a `Move` re-normalizes, so hand-built
/// values with larger amounts still behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub kind: MoveKind,
    pub face: Face,
    pub amount: u8,
}

impl Move {
    /// A turn of `face` by any number of clockwise quarter turns.
    pub fn turn(face: Face, amount: i8) -> Self {
        Self {
            kind: MoveKind::Turn,
            face,
            amount: (amount & 0b11) as u8,
        }
    }

    /// A spin of the whole cube about `face` by any number of clockwise
    /// quarter turns.
    pub fn reorient(face: Face, amount: i8) -> Self {
        Self {
            kind: MoveKind::Reorient,
            face,
            amount: (amount & 0b11) as u8,
        }
    }

    /// Returns the move which undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            amount: match self.amount & 0b11 {
                0 => 0,
                amount => 4 - amount,
            },
            ..self
        }
    }
}

impl<'a> Arbitrary<'a> for Move {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self {
            kind: u.arbitrary()?,
            face: u.arbitrary()?,
            amount: u.int_in_range(0..=3)?,
        })
    }
}

/// Returns the sequence of moves which undoes `moves`.
pub fn invert(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

/// Picks `length` random face turns, with amounts from 1 to 3.
pub fn scramble(rng: &mut impl Rng, length: usize) -> Vec<Move> {
    (0..length)
        .map(|_| {
            let face = Face::ALL[rng.gen_range(0..Face::ALL.len())];
            Move::turn(face, rng.gen_range(1..=3))
        })
        .collect()
}

/// An n×n×n cube.
///
/// The six grids are indexed by `Face`, and a fresh cube is solved, with
/// every grid solid in its own face. All mutation goes through
/// [`Cube::turn`] and [`Cube::reorient`], which log what they did, so
/// replaying a cube's history onto a fresh cube of the same size reproduces
/// it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cube {
    faces: [Grid; 6],
    history: Vec<Move>,
}

impl Cube {
    /// The size substituted when [`Cube::new`] is passed 0.
    pub const DEFAULT_SIZE: u8 = 3;

    /// Creates a solved cube with `size` stickers along each edge, treating
    /// 0 as [`Cube::DEFAULT_SIZE`].
    pub fn new(size: u8) -> Self {
        let size = if size == 0 { Self::DEFAULT_SIZE } else { size };
        Self {
            faces: Face::ALL.map(|face| Grid::solid(size, face)),
            history: Vec::new(),
        }
    }

    pub fn size(&self) -> u8 {
        self.faces[0].size()
    }

    /// The grid of stickers currently sitting in `face`'s slot.
    pub fn face(&self, face: Face) -> &Grid {
        &self.faces[face.index()]
    }

    /// Every operation applied since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Turns `face`'s outer layer by `amount` clockwise quarter turns
    /// (negative for anticlockwise). An amount of 0 moves nothing but is
    /// still logged.
    pub fn turn(&mut self, face: Face, amount: i8) {
        let mv = Move::turn(face, amount);
        self.apply_turn(mv.face, mv.amount);
        self.history.push(mv);
    }

    /// Spins the whole cube about `face`'s axis by `amount` clockwise
    /// quarter turns, as seen looking at that face. This only relabels which
    /// grid sits in which slot; no sticker moves relative to any other, so a
    /// solved cube stays solved.
    pub fn reorient(&mut self, face: Face, amount: i8) {
        let mv = Move::reorient(face, amount);
        self.apply_reorient(mv.face, mv.amount);
        self.history.push(mv);
    }

    /// Applies (and logs) one move.
    pub fn apply(&mut self, mv: Move) {
        match mv.kind {
            MoveKind::Turn => self.turn(mv.face, mv.amount as i8),
            MoveKind::Reorient => self.reorient(mv.face, mv.amount as i8),
        }
    }

    /// Applies a whole sequence of moves in order.
    pub fn apply_all(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.apply(mv);
        }
    }

    /// Undoes the most recent move, removes it from the history and returns
    /// it. Returns `None` if there's nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        let inverse = mv.inverse();
        match inverse.kind {
            MoveKind::Turn => self.apply_turn(inverse.face, inverse.amount),
            MoveKind::Reorient => self.apply_reorient(inverse.face, inverse.amount),
        }
        Some(mv)
    }

    /// Puts every sticker back on its own face and clears the history.
    pub fn reset(&mut self) {
        let size = self.size();
        self.faces = Face::ALL.map(|face| Grid::solid(size, face));
        self.history.clear();
    }

    /// Whether every face is covered in matching stickers. Which face the
    /// stickers belong to doesn't matter, so a cube that's merely been
    /// reoriented still counts as solved.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(Grid::is_uniform)
    }

    fn apply_turn(&mut self, face: Face, amount: u8) {
        self.faces[face.index()] = self.faces[face.index()].rotate(amount as i8);
        let ring = face.neighbours();
        // Read all four edges before writing any of them.
        let edges: [Vec<Face>; 4] =
            array::from_fn(|i| self.faces[ring[i].0.index()].edge(ring[i].1));
        for (i, edge) in edges.iter().enumerate() {
            let (neighbour, side) = ring[(i + usize::from(amount)) % 4];
            self.faces[neighbour.index()].set_edge(side, edge);
        }
    }

    fn apply_reorient(&mut self, face: Face, amount: u8) {
        for _ in 0..amount {
            let prior = self.faces.clone();
            for (slot, (source, turns)) in Face::ALL.into_iter().zip(face.reorient_sources()) {
                self.faces[slot.index()] = prior[source.index()].rotate(turns);
            }
        }
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

/// Displays the cube as an unfolded net: the up face on top, then the four
/// side faces left to right in index order, then the down face. Each sticker
/// is printed as its face's index.
impl Display for Cube {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let indent = "  ".repeat(usize::from(self.size()));
        for (i, row) in self.face(Up).rows().enumerate() {
            if i != 0 {
                f.write_char('\n')?;
            }
            f.write_str(&indent)?;
            for &sticker in row {
                write!(f, "{} ", sticker.index())?;
            }
        }
        for r in 0..self.size() {
            f.write_char('\n')?;
            for face in [Left, Front, Right, Back] {
                let grid = self.face(face);
                for c in 0..self.size() {
                    write!(f, "{} ", grid[(r, c)].index())?;
                }
            }
        }
        for row in self.face(Down).rows() {
            f.write_char('\n')?;
            f.write_str(&indent)?;
            for &sticker in row {
                write!(f, "{} ", sticker.index())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    /// A cube put through a fixed mix of turns and spins.
    fn scrambled(size: u8) -> Cube {
        let mut cube = Cube::new(size);
        cube.turn(Front, 1);
        cube.turn(Right, 3);
        cube.turn(Up, 2);
        cube.reorient(Left, 1);
        cube.turn(Back, 3);
        cube.turn(Down, 2);
        cube.reorient(Up, 3);
        cube.turn(Front, 2);
        cube.turn(Left, 1);
        cube
    }

    #[test]
    fn new_cube() {
        let cube = Cube::new(4);
        assert_eq!(cube.size(), 4);
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());
        for face in Face::ALL {
            assert_eq!(cube.face(face), &Grid::solid(4, face));
        }
        assert_eq!(Cube::new(0).size(), Cube::DEFAULT_SIZE);
        assert_eq!(Cube::default().size(), 3);
    }

    #[test]
    fn front_turn() {
        let mut cube = Cube::new(3);
        cube.turn(Front, 1);

        assert_eq!(cube.face(Front), &Grid::solid(3, Front));
        assert_eq!(cube.face(Back), &Grid::solid(3, Back));
        let (up, left, right, down) = (
            cube.face(Up),
            cube.face(Left),
            cube.face(Right),
            cube.face(Down),
        );
        for i in 0..3 {
            // The up face's bottom row came from the left face.
            assert_eq!([up[(0, i)], up[(1, i)], up[(2, i)]], [Up, Up, Left]);
            // The left face's right column came from the down face.
            assert_eq!([left[(i, 0)], left[(i, 1)], left[(i, 2)]], [Left, Left, Down]);
            // The right face's left column came from the up face.
            assert_eq!([right[(i, 0)], right[(i, 1)], right[(i, 2)]], [Up, Right, Right]);
            // The down face's top row came from the right face.
            assert_eq!([down[(0, i)], down[(1, i)], down[(2, i)]], [Right, Down, Down]);
        }
        assert!(!cube.is_solved());
        assert_eq!(cube.history(), &[Move::turn(Front, 1)]);
    }

    #[test]
    fn wide_turn_edges() {
        let mut cube = Cube::new(5);
        cube.turn(Right, 1);

        assert_eq!(cube.face(Right), &Grid::solid(5, Right));
        assert_eq!(cube.face(Left), &Grid::solid(5, Left));
        let (up, front, down, back) = (
            cube.face(Up),
            cube.face(Front),
            cube.face(Down),
            cube.face(Back),
        );
        for r in 0..5 {
            for c in 0..4 {
                assert_eq!(front[(r, c)], Front);
                assert_eq!(up[(r, c)], Up);
                assert_eq!(down[(r, c)], Down);
                assert_eq!(back[(r, c + 1)], Back);
            }
            assert_eq!(front[(r, 4)], Down);
            assert_eq!(up[(r, 4)], Front);
            assert_eq!(down[(r, 4)], Back);
            assert_eq!(back[(r, 0)], Up);
        }
    }

    #[test]
    fn turn_then_inverse() {
        for face in Face::ALL {
            for amount in 0..4 {
                let mut cube = scrambled(3);
                let before = cube.faces.clone();
                cube.turn(face, amount);
                cube.turn(face, -amount);
                assert_eq!(cube.faces, before);
            }
        }
    }

    #[test]
    fn four_quarter_turns() {
        let mut cube = scrambled(4);
        let before = cube.faces.clone();
        for face in Face::ALL {
            for _ in 0..4 {
                cube.turn(face, 1);
            }
            assert_eq!(cube.faces, before);
        }
    }

    #[test]
    fn amounts_normalize() {
        let mut a = Cube::new(3);
        let mut b = Cube::new(3);
        a.turn(Up, -1);
        b.turn(Up, 3);
        assert_eq!(a.faces, b.faces);
        a.reorient(Back, 6);
        b.reorient(Back, 2);
        assert_eq!(a.faces, b.faces);
    }

    #[test]
    fn zero_amount_is_logged() {
        let mut cube = scrambled(3);
        let before = cube.faces.clone();
        cube.turn(Back, 0);
        cube.reorient(Left, 0);
        assert_eq!(cube.faces, before);
        let logged = &cube.history()[cube.history().len() - 2..];
        assert_eq!(logged, &[Move::turn(Back, 0), Move::reorient(Left, 0)]);
    }

    #[test]
    fn reorient_preserves_solved() {
        let mut cube = Cube::new(5);
        for (face, amount) in [(Up, 1), (Front, 2), (Left, 3), (Down, 1), (Back, 2), (Right, 1)] {
            cube.reorient(face, amount);
            assert!(cube.is_solved());
        }
    }

    #[test]
    fn reorient_round_trip() {
        let mut cube = scrambled(3);
        let before = cube.faces.clone();
        for face in Face::ALL {
            for amount in 0..4 {
                cube.reorient(face, amount);
                cube.reorient(face, 4 - amount);
                assert_eq!(cube.faces, before);
            }
        }
    }

    #[test]
    fn solved_accepts_relabelled_faces() {
        let mut cube = Cube::new(3);
        cube.reorient(Front, 1);
        assert!(cube.is_solved());
        // The up slot now holds the left face's stickers.
        assert_eq!(cube.face(Up), &Grid::solid(3, Left));
    }

    /// On a 1×1×1 cube a face turn and a whole-cube spin are the same
    /// physical motion, which pits the two adjacency tables against each
    /// other.
    #[test]
    fn single_cubie() {
        for face in Face::ALL {
            for amount in 0..4 {
                let mut turned = Cube::new(1);
                let mut spun = Cube::new(1);
                turned.turn(face, amount);
                spun.reorient(face, amount);
                assert_eq!(turned.faces, spun.faces);
            }
        }
    }

    #[test]
    fn replay_matches_live() {
        let live = scrambled(3);
        let mut replayed = Cube::new(3);
        replayed.apply_all(live.history().to_vec());
        assert_eq!(replayed, live);
    }

    #[test]
    fn inverted_history_solves() {
        let mut cube = scrambled(4);
        let undoing = invert(cube.history());
        cube.apply_all(undoing);
        // Not just uniform: every sticker is back on its own face.
        for face in Face::ALL {
            assert_eq!(cube.face(face), &Grid::solid(4, face));
        }
    }

    #[test]
    fn undo() {
        let mut cube = Cube::new(3);
        assert_eq!(cube.undo(), None);
        cube.turn(Front, 1);
        let snapshot = cube.clone();
        cube.turn(Up, 2);
        cube.reorient(Right, 1);
        assert_eq!(cube.undo(), Some(Move::reorient(Right, 1)));
        assert_eq!(cube.undo(), Some(Move::turn(Up, 2)));
        assert_eq!(cube, snapshot);
    }

    #[test]
    fn reset() {
        let mut cube = scrambled(3);
        cube.reset();
        assert_eq!(cube, Cube::new(3));
    }

    #[test]
    fn move_inverses() {
        assert_eq!(Move::turn(Front, 1).inverse(), Move::turn(Front, 3));
        assert_eq!(Move::turn(Front, 2).inverse(), Move::turn(Front, 2));
        assert_eq!(Move::reorient(Up, 0).inverse(), Move::reorient(Up, 0));
        assert_eq!(Move::turn(Left, -1), Move::turn(Left, 3));
    }

    #[test]
    fn seeded_scrambles_repeat() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let moves = scramble(&mut rng, 30);
        assert_eq!(moves.len(), 30);
        assert!(moves
            .iter()
            .all(|mv| mv.kind == MoveKind::Turn && (1..=3).contains(&mv.amount)));
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(scramble(&mut rng, 30), moves);
    }

    #[test]
    fn net_layout() {
        let cube = Cube::new(3);
        let expected = concat!(
            "      0 0 0 \n",
            "      0 0 0 \n",
            "      0 0 0 \n",
            "1 1 1 2 2 2 3 3 3 4 4 4 \n",
            "1 1 1 2 2 2 3 3 3 4 4 4 \n",
            "1 1 1 2 2 2 3 3 3 4 4 4 \n",
            "      5 5 5 \n",
            "      5 5 5 \n",
            "      5 5 5 ",
        );
        assert_eq!(cube.to_string(), expected);

        let mut cube = Cube::new(2);
        cube.turn(Up, 1);
        let expected = concat!(
            "    0 0 \n",
            "    0 0 \n",
            "2 2 3 3 4 4 1 1 \n",
            "1 1 2 2 3 3 4 4 \n",
            "    5 5 \n",
            "    5 5 ",
        );
        assert_eq!(cube.to_string(), expected);
    }
}
