//! Types for dealing with the geometry of cube faces.

use std::array;
use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

use arbitrary::Arbitrary;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One of the six faces of a cube.
///
/// The discriminants matter: a sticker is stored as the `Face` it belongs to
/// when the cube is solved, and a face doubles as an index into the lookup
/// tables below. The four side faces sit between `Up` and `Down` in the
/// order they cycle around the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Arbitrary)]
#[repr(u8)]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

impl Display for Face {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Up => "up",
            Left => "left",
            Front => "front",
            Right => "right",
            Back => "back",
            Down => "down",
        })
    }
}

impl Face {
    /// All six faces, in index order.
    pub const ALL: [Face; 6] = [Up, Left, Front, Right, Back, Down];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the face with the given index, or `None` if it's out of range.
    pub fn from_index(index: usize) -> Option<Face> {
        Face::ALL.get(index).copied()
    }

    /// Returns the face opposite to this one.
    pub fn opposite(self) -> Face {
        match self {
            Up => Down,
            Left => Right,
            Front => Back,
            Right => Left,
            Back => Front,
            Down => Up,
        }
    }

    /// The letter standing for this face in move notation.
    pub fn letter(self) -> char {
        match self {
            Up => 'U',
            Left => 'L',
            Front => 'F',
            Right => 'R',
            Back => 'B',
            Down => 'D',
        }
    }

    /// Returns the four faces bordering this one, in the cycle stickers
    /// travel along when this face is turned clockwise, along with the side
    /// of each neighbour's border (in the sense of [`Grid::edge`]) that
    /// touches this face.
    pub fn neighbours(self) -> [(Face, i8); 4] {
        let table = [
            // up
            (Back, 0),
            (Right, 0),
            (Front, 0),
            (Left, 0),
            // left
            (Back, 1),
            (Up, 3),
            (Front, 3),
            (Down, 3),
            // front
            (Down, 0),
            (Left, 1),
            (Up, 2),
            (Right, 3),
            // right
            (Back, 3),
            (Down, 1),
            (Front, 1),
            (Up, 1),
            // back
            (Left, 3),
            (Down, 2),
            (Right, 1),
            (Up, 0),
            // down
            (Left, 2),
            (Front, 2),
            (Right, 2),
            (Back, 2),
        ];
        array::from_fn(|i| table[(self as usize) << 2 | i])
    }

    /// Returns where every face's stickers come from after one clockwise
    /// quarter spin of the whole cube about this face: entry `i` is the face
    /// whose grid lands in slot `i`, along with the number of clockwise
    /// turns applied to it on the way there.
    ///
    /// The turn counts here aren't guessable by symmetry alone; they're
    /// pinned down by the test that re-derives them from [`Face::neighbours`]
    /// and by the spin round-trip tests on scrambled cubes.
    pub fn reorient_sources(self) -> [(Face, i8); 6] {
        let table = [
            // up
            (Up, 1),
            (Front, 0),
            (Right, 0),
            (Back, 0),
            (Left, 0),
            (Down, 3),
            // left
            (Back, 2),
            (Left, 1),
            (Up, 0),
            (Right, 3),
            (Down, 2),
            (Front, 0),
            // front
            (Left, 1),
            (Down, 1),
            (Front, 1),
            (Up, 1),
            (Back, 3),
            (Right, 1),
            // right
            (Front, 0),
            (Left, 3),
            (Down, 0),
            (Right, 1),
            (Up, 2),
            (Back, 2),
            // back
            (Right, 3),
            (Up, 3),
            (Front, 3),
            (Down, 3),
            (Back, 1),
            (Left, 3),
            // down
            (Up, 3),
            (Back, 0),
            (Left, 0),
            (Front, 0),
            (Right, 0),
            (Down, 1),
        ];
        array::from_fn(|i| table[self as usize * 6 + i])
    }
}

use Face::*;

/// The stickers of one face of a cube: an n×n grid of `Face` values stored
/// row-major, with row 0 at the top as you look straight at the face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: u8,
    stickers: Vec<Face>,
}

impl Grid {
    /// Creates a grid covered entirely in one face's stickers.
    pub fn solid(size: u8, face: Face) -> Self {
        assert!(size != 0);
        Self {
            size,
            stickers: vec![face; usize::from(size) * usize::from(size)],
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns an iterator over the rows of the grid, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Face]> + DoubleEndedIterator + ExactSizeIterator {
        self.stickers.chunks(self.size.into())
    }

    /// Whether every sticker matches the top-left one.
    pub fn is_uniform(&self) -> bool {
        self.stickers.iter().all(|&sticker| sticker == self.stickers[0])
    }

    fn cells(&self) -> impl Iterator<Item = (u8, u8)> {
        (0..self.size).cartesian_product(0..self.size)
    }

    /// Returns a copy of this grid rotated by the given number of clockwise
    /// quarter turns.
    pub fn rotate(&self, turns: i8) -> Self {
        let m = self.size - 1;
        let stickers = match turns & 0b11 {
            0 => self.stickers.clone(),
            1 => self.cells().map(|(r, c)| self[(m - c, r)]).collect(),
            2 => self.cells().map(|(r, c)| self[(m - r, m - c)]).collect(),
            3 => self.cells().map(|(r, c)| self[(c, m - r)]).collect(),
            _ => unreachable!(),
        };
        Self {
            size: self.size,
            stickers,
        }
    }

    fn border_cell(&self, side: i8, i: u8) -> (u8, u8) {
        let m = self.size - 1;
        match side & 0b11 {
            0 => (0, i),
            1 => (i, m),
            2 => (m, m - i),
            3 => (m - i, 0),
            _ => unreachable!(),
        }
    }

    /// Reads one side of the grid's border. Side 0 is the top edge and sides
    /// count clockwise from there; the stickers also come out in clockwise
    /// order, so side 2 (the bottom edge) reads right to left.
    pub fn edge(&self, side: i8) -> Vec<Face> {
        (0..self.size)
            .map(|i| self[self.border_cell(side, i)])
            .collect()
    }

    /// Overwrites one side of the grid's border, indexed as in
    /// [`Grid::edge`]. No other sticker is touched.
    pub fn set_edge(&mut self, side: i8, values: &[Face]) {
        assert_eq!(values.len(), usize::from(self.size));
        for (i, &value) in (0..self.size).zip(values) {
            let cell = self.border_cell(side, i);
            self[cell] = value;
        }
    }
}

impl Index<(u8, u8)> for Grid {
    type Output = Face;

    fn index(&self, (row, col): (u8, u8)) -> &Face {
        let row: usize = row.into();
        let col: usize = col.into();
        let size: usize = self.size.into();
        &self.stickers[row * size + col]
    }
}

impl IndexMut<(u8, u8)> for Grid {
    fn index_mut(&mut self, (row, col): (u8, u8)) -> &mut Face {
        let row: usize = row.into();
        let col: usize = col.into();
        let size: usize = self.size.into();
        &mut self.stickers[row * size + col]
    }
}
