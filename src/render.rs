//! Terminal rendering of cubes as coloured nets.

use std::fmt::{self, Display, Formatter, Write};

use crate::{Cube, Face};
use Face::*;

/// The colour each face's stickers are drawn in: one SGR escape code per
/// face, in face index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub codes: [&'static str; 6],
}

impl Default for Palette {
    fn default() -> Self {
        // Magenta stands in for orange, which the basic SGR set lacks.
        Self {
            codes: [
                "\x1b[37m", // up: white
                "\x1b[35m", // left: magenta
                "\x1b[32m", // front: green
                "\x1b[31m", // right: red
                "\x1b[34m", // back: blue
                "\x1b[33m", // down: yellow
            ],
        }
    }
}

impl Palette {
    pub fn code(&self, face: Face) -> &'static str {
        self.codes[face.index()]
    }
}

/// Draws a cube as a net of coloured blocks.
pub struct Colored<'a> {
    cube: &'a Cube,
    palette: &'a Palette,
}

impl<'a> Colored<'a> {
    pub fn new(cube: &'a Cube, palette: &'a Palette) -> Self {
        Self { cube, palette }
    }

    fn write_row(&self, f: &mut Formatter<'_>, row: &[Face]) -> fmt::Result {
        for &sticker in row {
            f.write_str(self.palette.code(sticker))?;
            f.write_str("██")?;
        }
        Ok(())
    }
}

impl Display for Colored<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.cube.size();
        // Sit the up and down faces above and below the front face; the
        // extra column is the gap after the left face.
        let indent = " ".repeat(2 * usize::from(size) + 1);
        for (i, row) in self.cube.face(Up).rows().enumerate() {
            if i != 0 {
                f.write_char('\n')?;
            }
            f.write_str(&indent)?;
            self.write_row(f, row)?;
            f.write_str("\x1b[39m")?;
        }
        for r in 0..usize::from(size) {
            f.write_char('\n')?;
            for (j, face) in [Left, Front, Right, Back].into_iter().enumerate() {
                if j != 0 {
                    f.write_char(' ')?;
                }
                let row = self.cube.face(face).rows().nth(r).unwrap();
                self.write_row(f, row)?;
            }
            f.write_str("\x1b[39m")?;
        }
        for row in self.cube.face(Down).rows() {
            f.write_char('\n')?;
            f.write_str(&indent)?;
            self.write_row(f, row)?;
            f.write_str("\x1b[39m")?;
        }
        Ok(())
    }
}
