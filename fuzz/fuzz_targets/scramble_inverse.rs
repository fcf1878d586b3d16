#![no_main]
use facelet::{invert, Cube, Face, Grid, Move};
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|input: (u8, Vec<Move>)| {
    let (size, moves) = input;
    let mut cube = Cube::new(size % 8);
    let size = cube.size();
    cube.apply_all(moves);
    let undoing = invert(cube.history());
    cube.apply_all(undoing);
    // Inverting the history must put every sticker back on its own face,
    // not just make the faces uniform.
    for face in Face::ALL {
        assert_eq!(cube.face(face), &Grid::solid(size, face));
    }
});
