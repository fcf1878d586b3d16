#![no_main]
use facelet::{Cube, Face, Move};
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|input: (u8, Vec<Move>, Vec<(Face, i8)>)| {
    let (size, setup, spins) = input;
    let mut cube = Cube::new(size % 8);
    cube.apply_all(setup);
    let snapshot = cube.clone();
    for &(face, amount) in &spins {
        cube.reorient(face, amount & 0b11);
    }
    for &(face, amount) in spins.iter().rev() {
        cube.reorient(face, -(amount & 0b11));
    }
    for face in Face::ALL {
        assert_eq!(cube.face(face), snapshot.face(face));
    }
    assert_eq!(cube.is_solved(), snapshot.is_solved());
});
