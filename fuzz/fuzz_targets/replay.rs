#![no_main]
use facelet::{Cube, Move};
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|input: (u8, Vec<Move>)| {
    let (size, moves) = input;
    let mut live = Cube::new(size % 8);
    live.apply_all(moves);
    let mut replayed = Cube::new(live.size());
    replayed.apply_all(live.history().to_vec());
    assert_eq!(live, replayed);
});
