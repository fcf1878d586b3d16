#![no_main]
use facelet::{parse_moves, Cube};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    let moves = parse_moves(input);
    // Whatever survives parsing must print and re-parse losslessly.
    let line = moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(parse_moves(&line), moves);
    // And must apply cleanly.
    let mut cube = Cube::new(2);
    cube.apply_all(moves);
});
