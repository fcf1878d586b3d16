use clap::Parser;
use facelet::{scramble, Cube};
use itertools::Itertools;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Prints a random scramble in move notation, ready to pipe into `facelet`.
#[derive(Parser)]
struct Options {
    /// How many turns to generate.
    #[arg(long, default_value_t = 25)]
    length: usize,
    /// Seed for the RNG, so the same scramble can be generated again.
    #[arg(long)]
    seed: Option<u64>,
    /// Stickers along each edge of the cube; only matters with `--net`.
    #[arg(long, short = 'n', default_value_t = 3)]
    size: u8,
    /// Also print the scrambled cube's net.
    #[arg(long)]
    net: bool,
}

fn main() {
    let options = Options::parse();
    let mut rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let moves = scramble(&mut rng, options.length);
    println!("{}", moves.iter().join(" "));
    if options.net {
        let mut cube = Cube::new(options.size);
        cube.apply_all(moves);
        println!("{cube}");
    }
}
