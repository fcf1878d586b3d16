use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use facelet::{parse_moves, scramble, Colored, Cube, Palette};
use itertools::Itertools;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser)]
struct Options {
    /// Stickers along each edge of the cube.
    #[arg(long, short = 'n', default_value_t = 3)]
    size: u8,
    /// Print plain digit nets instead of coloured blocks.
    #[arg(long)]
    plain: bool,
    /// Seed for the scramble RNG, so sessions can be repeated.
    #[arg(long)]
    seed: Option<u64>,
}

const SCRAMBLE_LENGTH: usize = 25;

fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    let mut cube = Cube::new(options.size);
    let mut rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let palette = Palette::default();

    ctrlc::set_handler(|| {
        println!();
        process::exit(0);
    })?;

    println!(
        "{0}×{0}×{0} cube; enter moves like F R2 U', or `help` for commands",
        cube.size()
    );
    print_net(&cube, &palette, options.plain);

    let mut lines = io::stdin().lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut words = line.split_whitespace();
        match words.next() {
            None => {}
            Some("help") => print_help(),
            Some("quit") | Some("exit") => break,
            Some("reset") => {
                cube.reset();
                print_net(&cube, &palette, options.plain);
            }
            Some("solved") => {
                println!("{}", if cube.is_solved() { "solved" } else { "not solved" });
            }
            Some("history") => {
                if cube.history().is_empty() {
                    println!("(nothing yet)");
                } else {
                    println!("{}", cube.history().iter().join(" "));
                }
            }
            Some("undo") => match cube.undo() {
                Some(mv) => {
                    println!("undid {mv}");
                    print_net(&cube, &palette, options.plain);
                }
                None => println!("nothing to undo"),
            },
            Some("scramble") => match words.next().map(str::parse::<usize>).transpose() {
                Ok(length) => {
                    let moves = scramble(&mut rng, length.unwrap_or(SCRAMBLE_LENGTH));
                    println!("{}", moves.iter().join(" "));
                    cube.apply_all(moves);
                    print_net(&cube, &palette, options.plain);
                }
                Err(_) => println!("scramble length must be a number"),
            },
            Some("dump") => {
                serde_json::to_writer_pretty(io::stdout().lock(), &cube)?;
                println!();
            }
            Some(_) => {
                let moves = parse_moves(&line);
                if moves.is_empty() {
                    println!("unrecognised input; `help` lists the commands");
                } else {
                    cube.apply_all(moves);
                    print_net(&cube, &palette, options.plain);
                }
            }
        }
    }

    Ok(())
}

fn print_net(cube: &Cube, palette: &Palette, plain: bool) {
    if plain {
        println!("{cube}");
    } else {
        println!("{}", Colored::new(cube, palette));
    }
}

fn print_help() {
    println!("moves            tokens like F R2 U' T3 D0, or @F to spin the whole cube");
    println!("scramble [len]   apply random turns (default {SCRAMBLE_LENGTH})");
    println!("undo             take back the most recent move");
    println!("history          list every move so far");
    println!("solved           check whether every face is a single colour");
    println!("dump             write the cube state as JSON");
    println!("reset            back to the solved cube, clearing the history");
    println!("quit             leave");
}
