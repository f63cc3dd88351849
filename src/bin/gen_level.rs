//! Generate one solvable level and print it in level file format.
//!
//! Usage: gen_level [seed]
//! Settings come from the [generator] section of config.toml. The ASCII
//! preview goes to stderr so stdout can be redirected into levels.json.

use keymaze::config::Config;
use keymaze::{LevelFile, MazeGenerator};
use std::env;

fn main() -> Result<(), String> {
    let config = Config::load_and_init_logging();

    let args: Vec<String> = env::args().collect();
    let seed = match args.get(1) {
        Some(arg) => Some(
            arg.parse::<u64>()
                .map_err(|e| format!("Usage: {} [seed] ({}: {})", args[0], arg, e))?,
        ),
        None => config.generator.seed,
    };

    let generator = MazeGenerator::new(config.generator.settings());
    let grid = match seed {
        Some(seed) => generator.generate_seeded(seed),
        None => generator.generate_random(),
    };

    eprint!("{}", grid);

    let file = LevelFile {
        levels: vec![grid.to_rows()],
    };
    println!("{}", file.to_json()?);
    Ok(())
}
