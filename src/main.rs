use keymaze::config::Config;
use keymaze::session::{Direction, MoveOutcome, Session, SessionState};
use keymaze::{LevelSet, MazeGenerator};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Authored levels from the configured file, or the builtin set
fn load_levels(config: &Config) -> LevelSet {
    let path = Path::new(&config.levels.path);
    if !path.exists() {
        info!("No {} found, using builtin levels", config.levels.path);
        return LevelSet::builtin();
    }
    match LevelSet::load_from_file(path) {
        Ok(levels) => {
            info!("Loaded {} levels from {}", levels.len(), config.levels.path);
            levels
        }
        Err(e) => {
            warn!("{}; using builtin levels", e);
            LevelSet::builtin()
        }
    }
}

fn print_status(session: &Session) {
    println!(
        "\nLevel {}/{}  key: {}",
        session.level_index() + 1,
        session.level_count(),
        if session.player().has_key { "yes" } else { "no" }
    );
    print!("{}", session.render());
}

fn main() -> Result<(), String> {
    let config = Config::load_and_init_logging();

    let mut levels = load_levels(&config);
    let generator = MazeGenerator::new(config.generator.settings());
    match config.generator.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            levels.ensure_min_levels(config.levels.min_levels, &generator, &mut rng);
        }
        None => levels.ensure_min_levels(config.levels.min_levels, &generator, &mut rand::thread_rng()),
    }

    let mut session = Session::new(levels)?;
    println!("Collect the key (K), then reach the goal (G).");
    println!("Commands: w/a/s/d move, r restart level, q quit");
    print_status(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
        for key in line.trim().chars() {
            match key {
                'q' | 'Q' => return Ok(()),
                'r' | 'R' => session.restart_level(),
                _ => match Direction::from_key(key) {
                    Some(dir) => match session.try_move(dir) {
                        MoveOutcome::Blocked => println!("Bump."),
                        MoveOutcome::KeyCollected => println!("You picked up the key."),
                        MoveOutcome::NeedKey => println!("You need the key before exiting!"),
                        MoveOutcome::LevelComplete { next } => println!("On to level {}.", next + 1),
                        MoveOutcome::Won => {
                            println!("You escaped every maze. Thanks for playing.");
                            return Ok(());
                        }
                        MoveOutcome::Moved => {}
                    },
                    None => println!("Unknown command '{}'", key),
                },
            }
        }
        if session.state() == SessionState::Playing {
            print_status(&session);
        }
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush output: {}", e))?;
    }

    Ok(())
}
