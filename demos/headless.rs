//! Headless demo: carve a seeded maze and run every algorithm on it,
//! printing the painted grid and the run statistics.
//!
//! Run: cargo run --bin pathviz-headless [seed]

use pathviz_demos::{Session, SessionConfig};
use pathviz_maze::MazeGen;
use pathviz_paths::Algorithm;
use rand::SeedableRng;
use rand::rngs::StdRng;

const ROWS: i32 = 21;
const COLS: i32 = 41;

fn run(seed: u64) -> pathviz_core::Result<()> {
    let mut session = Session::new(SessionConfig {
        rows: ROWS,
        cols: COLS,
        ..SessionConfig::default()
    });
    let mut maze = MazeGen::with_rng(StdRng::seed_from_u64(seed));
    let carved = session.generate_maze(&mut maze)?;
    println!("seed {seed}: carved {carved} nodes\n");

    for algo in Algorithm::ALL {
        session.select(algo);
        session.start()?;
        session.run_to_end();
        let stats = session.stats();
        println!("{}", session.grid());
        println!(
            "{algo}: {} | visited {} | path {} | ticks {}\n",
            stats.status, stats.visited, stats.path_length, stats.ticks
        );
    }
    Ok(())
}

fn main() {
    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        None => 42,
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Error: invalid seed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(seed) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
