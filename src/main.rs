// Entry point: plays the energy game and writes the figures.
use std::error::Error;
use std::fs::create_dir_all;
use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use boltzgrid::cli::Args;
use boltzgrid::config::AppConfig;
use boltzgrid::core::game::EnergyGame;
use boltzgrid::plot;

fn main() {
    if let Err(err) = run() {
        eprintln!("energy game failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let cfg = AppConfig::load_or_default(&args.config);

    let throws = args.throws.unwrap_or(cfg.game.throws);
    let start = args.start.unwrap_or(cfg.game.start);
    let seed = args.seed.or(cfg.game.seed);
    let out_dir = args.out_dir.as_deref().unwrap_or(&cfg.plot.out_dir);
    let out_dir = Path::new(out_dir);
    create_dir_all(out_dir)?;

    if args.compare {
        let out_path = out_dir.join(format!("energy_game_{start}_comparison.png"));
        info!(%start, ?seed, throw_counts = ?cfg.batch.throws, "rendering comparison figure");
        plot::render_comparison(
            &out_path,
            start,
            &cfg.batch.throws,
            seed,
            cfg.plot.width,
            cfg.plot.height,
        )?;
        println!("Saved comparison figure to {}", out_path.display());
    } else {
        let game = EnergyGame::new(throws, start);
        info!(throws, %start, ?seed, "playing energy game");
        let tally = match seed {
            Some(seed) => game.play_seeded(seed),
            None => game.play(&mut rand::rng()),
        };
        let out_path = out_dir.join(format!("energy_game_{start}.png"));
        plot::render_single(&out_path, &tally, throws, cfg.plot.width, cfg.plot.height)?;
        println!("Saved energy game figure to {}", out_path.display());
    }

    Ok(())
}
