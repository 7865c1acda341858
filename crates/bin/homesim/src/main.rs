use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use homesim::config::Config;
use homesim::session::Session;

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("homesim: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let rng = match config.simulation.seed {
        Some(seed) => {
            tracing::info!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let session = Session::new(std::io::stdin().lock(), std::io::stdout().lock());
    match session.run(rng) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "session ended with an error");
            ExitCode::FAILURE
        }
    }
}
