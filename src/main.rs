//! Binary entrypoint: trains a small MLP on the two-moons dataset.
//!
//! Settings come from `MICROGRAD_*` environment variables (see [`micrograd::config`]);
//! log verbosity from `RUST_LOG` (default `info`).

use log::info;
use rand::{rngs::StdRng, SeedableRng};

use micrograd::config::from_env;
use micrograd::data::moons;
use micrograd::{Mlp, Module, Trainer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = from_env()?;
    config.validate()?;
    info!("config: {config:?}");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let data = moons(config.samples, config.noise, &mut rng)?;
    info!("num samples: {}", data.len());

    let model = Mlp::new(data.in_degree(), &config.layer_sizes, &mut rng)?;
    info!("{model}");
    info!("num params: {}", model.num_parameters());

    let report = Trainer::from_config(&config).fit(&model, &data)?;
    info!(
        "final loss {:.4} | accuracy {:.1}%",
        report.final_loss,
        report.accuracy * 100.0
    );
    Ok(())
}
