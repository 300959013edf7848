mod config;
mod loader;

use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

use log::info;
use machine_learning::{Dataset, GradientDescentRegressor};

use config::TrainingConfig;

fn main() {
    env_logger::init();

    let path = match config_path(env::args()) {
        Ok(path) => path,
        Err(usage) => {
            eprintln!("{usage}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&path) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Takes the configuration path out of the process arguments, or returns the usage line.
fn config_path<I>(args: I) -> Result<PathBuf, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| format!("Usage: {program} <config.json>"))
}

fn run(config_path: &Path) -> anyhow::Result<()> {
    let config = TrainingConfig::from_path(config_path)?;
    let base_dir = config_path.parent().unwrap_or(Path::new("."));

    let dataset = config.dataset.load(base_dir)?;
    info!(
        "loaded {} samples with {} features",
        dataset.size(),
        dataset.feature_count()
    );

    let mut model = GradientDescentRegressor::new(dataset.feature_count());
    let losses = model.fit(&dataset, config.iterations, config.learning_rate)?;
    info!("trained for {} iterations", losses.len());

    report(&mut io::stdout().lock(), &model, &dataset, &losses, &config.predict)
}

/// Writes the trained weights, the last training loss and the requested predictions.
fn report<W: Write>(
    out: &mut W,
    model: &GradientDescentRegressor,
    dataset: &Dataset,
    losses: &[f64],
    predict: &[Vec<f64>],
) -> anyhow::Result<()> {
    let weights = model.weights();
    writeln!(out, "intercept: {}", weights[0])?;
    for (i, w) in weights[1..].iter().enumerate() {
        writeln!(out, "w{}: {w}", i + 1)?;
    }

    match losses.last() {
        Some(loss) => writeln!(out, "last training loss: {loss}")?,
        None => info!("no training iterations requested, loss: {}", model.loss(dataset)?),
    }

    for input in predict {
        let y = model.predict(input)?;
        writeln!(out, "predict {input:?} -> {y}")?;
    }

    Ok(())
}
