use clap::Parser;
use mandelbrot_explorer::{GuiArgs, run_gui};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GuiArgs::parse().view.into_config();

    run_gui(&config).inspect_err(|e| error!(error = %e, "explorer stopped"))?;

    Ok(())
}
