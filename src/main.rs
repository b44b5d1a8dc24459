use clap::Parser;
use mandelbrot_explorer::{CliRenderController, PpmFilePresenter, RenderArgs};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = RenderArgs::parse();
    let config = args.view.into_config();

    let mut controller = CliRenderController::new(&config, PpmFilePresenter::new())
        .inspect_err(|e| error!(error = %e, "invalid configuration"))?;

    controller.generate();
    controller
        .write(&args.output)
        .inspect_err(|e| error!(error = %e, path = %args.output.display(), "write failed"))?;

    Ok(())
}
