use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mandelbrot_zoom::{AnimateController, Args, GifPresenter, open_output, resolve_animation_spec};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let resolved = resolve_animation_spec(args.partial_spec()).context("invalid animation settings")?;
    for warning in &resolved.warnings {
        tracing::warn!("{}", warning);
    }

    let mut controller = AnimateController::new(GifPresenter::new(), args.render_options());
    controller.generate(&resolved.spec).context("failed to render animation")?;

    let output_path = args.output_path();
    let mut out = open_output(output_path.as_deref())
        .with_context(|| format!("failed to open output {:?}", output_path))?;
    controller.write(&mut out).context("failed to write gif")?;
    out.flush().context("failed to flush output")?;

    match output_path {
        Some(path) => tracing::info!("wrote {}", path.display()),
        None => tracing::info!("wrote gif to stdout"),
    }

    Ok(())
}

// The GIF may go to stdout, so logs always go to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
