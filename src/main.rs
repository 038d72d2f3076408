use std::fs::File;
use std::io::{stdout, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use sphere_caster::cli::Args;
use sphere_caster::logger::init_logger;
use sphere_caster::Renderer;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() -> Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    let args = Args::parse();
    init_logger(args.log_level.into());

    let renderer = Renderer::new(&args.render_config());

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            renderer
                .render(&mut BufWriter::new(file))
                .with_context(|| format!("failed to write image to {}", path.display()))?;
        }
        None => {
            let stdout = stdout();
            renderer
                .render(&mut BufWriter::new(stdout.lock()))
                .context("failed to write image to stdout")?;
        }
    }

    Ok(())
}
