//! Command-line front end: read one BMP, write the four derived images
//! into the current directory.

use std::process::ExitCode;

use bmpmill::{BmpError, Unstoppable, default_outputs};
use tracing::{Level, error, info};

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "bmpmill".into());
    let (Some(input), None) = (args.next(), args.next()) else {
        eprintln!("Usage: {program} [path to bitmap (.bmp) image]");
        return ExitCode::from(2);
    };

    match run(&input) {
        Ok(0) => {
            info!("complete");
            ExitCode::SUCCESS
        }
        Ok(failed) => {
            error!("{failed} output file(s) failed");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{input}: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Decode once, then render and write each output. A failure on one output
/// is reported and counted but does not abort the rest; a decode failure
/// aborts before any output file is created.
fn run(input: &str) -> Result<usize, BmpError> {
    let data = std::fs::read(input)?;
    let image = bmpmill::decode(&data, Unstoppable)?;
    let geometry = image.geometry();
    info!(
        "read {input}: {:?} header, {}x{} at {} bpp",
        image.info_header().variant(),
        geometry.width,
        geometry.height,
        geometry.bits_per_pixel,
    );

    let mut failed = 0;
    for (name, transform) in default_outputs() {
        let result = image
            .derive(transform, Unstoppable)
            .and_then(|bytes| std::fs::write(name, bytes).map_err(BmpError::from));
        match result {
            Ok(()) => info!("wrote {name} ({transform:?})"),
            Err(err) => {
                error!("{name}: {err}");
                failed += 1;
            }
        }
    }
    Ok(failed)
}
