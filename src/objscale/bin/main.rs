//-- objscale

#[macro_use]
extern crate log; //info/debug/error

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use num_format::{Locale, ToFormattedString};

use objscale::Scaler;

#[derive(Parser)]
#[command(name = "objscale")]
#[command(about = "rescale the vertices of an OBJ file, mm -> m [objscale]")]
#[command(author, version)]
struct Cli {
    /// OBJ file to read
    input: PathBuf,
    /// OBJ file to write (replaced if it exists)
    output: PathBuf,
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    info!("===== objscale =====");
    match Scaler::default().scale_file(&cli.input, &cli.output) {
        Ok(stats) => {
            info!("# lines: {}", stats.lines.to_formatted_string(&Locale::en));
            info!(
                "# vertices: {}",
                stats.vertices.to_formatted_string(&Locale::en)
            );
            info!("✅");
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
