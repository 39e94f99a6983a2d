use std::path::PathBuf;

use clap::Parser;
use folio::{Options, Viewer};

#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(about = "3D portfolio scene", long_about = None)]
struct Cli {
    /// TOML options file; missing fields use defaults
    #[arg(long)]
    options: Option<PathBuf>,

    /// Asset root directory (overrides the options file)
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Window title
    #[arg(long, default_value = "folio")]
    title: String,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut options = match &cli.options {
        Some(path) => match Options::load(path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };
    if let Some(root) = cli.assets {
        options.assets.root = root;
    }

    if let Err(e) = Viewer::builder()
        .with_title(cli.title)
        .with_options(options)
        .build()
        .run()
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}
