use std::path::PathBuf;

use clap::{Parser, Subcommand};
use y3c_xtask::{Result, commands};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build and documentation automation for the y3c library")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove Requires.private lines from the installed y3c.pc
    ///
    /// Reads MESON_INSTALL_PREFIX (required) and DESTDIR (optional) from
    /// the environment, as set by `meson install`.
    StripPrivateRequires,
    /// Run every compiled example and render its output into examples.dox
    RenderExampleDocs {
        /// Build output root (contains examples/ with the compiled binaries)
        build_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::StripPrivateRequires => commands::pkgconfig::strip_private_requires(),
        Commands::RenderExampleDocs { build_dir } => {
            commands::docgen::render_example_docs(&build_dir)
        }
    }
}
