//! svl - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `svl demo` | Build the demo composition and print what it produced |
//! | `svl config` | Print the effective configuration as TOML |

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use svl::demo;
use svl::infrastructure::config::{ConfigLoader, to_toml};
use svl::infrastructure::init_app;

/// Command line interface for svl
#[derive(Parser, Debug)]
#[command(name = "svl")]
#[command(about = "Service locator demo and configuration tool")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the demo composition root
    Demo {
        /// Value injected as the demo configuration
        #[arg(long, default_value = "foo")]
        foo: String,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    match cli.command {
        Command::Demo { foo } => {
            let registry = init_app(&config)?;
            demo::compose(&registry, &foo);
            let report = demo::run(&registry)?;
            println!("service.bar = {}", report.service.bar);
            for route in report.routes {
                println!("route {route}");
            }
        }
        Command::Config => print!("{}", to_toml(&config)?),
    }
    Ok(())
}
