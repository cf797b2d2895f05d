use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::error;
use sitecfg::commands::{self, DEFAULT_CONFIG_PATH, Format, Fragment};

#[derive(Parser)]
#[command(name = "sitecfg", about = "Blog site configuration", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration
    Show {
        /// Config file, defaults to ./site.toml or the built-in config
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = Format::Toml)]
        format: Format
    },

    /// Validate a config file
    Check {
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf
    },

    /// Write the built-in configuration to a file
    Init {
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool
    },

    /// Render an HTML fragment from the configuration
    Render {
        /// Config file, defaults to ./site.toml or the built-in config
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(value_enum)]
        fragment: Fragment
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { config, format } => {
            commands::show(config.as_deref(), format).map(|out| println!("{}", out))
        }
        Commands::Check { config } => commands::check(&config).map(|_| ()),
        Commands::Init { config, force } => commands::init(&config, force),
        Commands::Render { config, fragment } => {
            commands::render(config.as_deref(), fragment).map(|html| print!("{}", html))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
