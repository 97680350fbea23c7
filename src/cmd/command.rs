use clap::Parser;
use std::path::PathBuf;

use crate::{config::ConfigLoadOption, output::OutputFormat};

use super::SubCommand;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, disable_help_subcommand = true)]
pub struct Command {
    /// Logging
    #[arg(short = 'l', long, display_order = 1000)]
    pub logging: bool,

    /// Config file path
    #[arg(long, display_order = 1000)]
    pub config_file: Option<PathBuf>,

    /// Output format. Overrides `output.format` of the config file
    #[arg(
        short,
        long,
        value_name = "yaml|json",
        value_enum,
        display_order = 1000
    )]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub subcommand: SubCommand,
}

impl Command {
    pub fn init() -> Self {
        Self::parse()
    }

    pub fn output_format(&self, default: OutputFormat) -> OutputFormat {
        self.output.unwrap_or(default)
    }

    pub fn config_load_option(&self) -> ConfigLoadOption {
        if let Some(path) = &self.config_file {
            match path.try_exists() {
                Ok(true) => ConfigLoadOption::Path(path.clone()),
                Ok(false) => {
                    eprintln!("Config file not found: {:?}", path);

                    ConfigLoadOption::Default
                }
                Err(err) => {
                    eprintln!("Failed to check config file exists: {}", err);

                    ConfigLoadOption::Default
                }
            }
        } else {
            let Some(path) = xdg_config_home().map(|dir| dir.join("config.yaml")) else {
                return ConfigLoadOption::Default;
            };

            match path.try_exists() {
                Ok(true) => ConfigLoadOption::Path(path),
                Ok(false) => ConfigLoadOption::Default,
                Err(err) => {
                    eprintln!("Failed to check config file exists: {}", err);

                    ConfigLoadOption::Default
                }
            }
        }
    }
}

fn xdg_config_home() -> Option<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(path) => Some(PathBuf::from(path).join("ack-apigatewayv2")),
        None => dirs::home_dir().map(|home| home.join(".config").join("ack-apigatewayv2")),
    }
}
