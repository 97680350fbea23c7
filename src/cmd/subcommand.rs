use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use clap::Parser;

use crate::{crd, logger, output::OutputFormat, scheme::Scheme};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub enum SubCommand {
    /// Print the CustomResourceDefinition manifests
    Crd,

    /// List every kind registered in the scheme
    Kinds,

    /// Decode manifests through the scheme and print them normalized
    Decode {
        /// Manifest file. `-` reads from stdin
        #[arg(default_value = "-")]
        file: PathBuf,
    },
}

impl SubCommand {
    /// Returns the text to print on stdout.
    pub fn run(self, scheme: &Scheme, format: OutputFormat) -> Result<String> {
        match self {
            SubCommand::Crd => {
                let crds = crd::custom_resource_definitions();

                logger!(info, "render {} crds as {}", crds.len(), format);

                Ok(crd::render(&crds, format)?)
            }
            SubCommand::Kinds => Ok(list_kinds(scheme)),
            SubCommand::Decode { file } => {
                let input = read_input(&file)?;

                decode(scheme, &input, format)
            }
        }
    }
}

fn list_kinds(scheme: &Scheme) -> String {
    scheme
        .known_types()
        .iter()
        .map(|known| format!("{}\n", known))
        .collect()
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn decode(scheme: &Scheme, input: &str, format: OutputFormat) -> Result<String> {
    let objects = scheme.decode_yaml(input)?;

    logger!(info, "decoded {} objects", objects.len());

    let values = objects
        .iter()
        .map(|object| scheme.encode(object))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format.render(&values)?)
}
