use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::cli::commands::{Cli, Commands, FieldArgs, SectionsArgs};
use crate::cli::output;
use crate::model::item::VaultItem;
use crate::ops::sections::build_field_sections;

/// Errors at the I/O boundary. The builder itself is total and has no
/// error taxonomy of its own.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid item JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("field not found: {0}")]
    FieldNotFound(String),
}

pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Sections(args) => cmd_sections(args, cli.json),
        Commands::Field(args) => cmd_field(args),
    }
}

/// Read one vault item as JSON from a file, or from stdin when the path is
/// absent or `-`.
fn read_item(file: Option<&PathBuf>) -> Result<VaultItem, CliError> {
    let raw = match file {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.display().to_string(),
                source,
            })?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Read {
                    path: "stdin".to_string(),
                    source,
                })?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn cmd_sections(args: SectionsArgs, json: bool) -> Result<(), CliError> {
    let item = read_item(args.file.as_ref())?;
    let sections = build_field_sections(&item);

    if json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
    } else {
        for line in output::format_sections(&item, &sections, args.reveal) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_field(args: FieldArgs) -> Result<(), CliError> {
    let item = read_item(args.file.as_ref())?;
    let sections = build_field_sections(&item);

    let field = sections
        .iter()
        .flat_map(|section| &section.fields)
        .find(|field| field.id() == args.id)
        .ok_or_else(|| CliError::FieldNotFound(args.id.clone()))?;

    println!("{}", field.copy_text());
    Ok(())
}
