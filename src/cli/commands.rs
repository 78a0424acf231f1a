use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vv", about = concat!("vaultview v", env!("CARGO_PKG_VERSION"), " - vault items as field sections"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the field sections of a vault item
    Sections(SectionsArgs),
    /// Print the copy payload of a single field
    Field(FieldArgs),
}

#[derive(Args)]
pub struct SectionsArgs {
    /// Item JSON file, `-` or omitted for stdin
    pub file: Option<PathBuf>,

    /// Show true values for hidden and TOTP fields instead of the mask
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Args)]
pub struct FieldArgs {
    /// Field id, e.g. `login.username` or `custom.0.PIN`
    pub id: String,

    /// Item JSON file, `-` or omitted for stdin
    pub file: Option<PathBuf>,
}
