use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "larder", about = "Larder command-line client")]
pub struct Cli {
    /// Server base URL
    #[arg(long, default_value = "http://127.0.0.1:8080", global = true)]
    pub server: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a recipe from a JSON file or stdin
    Add {
        /// File path, or "-" for stdin
        source: String,
    },
    /// Fetch one recipe by id
    Get {
        /// Recipe id (slug)
        id: String,
    },
    /// List all recipes
    List,
    /// Replace a recipe wholesale
    Update {
        /// Recipe id (slug)
        id: String,
        /// File path, or "-" for stdin
        source: String,
    },
    /// Remove a recipe
    Remove {
        /// Recipe id (slug)
        id: String,
    },
    /// Server health
    Status,
}
