use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Meal Picker — browse the menu, pick up to four meals, see average price per course.
#[derive(Parser, Debug)]
#[command(name = "meal_picker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Load the menu from a JSON or CSV file instead of the built-in one.
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Open the interactive menu screen.
    #[default]
    Browse,

    /// Print the menu.
    List,

    /// Tap meals by id, in order, and print the result.
    Pick {
        /// Meal ids to tap.
        #[arg(required = true)]
        ids: Vec<u32>,
    },

    /// Tap meals by name, in order, and print the result.
    PickName {
        /// Meal names to tap (fuzzy matched).
        #[arg(required = true)]
        names: Vec<String>,
    },
}
