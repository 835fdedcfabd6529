use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "formcheck")]
#[command(about = "Validate signup/login form input and run small array utilities")]
pub struct CliConfig {
    /// Path to a TOML file overriding the validation rules
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a signup form (only the password is validated)
    Signup {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Check login credentials
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sort integers ascending
    Sort {
        /// Values to sort
        #[arg(allow_negative_numbers = true, conflicts_with = "input")]
        values: Vec<i64>,

        /// Read values from a headerless CSV file instead
        #[arg(long)]
        input: Option<String>,
    },

    /// List the field names of a JSON object
    Keys {
        /// Inline JSON document
        #[arg(long, conflicts_with = "input")]
        json: Option<String>,

        /// Read the JSON document from a file
        #[arg(long)]
        input: Option<String>,
    },
}
