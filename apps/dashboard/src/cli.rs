use clap::{ArgAction, Args, Parser, Subcommand};
use search_core::Role;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file, instead of the one in the platform config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// User name to act as (defaults to `default-user` from the configuration)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Role of the user
    #[arg(short, long, global = true, default_value = "viewer", value_parser = Role::from_str)]
    pub role: Role,

    /// Bypass every permission check
    #[arg(long, global = true)]
    pub superuser: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a procedure file and print it as JSON
    Parse {
        file: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Convert editor markup (HTML) into procedure text
    Convert {
        file: PathBuf,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the procedures you can see
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show the sections and commands of a procedure
    Show {
        id: u64,
        #[arg(long)]
        json: bool,
    },
    /// Search procedure names, descriptions and content
    Search {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Add a new procedure from a .txt file
    Upload {
        file: PathBuf,
        #[command(flatten)]
        fields: UploadFields,
    },
    /// Replace the content of a procedure
    Edit {
        id: u64,
        file: PathBuf,
        /// The file is editor markup and is converted first
        #[arg(long)]
        markup: bool,
    },
    /// Change the name, icon, description or visibility of a procedure
    Update {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, conflicts_with = "private")]
        public: bool,
        #[arg(long)]
        private: bool,
    },
    /// Delete a procedure and its file
    Delete { id: u64 },
    /// Save the file of a procedure
    Download {
        id: u64,
        /// Destination, defaults to the procedure file name in the current directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Install the sample Docker, Linux and Git procedures
    InitSamples,
}

#[derive(Args, Debug)]
pub struct UploadFields {
    /// Display name, derived from the file name when omitted
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Only you and admins will see it
    #[arg(long)]
    pub private: bool,
}

/// Visibility change requested by `--public` / `--private`
pub fn visibility(public: bool, private: bool) -> Option<bool> {
    match (public, private) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
