use makan_rental::models::{Category, PropertyType};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Find, list and save rental properties
#[derive(Debug, Parser)]
#[command(name = "makan", version)]
pub struct Cli {
    /// Extra configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the saved session
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter the catalog
    Search(SearchArgs),

    /// Show one property
    Show {
        id: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Suggest cities matching a partial name
    Cities { query: Option<String> },

    /// Log in (mock; always succeeds)
    Login(LoginArgs),

    Logout,

    /// Print the logged-in user
    Whoami,

    /// Save or unsave a property
    Save { id: String },

    /// Show your listings and saved properties
    Dashboard {
        /// Remove a listing from the view
        #[arg(long, value_name = "ID")]
        delete: Vec<String>,
    },

    /// Create a listing, or edit one with --edit
    List(ListArgs),

    /// Share your contact details with a property owner
    Interest {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search query to pre-fill from, e.g. "city=Pune&category=Residential"
    #[arg(long)]
    pub query: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long, conflicts_with = "any_category")]
    pub category: Option<Category>,

    /// Drop the category constraint
    #[arg(long)]
    pub any_category: bool,

    #[arg(long = "type", value_name = "TYPE")]
    pub property_type: Option<PropertyType>,

    #[arg(long, conflicts_with = "any_rent")]
    pub max_rent: Option<u32>,

    /// Drop the rent ceiling
    #[arg(long)]
    pub any_rent: bool,

    #[arg(long)]
    pub bhk: Option<u8>,

    /// Bachelor friendly only
    #[arg(long)]
    pub bachelor: bool,

    /// Pets allowed only
    #[arg(long)]
    pub pets: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long, requires = "password", conflicts_with = "google")]
    pub email: Option<String>,

    #[arg(long, requires = "email")]
    pub password: Option<String>,

    /// Continue with Google
    #[arg(long)]
    pub google: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Listing fields as JSON
    #[arg(long, value_name = "FILE")]
    pub draft: Option<PathBuf>,

    /// Id of one of your listings to edit
    #[arg(long, value_name = "ID")]
    pub edit: Option<String>,

    /// Photo to stage (repeatable)
    #[arg(long = "photo", value_name = "FILE")]
    pub photos: Vec<PathBuf>,

    /// Agree to the Terms & Conditions
    #[arg(long)]
    pub accept_terms: bool,
}
