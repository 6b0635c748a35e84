//! Command-line definitions and subcommand implementations for `osac`.

pub mod get_cmd;
pub mod list_cmd;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use osac::Product;

#[derive(Parser, Debug)]
#[command(
    name = "osac",
    about = "List and download open-source package archives by product and release",
    version,
    after_help = "Products: mac, devtools, ios, server.\nRun 'osac <command> --help' for details on each command."
)]
pub struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Root URL of the release index (also read from OSAC_BASE_URL).
    /// Links on the index starting with `/` resolve against the host, so a
    /// path on this URL only applies to relative links.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Connect and read idle timeout in seconds (also read from OSAC_TIMEOUT).
    /// Unset by default; slow downloads that keep receiving data are never cut.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products, the releases of a product, or the packages of a release
    List {
        /// Product key (mac, devtools, ios, server)
        product: Option<Product>,
        /// Release name as printed by 'osac list <product>'
        release: Option<String>,
    },
    /// Download the packages of a release into <product>-<release>/
    Get {
        /// Product key (mac, devtools, ios, server)
        product: Product,
        /// Release name as printed by 'osac list <product>'
        release: String,
        /// Only download this package (bare name or name-version)
        package: Option<String>,
        /// Directory in which <product>-<release>/ is created
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        shell: Shell,
    },
}
