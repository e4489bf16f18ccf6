use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iconsmith")]
#[command(about = "Extracts normalized metadata from icon library source trees", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process Radix UI Icons
    RadixUiIcons {
        /// Vendor checkout root
        vendor_root: PathBuf,

        /// Output directory for vendor-native metadata
        #[arg(long, default_value = ".cache/radix-ui-icons")]
        out: PathBuf,
    },
    /// Process Heroicons
    Heroicons {
        /// Vendor checkout root
        vendor_root: PathBuf,

        /// Output directory for vendor-native metadata
        #[arg(long, default_value = ".cache/heroicons")]
        out: PathBuf,
    },
    /// Process Lucide Icons
    LucideIcons {
        /// Vendor checkout root
        vendor_root: PathBuf,

        /// Output directory for vendor-native metadata
        #[arg(long, default_value = ".cache/lucide-icons")]
        out: PathBuf,
    },
    /// Process Octicons
    Octicons {
        /// Vendor checkout root
        vendor_root: PathBuf,

        /// Output directory for vendor-native metadata
        #[arg(long, default_value = ".cache/octicons")]
        out: PathBuf,
    },
    /// Process Phosphor Icons
    PhosphorIcons {
        /// Vendor checkout root
        vendor_root: PathBuf,

        /// Output directory for vendor-native metadata
        #[arg(long, default_value = ".cache/phosphor-icons")]
        out: PathBuf,
    },
    /// Process svgl
    Svgl {
        /// Vendor checkout root
        vendor_root: PathBuf,

        /// Output directory for vendor-native metadata
        #[arg(long, default_value = ".cache/svgl")]
        out: PathBuf,
    },
    /// Run all vendor extractors
    All {
        /// Directory containing one checkout per vendor, named by slug
        vendors_root: PathBuf,

        /// Root output directory; each vendor writes to a sub-directory
        #[arg(long, default_value = ".cache")]
        out_root: PathBuf,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
