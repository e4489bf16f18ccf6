use anyhow::Result;
use iconsmith::cli::{parse_args, Commands};
use iconsmith::commands;
use iconsmith::vendors::Vendor;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = parse_args();
    match cli.command {
        Commands::RadixUiIcons { vendor_root, out } => {
            commands::run(Vendor::RadixUiIcons, &vendor_root, &out)
        }
        Commands::Heroicons { vendor_root, out } => {
            commands::run(Vendor::Heroicons, &vendor_root, &out)
        }
        Commands::LucideIcons { vendor_root, out } => {
            commands::run(Vendor::LucideIcons, &vendor_root, &out)
        }
        Commands::Octicons { vendor_root, out } => {
            commands::run(Vendor::Octicons, &vendor_root, &out)
        }
        Commands::PhosphorIcons { vendor_root, out } => {
            commands::run(Vendor::PhosphorIcons, &vendor_root, &out)
        }
        Commands::Svgl { vendor_root, out } => commands::run(Vendor::Svgl, &vendor_root, &out),
        Commands::All {
            vendors_root,
            out_root,
        } => commands::run_all(&vendors_root, &out_root),
    }
}
