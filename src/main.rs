use clap::Parser;

use sweep::{
    cli::{Args, Commands},
    config::SweepConfig,
    duplicates::find_duplicate_groups,
    errors::SweepError,
    loader::load_media_items,
    stats::storage_stats,
    utils::{create_classifier_registry, default_config_path, humanize, init_tracing},
};

fn load_config(args: &Args) -> Result<SweepConfig, SweepError> {
    match &args.config {
        Some(path) => SweepConfig::load_from_file(path),
        None => {
            let path = default_config_path();
            if !path.is_file() {
                return Ok(SweepConfig::default());
            }
            tracing::debug!("Using config at {}", path.display());
            match SweepConfig::load_from_file(&path) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::warn!("Ignoring {}: {}", path.display(), humanize(&e));
                    Ok(SweepConfig::default())
                }
            }
        }
    }
}

fn run(args: Args) -> Result<(), SweepError> {
    let config = load_config(&args)?;
    let registry = create_classifier_registry(&config);

    match args.cmd {
        Commands::Categorize { input, json } => {
            let items = load_media_items(&input)?;
            let categorized = registry.categorize(&items);
            if json {
                println!("{}", to_json(&categorized)?);
            } else {
                print!("{categorized}");
            }
        }
        Commands::Duplicates { input, json } => {
            let items = load_media_items(&input)?;
            let report = find_duplicate_groups(&items);
            if json {
                println!("{}", to_json(&report)?);
            } else {
                print!("{report}");
            }
        }
        Commands::Stats { input, json } => {
            let items = load_media_items(&input)?;
            let stats = storage_stats(&items, &registry, &config);
            if json {
                println!("{}", to_json(&stats)?);
            } else {
                print!("{stats}");
            }
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, SweepError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    run(args).map_err(|e| anyhow::anyhow!(humanize(&e)))
}
