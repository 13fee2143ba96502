use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use artistrank_core::{Dashboard, DateRange, Selection, Tab};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "artistrank-cli")]
#[command(about = "ArtistRank dataset inspection tool")]
struct Cli {
    /// Directory holding the nine table files.
    #[arg(long, env = "ARTISTRANK_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the dataset and report schema and value problems.
    Validate,
    /// Print the artist universe, one name per line.
    Artists,
    /// Print one tab slice as JSON.
    Slice {
        /// Tab name: overview, engagement, geography, growth, editorial,
        /// songs, cross-border, report or scouting.
        #[arg(long)]
        tab: Tab,
        #[arg(long)]
        artist: Option<String>,
        /// Inclusive lower bound on editorial added_at (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Inclusive upper bound on editorial added_at (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Print paired geo series for two artists as JSON.
    Compare {
        #[arg(long)]
        primary: String,
        #[arg(long)]
        secondary: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate => validate(&cli.data_dir),
        Commands::Artists => {
            let dataset = artistrank_core::load_dataset(&cli.data_dir)?;
            for artist in artistrank_core::artists_universe(&dataset) {
                println!("{artist}");
            }
            Ok(())
        }
        Commands::Slice {
            tab,
            artist,
            from,
            to,
        } => {
            let dataset = artistrank_core::load_dataset(&cli.data_dir)?;
            let dashboard = Dashboard::new(&dataset);
            let date_range = match (from, to) {
                (None, None) => None,
                (from, to) => Some(DateRange {
                    from: from.unwrap_or(NaiveDate::MIN),
                    to: to.unwrap_or(NaiveDate::MAX),
                }),
            };
            let selection = Selection {
                selected_artist: artist,
                secondary_artist: None,
                date_range,
            };
            let slice = dashboard.slice_for(tab, &selection);
            println!(
                "{}",
                serde_json::to_string_pretty(&slice).context("failed to serialize slice")?
            );
            Ok(())
        }
        Commands::Compare { primary, secondary } => {
            let dataset = artistrank_core::load_dataset(&cli.data_dir)?;
            let dashboard = Dashboard::new(&dataset);
            let comparison = dashboard.compare_geo(&primary, &secondary);
            println!(
                "{}",
                serde_json::to_string_pretty(&comparison)
                    .context("failed to serialize comparison")?
            );
            Ok(())
        }
    }
}

fn validate(data_dir: &Path) -> anyhow::Result<()> {
    let dataset = match artistrank_core::load_dataset(data_dir) {
        Ok(dataset) => dataset,
        Err(err) => bail!("dataset failed to load: {err}"),
    };

    let warnings = artistrank_core::validate_dataset(&dataset);
    if warnings.is_empty() {
        println!(
            "dataset ok: {} artists, {} geo rows, {} placements",
            artistrank_core::artists_universe(&dataset).len(),
            dataset.geography.len(),
            dataset.editorial_playlists.len()
        );
        return Ok(());
    }

    for warning in &warnings {
        eprintln!("warning: {warning}");
    }
    println!("dataset loaded with {} warnings", warnings.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_args_are_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn slice_command_parses_tab_and_dates() {
        let cli = Cli::parse_from([
            "artistrank-cli",
            "slice",
            "--tab",
            "cross-border",
            "--artist",
            "Victony",
            "--from",
            "2025-07-01",
        ]);
        let Commands::Slice {
            tab,
            artist,
            from,
            to,
        } = cli.command
        else {
            panic!("expected slice command");
        };
        assert_eq!(tab, Tab::CrossBorder);
        assert_eq!(artist.as_deref(), Some("Victony"));
        assert_eq!(from, NaiveDate::from_ymd_opt(2025, 7, 1));
        assert_eq!(to, None);
    }

    #[test]
    fn unknown_tab_is_rejected() {
        let result = Cli::try_parse_from(["artistrank-cli", "slice", "--tab", "trending"]);
        assert!(result.is_err(), "expected parse failure, got: {result:?}");
    }
}
