//! Dataset loading and validation.
//!
//! Each input table lives in its own YAML file named after the table,
//! row-per-record with exact column names. The loader is the only I/O in
//! this crate; tests and alternate frontends construct [`Dataset`] values
//! directly instead.

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::tables::Dataset;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {table} table at {path}: {source}")]
    TableIo {
        table: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("schema mismatch in {table} table: {source}")]
    Schema {
        table: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Non-fatal finding from [`validate_dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub table: &'static str,
    pub row: usize,
    pub message: String,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} row {}: {}", self.table, self.row, self.message)
    }
}

fn load_table<T: DeserializeOwned>(dir: &Path, table: &'static str) -> Result<Vec<T>, DatasetError> {
    let path = dir.join(format!("{table}.yaml"));
    let content = std::fs::read_to_string(&path).map_err(|e| DatasetError::TableIo {
        table,
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yaml::from_str(&content).map_err(|e| DatasetError::Schema { table, source: e })
}

/// Load the nine input tables from a directory of YAML files.
///
/// Missing or mistyped columns fail the load with an error naming the table;
/// unknown extra columns are ignored.
///
/// # Errors
///
/// Returns [`DatasetError`] if any table file cannot be read or parsed.
pub fn load_dataset(dir: &Path) -> Result<Dataset, DatasetError> {
    Ok(Dataset {
        event_types: load_table(dir, "event_types")?,
        artist_engagement: load_table(dir, "artist_engagement")?,
        engagement_ratios: load_table(dir, "engagement_ratios")?,
        geography: load_table(dir, "geography")?,
        growth: load_table(dir, "growth")?,
        editorial_playlists: load_table(dir, "editorial_playlists")?,
        song_engagement: load_table(dir, "song_engagement")?,
        source_channels: load_table(dir, "source_channels")?,
        cross_border: load_table(dir, "cross_border")?,
    })
}

fn check_non_negative(
    warnings: &mut Vec<ValidationWarning>,
    table: &'static str,
    row: usize,
    column: &str,
    value: i64,
) {
    if value < 0 {
        warnings.push(ValidationWarning {
            table,
            row,
            message: format!("negative {column}: {value}"),
        });
    }
}

/// Flag nonsensical numeric values without correcting them.
///
/// The loader accepts negative counts and out-of-range percentages; this
/// hook surfaces them so callers can log a warning banner. The dataset is
/// usable either way.
#[must_use]
pub fn validate_dataset(dataset: &Dataset) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (i, row) in dataset.event_types.iter().enumerate() {
        check_non_negative(&mut warnings, "event_types", i, "event_count", row.event_count);
        check_non_negative(&mut warnings, "event_types", i, "unique_users", row.unique_users);
        if row.unique_users > row.event_count {
            warnings.push(ValidationWarning {
                table: "event_types",
                row: i,
                message: format!(
                    "unique_users {} exceeds event_count {} for {}",
                    row.unique_users, row.event_count, row.event_type
                ),
            });
        }
    }

    for (i, row) in dataset.artist_engagement.iter().enumerate() {
        check_non_negative(&mut warnings, "artist_engagement", i, "total_plays", row.total_plays);
        check_non_negative(
            &mut warnings,
            "artist_engagement",
            i,
            "unique_listeners",
            row.unique_listeners,
        );
    }

    for (i, row) in dataset.engagement_ratios.iter().enumerate() {
        check_non_negative(&mut warnings, "engagement_ratios", i, "plays", row.plays);
        check_non_negative(&mut warnings, "engagement_ratios", i, "favorites", row.favorites);
        check_non_negative(&mut warnings, "engagement_ratios", i, "shares", row.shares);
        check_non_negative(&mut warnings, "engagement_ratios", i, "unique_users", row.unique_users);
    }

    for (i, row) in dataset.geography.iter().enumerate() {
        check_non_negative(&mut warnings, "geography", i, "play_count", row.play_count);
        check_non_negative(&mut warnings, "geography", i, "unique_listeners", row.unique_listeners);
    }

    for (i, row) in dataset.growth.iter().enumerate() {
        check_non_negative(&mut warnings, "growth", i, "current_plays", row.current_plays);
        check_non_negative(&mut warnings, "growth", i, "previous_plays", row.previous_plays);
        check_non_negative(&mut warnings, "growth", i, "current_listeners", row.current_listeners);
        check_non_negative(&mut warnings, "growth", i, "previous_listeners", row.previous_listeners);
    }

    for (i, row) in dataset.song_engagement.iter().enumerate() {
        check_non_negative(&mut warnings, "song_engagement", i, "total_plays", row.total_plays);
        check_non_negative(
            &mut warnings,
            "song_engagement",
            i,
            "total_engagements",
            row.total_engagements,
        );
        check_non_negative(&mut warnings, "song_engagement", i, "unique_users", row.unique_users);
    }

    for (i, row) in dataset.source_channels.iter().enumerate() {
        check_non_negative(&mut warnings, "source_channels", i, "event_count", row.event_count);
    }

    for (i, row) in dataset.cross_border.iter().enumerate() {
        for (column, value) in [
            ("overall_geo_pct", row.overall_geo_pct),
            ("song_geo_pct", row.song_geo_pct),
            ("opportunity_pct", row.opportunity_pct),
        ] {
            if !(0..=100).contains(&value) {
                warnings.push(ValidationWarning {
                    table: "cross_border",
                    row: i,
                    message: format!("{column} {value} outside [0, 100]"),
                });
            }
        }
        if row.opportunity_pct > 100 - row.overall_geo_pct {
            warnings.push(ValidationWarning {
                table: "cross_border",
                row: i,
                message: format!(
                    "opportunity_pct {} exceeds headroom left by overall_geo_pct {}",
                    row.opportunity_pct, row.overall_geo_pct
                ),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::tables::{CrossBorderRow, EventKind, EventTypeRow, GeoRow};

    #[test]
    fn load_dataset_from_real_data_dir() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("data");
        assert!(dir.is_dir(), "data dir missing at {dir:?} — required for this test");
        let dataset = load_dataset(&dir).expect("failed to load bundled dataset");
        assert!(!dataset.artist_engagement.is_empty());
        assert!(!dataset.geography.is_empty());
        assert!(!dataset.cross_border.is_empty());
        assert_eq!(
            validate_dataset(&dataset),
            Vec::new(),
            "bundled dataset should carry no validation warnings"
        );
    }

    #[test]
    fn load_dataset_missing_dir_names_first_table() {
        let err = load_dataset(Path::new("/nonexistent/dataset/dir")).unwrap_err();
        match err {
            DatasetError::TableIo { table, .. } => assert_eq!(table, "event_types"),
            DatasetError::Schema { .. } => panic!("expected TableIo, got schema error"),
        }
    }

    #[test]
    fn validate_flags_negative_counts() {
        let dataset = Dataset {
            geography: vec![GeoRow {
                artist: "Asake".to_owned(),
                geo_country: "NG".to_owned(),
                play_count: -5,
                unique_listeners: 10,
            }],
            ..Dataset::default()
        };
        let warnings = validate_dataset(&dataset);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].table, "geography");
        assert!(warnings[0].message.contains("negative play_count"));
    }

    #[test]
    fn validate_flags_unique_users_above_event_count() {
        let dataset = Dataset {
            event_types: vec![EventTypeRow {
                event_type: EventKind::Play,
                event_count: 100,
                unique_users: 250,
            }],
            ..Dataset::default()
        };
        let warnings = validate_dataset(&dataset);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("exceeds event_count"));
    }

    #[test]
    fn validate_flags_cross_border_headroom_violation() {
        let dataset = Dataset {
            cross_border: vec![CrossBorderRow {
                artist: "Victony".to_owned(),
                main_audience_geo: "NG".to_owned(),
                song_title: "Control".to_owned(),
                song_audience_geo: "GH".to_owned(),
                overall_geo_pct: 72,
                song_geo_pct: 64,
                opportunity_geo: "GH".to_owned(),
                opportunity_pct: 40,
            }],
            ..Dataset::default()
        };
        let warnings = validate_dataset(&dataset);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("headroom"));
    }

    #[test]
    fn validate_accepts_clean_dataset() {
        assert!(validate_dataset(&Dataset::default()).is_empty());
    }
}
