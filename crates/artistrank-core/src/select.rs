//! The selection model: resolves a user selection (tab, artist, date range)
//! against the memoized derived tables and returns the slice that view needs.
//!
//! Slices never fail: an unknown artist yields an empty slice carrying a
//! `missing_artist` sentinel, and numeric edge cases are absorbed here with
//! a diagnostic note so the view layer always receives a well-typed record.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::derive::{
    ArtistEngagementStats, DerivedTables, EditorialStats, EngagementRatioStats, GeoStat,
    GrowthStats, SongEngagementStats,
};
use crate::tables::{CrossBorderRow, Dataset, EventTypeRow, SourceChannelRow};

/// Overview keeps the ten busiest artists.
const TOP_ARTISTS: usize = 10;

// Fixed secondary shares of the synthesized cross-border distribution.
// TODO: derive these from the artist's geography rows instead of fixed
// shares; the NG bucket already comes from the data.
const CROSS_BORDER_SHARES: [(&str, i64); 3] = [("GH", 10), ("US", 8), ("UK", 7)];

/// Dashboard tabs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    Overview,
    Engagement,
    Geography,
    Growth,
    Editorial,
    Songs,
    CrossBorder,
    Report,
    Scouting,
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tab::Overview => "overview",
            Tab::Engagement => "engagement",
            Tab::Geography => "geography",
            Tab::Growth => "growth",
            Tab::Editorial => "editorial",
            Tab::Songs => "songs",
            Tab::CrossBorder => "cross-border",
            Tab::Report => "report",
            Tab::Scouting => "scouting",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(Tab::Overview),
            "engagement" => Ok(Tab::Engagement),
            "geography" => Ok(Tab::Geography),
            "growth" => Ok(Tab::Growth),
            "editorial" => Ok(Tab::Editorial),
            "songs" => Ok(Tab::Songs),
            "cross-border" => Ok(Tab::CrossBorder),
            "report" => Ok(Tab::Report),
            "scouting" => Ok(Tab::Scouting),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

/// Closed interval over editorial `added_at` dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// Filter state accompanying a tab request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub selected_artist: Option<String>,
    pub secondary_artist: Option<String>,
    pub date_range: Option<DateRange>,
}

impl Selection {
    #[must_use]
    pub fn for_artist(artist: &str) -> Self {
        Selection {
            selected_artist: Some(artist.to_owned()),
            ..Selection::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewSlice {
    pub top_artists: Vec<ArtistEngagementStats>,
    pub event_types: Vec<EventTypeRow>,
    pub source_channels: Vec<SourceChannelRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementSlice {
    pub rows: Vec<EngagementRatioStats>,
    pub missing_artist: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeographySlice {
    pub rows: Vec<GeoStat>,
    /// Total plays for the selected artist (all artists when none selected).
    pub total_plays: i64,
    pub missing_artist: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSlice {
    pub rows: Vec<GrowthStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorialSlice {
    pub rows: Vec<EditorialStats>,
    pub missing_artist: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongsSlice {
    pub rows: Vec<SongEngagementStats>,
    pub missing_artist: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoBucket {
    pub geo: String,
    pub pct: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossBorderSlice {
    pub rows: Vec<CrossBorderRow>,
    /// Synthesized five-bucket distribution: NG, GH, US, UK, Other.
    pub distribution: Vec<GeoBucket>,
    /// Non-fatal diagnostics (geo overflow clamps).
    pub notes: Vec<String>,
    pub missing_artist: bool,
}

/// Report and Scouting carry static view copy; the core contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptySlice {}

/// One view-model record per tab; serializes as the record itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TabSlice {
    Overview(OverviewSlice),
    Engagement(EngagementSlice),
    Geography(GeographySlice),
    Growth(GrowthSlice),
    Editorial(EditorialSlice),
    Songs(SongsSlice),
    CrossBorder(CrossBorderSlice),
    Empty(EmptySlice),
}

/// One aligned row of a two-artist geography comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCompareRow {
    pub geo_country: String,
    pub primary_plays: i64,
    pub primary_pct: f64,
    pub secondary_plays: i64,
    pub secondary_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoComparison {
    pub primary: String,
    pub secondary: String,
    pub rows: Vec<GeoCompareRow>,
    pub missing_artist: bool,
}

/// Sorted set-union of `artist` across the six artist-keyed tables. This is
/// the authoritative list for selectors.
#[must_use]
pub fn artists_universe(dataset: &Dataset) -> Vec<String> {
    let mut names = BTreeSet::new();
    names.extend(dataset.artist_engagement.iter().map(|r| r.artist.clone()));
    names.extend(dataset.engagement_ratios.iter().map(|r| r.artist.clone()));
    names.extend(dataset.growth.iter().map(|r| r.artist.clone()));
    names.extend(dataset.geography.iter().map(|r| r.artist.clone()));
    names.extend(dataset.song_engagement.iter().map(|r| r.artist.clone()));
    names.extend(dataset.cross_border.iter().map(|r| r.artist.clone()));
    names.into_iter().collect()
}

/// Memoized derivation output plus the artist universe.
///
/// Built once per process lifetime; read-only and freely shareable
/// afterwards, so selection calls are plain lookups with no locking.
#[derive(Debug, Clone)]
pub struct Dashboard {
    derived: DerivedTables,
    universe: Vec<String>,
}

impl Dashboard {
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        Dashboard {
            derived: DerivedTables::build(dataset),
            universe: artists_universe(dataset),
        }
    }

    #[must_use]
    pub fn artists_universe(&self) -> &[String] {
        &self.universe
    }

    #[must_use]
    pub fn derived(&self) -> &DerivedTables {
        &self.derived
    }

    fn knows(&self, artist: &str) -> bool {
        self.universe.binary_search_by(|name| name.as_str().cmp(artist)).is_ok()
    }

    /// True when the selection names an artist outside the universe; such a
    /// slice must come back empty with the sentinel set.
    fn missing(&self, selection: &Selection) -> bool {
        selection
            .selected_artist
            .as_deref()
            .is_some_and(|artist| !self.knows(artist))
    }

    /// Resolve one tab against the current selection.
    #[must_use]
    pub fn slice_for(&self, tab: Tab, selection: &Selection) -> TabSlice {
        match tab {
            Tab::Overview => TabSlice::Overview(self.overview_slice()),
            Tab::Engagement => TabSlice::Engagement(self.engagement_slice(selection)),
            Tab::Geography => TabSlice::Geography(self.geography_slice(selection)),
            Tab::Growth => TabSlice::Growth(self.growth_slice()),
            Tab::Editorial => TabSlice::Editorial(self.editorial_slice(selection)),
            Tab::Songs => TabSlice::Songs(self.songs_slice(selection)),
            Tab::CrossBorder => TabSlice::CrossBorder(self.cross_border_slice(selection)),
            Tab::Report | Tab::Scouting => TabSlice::Empty(EmptySlice {}),
        }
    }

    fn overview_slice(&self) -> OverviewSlice {
        let mut top = self.derived.artist_engagement.clone();
        top.sort_by(|a, b| {
            b.total_plays
                .cmp(&a.total_plays)
                .then_with(|| a.artist.cmp(&b.artist))
        });
        top.truncate(TOP_ARTISTS);
        OverviewSlice {
            top_artists: top,
            event_types: self.derived.event_types.clone(),
            source_channels: self.derived.source_channels.clone(),
        }
    }

    fn engagement_slice(&self, selection: &Selection) -> EngagementSlice {
        if self.missing(selection) {
            return EngagementSlice {
                rows: Vec::new(),
                missing_artist: true,
            };
        }
        let rows = self
            .derived
            .engagement_ratios
            .iter()
            .filter(|row| matches_artist(selection.selected_artist.as_deref(), &row.artist))
            .cloned()
            .collect();
        EngagementSlice {
            rows,
            missing_artist: false,
        }
    }

    fn geography_slice(&self, selection: &Selection) -> GeographySlice {
        if self.missing(selection) {
            return GeographySlice {
                rows: Vec::new(),
                total_plays: 0,
                missing_artist: true,
            };
        }
        let mut rows: Vec<GeoStat> = self
            .derived
            .geography
            .iter()
            .filter(|row| matches_artist(selection.selected_artist.as_deref(), &row.artist))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.play_count.cmp(&a.play_count));
        let total_plays = match selection.selected_artist.as_deref() {
            Some(artist) => self.derived.geo_totals.get(artist).copied().unwrap_or(0),
            None => self.derived.geo_totals.values().sum(),
        };
        GeographySlice {
            rows,
            total_plays,
            missing_artist: false,
        }
    }

    fn growth_slice(&self) -> GrowthSlice {
        let mut rows = self.derived.growth.clone();
        rows.sort_by(|a, b| {
            b.artist_momentum_score
                .partial_cmp(&a.artist_momentum_score)
                .unwrap_or(Ordering::Equal)
        });
        GrowthSlice { rows }
    }

    fn editorial_slice(&self, selection: &Selection) -> EditorialSlice {
        if self.missing(selection) {
            return EditorialSlice {
                rows: Vec::new(),
                missing_artist: true,
            };
        }
        let mut rows: Vec<EditorialStats> = self
            .derived
            .editorial_playlists
            .iter()
            .filter(|row| matches_artist(selection.selected_artist.as_deref(), &row.artist_name))
            .filter(|row| {
                selection
                    .date_range
                    .is_none_or(|range| range.contains(row.added_at))
            })
            .cloned()
            .collect();
        // Stable sort keeps the input order of same-day placements.
        rows.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        EditorialSlice {
            rows,
            missing_artist: false,
        }
    }

    fn songs_slice(&self, selection: &Selection) -> SongsSlice {
        if self.missing(selection) {
            return SongsSlice {
                rows: Vec::new(),
                missing_artist: true,
            };
        }
        let mut rows: Vec<SongEngagementStats> = self
            .derived
            .song_engagement
            .iter()
            .filter(|row| matches_artist(selection.selected_artist.as_deref(), &row.artist))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.total_plays.cmp(&a.total_plays));
        SongsSlice {
            rows,
            missing_artist: false,
        }
    }

    fn cross_border_slice(&self, selection: &Selection) -> CrossBorderSlice {
        if self.missing(selection) {
            return CrossBorderSlice {
                rows: Vec::new(),
                distribution: Vec::new(),
                notes: Vec::new(),
                missing_artist: true,
            };
        }
        let rows: Vec<CrossBorderRow> = self
            .derived
            .cross_border
            .iter()
            .filter(|row| matches_artist(selection.selected_artist.as_deref(), &row.artist))
            .cloned()
            .collect();
        let mut notes = Vec::new();
        let distribution = synthesize_distribution(&rows, &mut notes);
        CrossBorderSlice {
            rows,
            distribution,
            notes,
            missing_artist: false,
        }
    }

    /// Paired geo series for two artists, aligned on the union of their
    /// countries; countries absent for one side contribute a zero row.
    #[must_use]
    pub fn compare_geo(&self, primary: &str, secondary: &str) -> GeoComparison {
        let missing_artist = !self.knows(primary) || !self.knows(secondary);

        let countries: BTreeSet<&str> = self
            .derived
            .geography
            .iter()
            .filter(|row| row.artist == primary || row.artist == secondary)
            .map(|row| row.geo_country.as_str())
            .collect();

        let find = |artist: &str, country: &str| -> (i64, f64) {
            self.derived
                .geography
                .iter()
                .find(|row| row.artist == artist && row.geo_country == country)
                .map_or((0, 0.0), |row| (row.play_count, row.play_percentage))
        };

        let rows = countries
            .into_iter()
            .map(|country| {
                let (primary_plays, primary_pct) = find(primary, country);
                let (secondary_plays, secondary_pct) = find(secondary, country);
                GeoCompareRow {
                    geo_country: country.to_owned(),
                    primary_plays,
                    primary_pct,
                    secondary_plays,
                    secondary_pct,
                }
            })
            .collect();

        GeoComparison {
            primary: primary.to_owned(),
            secondary: secondary.to_owned(),
            rows,
            missing_artist,
        }
    }
}

fn matches_artist(selected: Option<&str>, artist: &str) -> bool {
    selected.is_none_or(|name| name == artist)
}

/// Five-bucket distribution for the cross-border view: the artist's home
/// share from the first matching row, fixed secondary shares, and an Other
/// remainder clamped to [0, 100].
fn synthesize_distribution(rows: &[CrossBorderRow], notes: &mut Vec<String>) -> Vec<GeoBucket> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let home_pct = first.overall_geo_pct;
    let named_sum: i64 = home_pct + CROSS_BORDER_SHARES.iter().map(|(_, pct)| pct).sum::<i64>();
    let mut other = 100 - named_sum;
    if other < 0 {
        warn!(
            artist = %first.artist,
            named_sum,
            "geo overflow: named buckets exceed 100, clamping Other to 0"
        );
        notes.push(format!(
            "geo overflow: named buckets sum to {named_sum} for {}, Other clamped to 0",
            first.artist
        ));
        other = 0;
    } else if other > 100 {
        other = 100;
    }

    let mut distribution = Vec::with_capacity(CROSS_BORDER_SHARES.len() + 2);
    distribution.push(GeoBucket {
        geo: "NG".to_owned(),
        pct: home_pct,
    });
    for (geo, pct) in CROSS_BORDER_SHARES {
        distribution.push(GeoBucket {
            geo: geo.to_owned(),
            pct,
        });
    }
    distribution.push(GeoBucket {
        geo: "Other".to_owned(),
        pct: other,
    });
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{
        ArtistEngagementRow, EditorialRow, GeoRow, GhostAccount, SongEngagementRow,
    };

    fn cross_border_row(artist: &str, song: &str, overall: i64) -> CrossBorderRow {
        CrossBorderRow {
            artist: artist.to_owned(),
            main_audience_geo: "NG".to_owned(),
            song_title: song.to_owned(),
            song_audience_geo: "GH".to_owned(),
            overall_geo_pct: overall,
            song_geo_pct: overall - 8,
            opportunity_geo: "GH".to_owned(),
            opportunity_pct: (100 - overall).min(14),
        }
    }

    fn victony_dataset() -> Dataset {
        Dataset {
            artist_engagement: vec![
                ArtistEngagementRow {
                    artist: "Victony".to_owned(),
                    total_plays: 3_500_000,
                    unique_listeners: 1_000_000,
                },
                ArtistEngagementRow {
                    artist: "Asake".to_owned(),
                    total_plays: 2_800_000,
                    unique_listeners: 700_000,
                },
            ],
            geography: vec![
                GeoRow {
                    artist: "Victony".to_owned(),
                    geo_country: "NG".to_owned(),
                    play_count: 2_520_000,
                    unique_listeners: 720_000,
                },
                GeoRow {
                    artist: "Victony".to_owned(),
                    geo_country: "GH".to_owned(),
                    play_count: 350_000,
                    unique_listeners: 100_000,
                },
                GeoRow {
                    artist: "Victony".to_owned(),
                    geo_country: "US".to_owned(),
                    play_count: 315_000,
                    unique_listeners: 90_000,
                },
                GeoRow {
                    artist: "Victony".to_owned(),
                    geo_country: "UK".to_owned(),
                    play_count: 315_000,
                    unique_listeners: 90_000,
                },
                GeoRow {
                    artist: "Asake".to_owned(),
                    geo_country: "NG".to_owned(),
                    play_count: 1_680_000,
                    unique_listeners: 420_000,
                },
            ],
            song_engagement: vec![SongEngagementRow {
                artist: "Victony".to_owned(),
                title: "Control".to_owned(),
                total_plays: 1_400_000,
                total_engagements: 35_000,
                unique_users: 140_000,
            }],
            cross_border: vec![
                cross_border_row("Victony", "Control", 72),
                cross_border_row("Victony", "Soweto", 72),
            ],
            ..Dataset::default()
        }
    }

    #[test]
    fn universe_is_sorted_union_of_artist_keyed_tables() {
        let dataset = victony_dataset();
        assert_eq!(artists_universe(&dataset), vec!["Asake", "Victony"]);
    }

    #[test]
    fn geography_slice_for_victony() {
        let dashboard = Dashboard::new(&victony_dataset());
        let slice = dashboard.slice_for(Tab::Geography, &Selection::for_artist("Victony"));
        let TabSlice::Geography(slice) = slice else {
            panic!("expected geography slice");
        };
        assert!(!slice.missing_artist);
        assert_eq!(slice.total_plays, 3_500_000);
        assert_eq!(slice.rows.len(), 4);
        let countries: BTreeSet<&str> =
            slice.rows.iter().map(|r| r.geo_country.as_str()).collect();
        assert_eq!(countries, BTreeSet::from(["NG", "GH", "US", "UK"]));
        let plays: i64 = slice.rows.iter().map(|r| r.play_count).sum();
        assert_eq!(plays, 3_500_000);
        // Sorted by play_count descending.
        assert_eq!(slice.rows[0].geo_country, "NG");
    }

    #[test]
    fn cross_border_slice_synthesizes_five_buckets() {
        let dashboard = Dashboard::new(&victony_dataset());
        let slice = dashboard.slice_for(Tab::CrossBorder, &Selection::for_artist("Victony"));
        let TabSlice::CrossBorder(slice) = slice else {
            panic!("expected cross-border slice");
        };
        assert_eq!(slice.rows.len(), 2);
        let buckets: Vec<(&str, i64)> = slice
            .distribution
            .iter()
            .map(|b| (b.geo.as_str(), b.pct))
            .collect();
        assert_eq!(
            buckets,
            vec![("NG", 72), ("GH", 10), ("US", 8), ("UK", 7), ("Other", 3)]
        );
        assert!(slice.notes.is_empty());
    }

    #[test]
    fn cross_border_overflow_clamps_other_with_note() {
        let dataset = Dataset {
            cross_border: vec![cross_border_row("Victony", "Control", 90)],
            ..Dataset::default()
        };
        let dashboard = Dashboard::new(&dataset);
        let slice = dashboard.slice_for(Tab::CrossBorder, &Selection::for_artist("Victony"));
        let TabSlice::CrossBorder(slice) = slice else {
            panic!("expected cross-border slice");
        };
        let other = slice.distribution.last().expect("Other bucket");
        assert_eq!(other.pct, 0);
        assert_eq!(slice.notes.len(), 1);
        assert!(slice.notes[0].contains("geo overflow"));
    }

    #[test]
    fn unknown_artist_yields_empty_slice_with_sentinel() {
        let dashboard = Dashboard::new(&victony_dataset());
        let slice = dashboard.slice_for(Tab::Songs, &Selection::for_artist("Nobody"));
        let TabSlice::Songs(slice) = slice else {
            panic!("expected songs slice");
        };
        assert!(slice.missing_artist);
        assert!(slice.rows.is_empty());
    }

    #[test]
    fn overview_slice_is_top_ten_by_plays_then_name() {
        let mut dataset = Dataset::default();
        for i in 0..12 {
            dataset.artist_engagement.push(ArtistEngagementRow {
                artist: format!("Artist {:02}", 11 - i),
                total_plays: 1_000 * (i64::from(i) / 2),
                unique_listeners: 10,
            });
        }
        let dashboard = Dashboard::new(&dataset);
        let TabSlice::Overview(slice) =
            dashboard.slice_for(Tab::Overview, &Selection::default())
        else {
            panic!("expected overview slice");
        };
        assert_eq!(slice.top_artists.len(), 10);
        for pair in slice.top_artists.windows(2) {
            let ordered = pair[0].total_plays > pair[1].total_plays
                || (pair[0].total_plays == pair[1].total_plays
                    && pair[0].artist < pair[1].artist);
            assert!(ordered, "overview out of order: {pair:?}");
        }
    }

    #[test]
    fn editorial_slice_filters_by_closed_date_range() {
        let mut dataset = Dataset::default();
        for (day, song) in [(7, "Early"), (14, "Mid"), (21, "Late")] {
            dataset.editorial_playlists.push(EditorialRow {
                added_at: NaiveDate::from_ymd_opt(2025, 7, day).unwrap(),
                song_name: song.to_owned(),
                artist_name: "Asake".to_owned(),
                is_ghost_account: GhostAccount::No,
                distributor_name: "Audiosalad Direct".to_owned(),
                playlist_name: "Afrobeats Now".to_owned(),
            });
        }
        let dashboard = Dashboard::new(&dataset);
        let selection = Selection {
            date_range: Some(DateRange {
                from: NaiveDate::from_ymd_opt(2025, 7, 7).unwrap(),
                to: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
            }),
            ..Selection::default()
        };
        let TabSlice::Editorial(slice) = dashboard.slice_for(Tab::Editorial, &selection) else {
            panic!("expected editorial slice");
        };
        // Both endpoints inclusive, newest first.
        let songs: Vec<&str> = slice.rows.iter().map(|r| r.song_name.as_str()).collect();
        assert_eq!(songs, vec!["Mid", "Early"]);
    }

    #[test]
    fn report_and_scouting_return_empty_slices() {
        let dashboard = Dashboard::new(&victony_dataset());
        assert_eq!(
            dashboard.slice_for(Tab::Report, &Selection::default()),
            TabSlice::Empty(EmptySlice {})
        );
        assert_eq!(
            dashboard.slice_for(Tab::Scouting, &Selection::default()),
            TabSlice::Empty(EmptySlice {})
        );
    }

    #[test]
    fn compare_geo_aligns_countries_with_zero_fill() {
        let dashboard = Dashboard::new(&victony_dataset());
        let comparison = dashboard.compare_geo("Victony", "Asake");
        assert!(!comparison.missing_artist);
        let countries: Vec<&str> = comparison
            .rows
            .iter()
            .map(|r| r.geo_country.as_str())
            .collect();
        assert_eq!(countries, vec!["GH", "NG", "UK", "US"]);
        let gh = &comparison.rows[0];
        assert_eq!(gh.primary_plays, 350_000);
        assert_eq!(gh.secondary_plays, 0);
        assert_eq!(gh.secondary_pct, 0.0);
    }

    #[test]
    fn compare_geo_flags_unknown_artist() {
        let dashboard = Dashboard::new(&victony_dataset());
        let comparison = dashboard.compare_geo("Victony", "Nobody");
        assert!(comparison.missing_artist);
    }

    #[test]
    fn tab_round_trips_through_str() {
        for tab in [
            Tab::Overview,
            Tab::Engagement,
            Tab::Geography,
            Tab::Growth,
            Tab::Editorial,
            Tab::Songs,
            Tab::CrossBorder,
            Tab::Report,
            Tab::Scouting,
        ] {
            let parsed: Tab = tab.to_string().parse().expect("round trip");
            assert_eq!(parsed, tab);
        }
        assert!("trending".parse::<Tab>().is_err());
    }
}
