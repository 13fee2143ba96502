//! The derivation engine: pure transformations that extend each input table
//! with its computed columns, plus the two cross-table artifacts (per-artist
//! geo totals and the market-penetration matrix).
//!
//! Every function here is referentially transparent and idempotent over the
//! shared columns. Ratios and percentages are rounded to two decimals once,
//! at derivation time, so view output needs no further formatting.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::tables::{
    ArtistEngagementRow, CrossBorderRow, Dataset, EditorialRow, EngagementRatioRow, EventTypeRow,
    GeoRow, GhostAccount, GrowthRow, SizeCohort, SongEngagementRow, SourceChannelRow,
};

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `numerator / denominator` rounded to two decimals; 0 when the denominator
/// is 0 (absent engagement rather than undefined).
#[allow(clippy::cast_precision_loss)]
fn ratio_of(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        round2(numerator as f64 / denominator as f64)
    }
}

/// `100 * part / whole` rounded to two decimals; 0 when the whole is 0.
#[allow(clippy::cast_precision_loss)]
fn percent_of(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round2(100.0 * part as f64 / whole as f64)
    }
}

/// Momentum bucket keyed on week-over-week play growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrowthIndicator {
    #[serde(rename = "High Growth")]
    HighGrowth,
    #[serde(rename = "Moderate Growth")]
    ModerateGrowth,
    #[serde(rename = "Stable")]
    Stable,
}

impl GrowthIndicator {
    /// Buckets are disjoint and total: > 40 is High, > 20 is Moderate, the
    /// rest is Stable. Exactly 40 lands in Moderate and exactly 20 in
    /// Stable.
    #[must_use]
    pub fn from_play_growth_pct(pct: f64) -> Self {
        if pct > 40.0 {
            GrowthIndicator::HighGrowth
        } else if pct > 20.0 {
            GrowthIndicator::ModerateGrowth
        } else {
            GrowthIndicator::Stable
        }
    }
}

impl std::fmt::Display for GrowthIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthIndicator::HighGrowth => write!(f, "High Growth"),
            GrowthIndicator::ModerateGrowth => write!(f, "Moderate Growth"),
            GrowthIndicator::Stable => write!(f, "Stable"),
        }
    }
}

/// Editorial playlist name → genre tag. Unmapped playlists stay untagged.
#[must_use]
pub fn playlist_type_for(playlist_name: &str) -> Option<&'static str> {
    match playlist_name {
        "Afrobeats Now" => Some("Afrobeats"),
        "Verified Hip-Hop" => Some("Hip-Hop"),
        "Alte Cruise" => Some("Alternative"),
        "Trending Africa" => Some("Regional"),
        "Verified R&B" => Some("R&B"),
        _ => None,
    }
}

/// Per-artist total plays keyed by artist name.
pub type ArtistGeoTotals = HashMap<String, i64>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistEngagementStats {
    pub artist: String,
    pub total_plays: i64,
    pub unique_listeners: i64,
    /// None when the artist has no listeners; never defaulted downstream.
    pub plays_per_user: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementRatioStats {
    pub artist: String,
    pub plays: i64,
    pub favorites: i64,
    pub shares: i64,
    pub unique_users: i64,
    pub favorite_to_play_ratio: f64,
    pub favorite_ratio: f64,
    pub share_ratio: f64,
    pub engagement_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoStat {
    pub artist: String,
    pub geo_country: String,
    pub play_count: i64,
    pub unique_listeners: i64,
    /// Share of the artist's total plays accounted for by this country.
    pub play_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthStats {
    pub artist: String,
    pub size_cohort: SizeCohort,
    pub current_plays: i64,
    pub previous_plays: i64,
    pub current_listeners: i64,
    pub previous_listeners: i64,
    pub play_growth_pct: f64,
    pub listener_growth_pct: f64,
    pub plays_per_listener: f64,
    pub favorites_per_listener: f64,
    pub shares_per_listener: f64,
    pub artist_momentum_score: f64,
    pub growth_indicator: GrowthIndicator,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorialStats {
    pub added_at: NaiveDate,
    pub song_name: String,
    pub artist_name: String,
    pub is_ghost_account: GhostAccount,
    pub distributor_name: String,
    pub playlist_name: String,
    pub playlist_type: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongEngagementStats {
    pub artist: String,
    pub title: String,
    pub total_plays: i64,
    pub total_engagements: i64,
    pub unique_users: i64,
    pub engagement_per_user: f64,
}

/// One long-form cell of the market-penetration matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PenetrationCell {
    pub artist: String,
    pub country: String,
    pub penetration_pct: f64,
}

#[must_use]
pub fn augment_artist_engagement(rows: &[ArtistEngagementRow]) -> Vec<ArtistEngagementStats> {
    rows.iter()
        .map(|row| ArtistEngagementStats {
            artist: row.artist.clone(),
            total_plays: row.total_plays,
            unique_listeners: row.unique_listeners,
            plays_per_user: if row.unique_listeners == 0 {
                None
            } else {
                Some(ratio_of(row.total_plays, row.unique_listeners))
            },
        })
        .collect()
}

/// Compute per-artist geo totals, then extend every row with its
/// play-percentage share. Artists with a zero total get 0 for every row.
#[must_use]
pub fn augment_geography(rows: &[GeoRow]) -> (Vec<GeoStat>, ArtistGeoTotals) {
    let mut totals = ArtistGeoTotals::new();
    for row in rows {
        *totals.entry(row.artist.clone()).or_insert(0) += row.play_count;
    }

    let stats = rows
        .iter()
        .map(|row| {
            let total = totals.get(&row.artist).copied().unwrap_or(0);
            GeoStat {
                artist: row.artist.clone(),
                geo_country: row.geo_country.clone(),
                play_count: row.play_count,
                unique_listeners: row.unique_listeners,
                play_percentage: percent_of(row.play_count, total),
            }
        })
        .collect();

    (stats, totals)
}

#[must_use]
pub fn augment_engagement_ratios(rows: &[EngagementRatioRow]) -> Vec<EngagementRatioStats> {
    rows.iter()
        .map(|row| {
            let favorite_ratio = ratio_of(row.favorites, row.plays);
            let share_ratio = ratio_of(row.shares, row.plays);
            EngagementRatioStats {
                artist: row.artist.clone(),
                plays: row.plays,
                favorites: row.favorites,
                shares: row.shares,
                unique_users: row.unique_users,
                favorite_to_play_ratio: row.favorite_to_play_ratio,
                favorite_ratio,
                share_ratio,
                engagement_score: round2(10.0 * favorite_ratio + 5.0 * share_ratio),
            }
        })
        .collect()
}

#[must_use]
pub fn augment_growth(rows: &[GrowthRow]) -> Vec<GrowthStats> {
    rows.iter()
        .map(|row| GrowthStats {
            artist: row.artist.clone(),
            size_cohort: row.size_cohort,
            current_plays: row.current_plays,
            previous_plays: row.previous_plays,
            current_listeners: row.current_listeners,
            previous_listeners: row.previous_listeners,
            play_growth_pct: row.play_growth_pct,
            listener_growth_pct: row.listener_growth_pct,
            plays_per_listener: row.plays_per_listener,
            favorites_per_listener: row.favorites_per_listener,
            shares_per_listener: row.shares_per_listener,
            artist_momentum_score: row.artist_momentum_score,
            growth_indicator: GrowthIndicator::from_play_growth_pct(row.play_growth_pct),
        })
        .collect()
}

#[must_use]
pub fn augment_editorial(rows: &[EditorialRow]) -> Vec<EditorialStats> {
    rows.iter()
        .map(|row| EditorialStats {
            added_at: row.added_at,
            song_name: row.song_name.clone(),
            artist_name: row.artist_name.clone(),
            is_ghost_account: row.is_ghost_account,
            distributor_name: row.distributor_name.clone(),
            playlist_name: row.playlist_name.clone(),
            playlist_type: playlist_type_for(&row.playlist_name),
        })
        .collect()
}

#[must_use]
pub fn augment_song_engagement(rows: &[SongEngagementRow]) -> Vec<SongEngagementStats> {
    rows.iter()
        .map(|row| SongEngagementStats {
            artist: row.artist.clone(),
            title: row.title.clone(),
            total_plays: row.total_plays,
            total_engagements: row.total_engagements,
            unique_users: row.unique_users,
            engagement_per_user: ratio_of(row.total_engagements, row.unique_users),
        })
        .collect()
}

/// Project the augmented geography into the long-form penetration matrix.
/// Agrees with `play_percentage` for every (artist, country) pair.
#[must_use]
pub fn build_penetration_matrix(geo_stats: &[GeoStat]) -> Vec<PenetrationCell> {
    geo_stats
        .iter()
        .map(|stat| PenetrationCell {
            artist: stat.artist.clone(),
            country: stat.geo_country.clone(),
            penetration_pct: stat.play_percentage,
        })
        .collect()
}

/// All derived tables plus the underived pass-throughs, produced in one
/// batch from an immutable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedTables {
    pub event_types: Vec<EventTypeRow>,
    pub artist_engagement: Vec<ArtistEngagementStats>,
    pub engagement_ratios: Vec<EngagementRatioStats>,
    pub geography: Vec<GeoStat>,
    pub geo_totals: ArtistGeoTotals,
    pub growth: Vec<GrowthStats>,
    pub editorial_playlists: Vec<EditorialStats>,
    pub song_engagement: Vec<SongEngagementStats>,
    pub source_channels: Vec<SourceChannelRow>,
    pub cross_border: Vec<CrossBorderRow>,
    pub penetration: Vec<PenetrationCell>,
}

impl DerivedTables {
    /// Run the whole derivation pass. Input rows are never mutated; calling
    /// twice with the same snapshot yields equal output.
    #[must_use]
    pub fn build(dataset: &Dataset) -> Self {
        let (geography, geo_totals) = augment_geography(&dataset.geography);
        let penetration = build_penetration_matrix(&geography);
        Self {
            event_types: dataset.event_types.clone(),
            artist_engagement: augment_artist_engagement(&dataset.artist_engagement),
            engagement_ratios: augment_engagement_ratios(&dataset.engagement_ratios),
            geography,
            geo_totals,
            growth: augment_growth(&dataset.growth),
            editorial_playlists: augment_editorial(&dataset.editorial_playlists),
            song_engagement: augment_song_engagement(&dataset.song_engagement),
            source_channels: dataset.source_channels.clone(),
            cross_border: dataset.cross_border.clone(),
            penetration,
        }
    }
}
