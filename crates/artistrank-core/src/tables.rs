//! Row types for the nine input tables and the `Dataset` snapshot that
//! aggregates them. Counts are `i64` so that out-of-range values survive
//! loading and can be flagged by the validation hook instead of failing the
//! parse; ratios and percentages are `f64` unless the table carries integer
//! percentages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User activity kinds tracked by the weekly event rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Play,
    Favorite,
    Share,
    Download,
    PlaylistAdd,
    Comment,
    ProfileView,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Play => write!(f, "play"),
            EventKind::Favorite => write!(f, "favorite"),
            EventKind::Share => write!(f, "share"),
            EventKind::Download => write!(f, "download"),
            EventKind::PlaylistAdd => write!(f, "playlist_add"),
            EventKind::Comment => write!(f, "comment"),
            EventKind::ProfileView => write!(f, "profile_view"),
        }
    }
}

/// Roster size cohort used by the growth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCohort {
    Small,
    Medium,
    Large,
}

impl std::fmt::Display for SizeCohort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeCohort::Small => write!(f, "small"),
            SizeCohort::Medium => write!(f, "medium"),
            SizeCohort::Large => write!(f, "large"),
        }
    }
}

/// Editorial curation flag; the upstream export uses literal Yes/No strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhostAccount {
    Yes,
    No,
}

impl std::fmt::Display for GhostAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GhostAccount::Yes => write!(f, "Yes"),
            GhostAccount::No => write!(f, "No"),
        }
    }
}

/// Platform-wide totals per event kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTypeRow {
    pub event_type: EventKind,
    pub event_count: i64,
    pub unique_users: i64,
}

/// Per-artist weekly play and listener totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistEngagementRow {
    pub artist: String,
    pub total_plays: i64,
    pub unique_listeners: i64,
}

/// Per-artist activity counts used for the engagement-score derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementRatioRow {
    pub artist: String,
    pub plays: i64,
    pub favorites: i64,
    pub shares: i64,
    pub unique_users: i64,
    pub favorite_to_play_ratio: f64,
}

/// One (artist, country) cell of the geographic play distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRow {
    pub artist: String,
    /// ISO-2 country code.
    pub geo_country: String,
    pub play_count: i64,
    pub unique_listeners: i64,
}

/// Week-over-week growth metrics plus externally supplied composites.
///
/// `artist_momentum_score` is opaque here; the selection model only sorts by
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRow {
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
}

/// One editorial playlist placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorialRow {
    pub added_at: NaiveDate,
    pub song_name: String,
    pub artist_name: String,
    pub is_ghost_account: GhostAccount,
    pub distributor_name: String,
    pub playlist_name: String,
}

/// Song-level engagement counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEngagementRow {
    pub artist: String,
    pub title: String,
    pub total_plays: i64,
    pub total_engagements: i64,
    pub unique_users: i64,
}

/// Traffic attribution by app surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceChannelRow {
    pub source_tab: String,
    pub section: String,
    pub event_count: i64,
}

/// Cross-border opportunity suggestion; percentages are integers in [0, 100].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossBorderRow {
    pub artist: String,
    pub main_audience_geo: String,
    pub song_title: String,
    pub song_audience_geo: String,
    pub overall_geo_pct: i64,
    pub song_geo_pct: i64,
    pub opportunity_geo: String,
    pub opportunity_pct: i64,
}

/// Immutable snapshot of the nine input tables.
///
/// Built once by the loader and passed by read-only reference to the
/// derivation engine; rows are never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub event_types: Vec<EventTypeRow>,
    pub artist_engagement: Vec<ArtistEngagementRow>,
    pub engagement_ratios: Vec<EngagementRatioRow>,
    pub geography: Vec<GeoRow>,
    pub growth: Vec<GrowthRow>,
    pub editorial_playlists: Vec<EditorialRow>,
    pub song_engagement: Vec<SongEngagementRow>,
    pub source_channels: Vec<SourceChannelRow>,
    pub cross_border: Vec<CrossBorderRow>,
}
