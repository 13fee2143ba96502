//! Core of the ArtistRank dashboard backend: the nine weekly metric tables,
//! the one-shot derivation pass that computes every figure the charts show,
//! and the selection model that answers per-tab queries with view-model
//! slices. Everything here is synchronous and pure apart from the loader.

mod app_config;
mod config;
mod derive;
mod load;
mod select;
mod tables;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use derive::{
    augment_artist_engagement, augment_editorial, augment_engagement_ratios, augment_geography,
    augment_growth, augment_song_engagement, build_penetration_matrix, playlist_type_for, round2,
    ArtistEngagementStats, ArtistGeoTotals, DerivedTables, EditorialStats, EngagementRatioStats,
    GeoStat, GrowthIndicator, GrowthStats, PenetrationCell, SongEngagementStats,
};
pub use load::{load_dataset, validate_dataset, DatasetError, ValidationWarning};
pub use select::{
    artists_universe, CrossBorderSlice, Dashboard, DateRange, EditorialSlice, EmptySlice,
    EngagementSlice, GeoBucket, GeoComparison, GeoCompareRow, GeographySlice, GrowthSlice,
    OverviewSlice, Selection, SongsSlice, Tab, TabSlice,
};
pub use tables::{
    ArtistEngagementRow, CrossBorderRow, Dataset, EditorialRow, EngagementRatioRow, EventKind,
    EventTypeRow, GeoRow, GhostAccount, GrowthRow, SizeCohort, SongEngagementRow, SourceChannelRow,
};
