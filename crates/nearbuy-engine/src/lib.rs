//! Nearbuy Engine - Catalog filtering and ranking
//!
//! This crate implements the filter-rank pipeline: vendor scoping, free-text
//! search, price bounds, category filtering, store matching, and sorting over
//! distance-annotated product lists.

pub mod filter;
pub mod models;
pub mod pipeline;
pub mod sort;

pub use models::{
    BrowseRequest, BrowseResult, BrowseScope, FilterCriteria, FilterExplanation, SortMode,
    StageCounts,
};
pub use pipeline::{display_products, filter_and_rank, DisplayPipeline};
