//! # darkpool-domain
//!
//! Pure domain model for the darkpool analytics dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **statistics snapshot** (aggregate-only market figures)
//! - Define the **metric table**: which statistics are tracked, their labels,
//!   subtitles and static trend classification
//! - Define **display formatting** for every field handed to a card
//! - Define the **render contract** as data (`DashboardView`, `MetricCardProps`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Time-based behaviour and the statistics source live behind ports in `app`.

pub mod error;
pub mod time;

pub mod card;
pub mod format;
pub mod metric;
pub mod stats;
pub mod trend;
pub mod view;
