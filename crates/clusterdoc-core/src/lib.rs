//! # Clusterdoc Core
//!
//! Core types and logic for turning a clustered support-ticket export into a
//! formatted report: the [`TicketRecord`] data model, ordered grouping by
//! cluster id, and the per-cluster renderer that produces bold-flagged
//! display lines.
//!
//! The pipeline is strictly sequential: records are ingested (by
//! `clusterdoc-backend`), grouped once into a [`ClusterGroups`], rendered
//! cluster by cluster in ascending id order, and written out as DOCX
//! paragraphs. Everything in this crate is pure logic with no file I/O,
//! which keeps the grouping and rendering rules unit-testable in isolation.
//!
//! ## Quick Start
//!
//! ```rust
//! use clusterdoc_core::{group_records, ClusterRenderer, TicketRecord};
//!
//! let records = vec![
//!     TicketRecord {
//!         problem_reported: "VPN drops every hour".to_string(),
//!         solution: "Reissued certificate".to_string(),
//!         cluster: 7,
//!         ..Default::default()
//!     },
//! ];
//!
//! let groups = group_records(records);
//! let renderer = ClusterRenderer::default();
//! for (cluster_id, cluster_records) in groups.iter() {
//!     let blocks = renderer.render_cluster(cluster_id, cluster_records);
//!     assert!(!blocks.is_empty());
//! }
//! ```

pub mod cluster;
pub mod error;
pub mod record;
pub mod render;

pub use cluster::{group_records, ClusterGroups};
pub use error::{ReportError, Result};
pub use record::TicketRecord;
pub use render::{ClusterBlock, ClusterRenderer, Line, MAX_FIELD_CHARS, UNCLUSTERED_ID};
