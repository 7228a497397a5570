#![warn(missing_docs)]

//! # `junctions`
//!
//! Incremental connectivity for a field of junction boxes in 3-D space.
//! Begin by building a [`PointSet`], either with a [`PointSetBuilder`] or by parsing `x,y,z` lines.
//! Wrap it in a [`ComponentTracker`], then either jump to "the `n` closest pairs connected"
//! with [`build_from_first_n_edges`](ComponentTracker::build_from_first_n_edges)
//! or walk one connection at a time with [`step`](ComponentTracker::step).
//!
//! # Internals
//! Every unordered pair of points is generated once, annotated with its Euclidean distance,
//! and sorted ascending with a stable sort, so pairs of equal length keep input order.
//! This sequence is computed lazily and cached on the [`PointSet`].
//!
//! The tracker walks the sequence with a cursor. Each applied edge goes into two structures:
//! 1. a disjoint-set forest over point indices, which gives the partition into components;
//! 2. the undirected graph of applied edges, which records whether a point has been connected at all.
//!
//! The second decides which point a [`MergeEvent`] reports as newly attached:
//! if exactly one endpoint of the edge had been connected before, the other one is the newcomer.
//! If both or neither had, the first endpoint in input order is named.
//! The graph also backs [`ComponentTracker::sweep`], a plain reachability sweep that must agree with the forest.

pub use builder::PointSetBuilder;
pub use event::{MergeEvent, MergeKind};
pub use pair::Pair;
pub use partition::{Component, Partition};
pub use point::{Coord, MalformedPoint, MalformedReason, Point, PointId};
pub use point_set::PointSet;
pub use tracker::ComponentTracker;

pub(crate) mod point;
pub(crate) mod pair;
pub(crate) mod point_set;
pub mod builder;
pub(crate) mod partition;
pub(crate) mod event;
pub(crate) mod tracker;
