use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use unordered_pair::UnorderedPair;

use crate::point::PointId;

/// A candidate connection between two distinct points, annotated with its length.
///
/// The pair is unordered for comparison purposes, but remembers generation order:
/// [`first`](Self::first) is always the lower input index.
#[derive(Clone, Copy, Debug)]
pub struct Pair {
    pub(crate) endpoints: UnorderedPair<PointId>,
    pub(crate) distance: f32,
}

impl Pair {
    pub(crate) fn new(first: PointId, second: PointId, distance: f32) -> Self {
        debug_assert!(first < second);
        Self { endpoints: UnorderedPair(first, second), distance }
    }

    /// The endpoint with the lower input index.
    #[inline]
    pub fn first(&self) -> PointId {
        self.endpoints.0
    }

    /// The endpoint with the higher input index.
    #[inline]
    pub fn second(&self) -> PointId {
        self.endpoints.1
    }

    /// Both endpoints, without regard to order.
    pub fn endpoints(&self) -> UnorderedPair<PointId> {
        self.endpoints
    }

    /// Euclidean length of this pair.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Whether `point` is one of the two endpoints.
    pub fn touches(&self, point: PointId) -> bool {
        self.first() == point || self.second() == point
    }

    /// Order by distance alone.
    /// Callers relying on generation order for ties must use a stable sort.
    pub(crate) fn cmp_distance(&self, other: &Self) -> Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints == other.endpoints && self.distance.to_bits() == other.distance.to_bits()
    }
}

impl Eq for Pair {}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} ({})", self.first(), self.second(), self.distance)
    }
}
