use std::cell::OnceCell;
use std::ops::Index;
use std::str::FromStr;

use itertools::Itertools;

use crate::builder::PointSetBuilder;
use crate::pair::Pair;
use crate::point::{MalformedPoint, Point, PointId};

/// The fixed, ordered collection of junction boxes, and the generator of every pair between them.
///
/// A [`PointSet`] is immutable once built.
/// The sorted pair sequence is computed on first use and cached for the lifetime of the set.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    pub(crate) points: Vec<Point>,
    pairs: OnceCell<Vec<Pair>>,
}

impl PointSet {
    pub(crate) fn from_points(points: Vec<Point>) -> Self {
        Self { points, pairs: OnceCell::new() }
    }

    /// The number of points, duplicates included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set has no points at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point with the given identity, if it is part of this set.
    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.index())
    }

    /// All identities, in input order.
    pub fn ids(&self) -> impl Iterator<Item=PointId> + '_ {
        (0..self.points.len()).map(PointId)
    }

    /// All points with their identities, in input order.
    pub fn iter(&self) -> impl Iterator<Item=(PointId, &Point)> + '_ {
        self.points.iter().enumerate().map(|(index, point)| (PointId(index), point))
    }

    /// The number of unordered pairs, `n * (n - 1) / 2`.
    pub fn pair_count(&self) -> usize {
        let n = self.points.len();
        n * n.saturating_sub(1) / 2
    }

    /// Every unordered pair of distinct points exactly once, sorted by ascending distance.
    ///
    /// Pairs of equal distance keep their generation order:
    /// ascending input index of the first point, then ascending input index of the second.
    /// The result is computed once and every later call returns the same slice.
    pub fn all_pairs_sorted(&self) -> &[Pair] {
        self.pairs.get_or_init(|| {
            let mut pairs = Vec::with_capacity(self.pair_count());
            // (i, j) with i < j, in input order
            pairs.extend(self.points.iter()
                .enumerate()
                .tuple_combinations()
                .map(|((a, pa), (b, pb))| Pair::new(PointId(a), PointId(b), pa.distance_to(pb))));

            // stable, so ties stay in generation order
            pairs.sort_by(Pair::cmp_distance);
            log::trace!("generated {} pairs over {} points", pairs.len(), self.points.len());
            pairs
        })
    }

    /// The `n` closest pairs, i.e. a prefix of [`Self::all_pairs_sorted`].
    ///
    /// A count beyond the number of pairs is clamped rather than rejected.
    pub fn first_n_pairs(&self, n: usize) -> &[Pair] {
        let pairs = self.all_pairs_sorted();
        &pairs[..n.min(pairs.len())]
    }

    /// As [`Self::first_n_pairs`], for callers holding a signed count. Negative counts are clamped to 0.
    pub fn first_n_pairs_signed(&self, n: i64) -> &[Pair] {
        self.first_n_pairs(usize::try_from(n).unwrap_or(0))
    }
}

impl Index<PointId> for PointSet {
    type Output = Point;

    fn index(&self, id: PointId) -> &Self::Output {
        &self.points[id.index()]
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<T: IntoIterator<Item=Point>>(iter: T) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl FromStr for PointSet {
    type Err = Vec<MalformedPoint>;

    /// Read one `x,y,z` record per non-empty line.
    /// Every malformed line is reported, not only the first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = PointSetBuilder::default();
        for (index, line) in s.lines().enumerate() {
            builder.add_record(index + 1, line);
        }

        builder.build().map_err(|reasons| reasons.clone())
    }
}
