use crate::point::{MalformedPoint, Point};
use crate::point_set::PointSet;

/// Accumulates points in input order and converts them into a [`PointSet`].
///
/// Like any builder here, it mutates itself while building but can be [`Clone`]d to save its state at some point.
/// Malformed records do not stop the builder; they are collected and reported together by [`Self::build`].
#[derive(Clone, Debug, Default)]
pub struct PointSetBuilder {
    points: Vec<Point>,
    invalid_reasons: Vec<MalformedPoint>,
}

impl PointSetBuilder {
    /// Construct a builder with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            invalid_reasons: Vec::new(),
        }
    }

    /// Append a point. Its identity is the number of points added before it.
    pub fn add_point(&mut self, point: Point) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Append every point in `points`, in order.
    pub fn add_points(&mut self, points: impl IntoIterator<Item=Point>) -> &mut Self {
        self.points.extend(points);
        self
    }

    /// Parse an `x,y,z` record found on 1-based line `line` and append it.
    ///
    /// Blank records are skipped.
    /// A malformed record is remembered as a [`MalformedPoint`] and appends nothing.
    pub fn add_record(&mut self, line: usize, record: &str) -> &mut Self {
        if record.trim().is_empty() {
            return self;
        }

        match record.parse::<Point>() {
            Ok(point) => self.points.push(point),
            Err(reason) => self.invalid_reasons.push(MalformedPoint { line, reason }),
        }

        self
    }

    /// Remove the most recently added point, if any.
    pub fn pop_point(&mut self) -> &mut Self {
        self.points.pop();
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if every record so far was well-formed, `Some(&Vec<MalformedPoint>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<MalformedPoint>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`PointSet`].
    /// If any record was malformed, a reference to a [`Vec`] of [`MalformedPoint`] will indicate why.
    pub fn build(&self) -> Result<PointSet, &Vec<MalformedPoint>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        log::debug!("built point set of {} points", self.points.len());
        Ok(PointSet::from_points(self.points.clone()))
    }
}
