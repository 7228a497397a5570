use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

/// A signed coordinate along one axis.
pub type Coord = i64;

/// The position of a junction box in 3-D space, `(x, y, z)`.
///
/// Points compare and hash by coordinate value only. The identity of an input record is its [`PointId`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[allow(missing_docs)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
    pub z: Coord,
}

/// The dense index of a point in input order.
/// Every structure inside the engine is keyed by this rather than by coordinates.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PointId(pub usize);

impl PointId {
    /// The position of this point in input order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for PointId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Point {
    /// Construct a point from its coordinates.
    pub const fn new(x: Coord, y: Coord, z: Coord) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    ///
    /// Each delta is taken as an unsigned magnitude, so no coordinate range can overflow.
    /// The squared sum and root are taken in `f32`; only when that sum is out of `f32` range
    /// is it redone in `f64`, so the result is always finite.
    pub fn distance_to(&self, other: &Self) -> f32 {
        let deltas = [self.x.abs_diff(other.x), self.y.abs_diff(other.y), self.z.abs_diff(other.z)];

        let squared: f32 = deltas.iter().map(|&delta| (delta as f32) * (delta as f32)).sum();
        if squared.is_finite() {
            return squared.sqrt();
        }

        deltas.iter().map(|&delta| (delta as f64) * (delta as f64)).sum::<f64>().sqrt() as f32
    }
}

impl From<(Coord, Coord, Coord)> for Point {
    fn from(value: (Coord, Coord, Coord)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{},{}]", self.x, self.y, self.z)
    }
}

/// Why a record could not be read as a [`Point`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MalformedReason {
    /// The record did not have exactly three comma-separated fields.
    #[error("expected 3 coordinates, found {0}")]
    WrongArity(usize),
    /// A field was not a signed integer.
    #[error("bad coordinate {0:?}")]
    BadCoordinate(String),
}

/// A coordinate record that failed to parse, with the 1-based line it came from.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("malformed point on line {line}: {reason}")]
pub struct MalformedPoint {
    /// 1-based line number of the record.
    pub line: usize,
    /// What was wrong with it.
    pub reason: MalformedReason,
}

impl FromStr for Point {
    type Err = MalformedReason;

    /// Parse an `x,y,z` record. Whitespace around each field is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.split(',').map(str::trim).collect_vec();
        if fields.len() != 3 {
            return Err(MalformedReason::WrongArity(fields.len()));
        }

        let coords = fields.iter()
            .map(|field| field.parse::<Coord>().map_err(|_| MalformedReason::BadCoordinate(field.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(coords[0], coords[1], coords[2]))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{MalformedReason, Point};

    #[test]
    fn parses_record() {
        assert_eq!("162,817,812".parse::<Point>(), Ok(Point::new(162, 817, 812)));
        assert_eq!(" -3, 0 ,7 ".parse::<Point>(), Ok(Point::new(-3, 0, 7)));
    }

    #[test]
    fn rejects_bad_records() {
        assert_eq!("1,2".parse::<Point>(), Err(MalformedReason::WrongArity(2)));
        assert_eq!("1,2,3,4".parse::<Point>(), Err(MalformedReason::WrongArity(4)));
        assert_eq!("1,two,3".parse::<Point>(), Err(MalformedReason::BadCoordinate("two".to_string())));
        assert_eq!("1,,3".parse::<Point>(), Err(MalformedReason::BadCoordinate(String::new())));
    }

    #[test]
    fn distance() {
        let origin = Point::new(0, 0, 0);
        assert_relative_eq!(origin.distance_to(&Point::new(1, 0, 0)), 1.0);
        assert_relative_eq!(origin.distance_to(&Point::new(1, 1, 0)), 2f32.sqrt());
        assert_relative_eq!(Point::new(-2, 3, 1).distance_to(&Point::new(1, -1, 1)), 5.0);
        assert_eq!(origin.distance_to(&origin), 0.0);
    }

    #[test]
    fn distance_across_full_coordinate_range() {
        let low = Point::new(i64::MIN, 0, 0);
        let high = Point::new(i64::MAX, 0, 0);
        assert_relative_eq!(low.distance_to(&high), 2f32.powi(64));
        assert_eq!(low.distance_to(&high), high.distance_to(&low));

        let far = Point::new(i64::MIN, i64::MIN, i64::MIN).distance_to(&Point::new(i64::MAX, i64::MAX, i64::MAX));
        assert!(far.is_finite());
        assert_relative_eq!(far, 2f32.powi(64) * 3f32.sqrt(), max_relative = 1e-6);
    }

    #[test]
    fn equality_is_by_coordinates() {
        assert_eq!(Point::new(4, 5, 6), Point::from((4, 5, 6)));
        assert_eq!(format!("{}", Point::new(4, -5, 6)), "[4,-5,6]");
    }
}
