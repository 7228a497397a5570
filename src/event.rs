use strum::{Display, VariantArray};

use crate::pair::Pair;
use crate::partition::Partition;
use crate::point::{Coord, PointId};
use crate::point_set::PointSet;

/// How applying one edge changed the adjacency and the partition.
#[derive(Copy, Clone, Debug, Display, Eq, Hash, PartialEq, VariantArray)]
#[strum(serialize_all = "snake_case")]
pub enum MergeKind {
    /// Neither endpoint had an edge before; the two now form a new component.
    Formed,
    /// Exactly one endpoint had an edge before; the other joined its component.
    Attached,
    /// Both endpoints had edges, in different components, which are now one.
    Bridged,
    /// Both endpoints were already in the same component. Nothing merged.
    Redundant,
    /// No edge was left to apply. Nothing changed.
    Exhausted,
}

impl MergeKind {
    /// Whether two previously separate components became one.
    pub fn merged(self) -> bool {
        matches!(self, Self::Formed | Self::Attached | Self::Bridged)
    }
}

/// The record produced by applying one edge to a [`ComponentTracker`](crate::ComponentTracker).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MergeEvent {
    /// The edge applied, absent when the stream was exhausted.
    pub edge: Option<Pair>,
    /// What the edge did to the partition.
    pub kind: MergeKind,
    /// The point that joined a larger component.
    ///
    /// When exactly one endpoint already had an edge, this is the other endpoint.
    /// Otherwise it falls back to the lower-indexed endpoint of the edge.
    pub newly_attached: Option<PointId>,
    /// The endpoint opposite [`Self::newly_attached`].
    pub attached_to: Option<PointId>,
    /// The full partition after applying the edge.
    pub partition: Partition,
}

impl MergeEvent {
    pub(crate) fn exhausted(partition: Partition) -> Self {
        Self {
            edge: None,
            kind: MergeKind::Exhausted,
            newly_attached: None,
            attached_to: None,
            partition,
        }
    }

    /// Whether this event merged two previously separate components.
    pub fn merged(&self) -> bool {
        self.kind.merged()
    }

    /// The product of the X coordinates of the two points involved, looked up in `points`.
    ///
    /// Returns `None` for an exhausted event, for points outside `points`,
    /// or when the product does not fit in a [`Coord`].
    pub fn x_product(&self, points: &PointSet) -> Option<Coord> {
        let attached = points.get(self.newly_attached?)?;
        let target = points.get(self.attached_to?)?;
        attached.x.checked_mul(target.x)
    }
}
