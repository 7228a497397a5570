use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::point::PointId;

/// A maximal set of points mutually reachable through applied edges, members in ascending input order.
pub type Component = Vec<PointId>;

/// A division of every point of a [`PointSet`](crate::PointSet) into disjoint [`Component`]s.
///
/// The layout is canonical: components are ordered by their lowest member and members are ascending,
/// so two partitions describing the same grouping compare equal.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Partition {
    components: Vec<Component>,
}

impl Partition {
    /// Group `point_count` points by the label assigned to each, e.g. a union-find root.
    ///
    /// Labels need not be dense, only less than `point_count`.
    pub(crate) fn from_labels(labels: impl IntoIterator<Item=usize>, point_count: usize) -> Self {
        let mut slot_of_label = vec![None; point_count];
        let mut components: Vec<Component> = Vec::new();

        // visiting in input order makes the first member of each group its lowest
        for (index, label) in labels.into_iter().enumerate() {
            let slot = *slot_of_label[label].get_or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(PointId(index));
        }

        Self { components }
    }

    /// Build from arbitrary groups, normalising to the canonical layout.
    pub(crate) fn from_components(components: impl IntoIterator<Item=Component>) -> Self {
        let mut components = components.into_iter()
            .filter(|component| !component.is_empty())
            .map(|mut component| {
                component.sort_unstable();
                component
            })
            .collect_vec();
        components.sort_unstable_by_key(|component| component[0]);

        Self { components }
    }

    /// The number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True only when there are no points at all.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// True when every point belongs to one component.
    pub fn is_unified(&self) -> bool {
        self.components.len() == 1
    }

    /// The number of points across all components.
    pub fn point_count(&self) -> usize {
        self.components.iter().map(Vec::len).sum()
    }

    /// Iterate over components in canonical order.
    pub fn iter(&self) -> impl Iterator<Item=&Component> {
        self.components.iter()
    }

    /// The component containing `point`, if `point` is part of this partition.
    pub fn component_of(&self, point: PointId) -> Option<&Component> {
        self.components.iter().find(|component| component.binary_search(&point).is_ok())
    }

    /// Component sizes in canonical order.
    pub fn sizes(&self) -> Vec<usize> {
        self.components.iter().map(Vec::len).collect()
    }

    /// The sizes of the `k` largest components, largest first.
    pub fn largest_sizes(&self, k: usize) -> Vec<usize> {
        self.components.iter()
            .map(Vec::len)
            .sorted_unstable_by(|a, b| b.cmp(a))
            .take(k)
            .collect()
    }

    /// The product of the sizes of the `k` largest components.
    ///
    /// With fewer than `k` components, only those present contribute.
    pub fn product_of_largest(&self, k: usize) -> u64 {
        self.largest_sizes(k).into_iter().map(|size| size as u64).product()
    }

    /// Whether every component of `self` lies within a single component of `coarser`.
    pub fn refines(&self, coarser: &Partition) -> bool {
        self.components.iter().all(|component| {
            coarser.component_of(component[0])
                .is_some_and(|target| component.iter().all(|point| target.binary_search(point).is_ok()))
        })
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.components.iter()
            .map(|component| format!("{{{}}}", component.iter().map(|point| point.index()).join(",")))
            .join(" "))
    }
}
