//! Layout stabilizer: fix a section list's width to its widest expanded section.
//!
//! Opening a section must not resize its siblings, so the container is sized
//! up front for the worst case. Every section is forced open (nested sections
//! too), measured, and then put back exactly as it was:
//!
//! ```ignore
//! let measurement = measure_stable_width(&mut tree);
//! measurement.restore.apply(&mut tree);
//! let width = measurement.container_width(WidthPolicy::Minimum);
//! ```
//!
//! [`stabilize`] does all three steps.

use serde::{Deserialize, Serialize};

use crate::constants::WIDTH_ROUNDING_PX;
use crate::disclosure::{set_open_at, DisclosureNode, SectionTree};

/// How a measured width is applied to the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthPolicy {
    /// The container may grow wider than the measurement but never narrower
    #[default]
    Minimum,
    /// The container is exactly the measured width
    Fixed,
}

/// A width constraint produced by a stabilizer pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerWidth {
    pub width: f32,
    pub policy: WidthPolicy,
}

impl ContainerWidth {
    /// Apply the constraint to the width offered by the parent.
    pub fn resolve(&self, available: f32) -> f32 {
        match self.policy {
            WidthPolicy::Fixed => self.width,
            WidthPolicy::Minimum if available.is_finite() => available.max(self.width),
            WidthPolicy::Minimum => self.width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RestoreStep {
    /// Top-level index followed by nested indices
    path: Vec<usize>,
    was_open: bool,
}

/// Open states recorded while forcing sections open, in forcing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestorePlan {
    steps: Vec<RestoreStep>,
}

impl RestorePlan {
    /// Number of disclosures that were forced open
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Put every recorded disclosure back into its prior state, newest first.
    ///
    /// # Panics
    ///
    /// Panics if the tree's shape changed since the plan was recorded.
    pub fn apply<T: SectionTree + ?Sized>(self, tree: &mut T) {
        for step in self.steps.iter().rev() {
            let Some((&top, nested)) = step.path.split_first() else {
                continue;
            };
            let restored = tree
                .section_mut(top)
                .is_some_and(|node| set_open_at(node, nested, step.was_open));
            assert!(
                restored,
                "disclosure at {:?} disappeared between measuring and restoring",
                step.path
            );
        }
    }
}

/// Result of forcing every section open and measuring it.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Widest outer width seen across top-level sections
    pub max_width: f32,
    /// How to undo the forced opening
    pub restore: RestorePlan,
}

impl Measurement {
    /// The container constraint to apply, or `None` when nothing had width.
    pub fn container_width(&self, policy: WidthPolicy) -> Option<ContainerWidth> {
        (self.max_width > 0.0).then(|| ContainerWidth {
            width: self.max_width + WIDTH_ROUNDING_PX,
            policy,
        })
    }
}

/// Force every section and nested section open and record the widest section.
///
/// The tree is left force-opened; apply [`Measurement::restore`] afterwards.
///
/// # Panics
///
/// Panics if the tree reports a section count it cannot index.
pub fn measure_stable_width<T: SectionTree + ?Sized>(tree: &mut T) -> Measurement {
    let count = tree.section_count();
    let mut steps = Vec::new();
    let mut max_width = 0.0f32;

    for index in 0..count {
        let node = tree
            .section_mut(index)
            .unwrap_or_else(|| panic!("section {index} missing from a tree of {count}"));
        let mut path = vec![index];
        force_open(node, &mut path, &mut steps);

        let width = tree.outer_width(index);
        log::trace!("stabilizer: section {} measured {}px", index, width);
        max_width = max_width.max(width);
    }

    Measurement {
        max_width,
        restore: RestorePlan { steps },
    }
}

/// Measure, restore, and compute the container width in one pass.
pub fn stabilize<T: SectionTree + ?Sized>(
    tree: &mut T,
    policy: WidthPolicy,
) -> Option<ContainerWidth> {
    let measurement = measure_stable_width(tree);
    let container = measurement.container_width(policy);
    log::debug!(
        "stabilizer: {} sections, {} disclosures forced, max width {} -> {:?}",
        tree.section_count(),
        measurement.restore.len(),
        measurement.max_width,
        container
    );
    measurement.restore.apply(tree);
    container
}

fn force_open(node: &mut dyn DisclosureNode, path: &mut Vec<usize>, steps: &mut Vec<RestoreStep>) {
    steps.push(RestoreStep {
        path: path.clone(),
        was_open: node.is_open(),
    });
    node.set_open(true);
    for (index, child) in node.nested_mut().into_iter().enumerate() {
        path.push(index);
        force_open(child, path, steps);
        path.pop();
    }
}
