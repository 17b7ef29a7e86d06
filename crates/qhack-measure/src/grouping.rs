//! Greedy measurement grouping.
//!
//! Words are visited in input order. Each one is merged into the first group
//! whose setting it is compatible with; otherwise it opens a new group. A
//! group's setting is the merge of all its members, so one circuit measured
//! in that setting yields every member's expectation value.
//!
//! First-fit is order dependent and not guaranteed minimal.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{MeasureError, MeasureResult};
use crate::pauli::PauliWord;

/// One measurement setting and the input words it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasurementGroup {
    /// Merged word that is actually measured.
    pub setting: PauliWord,
    /// Indices of the input words assigned to this group.
    pub members: Vec<usize>,
}

/// Result of grouping a list of Pauli words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MeasurementPlan {
    /// Groups in creation order.
    pub groups: Vec<MeasurementGroup>,
}

impl MeasurementPlan {
    /// Number of distinct measurement settings.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the plan has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The words to measure, one per group.
    pub fn settings(&self) -> impl Iterator<Item = &PauliWord> + '_ {
        self.groups.iter().map(|g| &g.setting)
    }
}

/// Group `words` into shared measurement settings, first fit.
pub fn group_measurements(words: &[PauliWord]) -> MeasureResult<MeasurementPlan> {
    let mut plan = MeasurementPlan::default();

    for (index, word) in words.iter().enumerate() {
        let mut placed = false;
        for group in &mut plan.groups {
            if word.is_compatible(&group.setting)? {
                group.setting = word.merge(&group.setting)?;
                group.members.push(index);
                trace!(index, %word, setting = %group.setting, "merged into group");
                placed = true;
                break;
            }
        }
        if !placed {
            trace!(index, %word, "opened group");
            plan.groups.push(MeasurementGroup {
                setting: word.clone(),
                members: vec![index],
            });
        }
    }

    debug!(
        words = words.len(),
        groups = plan.len(),
        "grouped measurements"
    );
    Ok(plan)
}

/// Fraction of measurements saved: `1 - groups / words`.
pub fn compression_ratio(words: &[PauliWord], plan: &MeasurementPlan) -> MeasureResult<f64> {
    if words.is_empty() {
        return Err(MeasureError::EmptyHamiltonian);
    }
    Ok(1.0 - plan.len() as f64 / words.len() as f64)
}
