//! Layer attribution of workflow steps.
//!
//! The commit is the only step that reaches consensus, so it is the only
//! L1 step. Every other known step is L2. The aggregate end-to-end row
//! belongs to no layer and never takes part in aggregation.

use crate::parser::schema::{Layer, WorkflowStep};
use crate::utils::config::COMPLETE_WORKFLOW_STEPS;

/// Classify a step name into its layer
///
/// **Public** - pure, side-effect free
///
/// # Returns
/// `Some(L1)` for the commit step, `Some(L2)` for every other known step,
/// `None` for unknown names and for the "Complete Workflow" row.
pub fn classify_layer(step_name: &str) -> Option<Layer> {
    WorkflowStep::from_name(step_name).map(WorkflowStep::layer)
}

/// Whether a step name denotes the aggregate end-to-end row
pub fn is_complete_workflow(step_name: &str) -> bool {
    COMPLETE_WORKFLOW_STEPS.contains(&step_name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_l1() {
        assert_eq!(classify_layer("Commit Session"), Some(Layer::L1));
        assert_eq!(classify_layer("Commit L1"), Some(Layer::L1));
    }

    #[test]
    fn test_other_steps_are_l2() {
        for step in WorkflowStep::ALL
            .iter()
            .filter(|s| **s != WorkflowStep::CommitSession)
        {
            assert_eq!(classify_layer(step.name()), Some(Layer::L2), "{}", step);
        }
        assert_eq!(classify_layer("Scan"), Some(Layer::L2));
        assert_eq!(classify_layer("QC"), Some(Layer::L2));
    }

    #[test]
    fn test_aggregate_and_unknown_have_no_layer() {
        assert_eq!(classify_layer("Complete Workflow"), None);
        assert_eq!(classify_layer("Refund"), None);
        assert_eq!(classify_layer(""), None);

        assert!(is_complete_workflow("Complete Workflow"));
        assert!(is_complete_workflow("Whole Workflow"));
        assert!(!is_complete_workflow("Commit Session"));
    }
}
