//! Completion metrics derived from a step list.

use crate::models::Step;

/// Percentage of completed steps, rounded down, in `0..=100`.
///
/// ```rust
/// use launchpad_core::{progress::calculate_progress, StepCatalog, StepStatus};
///
/// let mut steps = StepCatalog::standard().default_steps();
/// assert_eq!(calculate_progress(&steps), 0);
///
/// for step in steps.iter_mut().take(3) {
///     step.status = StepStatus::Completed;
/// }
/// assert_eq!(calculate_progress(&steps), 75);
/// assert_eq!(calculate_progress(&[]), 0);
/// ```
pub fn calculate_progress(steps: &[Step]) -> u8 {
    if steps.is_empty() {
        return 0;
    }
    let completed = steps.iter().filter(|s| s.is_completed()).count();
    let percent = completed * 100 / steps.len();
    u8::try_from(percent.min(100)).unwrap_or(100)
}

/// True when the list is non-empty and every step is completed.
pub fn all_completed(steps: &[Step]) -> bool {
    !steps.is_empty() && steps.iter().all(Step::is_completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StepStatus;

    fn steps_with(statuses: &[StepStatus]) -> Vec<Step> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let mut step = Step::new(format!("step_{i}"), format!("Step {i}"), 1.0);
                step.status = *status;
                step
            })
            .collect()
    }

    #[test]
    fn test_progress_floors() {
        use StepStatus::*;

        assert_eq!(calculate_progress(&steps_with(&[Completed, Completed, Pending, Pending])), 50);
        assert_eq!(
            calculate_progress(&steps_with(&[Completed, Completed, Completed, Blocked])),
            75
        );
        assert_eq!(calculate_progress(&steps_with(&[Completed, Pending, Pending])), 33);
        assert_eq!(calculate_progress(&steps_with(&[Completed, Completed, Pending])), 66);
        assert_eq!(calculate_progress(&steps_with(&[Completed; 4])), 100);
        assert_eq!(calculate_progress(&steps_with(&[InProgress; 4])), 0);
    }

    #[test]
    fn test_all_completed() {
        use StepStatus::*;

        assert!(!all_completed(&[]));
        assert!(all_completed(&steps_with(&[Completed])));
        assert!(all_completed(&steps_with(&[Completed, Completed, Completed])));
        assert!(!all_completed(&steps_with(&[Completed, InProgress])));
        assert!(!all_completed(&steps_with(&[Blocked])));
    }
}
