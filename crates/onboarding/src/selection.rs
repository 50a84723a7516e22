use nutrio_shared::onboarding::{Barrier, Goal};

pub const MAX_GOALS: usize = 4;

/// Selection after tapping `goal` on the focus screen.
///
/// Tapping a selected goal removes it. `NotSure` replaces the whole
/// selection, a concrete goal replaces `NotSure`, and past [`MAX_GOALS`] the
/// oldest picks are dropped.
pub fn toggle_goal(selected: &[Goal], goal: Goal) -> Vec<Goal> {
    if selected.contains(&goal) {
        return selected.iter().copied().filter(|g| *g != goal).collect();
    }

    if goal == Goal::NotSure || selected.contains(&Goal::NotSure) {
        return vec![goal];
    }

    let mut selection = selected.to_vec();
    selection.push(goal);

    if selection.len() > MAX_GOALS {
        selection.drain(..selection.len() - MAX_GOALS);
    }

    selection
}

/// Selection after tapping `barrier` on the barriers screen.
///
/// `None` always replaces the whole selection, any other tag replaces
/// `None`, everything else toggles.
pub fn toggle_barrier(selected: &[Barrier], barrier: Barrier) -> Vec<Barrier> {
    if barrier == Barrier::None || selected.contains(&Barrier::None) {
        return vec![barrier];
    }

    if selected.contains(&barrier) {
        return selected.iter().copied().filter(|b| *b != barrier).collect();
    }

    let mut selection = selected.to_vec();
    selection.push(barrier);
    selection
}
