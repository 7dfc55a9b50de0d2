use super::intent::Intent;
use super::state::UiState;

/// Folds an intent into a state, producing the next state.
///
/// All transitions for a feature go through its reducer, and the reducer
/// must stay pure: no I/O, no clocks, no access to anything beyond its
/// two arguments. Side effects belong to the app layer that dispatches.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
