//! Deployment status endpoint.
//!
//! Serves the fixed confirmation string the deployment pipeline checks after
//! a rollout. The string doubles as a liveness signal: if it comes back at
//! all, the container built, shipped, and started.

use axum::extract::State;

use crate::state::AppState;

/// Status handler.
///
/// Returns the instance's fixed body with 200 OK. Nothing is computed and no
/// state is touched; repeated requests are byte-identical.
pub async fn status(State(state): State<AppState>) -> &'static str {
    state.config.body
}
