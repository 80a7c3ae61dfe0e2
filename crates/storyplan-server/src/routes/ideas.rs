use axum::Json;
use storyplan_core::idea::Idea;
use storyplan_core::selection::Selection;
use storyplan_core::synth;

use crate::error::AppError;

/// POST /api/ideas — generate a storyboard idea from the selected
/// options.
///
/// Fields missing from the body take the documented defaults; keys
/// present but unknown to the catalog are rejected with 400 rather
/// than silently substituted (that substitution belongs to client-side
/// sample mode, not the API).
pub async fn post_idea(Json(selection): Json<Selection>) -> Result<Json<Idea>, AppError> {
    let resolved = selection.resolve()?;
    let idea = synth::synthesize(&resolved, &mut rand::thread_rng());
    Ok(Json(idea))
}
