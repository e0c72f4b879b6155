//! Landing page handler.
//!
//! Renders the lookup frontend with service status and a few example members
//! taken from the head of the loaded table.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::table::TableState;

/// Number of example member buttons shown on the landing page
const EXAMPLE_MEMBER_COUNT: usize = 3;

/// Landing page handler.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);

    match state.table.as_ref() {
        TableState::Available(table) => {
            context.insert("row_count", &table.len());
            context.insert("examples", &table.sample(EXAMPLE_MEMBER_COUNT));
        }
        TableState::Degraded(message) => {
            context.insert("load_error", message);
        }
    }

    let html = state.tera.render("index.html", &context)?;
    Ok(Html(html))
}
