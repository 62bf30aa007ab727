use axum::{
    Router,
    routing::{get, patch, post},
};

use streamflix_core::health::{healthz, readyz};
use streamflix_core::middleware::with_observability;

use crate::handlers::{
    admin::{
        create_content, delete_content, get_settings, get_stats, list_all_contents,
        update_content, update_settings,
    },
    auth::{login, me, register},
    content::{get_content, list_categories, list_contents},
    continue_watching::list_continue_watching,
    favorite::{add_favorite, list_favorites, remove_favorite},
    progress::{get_progress, upsert_progress},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/me", get(me))
        // Playback progress
        .route("/progress/{item_id}", get(get_progress).post(upsert_progress))
        .route("/continue-watching", get(list_continue_watching))
        // Catalog
        .route("/contents", get(list_contents))
        .route("/contents/{id}", get(get_content))
        .route("/categories", get(list_categories))
        // Favorites
        .route("/favorites", get(list_favorites))
        .route(
            "/favorites/{content_id}",
            post(add_favorite).delete(remove_favorite),
        )
        // Admin
        .route(
            "/admin/contents",
            get(list_all_contents).post(create_content),
        )
        .route(
            "/admin/contents/{id}",
            patch(update_content)
                .put(update_content)
                .delete(delete_content),
        )
        .route("/admin/stats", get(get_stats))
        .route("/admin/settings", get(get_settings).put(update_settings))
        .with_state(state);
    with_observability(router)
}
