use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use vsr_core::health::{healthz, readyz};
use vsr_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    battle::{create_battle, delete_battle, get_battle, get_game_battles, update_battle},
    deck::{create_deck, delete_deck, get_deck, get_my_decks, get_user_decks, update_deck},
    game::{create_game, delete_game, get_game, get_record_games, get_user_games, update_game},
    official_event::{get_official_event, get_official_events},
    record::{
        create_record, delete_record, get_deck_records, get_official_event_records, get_record,
        get_records, get_user_records, update_record,
    },
    user::get_user,
};
use crate::state::AppState;

/// Base path of every API route. Health probes sit outside it.
pub const API_PREFIX: &str = "/api/v1alpha";

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Users
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/records", get(get_user_records))
        .route("/users/{id}/games", get(get_user_games))
        .route("/users/{id}/decks", get(get_user_decks))
        // Decks
        .route("/decks", get(get_my_decks).post(create_deck))
        .route(
            "/decks/{id}",
            get(get_deck).put(update_deck).delete(delete_deck),
        )
        .route("/decks/{id}/records", get(get_deck_records))
        // Records
        .route("/records", get(get_records).post(create_record))
        .route(
            "/records/{id}",
            get(get_record).put(update_record).delete(delete_record),
        )
        .route("/records/{id}/games", get(get_record_games))
        // Games
        .route("/games", post(create_game))
        .route(
            "/games/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
        .route("/games/{id}/battles", get(get_game_battles))
        // Battles
        .route("/battles", post(create_battle))
        .route(
            "/battles/{id}",
            get(get_battle).put(update_battle).delete(delete_battle),
        )
        // Official events
        .route("/official_events", get(get_official_events))
        .route("/official_events/{id}", get(get_official_event))
        .route(
            "/official_events/{id}/records",
            get(get_official_event_records),
        );

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
