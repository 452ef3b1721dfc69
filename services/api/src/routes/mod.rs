//! API service routes

use axum::{
    Json, Router,
    extract::State,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{middleware::auth_middleware, state::AppState};

pub mod auth;
pub mod follows;
pub mod likes;
pub mod replies;
pub mod tweets;
pub mod users;

/// Create the router for the API service
///
/// Routes in the protected set validate the bearer token against the
/// `user_id` path parameter. The reply detail routes live under `/tweets`
/// and carry no user parameter, so no token can bind there.
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route(
            "/usuarios/:user_id/tweets",
            get(tweets::get_tweets).post(tweets::create_tweet),
        )
        .route(
            "/usuarios/:user_id/tweets/:tweet_id",
            get(tweets::get_tweet)
                .put(tweets::update_tweet)
                .delete(tweets::delete_tweet),
        )
        .route("/usuarios/:user_id/feed", get(tweets::get_feed))
        .route("/usuarios/:user_id/respostas", post(replies::create_reply))
        .route("/tweets/:tweet_id/respostas", get(replies::get_replies))
        .route(
            "/tweets/:tweet_id/respostas/:reply_id",
            get(replies::get_reply)
                .put(replies::update_reply)
                .delete(replies::delete_reply),
        )
        .route(
            "/likes/:user_id/:tweet_id",
            post(likes::like_tweet).delete(likes::unlike_tweet),
        )
        .route("/usuarios/:user_id/seguidores", get(follows::get_followers))
        .route(
            "/usuarios/:user_id/seguindo",
            get(follows::get_following).post(follows::follow_user),
        )
        .route(
            "/usuarios/:user_id/seguindo/:follow_user_id",
            delete(follows::unfollow_user),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // The public likes listing shares its first segment with the like and
    // unlike routes, so the parameter keeps the same name even though it
    // carries a tweet ID here.
    Router::new()
        .route("/health", get(health_check))
        .route("/usuarios", get(users::get_users).post(users::create_user))
        .route(
            "/usuarios/:user_id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/login", post(auth::login))
        .route("/likes/:user_id", get(likes::get_likes))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint including a store ping
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = common::database::health_check(&state.db_pool)
        .await
        .unwrap_or(false);

    Json(json!({
        "status": if database { "ok" } else { "degraded" },
        "service": "api",
        "database": database,
    }))
}
