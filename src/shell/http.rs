use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::modules::exercise::use_cases::add_exercise::inbound::http as add_exercise_http;
use crate::modules::exercise::use_cases::create_user::inbound::http as create_user_http;
use crate::modules::exercise::use_cases::get_exercise_log::inbound::http as exercise_log_http;
use crate::modules::exercise::use_cases::list_users::inbound::http as list_users_http;
use crate::shell::config::AppConfig;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub fn router(state: AppState, config: &AppConfig) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/api/exercise/new-user", post(create_user_http::handle))
        .route("/api/exercise/add", post(add_exercise_http::handle))
        .route("/api/exercise/users", get(list_users_http::handle))
        .route("/api/exercise/log", get(exercise_log_http::handle))
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .route_service("/", ServeFile::new(config.index_file()))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::router;
    use crate::shell::config::AppConfig;
    use crate::tests::fixtures::stores::make_test_state;

    fn config() -> AppConfig {
        AppConfig::from_lookup(|key| match key {
            "PUBLIC_DIR" => Some(concat!(env!("CARGO_MANIFEST_DIR"), "/public").to_string()),
            "VIEWS_DIR" => Some(concat!(env!("CARGO_MANIFEST_DIR"), "/views").to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn it_should_route_the_exercise_endpoints() {
        let response = router(make_test_state(), &config())
            .oneshot(
                Request::get("/api/exercise/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn it_should_serve_the_index_page() {
        let response = router(make_test_state(), &config())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(String::from_utf8_lossy(&bytes).contains("Exercise Tracker"));
    }

    #[tokio::test]
    async fn it_should_serve_public_assets() {
        let response = router(make_test_state(), &config())
            .oneshot(Request::get("/style.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn it_should_allow_cross_origin_requests() {
        let response = router(make_test_state(), &config())
            .oneshot(
                Request::get("/api/exercise/users")
                    .header("origin", "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
