//! API Routes
//!
//! Configures the Axum router with all trivia endpoints.

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::handlers::{
    categories_handler, category_questions_handler, create_question_handler,
    delete_question_handler, fallback_handler, health_handler, questions_handler, quiz_handler,
    search_questions_handler, AppState,
};

/// Headers clients may send, advertised on every response.
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Methods clients may use, advertised on every response.
const ALLOWED_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, OPTIONS";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /categories` - Category dictionary
/// - `GET /questions` - First page of questions
/// - `POST /questions` - Create a question
/// - `DELETE /questions/:id` - Delete a question
/// - `POST /questions/search` - Case-insensitive search on question text
/// - `GET /categories/:id/questions` - Questions in one category
/// - `POST /quizzes` - Next quiz question
/// - `GET /health` - Health check endpoint
///
/// Unknown paths answer with the JSON not-found envelope.
///
/// # Middleware
/// - CORS: any origin, `Content-Type` and `Authorization` headers; the
///   allowed headers and methods are also sent outside preflight
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/categories", get(categories_handler))
        .route("/categories/:id/questions", get(category_questions_handler))
        .route(
            "/questions",
            get(questions_handler).post(create_question_handler),
        )
        .route("/questions/search", post(search_questions_handler))
        .route("/questions/:id", delete(delete_question_handler))
        .route("/quizzes", post(quiz_handler))
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
