//! API Handlers
//!
//! HTTP request handlers for each trivia endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{StatusCode, Uri},
    Json,
};
use tracing::{debug, info};

use crate::config::{Config, QUESTIONS_PER_PAGE};
use crate::error::{Result, TriviaError};
use crate::models::{
    category_map, CategoriesResponse, CreateQuestionRequest, CreateQuestionResponse,
    HealthResponse, QuestionsResponse, QuizRequest, QuizResponse, SearchRequest,
};
use crate::store::{MemoryStore, Question, Seed, SqliteStore, TriviaStore};

/// Store handle shared by all requests.
pub type SharedStore = Arc<RwLock<Box<dyn TriviaStore>>>;

/// Quiz category label used when every category is in play.
pub const ALL_CATEGORIES_LABEL: &str = "ALL";

/// Application state shared across all handlers.
///
/// Handlers reach the store only through this handle.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe trivia store
    pub store: SharedStore,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: impl TriviaStore + 'static) -> Self {
        let store: Box<dyn TriviaStore> = Box::new(store);
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Opens the SQLite database when `database_path` is set, otherwise an
    /// in-memory store, then seeds it if it has no categories yet.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut store: Box<dyn TriviaStore> = match &config.database_path {
            Some(path) => Box::new(SqliteStore::open(path)?),
            None => Box::new(MemoryStore::new()),
        };

        let seed = match &config.seed_file {
            Some(path) => Seed::from_file(path)?,
            None => Seed::default_categories(),
        };
        seed.apply(store.as_mut())?;

        Ok(Self {
            store: Arc::new(RwLock::new(store)),
        })
    }
}

fn bad_body(rejection: JsonRejection) -> TriviaError {
    TriviaError::BadRequest(rejection.body_text())
}

fn bad_path(rejection: PathRejection) -> TriviaError {
    TriviaError::NotFound(rejection.body_text())
}

/// First page of questions with the category dictionary.
fn first_page(store: &dyn TriviaStore) -> Result<QuestionsResponse> {
    let page = store.questions_page(1, QUESTIONS_PER_PAGE)?;
    let categories = category_map(&store.categories()?);
    Ok(QuestionsResponse::new(page.items, categories, None, page.total))
}

/// Picks the quiz question at index `asked`, wrapping to the first question
/// once the index runs past the end.
///
/// Only the number of previously asked questions matters, not their ids, so a
/// question can repeat within one session.
pub fn next_question(questions: &[Question], asked: usize) -> Option<&Question> {
    questions.get(asked).or_else(|| questions.first())
}

/// Handler for GET /categories
pub async fn categories_handler(State(state): State<AppState>) -> Result<Json<CategoriesResponse>> {
    let store = state.store.read().await;
    let categories = category_map(&store.categories()?);

    Ok(Json(CategoriesResponse::new(categories)))
}

/// Handler for GET /questions
///
/// Always serves page 1; `total_questions` counts every stored question.
pub async fn questions_handler(State(state): State<AppState>) -> Result<Json<QuestionsResponse>> {
    let store = state.store.read().await;

    Ok(Json(first_page(&**store)?))
}

/// Handler for DELETE /questions/:id
///
/// Responds with the first page of the remaining questions.
pub async fn delete_question_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<QuestionsResponse>> {
    let Path(id) = path.map_err(bad_path)?;

    let mut store = state.store.write().await;
    store.delete_question(id)?;
    info!("Deleted question {}", id);

    Ok(Json(first_page(&**store)?))
}

/// Handler for POST /questions
pub async fn create_question_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateQuestionResponse>)> {
    let Json(req) = body.map_err(bad_body)?;
    let new = req.validate().map_err(TriviaError::BadRequest)?;

    let created = state.store.write().await.insert_question(new)?;
    info!(
        "Created question {} in category {}",
        created.id, created.category
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateQuestionResponse::new(req.fields, created.id)),
    ))
}

/// Handler for POST /questions/search
///
/// Zero matches is still a success.
pub async fn search_questions_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<QuestionsResponse>> {
    let Json(req) = body.map_err(bad_body)?;

    let store = state.store.read().await;
    let questions = store.search_questions(&req.search_term)?;
    let categories = category_map(&store.categories()?);
    debug!(
        "Search '{}' matched {} questions",
        req.search_term,
        questions.len()
    );

    let total = questions.len();
    Ok(Json(QuestionsResponse::new(questions, categories, None, total)))
}

/// Handler for GET /categories/:id/questions
///
/// A category without questions is reported as not found, whether or not the
/// category itself exists.
pub async fn category_questions_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<QuestionsResponse>> {
    let Path(id) = path.map_err(bad_path)?;

    let store = state.store.read().await;
    let questions = store.questions_in_category(id)?;
    if questions.is_empty() {
        return Err(TriviaError::NotFound(format!(
            "no questions in category {}",
            id
        )));
    }

    let current_category = store.category(id)?.map(|c| c.kind);
    let categories = category_map(&store.categories()?);

    let total = questions.len();
    Ok(Json(QuestionsResponse::new(
        questions,
        categories,
        current_category,
        total,
    )))
}

/// Handler for POST /quizzes
///
/// Category id `0` plays across all categories.
pub async fn quiz_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>> {
    let Json(req) = body.map_err(bad_body)?;
    let category_id = req.category_id().map_err(TriviaError::BadRequest)?;

    let store = state.store.read().await;
    let (label, questions) = if category_id == 0 {
        (ALL_CATEGORIES_LABEL.to_string(), store.all_questions()?)
    } else {
        let category = store
            .category(category_id)?
            .ok_or_else(|| TriviaError::NotFound(format!("category {}", category_id)))?;
        (category.kind, store.questions_in_category(category_id)?)
    };
    let categories = category_map(&store.categories()?);

    let question = next_question(&questions, req.previous_questions.len()).cloned();

    Ok(Json(QuizResponse::new(label, categories, question)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for unknown routes.
pub async fn fallback_handler(uri: Uri) -> TriviaError {
    TriviaError::NotFound(format!("no route for {}", uri))
}
