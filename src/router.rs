use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::api::AppState;
use crate::config::{Environment, SecurityConfig};
use crate::handlers;
use crate::middleware::auth::USER_ID_HEADER;

/// Full application: info and health probes plus every `/rpc/<procedure>`
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        // Public
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/rpc/healthcheck", get(handlers::health::healthcheck))
        // Procedures
        .merge(auth_routes())
        .merge(directory_routes())
        .merge(project_routes())
        .merge(task_routes())
        .merge(note_routes())
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        router = router.layer(cors_layer(config.environment, &config.security));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/rpc/signup", post(auth::signup))
        .route("/rpc/login", post(auth::login))
}

/// Companies, teams and users
fn directory_routes() -> Router<AppState> {
    use handlers::{companies, teams, users};

    Router::new()
        .route("/rpc/createCompany", post(companies::create_company))
        .route("/rpc/getCompanies", get(companies::get_companies))
        .route("/rpc/createTeam", post(teams::create_team))
        .route("/rpc/getTeams", get(teams::get_teams))
        .route("/rpc/createUser", post(users::create_user))
        .route("/rpc/getUsers", get(users::get_users))
}

fn project_routes() -> Router<AppState> {
    use handlers::{projects, wiki};

    Router::new()
        .route("/rpc/createProject", post(projects::create_project))
        .route("/rpc/getProjects", get(projects::get_projects))
        .route("/rpc/getProject", get(projects::get_project))
        .route("/rpc/updateProject", post(projects::update_project))
        .route("/rpc/createProjectWiki", post(wiki::create_project_wiki))
        .route("/rpc/getProjectWikiHistory", get(wiki::get_project_wiki_history))
}

fn task_routes() -> Router<AppState> {
    use handlers::tasks;

    Router::new()
        .route("/rpc/createTask", post(tasks::create_task))
        .route("/rpc/getProjectTasks", get(tasks::get_project_tasks))
        .route("/rpc/updateTask", post(tasks::update_task))
}

fn note_routes() -> Router<AppState> {
    use handlers::notes;

    Router::new()
        .route("/rpc/createNote", post(notes::create_note))
        .route("/rpc/getProjectNotes", get(notes::get_project_notes))
        .route("/rpc/updateNote", post(notes::update_note))
}

/// Development, or no configured origins: allow any origin
fn cors_layer(environment: Environment, security: &SecurityConfig) -> CorsLayer {
    if environment == Environment::Development || security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(USER_ID_HEADER),
        ])
}
