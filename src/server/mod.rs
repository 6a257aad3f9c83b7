//! Web front end: turns form posts into executed requests and renders the
//! result page with the session's history.

pub mod form;

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::RequestError;
use crate::history::HistoryEntry;
use crate::http::client::HttpExecutor;
use crate::http::response::HttpResponse;
use crate::session::{Session, SessionStore, session_cookie, session_id_from_headers};
use crate::ui::page::{self, PageView};
use crate::ui::request_editor::RequestEditorState;

use self::form::FormSubmission;

#[derive(Clone)]
pub struct AppState {
    executor: HttpExecutor,
    sessions: SessionStore,
    default_url: Arc<str>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            executor: HttpExecutor::new(config)?,
            sessions: SessionStore::new(config.history_limit, config.session_ttl),
            default_url: Arc::from(config.default_url.as_str()),
        })
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .with_state(state)
}

pub async fn run(listener: TcpListener, config: &Config) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}

#[derive(Debug, Default, Deserialize)]
struct IndexQuery {
    method: Option<String>,
    url: Option<String>,
    clear_history: Option<String>,
}

async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
    headers: HeaderMap,
) -> Response {
    let (session, created) = state.sessions.resolve(session_id_from_headers(&headers)).await;

    if query.clear_history.is_some() {
        session.clear_history().await;
        tracing::info!(session = %session.id(), "history cleared");
        return with_session(Redirect::to("/").into_response(), &session, created);
    }

    let method = query
        .method
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default();
    let url = query.url.unwrap_or_else(|| state.default_url.to_string());
    let editor = RequestEditorState::new(method, url);

    let html = render_page(&session, &editor, None, None).await;
    with_session(Html(html).into_response(), &session, created)
}

async fn submit(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let (session, created) = state.sessions.resolve(session_id_from_headers(&headers)).await;
    let form = FormSubmission::parse(&body);

    let outcome = execute_form(&state.executor, &session, &form).await;
    let (response, error) = match &outcome {
        Ok(response) => (Some(response), None),
        Err(err) => (None, Some(err.to_string())),
    };

    let html = render_page(&session, &form.editor_state(), error.as_deref(), response).await;
    with_session(Html(html).into_response(), &session, created)
}

/// Validate, send, and on a completed exchange record it in the history.
async fn execute_form(
    executor: &HttpExecutor,
    session: &Session,
    form: &FormSubmission,
) -> Result<HttpResponse, RequestError> {
    let request = form.to_request().inspect_err(reject)?;
    let response = executor.execute(&request).await.inspect_err(|err| {
        if err.is_validation() {
            reject(err);
        }
    })?;

    session
        .record(HistoryEntry {
            method: request.method,
            url: response.url.clone(),
            status: response.status,
        })
        .await;
    Ok(response)
}

fn reject(err: &RequestError) {
    tracing::debug!(error = %err, "rejected form submission");
}

async fn render_page(
    session: &Session,
    editor: &RequestEditorState,
    error: Option<&str>,
    response: Option<&HttpResponse>,
) -> String {
    let history = session.history().await;
    page::render(&PageView {
        editor,
        history: &history,
        error,
        response,
    })
}

fn with_session(mut response: Response, session: &Session, created: bool) -> Response {
    if created {
        response
            .headers_mut()
            .insert(header::SET_COOKIE, session_cookie(session.id()));
    }
    response
}
