//! HTTP surface.
//!
//! Endpoints:
//!   GET  /          - full page for the current section
//!   POST /navigate  - select a section, then redirect to /
//!   POST /contact   - validate the contact form, show the outcome
//!   GET  /resume    - resume download
//!   GET  /assets/*  - static files
//!   GET  /health    - health check

use axum::{
    extract::{Form, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tower_http::services::ServeDir;

use crate::assets::{build_resolver, load_download, AssetResolver};
use crate::config::Config;
use crate::contact::ContactForm;
use crate::content::catalog::{RESUME_FILE_NAME, RESUME_PATH};
use crate::content::SiteContent;
use crate::demo::DemoSlot;
use crate::logging::{log_navigation, log_request, log_unknown_section};
use crate::nav::{Navigator, SectionId};
use crate::render::{render_page, ContactView, PageContext};

/// Shared by every handler. Only the navigator is mutable.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<SiteContent>,
    pub assets: Arc<dyn AssetResolver>,
    pub demo: Arc<DemoSlot>,
    pub nav: Arc<Mutex<Navigator>>,
    pub site_root: PathBuf,
}

impl AppState {
    pub fn new(cfg: &Config, content: SiteContent, demo: DemoSlot) -> Self {
        Self {
            content: Arc::new(content),
            assets: Arc::from(build_resolver(&cfg.site_root, cfg.cache_assets)),
            demo: Arc::new(demo),
            nav: Arc::new(Mutex::new(Navigator::new())),
            site_root: cfg.site_root.clone(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg, SiteContent::load(), DemoSlot::from_config(cfg))
    }

    fn navigator(&self) -> MutexGuard<'_, Navigator> {
        self.nav.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn current_section(&self) -> SectionId {
        self.navigator().current_section()
    }

    fn page(&self, section: Option<SectionId>, contact: ContactView) -> String {
        let ctx = PageContext {
            content: &self.content,
            assets: self.assets.as_ref(),
            demo: &self.demo,
            contact,
        };
        render_page(section, &ctx)
    }
}

pub fn create_router(state: AppState) -> Router {
    let assets_dir = state.site_root.join("assets");
    Router::new()
        .route("/", get(index))
        .route("/navigate", post(navigate))
        .route("/contact", post(contact))
        .route("/resume", get(resume))
        .route("/health", get(health))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
        .layer(middleware::from_fn(log_requests))
}

async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(req).await;
    log_request(
        &method,
        &path,
        response.status().as_u16(),
        started.elapsed().as_secs_f64() * 1000.0,
    );
    response
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let section = state.current_section();
    Html(state.page(Some(section), ContactView::default()))
}

#[derive(Debug, Deserialize)]
pub struct NavigateForm {
    #[serde(default)]
    pub section: String,
}

async fn navigate(State(state): State<AppState>, Form(form): Form<NavigateForm>) -> Response {
    match form.section.parse::<SectionId>() {
        Ok(section) => {
            let previous = state.navigator().select(section);
            log_navigation(previous.slug(), section.slug());
            Redirect::to("/").into_response()
        }
        Err(err) => {
            log_unknown_section(&err.0);
            (StatusCode::BAD_REQUEST, Html(state.page(None, ContactView::default()))).into_response()
        }
    }
}

async fn contact(State(state): State<AppState>, Form(form): Form<ContactForm>) -> Html<String> {
    let (outcome, form) = form.submit();
    Html(state.page(
        Some(SectionId::Contact),
        ContactView { form, outcome: Some(outcome) },
    ))
}

async fn resume(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(file) = load_download(&state.site_root, RESUME_PATH) else {
        return (StatusCode::NOT_FOUND, "Resume not available").into_response();
    };
    let fresh = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == file.etag);
    if fresh {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, file.etag)]).into_response();
    }
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", RESUME_FILE_NAME),
            ),
            (header::ETAG, file.etag),
        ],
        file.bytes,
    )
        .into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}
