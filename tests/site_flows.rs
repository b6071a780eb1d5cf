//! End-to-end flows through the router: navigation, contact form, demo slot,
//! assets and the resume download.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use portfolio::config::Config;
use portfolio::content::SiteContent;
use portfolio::demo::{DemoModule, DemoSlot, ABSENT_NOTICE};
use portfolio::nav::SectionId;
use portfolio::render::markup::{escape, Frame};
use portfolio::server::{create_router, AppState};

static LOG_DIR: Once = Once::new();

/// Run logs go to a scratch dir, set before anything logs.
fn quiet_logs() {
    LOG_DIR.call_once(|| {
        let dir: PathBuf = std::env::temp_dir().join("portfolio-site-flows");
        std::env::set_var("LOG_DIR", dir);
    });
}

fn config(root: &Path) -> Config {
    quiet_logs();
    Config {
        site_root: root.to_path_buf(),
        ..Default::default()
    }
}

fn build_app(root: &Path, demo: DemoSlot) -> (Router, AppState) {
    let state = AppState::new(&config(root), SiteContent::load(), demo);
    (create_router(state.clone()), state)
}

fn write_file(root: &Path, rel: &str, bytes: &[u8]) {
    let p = root.join(rel);
    std::fs::create_dir_all(p.parent().unwrap()).unwrap();
    std::fs::write(p, bytes).unwrap();
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}

async fn get(app: &Router, path: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(path).body(Body::empty()).unwrap();
    let (status, _, body) = send(app, req).await;
    (status, body)
}

async fn post_form(app: &Router, path: &str, body: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let req = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

async fn select(app: &Router, section: &str) -> StatusCode {
    let (status, headers, _) = post_form(app, "/navigate", &format!("section={}", section)).await;
    if status == StatusCode::SEE_OTHER {
        assert_eq!(headers.get(header::LOCATION).unwrap(), "/");
    }
    status
}

fn shows_only(page: &str, section: SectionId) {
    for other in SectionId::ALL {
        assert_eq!(
            page.contains(other.header()),
            other == section,
            "showing {}, checking header of {}",
            section,
            other
        );
    }
}

#[tokio::test]
async fn starts_on_home() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = build_app(dir.path(), DemoSlot::Absent);
    let (status, page) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.current_section(), SectionId::Home);
    shows_only(&page, SectionId::Home);
}

#[tokio::test]
async fn every_section_selectable_from_every_other() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = build_app(dir.path(), DemoSlot::Absent);
    for from in SectionId::ALL {
        for to in SectionId::ALL {
            assert_eq!(select(&app, from.slug()).await, StatusCode::SEE_OTHER);
            assert_eq!(select(&app, to.slug()).await, StatusCode::SEE_OTHER);
            assert_eq!(state.current_section(), to);
            let (_, page) = get(&app, "/").await;
            shows_only(&page, to);
        }
    }
}

#[tokio::test]
async fn revisiting_a_section_renders_identically() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = build_app(dir.path(), DemoSlot::Absent);
    select(&app, "projects").await;
    let (_, first) = get(&app, "/").await;
    select(&app, "skills").await;
    let (_, between) = get(&app, "/").await;
    select(&app, "projects").await;
    let (_, again) = get(&app, "/").await;
    assert_eq!(first, again);
    assert_ne!(first, between);
}

#[tokio::test]
async fn navigation_never_touches_records() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = build_app(dir.path(), DemoSlot::Absent);
    for id in SectionId::ALL {
        select(&app, id.slug()).await;
        get(&app, "/").await;
    }
    assert_eq!(*state.content, SiteContent::load());
}

#[tokio::test]
async fn unknown_section_renders_nav_bar_only() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = build_app(dir.path(), DemoSlot::Absent);
    select(&app, "courses").await;

    let (status, _, page) = post_form(&app, "/navigate", "section=portfolio-admin").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(page.contains("<nav>"));
    for id in SectionId::ALL {
        assert!(!page.contains(id.header()));
    }
    assert_eq!(state.current_section(), SectionId::Courses);

    let (status, _, _) = post_form(&app, "/navigate", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(state.current_section(), SectionId::Courses);
}

#[tokio::test]
async fn contact_without_subject_is_acknowledged() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = build_app(dir.path(), DemoSlot::Absent);
    let (status, _, page) =
        post_form(&app, "/contact", "name=Ana&email=a%40b.com&subject=&message=hi").await;
    assert_eq!(status, StatusCode::OK);
    shows_only(&page, SectionId::Contact);
    assert!(page.contains("notice-success"));
    assert!(page.contains("Thanks for reaching out"));
    // Cleared after success.
    assert!(page.contains("<input id=\"name\" name=\"name\" value=\"\">"));
}

#[tokio::test]
async fn contact_missing_name_names_required_fields() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = build_app(dir.path(), DemoSlot::Absent);
    let (status, _, page) =
        post_form(&app, "/contact", "name=&email=a%40b.com&message=hi").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("notice-error"));
    assert!(page.contains("required fields: name."));
    // Entered values kept.
    assert!(page.contains("value=\"a@b.com\""));
    assert!(page.contains(">hi</textarea>"));
}

#[tokio::test]
async fn contact_with_whitespace_name_is_acknowledged() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = build_app(dir.path(), DemoSlot::Absent);
    let (status, _, page) =
        post_form(&app, "/contact", "name=+&email=a%40b.com&subject=&message=hi").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("notice-success"));
}

#[tokio::test]
async fn contact_input_is_escaped() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = build_app(dir.path(), DemoSlot::Absent);
    let (_, _, page) = post_form(
        &app,
        "/contact",
        "name=%3Cscript%3E&email=&message=%22quoted%22",
    )
    .await;
    assert!(!page.contains("<script>"));
    assert!(page.contains("&lt;script&gt;"));
    assert!(page.contains("&quot;quoted&quot;"));
}

#[tokio::test]
async fn absent_demo_explains_how_to_add_one() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = build_app(dir.path(), DemoSlot::Absent);
    select(&app, "contact").await;
    let (status, page) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(&escape(ABSENT_NOTICE)));
    assert!(page.contains("id=\"demo\""));
}

#[tokio::test]
async fn named_demo_without_entry_point_warns() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = build_app(dir.path(), DemoSlot::MissingEntry("bc_app_v2".into()));
    select(&app, "contact").await;
    let (status, page) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("notice-warning"));
    assert!(page.contains("bc_app_v2"));
}

struct Greeter;

impl DemoModule for Greeter {
    fn name(&self) -> &str {
        "greeter"
    }

    fn run(&self, frame: &mut Frame) {
        frame.text("p", "greeting", "hello from the demo");
    }
}

#[tokio::test]
async fn mounted_demo_runs_inside_contact_section() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = build_app(dir.path(), DemoSlot::mounted(Arc::new(Greeter)));

    let (_, home) = get(&app, "/").await;
    assert!(!home.contains("hello from the demo"));

    select(&app, "contact").await;
    let (_, page) = get(&app, "/").await;
    assert!(page.contains("<p class=\"greeting\">hello from the demo</p>"));
    assert!(!page.contains(&escape(ABSENT_NOTICE)));
}

#[tokio::test]
async fn local_assets_replace_fallbacks() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = build_app(dir.path(), DemoSlot::Absent);
    let (_, before) = get(&app, "/").await;
    assert!(before.contains("src=\"https://via.placeholder.com/200\""));

    write_file(dir.path(), "assets/profile.jpg", b"jpg");
    let (_, after) = get(&app, "/").await;
    assert!(after.contains("src=\"assets/profile.jpg\""));

    let (status, body) = get(&app, "/assets/profile.jpg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "jpg");
}

#[tokio::test]
async fn cached_assets_keep_first_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config {
        cache_assets: true,
        ..config(dir.path())
    };
    let app = create_router(AppState::new(&cfg, SiteContent::load(), DemoSlot::Absent));
    let (_, before) = get(&app, "/").await;
    assert!(before.contains("src=\"https://via.placeholder.com/200\""));

    write_file(dir.path(), "assets/profile.jpg", b"jpg");
    let (_, after) = get(&app, "/").await;
    assert!(after.contains("src=\"https://via.placeholder.com/200\""));
}

#[tokio::test]
async fn resume_download_round() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = build_app(dir.path(), DemoSlot::Absent);

    let (status, _) = get(&app, "/resume").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    select(&app, "about").await;
    let (_, about) = get(&app, "/").await;
    assert!(about.contains("Upload `assets/Sunny_Solomon_Resume.pdf` to enable resume download"));

    write_file(dir.path(), "assets/Sunny_Solomon_Resume.pdf", b"%PDF-1.4");
    let (_, about) = get(&app, "/").await;
    assert!(about.contains("href=\"/resume\""));

    let req = Request::builder().uri("/resume").body(Body::empty()).unwrap();
    let (status, headers, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "%PDF-1.4");
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/pdf");
    assert!(headers
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .contains("Sunny_Solomon_Resume.pdf"));
    let etag = headers.get(header::ETAG).unwrap().clone();

    let req = Request::builder()
        .uri("/resume")
        .header(header::IF_NONE_MATCH, etag)
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_MODIFIED);
    assert!(body.is_empty());
}

#[tokio::test]
async fn health_and_unknown_routes() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = build_app(dir.path(), DemoSlot::Absent);
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["status"], "ok");

    let (status, _) = get(&app, "/wp-admin").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
