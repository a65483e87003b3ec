// src/server.rs
// =============================================================================
// A small web front-end: paste a URL into a form, get a sitemap.xml download.
//
// Routes:
//   GET  /          -> the form
//   POST /generate  -> validate, crawl (up to max_pages), send the file
//   anything else   -> 404 {"error": "Page not found"}
//
// Status codes:
//   400 - no URL, or a URL that isn't http(s)://
//   500 - crawling or writing failed; the message says why
//
// Each request writes its own file (sitemap-<time>-<n>.xml) so two people
// generating sitemaps at the same moment don't overwrite each other. The file
// is removed once it has been read into the response.
// =============================================================================

use crate::config::CrawlConfig;
use crate::crawl::Seed;
use crate::error::{Result as SitemapResult, SitemapError};
use crate::extract::HttpExtractor;
use crate::generator::SitemapGenerator;
use anyhow::Result;
use axum::extract::{Form, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::Local;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>Sitemap Generator</title>
    </head>
    <body>
        <h1>Sitemap Generator</h1>
        <form method="POST" action="/generate">
            <label for="url">Enter the URL to crawl:</label>
            <input type="text" id="url" name="url" required>
            <button type="submit">Generate Sitemap</button>
        </form>
    </body>
</html>
"#;

/// Shared by every request
pub struct AppState {
    config: CrawlConfig,
    // One client for all crawls so connections get reused
    client: Client,
    requests: AtomicU64,
}

impl AppState {
    pub fn new(config: CrawlConfig) -> reqwest::Result<Self> {
        let client = config.http_client()?;

        Ok(AppState {
            config,
            client,
            requests: AtomicU64::new(0),
        })
    }

    fn next_filename(&self) -> String {
        let n = self.requests.fetch_add(1, Ordering::Relaxed);
        format!("sitemap-{}-{}.xml", Local::now().format("%Y%m%d%H%M%S"), n)
    }

    // Crawl + write, returning where the sitemap landed
    async fn generate_sitemap(&self, seed: Seed) -> SitemapResult<PathBuf> {
        let extractor = HttpExtractor::with_client(seed.clone(), self.client.clone());
        let mut generator =
            SitemapGenerator::with_extractor(seed, self.config.output_dir.clone(), extractor);

        generator.crawl_website(self.config.max_pages).await;
        generator.generate_xml_sitemap(&self.next_filename())
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/generate", post(generate))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Binds `addr` and serves until the process is stopped
pub async fn serve(addr: &str, config: CrawlConfig) -> Result<()> {
    let state = Arc::new(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Sitemap generator listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

// --- Handlers ---

async fn home() -> Html<&'static str> {
    Html(FORM_PAGE)
}

#[derive(Debug, Deserialize)]
struct GenerateForm {
    url: Option<String>,
}

async fn generate(State(state): State<Arc<AppState>>, Form(form): Form<GenerateForm>) -> Response {
    let url = form.url.as_deref().map(str::trim).unwrap_or_default();

    if url.is_empty() {
        return (StatusCode::BAD_REQUEST, "No URL provided").into_response();
    }

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return (StatusCode::BAD_REQUEST, "Invalid URL format").into_response();
    }

    let seed = match Seed::parse(url) {
        Ok(seed) => seed,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    match send_sitemap(&state, seed).await {
        Ok(response) => response,
        Err(e) => {
            warn!(url = %url, error = %e, "sitemap generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error generating sitemap: {}", e),
            )
                .into_response()
        }
    }
}

async fn send_sitemap(state: &AppState, seed: Seed) -> SitemapResult<Response> {
    let path = state.generate_sitemap(seed).await?;
    let body = tokio::fs::read(&path).await;

    if let Err(e) = tokio::fs::remove_file(&path).await {
        warn!(path = %path.display(), error = %e, "could not remove served sitemap");
    }
    let body = body.map_err(SitemapError::Io)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/xml; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sitemap.xml\"",
            ),
        ],
        body,
    )
        .into_response())
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Page not found" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app(output_dir: PathBuf) -> Router {
        let config = CrawlConfig {
            output_dir,
            timeout_secs: 5,
            ..CrawlConfig::default()
        };
        router(Arc::new(AppState::new(config).unwrap()))
    }

    fn form_post(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn encoded_url(value: &str) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("url", value)
            .finish()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_home_serves_the_form() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::get("/").body(Body::empty()).unwrap();

        let response = app(dir.path().to_path_buf()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(r#"action="/generate""#));
    }

    #[tokio::test]
    async fn test_missing_url_is_a_client_error() {
        let dir = tempfile::tempdir().unwrap();

        for body in ["".to_string(), encoded_url("   ")] {
            let response = app(dir.path().to_path_buf())
                .oneshot(form_post(body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_text(response).await, "No URL provided");
        }
    }

    #[tokio::test]
    async fn test_non_http_url_is_a_client_error() {
        let dir = tempfile::tempdir().unwrap();

        for bad in ["ftp://example.com", "example.com", "javascript:alert(1)"] {
            let response = app(dir.path().to_path_buf())
                .oneshot(form_post(encoded_url(bad)))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_text(response).await, "Invalid URL format");
        }
    }

    #[tokio::test]
    async fn test_malformed_http_url_is_a_client_error() {
        let dir = tempfile::tempdir().unwrap();

        let response = app(dir.path().to_path_buf())
            .oneshot(form_post(encoded_url("http://")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::get("/nope").body(Body::empty()).unwrap();

        let response = app(dir.path().to_path_buf()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, json!({ "error": "Page not found" }));
    }

    #[tokio::test]
    async fn test_generate_downloads_sitemap() {
        let site = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"<a href="/about">About</a>"#))
            .mount(&site)
            .await;
        Mock::given(method("GET"))
            .and(path("/about"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>about us</p>"))
            .mount(&site)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path().to_path_buf())
            .oneshot(form_post(encoded_url(&site.uri())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"sitemap.xml\""
        );

        let xml = body_text(response).await;
        assert!(xml.contains(&format!("<loc>{}/</loc>", site.uri())));
        assert!(xml.contains(&format!("<loc>{}/about</loc>", site.uri())));

        // Nothing is left behind once the download has been sent
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_repeated_requests_leave_output_dir_empty() {
        let site = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hi</p>"))
            .mount(&site)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path().to_path_buf());

        for _ in 0..3 {
            let response = app
                .clone()
                .oneshot(form_post(encoded_url(&site.uri())))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_unwritable_output_is_a_server_error() {
        let site = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hi</p>"))
            .mount(&site)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "not a directory").unwrap();

        let response = app(blocker)
            .oneshot(form_post(encoded_url(&site.uri())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response)
            .await
            .starts_with("Error generating sitemap:"));
    }
}
