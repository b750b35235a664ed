//! Serves the compiled client bundle.
//!
//! Files in the bundle are returned as-is. Any other path gets `index.html`
//! so the client can route it: 200 for one of the client routes, 404 for
//! everything else.

use actix_web::{web, HttpRequest, HttpResponse};
use clara_common::routes::Route;
use include_dir::Dir;
use log::warn;
use mime_guess::from_path;

/// The embedded bundle, shared as app data.
#[derive(Clone, Copy)]
pub struct Bundle(pub &'static Dir<'static>);

pub async fn serve_embedded(req: HttpRequest, bundle: web::Data<Bundle>) -> HttpResponse {
    respond(bundle.0, req.path())
}

fn respond(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let file_path = request_path.trim_start_matches('/');
    if !file_path.is_empty() {
        if let Some(file) = dir.get_file(file_path) {
            let mime = from_path(file_path).first_or_octet_stream();
            return HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec());
        }
    }

    let Some(index) = dir.get_file("index.html") else {
        warn!("client bundle has no index.html; build frontend/ with trunk before the host");
        return HttpResponse::NotFound().body("Not Found");
    };

    let mut response = match Route::from_path(request_path) {
        Route::NotFound => HttpResponse::NotFound(),
        _ => HttpResponse::Ok(),
    };
    response
        .content_type("text/html; charset=utf-8")
        .body(index.contents().to_vec())
}

#[cfg(test)]
mod tests {
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use include_dir::include_dir;

    use super::*;

    static FIXTURE: Dir = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/dist");
    static EMPTY: Dir = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/empty");

    async fn get(bundle: &'static Dir<'static>, uri: &str) -> (StatusCode, String, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Bundle(bundle)))
                .default_service(web::route().to(serve_embedded)),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = test::read_body(resp).await;
        (status, content_type, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_web::test]
    async fn serves_bundle_files_with_their_mime() {
        let (status, content_type, body) = get(&FIXTURE, "/clara_frontend.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.contains("javascript"));
        assert!(body.contains("init"));
    }

    #[actix_web::test]
    async fn client_routes_get_the_index() {
        for route in ["/", "/login", "/teacher", "/student", "/video", "/student/"] {
            let (status, content_type, body) = get(&FIXTURE, route).await;
            assert_eq!(status, StatusCode::OK, "{}", route);
            assert!(content_type.starts_with("text/html"));
            assert!(body.contains("<title>CLARA</title>"));
        }
    }

    #[actix_web::test]
    async fn unknown_paths_get_the_index_with_404() {
        let (status, _, body) = get(&FIXTURE, "/flow").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("<title>CLARA</title>"));
    }

    #[actix_web::test]
    async fn missing_bundle_is_not_found() {
        let (status, _, body) = get(&EMPTY, "/login").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found");
    }
}
