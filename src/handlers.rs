use std::path::Path;
use actix_files::Files;
use actix_web::{get, web, HttpResponse, Responder};
use log::{error, info};
use crate::render;
use crate::weather_view::assemble;
use crate::weather_view::icons::ICON_PATH_PREFIX;
use crate::weather_view::models::WeatherView;
use crate::AppState;

#[get("/")]
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    info!("weather page requested");

    match weather_view(&data).await {
        Some(view) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render::page(&view, data.refresh_minutes)),
        None => HttpResponse::ServiceUnavailable()
            .content_type("text/html; charset=utf-8")
            .body(render::unavailable(data.refresh_minutes)),
    }
}

#[get("/weather.json")]
pub async fn weather_json(data: web::Data<AppState>) -> impl Responder {
    info!("weather json requested");

    match weather_view(&data).await {
        Some(view) => HttpResponse::Ok().json(view),
        None => HttpResponse::ServiceUnavailable().finish(),
    }
}

/// Serves icon assets from the `png` directory below the static directory.
/// Responses carry ETag and Last-Modified so the reader can revalidate instead of refetching.
///
/// # Arguments
///
/// * 'static_dir' - configured static directory
pub fn icon_files(static_dir: &Path) -> Files {
    Files::new(ICON_PATH_PREFIX.trim_end_matches('/'), static_dir.join("png"))
        .use_etag(true)
        .use_last_modified(true)
}

/// Fetches a fresh report and assembles the view, nothing is kept between requests
///
/// # Arguments
///
/// * 'state' - application state
async fn weather_view(state: &AppState) -> Option<WeatherView> {
    let report = match state.nws.weather_report().await {
        Ok(report) => report,
        Err(e) => {
            error!("failed to get weather report: {}", e);
            return None;
        }
    };

    match assemble(&report, &state.icons) {
        Ok(view) => Some(view),
        Err(e) => {
            error!("failed to assemble weather view: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use actix_web::http::header::{CONTENT_TYPE, ETAG, IF_NONE_MATCH};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use actix_web::App;
    use tempfile::TempDir;
    use crate::initialization::NwsConfig;
    use crate::manager_nws::NWS;
    use crate::weather_view::icons::IconTable;

    fn state() -> AppState {
        // nothing listens on the discard port, every fetch fails right away
        let config = NwsConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            contact: "someone@example.com".to_string(),
            timeout_secs: 2,
        };

        AppState {
            nws: NWS::new(&config, 42.3601, -71.0589).unwrap(),
            icons: IconTable::load(None).unwrap(),
            refresh_minutes: 15,
        }
    }

    fn static_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("png")).unwrap();
        fs::write(dir.path().join("png").join("wi-day-sunny.png"), b"\x89PNG").unwrap();
        fs::write(dir.path().join("config.toml"), b"[nws]").unwrap();
        dir
    }

    #[actix_web::test]
    async fn test_icon_files() {
        let dir = static_dir();
        let app = actix_test::init_service(App::new().service(icon_files(dir.path()))).await;

        let req = actix_test::TestRequest::get().uri("/static/png/wi-day-sunny.png").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "image/png");
        assert!(resp.headers().contains_key(ETAG));
        assert_eq!(actix_test::read_body(resp).await.as_ref(), b"\x89PNG");

        let req = actix_test::TestRequest::get().uri("/static/png/wi-night-clear.png").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_icon_revalidation() {
        let dir = static_dir();
        let app = actix_test::init_service(App::new().service(icon_files(dir.path()))).await;

        let req = actix_test::TestRequest::get().uri("/static/png/wi-day-sunny.png").to_request();
        let resp = actix_test::call_service(&app, req).await;
        let etag = resp.headers().get(ETAG).unwrap().clone();

        let req = actix_test::TestRequest::get()
            .uri("/static/png/wi-day-sunny.png")
            .insert_header((IF_NONE_MATCH, etag))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    }

    #[actix_web::test]
    async fn test_icon_outside_directory() {
        let dir = static_dir();
        let app = actix_test::init_service(App::new().service(icon_files(dir.path()))).await;

        let req = actix_test::TestRequest::get().uri("/static/png/../config.toml").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert!(!resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_index_without_data() {
        let data = web::Data::new(state());
        let app = actix_test::init_service(App::new().app_data(data).service(index).service(weather_json)).await;

        let req = actix_test::TestRequest::get().uri("/").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = actix_test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("Weather unavailable"));

        let req = actix_test::TestRequest::get().uri("/weather.json").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
