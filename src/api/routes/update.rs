use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::reactive::{dispatch, UpdateRequest, UpdateResponse};

pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    debug!("Update request: changed={:?}", request.changed);

    let response = dispatch(&state.dataset, &request).map_err(|e| {
        warn!("Update failed for {:?}: {}", request.inputs, e);
        ApiError::from(e)
    })?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::ingest::load_dataset;
    use crate::models::{Dataset, MatchRecord};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::path::Path;
    use tower::util::ServiceExt;

    fn bundled_app() -> axum::Router {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/fifa-wcf-data.csv");
        build_router(AppState::new(load_dataset(&path).unwrap()))
    }

    async fn get_text(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = get_text(app, uri).await;
        (status, serde_json::from_str(&body).unwrap_or(Value::Null))
    }

    async fn post_json(app: axum::Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    fn locations(json: &Value) -> Vec<String> {
        json["figure"]["data"][0]["locations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, json) = get_json(bundled_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_page() {
        let (status, html) = get_text(bundled_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"worldcup_map\""));
        assert!(html.contains("<option value=\"Brazil\">Brazil</option>"));
    }

    #[tokio::test]
    async fn test_app_js() {
        let (status, js) = get_text(bundled_app(), "/static/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(js.contains("/api/update"));
    }

    #[tokio::test]
    async fn test_app_js_drops_out_of_order_responses() {
        let (_, js) = get_text(bundled_app(), "/static/app.js").await;
        assert!(js.contains("const seq = ++sent;"));
        assert!(js.contains("if (seq < applied)"));
    }

    #[tokio::test]
    async fn test_layout_endpoint() {
        let (status, json) = get_json(bundled_app(), "/api/layout").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["type"], "container");

        // Year options: one per edition, file order.
        let years = json["children"][3]["children"][1]["options"]
            .as_array()
            .unwrap();
        assert_eq!(years.len(), 22);
        assert_eq!(years[0]["value"], 1930);
        assert_eq!(years[21]["value"], 2022);
    }

    #[tokio::test]
    async fn test_all_countries() {
        let (status, json) = post_json(
            bundled_app(),
            "/api/update",
            r#"{"changed":[],"inputs":{"filter_type":"all"}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["figure"]["layout"]["title"]["text"],
            "FIFA World Cup Winners - All Countries"
        );
        assert_eq!(locations(&json).len(), 14);
        assert_eq!(json["figure"]["layout"]["coloraxis"]["cmax"], 5);
    }

    #[tokio::test]
    async fn test_brazil() {
        let (status, json) = post_json(
            bundled_app(),
            "/api/update",
            r#"{"changed":["country_dropdown.value"],"inputs":{"filter_type":"country","country":"Brazil"}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["figure"]["layout"]["title"]["text"],
            "Brazil - Total Wins: 5, Total Runner-Ups: 2"
        );
        assert_eq!(locations(&json), vec!["Brazil"]);
        assert!(json.get("selectors").is_none());
    }

    #[tokio::test]
    async fn test_year_1998() {
        let (status, json) = post_json(
            bundled_app(),
            "/api/update",
            r#"{"changed":["year_dropdown.value"],"inputs":{"filter_type":"year","year":1998}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["figure"]["layout"]["title"]["text"],
            "FIFA World Cup 1998 - France (Winner), Brazil (Runner-Up)"
        );
        let mut countries = locations(&json);
        countries.sort();
        assert_eq!(countries, vec!["Brazil", "France"]);
    }

    #[tokio::test]
    async fn test_switch_country_to_year() {
        let (status, json) = post_json(
            bundled_app(),
            "/api/update",
            r#"{"changed":["filter_type.value"],"inputs":{"filter_type":"year","country":"Brazil","year":null}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["selectors"]["country_display"], "none");
        assert_eq!(json["selectors"]["year_display"], "block");
        assert!(json["selectors"]["country"].is_null());
        assert!(json["selectors"]["year"].is_null());
        assert_eq!(
            json["figure"]["layout"]["title"]["text"],
            "FIFA World Cup Winners - All Countries"
        );
    }

    #[tokio::test]
    async fn test_unknown_year_is_not_found() {
        let (status, json) = post_json(
            bundled_app(),
            "/api/update",
            r#"{"changed":["year_dropdown.value"],"inputs":{"filter_type":"year","year":1942}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (status, json) = post_json(
            bundled_app(),
            "/api/update",
            r#"{"changed":["nope.value"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_empty_dataset() {
        let app = build_router(AppState::new(Dataset::new(Vec::new())));
        let (status, json) = post_json(app, "/api/update", r#"{}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert!(locations(&json).is_empty());
        assert_eq!(json["figure"]["layout"]["coloraxis"]["cmax"], 0);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let app = build_router(AppState::new(Dataset::new(vec![
            MatchRecord::new(2018, "France", "Croatia"),
            MatchRecord::new(2022, "Argentina", "France"),
        ])));

        let (_, first) = post_json(
            app.clone(),
            "/api/update",
            r#"{"changed":["country_dropdown.value"],"inputs":{"filter_type":"country","country":"Croatia"}}"#,
        )
        .await;
        let (_, second) = post_json(app, "/api/update", r#"{}"#).await;

        assert_eq!(locations(&first), vec!["Croatia"]);
        assert_eq!(locations(&second).len(), 3);
    }
}
