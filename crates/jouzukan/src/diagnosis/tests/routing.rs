use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use crate::diagnosis::submission::ResultSubmission;
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn diagnosis_route_returns_profile_archetype_and_comment() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let payload = json!({
        "answers": { "1": 5, "2": 3, "3": 3 }
    });

    let response = router
        .oneshot(
            Request::post("/api/v1/diagnosis")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["profile"]["Respect"], 12.4);
    assert_eq!(body["profile"]["UniversalTruth"], 9.4);
    assert_eq!(body["archetype"]["id"], "donkey");
    assert_eq!(body["classification"]["basis"]["kind"], "fallback");
    assert!(body["comment"]
        .as_str()
        .expect("comment is a string")
        .contains("みんなを尊重"));
}

#[tokio::test]
async fn diagnosis_route_accepts_empty_answer_sets() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::post("/api/v1/diagnosis")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["profile"]["Innovation"], 10.0);
    assert_eq!(body["archetype"]["id"], "donkey");
}

#[tokio::test]
async fn questions_route_lists_the_battery() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/questions")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let questions = body.as_array().expect("question array");
    assert_eq!(questions.len(), 18);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(questions[0]["weights"]["Respect"], 1.2);
}

#[tokio::test]
async fn archetype_routes_serve_encyclopedia_entries() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let list = router
        .clone()
        .oneshot(
            Request::get("/api/v1/archetypes")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(list.status(), StatusCode::OK);
    assert_eq!(
        json_body(list).await.as_array().map(|entries| entries.len()),
        Some(12)
    );

    let single = router
        .clone()
        .oneshot(
            Request::get("/api/v1/archetypes/camel")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(single.status(), StatusCode::OK);
    let camel = json_body(single).await;
    assert_eq!(camel["legend_role"], "生産管理の守り神");
    assert!(camel.get("priority_rule").is_none());

    let missing = router
        .oneshot(
            Request::get("/api/v1/archetypes/unicorn")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let error = json_body(missing).await;
    assert!(error["error"]
        .as_str()
        .expect("error message")
        .contains("unknown archetype 'unicorn'"));
}

fn diagnosis_request(payload: &Value) -> Request<Body> {
    Request::post("/api/v1/diagnosis")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn respondent_payload() -> Value {
    json!({
        "respondent": { "name": "Hanako", "email": "hanako@example.com" },
        "answers": { "5": 5, "6": 5 }
    })
}

async fn wait_for_events(sink: &MemorySink, expected: usize) -> Vec<ResultSubmission> {
    for _ in 0..200 {
        let events = sink.events();
        if events.len() >= expected {
            return events;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    sink.events()
}

#[tokio::test]
async fn diagnosis_route_forwards_respondent_results_to_the_sink() {
    let (service, sink) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(diagnosis_request(&respondent_payload()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["archetype"]["id"], "bull");

    let events = wait_for_events(&sink, 1).await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].email, "hanako@example.com");
    assert_eq!(events[0].archetype_id, "bull");

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(sink.events().len(), 1);
}

#[tokio::test]
async fn failing_sink_does_not_change_the_response() {
    let (healthy, _) = build_service();
    let expected = json_body(
        router_with_service(healthy)
            .oneshot(diagnosis_request(&respondent_payload()))
            .await
            .expect("router responds"),
    )
    .await;

    let response = router_with_service(failing_service())
        .oneshot(diagnosis_request(&respondent_payload()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, expected);
}
