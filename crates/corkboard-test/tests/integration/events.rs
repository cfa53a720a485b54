#![allow(clippy::unused_async, unused_must_use)]
//! Tests for the JSON events API: selection windows, submission, approval.

use chrono::Days;
use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn heartbeat_answers_ok() {
    let service = test_service();

    let response = TestRequest::get("/heartbeat").send(&service).await;
    response.assert_status(StatusCode::OK).assert_body_contains("ok");
}

#[test_log::test(tokio::test)]
async fn upcoming_on_empty_store_is_an_empty_array() {
    let service = test_service();

    let response = TestRequest::get("/events/upcoming").send(&service).await;
    let body = response.assert_status(StatusCode::OK).body_string();
    assert_eq!(body, "[]");
}

#[test_log::test(tokio::test)]
async fn upcoming_returns_events_inside_the_window() {
    let service = seeded_service(vec![
        approved_event("Inside", date(2030, 5, 10), date(2030, 5, 11)),
        approved_event("Before", date(2030, 3, 1), date(2030, 3, 2)),
        approved_event("After", date(2030, 7, 1), date(2030, 7, 2)),
    ]);

    let response = TestRequest::get("/events/upcoming?start=2030/05/01&end=2030/06/01")
        .send(&service)
        .await;

    let json = response.assert_status(StatusCode::OK).json();
    let titles: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["title"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(titles, vec!["Inside"]);
}

#[test_log::test(tokio::test)]
async fn upcoming_includes_events_straddling_the_window_edges() {
    let service = seeded_service(vec![
        approved_event("Ends on start", date(2030, 4, 20), date(2030, 5, 1)),
        approved_event("Starts on end", date(2030, 6, 1), date(2030, 6, 10)),
    ]);

    let response = TestRequest::get("/events/upcoming?start=2030/05/01&end=2030/06/01")
        .send(&service)
        .await;

    let json = response.assert_status(StatusCode::OK).json();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test_log::test(tokio::test)]
async fn upcoming_sorts_by_start_date_and_honors_limit() {
    let service = seeded_service(vec![
        approved_event("Third", date(2030, 5, 20), date(2030, 5, 21)),
        approved_event("First", date(2030, 5, 1), date(2030, 5, 2)),
        approved_event("Second", date(2030, 5, 10), date(2030, 5, 11)),
    ]);

    let response =
        TestRequest::get("/events/upcoming?start=2030/04/01&end=2030/07/01&limit=2")
            .send(&service)
            .await;

    let json = response.assert_status(StatusCode::OK).json();
    let titles: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["title"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[test_log::test(tokio::test)]
async fn upcoming_defaults_to_a_window_starting_today() {
    let today = chrono::Utc::now().date_naive();
    // Spans yesterday to tomorrow so a date rollover mid-test cannot
    // push it out of the default window.
    let service = seeded_service(vec![approved_event(
        "Around today",
        today - Days::new(1),
        today + Days::new(1),
    )]);

    let response = TestRequest::get("/events/upcoming").send(&service).await;
    response
        .assert_status(StatusCode::OK)
        .assert_body_contains("Around today");
}

#[test_log::test(tokio::test)]
async fn upcoming_never_exposes_the_api_key() {
    let event = approved_event("Secret carrier", date(2030, 5, 10), date(2030, 5, 11));
    let api_key = event.api_key.to_string();
    let service = seeded_service(vec![event]);

    let response = TestRequest::get("/events/upcoming?start=2030/05/01&end=2030/06/01")
        .send(&service)
        .await;

    response
        .assert_status(StatusCode::OK)
        .assert_body_not_contains("api_key")
        .assert_body_not_contains(&api_key);
}

#[test_log::test(tokio::test)]
async fn upcoming_json_alias_matches() {
    let service = seeded_service(vec![approved_event(
        "Aliased",
        date(2030, 5, 10),
        date(2030, 5, 11),
    )]);

    let response = TestRequest::get("/events/upcoming.json?start=2030/05/01&end=2030/06/01")
        .send(&service)
        .await;
    response
        .assert_status(StatusCode::OK)
        .assert_body_contains("Aliased");
}

#[test_log::test(tokio::test)]
async fn iso_dashed_window_date_is_rejected() {
    let service = test_service();

    let response = TestRequest::get("/events/upcoming?start=2030-05-01")
        .send(&service)
        .await;
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("error");
}

#[test_log::test(tokio::test)]
async fn non_numeric_limit_is_rejected() {
    let service = test_service();

    let response = TestRequest::get("/events/upcoming?limit=plenty")
        .send(&service)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn negative_limit_is_rejected() {
    let service = test_service();

    let response = TestRequest::get("/events/upcoming?limit=-3")
        .send(&service)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn submission_is_stored_but_invisible_until_approved() {
    let service = test_service();

    let response = TestRequest::post("/events/submit")
        .form_body(&[
            ("title", "Board game night"),
            ("description", "Bring your own favorites"),
            ("location_text", "Makerspace, Oslo"),
            ("start_date", "2030-05-10"),
            ("end_date", "2030-05-11"),
        ])
        .send(&service)
        .await;
    response
        .assert_status(StatusCode::OK)
        .assert_body_contains("Thank you for the submission!");

    let listed = TestRequest::get("/events/upcoming?start=2030/05/01&end=2030/06/01")
        .send(&service)
        .await;
    assert_eq!(listed.assert_status(StatusCode::OK).body_string(), "[]");
}

#[test_log::test(tokio::test)]
async fn submission_with_missing_field_is_rejected() {
    let service = test_service();

    let response = TestRequest::post("/events/submit")
        .form_body(&[
            ("title", "No description"),
            ("location_text", "Somewhere"),
            ("start_date", "2030-05-10"),
            ("end_date", "2030-05-11"),
        ])
        .send(&service)
        .await;

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("description");
}

#[test_log::test(tokio::test)]
async fn submission_with_reversed_dates_is_rejected() {
    let service = test_service();

    let response = TestRequest::post("/events/submit")
        .form_body(&[
            ("title", "Backwards"),
            ("description", "Ends before it starts"),
            ("location_text", "Somewhere"),
            ("start_date", "2030-05-11"),
            ("end_date", "2030-05-10"),
        ])
        .send(&service)
        .await;

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("end_date");
}

#[test_log::test(tokio::test)]
async fn approval_makes_a_pending_event_visible() {
    let event = pending_event("Pending", date(2030, 5, 10), date(2030, 5, 11));
    let (id, api_key) = (event.id, event.api_key);
    let service = seeded_service(vec![event]);

    let before = TestRequest::get("/events/upcoming?start=2030/05/01&end=2030/06/01")
        .send(&service)
        .await;
    assert_eq!(before.body_string(), "[]");

    let approve = TestRequest::get(&format!("/events/approve/{id}?api_key={api_key}"))
        .send(&service)
        .await;
    assert_eq!(approve.assert_status(StatusCode::OK).body_string(), "OK");

    let after = TestRequest::get("/events/upcoming?start=2030/05/01&end=2030/06/01")
        .send(&service)
        .await;
    after
        .assert_status(StatusCode::OK)
        .assert_body_contains("Pending");
}

#[test_log::test(tokio::test)]
async fn approval_is_idempotent() {
    let event = pending_event("Twice", date(2030, 5, 10), date(2030, 5, 11));
    let (id, api_key) = (event.id, event.api_key);
    let service = seeded_service(vec![event]);

    let url = format!("/events/approve/{id}?api_key={api_key}");
    TestRequest::get(&url)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    TestRequest::get(&url)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
}

#[test_log::test(tokio::test)]
async fn approval_without_api_key_is_unauthorized() {
    let event = pending_event("Keyless", date(2030, 5, 10), date(2030, 5, 11));
    let id = event.id;
    let service = seeded_service(vec![event]);

    let response = TestRequest::get(&format!("/events/approve/{id}"))
        .send(&service)
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[test_log::test(tokio::test)]
async fn approval_with_wrong_api_key_is_not_found() {
    let event = pending_event("Wrong key", date(2030, 5, 10), date(2030, 5, 11));
    let id = event.id;
    let service = seeded_service(vec![event]);

    let response = TestRequest::get(&format!(
        "/events/approve/{id}?api_key={}",
        uuid::Uuid::new_v4()
    ))
    .send(&service)
    .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn approval_of_unknown_event_is_not_found() {
    let service = test_service();

    let response = TestRequest::get(&format!(
        "/events/approve/{}?api_key={}",
        uuid::Uuid::new_v4(),
        uuid::Uuid::new_v4()
    ))
    .send(&service)
    .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn approval_with_garbled_id_is_not_found() {
    let service = test_service();

    let response = TestRequest::get("/events/approve/not-a-uuid?api_key=whatever")
        .send(&service)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn locations_is_a_fixed_empty_array() {
    let service = test_service();

    let plain = TestRequest::get("/events/locations").send(&service).await;
    assert_eq!(plain.assert_status(StatusCode::OK).body_string(), "[]");

    let aliased = TestRequest::get("/events/locations.json").send(&service).await;
    assert_eq!(aliased.assert_status(StatusCode::OK).body_string(), "[]");
}
