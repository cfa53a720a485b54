#![allow(clippy::unused_async, unused_must_use)]
//! Tests for the Atom and RSS feed endpoints.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn atom_feed_has_the_atom_content_type() {
    let service = test_service();

    let response = TestRequest::get("/events/upcoming.atom").send(&service).await;
    response
        .assert_status(StatusCode::OK)
        .assert_header_contains("Content-Type", "application/atom+xml");
}

#[test_log::test(tokio::test)]
async fn rss_feed_has_the_rss_content_type() {
    let service = test_service();

    let response = TestRequest::get("/events/upcoming.rss").send(&service).await;
    response
        .assert_status(StatusCode::OK)
        .assert_header_contains("Content-Type", "application/rss+xml");
}

#[test_log::test(tokio::test)]
async fn empty_selection_still_produces_a_parseable_atom_document() {
    let service = test_service();

    let response = TestRequest::get("/events/upcoming.atom").send(&service).await;
    let body = response.assert_status(StatusCode::OK).body_string();

    assert!(body.starts_with("<?xml"));
    assert!(body.contains("<feed"));
    assert!(!body.contains("<entry>"));
}

#[test_log::test(tokio::test)]
async fn empty_selection_still_produces_a_parseable_rss_document() {
    let service = test_service();

    let response = TestRequest::get("/events/upcoming.rss").send(&service).await;
    let body = response.assert_status(StatusCode::OK).body_string();

    assert!(body.starts_with("<?xml"));
    assert!(body.contains("<rss version=\"2.0\">"));
    assert!(body.contains("<channel>"));
    assert!(!body.contains("<item>"));
}

#[test_log::test(tokio::test)]
async fn atom_entries_carry_title_anchor_and_synopsis() {
    let event = approved_event("Repair café", date(2030, 5, 10), date(2030, 5, 11));
    let id = event.id;
    let service = seeded_service(vec![event]);

    let response =
        TestRequest::get("/events/upcoming.atom?start=2030/05/01&end=2030/06/01")
            .send(&service)
            .await;

    response
        .assert_status(StatusCode::OK)
        .assert_body_contains("<entry>")
        .assert_body_contains("Repair café")
        .assert_body_contains(&format!("#event-{id}"))
        .assert_body_contains("Where? Makerspace, Oslo.");
}

#[test_log::test(tokio::test)]
async fn rss_items_carry_title_and_guid() {
    let event = approved_event("Repair café", date(2030, 5, 10), date(2030, 5, 11));
    let id = event.id;
    let service = seeded_service(vec![event]);

    let response = TestRequest::get("/events/upcoming.rss?start=2030/05/01&end=2030/06/01")
        .send(&service)
        .await;

    response
        .assert_status(StatusCode::OK)
        .assert_body_contains("<item>")
        .assert_body_contains("Repair café")
        .assert_body_contains(&format!("#event-{id}"));
}

#[test_log::test(tokio::test)]
async fn feeds_respect_the_requested_window() {
    let service = seeded_service(vec![
        approved_event("Inside", date(2030, 5, 10), date(2030, 5, 11)),
        approved_event("Outside", date(2030, 8, 1), date(2030, 8, 2)),
    ]);

    let response =
        TestRequest::get("/events/upcoming.atom?start=2030/05/01&end=2030/06/01")
            .send(&service)
            .await;

    response
        .assert_status(StatusCode::OK)
        .assert_body_contains("Inside")
        .assert_body_not_contains("Outside");
}

#[test_log::test(tokio::test)]
async fn feeds_never_list_unapproved_events() {
    let service = seeded_service(vec![pending_event(
        "Not yet public",
        date(2030, 5, 10),
        date(2030, 5, 11),
    )]);

    let response =
        TestRequest::get("/events/upcoming.atom?start=2030/05/01&end=2030/06/01")
            .send(&service)
            .await;

    response
        .assert_status(StatusCode::OK)
        .assert_body_not_contains("Not yet public");
}

#[test_log::test(tokio::test)]
async fn malformed_window_fails_feeds_too() {
    let service = test_service();

    let response = TestRequest::get("/events/upcoming.atom?start=soon")
        .send(&service)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn unknown_feed_extension_is_not_routed() {
    let service = test_service();

    let response = TestRequest::get("/events/upcoming.ics").send(&service).await;
    response.assert_status(StatusCode::NOT_FOUND);
}
