//! Integration tests for `GET /agenda/`.

mod common;

use axum::http::StatusCode;
use rstest::rstest;

use common::{create_seeded_app, ids, insert_raw};

#[rstest]
#[case("/agenda/?date=2021-01-12", vec![4, 5])]
#[case("/agenda/?date=2021-1-12", vec![4, 5])]
#[case("/agenda/?date=2021/01/12", vec![4, 5])]
#[case("/agenda/?date=2021-09-22", vec![2])]
#[case("/agenda/?date=2030-01-01", vec![])]
#[tokio::test]
async fn agenda_lists_items_due_on_date(#[case] uri: &str, #[case] expected: Vec<i64>) {
    let app = create_seeded_app().await;

    let (status, items) = app.get_json(uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&items), expected);
}

#[rstest]
#[tokio::test]
async fn agenda_matches_stored_date_by_substring() {
    let app = create_seeded_app().await;
    insert_raw(&app, 10, "2023-01-15 08:00").await;
    insert_raw(&app, 11, "2023-01-16").await;

    let (status, items) = app.get_json("/agenda/?date=2023-01-15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&items), vec![10]);
    assert_eq!(items[0]["dueDate"], "2023-01-15 08:00");
}

#[rstest]
#[tokio::test]
async fn agenda_partial_date_is_normalized_before_matching() {
    let app = create_seeded_app().await;
    insert_raw(&app, 10, "2023-01-15").await;
    insert_raw(&app, 11, "2023-01-01").await;

    let (_, items) = app.get_json("/agenda/?date=2023-01-1").await;

    assert_eq!(ids(&items), vec![11]);
}

#[rstest]
#[tokio::test]
async fn agenda_month_resolves_to_first_day() {
    let app = create_seeded_app().await;
    insert_raw(&app, 10, "2021-01-01").await;

    let (status, items) = app.get_json("/agenda/?date=2021-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&items), vec![10]);
}

#[rstest]
#[tokio::test]
async fn agenda_ignores_other_filters_once_valid() {
    let app = create_seeded_app().await;

    let (status, items) = app
        .get_json("/agenda/?date=2021-01-12&status=DONE")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&items), vec![4, 5]);
}

#[rstest]
#[case("/agenda/", "Invalid Due Date")]
#[case("/agenda/?date=", "Invalid Due Date")]
#[case("/agenda/?date=2021-02-30", "Invalid Due Date")]
#[case("/agenda/?date=tomorrow", "Invalid Due Date")]
#[case("/agenda/?date=2021-01-12&status=LATER", "Invalid Todo Status")]
#[case("/agenda/?date=2021-01-12&category=GARDEN", "Invalid Todo Category")]
#[tokio::test]
async fn agenda_rejects_invalid_input(#[case] uri: &str, #[case] message: &str) {
    let app = create_seeded_app().await;

    let (status, body) = app.get(uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, message);
}
