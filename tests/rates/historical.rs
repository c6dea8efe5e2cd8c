use chrono::NaiveDate;
use httpmock::Method::GET;
use oxr::RatesQuery;

use crate::common::{APP_ID, client_for, fixture, setup_server};

#[test]
fn historical_puts_date_in_path() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/historical/2020-01-01.json")
            .query_param("app_id", APP_ID)
            .query_param("symbols", "EUR,GBP,JPY");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("historical_2020-01-01"));
    });

    let client = client_for(&server);
    let resp = client
        .historical("2020-01-01", &RatesQuery::new().symbols(vec!["EUR", "GBP", "JPY"]))
        .unwrap();

    mock.assert();
    assert_eq!(resp["base"], "USD");
    assert_eq!(resp["rates"]["JPY"], 108.6755);
}

#[test]
fn historical_accepts_naive_date() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/historical/2020-01-01.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("historical_2020-01-01"));
    });

    let client = client_for(&server);
    let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    client.historical(date, &RatesQuery::new()).unwrap();

    mock.assert();
}

#[test]
fn historical_date_string_is_not_validated() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/historical/yesterday.json");
        then.status(400)
            .header("content-type", "application/json")
            .body(crate::common::error_body(
                400,
                "invalid_date",
                "Invalid date supplied.",
            ));
    });

    let client = client_for(&server);
    let err = client
        .historical("yesterday", &RatesQuery::new())
        .unwrap_err();

    mock.assert();
    match err {
        oxr::OxrError::Status { message, .. } => {
            assert_eq!(message.as_deref(), Some("invalid_date"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
