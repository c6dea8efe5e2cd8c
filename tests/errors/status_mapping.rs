use oxr::{OxrError, RatesQuery};

use crate::common::{client_for, error_body, fixture, mock_json, setup_server};

fn latest_error(status: u16, body: String) -> OxrError {
    let server = setup_server();
    let mock = mock_json(&server, "/latest.json", status, body);

    let err = client_for(&server)
        .latest(&RatesQuery::new().base("EUR"))
        .unwrap_err();

    mock.assert();
    err
}

#[test]
fn invalid_app_id_maps_to_invalid_app_id() {
    let err = latest_error(401, fixture("error_invalid_app_id"));
    match err {
        OxrError::InvalidAppId(x) => {
            assert_eq!(x.response.status, 401);
            assert!(x.request.url.path().ends_with("/latest.json"));
            assert!(x.response.body.contains("invalid_app_id"));
        }
        other => panic!("expected InvalidAppId, got {other:?}"),
    }
}

#[test]
fn invalid_base_maps_to_invalid_base() {
    let err = latest_error(400, error_body(400, "invalid_base", "Client requested an invalid base currency."));
    assert!(matches!(err, OxrError::InvalidBase(_)), "got {err:?}");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn missing_app_id_maps_to_missing_app_id() {
    let err = latest_error(401, error_body(401, "missing_app_id", "No App ID provided."));
    assert!(matches!(err, OxrError::MissingAppId(_)), "got {err:?}");
}

#[test]
fn not_allowed_maps_to_not_allowed() {
    let err = latest_error(403, fixture("error_not_allowed"));
    assert!(matches!(err, OxrError::NotAllowed(_)), "got {err:?}");
    assert_eq!(err.status(), Some(403));
}

#[test]
fn unknown_message_maps_to_status_with_message_and_description() {
    let err = latest_error(
        429,
        error_body(429, "access_restricted", "Access restricted for repeated over-use."),
    );
    match err {
        OxrError::Status {
            exchange,
            message,
            description,
        } => {
            assert_eq!(exchange.response.status, 429);
            assert_eq!(message.as_deref(), Some("access_restricted"));
            assert_eq!(
                description.as_deref(),
                Some("Access restricted for repeated over-use.")
            );
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[test]
fn error_json_without_message_maps_to_status() {
    let err = latest_error(500, "{}".to_string());
    match err {
        OxrError::Status {
            message,
            description,
            ..
        } => {
            assert_eq!(message, None);
            assert_eq!(description, None);
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[test]
fn error_display_masks_the_credential() {
    let err = latest_error(401, fixture("error_invalid_app_id"));
    let shown = err.to_string();
    assert!(!shown.contains(crate::common::APP_ID), "{shown}");
    assert!(shown.contains("latest.json"), "{shown}");
}

#[test]
fn error_debug_masks_the_credential() {
    let err = latest_error(400, error_body(400, "invalid_base", "Client requested an invalid base currency."));
    let shown = format!("{err:?}");
    assert!(!shown.contains(crate::common::APP_ID), "{shown}");
    assert!(shown.contains("latest.json"), "{shown}");
}

#[test]
fn non_string_message_keeps_the_description() {
    let body = serde_json::json!({
        "error": true,
        "status": 400,
        "message": 42,
        "description": "Something went wrong.",
    })
    .to_string();
    match latest_error(400, body) {
        OxrError::Status {
            message,
            description,
            ..
        } => {
            assert_eq!(message, None);
            assert_eq!(description.as_deref(), Some("Something went wrong."));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[test]
fn client_stays_usable_after_an_error() {
    let server = setup_server();
    let client = client_for(&server);

    let mut failing = mock_json(&server, "/latest.json", 403, fixture("error_not_allowed"));
    assert!(client.latest(&RatesQuery::new()).is_err());
    failing.assert();
    failing.delete();

    let ok = mock_json(&server, "/latest.json", 200, fixture("latest_EUR"));
    let resp = client.latest(&RatesQuery::new()).unwrap();
    ok.assert();
    assert_eq!(resp["base"], "EUR");
}
