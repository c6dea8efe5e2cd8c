use oxr::{OxrError, RatesQuery};

use crate::common::{client_for, mock_json, setup_server};

fn latest_with(status: u16, body: &str) -> OxrError {
    let server = setup_server();
    let mock = mock_json(&server, "/latest.json", status, body.to_string());

    let err = client_for(&server)
        .latest(&RatesQuery::new())
        .unwrap_err();

    mock.assert();
    err
}

#[test]
fn non_json_success_body_is_a_decode_error() {
    let err = latest_with(200, "<html>maintenance</html>");
    match err {
        OxrError::Decode { exchange, .. } => {
            assert_eq!(exchange.response.status, 200);
            assert_eq!(exchange.response.body, "<html>maintenance</html>");
        }
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[test]
fn non_json_error_body_is_a_decode_error_not_a_status_error() {
    let err = latest_with(502, "Bad Gateway");
    assert!(matches!(err, OxrError::Decode { .. }), "got {err:?}");
    assert_eq!(err.status(), Some(502));
}

#[test]
fn empty_body_is_a_decode_error() {
    let err = latest_with(200, "");
    assert!(matches!(err, OxrError::Decode { .. }), "got {err:?}");
}

#[test]
fn json_null_is_a_decode_error() {
    let err = latest_with(200, "null");
    assert!(matches!(err, OxrError::Decode { .. }), "got {err:?}");
}
