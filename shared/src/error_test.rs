use super::*;

// =============================================================================
// from_status classification
// =============================================================================

#[test]
fn status_400_is_validation() {
    assert_eq!(
        ApiError::from_status(400, "bad input"),
        ApiError::Validation("bad input".into())
    );
}

#[test]
fn status_401_and_403_are_authentication() {
    assert!(matches!(ApiError::from_status(401, "x"), ApiError::Authentication(_)));
    assert!(matches!(ApiError::from_status(403, "x"), ApiError::Authentication(_)));
}

#[test]
fn gateway_and_timeout_statuses_are_network() {
    for status in [408, 502, 503, 504] {
        assert!(
            matches!(ApiError::from_status(status, "x"), ApiError::Network(_)),
            "expected network for {status}"
        );
    }
}

#[test]
fn other_statuses_fall_through_to_http() {
    for status in [404, 409, 429, 500] {
        match ApiError::from_status(status, "boom") {
            ApiError::Http { status: s, message } => {
                assert_eq!(s, status);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Http for {status}, got {other:?}"),
        }
    }
}

// =============================================================================
// Envelope helpers
// =============================================================================

#[test]
fn status_round_trips_for_http_errors() {
    let err = ApiError::from_status(409, "conflict");
    assert_eq!(err.status(), 409);
}

#[test]
fn network_errors_report_503() {
    assert_eq!(ApiError::Network("down".into()).status(), 503);
}

#[test]
fn message_preserves_server_text() {
    let err = ApiError::from_status(401, "Invalid email or password");
    assert_eq!(err.message(), "Invalid email or password");
}

#[test]
fn display_includes_classification() {
    let err = ApiError::Authentication("expired".into());
    assert_eq!(err.to_string(), "authentication error: expired");
}
