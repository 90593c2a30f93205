use super::*;

fn astro() -> UserData {
    UserData {
        id: 1,
        email: "astro@dummy.com".into(),
        name: "astro".into(),
        role: None,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================================
// Wire field names
// =============================================================================

#[test]
fn auth_response_token_serializes_camel_case() {
    let resp = AuthResponse::success(200, "Login Successful", astro(), Some("tok".into()));
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["accessToken"], "tok");
    assert!(json.get("access_token").is_none());
}

#[test]
fn user_data_optional_fields_omitted_when_absent() {
    let json = serde_json::to_value(astro()).unwrap();
    assert!(json.get("role").is_none());
    assert!(json.get("createdAt").is_none());
    assert!(json.get("updatedAt").is_none());
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Moderator).unwrap(), "moderator");
}

#[test]
fn auth_response_round_trips() {
    let resp = AuthResponse::success(200, "ok", astro(), Some("mock_access_token".into()));
    let json = serde_json::to_string(&resp).unwrap();
    let restored: AuthResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, resp);
}

#[test]
fn auth_response_parses_minimal_body() {
    // Servers may omit every optional field on failure paths.
    let restored: AuthResponse = serde_json::from_str(r#"{"success":false,"status":500}"#).unwrap();
    assert!(!restored.success);
    assert_eq!(restored.status, 500);
    assert!(restored.user.is_none());
    assert!(restored.access_token.is_none());
}

// =============================================================================
// Envelope constructors
// =============================================================================

#[test]
fn failure_never_carries_user_or_token() {
    let resp = AuthResponse::failure(401, "Invalid email or password", "Unauthorized");
    assert!(!resp.success);
    assert!(resp.user.is_none());
    assert!(resp.access_token.is_none());
    assert_eq!(resp.message.as_deref(), Some("Invalid email or password"));
}

#[test]
fn user_response_found_sets_data() {
    let resp = UserResponse::found(200, "User Fetched Successfully", astro());
    assert!(resp.success);
    assert_eq!(resp.data.unwrap().email, "astro@dummy.com");
}

#[test]
fn user_update_omits_absent_fields() {
    let update = UserUpdate { id: 3, name: Some("cosmo".into()), ..UserUpdate::default() };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "cosmo");
    assert!(json.get("email").is_none());
    assert!(json.get("role").is_none());
}

#[test]
fn user_query_by_email_leaves_other_fields_empty() {
    let q = UserQuery::by_email("astro@dummy.com");
    assert!(q.id.is_none());
    assert!(q.name.is_none());
    assert_eq!(q.email.as_deref(), Some("astro@dummy.com"));
}
