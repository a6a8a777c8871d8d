use super::*;

fn session_user(email: &str, manager: bool) -> SessionUser {
    SessionUser {
        email: email.to_owned(),
        name: "Someone".to_owned(),
        is_manager: manager,
    }
}

#[test]
fn default_state_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_manager());
}

#[test]
fn is_manager_follows_role_flag() {
    let state = AuthState { user: Some(session_user("a@x.com", true)), loading: false };
    assert!(state.is_manager());
    let state = AuthState { user: Some(session_user("a@x.com", false)), loading: false };
    assert!(!state.is_manager());
}

#[test]
fn is_self_matches_only_own_email() {
    let state = AuthState { user: Some(session_user("a@x.com", true)), loading: false };
    assert!(state.is_self("a@x.com"));
    assert!(!state.is_self("b@x.com"));
}
