//! Entry view sign-in flow

use std::time::Duration;
use ugpt_core::login::{SIGN_UP_NOTICE, provider_icons};
use ugpt_core::{AuthProvider, LoginError, LoginFlow, LoginMethod, validate_email};

#[test]
fn email_without_at_is_rejected() {
    let err = validate_email("not-an-email").unwrap_err();
    assert!(matches!(err, LoginError::InvalidEmail(_)));
    assert_eq!(err.user_message(), "Please enter a valid email address");
}

#[test]
fn empty_email_is_rejected() {
    assert!(validate_email("").is_err());
    assert!(validate_email("   ").is_err());
}

#[test]
fn email_with_at_is_accepted() {
    assert!(validate_email("user@example.com").is_ok());
    assert!(validate_email("  a@b  ").is_ok());
}

#[test]
fn invalid_email_does_not_start_sign_in() {
    let mut flow = LoginFlow::default();
    let result = flow.begin(LoginMethod::Email("not-an-email".into()));

    assert!(result.is_err());
    assert!(!flow.is_signing_in());
    assert_eq!(flow.complete(), None);
}

#[test]
fn valid_email_waits_login_delay() {
    let mut flow = LoginFlow::default();
    let delay = flow
        .begin(LoginMethod::Email("user@example.com".into()))
        .expect("begin");

    assert_eq!(delay, Duration::from_millis(1500));
    assert!(flow.is_signing_in());
    assert_eq!(flow.complete().as_deref(), Some("user@example.com"));
    assert!(!flow.is_signing_in());
}

#[test]
fn provider_sign_in_skips_validation() {
    let mut flow = LoginFlow::new(Duration::from_millis(10));
    let delay = flow
        .begin(LoginMethod::Provider(AuthProvider::Apple))
        .expect("begin");
    assert_eq!(delay, Duration::from_millis(10));
    assert_eq!(flow.complete().as_deref(), Some("Apple account"));
}

#[test]
fn second_begin_while_signing_in_is_rejected() {
    let mut flow = LoginFlow::default();
    flow.begin(LoginMethod::Provider(AuthProvider::Google))
        .expect("begin");
    let again = flow.begin(LoginMethod::Email("user@example.com".into()));
    assert_eq!(again, Err(LoginError::InProgress));
}

#[test]
fn cancel_clears_sign_in() {
    let mut flow = LoginFlow::default();
    flow.begin(LoginMethod::Provider(AuthProvider::Phone))
        .expect("begin");
    flow.cancel();
    assert!(!flow.is_signing_in());
    assert_eq!(flow.complete(), None);
}

#[test]
fn every_provider_has_label_and_icon() {
    assert_eq!(provider_icons().len(), AuthProvider::ALL.len());
    for provider in AuthProvider::ALL {
        assert!(provider.label().starts_with("Continue with"));
        assert!(provider.icon_url().starts_with("https://"));
    }
    assert_eq!(
        AuthProvider::Microsoft.label(),
        "Continue with Microsoft Account"
    );
}

#[test]
fn sign_up_notice_text() {
    assert_eq!(SIGN_UP_NOTICE, "In a full app, this would go to the signup page");
}
