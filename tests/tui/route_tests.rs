//! View routing tests

use ugpt_cli::tui::{Route, ScreenOutcome};

#[test]
fn test_sign_in_opens_chat() {
    let next = Route::Login.next(ScreenOutcome::SignedIn("a@b.c".into()));
    assert_eq!(
        next,
        Some(Route::Chat {
            user: "a@b.c".into()
        })
    );
}

#[test]
fn test_logout_returns_to_login() {
    let chat = Route::Chat {
        user: "a@b.c".into(),
    };
    assert_eq!(chat.next(ScreenOutcome::LoggedOut), Some(Route::Login));
}

#[test]
fn test_quit_ends_app_from_any_view() {
    assert_eq!(Route::Login.next(ScreenOutcome::Quit), None);
    let chat = Route::Chat { user: "x".into() };
    assert_eq!(chat.next(ScreenOutcome::Quit), None);
}

#[test]
fn test_unrelated_outcome_keeps_view() {
    assert_eq!(
        Route::Login.next(ScreenOutcome::LoggedOut),
        Some(Route::Login)
    );
}
