#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::config::Config;
use crate::models::TransactionKind;
use crate::store::Stores;
use crate::ui::app::{App, InputMode, PendingAction, Screen};

fn app() -> App {
    let config = Config::default();
    App::new(Stores::new(&config.ledger), &config)
}

fn signed_in() -> App {
    let mut app = app();
    handle_command("login sam@example.com secret", &mut app).unwrap();
    app
}

// ── Registry and dispatch ─────────────────────────────────────

#[test]
fn test_every_command_has_description() {
    for (name, cmd) in COMMANDS.iter() {
        assert!(!cmd.description.is_empty(), ":{name} has no description");
    }
}

#[test]
fn test_unknown_command_suggests_closest() {
    let mut app = signed_in();
    handle_command("dashbord", &mut app).unwrap();
    assert!(app.status_message.contains("Did you mean :dashboard?"));
}

#[test]
fn test_quit_stops_app() {
    let mut app = app();
    handle_command("q", &mut app).unwrap();
    assert!(!app.running);
}

// ── Session ───────────────────────────────────────────────────

#[test]
fn test_app_starts_on_sign_in() {
    let app = app();
    assert_eq!(app.screen, Screen::Auth);
}

#[test]
fn test_login_lands_on_dashboard() {
    let app = signed_in();
    assert_eq!(app.screen, Screen::Dashboard);
    assert_eq!(app.status_message, "Welcome back, Sam!");
}

#[test]
fn test_login_without_password_is_rejected() {
    let mut app = app();
    handle_command("login sam@example.com", &mut app).unwrap();
    assert_eq!(app.screen, Screen::Auth);
    assert!(app.status_message.contains("password"));
    assert!(!app.stores.auth.is_authenticated());
}

#[test]
fn test_signup_uses_given_name() {
    let mut app = app();
    handle_command("signup jo@example.com pw Jo Park", &mut app).unwrap();
    assert_eq!(app.stores.auth.current_user().unwrap().name, "Jo Park");
    assert_eq!(app.screen, Screen::Dashboard);
}

#[test]
fn test_logout_asks_for_confirmation() {
    let mut app = signed_in();
    handle_command("logout", &mut app).unwrap();
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(app.pending_action, Some(PendingAction::Logout));
    assert!(app.stores.auth.is_authenticated());

    confirm_pending(&mut app);
    assert!(!app.stores.auth.is_authenticated());
    assert_eq!(app.screen, Screen::Auth);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_protected_navigation_redirects_when_signed_out() {
    let mut app = app();
    handle_command("goals", &mut app).unwrap();
    assert_eq!(app.screen, Screen::Auth);
    assert!(app.status_message.contains("sign in"));
}

#[test]
fn test_go_unknown_path_reports_404() {
    let mut app = signed_in();
    handle_command("go /nowhere", &mut app).unwrap();
    assert_eq!(app.screen, Screen::Dashboard);
    assert!(app.status_message.starts_with("404"));
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_income_command_adds_transaction() {
    let mut app = signed_in();
    handle_command("income 20 Job | Babysitting", &mut app).unwrap();

    let ledger = app.ledger();
    assert_eq!(ledger.transaction_count(), 4);
    let newest = &ledger.transactions()[0];
    assert_eq!(newest.kind, TransactionKind::Income);
    assert_eq!(newest.description, "Babysitting");
    assert_eq!(ledger.balance(), dec!(30));
    assert!(app.status_message.starts_with("Transaction added!"));
}

#[test]
fn test_expense_with_multiword_category() {
    let mut app = signed_in();
    handle_command("expense 4.50 Eating Out | Bubble tea", &mut app).unwrap();
    let newest = &app.ledger().transactions()[0];
    assert_eq!(newest.category, "Eating Out");
    assert_eq!(app.ledger().balance(), dec!(5.50));
}

#[test]
fn test_expense_without_description_is_rejected() {
    let mut app = signed_in();
    handle_command("expense 10 Food", &mut app).unwrap();
    assert_eq!(app.ledger().transaction_count(), 3);
    assert!(app.status_message.contains("description"));
}

#[test]
fn test_oversized_amount_is_rejected() {
    let mut app = signed_in();
    handle_command("income 79228162514264337593543950335 Job | x", &mut app).unwrap();
    handle_command("income 79228162514264337593543950335 Job | x", &mut app).unwrap();
    assert_eq!(app.ledger().transaction_count(), 3);
    assert_eq!(app.ledger().balance(), dec!(10));
    assert!(app.status_message.contains("too large"));
}

#[test]
fn test_negative_amount_is_rejected() {
    let mut app = signed_in();
    handle_command("expense -5 Food | Refund?", &mut app).unwrap();
    assert_eq!(app.ledger().transaction_count(), 3);
}

#[test]
fn test_ledger_commands_need_session() {
    let mut app = app();
    handle_command("income 20 Job | Pay", &mut app).unwrap();
    assert_eq!(app.ledger().transaction_count(), 3);
    assert_eq!(app.screen, Screen::Auth);
}

#[test]
fn test_undo_and_redo_transaction() {
    let mut app = signed_in();
    handle_command("income 20 Job | Pay", &mut app).unwrap();
    handle_command("undo", &mut app).unwrap();
    assert_eq!(app.ledger().transaction_count(), 3);
    handle_command("redo", &mut app).unwrap();
    assert_eq!(app.ledger().transaction_count(), 4);
    handle_command("redo", &mut app).unwrap();
    assert_eq!(app.status_message, "Nothing to redo");
}

// ── Goals ─────────────────────────────────────────────────────

#[test]
fn test_goal_command_creates_goal_first() {
    let mut app = signed_in();
    handle_command("goal 300 2024-08-01 Travel | Beach trip", &mut app).unwrap();
    let goals = app.ledger().goals();
    assert_eq!(goals.len(), 3);
    assert_eq!(goals[0].title, "Beach trip");
    assert_eq!(goals[0].current_amount, dec!(0));
    assert_eq!(
        app.status_message,
        "Goal created! Your goal \"Beach trip\" has been added."
    );
}

#[test]
fn test_goal_with_bad_date_is_rejected() {
    let mut app = signed_in();
    handle_command("goal 300 01/08/2024 Travel | Beach trip", &mut app).unwrap();
    assert_eq!(app.ledger().goals().len(), 2);
    assert!(app.status_message.contains("YYYY-MM-DD"));
}

#[test]
fn test_contribute_uses_preset_by_default() {
    let mut app = signed_in();
    handle_command("contribute", &mut app).unwrap();
    assert_eq!(app.ledger().goals()[0].current_amount, dec!(80));
    assert!(app.status_message.starts_with("Progress updated! Added $5"));
}

#[test]
fn test_contribute_caps_at_target() {
    let mut app = signed_in();
    handle_command("contribute 100", &mut app).unwrap();
    let goal = &app.ledger().goals()[0];
    assert_eq!(goal.current_amount, dec!(150));
    assert!(app.status_message.ends_with("Goal reached!"));

    handle_command("contribute 5", &mut app).unwrap();
    assert!(app.status_message.contains("already fully funded"));
}

#[test]
fn test_preset_cycles_both_ways() {
    let mut app = signed_in();
    cycle_preset(&mut app, true);
    assert_eq!(app.contribution_preset(), 10);
    cycle_preset(&mut app, false);
    cycle_preset(&mut app, false);
    assert_eq!(app.contribution_preset(), 25);
}

#[test]
fn test_edit_goal_fields() {
    let mut app = signed_in();
    handle_command("edit-goal title Better Headset", &mut app).unwrap();
    handle_command("edit-goal saved 500", &mut app).unwrap();
    let goal = &app.ledger().goals()[0];
    assert_eq!(goal.title, "Better Headset");
    assert_eq!(goal.current_amount, dec!(150));
}

#[test]
fn test_edit_goal_unknown_field_shows_usage() {
    let mut app = signed_in();
    handle_command("edit-goal colour blue", &mut app).unwrap();
    assert!(app.status_message.starts_with("Usage: :edit-goal"));
}

// ── Business ──────────────────────────────────────────────────

#[test]
fn test_search_filters_listing() {
    let mut app = signed_in();
    handle_command("search headset", &mut app).unwrap();
    assert_eq!(app.screen, Screen::Business);
    let titles: Vec<&str> = app.visible_products().iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["Gaming Headset"]);
    assert_eq!(app.status_message, "1 listing(s) match 'headset'");
}

#[test]
fn test_open_and_message_seller() {
    let mut app = signed_in();
    handle_command("open 1", &mut app).unwrap();
    assert_eq!(app.open_product, Some(1));
    handle_command("message", &mut app).unwrap();
    assert!(app.status_message.starts_with("Message sent!"));
    assert!(app.status_message.contains("Sarah M."));
}

#[test]
fn test_open_missing_product() {
    let mut app = signed_in();
    handle_command("open 999", &mut app).unwrap();
    assert_eq!(app.open_product, None);
    assert!(app.status_message.contains("999"));
}

#[test]
fn test_message_without_open_listing() {
    let mut app = signed_in();
    handle_command("message", &mut app).unwrap();
    assert!(app.status_message.starts_with("Open a listing first"));
}

// ── Chat ──────────────────────────────────────────────────────

#[test]
fn test_ask_posts_message_and_schedules_reply() {
    let mut app = signed_in();
    let before = app.assistant.messages().len();
    handle_command("ask how do I save?", &mut app).unwrap();
    assert_eq!(app.screen, Screen::Chat);
    assert_eq!(app.assistant.messages().len(), before + 1);
    assert_eq!(app.assistant.pending_count(), 1);
}

#[test]
fn test_cancel_replies_confirms_first() {
    let mut app = signed_in();
    handle_command("ask one", &mut app).unwrap();
    handle_command("ask two", &mut app).unwrap();
    handle_command("cancel-replies", &mut app).unwrap();
    assert_eq!(
        app.pending_action,
        Some(PendingAction::CancelReplies { count: 2 })
    );
    confirm_pending(&mut app);
    assert_eq!(app.assistant.pending_count(), 0);
    assert_eq!(app.status_message, "Dropped 2 pending replies");
}

#[test]
fn test_cancel_replies_with_nothing_pending() {
    let mut app = signed_in();
    handle_command("cancel-replies", &mut app).unwrap();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.status_message, "No replies pending");
}

// ── Profile ───────────────────────────────────────────────────

#[test]
fn test_profile_edit_and_save() {
    let mut app = signed_in();
    handle_command("edit-profile", &mut app).unwrap();
    assert_eq!(app.screen, Screen::Profile);
    handle_command("name Samira Diaz", &mut app).unwrap();
    handle_command("email samira@example.com", &mut app).unwrap();
    handle_command("save", &mut app).unwrap();

    let user = app.stores.auth.current_user().unwrap();
    assert_eq!(user.name, "Samira Diaz");
    assert_eq!(user.email, "samira@example.com");
    assert!(app.profile_draft.is_none());
    assert!(app.status_message.starts_with("Profile updated!"));
}

#[test]
fn test_profile_save_rejects_bad_email() {
    let mut app = signed_in();
    handle_command("edit-profile", &mut app).unwrap();
    handle_command("email not-an-email", &mut app).unwrap();
    handle_command("save", &mut app).unwrap();
    assert_eq!(app.stores.auth.current_user().unwrap().email, "sam@example.com");
    assert!(app.profile_draft.is_some());
}

#[test]
fn test_profile_cancel_discards_draft() {
    let mut app = signed_in();
    handle_command("edit-profile", &mut app).unwrap();
    handle_command("name Someone Else", &mut app).unwrap();
    handle_command("cancel", &mut app).unwrap();
    assert_eq!(app.stores.auth.current_user().unwrap().name, "Sam");
}
