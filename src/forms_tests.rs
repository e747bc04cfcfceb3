#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, 2)
        .unwrap()
        .and_hms_opt(18, 5, 0)
        .unwrap()
}

fn txn_form(kind: &str, amount: &str, category: &str, description: &str) -> TransactionForm {
    TransactionForm {
        kind: kind.into(),
        amount: amount.into(),
        category: category.into(),
        description: description.into(),
    }
}

// ── Transaction form ──────────────────────────────────────────

#[test]
fn test_transaction_form_valid() {
    let new = txn_form("expense", "12.50", "Food", "Pizza")
        .validate(now())
        .unwrap();
    assert_eq!(new.kind, TransactionKind::Expense);
    assert_eq!(new.amount.value(), dec!(12.50));
    assert_eq!(new.category, "Food");
    assert_eq!(new.description, "Pizza");
    assert_eq!(new.occurred_at, now());
}

#[test]
fn test_transaction_form_trims_fields() {
    let new = txn_form(" Income ", " $1,200 ", " Job ", " Summer work ")
        .validate(now())
        .unwrap();
    assert_eq!(new.kind, TransactionKind::Income);
    assert_eq!(new.amount.value(), dec!(1200));
    assert_eq!(new.category, "Job");
    assert_eq!(new.description, "Summer work");
}

#[test]
fn test_transaction_form_missing_fields_in_order() {
    assert_eq!(
        txn_form("expense", "", "", "").validate(now()).unwrap_err(),
        FormError::MissingField("amount")
    );
    assert_eq!(
        txn_form("expense", "3", " ", "").validate(now()).unwrap_err(),
        FormError::MissingField("category")
    );
    assert_eq!(
        txn_form("expense", "3", "Food", "").validate(now()).unwrap_err(),
        FormError::MissingField("description")
    );
}

#[test]
fn test_transaction_form_rejects_bad_amounts() {
    assert_eq!(
        txn_form("expense", "abc", "Food", "x").validate(now()).unwrap_err(),
        FormError::InvalidAmount("abc".into())
    );
    assert_eq!(
        txn_form("expense", "0", "Food", "x").validate(now()).unwrap_err(),
        FormError::NonPositiveAmount(dec!(0))
    );
    assert_eq!(
        txn_form("income", "-4", "Gift", "x").validate(now()).unwrap_err(),
        FormError::NonPositiveAmount(dec!(-4))
    );
}

#[test]
fn test_transaction_form_rejects_unknown_kind() {
    assert_eq!(
        txn_form("refund", "4", "Gift", "x").validate(now()).unwrap_err(),
        FormError::InvalidKind("refund".into())
    );
}

// ── Goal form ─────────────────────────────────────────────────

#[test]
fn test_goal_form_valid() {
    let form = GoalForm {
        title: "New Bike".into(),
        target_amount: "250".into(),
        deadline: "2024-09-01".into(),
        category: "Other".into(),
    };
    let goal = form.validate().unwrap();
    assert_eq!(goal.title, "New Bike");
    assert_eq!(goal.target_amount.value(), dec!(250));
    assert_eq!(goal.deadline, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
}

#[test]
fn test_goal_form_errors() {
    let mut form = GoalForm::default();
    assert_eq!(form.validate().unwrap_err(), FormError::MissingField("title"));

    form.title = "Trip".into();
    form.target_amount = "300".into();
    form.deadline = "next summer".into();
    form.category = "Travel".into();
    assert_eq!(
        form.validate().unwrap_err(),
        FormError::InvalidDate("next summer".into())
    );

    form.deadline = "2024-07-01".into();
    form.category.clear();
    assert_eq!(form.validate().unwrap_err(), FormError::MissingField("category"));
}

// ── Auth forms ────────────────────────────────────────────────

#[test]
fn test_login_form() {
    let form = LoginForm {
        email: "teen@example.com".into(),
        password: "secret".into(),
    };
    assert_eq!(
        form.validate().unwrap(),
        Credentials {
            email: "teen@example.com".into(),
            password: "secret".into()
        }
    );
}

#[test]
fn test_login_form_errors() {
    let form = LoginForm {
        email: "not-an-email".into(),
        password: "x".into(),
    };
    assert_eq!(
        form.validate().unwrap_err(),
        FormError::InvalidEmail("not-an-email".into())
    );

    let form = LoginForm {
        email: "a@b.co".into(),
        password: "   ".into(),
    };
    assert_eq!(form.validate().unwrap_err(), FormError::MissingField("password"));
}

#[test]
fn test_signup_form_requires_name() {
    let form = SignupForm {
        name: String::new(),
        email: "a@b.co".into(),
        password: "pw".into(),
    };
    assert_eq!(form.validate().unwrap_err(), FormError::MissingField("name"));

    let form = SignupForm {
        name: "Casey".into(),
        ..form
    };
    let (name, creds) = form.validate().unwrap();
    assert_eq!(name, "Casey");
    assert_eq!(creds.email, "a@b.co");
}

#[test]
fn test_profile_form() {
    let form = ProfileForm {
        name: "Casey".into(),
        email: "casey@school.edu".into(),
    };
    assert_eq!(
        form.validate().unwrap(),
        ("Casey".to_string(), "casey@school.edu".to_string())
    );

    let form = ProfileForm {
        name: "Casey".into(),
        email: String::new(),
    };
    assert_eq!(form.validate().unwrap_err(), FormError::MissingField("email"));
}
