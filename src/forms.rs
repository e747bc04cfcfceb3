//! Raw form input and its validation into store requests. A form that fails
//! validation never reaches a store.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::FormError;
use crate::models::{Amount, TransactionKind};
use crate::store::{NewGoal, NewTransaction};

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

fn email(value: &str) -> Result<String, FormError> {
    let value = required(value, "email")?;
    let valid = match EMAIL_RE.as_ref() {
        Some(re) => re.is_match(value),
        None => value.contains('@'),
    };
    if valid {
        Ok(value.to_string())
    } else {
        Err(FormError::InvalidEmail(value.to_string()))
    }
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDate(value.trim().to_string()))
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TransactionForm {
    pub(crate) kind: String,
    pub(crate) amount: String,
    pub(crate) category: String,
    pub(crate) description: String,
}

impl TransactionForm {
    pub(crate) fn validate(&self, occurred_at: NaiveDateTime) -> Result<NewTransaction, FormError> {
        let kind_raw = required(&self.kind, "type")?;
        let kind = TransactionKind::parse(kind_raw)
            .ok_or_else(|| FormError::InvalidKind(kind_raw.to_string()))?;
        let amount = Amount::parse(required(&self.amount, "amount")?)?;
        let category = required(&self.category, "category")?;
        let description = required(&self.description, "description")?;

        Ok(NewTransaction {
            kind,
            amount,
            category: category.to_string(),
            description: description.to_string(),
            occurred_at,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct GoalForm {
    pub(crate) title: String,
    pub(crate) target_amount: String,
    pub(crate) deadline: String,
    pub(crate) category: String,
}

impl GoalForm {
    pub(crate) fn validate(&self) -> Result<NewGoal, FormError> {
        let title = required(&self.title, "title")?;
        let target_amount = Amount::parse(required(&self.target_amount, "target amount")?)?;
        let deadline = parse_date(required(&self.deadline, "deadline")?)?;
        let category = required(&self.category, "category")?;

        Ok(NewGoal {
            title: title.to_string(),
            target_amount,
            deadline,
            category: category.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct LoginForm {
    pub(crate) email: String,
    pub(crate) password: String,
}

impl LoginForm {
    pub(crate) fn validate(&self) -> Result<Credentials, FormError> {
        let email = email(&self.email)?;
        let password = required(&self.password, "password")?;
        Ok(Credentials {
            email,
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SignupForm {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

impl SignupForm {
    pub(crate) fn validate(&self) -> Result<(String, Credentials), FormError> {
        let name = required(&self.name, "name")?.to_string();
        let credentials = LoginForm {
            email: self.email.clone(),
            password: self.password.clone(),
        }
        .validate()?;
        Ok((name, credentials))
    }
}

/// Draft of the profile edit view. Seeded from the current user, applied on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ProfileForm {
    pub(crate) name: String,
    pub(crate) email: String,
}

impl ProfileForm {
    pub(crate) fn validate(&self) -> Result<(String, String), FormError> {
        let name = required(&self.name, "name")?.to_string();
        let email = email(&self.email)?;
        Ok((name, email))
    }
}

#[cfg(test)]
#[path = "forms_tests.rs"]
mod forms_tests;
