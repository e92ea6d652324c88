//! Validation for the add-transaction, create-group and settings forms.
//!
//! Every check returns a [`ValidationError`] instead of touching any data, so
//! the caller can show it and keep the user's input as typed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::schemas::{AdminUser, EntryKind, Group, LedgerEntry, UserStatus};
use crate::session::UserProfile;

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionDraft {
    pub kind: EntryKind,
    pub amount: String,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    pub counterparty: String,
}

impl TransactionDraft {
    pub fn validate(&self, id: impl Into<String>) -> Result<LedgerEntry, ValidationError> {
        let amount = parse_amount(&self.amount)?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        if !self.kind.accepts_category(category) {
            return Err(ValidationError::UnknownCategory {
                kind: kind_label(self.kind),
                category: category.to_string(),
            });
        }

        let counterparty = self.counterparty.trim();
        if counterparty.is_empty() {
            return Err(ValidationError::MissingCounterparty);
        }

        let mut entry = LedgerEntry::new(id, self.kind, self.date, counterparty, amount, category);
        let description = self.description.trim();
        if !description.is_empty() {
            entry = entry.with_description(description);
        }
        Ok(entry)
    }
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Income => "income",
        EntryKind::Expense => "expense",
    }
}

pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    let amount =
        Decimal::from_str(raw).map_err(|_| ValidationError::InvalidAmount(raw.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::NegativeAmount);
    }
    Ok(amount)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupDraft {
    pub name: String,
    pub description: String,
}

impl GroupDraft {
    /// Builds an empty group numbered after the ones that already exist.
    pub fn validate(&self, existing: usize, today: NaiveDate) -> Result<Group, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingGroupName);
        }
        Ok(Group {
            id: (existing + 1).to_string(),
            name: name.to_string(),
            description: self.description.trim().to_string(),
            date: today,
            total_amount: Decimal::ZERO,
            members: Vec::new(),
            expenses: Vec::new(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUserDraft {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl NewUserDraft {
    /// New accounts start pending with no transactions. A blank role falls
    /// back to `"user"`.
    pub fn validate(
        &self,
        existing: usize,
        today: NaiveDate,
    ) -> Result<AdminUser, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        let role = match self.role.trim() {
            "" => "user",
            role => role,
        };
        Ok(AdminUser {
            id: (existing + 1).to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status: UserStatus::Pending,
            last_active: today,
            transactions: 0,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

impl ProfileUpdate {
    pub fn apply(&self, current: &UserProfile) -> Result<UserProfile, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = self.email.trim();
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        Ok(UserProfile {
            name: name.to_string(),
            email: email.to_string(),
            ..current.clone()
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    /// All three fields are required; the current password is only checked
    /// for presence since there is no credential store to verify it against.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.current.is_empty() {
            return Err(ValidationError::MissingPassword("current"));
        }
        if self.new.is_empty() {
            return Err(ValidationError::MissingPassword("new"));
        }
        if self.new != self.confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}
