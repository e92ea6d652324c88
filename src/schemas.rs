use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type MemberName = String;

pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investments",
    "Rental",
    "Side Business",
    "Gift",
    "Others",
];

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Rent",
    "Utilities",
    "Entertainment",
    "Transport",
    "Shopping",
    "Healthcare",
    "Education",
    "Travel",
    "Others",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Categories a user may pick for an entry of this kind.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            EntryKind::Income => INCOME_CATEGORIES,
            EntryKind::Expense => EXPENSE_CATEGORIES,
        }
    }

    pub fn accepts_category(self, category: &str) -> bool {
        self.categories().contains(&category)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LedgerEntry {
    pub id: String,
    pub kind: EntryKind,
    pub date: NaiveDate,
    /// Income source or expense merchant.
    pub counterparty: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub category: String,
}

impl LedgerEntry {
    pub fn new(
        id: impl Into<String>,
        kind: EntryKind,
        date: NaiveDate,
        counterparty: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            date,
            counterparty: counterparty.into(),
            amount,
            description: None,
            category: category.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub id: String,
    pub name: MemberName,
    pub paid: Decimal,
    pub should_pay: Decimal,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupExpense {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub paid_by: MemberName,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub total_amount: Decimal,
    pub members: Vec<GroupMember>,
    pub expenses: Vec<GroupExpense>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
        }
    }
}

/// An account as listed on the admin user-management screen.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub last_active: NaiveDate,
    pub transactions: u32,
}
