use std::sync::Mutex;

use crate::sample_data::{sample_expenses, sample_groups, sample_incomes, sample_users};
use crate::schemas::{AdminUser, EntryKind, Group, LedgerEntry};

/// Source of income and expense entries for the ledger views.
pub trait LedgerRepository {
    fn entries(&self, kind: EntryKind) -> Vec<LedgerEntry>;

    fn all_entries(&self) -> Vec<LedgerEntry> {
        let mut entries = self.entries(EntryKind::Income);
        entries.extend(self.entries(EntryKind::Expense));
        entries
    }
}

pub trait GroupRepository {
    fn groups(&self) -> Vec<Group>;
    fn find(&self, id: &str) -> Option<Group>;
    fn add(&self, group: Group);
}

/// Accounts managed from the admin screen. `update` and `delete` report
/// whether a user with that id existed.
pub trait UserRepository {
    fn users(&self) -> Vec<AdminUser>;
    fn create(&self, user: AdminUser);
    fn update(&self, user: AdminUser) -> bool;
    fn delete(&self, id: &str) -> bool;
}

#[derive(Debug, Default)]
pub struct InMemoryLedger {
    incomes: Vec<LedgerEntry>,
    expenses: Vec<LedgerEntry>,
}

impl InMemoryLedger {
    pub fn new(incomes: Vec<LedgerEntry>, expenses: Vec<LedgerEntry>) -> Self {
        Self { incomes, expenses }
    }

    pub fn with_sample_data() -> Self {
        Self::new(sample_incomes(), sample_expenses())
    }
}

impl LedgerRepository for InMemoryLedger {
    fn entries(&self, kind: EntryKind) -> Vec<LedgerEntry> {
        match kind {
            EntryKind::Income => self.incomes.clone(),
            EntryKind::Expense => self.expenses.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryGroups {
    groups: Mutex<Vec<Group>>,
}

impl InMemoryGroups {
    pub fn new(groups: Vec<Group>) -> Self {
        Self {
            groups: Mutex::new(groups),
        }
    }

    pub fn with_sample_data() -> Self {
        Self::new(sample_groups())
    }
}

impl GroupRepository for InMemoryGroups {
    fn groups(&self) -> Vec<Group> {
        self.groups.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn find(&self, id: &str) -> Option<Group> {
        self.groups
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|g| g.id == id)
            .cloned()
    }

    fn add(&self, group: Group) {
        tracing::info!(group = %group.id, name = %group.name, "group added");
        self.groups
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(group);
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<AdminUser>>,
}

impl InMemoryUsers {
    pub fn new(users: Vec<AdminUser>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn with_sample_data() -> Self {
        Self::new(sample_users())
    }
}

impl UserRepository for InMemoryUsers {
    fn users(&self) -> Vec<AdminUser> {
        self.users.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn create(&self, user: AdminUser) {
        tracing::info!(user = %user.id, email = %user.email, "user created");
        self.users
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(user);
    }

    fn update(&self, user: AdminUser) -> bool {
        let mut users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                tracing::info!(user = %user.id, "user updated");
                *slot = user;
                true
            }
            None => {
                tracing::warn!(user = %user.id, "no user to update");
                false
            }
        }
    }

    fn delete(&self, id: &str) -> bool {
        let mut users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        let before = users.len();
        users.retain(|u| u.id != id);
        let removed = users.len() != before;
        if removed {
            tracing::info!(user = %id, "user deleted");
        }
        removed
    }
}
