//! Search and filters for the admin user list.

use crate::schemas::{AdminUser, UserStatus};

/// Filter values from the user-management toolbar. The default matches
/// every user; an empty search or role means "any".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
    pub role: Option<String>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn searching(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Case-insensitive substring search over name or email, then exact
    /// role and status.
    pub fn matches(&self, user: &AdminUser) -> bool {
        let term = self.search.to_lowercase();
        let found = term.is_empty()
            || user.name.to_lowercase().contains(&term)
            || user.email.to_lowercase().contains(&term);
        if !found {
            return false;
        }
        let role_ok = match self.role.as_deref() {
            None | Some("") => true,
            Some(role) => user.role == role,
        };
        role_ok && self.status.map_or(true, |status| user.status == status)
    }
}

pub fn filter_users(users: &[AdminUser], filter: &UserFilter) -> Vec<AdminUser> {
    let matched: Vec<AdminUser> = users
        .iter()
        .filter(|user| filter.matches(user))
        .cloned()
        .collect();
    tracing::debug!(users = users.len(), matched = matched.len(), "filtered users");
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::sample_users;
    use rstest::rstest;

    fn ids(filter: UserFilter) -> Vec<String> {
        filter_users(&sample_users(), &filter)
            .into_iter()
            .map(|user| user.id)
            .collect()
    }

    #[rstest]
    #[case::no_filter(UserFilter::default(), &["1", "2", "3", "4", "5"])]
    #[case::name_any_case(UserFilter::default().searching("JOHN"), &["1", "5"])]
    #[case::email_fragment(UserFilter::default().searching("tom@"), &["4"])]
    #[case::search_misses(UserFilter::default().searching("zoe"), &[])]
    #[case::admins(UserFilter::default().with_role("admin"), &["3"])]
    #[case::empty_role(UserFilter::default().with_role(""), &["1", "2", "3", "4", "5"])]
    #[case::pending(UserFilter::default().with_status(UserStatus::Pending), &["4"])]
    #[case::inactive(UserFilter::default().with_status(UserStatus::Inactive), &["5"])]
    #[case::combined(
        UserFilter::default()
            .searching("example.com")
            .with_role("user")
            .with_status(UserStatus::Active),
        &["1", "2"]
    )]
    fn filters_sample_users(#[case] filter: UserFilter, #[case] expected: &[&str]) {
        assert_eq!(ids(filter), expected);
    }

    #[test]
    fn role_match_is_exact() {
        assert!(ids(UserFilter::default().with_role("Admin")).is_empty());
    }
}
