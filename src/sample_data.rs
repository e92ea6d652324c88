use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::schemas::{
    AdminUser, EntryKind, Group, GroupExpense, GroupMember, LedgerEntry, UserStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn april(
    kind: EntryKind,
    id: &str,
    day: u32,
    counterparty: &str,
    amount: Decimal,
    category: &str,
    description: &str,
) -> LedgerEntry {
    LedgerEntry::new(id, kind, date(2023, 4, day), counterparty, amount, category)
        .with_description(description)
}

pub fn sample_incomes() -> Vec<LedgerEntry> {
    use EntryKind::Income;
    vec![
        april(
            Income,
            "1",
            1,
            "Monthly Salary",
            cents(3_500_00),
            "Salary",
            "Regular salary payment",
        ),
        april(
            Income,
            "2",
            5,
            "Freelance Project",
            cents(500_00),
            "Freelance",
            "Website design for client",
        ),
        april(
            Income,
            "3",
            10,
            "Dividend Payment",
            cents(120_00),
            "Investments",
            "Quarterly dividend from investments",
        ),
        april(Income, "4", 15, "Apartment Rent", cents(800_00), "Rental", "Rent from tenant"),
        april(
            Income,
            "5",
            20,
            "Online Store",
            cents(350_00),
            "Side Business",
            "Monthly revenue from online store",
        ),
    ]
}

pub fn sample_expenses() -> Vec<LedgerEntry> {
    use EntryKind::Expense;
    vec![
        april(Expense, "1", 3, "Grocery Store", cents(85_40), "Food", "Weekly groceries"),
        april(Expense, "2", 5, "Rent", cents(1_200_00), "Rent", "Monthly apartment rent"),
        april(
            Expense,
            "3",
            10,
            "Electric Company",
            cents(75_30),
            "Utilities",
            "Monthly electricity bill",
        ),
        april(
            Expense,
            "4",
            15,
            "Movie Theater",
            cents(35_50),
            "Entertainment",
            "Movie tickets and snacks",
        ),
        april(Expense, "5", 18, "Gas Station", cents(45_80), "Transport", "Car fuel"),
    ]
}

fn member(id: &str, name: &str, paid: Decimal, should_pay: Decimal) -> GroupMember {
    GroupMember {
        id: id.to_string(),
        name: name.to_string(),
        paid,
        should_pay,
    }
}

fn expense(
    id: &str,
    description: &str,
    amount: Decimal,
    paid_by: &str,
    on: NaiveDate,
) -> GroupExpense {
    GroupExpense {
        id: id.to_string(),
        description: description.to_string(),
        amount,
        paid_by: paid_by.to_string(),
        date: on,
    }
}

pub fn sample_groups() -> Vec<Group> {
    vec![
        Group {
            id: "1".to_string(),
            name: "Hiking Trip".to_string(),
            description: "Weekend hiking trip to the mountains".to_string(),
            date: date(2023, 5, 15),
            total_amount: cents(435_65),
            members: vec![
                member("1", "John Doe", cents(200_00), cents(145_22)),
                member("2", "Jane Smith", cents(150_00), cents(145_22)),
                member("3", "Robert Johnson", cents(85_65), cents(145_22)),
            ],
            expenses: vec![
                expense("1", "Food supplies", cents(120_00), "John Doe", date(2023, 5, 10)),
                expense("2", "Transportation", cents(150_00), "Jane Smith", date(2023, 5, 12)),
                expense("3", "Equipment rental", cents(80_00), "John Doe", date(2023, 5, 14)),
                expense("4", "Cabin booking", cents(85_65), "Robert Johnson", date(2023, 5, 8)),
            ],
        },
        Group {
            id: "2".to_string(),
            name: "Birthday Party".to_string(),
            description: "Sarah's surprise birthday party".to_string(),
            date: date(2023, 6, 10),
            total_amount: cents(320_45),
            members: vec![
                member("1", "John Doe", cents(120_00), cents(80_11)),
                member("2", "Jane Smith", cents(80_00), cents(80_11)),
                member("3", "Robert Johnson", cents(60_45), cents(80_11)),
                member("4", "Emily Davis", cents(60_00), cents(80_11)),
            ],
            expenses: vec![
                expense("1", "Cake and desserts", cents(80_00), "Jane Smith", date(2023, 6, 8)),
                expense("2", "Decorations", cents(60_00), "Emily Davis", date(2023, 6, 7)),
                expense("3", "Food and drinks", cents(120_00), "John Doe", date(2023, 6, 9)),
                expense("4", "Gift", cents(60_45), "Robert Johnson", date(2023, 6, 5)),
            ],
        },
    ]
}

fn user(
    id: &str,
    name: &str,
    email: &str,
    role: &str,
    status: UserStatus,
    last_active: NaiveDate,
    transactions: u32,
) -> AdminUser {
    AdminUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status,
        last_active,
        transactions,
    }
}

pub fn sample_users() -> Vec<AdminUser> {
    use UserStatus::{Active, Inactive, Pending};
    vec![
        user("1", "John Doe", "john@example.com", "user", Active, date(2023, 4, 20), 32),
        user("2", "Jane Smith", "jane@example.com", "user", Active, date(2023, 4, 18), 48),
        user("3", "Admin User", "admin@example.com", "admin", Active, date(2023, 4, 21), 5),
        user("4", "Tom Wilson", "tom@example.com", "user", Pending, date(2023, 4, 15), 0),
        user("5", "Sarah Johnson", "sarah@example.com", "user", Inactive, date(2023, 3, 10), 12),
    ]
}
