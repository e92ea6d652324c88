use std::sync::Arc;

use fintrack::balance::{round_to_2_decimals, settle_group, SettlementPosition};
use fintrack::config::AppConfig;
use fintrack::exchange::suggest_exchanges;
use fintrack::ledger::{
    category_breakdown, daily_report, filter_entries, monthly_report, summarize, LedgerFilter,
};
use fintrack::loader::load_after;
use fintrack::repository::{
    GroupRepository, InMemoryGroups, InMemoryLedger, InMemoryUsers, LedgerRepository,
    UserRepository,
};
use fintrack::schemas::{EntryKind, Group, LedgerEntry};
use fintrack::session::{JsonFileStore, SessionStore};
use fintrack::users::{filter_users, UserFilter};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn format_currency(amount: Decimal, currency: &str) -> String {
    let symbol = match currency {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => "",
    };
    let rounded = round_to_2_decimals(amount.abs());
    let sign = if amount.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let raw = format!("{rounded:.2}");
    let (whole, fraction) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if symbol.is_empty() {
        format!("{sign}{grouped}.{fraction} {currency}")
    } else {
        format!("{sign}{symbol}{grouped}.{fraction}")
    }
}

fn print_entries(title: &str, entries: &[LedgerEntry], currency: &str) {
    let filtered = filter_entries(entries, &LedgerFilter::default());
    println!("\n== {} (total {}) ==", title, format_currency(filtered.total, currency));
    for entry in &filtered.matched {
        println!(
            "{} | {:<18} | {:<14} | {:>12}",
            entry.date.format("%Y-%m-%d"),
            entry.counterparty,
            entry.category,
            format_currency(entry.amount, currency),
        );
    }
    for share in category_breakdown(&filtered.matched) {
        println!("  {:<14} {:>5.1}%", share.category, share.percent);
    }
}

fn print_group(group: &Group, currency: &str) {
    let settlement = settle_group(group);
    println!("\n== {} ({}) ==", group.name, group.description);
    for member in &settlement.balances {
        let line = match member.position {
            SettlementPosition::Creditor(amount) => {
                format!("should receive {}", format_currency(amount, currency))
            }
            SettlementPosition::Debtor(amount) => {
                format!("should pay {}", format_currency(amount, currency))
            }
            SettlementPosition::Settled => "settled up".to_string(),
        };
        println!("{:<16} {}", member.name, line);
    }
    println!(
        "total {} | per person {}",
        format_currency(settlement.stats.total_amount, currency),
        format_currency(settlement.stats.per_person_share, currency),
    );
    match &settlement.stats.most_expensive {
        Some(expense) => println!(
            "most expensive: {} ({})",
            expense.description,
            format_currency(expense.amount, currency)
        ),
        None => println!("most expensive: no expenses yet"),
    }
    for exchange in suggest_exchanges(&settlement.balances) {
        println!(
            "  {} -> {}: {}",
            exchange.payer,
            exchange.receiver,
            format_currency(exchange.amount, currency)
        );
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };
    tracing::info!(session = %config.session_path.display(), "Using session store");

    let session = SessionStore::new(JsonFileStore::new(&config.session_path));
    let auth = session.load();
    if !auth.can_access_protected() {
        println!("Not signed in. Log in to view your dashboard.");
        return;
    }
    let user = auth.display_user();
    println!("Welcome back, {} <{}>", user.name, user.email);

    let ledger = InMemoryLedger::with_sample_data();
    let groups = Arc::new(InMemoryGroups::with_sample_data());

    let (tx, rx) = tokio::sync::oneshot::channel();
    let source = groups.clone();
    let handle = load_after(config.load_delay, move || source.groups(), move |loaded| {
        let _ = tx.send(loaded);
    });
    if !handle.finished().await {
        tracing::warn!("Group data was not delivered");
        return;
    }
    let loaded_groups = rx.await.unwrap_or_default();

    let currency = config.currency.as_str();
    let entries = ledger.all_entries();
    let summary = summarize(&entries);
    println!("\n== Dashboard ==");
    println!("Total income:   {}", format_currency(summary.income, currency));
    println!("Total expenses: {}", format_currency(summary.expenses, currency));
    println!("Balance:        {}", format_currency(summary.balance, currency));

    print_entries("Income", &ledger.entries(EntryKind::Income), currency);
    print_entries("Expenses", &ledger.entries(EntryKind::Expense), currency);

    for group in &loaded_groups {
        print_group(group, currency);
    }

    let first = entries.iter().map(|e| e.date).min();
    let last = entries.iter().map(|e| e.date).max();
    if let (Some(first), Some(last)) = (first, last) {
        use chrono::Datelike;
        let report = monthly_report(
            &entries,
            (first.year(), first.month()),
            (last.year(), last.month()),
        );
        println!("\n== Monthly report ==");
        for month in &report.months {
            println!(
                "{}-{:02} | income {:>12} | expense {:>12} | savings {:>12}",
                month.year,
                month.month,
                format_currency(month.income, currency),
                format_currency(month.expense, currency),
                format_currency(month.savings, currency),
            );
        }

        println!("\n== Daily activity ==");
        for day in daily_report(&entries, first, last) {
            if day.income.is_zero() && day.expense.is_zero() {
                continue;
            }
            println!(
                "{} | income {:>12} | expense {:>12}",
                day.date,
                format_currency(day.income, currency),
                format_currency(day.expense, currency),
            );
        }
    }

    if user.is_admin() {
        let users = InMemoryUsers::with_sample_data();
        println!("\n== Users ==");
        for account in filter_users(&users.users(), &UserFilter::default()) {
            println!(
                "{:<16} {:<20} {:<6} {:<8} last active {} ({} transactions)",
                account.name,
                account.email,
                account.role,
                account.status.as_str(),
                account.last_active,
                account.transactions,
            );
        }
    }
}
