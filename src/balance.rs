use rust_decimal::Decimal;
use serde::Serialize;

use crate::schemas::{Group, GroupExpense, GroupMember, MemberName};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "position", content = "amount", rename_all = "lowercase")]
pub enum SettlementPosition {
    /// Paid more than their share; should receive the amount.
    Creditor(Decimal),
    /// Paid less than their share; should pay the amount.
    Debtor(Decimal),
    Settled,
}

impl SettlementPosition {
    pub fn from_balance(balance: Decimal) -> Self {
        if balance > Decimal::ZERO {
            SettlementPosition::Creditor(balance)
        } else if balance < Decimal::ZERO {
            SettlementPosition::Debtor(balance.abs())
        } else {
            SettlementPosition::Settled
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MemberBalance {
    pub member_id: String,
    pub name: MemberName,
    /// `paid - should_pay`
    pub balance: Decimal,
    pub position: SettlementPosition,
}

impl MemberBalance {
    pub fn of(member: &GroupMember) -> Self {
        let balance = member.paid - member.should_pay;
        Self {
            member_id: member.id.clone(),
            name: member.name.clone(),
            balance,
            position: SettlementPosition::from_balance(balance),
        }
    }
}

/// Net position of every member, in member order.
pub fn compute_balance_from_group(group: &Group) -> Vec<MemberBalance> {
    group.members.iter().map(MemberBalance::of).collect()
}

pub fn creditors(balances: &[MemberBalance]) -> impl Iterator<Item = &MemberBalance> {
    balances
        .iter()
        .filter(|b| matches!(b.position, SettlementPosition::Creditor(_)))
}

pub fn debtors(balances: &[MemberBalance]) -> impl Iterator<Item = &MemberBalance> {
    balances
        .iter()
        .filter(|b| matches!(b.position, SettlementPosition::Debtor(_)))
}

pub fn per_person_share(total_amount: Decimal, member_count: usize) -> Decimal {
    if member_count == 0 {
        return Decimal::ZERO;
    }
    total_amount / Decimal::from(member_count)
}

/// First expense with the largest amount, `None` when there are no expenses.
pub fn most_expensive_expense(expenses: &[GroupExpense]) -> Option<&GroupExpense> {
    expenses.iter().fold(None, |best, expense| match best {
        Some(current) if current.amount >= expense.amount => Some(current),
        _ => Some(expense),
    })
}

/// `sum(should_pay) - total_amount`. Groups are not rejected when this is
/// non-zero; the mismatch is only logged.
pub fn share_discrepancy(group: &Group) -> Decimal {
    let shares: Decimal = group.members.iter().map(|m| m.should_pay).sum();
    let discrepancy = shares - group.total_amount;
    if !discrepancy.is_zero() {
        tracing::warn!(
            group = %group.id,
            %shares,
            total = %group.total_amount,
            "member shares do not add up to the group total"
        );
    }
    discrepancy
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupStats {
    pub total_amount: Decimal,
    pub per_person_share: Decimal,
    pub most_expensive: Option<GroupExpense>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupSettlement {
    pub balances: Vec<MemberBalance>,
    pub stats: GroupStats,
    pub to_receive: Decimal,
    pub to_pay: Decimal,
}

pub fn settle_group(group: &Group) -> GroupSettlement {
    let balances = compute_balance_from_group(group);
    let to_receive = creditors(&balances).map(|b| b.balance).sum();
    let to_pay = debtors(&balances).map(|b| b.balance.abs()).sum();
    let stats = GroupStats {
        total_amount: group.total_amount,
        per_person_share: per_person_share(group.total_amount, group.members.len()),
        most_expensive: most_expensive_expense(&group.expenses).cloned(),
    };
    tracing::debug!(group = %group.id, members = balances.len(), "settled group");
    GroupSettlement {
        balances,
        stats,
        to_receive,
        to_pay,
    }
}

pub fn round_to_2_decimals(n: Decimal) -> Decimal {
    n.round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn member(id: &str, paid: Decimal, should_pay: Decimal) -> GroupMember {
        GroupMember {
            id: id.to_string(),
            name: format!("member {id}"),
            paid,
            should_pay,
        }
    }

    fn group(total: Decimal, members: Vec<GroupMember>) -> Group {
        Group {
            id: "g".to_string(),
            name: "g".to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2023, 5, 15).unwrap(),
            total_amount: total,
            members,
            expenses: vec![],
        }
    }

    #[test]
    fn zero_balance_is_settled() {
        assert_eq!(
            SettlementPosition::from_balance(Decimal::ZERO),
            SettlementPosition::Settled
        );
    }

    #[test]
    fn totals_owed_and_received_match_for_balanced_group() {
        let share = Decimal::new(10, 0);
        let g = group(
            Decimal::new(30, 0),
            vec![
                member("1", Decimal::new(25, 0), share),
                member("2", Decimal::new(5, 0), share),
                member("3", Decimal::ZERO, share),
            ],
        );
        let settlement = settle_group(&g);
        assert_eq!(settlement.to_receive, Decimal::new(15, 0));
        assert_eq!(settlement.to_pay, Decimal::new(15, 0));
        assert_eq!(settlement.stats.per_person_share, share);
    }

    #[test]
    fn discrepancy_reports_unbalanced_shares() {
        let g = group(
            Decimal::new(43565, 2),
            vec![
                member("1", Decimal::ZERO, Decimal::new(14522, 2)),
                member("2", Decimal::ZERO, Decimal::new(14522, 2)),
                member("3", Decimal::ZERO, Decimal::new(14522, 2)),
            ],
        );
        assert_eq!(share_discrepancy(&g), Decimal::new(1, 2));
    }

    #[test]
    fn rounding_keeps_two_places() {
        assert_eq!(
            round_to_2_decimals(Decimal::new(1452166667, 7)),
            Decimal::new(14522, 2)
        );
    }
}
