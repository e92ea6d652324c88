use crate::balance::{MemberBalance, SettlementPosition};
use crate::schemas::MemberName;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Clone, Debug)]
struct PersonalBalance {
    name: MemberName,
    balance: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Exchange {
    pub payer: MemberName,
    pub receiver: MemberName,
    pub amount: Decimal,
}

// Always settles the largest open debt against the largest open credit
fn get_simplified_exchanges(
    mut payers: Vec<PersonalBalance>,
    mut receivers: Vec<PersonalBalance>,
) -> Vec<Exchange> {
    payers.sort_by(|a, b| a.balance.cmp(&b.balance));
    receivers.sort_by(|a, b| a.balance.cmp(&b.balance));

    let mut exchanges: Vec<Exchange> = Vec::new();

    while let (Some(payer), Some(receiver)) = (payers.last_mut(), receivers.last_mut()) {
        let mut exchange = Exchange {
            payer: payer.name.clone(),
            receiver: receiver.name.clone(),
            amount: Decimal::ZERO,
        };
        if receiver.balance == payer.balance {
            exchange.amount = payer.balance;
            payers.pop();
            receivers.pop();
        } else if receiver.balance > payer.balance {
            exchange.amount = payer.balance;
            receiver.balance -= payer.balance;
            payers.pop();
        } else {
            exchange.amount = receiver.balance;
            payer.balance -= receiver.balance;
            receivers.pop();
        }
        if !exchange.amount.is_zero() {
            exchanges.push(exchange);
        }
    }
    exchanges
}

/// Proposes transfers that would bring every member back to zero.
///
/// Amounts are exact; round them only for display.
///
/// Only a suggestion built on top of the net positions: the balances
/// themselves are left untouched. When debts and credits do not cancel out
/// (shares that do not add up to the group total) the remainder is left
/// unassigned.
pub fn suggest_exchanges(balances: &[MemberBalance]) -> Vec<Exchange> {
    let mut payers = Vec::new();
    let mut receivers = Vec::new();

    for member in balances {
        match member.position {
            SettlementPosition::Debtor(amount) => payers.push(PersonalBalance {
                name: member.name.clone(),
                balance: amount,
            }),
            SettlementPosition::Creditor(amount) => receivers.push(PersonalBalance {
                name: member.name.clone(),
                balance: amount,
            }),
            SettlementPosition::Settled => {}
        }
    }

    let exchanges = get_simplified_exchanges(payers, receivers);
    tracing::debug!(exchanges = exchanges.len(), "suggested exchanges");
    exchanges
}
