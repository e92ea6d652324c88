use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::CategoryShare;
use crate::schemas::Group;

/// One slice of a proportional chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: Decimal,
}

pub fn expense_slices(group: &Group) -> Vec<ChartSlice> {
    group
        .expenses
        .iter()
        .map(|e| ChartSlice {
            label: e.description.clone(),
            value: e.amount,
        })
        .collect()
}

pub fn member_slices(group: &Group) -> Vec<ChartSlice> {
    group
        .members
        .iter()
        .map(|m| ChartSlice {
            label: m.name.clone(),
            value: m.paid,
        })
        .collect()
}

pub fn category_slices(shares: &[CategoryShare]) -> Vec<ChartSlice> {
    shares
        .iter()
        .map(|s| ChartSlice {
            label: s.category.clone(),
            value: s.total,
        })
        .collect()
}
