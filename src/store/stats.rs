//! Budget summary over the transaction list

use crate::models::{Money, Transaction};

/// Label used when there are no transactions
pub const NO_CATEGORY: &str = "None";

/// Summary shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStats {
    /// Sum of all amounts (non-positive)
    pub total_expenses: Money,
    pub monthly_budget: Money,
    /// `monthly_budget + total_expenses`
    pub remaining: Money,
    pub top_category: String,
    pub transaction_count: usize,
}

/// How close spending is to the budget limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetAlert {
    /// Spending is over the limit by `by`
    Exceeded { by: Money },
    /// Less than 10% of the limit remains
    Low {
        remaining: Money,
        percent: Option<f64>,
    },
    Normal {
        remaining: Money,
        percent: Option<f64>,
    },
}

impl BudgetStats {
    pub fn calculate(transactions: &[Transaction], monthly_budget: Money) -> Self {
        let total_expenses: Money = transactions.iter().map(|t| t.amount).sum();

        // Aggregation order is sequence order, so the first category to reach
        // the maximum wins a tie.
        let mut totals: Vec<(&str, Money)> = Vec::new();
        for txn in transactions {
            match totals.iter_mut().find(|(name, _)| *name == txn.category) {
                Some((_, total)) => *total += txn.amount.abs(),
                None => totals.push((txn.category.as_str(), txn.amount.abs())),
            }
        }

        let mut top: Option<(&str, Money)> = None;
        for (name, total) in totals {
            if top.map_or(true, |(_, best)| total > best) {
                top = Some((name, total));
            }
        }

        Self {
            total_expenses,
            monthly_budget,
            remaining: monthly_budget + total_expenses,
            top_category: top
                .map(|(name, _)| name.to_string())
                .unwrap_or_else(|| NO_CATEGORY.to_string()),
            transaction_count: transactions.len(),
        }
    }

    /// Share of the budget still available, in percent
    pub fn remaining_percent(&self) -> Option<f64> {
        if self.monthly_budget.is_zero() {
            None
        } else {
            Some(self.remaining.to_f64() / self.monthly_budget.to_f64() * 100.0)
        }
    }

    pub fn alert(&self) -> BudgetAlert {
        let percent = self.remaining_percent();
        if self.remaining.is_negative() {
            BudgetAlert::Exceeded {
                by: self.remaining.abs(),
            }
        } else if self.remaining.cents().saturating_mul(10) < self.monthly_budget.cents() {
            BudgetAlert::Low {
                remaining: self.remaining,
                percent,
            }
        } else {
            BudgetAlert::Normal {
                remaining: self.remaining,
                percent,
            }
        }
    }
}
