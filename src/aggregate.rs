// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived values computed from a transaction history.
//!
//! Every function here is pure: same input slice, same output. Sums that do
//! not fit in a `Decimal` come back as [`FinanceError::Overflow`].

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Reminder, SavingGoal, Transaction, TransactionKind};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

fn add(acc: &mut Decimal, amount: Decimal, what: &str) -> FinanceResult<()> {
    *acc = acc
        .checked_add(amount)
        .ok_or_else(|| FinanceError::Overflow(what.to_string()))?;
    Ok(())
}

pub fn totals(txs: &[Transaction]) -> FinanceResult<(Decimal, Decimal)> {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in txs {
        match t.kind {
            TransactionKind::Income => add(&mut income, t.amount, "total income")?,
            TransactionKind::Expense => add(&mut expense, t.amount, "total expense")?,
        }
    }
    Ok((income, expense))
}

/// `initial + Σincome − Σexpense`
pub fn balance(initial: Decimal, txs: &[Transaction]) -> FinanceResult<Decimal> {
    let (income, expense) = totals(txs)?;
    initial
        .checked_add(income)
        .and_then(|v| v.checked_sub(expense))
        .ok_or_else(|| FinanceError::Overflow("balance".into()))
}

/// Expense total per category. Categories whose total is zero are left out.
pub fn category_summary(txs: &[Transaction]) -> FinanceResult<BTreeMap<String, Decimal>> {
    let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in txs.iter().filter(|t| t.kind == TransactionKind::Expense) {
        add(
            agg.entry(t.category.clone()).or_insert(Decimal::ZERO),
            t.amount,
            "category total",
        )?;
    }
    agg.retain(|_, v| !v.is_zero());
    Ok(agg)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Expense per calendar day, oldest first. Days without expense are omitted.
pub fn daily_expense_trend(txs: &[Transaction]) -> FinanceResult<Vec<DailyTotal>> {
    let mut agg: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for t in txs.iter().filter(|t| t.kind == TransactionKind::Expense) {
        add(agg.entry(t.date).or_insert(Decimal::ZERO), t.amount, "daily total")?;
    }
    Ok(agg
        .into_iter()
        .map(|(date, amount)| DailyTotal { date, amount })
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Month,
    Quarter,
    Year,
}

impl Period {
    /// Sortable bucket label: `2025-03`, `2025-Q1`, `2025`.
    pub fn bucket(&self, date: NaiveDate) -> String {
        match self {
            Self::Month => format!("{:04}-{:02}", date.year(), date.month()),
            Self::Quarter => format!("{:04}-Q{}", date.year(), (date.month() - 1) / 3 + 1),
            Self::Year => format!("{:04}", date.year()),
        }
    }
}

impl FromStr for Period {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            other => Err(FinanceError::InvalidPeriod(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodTotals {
    pub bucket: String,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Income and expense per bucket, oldest first. A kind with no activity in a
/// bucket shows as zero.
pub fn period_trend(txs: &[Transaction], period: Period) -> FinanceResult<Vec<PeriodTotals>> {
    let mut agg: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for t in txs {
        let entry = agg
            .entry(period.bucket(t.date))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.kind {
            TransactionKind::Income => add(&mut entry.0, t.amount, "period income")?,
            TransactionKind::Expense => add(&mut entry.1, t.amount, "period expense")?,
        }
    }
    Ok(agg
        .into_iter()
        .map(|(bucket, (income, expense))| PeriodTotals {
            bucket,
            income,
            expense,
        })
        .collect())
}

/// `part / whole × 100`, or `None` when the quotient does not fit.
fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetProgress {
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    /// `None` when the limit is zero or the ratio is too large to represent.
    pub percent: Option<Decimal>,
    pub exceeded: bool,
}

/// Spending against each budget. Exceeded means strictly over the limit.
pub fn budget_progress(
    budgets: &BTreeMap<String, Decimal>,
    summary: &BTreeMap<String, Decimal>,
) -> Vec<BudgetProgress> {
    budgets
        .iter()
        .map(|(category, limit)| {
            let spent = summary.get(category).copied().unwrap_or(Decimal::ZERO);
            let percent = if limit.is_zero() {
                None
            } else {
                percent_of(spent, *limit)
            };
            BudgetProgress {
                category: category.clone(),
                limit: *limit,
                spent,
                percent,
                exceeded: spent > *limit,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub goal: SavingGoal,
    pub balance: Decimal,
    pub percent: Option<Decimal>,
    pub achieved: bool,
}

/// Every goal is measured against the same balance.
pub fn goal_progress(balance: Decimal, goals: &[SavingGoal]) -> Vec<GoalProgress> {
    goals
        .iter()
        .map(|g| {
            let percent = if g.target_amount.is_zero() {
                None
            } else {
                // Overflow only happens far past the target.
                let reached = percent_of(balance.max(Decimal::ZERO), g.target_amount)
                    .unwrap_or(Decimal::ONE_HUNDRED);
                Some(reached.min(Decimal::ONE_HUNDRED))
            };
            GoalProgress {
                goal: g.clone(),
                balance,
                percent,
                achieved: balance >= g.target_amount,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "days", rename_all = "snake_case")]
pub enum ReminderStatus {
    Overdue(i64),
    DueToday,
    Upcoming(i64),
}

pub fn reminder_status(reminder: &Reminder, today: NaiveDate) -> ReminderStatus {
    let days = (reminder.due_date - today).num_days();
    match days {
        0 => ReminderStatus::DueToday,
        d if d < 0 => ReminderStatus::Overdue(-d),
        d => ReminderStatus::Upcoming(d),
    }
}
