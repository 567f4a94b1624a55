//! Profit/loss aggregation.
//!
//! Pure set-union-and-sum over transaction slices: revenue and expenses are
//! summed per category, a category appears in the output if it was seen on
//! either side, and transactions without a category land in the
//! uncategorized bucket (`category: None`).

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Which side of the ledger a transaction lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyFlow {
    /// Incoming money (PAYMENT transactions).
    Revenue,
    /// Outgoing money (PAYOUT transactions).
    Expense,
}

/// One transaction, reduced to what the aggregation needs.
#[derive(Debug, Clone)]
pub struct TransactionSlice {
    /// Linked expense category name, if any.
    pub category: Option<String>,
    /// Revenue or expense.
    pub flow: MoneyFlow,
    /// Monetary amount, non-negative.
    pub amount: Decimal,
}

/// Per-category revenue and expense totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    /// Category name; `None` is the uncategorized bucket.
    pub category: Option<String>,
    /// Total revenue in the period.
    pub revenue: Decimal,
    /// Total expenses in the period.
    pub expenses: Decimal,
}

/// Whole-period totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfitLossSummary {
    /// Sum of all revenue.
    pub total_revenue: Decimal,
    /// Sum of all expenses.
    pub total_expenses: Decimal,
    /// Revenue minus expenses.
    pub net_profit: Decimal,
}

/// A complete profit/loss report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfitLossReport {
    /// Per-category rows, named categories first in name order,
    /// the uncategorized bucket last.
    pub categories: Vec<CategoryBreakdown>,
    /// Whole-period totals.
    pub summary: ProfitLossSummary,
}

/// Aggregates transaction slices into a profit/loss report.
#[must_use]
pub fn profit_loss(rows: &[TransactionSlice]) -> ProfitLossReport {
    // BTreeMap keeps named categories in name order; the None bucket is
    // pulled out and appended last.
    let mut named: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    let mut uncategorized: Option<(Decimal, Decimal)> = None;

    let mut total_revenue = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;

    for row in rows {
        let bucket = match &row.category {
            Some(name) => named.entry(name.clone()).or_default(),
            None => uncategorized.get_or_insert((Decimal::ZERO, Decimal::ZERO)),
        };

        match row.flow {
            MoneyFlow::Revenue => {
                bucket.0 += row.amount;
                total_revenue += row.amount;
            }
            MoneyFlow::Expense => {
                bucket.1 += row.amount;
                total_expenses += row.amount;
            }
        }
    }

    let mut categories: Vec<CategoryBreakdown> = named
        .into_iter()
        .map(|(category, (revenue, expenses))| CategoryBreakdown {
            category: Some(category),
            revenue,
            expenses,
        })
        .collect();

    if let Some((revenue, expenses)) = uncategorized {
        categories.push(CategoryBreakdown {
            category: None,
            revenue,
            expenses,
        });
    }

    ProfitLossReport {
        categories,
        summary: ProfitLossSummary {
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn slice(category: Option<&str>, flow: MoneyFlow, amount: Decimal) -> TransactionSlice {
        TransactionSlice {
            category: category.map(String::from),
            flow,
            amount,
        }
    }

    #[test]
    fn two_categories_with_mixed_flows() {
        let rows = vec![
            slice(Some("catA"), MoneyFlow::Revenue, dec!(100)),
            slice(Some("catA"), MoneyFlow::Expense, dec!(40)),
            slice(Some("catB"), MoneyFlow::Revenue, dec!(50)),
        ];

        let report = profit_loss(&rows);

        assert_eq!(
            report.categories,
            vec![
                CategoryBreakdown {
                    category: Some("catA".into()),
                    revenue: dec!(100),
                    expenses: dec!(40),
                },
                CategoryBreakdown {
                    category: Some("catB".into()),
                    revenue: dec!(50),
                    expenses: dec!(0),
                },
            ]
        );
        assert_eq!(
            report.summary,
            ProfitLossSummary {
                total_revenue: dec!(150),
                total_expenses: dec!(40),
                net_profit: dec!(110),
            }
        );
    }

    #[test]
    fn uncategorized_bucket_comes_last() {
        let rows = vec![
            slice(None, MoneyFlow::Expense, dec!(5)),
            slice(Some("Rent"), MoneyFlow::Expense, dec!(900)),
        ];

        let report = profit_loss(&rows);

        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.categories[0].category.as_deref(), Some("Rent"));
        assert_eq!(report.categories[1].category, None);
        assert_eq!(report.categories[1].expenses, dec!(5));
    }

    #[test]
    fn expense_only_category_still_appears() {
        let rows = vec![slice(Some("Travel"), MoneyFlow::Expense, dec!(12.50))];

        let report = profit_loss(&rows);

        assert_eq!(report.categories[0].revenue, dec!(0));
        assert_eq!(report.categories[0].expenses, dec!(12.50));
        assert_eq!(report.summary.net_profit, dec!(-12.50));
    }

    #[test]
    fn empty_input_empty_report() {
        let report = profit_loss(&[]);
        assert!(report.categories.is_empty());
        assert_eq!(report.summary.net_profit, dec!(0));
    }

    fn slice_strategy() -> impl Strategy<Value = TransactionSlice> {
        (
            proptest::option::of("[a-e]{1,3}"),
            prop_oneof![Just(MoneyFlow::Revenue), Just(MoneyFlow::Expense)],
            0i64..1_000_000i64,
        )
            .prop_map(|(category, flow, cents)| TransactionSlice {
                category,
                flow,
                amount: Decimal::new(cents, 2),
            })
    }

    proptest! {
        /// Summary totals always equal the column sums of the rows.
        #[test]
        fn summary_matches_rows(rows in proptest::collection::vec(slice_strategy(), 0..50)) {
            let report = profit_loss(&rows);

            let row_revenue: Decimal = report.categories.iter().map(|c| c.revenue).sum();
            let row_expenses: Decimal = report.categories.iter().map(|c| c.expenses).sum();

            prop_assert_eq!(report.summary.total_revenue, row_revenue);
            prop_assert_eq!(report.summary.total_expenses, row_expenses);
            prop_assert_eq!(
                report.summary.net_profit,
                report.summary.total_revenue - report.summary.total_expenses
            );
        }

        /// Every input category shows up exactly once in the output.
        #[test]
        fn categories_are_a_set(rows in proptest::collection::vec(slice_strategy(), 0..50)) {
            let report = profit_loss(&rows);

            let mut seen = std::collections::HashSet::new();
            for row in &report.categories {
                prop_assert!(seen.insert(row.category.clone()), "duplicate category row");
            }
        }
    }
}
