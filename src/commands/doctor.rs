// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::state::AppState;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, state: &AppState) -> Result<()> {
    let rows = find_issues(conn)?;
    let t = &state.translator;
    if rows.is_empty() {
        println!("✅ {}", t.t("doctor.ok"));
    } else {
        println!(
            "{}",
            pretty_table(&[t.t("hdr.issue"), t.t("hdr.detail")], rows)
        );
    }
    Ok(())
}

/// The store never enforces category membership; this lists where it drifted.
pub fn find_issues(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    // 1) Transactions filed under a category not registered for their kind
    let mut stmt = conn.prepare(
        "SELECT t.kind, t.category, COUNT(*) FROM transactions t
         LEFT JOIN categories c ON c.kind=t.kind AND c.name=t.category
         WHERE c.id IS NULL
         GROUP BY t.kind, t.category ORDER BY t.kind, t.category",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let kind: String = r.get(0)?;
        let cat: String = r.get(1)?;
        let n: i64 = r.get(2)?;
        rows.push(vec![
            "txn_category_unregistered".into(),
            format!("{} '{}' ({} transactions)", kind, cat, n),
        ]);
    }

    // 2) Budgets on something that is not an expense category
    let mut stmt2 = conn.prepare(
        "SELECT b.category FROM budgets b
         LEFT JOIN categories c ON c.kind='expense' AND c.name=b.category
         WHERE c.id IS NULL ORDER BY b.category",
    )?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let cat: String = r.get(0)?;
        rows.push(vec!["budget_category_unregistered".into(), cat]);
    }

    Ok(rows)
}
