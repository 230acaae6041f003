// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::i18n::{Language, Translator};
use fintrack::models::TransactionKind;

#[test]
fn active_language_wins() {
    let vi = Translator::new(Language::Vi);
    assert_eq!(vi.t("reset.done"), "Đã xóa tất cả dữ liệu!");
    assert_eq!(vi.kind(TransactionKind::Expense), "Chi");
    let en = Translator::default();
    assert_eq!(en.kind(TransactionKind::Income), "Income");
}

#[test]
fn falls_back_to_english_then_key() {
    let vi = Translator::new(Language::Vi);
    // Only the English table has this header.
    assert_eq!(vi.t("hdr.id"), "ID");
    assert_eq!(vi.t("no.such.key"), "no.such.key");
}

#[test]
fn positional_arguments_are_substituted() {
    let en = Translator::new(Language::En);
    assert_eq!(
        en.tf("budget.set", &[&"Food", &"200.00"]),
        "Budget for Food set to 200.00"
    );
    assert_eq!(en.tf("status.upcoming", &[&3]), "Due in 3 days");
}

#[test]
fn braces_inside_arguments_are_kept() {
    let en = Translator::new(Language::En);
    assert_eq!(
        en.tf("budget.set", &[&"{1}", &"5.00"]),
        "Budget for {1} set to 5.00"
    );
    // A placeholder without a matching argument stays literal.
    assert_eq!(en.tf("budget.set", &[&"Food"]), "Budget for Food set to {1}");
}

#[test]
fn language_codes() {
    assert_eq!("VI".parse::<Language>().unwrap(), Language::Vi);
    assert_eq!(Language::En.to_string(), "en");
    assert!("fr".parse::<Language>().is_err());
}
