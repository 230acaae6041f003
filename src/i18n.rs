// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Display text lookup. A key resolves in the active language, then in
//! English, then falls back to the key itself.

use crate::error::FinanceError;
use crate::models::TransactionKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    pub const DEFAULT: Language = Language::En;

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }

    /// Seed names for an empty category list of the given kind.
    pub fn default_categories(&self, kind: TransactionKind) -> &'static [&'static str] {
        match (self, kind) {
            (Self::En, TransactionKind::Income) => {
                &["Salary", "Bonus", "Investment", "Gift", "Other income"]
            }
            (Self::En, TransactionKind::Expense) => &[
                "Food",
                "Transport",
                "Shopping",
                "Entertainment",
                "Bills",
                "Health",
                "Education",
                "Other",
            ],
            (Self::Vi, TransactionKind::Income) => {
                &["Lương", "Thưởng", "Đầu tư", "Quà tặng", "Thu nhập khác"]
            }
            (Self::Vi, TransactionKind::Expense) => &[
                "Ăn uống",
                "Di chuyển",
                "Mua sắm",
                "Giải trí",
                "Hóa đơn",
                "Y tế",
                "Giáo dục",
                "Khác",
            ],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "vi" => Ok(Self::Vi),
            other => Err(FinanceError::UnsupportedLanguage(other.to_string())),
        }
    }
}

static EN: &[(&str, &str)] = &[
    ("init.done", "Database initialized at {0}"),
    ("tx.added", "Recorded {0} {1} in '{2}' on {3}"),
    ("tx.none", "No transactions yet. Add one with `fintrack tx add`."),
    ("balance.current", "Current balance: {0}"),
    ("balance.initial_set", "Initial balance set to {0}"),
    ("category.added", "Added {0} category '{1}'"),
    ("category.exists", "{0} category '{1}' already exists"),
    ("budget.set", "Budget for {0} set to {1}"),
    ("reminder.added", "Added reminder '{0}' due {1}"),
    ("goal.added", "Added saving goal '{0}': {1} by {2}"),
    ("goal.shared_note", "All goals are measured against the same current balance."),
    ("reset.prompt", "Delete ALL data? This cannot be undone. Type 'yes' to confirm:"),
    ("reset.done", "All data deleted"),
    ("import.prompt", "Importing replaces ALL existing data. Type 'yes' to confirm:"),
    ("import.done", "Imported backup from {0}: {1} transactions, {2} budgets, {3} reminders, {4} saving goals"),
    ("import.csv_done", "Imported {0} transactions from {1}"),
    ("action.cancelled", "Cancelled, nothing was changed"),
    ("export.done", "Exported {0} to {1}"),
    ("config.language_set", "Language set to {0}"),
    ("config.currency_set", "Currency symbol set to '{0}'"),
    ("auth.prompt", "Password: "),
    ("auth.confirm_prompt", "Repeat password: "),
    ("auth.mismatch", "Passwords do not match"),
    ("auth.password_set", "Password set"),
    ("auth.password_cleared", "Password removed"),
    ("doctor.ok", "doctor: no issues found"),
    ("report.no_data", "No data"),
    ("kind.income", "Income"),
    ("kind.expense", "Expense"),
    ("hdr.id", "ID"),
    ("hdr.date", "Date"),
    ("hdr.kind", "Kind"),
    ("hdr.category", "Category"),
    ("hdr.amount", "Amount"),
    ("hdr.note", "Note"),
    ("hdr.budget", "Budget"),
    ("hdr.spent", "Spent"),
    ("hdr.progress", "Progress"),
    ("hdr.status", "Status"),
    ("hdr.name", "Name"),
    ("hdr.due", "Due"),
    ("hdr.target", "Target"),
    ("hdr.target_date", "Target date"),
    ("hdr.period", "Period"),
    ("hdr.income", "Income"),
    ("hdr.expense", "Expense"),
    ("hdr.share", "Share"),
    ("hdr.issue", "Issue"),
    ("hdr.detail", "Detail"),
    ("hdr.setting", "Setting"),
    ("hdr.value", "Value"),
    ("status.exceeded", "Exceeded"),
    ("status.ok", "OK"),
    ("status.achieved", "Achieved"),
    ("status.in_progress", "In progress"),
    ("status.overdue", "Overdue by {0} days"),
    ("status.due_today", "Due today"),
    ("status.upcoming", "Due in {0} days"),
    ("overview.initial", "Initial balance"),
    ("overview.income", "Total income"),
    ("overview.expense", "Total expense"),
    ("overview.balance", "Current balance"),
    ("overview.count", "Transactions"),
];

static VI: &[(&str, &str)] = &[
    ("init.done", "Đã khởi tạo cơ sở dữ liệu tại {0}"),
    ("tx.added", "Đã ghi {0} {1} vào '{2}' ngày {3}"),
    ("tx.none", "Chưa có giao dịch nào. Hãy thêm bằng `fintrack tx add`."),
    ("balance.current", "Số dư hiện tại: {0}"),
    ("balance.initial_set", "Đã cập nhật số dư ban đầu: {0}"),
    ("category.added", "Đã thêm danh mục {0} '{1}'"),
    ("category.exists", "Danh mục {0} '{1}' đã tồn tại"),
    ("budget.set", "Ngân sách cho {0}: {1}"),
    ("reminder.added", "Đã thêm nhắc nhở '{0}' hạn {1}"),
    ("goal.added", "Đã thêm mục tiêu tiết kiệm '{0}': {1} trước {2}"),
    ("goal.shared_note", "Mọi mục tiêu đều được so với cùng một số dư hiện tại."),
    ("reset.prompt", "Bạn có chắc chắn muốn xóa tất cả dữ liệu? Hành động này không thể hoàn tác! Gõ 'yes' để xác nhận:"),
    ("reset.done", "Đã xóa tất cả dữ liệu!"),
    ("import.prompt", "Nhập dữ liệu sẽ thay thế TOÀN BỘ dữ liệu hiện có. Gõ 'yes' để xác nhận:"),
    ("import.done", "Đã nhập bản sao lưu từ {0}: {1} giao dịch, {2} ngân sách, {3} nhắc nhở, {4} mục tiêu tiết kiệm"),
    ("import.csv_done", "Đã nhập {0} giao dịch từ {1}"),
    ("action.cancelled", "Đã hủy, không có gì thay đổi"),
    ("export.done", "Đã xuất {0} ra {1}"),
    ("config.language_set", "Đã chọn ngôn ngữ {0}"),
    ("config.currency_set", "Đã đặt ký hiệu tiền tệ '{0}'"),
    ("auth.prompt", "Mật khẩu: "),
    ("auth.confirm_prompt", "Nhập lại mật khẩu: "),
    ("auth.mismatch", "Mật khẩu không khớp"),
    ("auth.password_set", "Đã đặt mật khẩu"),
    ("auth.password_cleared", "Đã xóa mật khẩu"),
    ("doctor.ok", "doctor: không phát hiện vấn đề"),
    ("report.no_data", "Không có dữ liệu"),
    ("kind.income", "Thu"),
    ("kind.expense", "Chi"),
    ("hdr.date", "Ngày"),
    ("hdr.kind", "Loại"),
    ("hdr.category", "Danh mục"),
    ("hdr.amount", "Số tiền"),
    ("hdr.note", "Mô tả"),
    ("hdr.budget", "Ngân sách"),
    ("hdr.spent", "Đã chi"),
    ("hdr.progress", "Tiến độ"),
    ("hdr.status", "Trạng thái"),
    ("hdr.name", "Tên"),
    ("hdr.due", "Hạn"),
    ("hdr.target", "Mục tiêu"),
    ("hdr.target_date", "Ngày mục tiêu"),
    ("hdr.period", "Kỳ"),
    ("hdr.income", "Thu"),
    ("hdr.expense", "Chi"),
    ("hdr.share", "Tỷ lệ"),
    ("hdr.issue", "Vấn đề"),
    ("hdr.detail", "Chi tiết"),
    ("hdr.setting", "Thiết lập"),
    ("hdr.value", "Giá trị"),
    ("status.exceeded", "Vượt ngân sách"),
    ("status.ok", "Trong hạn mức"),
    ("status.achieved", "Đã đạt"),
    ("status.in_progress", "Đang tiết kiệm"),
    ("status.overdue", "Quá hạn {0} ngày"),
    ("status.due_today", "Đến hạn hôm nay"),
    ("status.upcoming", "Còn {0} ngày"),
    ("overview.initial", "Số dư ban đầu"),
    ("overview.income", "Tổng thu"),
    ("overview.expense", "Tổng chi"),
    ("overview.balance", "Số dư hiện tại"),
    ("overview.count", "Số giao dịch"),
];

static TABLES: Lazy<HashMap<Language, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(Language::En, EN.iter().copied().collect());
    m.insert(Language::Vi, VI.iter().copied().collect());
    m
});

#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let lookup = |lang: Language| TABLES.get(&lang).and_then(|tbl| tbl.get(key)).copied();
        lookup(self.language)
            .or_else(|| lookup(Language::DEFAULT))
            .unwrap_or(key)
    }

    /// `t` with positional `{0}`, `{1}`, ... substitution.
    /// Placeholders are resolved in one pass over the template, so braces
    /// inside an argument are never expanded. Unknown indexes stay as written.
    pub fn tf(&self, key: &str, args: &[&dyn fmt::Display]) -> String {
        let template = self.t(key);
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let arg = after.find('}').and_then(|close| {
                let idx: usize = after[..close].parse().ok()?;
                args.get(idx).map(|a| (close, a))
            });
            match arg {
                Some((close, a)) => {
                    out.push_str(&a.to_string());
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }

    pub fn kind(&self, kind: TransactionKind) -> &'static str {
        match kind {
            TransactionKind::Income => self.t("kind.income"),
            TransactionKind::Expense => self.t("kind.expense"),
        }
    }
}
