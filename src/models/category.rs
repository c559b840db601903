//! Transaction categories
//!
//! A fixed set of categories; which ones are allowed depends on whether the
//! transaction is income or an expense.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transaction::TransactionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Salary,
    Freelance,
    Investment,
    Food,
    Transport,
    Shopping,
    Bills,
    Other,
}

const INCOME_CATEGORIES: &[Category] = &[
    Category::Salary,
    Category::Freelance,
    Category::Investment,
    Category::Other,
];

const EXPENSE_CATEGORIES: &[Category] = &[
    Category::Food,
    Category::Transport,
    Category::Shopping,
    Category::Bills,
    Category::Other,
];

impl Category {
    /// Categories selectable for a kind, in display order
    pub fn for_kind(kind: TransactionKind) -> &'static [Category] {
        match kind {
            TransactionKind::Income => INCOME_CATEGORIES,
            TransactionKind::Expense => EXPENSE_CATEGORIES,
        }
    }

    /// Check whether this category may be used with `kind`
    pub fn is_valid_for(self, kind: TransactionKind) -> bool {
        Self::for_kind(kind).contains(&self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investment => "Investment",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive lookup by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        INCOME_CATEGORIES
            .iter()
            .chain(EXPENSE_CATEGORIES)
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown category: '{}'", wanted))
    }
}
