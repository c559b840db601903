//! Transaction model
//!
//! A single recorded income or expense. Transactions are immutable once
//! created; the only way to change one is to delete it and record a new one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;
use crate::error::{MoneyError, MoneyResult};

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Sign shown in front of amounts of this kind
    pub fn sign(self) -> &'static str {
        match self {
            Self::Income => "+",
            Self::Expense => "-",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction kind: '{}'", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense; older ledger files call this field `type`
    #[serde(alias = "type")]
    pub kind: TransactionKind,

    /// Display label
    pub title: String,

    /// Magnitude of the transaction, always positive
    pub amount: Money,

    pub category: Category,

    /// Date the transaction belongs to (not necessarily when it was entered)
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        kind: TransactionKind,
        title: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            title: title.into(),
            amount,
            category,
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the kind's sign applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(TransactionValidationError::MissingId);
        }

        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::EmptyTitle);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > Money::MAX {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if !self.category.is_valid_for(self.kind) {
            return Err(TransactionValidationError::CategoryNotAllowed {
                kind: self.kind,
                category: self.category,
            });
        }

        Ok(())
    }

    /// Validate, converting failures into the crate error type
    pub fn ensure_valid(&self) -> MoneyResult<()> {
        self.validate()
            .map_err(|e| MoneyError::Validation(e.to_string()))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}{}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.category,
            self.kind.sign(),
            self.amount
        )
    }
}

/// Reasons a transaction is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    MissingId,
    EmptyTitle,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    CategoryNotAllowed {
        kind: TransactionKind,
        category: Category,
    },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "Transaction id is missing"),
            Self::EmptyTitle => write!(f, "Title is required"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} is over the limit of {}", amount, Money::MAX)
            }
            Self::CategoryNotAllowed { kind, category } => write!(
                f,
                "Category '{}' is not available for {} transactions",
                category,
                kind.label().to_lowercase()
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
