//! Ledger service
//!
//! The ledger is the ordered list of every recorded transaction and the only
//! source of truth for totals. Each successful change is written through the
//! injected persistence adapter before the call returns.

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{MoneyError, MoneyResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::Persistence;

/// Derived totals; always recomputed from the transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub total_income: Money,
    pub total_expense: Money,
    pub net_balance: Money,
}

/// What happened to durable storage after a ledger call
#[derive(Debug)]
#[must_use]
pub enum WriteOutcome {
    /// The change was made and written
    Persisted,
    /// Nothing changed, nothing was written
    Unchanged,
    /// The change was made in memory but the write failed. The in-memory
    /// ledger stays authoritative for the rest of the session.
    Unpersisted(MoneyError),
}

impl WriteOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted)
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// The write error, if the change did not reach storage
    pub fn write_error(&self) -> Option<&MoneyError> {
        match self {
            Self::Unpersisted(err) => Some(err),
            _ => None,
        }
    }
}

/// First half of a delete: names the transaction awaiting confirmation.
///
/// Only [`Ledger::request_delete`] creates one. Pass it to
/// [`Ledger::confirm_delete`] to delete, or drop it to cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    id: TransactionId,
    title: String,
    kind: TransactionKind,
    amount: Money,
}

impl DeleteRequest {
    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Confirmation question shown to the user
    pub fn prompt(&self, currency_symbol: &str) -> String {
        format!(
            "Are you sure you want to delete \"{}\" ({}{})?",
            self.title,
            self.kind.sign(),
            self.amount.format_with_symbol(currency_symbol)
        )
    }
}

/// The transaction ledger
pub struct Ledger {
    transactions: Vec<Transaction>,
    persistence: Box<dyn Persistence>,
    audit: Option<AuditLogger>,
}

impl Ledger {
    /// Build a ledger from whatever the persistence adapter holds.
    ///
    /// Records that break the ledger invariants (duplicate id, empty title,
    /// non-positive amount, category not allowed for the kind) are skipped.
    pub fn hydrate(persistence: Box<dyn Persistence>) -> Self {
        let mut transactions: Vec<Transaction> = Vec::new();
        for txn in persistence.load() {
            if txn.validate().is_err() || transactions.iter().any(|t| t.id == txn.id) {
                continue;
            }
            transactions.push(txn);
        }

        Self {
            transactions,
            persistence,
            audit: None,
        }
    }

    /// Record every change in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Find by full id or unambiguous short form
    pub fn find(&self, query: &str) -> MoneyResult<&Transaction> {
        let mut matches = self.transactions.iter().filter(|t| t.id.matches(query));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn),
            (Some(_), Some(_)) => Err(MoneyError::Validation(format!(
                "'{}' matches more than one transaction; use a longer id",
                query
            ))),
            (None, _) => Err(MoneyError::transaction_not_found(query)),
        }
    }

    /// Append a transaction and persist the ledger.
    ///
    /// Invalid transactions and duplicate ids are rejected with a validation
    /// error and leave the ledger untouched.
    pub fn add(&mut self, txn: Transaction) -> MoneyResult<WriteOutcome> {
        txn.ensure_valid()?;

        if self.get(&txn.id).is_some() {
            return Err(MoneyError::Validation(format!(
                "A transaction with id {} already exists",
                txn.id
            )));
        }

        self.transactions.push(txn);
        let outcome = self.persist();

        if let Some(added) = self.transactions.last() {
            let entry = AuditEntry::create(added).unpersisted(!outcome.is_persisted());
            self.audit(&entry);
        }

        Ok(outcome)
    }

    /// Remove the transaction with `id`. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &TransactionId) -> WriteOutcome {
        let Some(index) = self.transactions.iter().position(|t| &t.id == id) else {
            return WriteOutcome::Unchanged;
        };

        let removed = self.transactions.remove(index);
        let outcome = self.persist();

        let entry = AuditEntry::delete(&removed).unpersisted(!outcome.is_persisted());
        self.audit(&entry);

        outcome
    }

    /// Start a delete. Returns `None` if no transaction has `id`.
    pub fn request_delete(&self, id: &TransactionId) -> Option<DeleteRequest> {
        self.get(id).map(|txn| DeleteRequest {
            id: txn.id.clone(),
            title: txn.title.clone(),
            kind: txn.kind,
            amount: txn.amount,
        })
    }

    /// Finish a delete started with [`Ledger::request_delete`]
    pub fn confirm_delete(&mut self, request: DeleteRequest) -> WriteOutcome {
        self.remove(&request.id)
    }

    /// Income, expense and net balance over the current transactions
    pub fn totals(&self) -> Totals {
        let total_income: Money = self
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let total_expense: Money = self
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum();

        Totals {
            total_income,
            total_expense,
            net_balance: total_income - total_expense,
        }
    }

    fn persist(&self) -> WriteOutcome {
        match self.persistence.save(&self.transactions) {
            Ok(()) => WriteOutcome::Persisted,
            Err(err) => WriteOutcome::Unpersisted(err),
        }
    }

    // Audit failures never fail the ledger operation
    fn audit(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            let _ = logger.log(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::Category;
    use crate::storage::{JsonPersistence, MemorySlot};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn income(title: &str, cents: i64, category: Category, on: &str) -> Transaction {
        Transaction::new(
            TransactionKind::Income,
            title,
            Money::from_cents(cents),
            category,
            date(on),
        )
    }

    fn expense(title: &str, cents: i64, category: Category, on: &str) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            title,
            Money::from_cents(cents),
            category,
            date(on),
        )
    }

    fn memory_ledger() -> (Ledger, MemorySlot) {
        let slot = MemorySlot::new();
        let ledger = Ledger::hydrate(Box::new(JsonPersistence::new(slot.clone())));
        (ledger, slot)
    }

    fn reload(slot: &MemorySlot) -> Ledger {
        Ledger::hydrate(Box::new(JsonPersistence::new(slot.clone())))
    }

    #[test]
    fn test_salary_and_groceries_scenario() {
        let (mut ledger, _slot) = memory_ledger();
        assert!(ledger.is_empty());

        let salary = income("Salary", 500000, Category::Salary, "2024-01-01");
        let groceries = expense("Groceries", 120000, Category::Food, "2024-01-02");
        let (salary_id, groceries_id) = (salary.id.clone(), groceries.id.clone());

        assert!(ledger.add(salary).unwrap().is_persisted());
        assert!(ledger.add(groceries).unwrap().is_persisted());

        let totals = ledger.totals();
        assert_eq!(totals.total_income, Money::from_cents(500000));
        assert_eq!(totals.total_expense, Money::from_cents(120000));
        assert_eq!(totals.net_balance, Money::from_cents(380000));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.transactions()[0].id, salary_id);
        assert_eq!(ledger.transactions()[1].id, groceries_id);
    }

    #[test]
    fn test_non_positive_amount_rejected_and_ledger_unchanged() {
        let (mut ledger, slot) = memory_ledger();
        ledger
            .add(income("Salary", 500000, Category::Salary, "2024-01-01"))
            .unwrap()
            .is_persisted();
        let before = ledger.transactions().to_vec();
        let stored_before = slot.get();

        for cents in [0, -1, -500000] {
            let err = ledger
                .add(expense("Bad", cents, Category::Food, "2024-01-02"))
                .unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(ledger.transactions(), before.as_slice());
        assert_eq!(slot.get(), stored_before);
    }

    #[test]
    fn test_empty_title_and_wrong_category_rejected() {
        let (mut ledger, _slot) = memory_ledger();

        let err = ledger
            .add(income("  ", 100, Category::Salary, "2024-01-01"))
            .unwrap_err();
        assert!(err.is_validation());

        let err = ledger
            .add(income("Lunch", 100, Category::Food, "2024-01-01"))
            .unwrap_err();
        assert!(err.is_validation());

        let err = ledger
            .add(expense("Paycheck", 100, Category::Salary, "2024-01-01"))
            .unwrap_err();
        assert!(err.is_validation());

        assert!(ledger.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let (mut ledger, _slot) = memory_ledger();
        let txn = income("Salary", 100, Category::Salary, "2024-01-01");
        let copy = txn.clone();

        assert!(ledger.add(txn).unwrap().is_persisted());
        assert!(ledger.add(copy).unwrap_err().is_validation());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_totals_per_bucket() {
        let (mut ledger, _slot) = memory_ledger();

        assert_eq!(ledger.totals(), Totals::default());

        let _ = ledger.add(expense("Rent", 90000, Category::Bills, "2024-02-01")).unwrap();
        let totals = ledger.totals();
        assert_eq!(totals.total_income, Money::zero());
        assert_eq!(totals.total_expense, Money::from_cents(90000));
        assert_eq!(totals.net_balance, Money::from_cents(-90000));

        let _ = ledger.add(income("Gig", 1050, Category::Freelance, "2024-02-02")).unwrap();
        let totals = ledger.totals();
        assert_eq!(totals.total_income, Money::from_cents(1050));
        assert_eq!(totals.net_balance, totals.total_income - totals.total_expense);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (mut ledger, slot) = memory_ledger();
        let _ = ledger.add(income("Salary", 100, Category::Salary, "2024-01-01")).unwrap();
        let stored = slot.get();

        let outcome = ledger.remove(&TransactionId::new());

        assert!(outcome.is_unchanged());
        assert_eq!(ledger.len(), 1);
        assert_eq!(slot.get(), stored);
    }

    #[test]
    fn test_removed_id_absent_after_reload() {
        let (mut ledger, slot) = memory_ledger();
        let keep = income("Salary", 500000, Category::Salary, "2024-01-01");
        let drop = expense("Groceries", 120000, Category::Food, "2024-01-02");
        let drop_id = drop.id.clone();

        let _ = ledger.add(keep.clone()).unwrap();
        let _ = ledger.add(drop).unwrap();

        assert!(ledger.remove(&drop_id).is_persisted());
        assert!(ledger.get(&drop_id).is_none());

        let reloaded = reload(&slot);
        assert_eq!(reloaded.transactions(), &[keep]);
        assert!(reloaded.get(&drop_id).is_none());
    }

    #[test]
    fn test_round_trip_through_hydrate() {
        let (mut ledger, slot) = memory_ledger();
        let _ = ledger.add(income("Salary", 500000, Category::Salary, "2024-01-01")).unwrap();
        let _ = ledger.add(expense("Taxi", 1999, Category::Transport, "2024-01-05")).unwrap();
        let _ = ledger.add(income("Dividend", 12345, Category::Investment, "2023-12-31")).unwrap();

        assert_eq!(reload(&slot).transactions(), ledger.transactions());
    }

    #[test]
    fn test_corrupt_slot_hydrates_empty() {
        let slot = MemorySlot::with_contents("{{{ definitely not a ledger");
        let ledger = reload(&slot);
        assert!(ledger.is_empty());
        assert_eq!(ledger.totals(), Totals::default());
    }

    #[test]
    fn test_hydrate_skips_invalid_and_duplicate_records() {
        let slot = MemorySlot::with_contents(
            r#"[
                {"id":"a","kind":"income","title":"Salary","amount":100,"category":"Salary","date":"2024-01-01"},
                {"id":"a","kind":"income","title":"Copy","amount":100,"category":"Salary","date":"2024-01-01"},
                {"id":"b","kind":"expense","title":"Refund?","amount":-5,"category":"Food","date":"2024-01-02"},
                {"id":"c","kind":"expense","title":"Bus","amount":2.5,"category":"Transport","date":"2024-01-03"}
            ]"#,
        );

        let ledger = reload(&slot);
        let titles: Vec<_> = ledger.transactions().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Salary", "Bus"]);
    }

    #[test]
    fn test_write_failure_keeps_change_in_memory() {
        let (mut ledger, slot) = memory_ledger();
        slot.fail_writes(true);

        let outcome = ledger
            .add(income("Salary", 500000, Category::Salary, "2024-01-01"))
            .unwrap();

        assert!(outcome.write_error().is_some());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.totals().total_income, Money::from_cents(500000));
        assert_eq!(slot.get(), None);

        // Next successful write carries the earlier change along
        slot.fail_writes(false);
        let _ = ledger.add(expense("Food", 100, Category::Food, "2024-01-02")).unwrap();
        assert_eq!(reload(&slot).len(), 2);
    }

    #[test]
    fn test_two_step_delete() {
        let (mut ledger, slot) = memory_ledger();
        let txn = expense("Groceries", 120000, Category::Food, "2024-01-02");
        let id = txn.id.clone();
        let _ = ledger.add(txn).unwrap();

        let request = ledger.request_delete(&id).unwrap();
        assert_eq!(request.title(), "Groceries");
        assert_eq!(request.kind(), TransactionKind::Expense);
        assert_eq!(
            request.prompt("৳"),
            "Are you sure you want to delete \"Groceries\" (-৳1200.00)?"
        );

        // Requesting alone changes nothing
        assert_eq!(ledger.len(), 1);

        assert!(ledger.confirm_delete(request).is_persisted());
        assert!(ledger.is_empty());
        assert!(reload(&slot).is_empty());
    }

    #[test]
    fn test_request_delete_unknown_id() {
        let (ledger, _slot) = memory_ledger();
        assert!(ledger.request_delete(&TransactionId::new()).is_none());
    }

    #[test]
    fn test_stale_delete_request_is_noop() {
        let (mut ledger, _slot) = memory_ledger();
        let txn = expense("Groceries", 100, Category::Food, "2024-01-02");
        let id = txn.id.clone();
        let _ = ledger.add(txn).unwrap();

        let first = ledger.request_delete(&id).unwrap();
        let second = first.clone();
        assert!(ledger.confirm_delete(first).is_persisted());
        assert!(ledger.confirm_delete(second).is_unchanged());
    }

    #[test]
    fn test_find_by_short_id() {
        let (mut ledger, _slot) = memory_ledger();
        let txn = income("Salary", 100, Category::Salary, "2024-01-01");
        let short = txn.id.short();
        let _ = ledger.add(txn).unwrap();

        assert_eq!(ledger.find(&short).unwrap().title, "Salary");
        assert!(ledger.find("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_needs_more_than_the_prefix() {
        let (mut ledger, _slot) = memory_ledger();
        let _ = ledger.add(income("Salary", 100, Category::Salary, "2024-01-01")).unwrap();

        assert!(ledger.find("txn-").unwrap_err().is_not_found());
        assert!(ledger.find("").unwrap_err().is_not_found());
    }

    #[test]
    fn test_oversized_amounts_are_dropped_on_load() {
        let slot = MemorySlot::with_contents(
            r#"[
                {"id":"a","kind":"income","title":"Huge","amount":90000000000000000,"category":"Salary","date":"2024-01-01"},
                {"id":"b","kind":"income","title":"Huge too","amount":90000000000000000,"category":"Salary","date":"2024-01-01"},
                {"id":"c","kind":"income","title":"Salary","amount":100,"category":"Salary","date":"2024-01-02"}
            ]"#,
        );

        let ledger = reload(&slot);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.totals().total_income, Money::from_cents(10000));
    }

    #[test]
    fn test_totals_at_the_amount_limit() {
        let (mut ledger, _slot) = memory_ledger();
        let _ = ledger.add(income("Big", Money::MAX.cents(), Category::Salary, "2024-01-01")).unwrap();
        let _ = ledger.add(income("Bigger", Money::MAX.cents(), Category::Investment, "2024-01-01")).unwrap();

        let err = ledger
            .add(expense("Too big", Money::MAX.cents() + 1, Category::Bills, "2024-01-02"))
            .unwrap_err();
        assert!(err.is_validation());

        let totals = ledger.totals();
        assert_eq!(totals.total_income.cents(), 2 * Money::MAX.cents());
        assert_eq!(totals.net_balance, totals.total_income);
    }

    #[test]
    fn test_audit_records_create_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let slot = MemorySlot::new();
        let mut ledger =
            Ledger::hydrate(Box::new(JsonPersistence::new(slot))).with_audit(logger.clone());

        let txn = income("Salary", 100, Category::Salary, "2024-01-01");
        let id = txn.id.clone();
        let _ = ledger.add(txn).unwrap();
        let _ = ledger.remove(&id);

        let entries = logger.read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, [Operation::Create, Operation::Delete]);
        assert_eq!(entries[0].entity_id, id.to_string());
    }

    #[test]
    fn test_rejected_add_is_not_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut ledger = Ledger::hydrate(Box::new(JsonPersistence::new(MemorySlot::new())))
            .with_audit(logger.clone());

        assert!(ledger
            .add(income("Salary", 0, Category::Salary, "2024-01-01"))
            .is_err());
        assert!(logger.read_all().unwrap().is_empty());
    }
}
