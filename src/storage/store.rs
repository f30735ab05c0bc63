//! Budget input store
//!
//! Owns the canonical `BudgetInputs`, restores it once when opened and
//! persists the affected key after every mutation. Storage failures never
//! reach the caller: unreadable data falls back to defaults and failed writes
//! leave the in-memory aggregate authoritative. Both are logged.
//!
//! Persisted layout, one JSON value per key:
//!
//! - `budgetData`: `{ biweeklyPaycheck, savingsGoalYear, savingsGoalMonth, incomeType }`
//! - `expenses`: `[{ id, name, amount }]`
//! - `additionalIncomes`: `[{ id, name, amount, frequency }]`
//! - `subscriptions`: `[{ id, name, amount }]`
//! - `variableIncomes`: `[{ id, date, amount }]`
//! - `idSequence`: `{ next }`, the next id to hand out

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{
    coerce_amount, coerce_money, AdditionalIncome, BudgetInputs, BudgetSummary, Expense, ExpenseId,
    Frequency, IdSequence, IncomeField, IncomeId, IncomeMode, LineItem, LineItemField, Money,
    SampleField, SampleId, Subscription, SubscriptionId, VariableIncomeSample,
};
use crate::services::BudgetEngine;

use super::kv::KeyValueStore;

/// Storage keys
pub mod keys {
    pub const BUDGET_DATA: &str = "budgetData";
    pub const EXPENSES: &str = "expenses";
    pub const ADDITIONAL_INCOMES: &str = "additionalIncomes";
    pub const SUBSCRIPTIONS: &str = "subscriptions";
    pub const VARIABLE_INCOMES: &str = "variableIncomes";
    pub const ID_SEQUENCE: &str = "idSequence";

    /// Every key the store owns
    pub const ALL: [&str; 6] = [
        BUDGET_DATA,
        EXPENSES,
        ADDITIONAL_INCOMES,
        SUBSCRIPTIONS,
        VARIABLE_INCOMES,
        ID_SEQUENCE,
    ];
}

/// The scalar part of the inputs, stored under `budgetData`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BudgetDataRecord {
    #[serde(default)]
    biweekly_paycheck: Money,
    #[serde(default)]
    savings_goal_year: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    savings_goal_month: Option<Money>,
    #[serde(default, rename = "incomeType")]
    income_mode: IncomeMode,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct IdSequenceRecord {
    next: u64,
}

/// Owns and persists the budget inputs
pub struct BudgetInputStore<S: KeyValueStore> {
    backend: S,
    inputs: BudgetInputs,
    ids: IdSequence,
}

impl<S: KeyValueStore> BudgetInputStore<S> {
    /// Open the store and restore whatever was saved
    pub fn open(backend: S) -> Self {
        let mut store = Self {
            backend,
            inputs: BudgetInputs::default(),
            ids: IdSequence::from_clock(None),
        };
        store.load();
        store
    }

    /// Current inputs
    pub fn inputs(&self) -> &BudgetInputs {
        &self.inputs
    }

    /// Derived figures for the current inputs
    pub fn summary(&self) -> BudgetSummary {
        BudgetEngine::compute(&self.inputs)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Re-read persisted state. Missing or unreadable data yields defaults.
    pub fn load(&mut self) -> &BudgetInputs {
        let (mut inputs, recovered) = match read_inputs(&self.backend) {
            Ok(inputs) => (inputs, false),
            Err(e) => {
                warn!(error = %e, "Saved budget data could not be read, starting from defaults");
                (BudgetInputs::default(), true)
            }
        };

        if let Some(highest) = inputs.highest_id() {
            self.ids.observe(highest);
        }
        match read_key::<_, IdSequenceRecord>(&self.backend, keys::ID_SEQUENCE) {
            Ok(Some(record)) => self.ids.observe(record.next.saturating_sub(1)),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Saved id sequence could not be read"),
        }
        let reassigned = reassign_duplicate_ids(&mut inputs, &mut self.ids);
        if reassigned > 0 {
            debug!(reassigned, "Reassigned duplicate ids in saved budget data");
        }

        debug!(
            expenses = inputs.expenses.len(),
            subscriptions = inputs.subscriptions.len(),
            additional_incomes = inputs.additional_incomes.len(),
            samples = inputs.variable_income_samples.len(),
            "Loaded budget inputs"
        );
        self.inputs = inputs;

        // Every key is rewritten so a later single-key write can't be paired
        // with stale or unreadable neighbours on the next load.
        if recovered || reassigned > 0 {
            self.save();
        }
        &self.inputs
    }

    /// Persist every key
    pub fn save(&mut self) {
        for key in keys::ALL {
            self.persist(key);
        }
    }

    /// Replace the whole aggregate and persist it
    pub fn save_inputs(&mut self, inputs: BudgetInputs) -> &BudgetInputs {
        if let Some(highest) = inputs.highest_id() {
            self.ids.observe(highest);
        }
        self.inputs = inputs;
        self.save();
        &self.inputs
    }

    /// Remove every persisted key and return to defaults
    ///
    /// IDs handed out before the reset are never reused.
    pub fn reset(&mut self) -> &BudgetInputs {
        for key in keys::ALL {
            if let Err(e) = self.backend.remove_item(key) {
                warn!(key, error = %e, "Failed to clear saved budget data");
            }
        }
        self.inputs = BudgetInputs::default();
        debug!("Budget inputs reset to defaults");
        &self.inputs
    }

    // --- income ---

    /// Set the bi-weekly paycheck from raw input
    pub fn set_income(&mut self, raw_paycheck: &str) -> &BudgetInputs {
        self.inputs.biweekly_paycheck = coerce_amount(raw_paycheck);
        self.persist(keys::BUDGET_DATA)
    }

    pub fn set_income_mode(&mut self, mode: IncomeMode) -> &BudgetInputs {
        self.inputs.income_mode = mode;
        self.persist(keys::BUDGET_DATA)
    }

    /// Set the annual savings goal; the monthly goal follows
    pub fn set_savings_goal_year(&mut self, raw: &str) -> &BudgetInputs {
        self.inputs.set_savings_goal_year(coerce_amount(raw));
        self.persist(keys::BUDGET_DATA)
    }

    /// Set the monthly savings goal; the annual goal follows
    pub fn set_savings_goal_month(&mut self, raw: &str) -> &BudgetInputs {
        self.inputs.set_savings_goal_month(coerce_amount(raw));
        self.persist(keys::BUDGET_DATA)
    }

    // --- expenses ---

    pub fn add_expense(&mut self, name: impl Into<String>, raw_amount: &str) -> &BudgetInputs {
        let id = ExpenseId::from_raw(self.next_id());
        self.inputs
            .expenses
            .push(Expense::new(id, name, coerce_amount(raw_amount)));
        self.persist(keys::EXPENSES)
    }

    /// Edit one field of an expense. Unknown ids are ignored.
    pub fn update_expense(&mut self, id: ExpenseId, field: LineItemField) -> &BudgetInputs {
        if update_line_item(&mut self.inputs.expenses, id, field) {
            self.persist(keys::EXPENSES)
        } else {
            &self.inputs
        }
    }

    /// Delete an expense. Unknown ids are ignored.
    pub fn delete_expense(&mut self, id: ExpenseId) -> &BudgetInputs {
        if remove_where(&mut self.inputs.expenses, |e| e.id == id) {
            self.persist(keys::EXPENSES)
        } else {
            &self.inputs
        }
    }

    // --- subscriptions ---

    pub fn add_subscription(&mut self, name: impl Into<String>, raw_amount: &str) -> &BudgetInputs {
        let id = SubscriptionId::from_raw(self.next_id());
        self.inputs
            .subscriptions
            .push(Subscription::new(id, name, coerce_amount(raw_amount)));
        self.persist(keys::SUBSCRIPTIONS)
    }

    pub fn update_subscription(&mut self, id: SubscriptionId, field: LineItemField) -> &BudgetInputs {
        if update_line_item(&mut self.inputs.subscriptions, id, field) {
            self.persist(keys::SUBSCRIPTIONS)
        } else {
            &self.inputs
        }
    }

    pub fn delete_subscription(&mut self, id: SubscriptionId) -> &BudgetInputs {
        if remove_where(&mut self.inputs.subscriptions, |s| s.id == id) {
            self.persist(keys::SUBSCRIPTIONS)
        } else {
            &self.inputs
        }
    }

    // --- additional income ---

    pub fn add_additional_income(
        &mut self,
        name: impl Into<String>,
        raw_amount: &str,
        frequency: Frequency,
    ) -> &BudgetInputs {
        let id = IncomeId::from_raw(self.next_id());
        self.inputs.additional_incomes.push(AdditionalIncome::new(
            id,
            name,
            coerce_amount(raw_amount),
            frequency,
        ));
        self.persist(keys::ADDITIONAL_INCOMES)
    }

    pub fn update_additional_income(&mut self, id: IncomeId, field: IncomeField) -> &BudgetInputs {
        let Some(income) = self.inputs.additional_incomes.iter_mut().find(|i| i.id == id) else {
            return &self.inputs;
        };
        match field {
            IncomeField::Name(name) => income.name = name,
            IncomeField::Amount(raw) => income.amount = coerce_amount(&raw),
            IncomeField::Frequency(frequency) => income.frequency = frequency,
        }
        self.persist(keys::ADDITIONAL_INCOMES)
    }

    pub fn delete_additional_income(&mut self, id: IncomeId) -> &BudgetInputs {
        if remove_where(&mut self.inputs.additional_incomes, |i| i.id == id) {
            self.persist(keys::ADDITIONAL_INCOMES)
        } else {
            &self.inputs
        }
    }

    // --- variable income samples ---

    pub fn add_variable_income_sample(
        &mut self,
        period: impl Into<String>,
        raw_amount: &str,
    ) -> &BudgetInputs {
        let id = SampleId::from_raw(self.next_id());
        self.inputs
            .variable_income_samples
            .push(VariableIncomeSample::new(id, period, coerce_amount(raw_amount)));
        self.persist(keys::VARIABLE_INCOMES)
    }

    pub fn update_variable_income_sample(&mut self, id: SampleId, field: SampleField) -> &BudgetInputs {
        let Some(sample) = self
            .inputs
            .variable_income_samples
            .iter_mut()
            .find(|s| s.id == id)
        else {
            return &self.inputs;
        };
        match field {
            SampleField::Period(period) => sample.period = period,
            SampleField::Amount(raw) => sample.amount = coerce_amount(&raw),
        }
        self.persist(keys::VARIABLE_INCOMES)
    }

    pub fn remove_variable_income_sample(&mut self, id: SampleId) -> &BudgetInputs {
        if remove_where(&mut self.inputs.variable_income_samples, |s| s.id == id) {
            self.persist(keys::VARIABLE_INCOMES)
        } else {
            &self.inputs
        }
    }

    /// Take the next id and persist the advanced sequence
    fn next_id(&mut self) -> u64 {
        let raw = self.ids.next_raw();
        self.persist(keys::ID_SEQUENCE);
        raw
    }

    /// Write one key. Failures are logged and otherwise ignored.
    fn persist(&mut self, key: &'static str) -> &BudgetInputs {
        let result = encode_key(&self.inputs, &self.ids, key)
            .and_then(|json| self.backend.set_item(key, &json));
        match result {
            Ok(()) => debug!(key, "Persisted budget inputs"),
            Err(e) => warn!(key, error = %e, "Failed to persist budget inputs, keeping in-memory state"),
        }
        &self.inputs
    }
}

fn encode_key(inputs: &BudgetInputs, ids: &IdSequence, key: &str) -> SpendwiseResult<String> {
    let json = match key {
        keys::BUDGET_DATA => serde_json::to_string(&BudgetDataRecord {
            biweekly_paycheck: inputs.biweekly_paycheck,
            savings_goal_year: inputs.savings_goal_year(),
            savings_goal_month: Some(inputs.savings_goal_month()),
            income_mode: inputs.income_mode,
        })?,
        keys::EXPENSES => serde_json::to_string(&inputs.expenses)?,
        keys::ADDITIONAL_INCOMES => serde_json::to_string(&inputs.additional_incomes)?,
        keys::SUBSCRIPTIONS => serde_json::to_string(&inputs.subscriptions)?,
        keys::VARIABLE_INCOMES => serde_json::to_string(&inputs.variable_income_samples)?,
        keys::ID_SEQUENCE => serde_json::to_string(&IdSequenceRecord { next: ids.peek() })?,
        other => {
            return Err(SpendwiseError::Storage(format!("Unknown storage key: {}", other)));
        }
    };
    Ok(json)
}

fn read_key<S, T>(backend: &S, key: &str) -> SpendwiseResult<Option<T>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    match backend.get_item(key)? {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| SpendwiseError::Storage(format!("Failed to parse '{}': {}", key, e))),
        _ => Ok(None),
    }
}

fn read_inputs<S: KeyValueStore>(backend: &S) -> SpendwiseResult<BudgetInputs> {
    let data: BudgetDataRecord = read_key(backend, keys::BUDGET_DATA)?.unwrap_or_default();
    let mut inputs = BudgetInputs::default();
    inputs.income_mode = data.income_mode;
    inputs.biweekly_paycheck = coerce_money(data.biweekly_paycheck);
    inputs.expenses = read_key(backend, keys::EXPENSES)?.unwrap_or_default();
    inputs.additional_incomes = read_key(backend, keys::ADDITIONAL_INCOMES)?.unwrap_or_default();
    inputs.subscriptions = read_key(backend, keys::SUBSCRIPTIONS)?.unwrap_or_default();
    inputs.variable_income_samples = read_key(backend, keys::VARIABLE_INCOMES)?.unwrap_or_default();
    inputs.restore_savings_goal(data.savings_goal_year, data.savings_goal_month);

    for expense in &mut inputs.expenses {
        expense.amount = coerce_money(expense.amount);
    }
    for subscription in &mut inputs.subscriptions {
        subscription.amount = coerce_money(subscription.amount);
    }
    for income in &mut inputs.additional_incomes {
        income.amount = coerce_money(income.amount);
    }
    for sample in &mut inputs.variable_income_samples {
        sample.amount = coerce_money(sample.amount);
    }

    Ok(inputs)
}

fn update_line_item<I: PartialEq>(items: &mut [LineItem<I>], id: I, field: LineItemField) -> bool {
    let Some(item) = items.iter_mut().find(|item| item.id == id) else {
        return false;
    };
    match field {
        LineItemField::Name(name) => item.name = name,
        LineItemField::Amount(raw) => item.amount = coerce_amount(&raw),
    }
    true
}

fn remove_where<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !matches(item));
    items.len() != before
}

fn dedupe<T>(
    items: &mut [T],
    ids: &mut IdSequence,
    get: impl Fn(&T) -> u64,
    set: impl Fn(&mut T, u64),
) -> usize {
    let mut seen = HashSet::new();
    let mut reassigned = 0;
    for item in items.iter_mut() {
        if !seen.insert(get(item)) {
            set(item, ids.next_raw());
            reassigned += 1;
        }
    }
    reassigned
}

fn reassign_duplicate_ids(inputs: &mut BudgetInputs, ids: &mut IdSequence) -> usize {
    dedupe(
        &mut inputs.expenses,
        ids,
        |e| e.id.raw(),
        |e, raw| e.id = ExpenseId::from_raw(raw),
    ) + dedupe(
        &mut inputs.subscriptions,
        ids,
        |s| s.id.raw(),
        |s, raw| s.id = SubscriptionId::from_raw(raw),
    ) + dedupe(
        &mut inputs.additional_incomes,
        ids,
        |i| i.id.raw(),
        |i, raw| i.id = IncomeId::from_raw(raw),
    ) + dedupe(
        &mut inputs.variable_income_samples,
        ids,
        |s| s.id.raw(),
        |s, raw| s.id = SampleId::from_raw(raw),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::{FileKeyValueStore, MemoryKeyValueStore};
    use tempfile::TempDir;

    fn memory_store() -> BudgetInputStore<MemoryKeyValueStore> {
        BudgetInputStore::open(MemoryKeyValueStore::new())
    }

    fn reopen(store: BudgetInputStore<MemoryKeyValueStore>) -> BudgetInputStore<MemoryKeyValueStore> {
        BudgetInputStore::open(store.into_backend())
    }

    #[test]
    fn test_empty_backend_loads_defaults() {
        let store = memory_store();
        assert!(store.inputs().is_empty());
    }

    #[test]
    fn test_mutations_survive_reload() {
        let mut store = memory_store();
        store.set_income("2100.50");
        store.set_savings_goal_year("6000");
        store.add_expense("Rent", "1400");
        store.add_subscription("Music", "10.99");
        store.add_additional_income("Tutoring", "150", Frequency::Weekly);
        store.set_income_mode(IncomeMode::Variable);
        store.add_variable_income_sample("2024-01", "3200");
        let before = store.inputs().clone();

        let store = reopen(store);
        assert_eq!(store.inputs(), &before);
        assert_eq!(store.inputs().biweekly_paycheck, Money::from_cents(2100_50));
        assert_eq!(store.inputs().savings_goal_month(), Money::from_dollars(500));
    }

    #[test]
    fn test_save_inputs_then_load_round_trips() {
        let mut inputs = BudgetInputs::default();
        inputs.biweekly_paycheck = Money::from_cents(1999_99);
        inputs.set_savings_goal_month(Money::from_cents(333_33));
        inputs.expenses.push(Expense::new(ExpenseId::from_raw(7), "Car", Money::from_cents(350_10)));
        inputs.subscriptions.push(Subscription::new(
            SubscriptionId::from_raw(8),
            "Gym",
            Money::from_dollars(45),
        ));
        inputs.additional_incomes.push(AdditionalIncome::new(
            IncomeId::from_raw(9),
            "Dividends",
            Money::from_dollars(1200),
            Frequency::Yearly,
        ));

        let mut store = memory_store();
        store.save_inputs(inputs.clone());
        assert_eq!(reopen(store).inputs(), &inputs);
    }

    #[test]
    fn test_amounts_are_coerced() {
        let mut store = memory_store();
        store.set_income("");
        assert!(store.inputs().biweekly_paycheck.is_zero());
        store.add_expense("Mystery", "abc");
        store.add_expense("Refund", "-25");
        assert!(store.inputs().expenses.iter().all(|e| e.amount.is_zero()));
    }

    #[test]
    fn test_update_expense_fields() {
        let mut store = memory_store();
        store.add_expense("Rent", "1000");
        let id = store.inputs().expenses[0].id;

        store.update_expense(id, LineItemField::Amount("1250.75".into()));
        store.update_expense(id, LineItemField::Name("Mortgage".into()));

        let reloaded = reopen(store);
        let expense = &reloaded.inputs().expenses[0];
        assert_eq!(expense.name, "Mortgage");
        assert_eq!(expense.amount, Money::from_cents(1250_75));
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut store = memory_store();
        store.add_expense("Rent", "1000");
        store.add_subscription("Video", "12");
        let before = store.inputs().clone();

        store.delete_expense(ExpenseId::from_raw(1));
        store.update_expense(ExpenseId::from_raw(1), LineItemField::Amount("5".into()));
        store.delete_subscription(SubscriptionId::from_raw(1));
        store.update_additional_income(IncomeId::from_raw(1), IncomeField::Name("x".into()));
        store.remove_variable_income_sample(SampleId::from_raw(1));
        store.update_variable_income_sample(SampleId::from_raw(1), SampleField::Period("2024-01".into()));

        assert_eq!(store.inputs(), &before);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let mut store = memory_store();
        store.add_subscription("Video", "12");
        store.add_subscription("Music", "10");
        let video = store.inputs().subscriptions[0].id;

        store.delete_subscription(video);
        let names: Vec<_> = store.inputs().subscriptions.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, vec!["Music".to_string()]);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut store = memory_store();
        store.add_expense("A", "1");
        store.add_expense("B", "2");
        let newest = store.inputs().expenses[1].id;

        store.delete_expense(newest);
        store.add_expense("C", "3");
        let replacement = store.inputs().expenses[1].id;
        assert!(replacement > newest);

        // And across a reload
        store.delete_expense(replacement);
        let mut store = reopen(store);
        store.add_expense("D", "4");
        assert!(store.inputs().expenses[1].id > replacement);
    }

    #[test]
    fn test_ids_unique_across_additions() {
        let mut store = memory_store();
        for i in 0..50 {
            store.add_expense(format!("E{}", i), "1");
        }
        let ids: HashSet<_> = store.inputs().expenses.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_additional_income_updates() {
        let mut store = memory_store();
        store.add_additional_income("Side gig", "200", Frequency::Monthly);
        let id = store.inputs().additional_incomes[0].id;

        store.update_additional_income(id, IncomeField::Frequency(Frequency::Weekly));
        store.update_additional_income(id, IncomeField::Amount("100".into()));
        assert_eq!(store.summary().monthly_income, Money::from_dollars(433));

        store.delete_additional_income(id);
        assert!(store.inputs().additional_incomes.is_empty());
    }

    #[test]
    fn test_variable_samples_drive_income() {
        let mut store = memory_store();
        store.set_income_mode(IncomeMode::Variable);
        store.add_variable_income_sample("2024-01", "1000");
        store.add_variable_income_sample("", "5000");
        let blank = store.inputs().variable_income_samples[1].id;
        assert_eq!(store.summary().monthly_income, Money::from_dollars(1000));

        store.update_variable_income_sample(blank, SampleField::Period("2024-02".into()));
        assert_eq!(store.summary().monthly_income, Money::from_dollars(3000));

        store.remove_variable_income_sample(blank);
        assert_eq!(store.summary().monthly_income, Money::from_dollars(1000));
    }

    #[test]
    fn test_monthly_goal_sets_yearly() {
        let mut store = memory_store();
        store.set_savings_goal_month("250");
        assert_eq!(store.inputs().savings_goal_year(), Money::from_dollars(3000));
        let store = reopen(store);
        assert_eq!(store.inputs().savings_goal_month(), Money::from_dollars(250));
    }

    #[test]
    fn test_corrupt_data_falls_back_to_defaults() {
        let mut backend = MemoryKeyValueStore::new();
        backend.set_item(keys::BUDGET_DATA, r#"{"biweeklyPaycheck": 2000}"#).unwrap();
        backend.set_item(keys::EXPENSES, "{not json").unwrap();

        let store = BudgetInputStore::open(backend);
        assert!(store.inputs().is_empty());
    }

    #[test]
    fn test_edits_after_corrupt_load_survive_reload() {
        let mut backend = MemoryKeyValueStore::new();
        backend.set_item(keys::BUDGET_DATA, "{not json").unwrap();
        backend
            .set_item(keys::EXPENSES, r#"[{"id": 1, "name": "Old", "amount": 50}]"#)
            .unwrap();

        let mut store = BudgetInputStore::open(backend);
        assert!(store.inputs().is_empty());
        store.add_expense("Rent", "1400");

        let store = reopen(store);
        assert_eq!(store.inputs().expenses.len(), 1);
        assert_eq!(store.inputs().expenses[0].name, "Rent");
        assert_eq!(store.inputs().expenses[0].amount, Money::from_dollars(1400));
    }

    #[test]
    fn test_legacy_records_are_read_leniently() {
        let mut backend = MemoryKeyValueStore::new();
        backend
            .set_item(keys::BUDGET_DATA, r#"{"biweeklyPaycheck": "", "savingsGoalYear": "2400"}"#)
            .unwrap();
        backend
            .set_item(
                keys::EXPENSES,
                r#"[{"id": 1700000000000, "category": "", "amount": "", "frequency": "monthly"}]"#,
            )
            .unwrap();
        backend
            .set_item(
                keys::ADDITIONAL_INCOMES,
                r#"[{"id": 1, "name": "Gig", "amount": 100, "frequency": "daily"}]"#,
            )
            .unwrap();

        let store = BudgetInputStore::open(backend);
        let inputs = store.inputs();
        assert!(inputs.biweekly_paycheck.is_zero());
        assert_eq!(inputs.savings_goal_year(), Money::from_dollars(2400));
        assert_eq!(inputs.savings_goal_month(), Money::from_dollars(200));
        assert_eq!(inputs.expenses.len(), 1);
        assert_eq!(
            inputs.additional_incomes[0].frequency,
            Frequency::Unrecognized("daily".into())
        );
        assert_eq!(inputs.income_mode, IncomeMode::Fixed);

        // Rewriting the record keeps the frequency string it came with
        let mut store = store;
        store.update_additional_income(IncomeId::from_raw(1), IncomeField::Name("Gig work".into()));
        let saved = store.backend().get_item(keys::ADDITIONAL_INCOMES).unwrap().unwrap();
        assert!(saved.contains(r#""frequency":"daily""#));
    }

    #[test]
    fn test_duplicate_persisted_ids_are_reassigned() {
        let mut backend = MemoryKeyValueStore::new();
        backend
            .set_item(
                keys::EXPENSES,
                r#"[{"id": 5, "name": "A", "amount": 1}, {"id": 5, "name": "B", "amount": 2}]"#,
            )
            .unwrap();

        let store = BudgetInputStore::open(backend);
        let expenses = &store.inputs().expenses;
        assert_eq!(expenses[0].id, ExpenseId::from_raw(5));
        assert_ne!(expenses[1].id, expenses[0].id);
        assert_eq!(expenses[1].name, "B");
    }

    #[test]
    fn test_negative_persisted_amounts_are_clamped() {
        let mut backend = MemoryKeyValueStore::new();
        backend
            .set_item(keys::SUBSCRIPTIONS, r#"[{"id": 1, "name": "Odd", "amount": -9}]"#)
            .unwrap();

        let store = BudgetInputStore::open(backend);
        assert!(store.inputs().subscriptions[0].amount.is_zero());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store = BudgetInputStore::open(MemoryKeyValueStore::with_quota(64));
        store.set_income("1000");
        for i in 0..10 {
            store.add_expense(format!("Expense number {}", i), "10");
        }

        // In memory everything is there even though the quota rejected writes
        assert_eq!(store.inputs().expenses.len(), 10);
        assert_eq!(store.summary().total_monthly_expenses, Money::from_dollars(100));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = memory_store();
        store.set_income("1500");
        store.add_expense("Rent", "900");
        store.reset();

        assert!(store.inputs().is_empty());
        assert!(store.backend().is_empty());
        assert!(reopen(store).inputs().is_empty());
    }

    #[test]
    fn test_persisted_layout() {
        let mut store = memory_store();
        store.set_income("2000");
        store.set_savings_goal_year("1200");
        store.add_expense("Rent", "1000.50");

        let budget_data = store.backend().get_item(keys::BUDGET_DATA).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&budget_data).unwrap();
        assert_eq!(value["biweeklyPaycheck"], serde_json::json!(2000));
        assert_eq!(value["savingsGoalYear"], serde_json::json!(1200));
        assert_eq!(value["savingsGoalMonth"], serde_json::json!(100));
        assert_eq!(value["incomeType"], serde_json::json!("fixed"));

        let expenses = store.backend().get_item(keys::EXPENSES).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&expenses).unwrap();
        assert_eq!(value[0]["name"], serde_json::json!("Rent"));
        assert_eq!(value[0]["amount"], serde_json::json!(1000.5));
        assert!(value[0]["id"].is_u64());
    }

    #[test]
    fn test_file_backend_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");

        {
            let mut store = BudgetInputStore::open(FileKeyValueStore::new(&data_dir));
            store.set_income("1800");
            store.add_expense("Utilities", "210.40");
        }

        let store = BudgetInputStore::open(FileKeyValueStore::new(&data_dir));
        assert_eq!(store.inputs().biweekly_paycheck, Money::from_dollars(1800));
        assert_eq!(store.inputs().expenses[0].amount, Money::from_cents(210_40));
    }
}
