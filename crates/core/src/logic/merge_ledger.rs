use serde_json::{json, Value};

use crate::prelude::*;

const AMENDMENTS_ENTRY_TYPE: &str = "Amendments";

/// Merge generated account roots and the enabled amendment list into a
/// ledger template.
///
/// The single `Amendments` entry of `ledger.accountState` has its
/// `Amendments` field replaced with `amendment_ids` (its other fields are
/// kept), every other entry is carried over unchanged in order, and the
/// account roots are appended at the end in input order.
///
/// Replacing the amendment list is idempotent; appending accounts is not.
/// Merging twice with the same account list duplicates the entries.
pub fn merge_ledger(
    template: Value,
    account_roots: &[AccountRoot],
    amendment_ids: &[String],
) -> Result<Value> {
    let mut ledger = template;
    let account_state = ledger
        .get("ledger")
        .and_then(|l| l.get("accountState"))
        .and_then(Value::as_array)
        .ok_or(MalformedTemplate::MissingAccountState)?;

    match count_amendment_entries(account_state) {
        1 => {}
        0 => return Err(MalformedTemplate::MissingAmendmentsEntry.into()),
        count => return Err(MalformedTemplate::DuplicateAmendmentsEntry { count }.into()),
    }

    let mut new_state = Vec::with_capacity(account_state.len() + account_roots.len());
    for entry in account_state {
        let mut entry = entry.clone();
        if is_amendments_entry(&entry) {
            entry["Amendments"] = json!(amendment_ids);
        }
        new_state.push(entry);
    }
    for account_root in account_roots {
        let entry = serde_json::to_value(account_root)
            .expect("AccountRoot always serializes to a JSON object");
        new_state.push(entry);
    }

    ledger["ledger"]["accountState"] = Value::Array(new_state);
    Ok(ledger)
}

fn is_amendments_entry(entry: &Value) -> bool {
    entry.get("LedgerEntryType").and_then(Value::as_str) == Some(AMENDMENTS_ENTRY_TYPE)
}

fn count_amendment_entries(account_state: &[Value]) -> usize {
    account_state.iter().filter(|e| is_amendments_entry(e)).count()
}
