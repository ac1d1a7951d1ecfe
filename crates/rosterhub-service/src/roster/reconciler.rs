//! Sync planning — computes the operations that converge the stored
//! record set to an uploaded roster.

use std::collections::HashSet;

use rosterhub_entity::record::{RecordDraft, SyncOp, SyncPlan};

/// Plans the convergence of the stored record set to the uploaded rows.
///
/// Each uploaded row becomes an update when its email is already stored
/// (or already appeared earlier in the same upload) and an insert
/// otherwise, so a duplicated email within one upload resolves to its
/// last row. Stored emails absent from the upload are planned for
/// deletion. Operations preserve upload row order; deletions are sorted
/// so the plan is deterministic for a given input.
pub fn plan_sync(existing: &HashSet<String>, rows: Vec<RecordDraft>) -> SyncPlan {
    let mut seen: HashSet<String> = HashSet::with_capacity(rows.len());
    let mut ops = Vec::with_capacity(rows.len());

    for draft in rows {
        let stored = existing.contains(&draft.email) || seen.contains(&draft.email);
        seen.insert(draft.email.clone());
        ops.push(if stored {
            SyncOp::Update(draft)
        } else {
            SyncOp::Insert(draft)
        });
    }

    let mut deletes: Vec<String> = existing
        .iter()
        .filter(|email| !seen.contains(*email))
        .cloned()
        .collect();
    deletes.sort();

    SyncPlan { ops, deletes }
}
