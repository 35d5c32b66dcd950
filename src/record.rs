//! Record building: merge the static and dynamic view of each method.
//!
//! The static signature wins whenever both sides exist; the two are not
//! reconciled. Documentation comes only from the static side, the contract
//! only from the dynamic side.

use crate::contract;
use crate::doc;
use crate::error::{PackError, Result};
use crate::model::*;

/// Build the record for one entry.
///
/// `Ok(None)` means the entry is dropped: its comment exists but tokenizes to
/// nothing. `index` is only used for error reporting.
pub fn build(entry: &MethodEntry, index: usize) -> Result<Option<MethodRecord>> {
    let description = match (&entry.static_method, &entry.dynamic_method) {
        (Some(st), _) => &st.description,
        (None, Some(dy)) => &dy.description,
        (None, None) => return Err(PackError::EmptyEntry { index }),
    };

    let documentation = match entry
        .static_method
        .as_ref()
        .and_then(|st| st.comment.as_deref())
    {
        Some(comment) if !comment.is_empty() => match doc::tokenize(comment) {
            Some(block) => Some(block),
            None => {
                tracing::info!(
                    method = %description.name,
                    owner = %description.owner.name(),
                    "skipping method with unusable documentation"
                );
                return Ok(None);
            }
        },
        _ => None,
    };

    Ok(Some(MethodRecord {
        description: description.clone(),
        documentation,
        contract: entry.dynamic_method.as_ref().map(contract::assemble),
    }))
}

/// Build the whole document in memory, in input order.
///
/// Fails on the first entry with neither side present, before anything is
/// written anywhere.
pub fn build_document(entries: &[MethodEntry]) -> Result<Document> {
    let mut doc = Document::default();
    for (index, entry) in entries.iter().enumerate() {
        match build(entry, index)? {
            Some(record) => doc.methods.push(record),
            None => doc.skipped += 1,
        }
    }
    tracing::debug!(
        methods = doc.methods.len(),
        skipped = doc.skipped,
        "built document"
    );
    Ok(doc)
}
