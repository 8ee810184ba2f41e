//! Visible rows of the inventory table

use std::cmp::Ordering;

use chrono::NaiveDate;

use super::{classify, SortDirection, SortKey, ViewState};
use crate::models::Medicine;

/// Compare two medicines on one column, ascending
fn compare_by(key: SortKey, a: &Medicine, b: &Medicine) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        // No expiry date sorts ahead of any date
        SortKey::ExpiryDate => a.expiry_date.cmp(&b.expiry_date),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
    }
}

/// Case-insensitive substring match on name or description
pub fn matches_search(medicine: &Medicine, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    medicine.name.to_lowercase().contains(&needle)
        || medicine.description.to_lowercase().contains(&needle)
}

/// Derive the rows to render from the current page of records.
///
/// Sorts the whole slice by the active column (stable, so equal keys keep
/// their original order), then keeps records that match both the search term
/// and the status filter. The server already paginated `records`; nothing is
/// sliced here.
pub fn derive_visible_rows<'a>(
    records: &'a [Medicine],
    state: &ViewState,
    today: NaiveDate,
) -> Vec<&'a Medicine> {
    let mut rows: Vec<&Medicine> = records.iter().collect();
    let key = state.sort.key;
    match state.sort.direction {
        SortDirection::Ascending => rows.sort_by(|a, b| compare_by(key, a, b)),
        SortDirection::Descending => rows.sort_by(|a, b| compare_by(key, b, a)),
    }

    rows.retain(|medicine| {
        matches_search(medicine, &state.search_term)
            && state.status_filter.matches(classify(medicine, today))
    });
    rows
}
