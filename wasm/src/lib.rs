//! WebAssembly module for the Pharmacy Manager
//!
//! Provides client-side computation for:
//! - Stock/expiry classification
//! - Inventory table rows (search, status filter, sort)
//! - Inventory table view state and pagination controls
//! - Sales statistics and billing stock lookups
//! - Form validation
//!
//! Structured values cross the boundary as JSON strings. Dates are
//! `YYYY-MM-DD`; when `today` is omitted the browser's local date is used.

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;
pub use shared::view::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    let message = format!("{}: {}", context, err);
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn parse_json<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| js_error(&format!("Invalid {} JSON", what), e))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error("Serialization failed", e))
}

/// Local calendar date of the browser
fn browser_today() -> Result<NaiveDate, JsValue> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .ok_or_else(|| JsValue::from_str("Browser returned an invalid date"))
}

fn resolve_today(today: Option<String>) -> Result<NaiveDate, JsValue> {
    match today {
        Some(raw) => parse_date(&raw).ok_or_else(|| js_error("Invalid date", raw)),
        None => browser_today(),
    }
}

// ============================================================================
// Inventory view-model
// ============================================================================

/// Classify a medicine: "Available", "Low Stock", "Out of Stock" or "Expired"
#[wasm_bindgen]
pub fn classify_medicine(medicine_json: &str, today: Option<String>) -> Result<String, JsValue> {
    let medicine: Medicine = parse_json(medicine_json, "medicine")?;
    let today = resolve_today(today)?;
    Ok(classify(&medicine, today).to_string())
}

/// Rows to render for the current page of records and view state
#[wasm_bindgen]
pub fn derive_visible_rows(
    records_json: &str,
    view_state_json: &str,
    today: Option<String>,
) -> Result<String, JsValue> {
    let records: Vec<Medicine> = parse_json(records_json, "records")?;
    let state: ViewState = parse_json(view_state_json, "view state")?;
    let today = resolve_today(today)?;
    to_json(&shared::view::derive_visible_rows(&records, &state, today))
}

/// Total revenue and per-medicine breakdown of a sales ledger
#[wasm_bindgen]
pub fn aggregate_sales(sales_json: &str) -> Result<String, JsValue> {
    let sales: Vec<SaleEvent> = parse_json(sales_json, "sales")?;
    to_json(&shared::view::aggregate_sales(&sales))
}

/// Stock available for billing `medicine_name`; call again whenever the
/// selected name or the records change
#[wasm_bindgen]
pub fn recompute_available_stock(medicine_name: &str, records_json: &str) -> Result<u32, JsValue> {
    let records: Vec<Medicine> = parse_json(records_json, "records")?;
    Ok(available_stock(medicine_name, &records))
}

// ============================================================================
// View state transitions
// ============================================================================

fn update_view_state(
    view_state_json: &str,
    update: impl FnOnce(&mut ViewState) -> Result<(), &'static str>,
) -> Result<String, JsValue> {
    let mut state: ViewState = parse_json(view_state_json, "view state")?;
    update(&mut state).map_err(|e| js_error("Invalid view state change", e))?;
    to_json(&state)
}

/// Initial view state (sorted by name, 8 rows per page)
#[wasm_bindgen]
pub fn default_view_state() -> Result<String, JsValue> {
    to_json(&ViewState::default())
}

#[wasm_bindgen]
pub fn view_state_set_search_term(view_state_json: &str, term: &str) -> Result<String, JsValue> {
    update_view_state(view_state_json, |state| {
        state.set_search_term(term);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn view_state_set_status_filter(view_state_json: &str, filter: &str) -> Result<String, JsValue> {
    update_view_state(view_state_json, |state| {
        state.set_status_filter(filter.parse()?);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn view_state_set_page_size(view_state_json: &str, size: u32) -> Result<String, JsValue> {
    update_view_state(view_state_json, |state| {
        state.set_page_size(PageSize::try_from(size)?);
        Ok(())
    })
}

/// Column header click
#[wasm_bindgen]
pub fn view_state_sort_by(view_state_json: &str, key: &str) -> Result<String, JsValue> {
    update_view_state(view_state_json, |state| {
        state.sort_by(key.parse()?);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn view_state_go_to_page(
    view_state_json: &str,
    index: u32,
    total_pages: u32,
) -> Result<String, JsValue> {
    update_view_state(view_state_json, |state| {
        state.go_to_page(index, total_pages);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn view_state_next_page(view_state_json: &str, total_pages: u32) -> Result<String, JsValue> {
    update_view_state(view_state_json, |state| {
        state.next_page(total_pages);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn view_state_previous_page(view_state_json: &str) -> Result<String, JsValue> {
    update_view_state(view_state_json, |state| {
        state.previous_page();
        Ok(())
    })
}

/// Pagination controls; `total_pages` is the value the API reported
#[wasm_bindgen]
pub fn page_controls(view_state_json: &str, total_pages: u32) -> Result<String, JsValue> {
    let state: ViewState = parse_json(view_state_json, "view state")?;
    to_json(&PageControls::new(&state, total_pages))
}

// ============================================================================
// Form validation (returns the error message, or nothing when valid)
// ============================================================================

fn validation_message<T: serde::de::DeserializeOwned>(
    json: &str,
    validate: impl FnOnce(&T) -> Result<(), &'static str>,
) -> Option<String> {
    match serde_json::from_str::<T>(json) {
        Ok(value) => validate(&value).err().map(str::to_string),
        Err(_) => Some("Please fill in all required fields".to_string()),
    }
}

#[wasm_bindgen]
pub fn check_medicine_form(form_json: &str) -> Option<String> {
    validation_message(form_json, validate_medicine_form)
}

#[wasm_bindgen]
pub fn check_sell_quantity(
    quantity: u32,
    medicine_json: &str,
    today: Option<String>,
) -> Result<Option<String>, JsValue> {
    let today = resolve_today(today)?;
    Ok(validation_message(medicine_json, |medicine: &Medicine| {
        validate_sell_quantity(quantity, medicine, today)
    }))
}

#[wasm_bindgen]
pub fn check_billing_request(request_json: &str, available_stock: u32) -> Option<String> {
    validation_message(request_json, |request: &BillingRequest| {
        validate_billing_request(request, available_stock)
    })
}

#[wasm_bindgen]
pub fn check_supplier_form(form_json: &str) -> Option<String> {
    validation_message(form_json, validate_supplier_form)
}

#[wasm_bindgen]
pub fn check_credentials(username: &str, password: &str) -> Option<String> {
    validate_credentials(&Credentials::new(username, password))
        .err()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODAY: &str = "2024-01-01";

    const RECORDS: &str = r#"[
        {"id":"1","name":"Paracetamol","description":"Pain relief","price":5,"quantity":40,"expiryDate":"2026-01-01"},
        {"id":"2","name":"Amoxicillin","description":null,"price":12,"quantity":0},
        {"id":"3","name":"Ibuprofen","description":"Anti-inflammatory","price":8,"quantity":6,"expiryDate":"2023-05-05"}
    ]"#;

    fn row_ids(json: &str) -> Vec<String> {
        let rows: Vec<Medicine> = serde_json::from_str(json).unwrap();
        rows.into_iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_classify_medicine() {
        let expired = r#"{"name":"A","price":1,"quantity":50,"expiryDate":"2000-01-01"}"#;
        assert_eq!(classify_medicine(expired, Some(TODAY.into())).unwrap(), "Expired");

        let low = r#"{"name":"B","price":1,"quantity":3}"#;
        assert_eq!(classify_medicine(low, Some(TODAY.into())).unwrap(), "Low Stock");
    }

    #[test]
    fn test_derive_visible_rows() {
        let state = default_view_state().unwrap();
        let rows = derive_visible_rows(RECORDS, &state, Some(TODAY.into())).unwrap();
        assert_eq!(row_ids(&rows), vec!["2", "3", "1"]);

        let state = view_state_set_status_filter(&state, "Expired").unwrap();
        let rows = derive_visible_rows(RECORDS, &state, Some(TODAY.into())).unwrap();
        assert_eq!(row_ids(&rows), vec!["3"]);
    }

    #[test]
    fn test_view_state_transitions() {
        let state = default_view_state().unwrap();
        let state = view_state_go_to_page(&state, 2, 4).unwrap();
        let state = view_state_sort_by(&state, "quantity").unwrap();
        let parsed: ViewState = serde_json::from_str(&state).unwrap();
        assert_eq!(parsed.page_index, 2);
        assert_eq!(parsed.sort.key, SortKey::Quantity);

        let state = view_state_set_page_size(&state, 30).unwrap();
        let parsed: ViewState = serde_json::from_str(&state).unwrap();
        assert_eq!(parsed.page_index, 0);
        assert_eq!(parsed.page_size, PageSize::Thirty);

        let state = view_state_next_page(&state, 2).unwrap();
        let state = view_state_next_page(&state, 2).unwrap();
        let controls: PageControls = serde_json::from_str(&page_controls(&state, 2).unwrap()).unwrap();
        assert_eq!(controls.current, 1);
        assert!(!controls.has_next);
        assert!(controls.visible);
    }

    #[test]
    fn test_aggregate_sales() {
        let sales = r#"[
            {"medicineName":"Paracetamol","quantity":2,"totalPrice":20},
            {"medicineName":"Paracetamol","quantity":3,"totalPrice":30}
        ]"#;
        let aggregate: SalesAggregate = serde_json::from_str(&aggregate_sales(sales).unwrap()).unwrap();
        assert_eq!(aggregate.by_medicine.len(), 1);
        assert_eq!(aggregate.by_medicine[0].total_qty, 5);

        let empty: SalesAggregate = serde_json::from_str(&aggregate_sales("[]").unwrap()).unwrap();
        assert!(empty.by_medicine.is_empty());
    }

    #[test]
    fn test_recompute_available_stock() {
        assert_eq!(recompute_available_stock("Paracetamol", RECORDS).unwrap(), 40);
        assert_eq!(recompute_available_stock("Aspirin", RECORDS).unwrap(), 0);
    }

    #[test]
    fn test_form_checks() {
        assert_eq!(check_credentials("admin", "secret"), None);
        assert_eq!(check_credentials("", "secret").as_deref(), Some("Username is required"));

        let bill = r#"{"medicineName":"Paracetamol","quantity":5,"userEmail":"a@example.com"}"#;
        assert_eq!(check_billing_request(bill, 40), None);
        assert!(check_billing_request(bill, 4).is_some());

        let supplier = r#"{"name":"MedSupply","contactNumber":"555-0100"}"#;
        assert_eq!(check_supplier_form(supplier), None);
        assert!(check_supplier_form("{}").is_some());

        let form = r#"{"name":"Zinc","price":2.5,"quantity":10,"expiryDate":"2027-01-01"}"#;
        assert_eq!(check_medicine_form(form), None);

        let expired = r#"{"name":"Old","price":1,"quantity":9,"expiryDate":"2020-01-01"}"#;
        assert_eq!(
            check_sell_quantity(1, expired, Some(TODAY.into())).unwrap().as_deref(),
            Some("Expired medicine cannot be sold")
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_today_defaults_to_browser_date() {
        let far_future = r#"{"name":"A","price":1,"quantity":50,"expiryDate":"2999-01-01"}"#;
        assert_eq!(classify_medicine(far_future, None).unwrap(), "Available");
    }

    #[wasm_bindgen_test]
    fn test_invalid_json_is_reported() {
        assert!(aggregate_sales("not json").is_err());
        assert!(classify_medicine("{}", Some("2024-01-01".into())).is_err());
    }
}
