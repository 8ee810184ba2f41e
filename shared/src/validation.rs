//! Validation utilities for the Pharmacy Manager forms
//!
//! These run in the browser before a request is sent. The API repeats its own
//! checks; a failure here only saves a round trip.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{BillingRequest, Credentials, Medicine, MedicineForm, SupplierForm};
use crate::types::parse_date;
use crate::view::is_expired;

// ============================================================================
// Inventory Validations
// ============================================================================

/// Validate the add/edit medicine form
pub fn validate_medicine_form(form: &MedicineForm) -> Result<(), &'static str> {
    if form.name.trim().is_empty() {
        return Err("Medicine name is required");
    }
    if form.price < Decimal::ZERO {
        return Err("Price must be non-negative");
    }
    if !form.expiry_date.trim().is_empty() && parse_date(&form.expiry_date).is_none() {
        return Err("Expiry date must be in YYYY-MM-DD format");
    }
    Ok(())
}

/// Validate a direct sale of `quantity` units of `medicine`
pub fn validate_sell_quantity(
    quantity: u32,
    medicine: &Medicine,
    today: NaiveDate,
) -> Result<(), &'static str> {
    if is_expired(medicine, today) {
        return Err("Expired medicine cannot be sold");
    }
    if quantity < 1 {
        return Err("Quantity must be at least 1");
    }
    if quantity > medicine.quantity {
        return Err("Quantity exceeds available stock");
    }
    Ok(())
}

/// Validate a customer bill against the stock currently available
pub fn validate_billing_request(
    request: &BillingRequest,
    available_stock: u32,
) -> Result<(), &'static str> {
    if request.medicine_name.trim().is_empty() {
        return Err("Medicine name is required");
    }
    if request.quantity < 1 {
        return Err("Quantity must be at least 1");
    }
    if request.quantity > available_stock {
        return Err("Quantity exceeds available stock");
    }
    if request.user_email.trim().is_empty() {
        return Err("Email is required");
    }
    validate_email(&request.user_email)
}

// ============================================================================
// Supplier Validations
// ============================================================================

/// Validate the new supplier form
pub fn validate_supplier_form(form: &SupplierForm) -> Result<(), &'static str> {
    if form.name.trim().is_empty() {
        return Err("Supplier name is required");
    }
    if form.contact_number.trim().is_empty() {
        return Err("Contact number is required");
    }
    if !form.email.trim().is_empty() {
        validate_email(&form.email)?;
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if validator::validate_email(email.trim()) {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate login/registration credentials
pub fn validate_credentials(credentials: &Credentials) -> Result<(), &'static str> {
    if credentials.username.trim().is_empty() {
        return Err("Username is required");
    }
    if credentials.password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}
