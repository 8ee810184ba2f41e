//! Customer billing models

use serde::{Deserialize, Serialize};

/// Bill a customer for a medicine; the API emails the invoice to `user_email`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BillingRequest {
    pub medicine_name: String,
    pub quantity: u32,
    pub user_email: String,
}

impl Default for BillingRequest {
    fn default() -> Self {
        Self {
            medicine_name: String::new(),
            quantity: 1,
            user_email: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bill_is_one_unit() {
        let request = BillingRequest::default();
        assert_eq!(request.quantity, 1);
        assert!(request.medicine_name.is_empty());
    }

    #[test]
    fn test_wire_names() {
        let request = BillingRequest {
            medicine_name: "Aspirin".into(),
            quantity: 3,
            user_email: "customer@example.com".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["medicineName"], "Aspirin");
        assert_eq!(value["userEmail"], "customer@example.com");
    }
}
