//! Stock lookup for the billing dialog

use crate::models::Medicine;

/// Units in stock for the first medicine named exactly `medicine_name`, or 0
pub fn available_stock(medicine_name: &str, records: &[Medicine]) -> u32 {
    records
        .iter()
        .find(|medicine| medicine.name == medicine_name)
        .map_or(0, |medicine| medicine.quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn medicine(name: &str, quantity: u32) -> Medicine {
        Medicine {
            id: name.to_lowercase(),
            name: name.into(),
            description: String::new(),
            price: Decimal::TEN,
            quantity,
            expiry_date: None,
            expired: None,
        }
    }

    #[test]
    fn test_missing_medicine_has_no_stock() {
        let records = vec![medicine("Paracetamol", 12)];
        assert_eq!(available_stock("Aspirin", &records), 0);
        assert_eq!(available_stock("Aspirin", &[]), 0);
        assert_eq!(available_stock("", &records), 0);
    }

    #[test]
    fn test_exact_quantity_of_first_match() {
        let records = vec![
            medicine("Aspirin", 7),
            medicine("Paracetamol", 12),
            medicine("Aspirin", 99),
        ];
        assert_eq!(available_stock("Aspirin", &records), 7);
        assert_eq!(available_stock("aspirin", &records), 0);
    }
}
