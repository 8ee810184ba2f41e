//! Medicine inventory endpoints

use chrono::NaiveDate;
use reqwest::Method;
use shared::{
    validate_billing_request, validate_medicine_form, validate_sell_quantity, BillingRequest,
    Medicine, MedicineForm, Page, PageRequest,
};

use super::ApiClient;
use crate::error::ClientResult;

const MEDICINES: &str = "/api/medicines";

impl ApiClient {
    /// One page of the inventory; `total_pages` drives the page controls
    pub async fn list_medicines(&self, page: PageRequest) -> ClientResult<Page<Medicine>> {
        let builder = self.request(Method::GET, MEDICINES).query(&[
            ("paginate", "true".to_string()),
            ("page", page.page.to_string()),
            ("size", page.size.to_string()),
        ]);
        self.send_json(builder, MEDICINES).await
    }

    /// The whole inventory, unpaginated
    pub async fn list_all_medicines(&self) -> ClientResult<Vec<Medicine>> {
        let builder = self.request(Method::GET, MEDICINES);
        self.send_json(builder, MEDICINES).await
    }

    pub async fn get_medicine(&self, id: &str) -> ClientResult<Medicine> {
        let path = format!("{}/{}", MEDICINES, id);
        let builder = self.request(Method::GET, &path);
        self.send_json(builder, &path).await
    }

    pub async fn create_medicine(&self, form: &MedicineForm) -> ClientResult<Medicine> {
        validate_medicine_form(form)?;
        let builder = self.request(Method::POST, MEDICINES).json(form);
        self.send_json(builder, MEDICINES).await
    }

    pub async fn update_medicine(&self, id: &str, form: &MedicineForm) -> ClientResult<Medicine> {
        validate_medicine_form(form)?;
        let path = format!("{}/{}", MEDICINES, id);
        let builder = self.request(Method::PUT, &path).json(form);
        self.send_json(builder, &path).await
    }

    pub async fn delete_medicine(&self, id: &str) -> ClientResult<()> {
        let path = format!("{}/{}", MEDICINES, id);
        let builder = self.request(Method::DELETE, &path);
        self.send(builder, &path).await?;
        Ok(())
    }

    /// Sell `quantity` units of `medicine`; returns the updated record
    pub async fn sell_medicine(
        &self,
        medicine: &Medicine,
        quantity: u32,
        today: NaiveDate,
    ) -> ClientResult<Medicine> {
        validate_sell_quantity(quantity, medicine, today)?;
        let path = format!("{}/{}/sell", MEDICINES, medicine.id);
        let builder = self
            .request(Method::POST, &path)
            .query(&[("quantity", quantity)]);
        self.send_json(builder, &path).await
    }

    /// Bill a customer; the API deducts stock and emails the invoice
    pub async fn bill(&self, request: &BillingRequest, available_stock: u32) -> ClientResult<String> {
        validate_billing_request(request, available_stock)?;
        let path = format!("{}/bill", MEDICINES);
        let builder = self.request(Method::POST, &path).json(request);
        self.send_text(builder, &path).await
    }
}
