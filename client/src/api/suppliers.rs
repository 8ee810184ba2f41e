//! Supplier endpoints

use reqwest::Method;
use shared::{validate_supplier_form, Supplier, SupplierForm};

use super::ApiClient;
use crate::error::ClientResult;

const SUPPLIERS: &str = "/api/suppliers";

impl ApiClient {
    pub async fn list_suppliers(&self) -> ClientResult<Vec<Supplier>> {
        let builder = self.request(Method::GET, SUPPLIERS);
        self.send_json(builder, SUPPLIERS).await
    }

    pub async fn create_supplier(&self, form: &SupplierForm) -> ClientResult<Supplier> {
        validate_supplier_form(form)?;
        let builder = self.request(Method::POST, SUPPLIERS).json(form);
        self.send_json(builder, SUPPLIERS).await
    }

    pub async fn delete_supplier(&self, id: &str) -> ClientResult<()> {
        let path = format!("{}/{}", SUPPLIERS, id);
        let builder = self.request(Method::DELETE, &path);
        self.send(builder, &path).await?;
        Ok(())
    }
}
