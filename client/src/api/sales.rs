//! Sales ledger endpoint

use reqwest::Method;
use shared::SaleEvent;

use super::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// Every recorded sale for the current admin
    pub async fn list_sales(&self) -> ClientResult<Vec<SaleEvent>> {
        let path = "/api/sales";
        let builder = self.request(Method::GET, path);
        self.send_json(builder, path).await
    }
}
