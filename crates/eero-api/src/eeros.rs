// Mesh node (eero) endpoints
//
// Listing is network-scoped; single-node reads and reboots live under
// the top-level `/eeros/{id}` path.

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::client::EeroClient;
use crate::error::Error;
use crate::models::ApiEero;

impl EeroClient {
    /// `GET /networks/{network}/eeros`
    pub async fn eeros(&self, network_id: &str) -> Result<Vec<ApiEero>, Error> {
        debug!(network_id, "listing eeros");
        self.get(&format!("/networks/{network_id}/eeros")).await
    }

    /// `GET /eeros/{eero}`
    pub async fn eero_raw(&self, eero_id: &str) -> Result<Value, Error> {
        self.get(&format!("/eeros/{eero_id}")).await
    }

    /// Reboot a single node.
    ///
    /// `POST /eeros/{eero}/reboot`
    pub async fn reboot_eero(&self, eero_id: &str) -> Result<(), Error> {
        debug!(eero_id, "rebooting eero");
        self.execute(Method::POST, &format!("/eeros/{eero_id}/reboot"), None)
            .await
    }
}
