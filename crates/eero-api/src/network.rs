// Network-level operations

use reqwest::Method;
use tracing::debug;

use crate::client::EeroClient;
use crate::error::Error;

impl EeroClient {
    /// Reboot every node on the network.
    ///
    /// `POST /networks/{network}/reboot`
    pub async fn reboot_network(&self, network_id: &str) -> Result<(), Error> {
        debug!(network_id, "rebooting network");
        self.execute(Method::POST, &format!("/networks/{network_id}/reboot"), None)
            .await
    }
}
