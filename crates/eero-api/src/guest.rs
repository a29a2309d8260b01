// Guest network endpoints
//
// One guest network per network. Request bodies are never logged since they
// may carry the password.

use reqwest::Method;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::client::EeroClient;
use crate::devices::fields;
use crate::error::Error;
use crate::models::ApiGuestNetwork;

impl EeroClient {
    /// `GET /networks/{network}/guestnetwork`
    pub async fn guest_network(&self, network_id: &str) -> Result<ApiGuestNetwork, Error> {
        self.get(&format!("/networks/{network_id}/guestnetwork"))
            .await
    }

    /// `PUT /networks/{network}/guestnetwork` with a partial map.
    pub async fn update_guest_network(
        &self,
        network_id: &str,
        updates: Map<String, Value>,
    ) -> Result<(), Error> {
        debug!(network_id, fields = ?updates.keys().collect::<Vec<_>>(), "updating guest network");
        self.execute(
            Method::PUT,
            &format!("/networks/{network_id}/guestnetwork"),
            Some(&Value::Object(updates)),
        )
        .await
    }

    pub async fn enable_guest_network(&self, network_id: &str, enabled: bool) -> Result<(), Error> {
        self.update_guest_network(network_id, fields(json!({ "enabled": enabled })))
            .await
    }

    pub async fn set_guest_network_password(
        &self,
        network_id: &str,
        password: &str,
    ) -> Result<(), Error> {
        self.update_guest_network(network_id, fields(json!({ "password": password })))
            .await
    }
}
