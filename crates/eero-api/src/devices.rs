// Device endpoints
//
// Listing, raw inspection and partial updates (pause, block, nickname).

use reqwest::Method;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::client::EeroClient;
use crate::error::Error;
use crate::models::ApiDevice;

impl EeroClient {
    /// List every device the network knows about, in server order.
    ///
    /// `GET /networks/{network}/devices`
    pub async fn devices(&self, network_id: &str) -> Result<Vec<ApiDevice>, Error> {
        debug!(network_id, "listing devices");
        self.get(&format!("/networks/{network_id}/devices")).await
    }

    /// Fetch one device as untyped JSON, for inspection output.
    ///
    /// `GET /networks/{network}/devices/{device}`
    pub async fn device_raw(&self, network_id: &str, device_id: &str) -> Result<Value, Error> {
        self.get(&format!("/networks/{network_id}/devices/{device_id}"))
            .await
    }

    /// Apply a partial update. The server merges; nothing is read first.
    ///
    /// `PUT /networks/{network}/devices/{device}`
    pub async fn update_device(
        &self,
        network_id: &str,
        device_id: &str,
        updates: Map<String, Value>,
    ) -> Result<(), Error> {
        debug!(device_id, fields = ?updates.keys().collect::<Vec<_>>(), "updating device");
        self.execute(
            Method::PUT,
            &format!("/networks/{network_id}/devices/{device_id}"),
            Some(&Value::Object(updates)),
        )
        .await
    }

    pub async fn pause_device(
        &self,
        network_id: &str,
        device_id: &str,
        paused: bool,
    ) -> Result<(), Error> {
        self.update_device(network_id, device_id, fields(json!({ "paused": paused })))
            .await
    }

    pub async fn block_device(
        &self,
        network_id: &str,
        device_id: &str,
        blocked: bool,
    ) -> Result<(), Error> {
        self.update_device(network_id, device_id, fields(json!({ "blocked": blocked })))
            .await
    }

    pub async fn set_device_nickname(
        &self,
        network_id: &str,
        device_id: &str,
        nickname: &str,
    ) -> Result<(), Error> {
        self.update_device(
            network_id,
            device_id,
            fields(json!({ "nickname": nickname })),
        )
        .await
    }
}

/// Turn a `json!({...})` literal into the field map updates take.
pub(crate) fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
