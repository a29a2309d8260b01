// Profile endpoints
//
// Profiles group devices for parental controls. There is no add/remove
// primitive for membership: the full ordered device list is written back.

use reqwest::Method;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::client::EeroClient;
use crate::devices::fields;
use crate::error::Error;
use crate::models::{ApiProfile, DeviceLink};

impl EeroClient {
    /// List profiles, in server order.
    ///
    /// `GET /networks/{network}/profiles`
    pub async fn profiles(&self, network_id: &str) -> Result<Vec<ApiProfile>, Error> {
        debug!(network_id, "listing profiles");
        self.get(&format!("/networks/{network_id}/profiles")).await
    }

    /// Fetch one profile including its ordered device membership.
    ///
    /// `GET /networks/{network}/profiles/{profile}`
    pub async fn profile(&self, network_id: &str, profile_id: &str) -> Result<ApiProfile, Error> {
        self.get(&format!("/networks/{network_id}/profiles/{profile_id}"))
            .await
    }

    /// Same as [`profile`](Self::profile) but untyped, for inspection output.
    pub async fn profile_raw(&self, network_id: &str, profile_id: &str) -> Result<Value, Error> {
        self.get(&format!("/networks/{network_id}/profiles/{profile_id}"))
            .await
    }

    /// `PUT /networks/{network}/profiles/{profile}` with a partial map.
    pub async fn update_profile(
        &self,
        network_id: &str,
        profile_id: &str,
        updates: Map<String, Value>,
    ) -> Result<(), Error> {
        debug!(profile_id, fields = ?updates.keys().collect::<Vec<_>>(), "updating profile");
        self.execute(
            Method::PUT,
            &format!("/networks/{network_id}/profiles/{profile_id}"),
            Some(&Value::Object(updates)),
        )
        .await
    }

    /// Replace the profile's membership with `device_urls`, in order.
    ///
    /// Body: `{"devices": [{"url": "..."}, ...]}`
    pub async fn set_profile_devices(
        &self,
        network_id: &str,
        profile_id: &str,
        device_urls: &[String],
    ) -> Result<(), Error> {
        let devices: Vec<DeviceLink> = device_urls
            .iter()
            .map(|url| DeviceLink { url: url.clone() })
            .collect();
        self.update_profile(network_id, profile_id, fields(json!({ "devices": devices })))
            .await
    }

    pub async fn pause_profile(
        &self,
        network_id: &str,
        profile_id: &str,
        paused: bool,
    ) -> Result<(), Error> {
        self.update_profile(network_id, profile_id, fields(json!({ "paused": paused })))
            .await
    }
}
