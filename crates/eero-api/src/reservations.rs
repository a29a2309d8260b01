// DHCP reservation endpoints

use reqwest::Method;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::EeroClient;
use crate::error::Error;
use crate::models::ApiReservation;

impl EeroClient {
    /// `GET /networks/{network}/reservations`
    pub async fn reservations(&self, network_id: &str) -> Result<Vec<ApiReservation>, Error> {
        debug!(network_id, "listing reservations");
        self.get(&format!("/networks/{network_id}/reservations"))
            .await
    }

    /// `GET /networks/{network}/reservations/{reservation}`
    pub async fn reservation_raw(
        &self,
        network_id: &str,
        reservation_id: &str,
    ) -> Result<Value, Error> {
        self.get(&format!(
            "/networks/{network_id}/reservations/{reservation_id}"
        ))
        .await
    }

    /// `POST /networks/{network}/reservations` with `{ip, mac, description}`.
    pub async fn create_reservation(
        &self,
        network_id: &str,
        ip: &str,
        mac: &str,
        description: &str,
    ) -> Result<(), Error> {
        debug!(ip, mac, "creating reservation");
        self.execute(
            Method::POST,
            &format!("/networks/{network_id}/reservations"),
            Some(&json!({
                "ip": ip,
                "mac": mac,
                "description": description,
            })),
        )
        .await
    }

    /// `DELETE /networks/{network}/reservations/{reservation}`
    pub async fn delete_reservation(
        &self,
        network_id: &str,
        reservation_id: &str,
    ) -> Result<(), Error> {
        debug!(reservation_id, "deleting reservation");
        self.execute(
            Method::DELETE,
            &format!("/networks/{network_id}/reservations/{reservation_id}"),
            None,
        )
        .await
    }
}
