// ── Session facade ──
//
// The single entry point consumers use. Owns the API client and the config
// store, checks authentication, bootstraps the active network once, and
// composes resolve-then-mutate flows. Every call is sequential.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use eero_api::EeroClient;
use secrecy::SecretString;
use serde_json::Value;
use tokio::sync::OnceCell;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::{ConfigStore, SessionConfig, StoredConfig};
use crate::error::CoreError;
use crate::filter::{DeviceFilter, FilterOutcome, ResolvedFilter};
use crate::membership::{with_member, without_member};
use crate::model::{
    Account, Device, GuestNetwork, MacAddress, MeshNode, Network, Profile, Reservation,
};
use crate::monitor::{Monitor, MonitorEvent};
use crate::resolve::resolve;

/// Outcome of [`Session::status`].
#[derive(Debug, Clone)]
pub enum AuthStatus {
    NotLoggedIn,
    TokenInvalid,
    /// Token accepted. `account` is `None` if the follow-up fetch failed.
    Authenticated { account: Option<Account> },
}

/// Authenticated view of one eero account and its active network.
pub struct Session {
    client: EeroClient,
    store: Arc<dyn ConfigStore>,
    network_id: OnceCell<String>,
}

impl Session {
    /// Build a session from runtime settings and whatever the store holds.
    /// No request is made.
    pub fn new(config: &SessionConfig, store: Arc<dyn ConfigStore>) -> Result<Self, CoreError> {
        let stored = store.load()?;
        let client = EeroClient::new(&config.transport(), stored.token)?;
        let network_id = match stored.network_id.filter(|id| !id.is_empty()) {
            Some(id) => OnceCell::new_with(Some(id)),
            None => OnceCell::new(),
        };
        Ok(Self {
            client,
            store,
            network_id,
        })
    }

    // ── Authentication ───────────────────────────────────────────────

    /// Ask the vendor to send a verification code. Returns the unconfirmed
    /// token to pass to [`verify`](Self::verify).
    pub async fn login(&self, identity: &str) -> Result<SecretString, CoreError> {
        let identity = identity.trim();
        if identity.is_empty() {
            return Err(CoreError::validation("email or phone number is required"));
        }
        Ok(self.client.login(identity).await?)
    }

    /// Confirm the login, persist the token, then pick the account's first
    /// network. The network lookup is best effort: the token is saved even
    /// if it fails, and `None` is returned.
    pub async fn verify(
        &self,
        token: SecretString,
        code: &str,
    ) -> Result<Option<Network>, CoreError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CoreError::validation("verification code is required"));
        }
        self.client.login_verify(token.clone(), code).await?;

        let mut stored = StoredConfig {
            token: Some(token),
            network_id: None,
        };
        let network = match self.client.account().await {
            Ok(account) => Account::from(account).networks.into_iter().next(),
            Err(e) => {
                warn!(error = %e, "logged in, but the account could not be fetched");
                None
            }
        };
        stored.network_id = network.as_ref().map(|n| n.id.to_string());
        self.store.save(&stored)?;
        info!(network = ?network.as_ref().map(|n| &n.name), "login verified");
        Ok(network)
    }

    /// Forget the stored token and network.
    pub fn logout(&self) -> Result<(), CoreError> {
        self.store.clear()?;
        self.client.clear_token();
        info!("logged out");
        Ok(())
    }

    pub async fn status(&self) -> AuthStatus {
        if !self.client.has_token() {
            return AuthStatus::NotLoggedIn;
        }
        if !self.client.validate_token().await {
            return AuthStatus::TokenInvalid;
        }
        let account = match self.client.account().await {
            Ok(account) => Some(Account::from(account)),
            Err(e) => {
                warn!(error = %e, "account fetch failed after token validation");
                None
            }
        };
        AuthStatus::Authenticated { account }
    }

    /// Fail unless a token is stored and the vendor still accepts it.
    pub async fn ensure_auth(&self) -> Result<(), CoreError> {
        if !self.client.has_token() {
            return Err(CoreError::NotLoggedIn);
        }
        if !self.client.validate_token().await {
            return Err(CoreError::TokenInvalid);
        }
        Ok(())
    }

    /// The active network ID. Checks authentication, then falls back to the
    /// account's first network and remembers it in the store.
    pub async fn network_id(&self) -> Result<String, CoreError> {
        self.ensure_auth().await?;
        let id = self
            .network_id
            .get_or_try_init(|| self.bootstrap_network())
            .await?;
        Ok(id.clone())
    }

    async fn bootstrap_network(&self) -> Result<String, CoreError> {
        let account = Account::from(self.client.account().await?);
        let network = account.networks.into_iter().next().ok_or(CoreError::NoNetworks)?;
        self.store.save_network_id(network.id.as_str())?;
        info!(network = %network.name, id = %network.id, "using first network");
        Ok(network.id.to_string())
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub async fn account(&self) -> Result<Account, CoreError> {
        self.ensure_auth().await?;
        Ok(Account::from(self.client.account().await?))
    }

    pub async fn devices(&self) -> Result<Vec<Device>, CoreError> {
        let net = self.network_id().await?;
        self.fetch_devices(&net).await
    }

    /// List devices matching `filter`, with the unfiltered total and a
    /// description of the active predicates.
    pub async fn list_devices(&self, filter: &DeviceFilter) -> Result<FilterOutcome, CoreError> {
        let net = self.network_id().await?;
        let devices = self.fetch_devices(&net).await?;
        let resolved = self.resolve_filter(&net, filter).await;
        Ok(resolved.apply(devices))
    }

    pub async fn profiles(&self) -> Result<Vec<Profile>, CoreError> {
        let net = self.network_id().await?;
        self.fetch_profiles(&net).await
    }

    pub async fn eeros(&self) -> Result<Vec<MeshNode>, CoreError> {
        let net = self.network_id().await?;
        self.fetch_eeros(&net).await
    }

    pub async fn guest_network(&self) -> Result<GuestNetwork, CoreError> {
        let net = self.network_id().await?;
        Ok(GuestNetwork::from(self.client.guest_network(&net).await?))
    }

    pub async fn reservations(&self) -> Result<Vec<Reservation>, CoreError> {
        let net = self.network_id().await?;
        self.fetch_reservations(&net).await
    }

    // ── Inspection (raw vendor JSON) ─────────────────────────────────

    pub async fn inspect_device(&self, query: &str) -> Result<Value, CoreError> {
        let net = self.network_id().await?;
        let devices = self.fetch_devices(&net).await?;
        let device = resolve(&devices, query)?;
        Ok(self.client.device_raw(&net, device.id.as_str()).await?)
    }

    pub async fn inspect_profile(&self, query: &str) -> Result<Value, CoreError> {
        let net = self.network_id().await?;
        let profiles = self.fetch_profiles(&net).await?;
        let profile = resolve(&profiles, query)?;
        Ok(self.client.profile_raw(&net, profile.id.as_str()).await?)
    }

    pub async fn inspect_eero(&self, query: &str) -> Result<Value, CoreError> {
        let net = self.network_id().await?;
        let eeros = self.fetch_eeros(&net).await?;
        let eero = resolve(&eeros, query)?;
        Ok(self.client.eero_raw(eero.id.as_str()).await?)
    }

    pub async fn inspect_reservation(&self, query: &str) -> Result<Value, CoreError> {
        let net = self.network_id().await?;
        let reservations = self.fetch_reservations(&net).await?;
        let reservation = resolve(&reservations, query)?;
        Ok(self
            .client
            .reservation_raw(&net, reservation.id.as_str())
            .await?)
    }

    // ── Device mutations ─────────────────────────────────────────────

    /// Resolve `query` and pause or unpause it. Returns the device as it
    /// was before the change.
    pub async fn set_device_paused(&self, query: &str, paused: bool) -> Result<Device, CoreError> {
        let (net, device) = self.resolve_device(query).await?;
        self.client
            .pause_device(&net, device.id.as_str(), paused)
            .await?;
        info!(device = %device.id, paused, "device updated");
        Ok(device)
    }

    pub async fn set_device_blocked(
        &self,
        query: &str,
        blocked: bool,
    ) -> Result<Device, CoreError> {
        let (net, device) = self.resolve_device(query).await?;
        self.client
            .block_device(&net, device.id.as_str(), blocked)
            .await?;
        info!(device = %device.id, blocked, "device updated");
        Ok(device)
    }

    pub async fn rename_device(&self, query: &str, nickname: &str) -> Result<Device, CoreError> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(CoreError::validation("nickname must not be empty"));
        }
        let (net, device) = self.resolve_device(query).await?;
        self.client
            .set_device_nickname(&net, device.id.as_str(), nickname)
            .await?;
        info!(device = %device.id, nickname, "device renamed");
        Ok(device)
    }

    // ── Profile mutations ────────────────────────────────────────────

    pub async fn set_profile_paused(
        &self,
        query: &str,
        paused: bool,
    ) -> Result<Profile, CoreError> {
        let net = self.network_id().await?;
        let profiles = self.fetch_profiles(&net).await?;
        let profile = resolve(&profiles, query)?.clone();
        self.client
            .pause_profile(&net, profile.id.as_str(), paused)
            .await?;
        info!(profile = %profile.id, paused, "profile updated");
        Ok(profile)
    }

    /// Add a device to a profile by rewriting the profile's full device list.
    ///
    /// This is a read-modify-write: a membership change made in the vendor
    /// app between the read and the write is overwritten. Adding a device
    /// that is already a member is a `Conflict`.
    pub async fn add_device_to_profile(
        &self,
        profile_query: &str,
        device_query: &str,
    ) -> Result<(Profile, Device), CoreError> {
        let (net, profile, device) = self.resolve_membership(profile_query, device_query).await?;
        let next = with_member(&profile.device_urls, &device.url).ok_or_else(|| {
            CoreError::Conflict {
                message: format!("device {} is already in profile {}", device.id, profile.name),
            }
        })?;
        self.client
            .set_profile_devices(&net, profile.id.as_str(), &next)
            .await?;
        info!(profile = %profile.id, device = %device.id, "device added to profile");
        Ok((profile, device))
    }

    /// Remove a device from a profile. Same read-modify-write caveat as
    /// [`add_device_to_profile`](Self::add_device_to_profile); removing a
    /// non-member is a `Conflict`.
    pub async fn remove_device_from_profile(
        &self,
        profile_query: &str,
        device_query: &str,
    ) -> Result<(Profile, Device), CoreError> {
        let (net, profile, device) = self.resolve_membership(profile_query, device_query).await?;
        let next = without_member(&profile.device_urls, &device.url).ok_or_else(|| {
            CoreError::Conflict {
                message: format!("device {} is not in profile {}", device.id, profile.name),
            }
        })?;
        self.client
            .set_profile_devices(&net, profile.id.as_str(), &next)
            .await?;
        info!(profile = %profile.id, device = %device.id, "device removed from profile");
        Ok((profile, device))
    }

    /// Resolve both sides and fetch the profile's current membership.
    async fn resolve_membership(
        &self,
        profile_query: &str,
        device_query: &str,
    ) -> Result<(String, Profile, Device), CoreError> {
        let net = self.network_id().await?;
        let profiles = self.fetch_profiles(&net).await?;
        let profile_id = resolve(&profiles, profile_query)?.id.clone();
        let devices = self.fetch_devices(&net).await?;
        let device = resolve(&devices, device_query)?.clone();
        let profile = Profile::from(self.client.profile(&net, profile_id.as_str()).await?);
        debug!(members = profile.device_urls.len(), "profile membership loaded");
        Ok((net, profile, device))
    }

    // ── Mesh, guest network, reservations ────────────────────────────

    pub async fn reboot_eero(&self, query: &str) -> Result<MeshNode, CoreError> {
        let net = self.network_id().await?;
        let eeros = self.fetch_eeros(&net).await?;
        let eero = resolve(&eeros, query)?.clone();
        self.client.reboot_eero(eero.id.as_str()).await?;
        info!(eero = %eero.id, "eero reboot requested");
        Ok(eero)
    }

    pub async fn set_guest_enabled(&self, enabled: bool) -> Result<(), CoreError> {
        let net = self.network_id().await?;
        self.client.enable_guest_network(&net, enabled).await?;
        info!(enabled, "guest network updated");
        Ok(())
    }

    pub async fn set_guest_password(&self, password: &str) -> Result<(), CoreError> {
        if password.is_empty() {
            return Err(CoreError::validation("guest network password must not be empty"));
        }
        let net = self.network_id().await?;
        self.client.set_guest_network_password(&net, password).await?;
        info!("guest network password updated");
        Ok(())
    }

    /// Create a DHCP reservation. The MAC is sent in colon-separated form.
    pub async fn add_reservation(
        &self,
        mac: &str,
        ip: &str,
        description: &str,
    ) -> Result<(MacAddress, IpAddr), CoreError> {
        let mac = MacAddress::parse(mac.trim())
            .ok_or_else(|| CoreError::validation(format!("invalid MAC address: {mac}")))?;
        let ip: IpAddr = ip
            .trim()
            .parse()
            .map_err(|_| CoreError::validation(format!("invalid IP address: {ip}")))?;
        let net = self.network_id().await?;
        self.client
            .create_reservation(&net, &ip.to_string(), mac.as_str(), description)
            .await?;
        info!(%mac, %ip, "reservation created");
        Ok((mac, ip))
    }

    pub async fn remove_reservation(&self, query: &str) -> Result<Reservation, CoreError> {
        let net = self.network_id().await?;
        let reservations = self.fetch_reservations(&net).await?;
        let reservation = resolve(&reservations, query)?.clone();
        self.client
            .delete_reservation(&net, reservation.id.as_str())
            .await?;
        info!(reservation = %reservation.id, "reservation deleted");
        Ok(reservation)
    }

    pub async fn reboot_network(&self) -> Result<(), CoreError> {
        let net = self.network_id().await?;
        self.client.reboot_network(&net).await?;
        info!(network = %net, "network reboot requested");
        Ok(())
    }

    // ── Monitoring ───────────────────────────────────────────────────

    /// Poll the device listing every `interval` until `cancel` fires,
    /// passing each change (and each failed poll) to `sink`. The profile
    /// predicate is resolved once, before the first poll.
    pub async fn monitor<S>(
        &self,
        filter: &DeviceFilter,
        interval: Duration,
        cancel: CancellationToken,
        sink: S,
    ) -> Result<(), CoreError>
    where
        S: FnMut(MonitorEvent),
    {
        if interval.is_zero() {
            return Err(CoreError::validation("monitor interval must be greater than zero"));
        }
        let net = self.network_id().await?;
        let resolved = self.resolve_filter(&net, filter).await;
        info!(interval_secs = interval.as_secs(), "monitoring devices");

        let net = net.as_str();
        Monitor::new(resolved)
            .run(interval, cancel, move || self.fetch_devices(net), sink)
            .await;
        Ok(())
    }

    // ── Helpers ──────────────────────────────────────────────────────

    async fn resolve_device(&self, query: &str) -> Result<(String, Device), CoreError> {
        let net = self.network_id().await?;
        let devices = self.fetch_devices(&net).await?;
        let device = resolve(&devices, query)?.clone();
        Ok((net, device))
    }

    /// Bind the profile predicate. A failed profile fetch degrades to the
    /// raw-string comparison instead of failing the listing.
    async fn resolve_filter(&self, net: &str, filter: &DeviceFilter) -> ResolvedFilter {
        if !filter.needs_profiles() {
            return filter.resolve(&[]);
        }
        match self.fetch_profiles(net).await {
            Ok(profiles) => filter.resolve(&profiles),
            Err(e) => {
                warn!(error = %e, "could not load profiles for filter");
                filter.resolve(&[])
            }
        }
    }

    async fn fetch_devices(&self, net: &str) -> Result<Vec<Device>, CoreError> {
        let devices = self.client.devices(net).await?;
        Ok(devices.into_iter().map(Device::from).collect())
    }

    async fn fetch_profiles(&self, net: &str) -> Result<Vec<Profile>, CoreError> {
        let profiles = self.client.profiles(net).await?;
        Ok(profiles.into_iter().map(Profile::from).collect())
    }

    async fn fetch_eeros(&self, net: &str) -> Result<Vec<MeshNode>, CoreError> {
        let eeros = self.client.eeros(net).await?;
        Ok(eeros.into_iter().map(MeshNode::from).collect())
    }

    async fn fetch_reservations(&self, net: &str) -> Result<Vec<Reservation>, CoreError> {
        let reservations = self.client.reservations(net).await?;
        Ok(reservations.into_iter().map(Reservation::from).collect())
    }
}
