// ── Device monitor ──
//
// Polls the device listing at a fixed interval, keeps the last snapshot per
// device ID, and reports only what changed. The first poll establishes the
// baseline and reports nothing. The loop stops when its cancellation token
// fires; fetch failures are reported and the loop keeps going.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::filter::ResolvedFilter;
use crate::model::{Device, ResourceId};

/// The fields whose change is worth reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceSnapshot {
    pub connected: bool,
    pub paused: bool,
    pub blocked: bool,
    pub ip: Option<String>,
}

impl From<&Device> for DeviceSnapshot {
    fn from(d: &Device) -> Self {
        Self {
            connected: d.connected,
            paused: d.paused,
            blocked: d.blocked,
            ip: d.ip.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Not seen on any earlier poll.
    New,
    /// Seen before with a different snapshot.
    Changed,
}

/// One reported device change.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceChange {
    pub at: DateTime<Utc>,
    pub kind: ChangeKind,
    pub device: Device,
    /// `None` for new devices.
    pub previous: Option<DeviceSnapshot>,
    pub current: DeviceSnapshot,
}

impl DeviceChange {
    /// Connectivity, pause or block state differs from the last poll.
    pub fn status_changed(&self) -> bool {
        self.previous.as_ref().is_none_or(|p| {
            p.connected != self.current.connected
                || p.paused != self.current.paused
                || p.blocked != self.current.blocked
        })
    }

    pub fn ip_changed(&self) -> bool {
        self.previous
            .as_ref()
            .is_none_or(|p| p.ip != self.current.ip)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MonitorEvent {
    Change(DeviceChange),
    FetchFailed { at: DateTime<Utc>, message: String },
}

/// Snapshot state carried between polls.
#[derive(Debug)]
pub struct Monitor {
    filter: ResolvedFilter,
    previous: HashMap<ResourceId, DeviceSnapshot>,
    baseline_taken: bool,
}

impl Monitor {
    pub fn new(filter: ResolvedFilter) -> Self {
        Self {
            filter,
            previous: HashMap::new(),
            baseline_taken: false,
        }
    }

    /// Number of devices with a stored snapshot.
    pub fn tracked(&self) -> usize {
        self.previous.len()
    }

    /// Diff one poll against the stored snapshots, then store the new ones.
    ///
    /// Devices that drop out of the listing (or out of the filter) keep
    /// their last snapshot and are not reported.
    pub fn observe(&mut self, devices: Vec<Device>, at: DateTime<Utc>) -> Vec<MonitorEvent> {
        let mut events = Vec::new();
        for device in devices.into_iter().filter(|d| self.filter.matches(d)) {
            let current = DeviceSnapshot::from(&device);
            let previous = self.previous.insert(device.id.clone(), current.clone());
            if !self.baseline_taken {
                continue;
            }
            let kind = match &previous {
                None => ChangeKind::New,
                Some(prev) if *prev != current => ChangeKind::Changed,
                Some(_) => continue,
            };
            events.push(MonitorEvent::Change(DeviceChange {
                at,
                kind,
                device,
                previous,
                current,
            }));
        }
        self.baseline_taken = true;
        events
    }

    /// Poll until `cancel` fires, feeding every event to `sink`.
    ///
    /// The first poll runs immediately. Every poll, failed or not, is
    /// followed by a full `interval` of sleep, so a slow fetch never
    /// shortens the gap to the next one.
    pub async fn run<F, Fut, S>(
        mut self,
        interval: Duration,
        cancel: CancellationToken,
        mut fetch: F,
        mut sink: S,
    ) where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Vec<Device>, CoreError>>,
        S: FnMut(MonitorEvent),
    {
        loop {
            let result = tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                result = fetch() => result,
            };
            match result {
                Ok(devices) => {
                    let events = self.observe(devices, Utc::now());
                    debug!(changes = events.len(), tracked = self.tracked(), "monitor tick");
                    events.into_iter().for_each(&mut sink);
                }
                Err(e) => {
                    warn!(error = %e, "monitor fetch failed");
                    sink(MonitorEvent::FetchFailed {
                        at: Utc::now(),
                        message: e.to_string(),
                    });
                }
            }

            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                () = tokio::time::sleep(interval) => {}
            }
        }
        debug!("monitor stopped");
    }
}
