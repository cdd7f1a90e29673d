// Access control (Safe Access) endpoints
//
// Config-group listing via `SYNO.SafeAccess.AccessControl.ConfigGroup`,
// optionally enriched with per-group online status derived from a device
// lookup. The lookup is best-effort: when it fails the groups are still
// returned, without the derived fields.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::warn;

use crate::api::client::{ENTRY_PATH, SrmClient};
use crate::api::devices::ConnectionType;
use crate::api::models::{AccessControlGroup, Device};
use crate::error::Error;

/// `additional` detail requested with every group listing.
const GROUP_ADDITIONAL: [&str; 2] = ["device", "total_timespent"];

#[derive(Deserialize)]
struct ConfigGroupList {
    config_groups: Vec<AccessControlGroup>,
}

impl SrmClient {
    /// Retrieve access control groups.
    ///
    /// With `online_status` a second request lists the known devices and
    /// fills in each group's `online` / `online_device_count` fields. A
    /// failure of that secondary lookup is logged as a warning and
    /// swallowed: the groups are returned without the derived fields and
    /// the call still succeeds.
    pub async fn get_access_control_groups(
        &self,
        online_status: bool,
    ) -> Result<Vec<AccessControlGroup>, Error> {
        let params = [
            ("api", "SYNO.SafeAccess.AccessControl.ConfigGroup".to_owned()),
            ("method", "get".to_owned()),
            ("version", "1".to_owned()),
            ("additional", serde_json::to_string(&GROUP_ADDITIONAL)?),
        ];
        let list: ConfigGroupList = self.fetch(ENTRY_PATH, &params).await?;
        let mut groups = list.config_groups;

        if online_status {
            match self.get_devices(Some("basic"), ConnectionType::All).await {
                Ok(devices) => compute_online_status(&mut groups, &devices),
                Err(error) => {
                    warn!(%error, "device lookup failed, returning groups without online status");
                }
            }
        }
        Ok(groups)
    }
}

/// Fill in the derived online fields from the device list.
fn compute_online_status(groups: &mut [AccessControlGroup], devices: &[Device]) {
    let online: HashSet<&str> = devices
        .iter()
        .filter(|device| device.is_online)
        .map(|device| device.mac.as_str())
        .collect();

    for group in groups {
        let count = group
            .devices
            .iter()
            .filter(|mac| online.contains(mac.as_str()))
            .count();
        group.online_device_count = Some(count);
        group.online = Some(count > 0);
    }
}
