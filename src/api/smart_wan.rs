// Smart WAN endpoints
//
// Dual-WAN balancing/failover between two named interfaces, via
// `SYNO.Core.Network.SmartWAN.*`. Configuration writes are validated
// locally against the fixed vendor sets before anything is sent.

use serde::Deserialize;
use tracing::debug;

use crate::api::client::{ENTRY_PATH, SrmClient};
use crate::api::models::{SmartWanConfig, SmartWanGateway};
use crate::error::Error;

/// Interface names the Smart WAN configuration accepts.
pub const SMART_WAN_INTERFACES: [&str; 10] = [
    "wan",
    "lan1",
    "3glte",
    "PPPoE-WAN",
    "PPPoE-LAN1",
    "vpn",
    "wifi24g",
    "wifi5g",
    "DS-Lite",
    "MapE",
];

/// Balancing modes the Smart WAN configuration accepts.
pub const SMART_WAN_MODES: [&str; 2] = ["failover", "loadbalancing_failover"];

/// Address family for gateway listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatewayType {
    #[default]
    Ipv4,
    Ipv6,
}

impl GatewayType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }
}

#[derive(Deserialize)]
struct GatewayList {
    list: Vec<SmartWanGateway>,
}

impl SrmClient {
    /// List Smart WAN gateways with reachability counters.
    pub async fn get_smart_wan_gateway(
        &self,
        gatewaytype: GatewayType,
    ) -> Result<Vec<SmartWanGateway>, Error> {
        let params = [
            ("api", "SYNO.Core.Network.SmartWAN.Gateway".to_owned()),
            ("method", "list".to_owned()),
            ("version", "1".to_owned()),
            ("gatewaytype", serde_json::to_string(gatewaytype.as_str())?),
        ];
        let list: GatewayList = self.fetch(ENTRY_PATH, &params).await?;
        Ok(list.list)
    }

    /// Retrieve the current Smart WAN configuration.
    pub async fn get_smart_wan(&self) -> Result<SmartWanConfig, Error> {
        let params = [
            ("api", "SYNO.Core.Network.SmartWAN.General".to_owned()),
            ("method", "get".to_owned()),
            ("version", "1".to_owned()),
        ];
        self.fetch(ENTRY_PATH, &params).await
    }

    /// Write the Smart WAN configuration and return the router's echo of it.
    ///
    /// Validated locally before any request is sent: the weight ratio must
    /// stay within 0–100, both interface names must come from
    /// [`SMART_WAN_INTERFACES`], and the mode from [`SMART_WAN_MODES`].
    /// Each violation fails with its own [`Error::Validation`] field.
    pub async fn set_smart_wan(&self, config: &SmartWanConfig) -> Result<SmartWanConfig, Error> {
        if config.dw_weight_ratio > 100 {
            return Err(Error::Validation { field: "dw_weight_ratio" });
        }
        if !SMART_WAN_INTERFACES.contains(&config.smartwan_ifname_1.as_str()) {
            return Err(Error::Validation { field: "smartwan_ifname_1" });
        }
        if !SMART_WAN_INTERFACES.contains(&config.smartwan_ifname_2.as_str()) {
            return Err(Error::Validation { field: "smartwan_ifname_2" });
        }
        if !SMART_WAN_MODES.contains(&config.smartwan_mode.as_str()) {
            return Err(Error::Validation { field: "smartwan_mode" });
        }

        let params = [
            ("api", "SYNO.Core.Network.SmartWAN.General".to_owned()),
            ("method", "set".to_owned()),
            ("version", "1".to_owned()),
            ("dw_weight_ratio", config.dw_weight_ratio.to_string()),
            ("smartwan_failback", config.smartwan_failback.to_string()),
            ("smartwan_ifname_1", config.smartwan_ifname_1.clone()),
            ("smartwan_ifname_2", config.smartwan_ifname_2.clone()),
            ("smartwan_mode", config.smartwan_mode.clone()),
        ];
        debug!(
            ifname_1 = %config.smartwan_ifname_1,
            ifname_2 = %config.smartwan_ifname_2,
            mode = %config.smartwan_mode,
            "writing Smart WAN configuration"
        );
        self.fetch(ENTRY_PATH, &params).await
    }

    /// Swap the two Smart WAN interfaces.
    ///
    /// Read-then-write with no atomicity guarantee against concurrent
    /// external changes; last write wins.
    pub async fn switch_smart_wan(&self) -> Result<SmartWanConfig, Error> {
        let mut config = self.get_smart_wan().await?;
        std::mem::swap(&mut config.smartwan_ifname_1, &mut config.smartwan_ifname_2);
        self.set_smart_wan(&config).await
    }
}
