// Network status endpoints
//
// WAN connection status, per-device traffic, interface utilization, and
// policy routes.

use serde::Deserialize;
use tracing::debug;

use crate::api::client::{ENTRY_PATH, SrmClient};
use crate::api::models::{DeviceTraffic, NetworkUtilization, PolicyRoute, WanConnection};
use crate::error::Error;

/// Aggregation interval for traffic reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrafficInterval {
    #[default]
    Live,
    Day,
    Week,
    Month,
}

impl TrafficInterval {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

#[derive(Deserialize)]
struct PolicyRouteList {
    rules: Vec<PolicyRoute>,
}

impl SrmClient {
    /// Retrieve WAN connection status (state, IP, interface name) for both
    /// address families.
    pub async fn get_wan_connection_status(&self) -> Result<WanConnection, Error> {
        let params = [
            ("method", "get".to_owned()),
            ("version", "1".to_owned()),
            ("api", "SYNO.Core.Network.Router.ConnectionStatus".to_owned()),
        ];
        self.fetch(ENTRY_PATH, &params).await
    }

    /// Whether the WAN link is up on either address family.
    pub async fn get_wan_status(&self) -> Result<bool, Error> {
        let status = self.get_wan_connection_status().await?;
        Ok(status.ipv4.conn_status == "normal" || status.ipv6.conn_status == "normal")
    }

    /// Retrieve traffic by device over the given interval.
    pub async fn get_traffic(
        &self,
        interval: TrafficInterval,
    ) -> Result<Vec<DeviceTraffic>, Error> {
        let params = [
            ("method", "get".to_owned()),
            ("version", "1".to_owned()),
            ("mode", "net".to_owned()),
            ("interval", interval.as_str().to_owned()),
            ("api", "SYNO.Core.NGFW.Traffic".to_owned()),
        ];
        debug!(interval = interval.as_str(), "fetching traffic");
        self.fetch(ENTRY_PATH, &params).await
    }

    /// Retrieve receive/transmit rates per network interface.
    pub async fn get_network_utilization(&self) -> Result<NetworkUtilization, Error> {
        let params = [
            ("method", "get".to_owned()),
            ("version", "1".to_owned()),
            ("resource", serde_json::to_string(&["network"])?),
            ("api", "SYNO.Core.System.Utilization".to_owned()),
        ];
        self.fetch(ENTRY_PATH, &params).await
    }

    /// Retrieve IPv4 policy routes.
    pub async fn get_policy_routes(&self) -> Result<Vec<PolicyRoute>, Error> {
        let params = [
            ("method", "get".to_owned()),
            ("version", "1".to_owned()),
            ("api", "SYNO.Core.Network.Router.PolicyRoute".to_owned()),
            ("type", "ipv4".to_owned()),
        ];
        let list: PolicyRouteList = self.fetch(ENTRY_PATH, &params).await?;
        Ok(list.rules)
    }

    /// Replace the IPv4 policy routes.
    ///
    /// The router expects the complete rule set, not a delta.
    pub async fn set_policy_routes(&self, rules: &[PolicyRoute]) -> Result<(), Error> {
        let params = [
            ("method", "set".to_owned()),
            ("version", "1".to_owned()),
            ("api", "SYNO.Core.Network.Router.PolicyRoute".to_owned()),
            ("type", "ipv4".to_owned()),
            ("rules", serde_json::to_string(rules)?),
        ];
        self.submit(ENTRY_PATH, &params).await
    }
}
