// Device inventory endpoints
//
// Known-device listing via `SYNO.Core.Network.NSM.Device` and mesh node
// listing via `SYNO.Mesh.Node.List`.

use serde::Deserialize;
use tracing::debug;

use crate::api::client::{ENTRY_PATH, SrmClient};
use crate::api::models::{Device, MeshNode};
use crate::error::Error;

/// Connection-type filter for device listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionType {
    /// Every device the router knows about.
    #[default]
    All,
    /// Wi-Fi devices only.
    Wireless,
}

impl ConnectionType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Wireless => "wireless",
        }
    }
}

#[derive(Deserialize)]
struct DeviceList {
    devices: Vec<Device>,
}

#[derive(Deserialize)]
struct MeshNodeList {
    nodes: Vec<MeshNode>,
}

impl SrmClient {
    /// List devices known to the router, with IP, signal, and status info.
    ///
    /// `info` selects the detail level the router reports (`"basic"`,
    /// `"online"`, ...); `None` leaves the router default.
    pub async fn get_devices(
        &self,
        info: Option<&str>,
        conntype: ConnectionType,
    ) -> Result<Vec<Device>, Error> {
        let mut params = vec![
            ("method", "get".to_owned()),
            ("version", "5".to_owned()),
            ("conntype", conntype.as_str().to_owned()),
            ("api", "SYNO.Core.Network.NSM.Device".to_owned()),
        ];
        if let Some(info) = info {
            params.push(("info", info.to_owned()));
        }
        debug!(conntype = conntype.as_str(), ?info, "listing devices");
        let list: DeviceList = self.fetch(ENTRY_PATH, &params).await?;
        Ok(list.devices)
    }

    /// List devices currently connected over Wi-Fi, with rate and signal
    /// info.
    pub async fn get_wifi_devices(&self) -> Result<Vec<Device>, Error> {
        self.get_devices(Some("online"), ConnectionType::Wireless)
            .await
    }

    /// List mesh nodes with current rate, status, and connected-device
    /// counts.
    pub async fn get_mesh_nodes(&self) -> Result<Vec<MeshNode>, Error> {
        let params = [
            ("method", "get".to_owned()),
            ("version", "4".to_owned()),
            ("api", "SYNO.Mesh.Node.List".to_owned()),
        ];
        let list: MeshNodeList = self.fetch(ENTRY_PATH, &params).await?;
        Ok(list.nodes)
    }
}
