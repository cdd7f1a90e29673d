// Wake-on-LAN endpoints
//
// `SYNO.Core.Network.WOL`: configured-device listing, registration, and
// the wake call itself. MAC and hostname parameters are JSON-string
// encoded per vendor convention.

use tracing::debug;

use crate::api::client::{ENTRY_PATH, SrmClient};
use crate::api::models::WakeOnLanDevice;
use crate::error::Error;

impl SrmClient {
    /// List devices with wake-on-LAN configured.
    pub async fn get_wake_on_lan_devices(&self) -> Result<Vec<WakeOnLanDevice>, Error> {
        let params = [
            ("api", "SYNO.Core.Network.WOL".to_owned()),
            ("method", "get_devices".to_owned()),
            ("version", "1".to_owned()),
            ("findhost", "false".to_owned()),
            ("client_list", serde_json::to_string::<[&str]>(&[])?),
        ];
        self.fetch(ENTRY_PATH, &params).await
    }

    /// Register wake-on-LAN for the device with the given MAC address.
    pub async fn add_wake_on_lan(&self, mac: &str, host: Option<&str>) -> Result<(), Error> {
        let mut params = vec![
            ("api", "SYNO.Core.Network.WOL".to_owned()),
            ("method", "add_device".to_owned()),
            ("version", "1".to_owned()),
            ("mac", serde_json::to_string(mac)?),
        ];
        if let Some(host) = host {
            params.push(("host", serde_json::to_string(host)?));
        }
        self.submit(ENTRY_PATH, &params).await
    }

    /// Wake a device from LAN.
    pub async fn wake_on_lan(&self, mac: &str) -> Result<(), Error> {
        let params = [
            ("api", "SYNO.Core.Network.WOL".to_owned()),
            ("method", "wake".to_owned()),
            ("version", "1".to_owned()),
            ("mac", serde_json::to_string(mac)?),
        ];
        debug!(mac, "sending wake-on-LAN");
        self.submit(ENTRY_PATH, &params).await
    }
}
