// Wi-Fi configuration endpoints
//
// Profile get/set via `SYNO.Wifi.Network.Setting`, plus the radio toggle,
// a read-modify-write that resubmits only the one profile it changed.

use serde::Deserialize;
use tracing::debug;

use crate::api::client::{ENTRY_PATH, SrmClient};
use crate::api::models::WifiProfile;
use crate::error::Error;

#[derive(Deserialize)]
struct WifiProfileList {
    profiles: Vec<WifiProfile>,
}

impl SrmClient {
    /// Retrieve all Wi-Fi profiles.
    pub async fn get_wifi_settings(&self) -> Result<Vec<WifiProfile>, Error> {
        let params = [
            ("api", "SYNO.Wifi.Network.Setting".to_owned()),
            ("method", "get".to_owned()),
            ("version", "1".to_owned()),
        ];
        let list: WifiProfileList = self.fetch(ENTRY_PATH, &params).await?;
        Ok(list.profiles)
    }

    /// Write Wi-Fi profiles.
    ///
    /// Only the profiles passed are touched; a partial set leaves the
    /// others as they are.
    pub async fn set_wifi_settings(&self, profiles: &[WifiProfile]) -> Result<(), Error> {
        let params = [
            ("api", "SYNO.Wifi.Network.Setting".to_owned()),
            ("method", "set".to_owned()),
            ("version", "1".to_owned()),
            ("profiles", serde_json::to_string(profiles)?),
        ];
        self.submit(ENTRY_PATH, &params).await
    }

    /// Toggle the radio(s) broadcasting the given SSID.
    ///
    /// Locates the profile whose radio list contains `ssid` (failing with
    /// [`Error::UnknownSsid`] when none does), flips the enabled flag on
    /// every matching radio entry within that profile, and writes back only
    /// that one profile.
    pub async fn switch_wifi_radio(&self, ssid: &str) -> Result<(), Error> {
        if ssid.is_empty() {
            return Err(Error::Validation { field: "ssid" });
        }

        let profiles = self.get_wifi_settings().await?;
        let mut profile = profiles
            .into_iter()
            .find(|profile| profile.radio_list.iter().any(|radio| radio.ssid == ssid))
            .ok_or_else(|| Error::UnknownSsid { ssid: ssid.to_owned() })?;

        for radio in profile
            .radio_list
            .iter_mut()
            .filter(|radio| radio.ssid == ssid)
        {
            radio.enable = !radio.enable;
            debug!(ssid, enable = radio.enable, "toggling Wi-Fi radio");
        }

        self.set_wifi_settings(std::slice::from_ref(&profile)).await
    }
}
