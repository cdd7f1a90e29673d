// Quality-of-Service endpoints

use serde::Deserialize;

use crate::api::client::{ENTRY_PATH, SrmClient};
use crate::api::models::QosRule;
use crate::error::Error;

#[derive(Deserialize)]
struct QosRuleList {
    rules: Vec<QosRule>,
}

impl SrmClient {
    /// Retrieve QoS rules by device (guaranteed/maximum bandwidth for
    /// upload and download, with per-protocol overrides).
    pub async fn get_qos(&self) -> Result<Vec<QosRule>, Error> {
        let params = [
            ("api", "SYNO.Core.NGFW.QoS.Rules".to_owned()),
            ("method", "get".to_owned()),
            ("version", "1".to_owned()),
        ];
        let list: QosRuleList = self.fetch(ENTRY_PATH, &params).await?;
        Ok(list.rules)
    }
}
