// srm-client: Async Rust client for the Synology Router Manager (SRM) WebAPI

pub mod api;
pub mod error;
pub mod transport;

pub use api::SrmClient;
pub use api::devices::ConnectionType;
pub use api::labels::{error_label, protocol_label};
pub use api::models;
pub use api::network::TrafficInterval;
pub use api::smart_wan::{GatewayType, SMART_WAN_INTERFACES, SMART_WAN_MODES};
pub use error::Error;
pub use transport::TransportConfig;
