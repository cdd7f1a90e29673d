// SRM WebAPI response types
//
// Models for the vendor JSON payloads, mapped 1:1 from the wire shapes.
// Fields use `#[serde(default)]` liberally because the router is
// inconsistent about field presence across firmware versions and `info`
// detail levels. Types that are written back to the router (Wi-Fi profiles)
// carry a flattened catch-all map so unknown vendor fields round-trip.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Response envelope ────────────────────────────────────────────────

/// Vendor response envelope.
///
/// ```json
/// { "success": true, "data": { ... } }
/// { "success": false, "error": { "code": 400 } }
/// ```
///
/// `success` is optional so its absence (an invalid response) stays
/// distinguishable from a failed parse.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

// ── WAN ──────────────────────────────────────────────────────────────

/// WAN connection status for one address family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpWanConnection {
    /// `"normal"` when the connection is up.
    #[serde(default)]
    pub conn_status: String,
    #[serde(default)]
    pub ifname: String,
    /// External IP address.
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub pppoe: bool,
    #[serde(default)]
    pub vpn_profile: Option<String>,
}

/// WAN connection status from `SYNO.Core.Network.Router.ConnectionStatus`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WanConnection {
    pub ipv4: IpWanConnection,
    pub ipv6: IpWanConnection,
}

// ── Traffic ──────────────────────────────────────────────────────────

/// Per-protocol traffic inside a [`TrafficRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolTraffic {
    /// Bytes downloaded.
    #[serde(default)]
    pub download: i64,
    #[serde(default)]
    pub download_packets: i64,
    /// Layer-7 protocol identifier; see
    /// [`protocol_label`](crate::api::labels::protocol_label).
    #[serde(default)]
    pub protocol: i64,
    /// Bytes uploaded.
    #[serde(default)]
    pub upload: i64,
    #[serde(default)]
    pub upload_packets: i64,
}

/// One record period inside [`DeviceTraffic`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficRecord {
    #[serde(default)]
    pub download: i64,
    #[serde(default)]
    pub download_packets: i64,
    #[serde(default)]
    pub protocollist: Vec<ProtocolTraffic>,
    /// Timestamp of the record period.
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub upload: i64,
    #[serde(default)]
    pub upload_packets: i64,
}

/// Network traffic for one device from `SYNO.Core.NGFW.Traffic`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceTraffic {
    /// Device MAC address.
    #[serde(rename = "deviceID")]
    pub device_id: String,
    #[serde(default)]
    pub download: i64,
    #[serde(default)]
    pub download_packets: i64,
    #[serde(default)]
    pub recs: Vec<TrafficRecord>,
    #[serde(default, rename = "timeEnd")]
    pub time_end: Option<i64>,
    #[serde(default, rename = "timeStart")]
    pub time_start: Option<i64>,
    #[serde(default)]
    pub timezone: Option<i64>,
    #[serde(default)]
    pub upload: i64,
    #[serde(default)]
    pub upload_packets: i64,
}

// ── Utilization ──────────────────────────────────────────────────────

/// Receive/transmit rates for one interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceUtilization {
    pub device: String,
    /// Receive rate in bytes.
    #[serde(default)]
    pub rx: i64,
    /// Transmit rate in bytes.
    #[serde(default)]
    pub tx: i64,
}

/// Snapshot from `SYNO.Core.System.Utilization` with `resource=["network"]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkUtilization {
    #[serde(default)]
    pub network: Vec<InterfaceUtilization>,
    #[serde(default)]
    pub time: i64,
}

// ── Device ───────────────────────────────────────────────────────────

/// Known device from `SYNO.Core.Network.NSM.Device`.
///
/// Which fields the router fills in depends on the requested `info` level
/// and on whether the device is wireless, so almost everything is optional
/// or defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub mac: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub ip_addr: String,
    #[serde(default)]
    pub ip6_addr: String,
    /// Device type reported for the UI icon.
    #[serde(default)]
    pub dev_type: String,
    /// Wi-Fi band (`"2.4G"`, `"5G"`) for wireless devices.
    #[serde(default)]
    pub band: Option<String>,
    /// `"wifi"` or `"ethernet"`.
    #[serde(default)]
    pub connection: Option<String>,
    /// Current Wi-Fi rate in Mbps.
    #[serde(default)]
    pub current_rate: Option<i64>,
    /// Max Wi-Fi rate in Mbps.
    #[serde(default)]
    pub max_rate: Option<i64>,
    #[serde(default)]
    pub is_baned: bool,
    #[serde(default)]
    pub is_beamforming_on: bool,
    /// Connected to the guest Wi-Fi network.
    #[serde(default)]
    pub is_guest: bool,
    #[serde(default)]
    pub is_high_qos: bool,
    #[serde(default)]
    pub is_low_qos: bool,
    #[serde(default)]
    pub is_manual_dev_type: bool,
    #[serde(default)]
    pub is_manual_hostname: bool,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub is_qos: bool,
    #[serde(default)]
    pub is_wireless: bool,
    /// Mesh node the device is connected to, `-1` when not meshed.
    #[serde(default)]
    pub mesh_node_id: Option<i64>,
    #[serde(default)]
    pub mesh_node_name: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub rate_quality: Option<String>,
    /// Signal strength in percent for wireless devices.
    #[serde(default)]
    pub signalstrength: Option<i64>,
    #[serde(default, rename = "transferRXRate")]
    pub transfer_rx_rate: Option<i64>,
    #[serde(default, rename = "transferTXRate")]
    pub transfer_tx_rate: Option<i64>,
    #[serde(default)]
    pub wifi_network_id: Option<i64>,
    #[serde(default)]
    pub wifi_profile_name: Option<String>,
    #[serde(default)]
    pub wifi_ssid: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// ── Mesh ─────────────────────────────────────────────────────────────

/// Capability flags nested inside [`MeshNode`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshNodeCapability {
    #[serde(default)]
    pub support_custom_topology: bool,
    #[serde(default)]
    pub support_force_ethernet: bool,
}

/// Mesh node from `SYNO.Mesh.Node.List`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshNode {
    pub name: String,
    pub node_id: i64,
    #[serde(default)]
    pub band: String,
    #[serde(default)]
    pub blinking: bool,
    #[serde(default)]
    pub capability: MeshNodeCapability,
    #[serde(default)]
    pub connected_devices: i64,
    /// Current receive rate in bytes.
    #[serde(default)]
    pub current_rate_rx: i64,
    /// Current transmit rate in bytes.
    #[serde(default)]
    pub current_rate_tx: i64,
    #[serde(default)]
    pub custom_topology_mode: String,
    #[serde(default)]
    pub is_dual_band: bool,
    #[serde(default)]
    pub is_wireless: bool,
    #[serde(default)]
    pub led_mode: String,
    /// `"online"` is the normal value.
    #[serde(default)]
    pub network_status: String,
    #[serde(default)]
    pub node_status: String,
    #[serde(default)]
    pub node_status_msg: String,
    #[serde(default)]
    pub parent_node_id: i64,
    #[serde(default)]
    pub signalstrength: i64,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// ── Smart WAN ────────────────────────────────────────────────────────

/// Gateway entry from `SYNO.Core.Network.SmartWAN.Gateway`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartWanGateway {
    #[serde(default)]
    pub displayname: String,
    #[serde(default)]
    pub enable_priority_check: bool,
    #[serde(default)]
    pub failed_site_name: String,
    #[serde(default)]
    pub failed_site_num: i64,
    /// Access IP address (the ISP modem, for example).
    #[serde(default)]
    pub gatewayip: String,
    /// Physical interface name (`"eth0"`, `"eth2"`, ...).
    #[serde(default)]
    pub ifname: String,
    /// `"enabled"` or `"disabled"`.
    #[serde(default)]
    pub netstatus: String,
    #[serde(default)]
    pub ping_failed_cnt: i64,
    #[serde(default)]
    pub ping_succ_cnt: i64,
}

/// Smart WAN configuration from `SYNO.Core.Network.SmartWAN.General`.
///
/// Interface names and mode are kept as strings because they round-trip
/// from the router; [`set_smart_wan`](crate::SrmClient::set_smart_wan)
/// validates them against the fixed vendor sets before writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartWanConfig {
    /// Load-balancing weight ratio, 0–100.
    #[serde(default)]
    pub dw_weight_ratio: u32,
    #[serde(default)]
    pub smartwan_failback: bool,
    pub smartwan_ifname_1: String,
    pub smartwan_ifname_2: String,
    pub smartwan_mode: String,
}

// ── Policy routes ────────────────────────────────────────────────────

/// Policy route rule from `SYNO.Core.Network.Router.PolicyRoute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRoute {
    /// `"Enabled"` or `"Disabled"`.
    #[serde(default)]
    pub active: String,
    #[serde(default)]
    pub displayname: String,
    #[serde(default)]
    pub dst_subnet: String,
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub ifname: String,
    #[serde(default)]
    pub src_subnet: String,
}

// ── Wake-on-LAN ──────────────────────────────────────────────────────

/// Wake-on-LAN entry from `SYNO.Core.Network.WOL`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WakeOnLanDevice {
    pub mac: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub dsm_version: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub support_wol: bool,
}

// ── QoS ──────────────────────────────────────────────────────────────

/// Download/upload bandwidth pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QosBandwidth {
    #[serde(default)]
    pub download: i64,
    #[serde(default)]
    pub upload: i64,
}

/// Per-protocol override inside a [`QosRule`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QosProtocol {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub guaranteed: QosBandwidth,
    #[serde(default)]
    pub maximum: QosBandwidth,
    #[serde(default)]
    pub priority: i64,
    /// Layer-7 protocol identifier; see
    /// [`protocol_label`](crate::api::labels::protocol_label).
    #[serde(rename = "protocolID")]
    pub protocol_id: i64,
}

/// Per-device QoS rule from `SYNO.Core.NGFW.QoS.Rules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QosRule {
    /// Device MAC address.
    #[serde(rename = "deviceID")]
    pub device_id: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub ip_addr: Option<String>,
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub guaranteed: QosBandwidth,
    #[serde(default)]
    pub maximum: QosBandwidth,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub protocollist: Vec<QosProtocol>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// ── Access control ───────────────────────────────────────────────────

/// Time spent breakdown, in minutes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimespentDetail {
    #[serde(default)]
    pub normal: i64,
    #[serde(default)]
    pub reward: i64,
}

/// Time quota state nested inside [`AccessControlGroup`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timespent {
    #[serde(default)]
    pub has_quota: bool,
    #[serde(default)]
    pub quota: i64,
    #[serde(default)]
    pub total_spent: TimespentDetail,
}

/// Access control group from `SYNO.SafeAccess.AccessControl.ConfigGroup`.
///
/// `online` and `online_device_count` are not vendor fields: they are
/// derived from a device lookup when
/// [`get_access_control_groups`](crate::SrmClient::get_access_control_groups)
/// is asked for online status, and stay `None` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessControlGroup {
    #[serde(default)]
    pub config_group_id: i64,
    #[serde(default)]
    pub device_count: i64,
    /// MAC addresses of the member devices.
    #[serde(default)]
    pub devices: Vec<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pause: bool,
    #[serde(default)]
    pub profile_id: i64,
    #[serde(default)]
    pub timespent: Option<Timespent>,
    /// Derived: any member device currently online.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online: Option<bool>,
    /// Derived: number of member devices currently online.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_device_count: Option<usize>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// ── Wi-Fi ────────────────────────────────────────────────────────────

/// One radio entry inside a [`WifiProfile`].
///
/// Only the fields the client touches are typed; everything else stays in
/// `extra` so a profile can be written back exactly as the router sent it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WifiRadio {
    pub ssid: String,
    pub enable: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Wi-Fi profile from `SYNO.Wifi.Network.Setting`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WifiProfile {
    #[serde(default)]
    pub radio_list: Vec<WifiRadio>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
