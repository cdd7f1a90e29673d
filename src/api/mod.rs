// SRM WebAPI client modules
//
// Hand-written client for the two SRM endpoints: `/webapi/auth.cgi` for the
// session lifecycle and `/webapi/entry.cgi` for everything else. Every
// response is wrapped in the vendor's `{ success, data?, error? }` envelope,
// which `client` strips before the endpoint modules see it.

pub mod access_control;
pub mod auth;
pub mod client;
pub mod devices;
pub mod labels;
pub mod models;
pub mod network;
pub mod qos;
pub mod smart_wan;
pub mod wifi;
pub mod wol;

pub use client::{AUTH_PATH, ENTRY_PATH, SrmClient};
