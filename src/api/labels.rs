// Fixed vendor lookup tables
//
// The WebAPI reports failures as small integer codes, and NGFW traffic
// records reference layer-7 protocols by identifier. Both tables are static
// vendor data with explicit fallbacks for unknown keys.

/// Resolve a WebAPI error code to its label.
///
/// Covers the common `SYNO.API` error codes. Endpoint-specific codes fall
/// through to `None` and are reported with the raw code and error payload.
pub fn error_label(code: i64) -> Option<&'static str> {
    match code {
        100 => Some("Unknown error"),
        101 => Some("Invalid parameters"),
        102 => Some("API does not exist"),
        103 => Some("Method does not exist"),
        104 => Some("This API version is not supported"),
        105 => Some("Insufficient user privilege"),
        106 => Some("Connection time out"),
        107 => Some("Multiple login detected"),
        117 => Some("Need manager rights for operation"),
        119 => Some("Missing SID"),
        400 => Some("Invalid credentials"),
        401 => Some("Account disabled"),
        402 => Some("Permission denied"),
        403 => Some("2-step verification code required"),
        404 => Some("Failed to authenticate 2-step verification code"),
        _ => None,
    }
}

/// Resolve an NGFW layer-7 protocol identifier to its display label.
///
/// Unknown identifiers resolve to `"Unknown"`.
pub fn protocol_label(id: i64) -> &'static str {
    match id {
        0 => "HTTP",
        1 => "HTTPS",
        2 => "DNS",
        3 => "FTP",
        4 => "SSH",
        5 => "Telnet",
        6 => "SMTP",
        7 => "POP3",
        8 => "IMAP",
        9 => "NTP",
        10 => "SNMP",
        11 => "LDAP",
        12 => "SMB",
        13 => "NFS",
        14 => "RDP",
        15 => "VNC",
        20 => "DHCP",
        21 => "IPsec",
        22 => "OpenVPN",
        23 => "PPTP",
        24 => "L2TP",
        30 => "BitTorrent",
        31 => "eMule",
        40 => "QUIC",
        41 => "STUN",
        100 => "SIP",
        101 => "RTP",
        102 => "RTSP",
        103 => "H.323",
        110 => "Skype",
        111 => "FaceTime",
        112 => "WhatsApp",
        113 => "Zoom",
        120 => "YouTube",
        121 => "Netflix",
        122 => "Spotify",
        123 => "Twitch",
        130 => "Facebook",
        131 => "Instagram",
        132 => "Twitter",
        140 => "Steam",
        141 => "Minecraft",
        142 => "Xbox Live",
        143 => "PlayStation Network",
        _ => "Unknown",
    }
}
