//! Grammar constants and the built-in device table

/// Separator between the prefix (series + device) and the identifier
pub const SEPARATOR: char = '-';

/// Separator as a byte, for byte-level searches
pub const SEPARATOR_BYTE: u8 = b'-';

/// Length of the series segment
pub const SERIES_LEN: usize = 1;

/// Length of a device token
pub const DEVICE_LEN: usize = 3;

/// Length of the identifier segment
pub const IDENTIFIER_LEN: usize = 4;

/// Length of the prefix segment (series + device)
pub const PREFIX_LEN: usize = SERIES_LEN + DEVICE_LEN;

/// Length of an unhyphenated code, e.g. `ABTU1234`
pub const COMPACT_LEN: usize = PREFIX_LEN + IDENTIFIER_LEN;

/// Length of a canonical code, e.g. `ABTU-1234`
pub const CANONICAL_LEN: usize = COMPACT_LEN + 1;

/// HBX Controls device table: (token, description, model)
///
/// Order is significant; it is the order `allowed_devices` reports.
pub const HBX_DEVICES: &[(&str, &str, &str)] = &[
    ("BTU", "Energy Sensor", "BTU-0100"),
    ("ENG", "Energy Sensor", "ENG-0100"),
    ("CPU", "Boiler Controller", "CPU-0600"),
    ("ECO", "Geothermal Controller", "ECO-0600"),
    ("FLO", "Flow Sensor", "FLO-0100"),
    ("FLW", "Flow Sensor", "FLW-0100"),
    ("PRE", "Pressure Sensor", "PRE-0100"),
    ("PRS", "Pressure Sensor", "PRS-0100"),
    ("RTR", "Access Point", "RTR-0100"),
    ("SNO", "Snow-melt Controller", "SNO-0600"),
    ("SUN", "Solar Controller", "SESF-3221"),
    ("SGL", "Single-zone Thermostat", "SGL-0600"),
    ("THM", "Thermostat", "THM-0600"),
    ("ZON", "Zone Controller", "ZON-0600"),
];

/// Check whether `s` has the shape of a device token (three ASCII letters)
pub const fn is_device_token(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != DEVICE_LEN {
        return false;
    }
    let mut i = 0;
    while i < DEVICE_LEN {
        if !bytes[i].is_ascii_alphabetic() {
            return false;
        }
        i += 1;
    }
    true
}

/// Check whether `s` has the shape of an identifier (four ASCII digits)
pub const fn is_identifier(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != IDENTIFIER_LEN {
        return false;
    }
    let mut i = 0;
    while i < IDENTIFIER_LEN {
        if !bytes[i].is_ascii_digit() {
            return false;
        }
        i += 1;
    }
    true
}
