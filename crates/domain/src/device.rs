//! Pin device HTTP API surface
//!
//! Endpoint paths, the fields each endpoint must return, and the settings
//! payload posted during the settings check.

use serde::{Deserialize, Serialize};

use crate::validation::{FieldSpec, JsonKind, Schema};

/// Web UI root.
pub const ROOT_PATH: &str = "/";
/// PWA manifest served by the web UI.
pub const MANIFEST_PATH: &str = "/manifest.json";
/// Device, battery and WiFi status.
pub const STATUS_PATH: &str = "/api/status";
/// On-demand WiFi scan.
pub const WIFI_SCAN_PATH: &str = "/api/wifi/scan";
/// Installed plugins.
pub const PLUGINS_PATH: &str = "/api/plugins";
/// Device settings, readable with GET and writable with POST.
pub const SETTINGS_PATH: &str = "/api/settings";

/// Name of the bundled clock plugin.
pub const CLOCK_PLUGIN: &str = "clock";

/// Only the leading networks of a scan are inspected.
pub const SCANNED_NETWORKS_CHECKED: usize = 3;

const MANIFEST_FIELDS: &[FieldSpec] = &[
    FieldSpec::present("name"),
    FieldSpec::present("short_name"),
    FieldSpec::present("start_url"),
    FieldSpec::present("display"),
    FieldSpec::present("icons"),
];

const STATUS_FIELDS: &[FieldSpec] = &[
    FieldSpec::typed("device", JsonKind::Object),
    FieldSpec::typed("battery", JsonKind::Object),
    FieldSpec::typed("wifi", JsonKind::Object),
    FieldSpec::present("device.name"),
    FieldSpec::present("device.version"),
    FieldSpec::present("battery.percentage"),
    FieldSpec::present("battery.voltage"),
];

const NETWORK_FIELDS: &[FieldSpec] = &[
    FieldSpec::present("ssid"),
    FieldSpec::present("rssi"),
    FieldSpec::present("auth"),
];

const PLUGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::present("name"),
    FieldSpec::present("description"),
    FieldSpec::present("enabled"),
];

/// Fields a PWA manifest must declare.
pub const MANIFEST_SCHEMA: Schema = Schema::new(MANIFEST_FIELDS);

/// Fields `/api/status` must return.
pub const STATUS_SCHEMA: Schema = Schema::new(STATUS_FIELDS);

/// Fields of each entry in a WiFi scan's `networks` list.
pub const NETWORK_SCHEMA: Schema = Schema::new(NETWORK_FIELDS);

/// Fields of each entry in the plugin list.
pub const PLUGIN_SCHEMA: Schema = Schema::new(PLUGIN_FIELDS);

/// Settings written by the settings check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    /// Display refresh interval in seconds.
    pub refresh_interval: u32,
    /// Whether power saving is enabled.
    pub power_save_mode: bool,
    /// Whether the backlight follows ambient light.
    pub auto_brightness: bool,
}

impl Default for SettingsUpdate {
    fn default() -> Self {
        Self {
            refresh_interval: 60,
            power_save_mode: true,
            auto_brightness: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_settings_payload_literal() {
        let value = serde_json::to_value(SettingsUpdate::default()).unwrap();
        assert_eq!(
            value,
            json!({"refresh_interval": 60, "power_save_mode": true, "auto_brightness": false})
        );
    }

    #[test]
    fn test_status_schema_reports_nested_field() {
        let body = json!({
            "device": {"name": "Pin", "version": "1.0.0"},
            "battery": {"percentage": 80},
            "wifi": {}
        });
        assert_eq!(
            STATUS_SCHEMA.validate(&body),
            Err(ValidationError::MissingField("battery.voltage".to_string()))
        );
    }

    #[test]
    fn test_manifest_schema_order() {
        let body = json!({"name": "Pin", "display": "standalone"});
        assert_eq!(
            MANIFEST_SCHEMA.validate(&body),
            Err(ValidationError::MissingField("short_name".to_string()))
        );
    }
}
