//! WiFi scan check

use async_trait::async_trait;
use pin_probe_domain::device::{NETWORK_SCHEMA, SCANNED_NETWORKS_CHECKED, WIFI_SCAN_PATH};
use pin_probe_domain::validation::require_array;

use super::{Check, CheckContext};
use crate::error::ApplicationResult;

const NAME: &str = "WiFi Scan";

/// Checks that `/api/wifi/scan` returns a list of networks.
///
/// Uses the longer scan timeout; only the leading networks are inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct WifiScanCheck;

#[async_trait]
impl Check for WifiScanCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn run(&self, ctx: &mut CheckContext<'_>) -> ApplicationResult<bool> {
        let timeout = ctx.config().scan_timeout();
        let request = ctx.get_with_timeout(WIFI_SCAN_PATH, timeout)?;
        let Some(scan) = ctx.fetch_json(NAME, &request).await? else {
            return Ok(false);
        };

        let count = match require_array(&scan, "networks") {
            Ok(networks) => {
                let valid = NETWORK_SCHEMA.validate_items(networks, "networks", SCANNED_NETWORKS_CHECKED);
                if !ctx.require(NAME, valid) {
                    return Ok(false);
                }
                networks.len()
            }
            Err(error) => {
                ctx.fail(NAME, error.to_string());
                return Ok(false);
            }
        };

        ctx.pass(NAME, format!("Found {count} networks"));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockHttpClient, run_single};
    use pin_probe_domain::HttpMethod;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_single_network() {
        let body = r#"{"networks": [{"ssid":"A","rssi":-40,"auth":"WPA2"}]}"#;
        let http = MockHttpClient::new().respond(HttpMethod::Get, "/api/wifi/scan", 200, body);
        let (passed, log) = run_single(&WifiScanCheck, http).await;

        assert!(passed);
        assert_eq!(log.len(), 1);
        assert!(log.as_slice()[0].success);
        assert_eq!(log.as_slice()[0].message, "Found 1 networks");
    }

    #[tokio::test]
    async fn test_uses_scan_timeout() {
        let body = r#"{"networks": []}"#;
        let http = MockHttpClient::new().respond(HttpMethod::Get, "/api/wifi/scan", 200, body);
        let requests = http.requests();
        let (passed, log) = run_single(&WifiScanCheck, http).await;

        assert!(passed);
        assert_eq!(log.as_slice()[0].message, "Found 0 networks");
        let sent = requests.lock().unwrap();
        assert_eq!(sent[0].timeout, pin_probe_domain::config::WIFI_SCAN_TIMEOUT);
    }

    #[tokio::test]
    async fn test_only_first_three_networks_inspected() {
        let body = r#"{"networks": [
            {"ssid":"A","rssi":-40,"auth":"WPA2"},
            {"ssid":"B","rssi":-60,"auth":"OPEN"},
            {"ssid":"C","rssi":-70,"auth":"WPA3"},
            {"ssid":"D"}
        ]}"#;
        let http = MockHttpClient::new().respond(HttpMethod::Get, "/api/wifi/scan", 200, body);
        let (passed, log) = run_single(&WifiScanCheck, http).await;

        assert!(passed);
        assert_eq!(log.as_slice()[0].message, "Found 4 networks");
    }

    #[tokio::test]
    async fn test_network_missing_field() {
        let body = r#"{"networks": [{"ssid":"A","rssi":-40,"auth":"WPA2"}, {"ssid":"B","auth":"OPEN"}]}"#;
        let http = MockHttpClient::new().respond(HttpMethod::Get, "/api/wifi/scan", 200, body);
        let (passed, log) = run_single(&WifiScanCheck, http).await;

        assert!(!passed);
        assert_eq!(log.len(), 1);
        assert_eq!(log.as_slice()[0].message, "Missing required field: networks[1].rssi");
    }

    #[tokio::test]
    async fn test_networks_not_a_list() {
        let body = r#"{"networks": "none"}"#;
        let http = MockHttpClient::new().respond(HttpMethod::Get, "/api/wifi/scan", 200, body);
        let (passed, log) = run_single(&WifiScanCheck, http).await;

        assert!(!passed);
        assert_eq!(log.len(), 1);
        assert_eq!(log.as_slice()[0].message, "Field 'networks' should be an array");
    }

    #[tokio::test]
    async fn test_missing_networks() {
        let http = MockHttpClient::new().respond(HttpMethod::Get, "/api/wifi/scan", 200, "{}");
        let (passed, log) = run_single(&WifiScanCheck, http).await;

        assert!(!passed);
        assert_eq!(log.as_slice()[0].message, "Missing required field: networks");
    }
}
