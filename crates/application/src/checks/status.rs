//! Device status check

use async_trait::async_trait;
use pin_probe_domain::device::{STATUS_PATH, STATUS_SCHEMA};

use super::{Check, CheckContext, display_value};
use crate::error::ApplicationResult;

const NAME: &str = "API Status";

/// Checks that `/api/status` reports device identity, battery and WiFi state.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusCheck;

#[async_trait]
impl Check for StatusCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn run(&self, ctx: &mut CheckContext<'_>) -> ApplicationResult<bool> {
        let request = ctx.get(STATUS_PATH)?;
        let Some(status) = ctx.fetch_json(NAME, &request).await? else {
            return Ok(false);
        };
        if !ctx.require(NAME, STATUS_SCHEMA.validate(&status)) {
            return Ok(false);
        }

        let message = format!(
            "Device: {} v{}, Battery: {}%",
            display_value(&status["device"]["name"]),
            display_value(&status["device"]["version"]),
            display_value(&status["battery"]["percentage"]),
        );
        ctx.pass(NAME, message);
        Ok(true)
    }
}
