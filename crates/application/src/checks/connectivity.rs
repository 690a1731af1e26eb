//! Device connectivity check

use async_trait::async_trait;
use pin_probe_domain::device::ROOT_PATH;

use super::{Check, CheckContext};
use crate::error::ApplicationResult;

const NAME: &str = "Device Connectivity";

/// Checks that the web UI root answers `200 OK`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectivityCheck;

#[async_trait]
impl Check for ConnectivityCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn run(&self, ctx: &mut CheckContext<'_>) -> ApplicationResult<bool> {
        let request = ctx.get(ROOT_PATH)?;
        if ctx.fetch(NAME, &request).await?.is_none() {
            return Ok(false);
        }

        let message = format!("Device responds on {}", ctx.config().target());
        ctx.pass(NAME, message);
        Ok(true)
    }
}
