//! Settings read/write check

use async_trait::async_trait;
use pin_probe_domain::SettingsUpdate;
use pin_probe_domain::device::SETTINGS_PATH;

use super::{Check, CheckContext};
use crate::error::{ApplicationError, ApplicationResult};

const NAME: &str = "Settings API";
const GET_NAME: &str = "Settings Get";
const UPDATE_NAME: &str = "Settings Update";

/// Reads the current settings, then writes a fixed update.
///
/// The update is skipped when the read fails. Transport faults on either
/// step are recorded under the check's own name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsCheck;

#[async_trait]
impl Check for SettingsCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn run(&self, ctx: &mut CheckContext<'_>) -> ApplicationResult<bool> {
        let request = ctx.get(SETTINGS_PATH)?;
        let Some(response) = ctx.fetch_labeled(&request, GET_NAME, NAME).await? else {
            return Ok(false);
        };
        if ctx.decode_json(NAME, &response).is_none() {
            return Ok(false);
        }
        ctx.pass(GET_NAME, "Settings retrieved successfully");

        let payload = serde_json::to_value(SettingsUpdate::default())
            .map_err(|e| ApplicationError::Serialization(e.to_string()))?;
        let update = ctx.post_json(SETTINGS_PATH, payload)?;
        if ctx.fetch_labeled(&update, UPDATE_NAME, NAME).await?.is_none() {
            return Ok(false);
        }

        ctx.pass(UPDATE_NAME, "Settings updated successfully");
        Ok(true)
    }
}
