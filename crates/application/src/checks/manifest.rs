//! PWA manifest check

use async_trait::async_trait;
use pin_probe_domain::device::{MANIFEST_PATH, MANIFEST_SCHEMA};

use super::{Check, CheckContext};
use crate::error::ApplicationResult;

const NAME: &str = "PWA Manifest";

/// Checks that `/manifest.json` declares the fields a PWA needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestCheck;

#[async_trait]
impl Check for ManifestCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn run(&self, ctx: &mut CheckContext<'_>) -> ApplicationResult<bool> {
        let request = ctx.get(MANIFEST_PATH)?;
        let Some(manifest) = ctx.fetch_json(NAME, &request).await? else {
            return Ok(false);
        };
        if !ctx.require(NAME, MANIFEST_SCHEMA.validate(&manifest)) {
            return Ok(false);
        }

        ctx.pass(NAME, "Valid PWA manifest");
        Ok(true)
    }
}
