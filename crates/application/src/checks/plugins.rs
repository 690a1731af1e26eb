//! Plugin list check

use async_trait::async_trait;
use pin_probe_domain::device::{CLOCK_PLUGIN, PLUGIN_SCHEMA, PLUGINS_PATH};
use pin_probe_domain::validation::require_array;
use serde_json::Value;

use super::{Check, CheckContext, display_value};
use crate::error::ApplicationResult;

const NAME: &str = "Plugin List";
const CLOCK_NAME: &str = "Clock Plugin";

/// Checks that `/api/plugins` lists well-formed plugins.
///
/// Also records whether the bundled clock plugin is installed. That
/// sub-result is informational and never changes the check's verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluginListCheck;

#[async_trait]
impl Check for PluginListCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn run(&self, ctx: &mut CheckContext<'_>) -> ApplicationResult<bool> {
        let request = ctx.get(PLUGINS_PATH)?;
        let Some(body) = ctx.fetch_json(NAME, &request).await? else {
            return Ok(false);
        };

        let plugins = match require_array(&body, "") {
            Ok(plugins) => plugins,
            Err(error) => {
                ctx.fail(NAME, error.to_string());
                return Ok(false);
            }
        };
        if !ctx.require(NAME, PLUGIN_SCHEMA.validate_items(plugins, "", usize::MAX)) {
            return Ok(false);
        }
        ctx.pass(NAME, format!("Found {} plugins", plugins.len()));

        match find_plugin(plugins, CLOCK_PLUGIN) {
            Some(clock) => {
                let enabled = display_value(&clock["enabled"]);
                ctx.pass(CLOCK_NAME, format!("Clock plugin found, enabled: {enabled}"));
            }
            None => ctx.fail(CLOCK_NAME, "Clock plugin not found"),
        }

        Ok(true)
    }
}

fn find_plugin<'a>(plugins: &'a [Value], name: &str) -> Option<&'a Value> {
    plugins
        .iter()
        .find(|plugin| plugin.get("name").and_then(Value::as_str) == Some(name))
}
