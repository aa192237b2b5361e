//! Version reporting and template compatibility checks

use semver::Version;

use crate::catalog::Tool;
use crate::output::{Color, Output};

/// Mobile SDK version this plugin scaffolds against
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command shown when the plugin is older than a template expects
pub const UPGRADE_COMMAND: &str = "cargo install mobilesdk-tools --force";

/// Print the Mobile SDK version for the selected tool
pub fn print_version<O: Output>(tool: &Tool, out: &O) {
    out.info(
        &format!("Salesforce Mobile SDK version: {}", SDK_VERSION),
        Color::Cyan,
    );
    out.info(
        &format!("Tool: {} ({} topic)", tool.name, tool.topic),
        Color::Plain,
    );
}

/// Compare the plugin version against the version a template declares.
/// Returns a warning message when the plugin is older than the template
/// expects; unparseable versions skip the check.
pub fn check_compatibility(plugin_version: &str, template_version: &str) -> Option<String> {
    let plugin = Version::parse(plugin_version).ok()?;
    let template = Version::parse(template_version).ok()?;

    if plugin < template {
        Some(format!(
            "This template was designed for Mobile SDK {} or newer; you are running {}. Consider updating: {}",
            template_version, plugin_version, UPGRADE_COMMAND
        ))
    } else {
        None
    }
}
