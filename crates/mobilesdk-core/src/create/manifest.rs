//! Template manifest (`template.yaml` at the template root)

use serde::{Deserialize, Serialize};

/// Placeholder strings a template uses in file bodies and paths.
/// Each present token is replaced with the matching user-supplied value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateTokens {
    /// Placeholder replaced with the supplied `appname`
    #[serde(default)]
    pub app_name: Option<String>,

    /// Placeholder replaced with the supplied `packagename`
    #[serde(default)]
    pub package_name: Option<String>,

    /// Placeholder replaced with the supplied `organization`
    #[serde(default)]
    pub organization: Option<String>,
}

/// Manifest describing one template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template
    pub name: String,

    /// Description of what the template provides
    pub description: String,

    /// Mobile SDK version the template targets, for compatibility warnings
    pub version: String,

    /// Placeholder tokens to substitute during copying
    #[serde(default)]
    pub tokens: TemplateTokens,

    /// Explicit list of files to copy; empty means every file
    #[serde(default)]
    pub files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_manifest() {
        let manifest: TemplateManifest = serde_yaml::from_str(
            "name: iOSNativeSwiftTemplate\ndescription: Basic native iOS app\nversion: 13.0.0\n",
        )
        .unwrap();
        assert_eq!(manifest.name, "iOSNativeSwiftTemplate");
        assert!(manifest.files.is_empty());
        assert!(manifest.tokens.app_name.is_none());
    }

    #[test]
    fn parses_tokens_and_files() {
        let manifest: TemplateManifest = serde_yaml::from_str(
            "\
name: AndroidNativeKotlinTemplate
description: Basic native Android app (Kotlin)
version: 13.0.0
tokens:
  app_name: TemplateApp
  package_name: com.salesforce.templateapp
files:
  - build.gradle
  - app/src/main/AndroidManifest.xml
",
        )
        .unwrap();
        assert_eq!(manifest.tokens.app_name.as_deref(), Some("TemplateApp"));
        assert_eq!(manifest.files.len(), 2);
    }
}
