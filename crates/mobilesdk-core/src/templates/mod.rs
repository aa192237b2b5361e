//! Published application templates and the `listtemplates` presentation
//!
//! The built-in table mirrors the published Mobile SDK template repos; a
//! remote registry document can replace it at startup (see [`remote`]).

pub mod remote;

use serde::{Deserialize, Serialize};

use crate::catalog::{commands, Tool};
use crate::output::{Color, Output};
use crate::NAMESPACE;

/// One published, URI-addressable project template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Human-readable description shown by `listtemplates`
    pub description: String,
    /// Repo URI usable as a `templaterepouri` value
    pub url: String,
    /// App type the template scaffolds; decides tool applicability
    pub app_type: String,
    /// Platforms the template targets; empty means any platform
    #[serde(default)]
    pub platforms: Vec<String>,
}

impl Template {
    /// A template applies to a tool when the tool supports its app type
    /// and they share a platform.
    pub fn applies_to(&self, tool: &Tool) -> bool {
        tool.supports_app_type(&self.app_type)
            && (self.platforms.is_empty()
                || self.platforms.iter().any(|p| tool.supports_platform(p)))
    }
}

/// Source of templates applicable to a tool
pub trait TemplateProvider {
    fn templates_for(&self, tool: &Tool) -> Vec<Template>;
}

const TEMPLATE_REPO_BASE: &str =
    "https://github.com/forcedotcom/SalesforceMobileSDK-Templates";

const BUILTIN_TEMPLATES: &[(&str, &str, &str, &[&str])] = &[
    ("Basic native iOS app (Objective-C)", "iOSNativeTemplate", "native", &["ios"]),
    ("Basic native iOS app (Swift)", "iOSNativeSwiftTemplate", "native_swift", &["ios"]),
    ("Basic native Android app (Java)", "AndroidNativeTemplate", "native", &["android"]),
    ("Basic native Android app (Kotlin)", "AndroidNativeKotlinTemplate", "native_kotlin", &["android"]),
    ("Basic hybrid local app", "HybridLocalTemplate", "hybrid_local", &["ios", "android"]),
    ("Basic hybrid remote app", "HybridRemoteTemplate", "hybrid_remote", &["ios", "android"]),
    ("Basic React Native app", "ReactNativeTemplate", "react_native", &["ios", "android"]),
    ("Sample native iOS app (Swift) using MobileSync", "MobileSyncExplorerSwift", "native_swift", &["ios"]),
    ("Sample native Android app (Kotlin) using MobileSync", "MobileSyncExplorerKotlinTemplate", "native_kotlin", &["android"]),
    ("Sample React Native app using MobileSync", "MobileSyncExplorerReactNative", "react_native", &["ios", "android"]),
];

/// Template catalog: the built-in table, optionally replaced by a remote
/// registry document at startup
#[derive(Debug, Clone)]
pub struct SdkTemplates {
    templates: Vec<Template>,
}

impl SdkTemplates {
    /// The table compiled into the plugin
    pub fn builtin() -> Self {
        let templates = BUILTIN_TEMPLATES
            .iter()
            .map(|(description, repo, app_type, platforms)| Template {
                description: description.to_string(),
                url: format!("{}/{}", TEMPLATE_REPO_BASE, repo),
                app_type: app_type.to_string(),
                platforms: platforms.iter().map(|p| p.to_string()).collect(),
            })
            .collect();
        Self { templates }
    }

    pub fn from_templates(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Fetch the remote registry document, falling back to the built-in
    /// table (with a warning) so listing keeps working offline.
    pub async fn load<O: Output>(user_agent: &str, out: &O) -> Self {
        match remote::fetch_registry(user_agent).await {
            Ok(templates) => Self::from_templates(templates),
            Err(e) => {
                out.info(
                    &format!("Using built-in template list ({})", e),
                    Color::Yellow,
                );
                Self::builtin()
            }
        }
    }
}

impl TemplateProvider for SdkTemplates {
    fn templates_for(&self, tool: &Tool) -> Vec<Template> {
        self.templates
            .iter()
            .filter(|t| t.applies_to(tool))
            .cloned()
            .collect()
    }
}

/// Print the templates applicable to `tool`, each with a ready-to-copy
/// `createwithtemplate` invocation. 1-indexed; empty list prints only the
/// header and footer.
pub fn list_templates<T: TemplateProvider, O: Output>(tool: &Tool, provider: &T, out: &O) {
    let applicable = provider.templates_for(tool);

    out.info("\nAvailable templates:\n", Color::Cyan);
    for (i, template) in applicable.iter().enumerate() {
        out.info(&format!("{}) {}", i + 1, template.description), Color::Cyan);
        out.info(
            &format!(
                "{}:{}:{} --templaterepouri={}",
                NAMESPACE,
                tool.topic,
                commands::CREATE_WITH_TEMPLATE,
                template.url
            ),
            Color::Magenta,
        );
    }
    out.info("", Color::Plain);
}
