//! Project creation from a template
//!
//! `create` and `createwithtemplate` both land here: resolve the template
//! source, fetch it, check compatibility, then copy with the user's
//! app name, package name, and organization substituted in.

pub mod copier;
pub mod fetcher;
pub mod manifest;

pub use copier::{copy_template, Substitutions};
pub use fetcher::{TemplateFetcher, TemplateFiles, TemplateSource};
pub use manifest::{TemplateManifest, TemplateTokens};

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::catalog::Tool;
use crate::output::{Color, Output};
use crate::templates::{SdkTemplates, TemplateProvider};
use crate::validate::FlagValues;
use crate::version;

/// Template used when the invocation names no repo URI: the built-in
/// template matching the supplied app type, else the tool's own default.
fn default_template_uri(tool: &Tool, values: &FlagValues) -> String {
    if let Some(app_type) = values.get("apptype") {
        if let Some(template) = SdkTemplates::builtin()
            .templates_for(tool)
            .into_iter()
            .find(|t| t.app_type.eq_ignore_ascii_case(app_type))
        {
            return template.url;
        }
    }
    tool.default_template_url.to_string()
}

/// Project-creation collaborator invoked by the dispatcher
pub trait ProjectCreator {
    fn create_app(
        &self,
        tool: &Tool,
        values: &FlagValues,
    ) -> impl std::future::Future<Output = Result<()>>;
}

/// Production creator: fetches the template and materializes the project
pub struct SdkProjectCreator<O: Output> {
    out: O,
    user_agent: String,
}

impl<O: Output> SdkProjectCreator<O> {
    pub fn new(out: O, user_agent: &str) -> Self {
        Self {
            out,
            user_agent: user_agent.to_string(),
        }
    }
}

impl<O: Output> ProjectCreator for SdkProjectCreator<O> {
    async fn create_app(&self, tool: &Tool, values: &FlagValues) -> Result<()> {
        let app_name = values
            .get("appname")
            .map(String::as_str)
            .context("appname is required")?;
        let uri = values
            .get("templaterepouri")
            .cloned()
            .unwrap_or_else(|| default_template_uri(tool, values));
        let output_dir = values.get("outputdir").map(String::as_str).unwrap_or(".");

        self.out
            .info(&format!("Fetching template from {}", uri), Color::Plain);
        let source = TemplateSource::from_uri(&uri)?;
        let template = TemplateFetcher::new(source, &self.user_agent)
            .fetch()
            .await?;

        if let Some(warning) =
            version::check_compatibility(version::SDK_VERSION, &template.manifest.version)
        {
            self.out.info(&warning, Color::Yellow);
        }

        let mut substitutions = Substitutions::new();
        let tokens = &template.manifest.tokens;
        substitutions.add(tokens.app_name.as_deref(), Some(app_name));
        substitutions.add(
            tokens.package_name.as_deref(),
            values.get("packagename").map(String::as_str),
        );
        substitutions.add(
            tokens.organization.as_deref(),
            values.get("organization").map(String::as_str),
        );

        let target: PathBuf = PathBuf::from(output_dir).join(app_name);
        let copied = copy_template(&template, &target, &substitutions).await?;

        self.out.info(
            &format!(
                "Created app '{}' ({} files) in {}",
                app_name,
                copied.len(),
                target.display()
            ),
            Color::Green,
        );
        self.out
            .info(&format!("Next: cd {}", target.display()), Color::Plain);
        self.out.info(
            "See the template README for build and run steps.",
            Color::Plain,
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tool_by_topic;
    use crate::output::recording::RecordingOutput;

    fn values(pairs: &[(&str, &str)]) -> FlagValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn creates_a_project_from_a_local_template() {
        let source = tempfile::tempdir().unwrap();
        std::fs::write(
            source.path().join("template.yaml"),
            "\
name: AndroidNativeKotlinTemplate
description: Basic native Android app (Kotlin)
version: 0.1.0
tokens:
  app_name: TemplateApp
  package_name: com.salesforce.templateapp
",
        )
        .unwrap();
        std::fs::create_dir_all(source.path().join("app")).unwrap();
        std::fs::write(
            source.path().join("app/Main.kt"),
            "package com.salesforce.templateapp // TemplateApp",
        )
        .unwrap();

        let target = tempfile::tempdir().unwrap();
        let android = tool_by_topic("android").unwrap();
        let creator = SdkProjectCreator::new(RecordingOutput::default(), "mobilesdk-test");

        let vals = values(&[
            ("appname", "MyApp"),
            ("packagename", "com.acme.myapp"),
            ("organization", "Acme"),
            (
                "templaterepouri",
                source.path().to_str().unwrap(),
            ),
            ("outputdir", target.path().to_str().unwrap()),
        ]);
        creator.create_app(android, &vals).await.unwrap();

        let body =
            std::fs::read_to_string(target.path().join("MyApp/app/Main.kt")).unwrap();
        assert_eq!(body, "package com.acme.myapp // MyApp");
    }

    #[test]
    fn default_template_follows_the_app_type() {
        let android = tool_by_topic("android").unwrap();

        let kotlin = values(&[("apptype", "native_kotlin")]);
        assert!(default_template_uri(android, &kotlin).ends_with("AndroidNativeKotlinTemplate"));

        let java = values(&[("apptype", "native")]);
        assert!(default_template_uri(android, &java).ends_with("AndroidNativeTemplate"));

        // No app type supplied: fall back to the tool default
        assert_eq!(
            default_template_uri(android, &FlagValues::new()),
            android.default_template_url
        );
    }

    #[tokio::test]
    async fn missing_app_name_is_an_error() {
        let android = tool_by_topic("android").unwrap();
        let creator = SdkProjectCreator::new(RecordingOutput::default(), "mobilesdk-test");
        let result = creator.create_app(android, &FlagValues::new()).await;
        assert!(result.is_err());
    }
}
