//! Template file copying with placeholder substitution

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use super::fetcher::{TemplateFiles, MANIFEST_FILE};

/// Placeholder-to-replacement pairs applied to file bodies and paths
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    pairs: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token when both the placeholder and its replacement exist
    pub fn add(&mut self, token: Option<&str>, replacement: Option<&str>) {
        if let (Some(token), Some(replacement)) = (token, replacement) {
            if !token.is_empty() {
                self.pairs
                    .push((token.to_string(), replacement.to_string()));
            }
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (token, replacement) in &self.pairs {
            result = result.replace(token, replacement);
        }
        result
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Copy a fetched template into `target_dir`, substituting placeholders in
/// relative paths and UTF-8 bodies. The manifest itself is template
/// metadata and is not copied. Refuses a target that already has contents.
pub async fn copy_template(
    template: &TemplateFiles,
    target_dir: &Path,
    substitutions: &Substitutions,
) -> Result<Vec<String>> {
    if target_dir.is_dir() {
        let mut entries = fs::read_dir(target_dir)
            .await
            .with_context(|| format!("Failed to read {}", target_dir.display()))?;
        if entries.next_entry().await?.is_some() {
            anyhow::bail!(
                "Target directory {} already exists and is not empty",
                target_dir.display()
            );
        }
    }
    fs::create_dir_all(target_dir)
        .await
        .context("Failed to create target directory")?;

    let explicit = &template.manifest.files;
    let mut copied = Vec::new();

    for path in template.paths() {
        if path == MANIFEST_FILE {
            continue;
        }
        if !explicit.is_empty() && !explicit.iter().any(|f| f == path) {
            continue;
        }

        let rewritten = substitutions.apply(path);
        if !super::fetcher::is_clean_relative(&rewritten) {
            anyhow::bail!(
                "Refusing to write outside the target directory: {}",
                rewritten
            );
        }
        let target_path: PathBuf = target_dir.join(&rewritten);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let bytes = template
            .get(path)
            .ok_or_else(|| anyhow::anyhow!("Template file vanished: {}", path))?;
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                fs::write(&target_path, substitutions.apply(text))
                    .await
                    .with_context(|| format!("Failed to write {}", target_path.display()))?;
            }
            // Binary file, copy verbatim
            Err(_) => {
                fs::write(&target_path, bytes)
                    .await
                    .with_context(|| format!("Failed to write {}", target_path.display()))?;
            }
        }

        copied.push(rewritten);
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create::fetcher::{TemplateFetcher, TemplateSource};

    async fn fixture(files: &[(&str, &[u8])]) -> (tempfile::TempDir, TemplateFiles) {
        let dir = tempfile::tempdir().unwrap();
        for (path, body) in files {
            let full = dir.path().join(path);
            std::fs::create_dir_all(full.parent().unwrap()).unwrap();
            std::fs::write(full, body).unwrap();
        }
        let fetcher = TemplateFetcher::new(
            TemplateSource::Local(dir.path().to_path_buf()),
            "mobilesdk-test",
        );
        let template = fetcher.fetch().await.unwrap();
        (dir, template)
    }

    fn subs(pairs: &[(&str, &str)]) -> Substitutions {
        let mut s = Substitutions::new();
        for (token, replacement) in pairs {
            s.add(Some(token), Some(replacement));
        }
        s
    }

    #[tokio::test]
    async fn substitutes_in_bodies_and_paths() {
        let (_src, template) = fixture(&[
            (
                "template.yaml",
                b"name: T\ndescription: d\nversion: 13.0.0\n".as_slice(),
            ),
            (
                "TemplateApp/Main.swift",
                b"let app = \"TemplateApp\"".as_slice(),
            ),
        ])
        .await;

        let target = tempfile::tempdir().unwrap();
        let project = target.path().join("MyApp");
        let copied = copy_template(&template, &project, &subs(&[("TemplateApp", "MyApp")]))
            .await
            .unwrap();

        assert_eq!(copied, vec!["MyApp/Main.swift".to_string()]);
        let body = std::fs::read_to_string(project.join("MyApp/Main.swift")).unwrap();
        assert_eq!(body, "let app = \"MyApp\"");
        assert!(!project.join("template.yaml").exists());
    }

    #[tokio::test]
    async fn explicit_file_list_restricts_the_copy() {
        let (_src, template) = fixture(&[
            (
                "template.yaml",
                b"name: T\ndescription: d\nversion: 13.0.0\nfiles:\n  - keep.txt\n".as_slice(),
            ),
            ("keep.txt", b"keep".as_slice()),
            ("drop.txt", b"drop".as_slice()),
        ])
        .await;

        let target = tempfile::tempdir().unwrap();
        let project = target.path().join("App");
        let copied = copy_template(&template, &project, &Substitutions::new())
            .await
            .unwrap();

        assert_eq!(copied, vec!["keep.txt".to_string()]);
        assert!(!project.join("drop.txt").exists());
    }

    #[tokio::test]
    async fn refuses_a_non_empty_target() {
        let (_src, template) = fixture(&[(
            "template.yaml",
            b"name: T\ndescription: d\nversion: 13.0.0\n".as_slice(),
        )])
        .await;

        let target = tempfile::tempdir().unwrap();
        std::fs::write(target.path().join("existing.txt"), "here first").unwrap();

        let result = copy_template(&template, target.path(), &Substitutions::new()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn substituted_paths_cannot_escape_the_target() {
        let (_src, template) = fixture(&[
            (
                "template.yaml",
                b"name: T\ndescription: d\nversion: 13.0.0\n".as_slice(),
            ),
            ("TemplateApp/Main.swift", b"let app = 1".as_slice()),
        ])
        .await;

        let target = tempfile::tempdir().unwrap();
        let project = target.path().join("apps").join("MyApp");
        let result = copy_template(&template, &project, &subs(&[("TemplateApp", "../escape")]))
            .await;

        assert!(result.is_err());
        assert!(!target.path().join("apps/escape").exists());
    }

    #[tokio::test]
    async fn binary_files_are_copied_verbatim() {
        let payload: &[u8] = &[0xff, 0xfe, 0x00, 0x01];
        let (_src, template) = fixture(&[
            (
                "template.yaml",
                b"name: T\ndescription: d\nversion: 13.0.0\n".as_slice(),
            ),
            ("icon.png", payload),
        ])
        .await;

        let target = tempfile::tempdir().unwrap();
        let project = target.path().join("App");
        copy_template(&template, &project, &subs(&[("T", "X")]))
            .await
            .unwrap();

        assert_eq!(std::fs::read(project.join("icon.png")).unwrap(), payload);
    }
}
