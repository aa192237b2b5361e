//! Static argument table and per-argument validators
//!
//! Each argument optionally carries an [`ArgValidation`], pairing the
//! predicate with the error formatter so one cannot exist without the other.
//! Arguments with no validation accept any supplied value, including none.

use super::tools::Tool;

/// Validation capability for one argument
pub struct ArgValidation {
    /// Predicate over the supplied value (absent values arrive as `None`)
    pub validate: fn(Option<&str>, &Tool) -> bool,
    /// Human-readable message for a value the predicate rejected
    pub error: fn(Option<&str>, &Tool) -> String,
}

/// Descriptor for one named, user-suppliable flag
pub struct ArgDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub default: Option<&'static str>,
    pub validation: Option<ArgValidation>,
}

impl ArgDescriptor {
    /// Apply the validation predicate, if any. Accept-by-default.
    pub fn accepts(&self, value: Option<&str>, tool: &Tool) -> bool {
        match &self.validation {
            Some(v) => (v.validate)(value, tool),
            None => true,
        }
    }
}

impl std::fmt::Debug for ArgDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgDescriptor")
            .field("name", &self.name)
            .field("default", &self.default)
            .field("validated", &self.validation.is_some())
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn valid_app_name(value: Option<&str>, _tool: &Tool) -> bool {
    value.is_some_and(|v| !v.is_empty() && !v.chars().any(char::is_whitespace))
}

/// Reverse-DNS package identifier: dot-separated segments, each starting
/// with a letter, continuing with letters, digits, or underscores.
fn valid_package_name(value: Option<&str>, _tool: &Tool) -> bool {
    let Some(value) = value else { return false };
    !value.is_empty()
        && value.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

fn valid_app_type(value: Option<&str>, tool: &Tool) -> bool {
    value.is_some_and(|v| tool.supports_app_type(v))
}

/// Comma-separated, non-empty subset of the tool's platforms
fn valid_platforms(value: Option<&str>, tool: &Tool) -> bool {
    let Some(value) = value else { return false };
    !value.trim().is_empty()
        && value
            .split(',')
            .all(|p| tool.supports_platform(p.trim()))
}

pub const ARGS: &[ArgDescriptor] = &[
    ArgDescriptor {
        name: "platform",
        description: "comma-separated list of target platforms",
        long_description: "Comma-separated list of the platforms to build for (subset of the tool's supported platforms).",
        default: None,
        validation: Some(ArgValidation {
            validate: valid_platforms,
            error: |value, tool| {
                format!(
                    "Invalid platform(s) '{}' for platform. Valid platforms: {}.",
                    value.unwrap_or(""),
                    tool.platforms.join(", ")
                )
            },
        }),
    },
    ArgDescriptor {
        name: "apptype",
        description: "type of application to create",
        long_description: "Application type to scaffold; each tool supports its own set of app types.",
        default: None,
        validation: Some(ArgValidation {
            validate: valid_app_type,
            error: |value, tool| {
                format!(
                    "Invalid value '{}' for apptype. Valid app types: {}.",
                    value.unwrap_or(""),
                    tool.app_types.join(", ")
                )
            },
        }),
    },
    ArgDescriptor {
        name: "appname",
        description: "name of the application",
        long_description: "Name of the application to create; becomes the project directory name.",
        default: None,
        validation: Some(ArgValidation {
            validate: valid_app_name,
            error: |value, _| {
                format!(
                    "Invalid value '{}' for appname. App names must be non-empty and contain no whitespace.",
                    value.unwrap_or("")
                )
            },
        }),
    },
    ArgDescriptor {
        name: "packagename",
        description: "app package identifier (e.g. com.mycompany.myapp)",
        long_description: "Reverse-DNS package identifier for the application.",
        default: None,
        validation: Some(ArgValidation {
            validate: valid_package_name,
            error: |value, _| {
                format!(
                    "Invalid value '{}' for packagename. Expected dot-separated segments starting with a letter.",
                    value.unwrap_or("")
                )
            },
        }),
    },
    ArgDescriptor {
        name: "organization",
        description: "name of the organization owning the app",
        long_description: "Name of the company or organization the application belongs to.",
        default: None,
        validation: Some(ArgValidation {
            validate: |value, _| non_empty(value),
            error: |value, _| {
                format!(
                    "Invalid value '{}' for organization. Organization must be non-empty.",
                    value.unwrap_or("")
                )
            },
        }),
    },
    ArgDescriptor {
        name: "outputdir",
        description: "directory the project is created in",
        long_description: "Output directory the application project is created under.",
        default: Some("."),
        validation: None,
    },
    ArgDescriptor {
        name: "templaterepouri",
        description: "template repo URI or local template path",
        long_description: "URI of the template repo (or local template directory) the application is created from.",
        default: None,
        validation: Some(ArgValidation {
            validate: |value, _| non_empty(value),
            error: |value, _| {
                format!(
                    "Invalid value '{}' for templaterepouri. Template repo URI must be non-empty.",
                    value.unwrap_or("")
                )
            },
        }),
    },
    ArgDescriptor {
        name: "startpage",
        description: "app start page (hybrid remote apps)",
        long_description: "Relative path of the start page for hybrid remote applications.",
        default: Some("index.html"),
        validation: None,
    },
];

pub(crate) fn arg_descriptor(name: &str) -> Option<&'static ArgDescriptor> {
    ARGS.iter().find(|a| a.name == name)
}

#[cfg(test)]
mod tests {
    use super::super::tools::tool_by_topic;
    use super::*;

    #[test]
    fn app_name_rejects_empty_and_whitespace() {
        let ios = tool_by_topic("ios").unwrap();
        let arg = arg_descriptor("appname").unwrap();
        assert!(arg.accepts(Some("MyApp"), ios));
        assert!(!arg.accepts(Some(""), ios));
        assert!(!arg.accepts(Some("My App"), ios));
        assert!(!arg.accepts(None, ios));
    }

    #[test]
    fn package_name_shape() {
        let android = tool_by_topic("android").unwrap();
        let arg = arg_descriptor("packagename").unwrap();
        assert!(arg.accepts(Some("com.mycompany.myapp"), android));
        assert!(arg.accepts(Some("com.my_company.app2"), android));
        assert!(!arg.accepts(Some("com..myapp"), android));
        assert!(!arg.accepts(Some("com.1app"), android));
        assert!(!arg.accepts(Some(".com.myapp"), android));
        assert!(!arg.accepts(None, android));
    }

    #[test]
    fn app_type_checked_against_owning_tool() {
        let ios = tool_by_topic("ios").unwrap();
        let hybrid = tool_by_topic("hybrid").unwrap();
        let arg = arg_descriptor("apptype").unwrap();
        assert!(arg.accepts(Some("native_swift"), ios));
        assert!(!arg.accepts(Some("native_swift"), hybrid));
        assert!(arg.accepts(Some("hybrid_remote"), hybrid));
    }

    #[test]
    fn platform_list_is_a_subset_of_tool_platforms() {
        let hybrid = tool_by_topic("hybrid").unwrap();
        let arg = arg_descriptor("platform").unwrap();
        assert!(arg.accepts(Some("ios"), hybrid));
        assert!(arg.accepts(Some("ios,android"), hybrid));
        assert!(arg.accepts(Some("ios, android"), hybrid));
        assert!(!arg.accepts(Some("ios,windows"), hybrid));
        assert!(!arg.accepts(Some(""), hybrid));
    }

    #[test]
    fn unvalidated_args_accept_anything() {
        let ios = tool_by_topic("ios").unwrap();
        let arg = arg_descriptor("outputdir").unwrap();
        assert!(arg.accepts(None, ios));
        assert!(arg.accepts(Some(""), ios));
    }

    #[test]
    fn error_messages_reference_the_argument() {
        let android = tool_by_topic("android").unwrap();
        let arg = arg_descriptor("appname").unwrap();
        let validation = arg.validation.as_ref().unwrap();
        let message = (validation.error)(Some(""), android);
        assert!(message.contains("appname"));
    }
}
