//! Static tool and command tables
//!
//! One `Tool` per underlying Mobile SDK builder CLI (iOS, Android, hybrid,
//! React Native). Everything here is declarative data, immutable after load;
//! lookups and expansion live in the parent module.

/// Command names shared by every tool
pub mod commands {
    pub const CREATE: &str = "create";
    pub const CREATE_WITH_TEMPLATE: &str = "createwithtemplate";
    pub const VERSION: &str = "version";
    pub const LIST_TEMPLATES: &str = "listtemplates";
}

/// Descriptor for one underlying platform CLI
#[derive(Debug)]
pub struct Tool {
    /// Internal tool name (e.g. "forcedroid")
    pub name: &'static str,
    /// Topic the tool's commands are surfaced under (unique)
    pub topic: &'static str,
    /// Human-readable purpose, used in the topic description
    pub purpose: &'static str,
    /// App types this tool can scaffold
    pub app_types: &'static [&'static str],
    /// Target platforms; more than one means the `platform` flag applies
    pub platforms: &'static [&'static str],
    /// Commands the tool declares, in surfacing order
    pub commands: &'static [&'static str],
    /// Per-command argument additions layered over the command's base list.
    /// An addition colliding with a base name replaces it in place.
    pub arg_additions: &'static [(&'static str, &'static [&'static str])],
    /// Template used by plain `create` when no URI is supplied
    pub default_template_url: &'static str,
}

impl Tool {
    pub fn has_command(&self, command: &str) -> bool {
        self.commands.contains(&command)
    }

    pub fn supports_app_type(&self, app_type: &str) -> bool {
        self.app_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(app_type))
    }

    pub fn supports_platform(&self, platform: &str) -> bool {
        self.platforms
            .iter()
            .any(|p| p.eq_ignore_ascii_case(platform))
    }
}

/// Descriptor for one named command, shared across tools
#[derive(Debug)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub help: &'static str,
    /// Base argument names, in declaration order
    pub args: &'static [&'static str],
}

const ALL_COMMANDS: &[&str] = &[
    commands::CREATE,
    commands::CREATE_WITH_TEMPLATE,
    commands::VERSION,
    commands::LIST_TEMPLATES,
];

/// Extra flags multi-platform tools take on the create commands
const MULTI_PLATFORM_ADDITIONS: &[(&str, &[&str])] = &[
    (commands::CREATE, &["platform", "startpage"]),
    (commands::CREATE_WITH_TEMPLATE, &["platform"]),
];

pub const TOOLS: &[Tool] = &[
    Tool {
        name: "forceios",
        topic: "ios",
        purpose: "native iOS apps",
        app_types: &["native", "native_swift"],
        platforms: &["ios"],
        commands: ALL_COMMANDS,
        arg_additions: &[],
        default_template_url:
            "https://github.com/forcedotcom/SalesforceMobileSDK-Templates/iOSNativeSwiftTemplate",
    },
    Tool {
        name: "forcedroid",
        topic: "android",
        purpose: "native Android apps",
        app_types: &["native", "native_kotlin"],
        platforms: &["android"],
        commands: ALL_COMMANDS,
        arg_additions: &[],
        default_template_url:
            "https://github.com/forcedotcom/SalesforceMobileSDK-Templates/AndroidNativeKotlinTemplate",
    },
    Tool {
        name: "forcehybrid",
        topic: "hybrid",
        purpose: "hybrid apps",
        app_types: &["hybrid_local", "hybrid_remote"],
        platforms: &["ios", "android"],
        commands: ALL_COMMANDS,
        arg_additions: MULTI_PLATFORM_ADDITIONS,
        default_template_url:
            "https://github.com/forcedotcom/SalesforceMobileSDK-Templates/HybridLocalTemplate",
    },
    Tool {
        name: "forcereact",
        topic: "reactnative",
        purpose: "react native apps",
        app_types: &["react_native"],
        platforms: &["ios", "android"],
        commands: ALL_COMMANDS,
        arg_additions: &[(commands::CREATE, &["platform"]), (
            commands::CREATE_WITH_TEMPLATE,
            &["platform"],
        )],
        default_template_url:
            "https://github.com/forcedotcom/SalesforceMobileSDK-Templates/ReactNativeTemplate",
    },
];

pub const COMMAND_DESCRIPTORS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: commands::CREATE,
        description: "create a mobile application",
        long_description: "Creates a mobile application project from the default template for the selected tool.",
        help: "Run this command with the flags below to scaffold a new Mobile SDK application.",
        args: &["apptype", "appname", "packagename", "organization", "outputdir"],
    },
    CommandDescriptor {
        name: commands::CREATE_WITH_TEMPLATE,
        description: "create a mobile application from a template",
        long_description: "Creates a mobile application project from the template at the given repo URI.",
        help: "Run `listtemplates` first to see ready-to-copy invocations for the published templates.",
        args: &["templaterepouri", "appname", "packagename", "organization", "outputdir"],
    },
    CommandDescriptor {
        name: commands::VERSION,
        description: "print the Mobile SDK version",
        long_description: "Prints the version of the Salesforce Mobile SDK this plugin scaffolds against.",
        help: "Takes no flags.",
        args: &[],
    },
    CommandDescriptor {
        name: commands::LIST_TEMPLATES,
        description: "list the published application templates",
        long_description: "Lists the published Mobile SDK templates applicable to the selected tool, each with a ready-to-copy create invocation.",
        help: "Takes no flags.",
        args: &[],
    },
];

/// Look up a tool by its topic name
pub fn tool_by_topic(topic: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|t| t.topic == topic)
}

pub(crate) fn command_descriptor(name: &str) -> Option<&'static CommandDescriptor> {
    COMMAND_DESCRIPTORS.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_are_unique() {
        for (i, tool) in TOOLS.iter().enumerate() {
            assert!(
                TOOLS[i + 1..].iter().all(|t| t.topic != tool.topic),
                "duplicate topic {}",
                tool.topic
            );
        }
    }

    #[test]
    fn every_declared_command_has_a_descriptor() {
        for tool in TOOLS {
            for command in tool.commands {
                assert!(
                    command_descriptor(command).is_some(),
                    "{} declares unknown command {}",
                    tool.name,
                    command
                );
            }
        }
    }

    #[test]
    fn lookup_by_topic() {
        assert_eq!(tool_by_topic("android").map(|t| t.name), Some("forcedroid"));
        assert!(tool_by_topic("windows").is_none());
    }

    #[test]
    fn app_type_membership_is_case_insensitive() {
        let ios = tool_by_topic("ios").unwrap();
        assert!(ios.supports_app_type("native_swift"));
        assert!(ios.supports_app_type("Native_Swift"));
        assert!(!ios.supports_app_type("hybrid_local"));
    }
}
