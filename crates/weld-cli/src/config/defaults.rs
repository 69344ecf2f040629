use std::path::PathBuf;

use crate::config::{LibrarySpec, WeldConfig};

pub fn default_libraries() -> Vec<LibrarySpec> {
    vec![
        LibrarySpec::new("React", "react"),
        LibrarySpec::new("ReactDOM", "react-dom"),
        LibrarySpec::new("ReactDOMClient", "react-dom/client"),
        LibrarySpec::new("JSX", "react/jsx-runtime"),
    ]
}

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub fn default_base_name() -> String {
    "react".to_string()
}

pub fn default_inspect_command() -> Vec<String> {
    vec!["node".to_string()]
}

pub fn default_declaration_command() -> Vec<String> {
    vec!["tsc".to_string()]
}

pub fn default_bundler_command() -> Vec<String> {
    vec!["bun".to_string(), "build".to_string()]
}

pub fn default_node_env_define() -> String {
    "process.env.NODE_ENV".to_string()
}

impl WeldConfig {
    /// Get default configuration values.
    pub fn default_config() -> Self {
        Self {
            libraries: default_libraries(),
            out_dir: default_out_dir(),
            base_name: default_base_name(),
            inspect_command: default_inspect_command(),
            declaration_command: default_declaration_command(),
            bundler_command: default_bundler_command(),
            node_env_define: default_node_env_define(),
        }
    }
}
