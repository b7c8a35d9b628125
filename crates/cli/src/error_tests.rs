#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn missing_target_is_config_error() {
    let err = Error::MissingTarget("no .sln or .csproj".to_string());
    assert_eq!(err.exit_code(), ExitCode::ConfigError);
}

#[test]
fn tool_invocation_is_tool_error() {
    let err = Error::ToolInvocation {
        command: "dotnet build".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };
    assert_eq!(err.exit_code(), ExitCode::ToolError);
}

#[test]
fn missing_target_message_names_the_target() {
    let err = Error::MissingTarget("no solution file".to_string());
    assert_eq!(err.to_string(), "no build target found: no solution file");
}
