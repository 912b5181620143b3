//! `ipgeolocation completions` — print a shell completion script.
//!
//! Usage:
//!   ipgeolocation completions bash > ~/.local/share/bash-completion/completions/ipgeolocation
//!   ipgeolocation completions zsh > ~/.zfunc/_ipgeolocation

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::{IpGeoError, Result};

/// Execute the `completions` command.
pub fn execute(shell: &str) -> Result<()> {
    let shell = parse_shell(shell)?;
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Parse a shell name string into a `Shell` enum.
fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "powershell" | "ps" => Ok(Shell::PowerShell),
        "elvish" => Ok(Shell::Elvish),
        other => Err(IpGeoError::CommandFailed(format!(
            "unknown shell '{other}'. Supported: bash, zsh, fish, powershell, elvish"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_shell_names() {
        assert_eq!(parse_shell("bash").unwrap(), Shell::Bash);
        assert_eq!(parse_shell("zsh").unwrap(), Shell::Zsh);
        assert_eq!(parse_shell("fish").unwrap(), Shell::Fish);
        assert_eq!(parse_shell("elvish").unwrap(), Shell::Elvish);
    }

    #[test]
    fn parse_shell_powershell_aliases() {
        assert_eq!(parse_shell("powershell").unwrap(), Shell::PowerShell);
        assert_eq!(parse_shell("ps").unwrap(), Shell::PowerShell);
    }

    #[test]
    fn parse_shell_case_insensitive() {
        assert_eq!(parse_shell("BASH").unwrap(), Shell::Bash);
        assert_eq!(parse_shell("Zsh").unwrap(), Shell::Zsh);
    }

    #[test]
    fn parse_shell_unknown_fails() {
        let err = parse_shell("csh").unwrap_err();
        assert!(err.to_string().contains("unknown shell 'csh'"));
        assert!(parse_shell("").is_err());
    }

    #[test]
    fn completion_script_mentions_subcommands() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate(Shell::Bash, &mut cmd, "ipgeolocation", &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("bulk-ip-geo"));
        assert!(script.contains("time-conversion"));
    }
}
