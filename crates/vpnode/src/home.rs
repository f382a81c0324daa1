//! Resolution of the node home directory.
//!
//! The core library never looks up the home directory itself; the CLI
//! resolves it once and passes it to every operation.

use std::path::PathBuf;

use clap::ArgMatches;

/// Environment variable consulted when `--home` is not given.
pub const HOME_ENV_VAR: &str = "VPNODE_HOME";

/// Directory name used under the user's home when nothing else is set.
const DEFAULT_HOME_DIR_NAME: &str = ".vpnode";

/// Resolve the node home: `--home`, then `$VPNODE_HOME`, then `~/.vpnode`.
pub fn resolve_home(matches: &ArgMatches) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let flag = matches.get_one::<PathBuf>("home").cloned();
    let env = std::env::var(HOME_ENV_VAR).ok();
    resolve_home_from(flag, env, dirs::home_dir())
}

fn resolve_home_from(
    flag: Option<PathBuf>,
    env: Option<String>,
    user_home: Option<PathBuf>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = flag {
        return Ok(path);
    }

    if let Some(path_str) = env
        && !path_str.is_empty()
    {
        return Ok(PathBuf::from(path_str));
    }

    let user_home = user_home.ok_or_else(|| {
        tracing::error!(event = "cli.home.user_home_not_found");
        format!(
            "Could not determine home directory. Pass --home or set {}",
            HOME_ENV_VAR
        )
    })?;
    Ok(user_home.join(DEFAULT_HOME_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_takes_precedence() {
        let home = resolve_home_from(
            Some(PathBuf::from("/flag")),
            Some("/env".to_string()),
            Some(PathBuf::from("/home/user")),
        )
        .unwrap();
        assert_eq!(home, PathBuf::from("/flag"));
    }

    #[test]
    fn test_env_used_without_flag() {
        let home =
            resolve_home_from(None, Some("/env".to_string()), Some(PathBuf::from("/home/user")))
                .unwrap();
        assert_eq!(home, PathBuf::from("/env"));
    }

    #[test]
    fn test_empty_env_falls_back_to_user_home() {
        let home =
            resolve_home_from(None, Some(String::new()), Some(PathBuf::from("/home/user")))
                .unwrap();
        assert_eq!(home, PathBuf::from("/home/user/.vpnode"));
    }

    #[test]
    fn test_no_source_is_error() {
        let err = resolve_home_from(None, None, None).unwrap_err();
        assert!(err.to_string().contains("--home"));
    }
}
