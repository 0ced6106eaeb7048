use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub root_behavior: RootBehavior,
    pub service_name: String,
    pub log_level: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Behavior of `GET /`. The two deployed server configurations disagreed
/// on this, so the choice is an explicit knob rather than a hardcoded pick.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RootBehavior {
    /// Redirect to `/checkout` (the logging-enabled configuration; default).
    Redirect,
    /// Simulate a probe transaction with a delay of up to 400ms.
    Probe,
}

fn root_behavior_from(value: Option<&str>) -> Result<RootBehavior> {
    match value {
        None | Some("redirect") => Ok(RootBehavior::Redirect),
        Some("probe") => Ok(RootBehavior::Probe),
        Some(other) => anyhow::bail!("unrecognized ROOT_BEHAVIOR value: {other}"),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse()?;

        let root_behavior = root_behavior_from(env::var("ROOT_BEHAVIOR").ok().as_deref())?;

        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| "info,simulator_service=debug".to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            root_behavior,
            service_name: "simulator-service".to_string(),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_behavior_defaults_to_redirect() {
        assert_eq!(root_behavior_from(None).unwrap(), RootBehavior::Redirect);
    }

    #[test]
    fn root_behavior_accepts_both_variants() {
        assert_eq!(
            root_behavior_from(Some("redirect")).unwrap(),
            RootBehavior::Redirect
        );
        assert_eq!(
            root_behavior_from(Some("probe")).unwrap(),
            RootBehavior::Probe
        );
    }

    #[test]
    fn root_behavior_rejects_unknown_values() {
        assert!(root_behavior_from(Some("merged")).is_err());
    }
}
