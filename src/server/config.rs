use std::{fmt, str::FromStr};

use crate::server::{billing::NegativeAmountPolicy, error::config::ConfigError};

static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Application configuration, read from the environment at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub negative_amount_policy: NegativeAmountPolicy,
    pub document_sync: DocumentSyncConfig,
}

/// Whether purchase-order documents are fetched from a real mailbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentSyncMode {
    /// Pretend to sync, no mailbox is contacted
    #[default]
    Simulate,
    /// Sync against the configured mailbox
    Live,
}

impl FromStr for DocumentSyncMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulate" => Ok(Self::Simulate),
            "live" => Ok(Self::Live),
            other => Err(format!("expected `simulate` or `live`, found `{}`", other)),
        }
    }
}

/// Login for the mailbox purchase orders are received in
#[derive(Clone, PartialEq, Eq)]
pub struct MailboxCredentials {
    pub host: String,
    pub user: String,
    pub password: String,
}

impl fmt::Debug for MailboxCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailboxCredentials")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Settings for the document sync collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSyncConfig {
    pub mode: DocumentSyncMode,
    /// Always present in live mode
    pub mailbox: Option<MailboxCredentials>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Variables
    /// - `DATABASE_URL` - Required
    /// - `LISTEN_ADDR` - Defaults to `0.0.0.0:8080`
    /// - `NEGATIVE_AMOUNT_POLICY` - `preserve` (default) or `clamp`
    /// - `DOCUMENT_SYNC_MODE` - `simulate` (default) or `live`
    /// - `MAILBOX_HOST`, `MAILBOX_USER`, `MAILBOX_PASSWORD` - Required in live mode
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let database_url = required("DATABASE_URL")?;
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let negative_amount_policy = parse_or_default(&lookup, "NEGATIVE_AMOUNT_POLICY")?;
        let mode: DocumentSyncMode = parse_or_default(&lookup, "DOCUMENT_SYNC_MODE")?;

        let mailbox = match mode {
            DocumentSyncMode::Simulate => None,
            DocumentSyncMode::Live => Some(MailboxCredentials {
                host: required("MAILBOX_HOST")?,
                user: required("MAILBOX_USER")?,
                password: required("MAILBOX_PASSWORD")?,
            }),
        };

        Ok(Self {
            database_url,
            listen_addr,
            negative_amount_policy,
            document_sync: DocumentSyncConfig { mode, mailbox },
        })
    }
}

fn parse_or_default<F, T>(lookup: &F, var: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr<Err = String> + Default,
{
    match lookup(var) {
        None => Ok(T::default()),
        Some(value) => value.parse().map_err(|reason| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason,
        }),
    }
}
