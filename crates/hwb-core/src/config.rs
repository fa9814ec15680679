use std::{env, fs, path::Path};

use crate::{domain::ChatId, errors::Error, Result};

/// Default status endpoint; override with `PRACTICUM_ENDPOINT`.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Typed configuration for the watcher.
///
/// All values are read once at startup and stay fixed for the process
/// lifetime.
#[derive(Clone, Debug)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: ChatId,
    pub endpoint: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an injected variable lookup (tests use a map).
    ///
    /// Every missing required variable is reported in one error so the
    /// operator fixes the environment in a single pass.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let practicum_token = lookup("PRACTICUM_TOKEN").and_then(non_empty);
        let telegram_token = lookup("TELEGRAM_TOKEN").and_then(non_empty);
        let chat_id_raw = lookup("TELEGRAM_CHAT_ID").and_then(non_empty);

        let missing: Vec<&str> = [
            ("PRACTICUM_TOKEN", practicum_token.is_none()),
            ("TELEGRAM_TOKEN", telegram_token.is_none()),
            ("TELEGRAM_CHAT_ID", chat_id_raw.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(key, _)| *key)
        .collect();

        let (Some(practicum_token), Some(telegram_token), Some(chat_id_raw)) =
            (practicum_token, telegram_token, chat_id_raw)
        else {
            return Err(Error::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        };

        let telegram_chat_id = chat_id_raw
            .trim()
            .parse::<i64>()
            .map(ChatId)
            .map_err(|_| {
                Error::Config(format!("TELEGRAM_CHAT_ID is not a numeric chat id: {chat_id_raw}"))
            })?;

        let endpoint = lookup("PRACTICUM_ENDPOINT")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
