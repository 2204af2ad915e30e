use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::form::resolve;
use crate::registry::default_preference;
use crate::FormSetting;
use crate::FormValue;
use crate::NormalizationForm;
use crate::NormalizeError;

pub const ENGINE_ENV_VAR: &str = "UNICODE_NORMALIZER_ENGINE";
pub const FORM_ENV_VAR: &str = "UNICODE_NORMALIZER_FORM";
pub const PREFERENCE_ENV_VAR: &str = "UNICODE_NORMALIZER_PREFERENCE";

/// форма по умолчанию, если в конфигурации она не указана
pub const DEFAULT_FORM: NormalizationForm = NormalizationForm::Nfc;

#[derive(Debug, Error)]
pub enum ConfigError
{
    #[error("failed to read config file {path}: {source}")]
    Io
    {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse toml config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Form(#[from] NormalizeError),
}

/// конфигурация нормализатора
///
/// ```toml
/// engine = "table"
/// form = "nfc"
/// preference = ["icu", "table"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig
{
    /// закреплённый движок; если не указан, используется порядок предпочтения
    pub engine: Option<String>,
    /// форма по умолчанию: код, логическое значение или название
    pub form: Option<FormValue>,
    /// порядок предпочтения движков; пустой - порядок по умолчанию
    pub preference: Vec<String>,
}

impl NormalizerConfig
{
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError>
    {
        let config: NormalizerConfig = toml::from_str(text)?;
        config.form_setting()?;

        Ok(config)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError>
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loading unicode normalizer config");

        Self::from_toml_str(&text)
    }

    /// конфигурация из переменных окружения процесса
    pub fn from_env() -> Result<Self, ConfigError>
    {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// конфигурация из переменных окружения, полученных через lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let engine = lookup(ENGINE_ENV_VAR)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        let preference = lookup(PREFERENCE_ENV_VAR)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|identifier| !identifier.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let config = Self {
            engine,
            form: lookup(FORM_ENV_VAR).map(FormValue::Text),
            preference,
        };
        config.form_setting()?;

        Ok(config)
    }

    /// форма по умолчанию: не указана - NFC, явно пустое значение - нормализация отключена
    pub fn form_setting(&self) -> Result<FormSetting, NormalizeError>
    {
        match &self.form {
            None => Ok(FormSetting::Enabled(DEFAULT_FORM)),
            Some(value) => resolve(Some(value)),
        }
    }

    /// порядок предпочтения движков
    pub fn preference(&self) -> Vec<String>
    {
        match self.preference.is_empty() {
            true => default_preference().into_iter().map(str::to_owned).collect(),
            false => self.preference.clone(),
        }
    }
}
