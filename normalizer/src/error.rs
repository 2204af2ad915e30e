use thiserror::Error;

use crate::NormalizationForm;

/// ошибки нормализации
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError
{
    /// входные данные не являются корректным UTF-8
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding { valid_up_to: usize },

    /// неизвестный код формы нормализации
    #[error("invalid unicode normalization form: {0}")]
    InvalidForm(i64),

    /// значение конфигурации, которое не удалось разобрать как форму нормализации
    #[error("invalid unicode normalization form value: {0}")]
    InvalidArgument(String),

    /// реализация нормализации отсутствует
    #[error("missing unicode normalizer implementation: {reason}")]
    EngineUnavailable { reason: String },

    /// движок не поддерживает форму
    #[error("unicode normalizer `{engine}` does not support {form}")]
    UnsupportedForm
    {
        engine: String,
        form: NormalizationForm,
    },

    /// движок не в состоянии нормализовать эти данные
    #[error("unicode normalizer `{engine}` cannot normalize this input to {form}")]
    UnsupportedInput
    {
        engine: String,
        form: NormalizationForm,
    },
}
