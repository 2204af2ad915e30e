use std::borrow::Cow;
use std::sync::Arc;

use unicode_normalization_source::TABLES;

use crate::engine::NormalizerEngine;
use crate::form::resolve;
use crate::registry::registry;
use crate::registry::EngineRegistry;
use crate::utf8;
use crate::FormSetting;
use crate::FormValue;
use crate::NormalizationForm;
use crate::NormalizeError;
use crate::NormalizerConfig;

/// U+25CC DOTTED CIRCLE: ставится перед строкой, начинающейся с комбинируемого символа
pub const LEADING_COMBINATOR: &str = "\u{25CC}";

/// нормализатор с формой по умолчанию и выбранным движком
#[derive(Debug, Clone)]
pub struct UnicodeNormalizer
{
    engine: Arc<dyn NormalizerEngine>,
    form: FormSetting,
}

impl UnicodeNormalizer
{
    /// нормализатор по конфигурации, движок выбирается через реестр процесса
    pub fn new(config: &NormalizerConfig) -> Result<Self, NormalizeError>
    {
        Self::with_registry(registry(), config)
    }

    pub fn with_registry(registry: &EngineRegistry, config: &NormalizerConfig) -> Result<Self, NormalizeError>
    {
        let normalizer = Self {
            engine: registry.resolve(config)?,
            form: config.form_setting()?,
        };

        tracing::info!(
            engine = normalizer.engine.identifier(),
            form = %normalizer.form,
            "unicode normalizer initialized"
        );

        Ok(normalizer)
    }

    pub fn with_engine(engine: Arc<dyn NormalizerEngine>, form: FormSetting) -> Self
    {
        Self { engine, form }
    }

    pub fn engine(&self) -> &Arc<dyn NormalizerEngine>
    {
        &self.engine
    }

    /// форма по умолчанию
    pub fn form(&self) -> FormSetting
    {
        self.form
    }

    /// изменить форму по умолчанию
    pub fn set_form(&mut self, value: &FormValue) -> Result<(), NormalizeError>
    {
        self.form = resolve(Some(value))?;

        Ok(())
    }

    #[inline(always)]
    fn target(&self, form: Option<NormalizationForm>) -> NormalizationForm
    {
        form.unwrap_or_else(|| self.form.form())
    }

    /// нормализация в указанную форму или форму по умолчанию
    pub fn normalize<'a>(
        &self,
        input: &'a [u8],
        form: Option<NormalizationForm>,
    ) -> Result<Cow<'a, [u8]>, NormalizeError>
    {
        self.engine.normalize(input, self.target(form))
    }

    /// нормализованы ли данные в указанной форме или форме по умолчанию
    pub fn is_normalized(&self, input: &[u8], form: Option<NormalizationForm>) -> Result<bool, NormalizeError>
    {
        self.engine.is_normalized(input, self.target(form))
    }

    /// нормализация по числовому коду формы; код 0 (отключено) ведёт себя как NONE
    pub fn normalize_code<'a>(&self, input: &'a [u8], code: i64) -> Result<Cow<'a, [u8]>, NormalizeError>
    {
        self.normalize(input, Some(FormSetting::try_from(code)?.form()))
    }

    pub fn is_normalized_code(&self, input: &[u8], code: i64) -> Result<bool, NormalizeError>
    {
        self.is_normalized(input, Some(FormSetting::try_from(code)?.form()))
    }

    /// нормализация только если данные ещё не нормализованы
    pub fn normalize_to<'a>(
        &self,
        input: &'a [u8],
        form: Option<NormalizationForm>,
    ) -> Result<Cow<'a, [u8]>, NormalizeError>
    {
        let form = self.target(form);

        if self.engine.is_normalized(input, form)? {
            return Ok(Cow::Borrowed(input));
        }

        self.engine.normalize(input, form)
    }

    /// как normalize_to, но для NONE и отключенной нормализации движок не вызывается
    pub fn normalize_string_to<'a>(
        &self,
        input: &'a [u8],
        form: Option<NormalizationForm>,
    ) -> Result<Cow<'a, [u8]>, NormalizeError>
    {
        match self.target(form) {
            NormalizationForm::None => Ok(Cow::Borrowed(input)),
            form => self.normalize_to(input, Some(form)),
        }
    }

    /// проверка UTF-8 и нормализация. если результат начинается с комбинируемого символа,
    /// перед ним ставится U+25CC, чтобы при конкатенации он не скомбинировался с предыдущим текстом
    pub fn filter_utf8<'a>(
        &self,
        input: &'a [u8],
        form: Option<NormalizationForm>,
    ) -> Result<Cow<'a, [u8]>, NormalizeError>
    {
        utf8::decode(input)?;

        let normalized = self.normalize_string_to(input, form)?;

        let leading = utf8::decode(&normalized)?
            .chars()
            .next()
            .map(|first| TABLES.ccc(first as u32));

        Ok(match leading {
            Some(ccc) if ccc != 0 => {
                let mut filtered = Vec::with_capacity(LEADING_COMBINATOR.len() + normalized.len());
                filtered.extend_from_slice(LEADING_COMBINATOR.as_bytes());
                filtered.extend_from_slice(&normalized);

                Cow::Owned(filtered)
            }
            _ => normalized,
        })
    }

    /// корректный UTF-8, который filter_utf8 не меняет
    pub fn is_well_formed_utf8(&self, input: &[u8], form: Option<NormalizationForm>) -> bool
    {
        match self.filter_utf8(input, form) {
            Ok(filtered) => *filtered == *input,
            Err(_) => false,
        }
    }
}
