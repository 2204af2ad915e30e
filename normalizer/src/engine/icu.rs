use std::borrow::Cow;

use icu_normalizer::ComposingNormalizer;
use icu_normalizer::DecomposingNormalizer;

use super::EngineDescriptor;
use super::NormalizerEngine;
use super::Strictness;
use crate::utf8;
use crate::FormSet;
use crate::NormalizationForm;
use crate::NormalizeError;

/// версия Unicode встроенных данных icu_normalizer 1.x
const ICU_UNICODE_VERSION: &str = "15.1.0";

/// движок на основе ICU4X
pub struct IcuEngine
{
    descriptor: EngineDescriptor,
}

/// нормализатор ICU для формы
enum IcuNormalizer
{
    Composing(ComposingNormalizer),
    Decomposing(DecomposingNormalizer),
}

impl IcuNormalizer
{
    /// встроенные данные статичны, создание нормализатора не требует выделения памяти
    fn new(form: NormalizationForm) -> Option<Self>
    {
        Some(match form {
            NormalizationForm::Nfc => IcuNormalizer::Composing(ComposingNormalizer::new_nfc()),
            NormalizationForm::Nfkc => IcuNormalizer::Composing(ComposingNormalizer::new_nfkc()),
            NormalizationForm::Nfd => IcuNormalizer::Decomposing(DecomposingNormalizer::new_nfd()),
            NormalizationForm::Nfkd => IcuNormalizer::Decomposing(DecomposingNormalizer::new_nfkd()),
            NormalizationForm::None | NormalizationForm::NfdMac => return None,
        })
    }

    fn normalize(&self, text: &str) -> String
    {
        match self {
            IcuNormalizer::Composing(normalizer) => normalizer.normalize(text),
            IcuNormalizer::Decomposing(normalizer) => normalizer.normalize(text),
        }
    }

    fn is_normalized(&self, text: &str) -> bool
    {
        match self {
            IcuNormalizer::Composing(normalizer) => normalizer.is_normalized(text),
            IcuNormalizer::Decomposing(normalizer) => normalizer.is_normalized(text),
        }
    }
}

impl IcuEngine
{
    pub const ICU: &'static str = "icu";

    pub fn new() -> Self
    {
        Self {
            descriptor: EngineDescriptor {
                identifier: Self::ICU,
                conformance_level: ICU_UNICODE_VERSION.to_owned(),
                strictness: Strictness::Strict,
                forms: FormSet::STANDARD,
                availability: || true,
            },
        }
    }

    fn normalizer(&self, form: NormalizationForm) -> Result<Option<IcuNormalizer>, NormalizeError>
    {
        self.check_form(form)?;

        Ok(IcuNormalizer::new(form))
    }
}

impl Default for IcuEngine
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl NormalizerEngine for IcuEngine
{
    fn descriptor(&self) -> &EngineDescriptor
    {
        &self.descriptor
    }

    fn normalize<'a>(
        &self,
        input: &'a [u8],
        form: NormalizationForm,
    ) -> Result<Cow<'a, [u8]>, NormalizeError>
    {
        let normalizer = match self.normalizer(form)? {
            Some(normalizer) => normalizer,
            None => return Ok(Cow::Borrowed(input)),
        };

        let text = utf8::decode(input)?;
        let normalized = normalizer.normalize(text);

        Ok(match normalized == text {
            true => Cow::Borrowed(input),
            false => Cow::Owned(normalized.into_bytes()),
        })
    }

    fn is_normalized(&self, input: &[u8], form: NormalizationForm) -> Result<bool, NormalizeError>
    {
        let normalizer = match self.normalizer(form)? {
            Some(normalizer) => normalizer,
            None => return Ok(true),
        };

        Ok(match utf8::decode(input) {
            Ok(text) => normalizer.is_normalized(text),
            Err(_) => false,
        })
    }
}
