use std::borrow::Cow;

use unicode_normalization_source::CONFORMANCE_LEVEL;

use super::into_bytes;
use super::EngineDescriptor;
use super::NormalizerEngine;
use super::Strictness;
use crate::normalization::is_normalized_str;
use crate::normalization::normalize_str;
use crate::quick_check::quick_check_boundary;
use crate::quick_check::QuickCheck;
use crate::utf8;
use crate::FormSet;
use crate::NormalizationForm;
use crate::NormalizeError;

/// движок на собственных таблицах нормализации
pub struct TableEngine
{
    descriptor: EngineDescriptor,
}

impl TableEngine
{
    pub const TABLE: &'static str = "table";
    pub const SHIM: &'static str = "shim";
    pub const MAC: &'static str = "mac";

    /// строгий движок стандартных форм
    pub fn strict() -> Self
    {
        Self::with(Self::TABLE, Strictness::Strict, FormSet::STANDARD)
    }

    /// нестрогий движок стандартных форм: проверка нормализованности только по границе стабильных символов
    pub fn loose() -> Self
    {
        Self::with(Self::SHIM, Strictness::Loose, FormSet::STANDARD)
    }

    /// движок с поддержкой NFD_MAC
    pub fn mac() -> Self
    {
        Self::with(Self::MAC, Strictness::Strict, FormSet::ALL)
    }

    fn with(identifier: &'static str, strictness: Strictness, forms: FormSet) -> Self
    {
        Self {
            descriptor: EngineDescriptor {
                identifier,
                conformance_level: CONFORMANCE_LEVEL.clone(),
                strictness,
                forms,
                availability: || true,
            },
        }
    }
}

impl NormalizerEngine for TableEngine
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
        self.check_form(form)?;

        if form == NormalizationForm::None {
            return Ok(Cow::Borrowed(input));
        }

        let text = utf8::decode(input)?;

        Ok(into_bytes(input, normalize_str(text, form)))
    }

    fn is_normalized(&self, input: &[u8], form: NormalizationForm) -> Result<bool, NormalizeError>
    {
        self.check_form(form)?;

        if form == NormalizationForm::None {
            return Ok(true);
        }

        let text = match utf8::decode(input) {
            Ok(text) => text,
            Err(_) => return Ok(false),
        };

        Ok(match self.descriptor.strictness {
            Strictness::Strict => is_normalized_str(text, form),
            Strictness::Loose => quick_check_boundary(text, form) == QuickCheck::Yes,
        })
    }
}
