use std::borrow::Cow;

use super::EngineDescriptor;
use super::NormalizerEngine;
use super::Strictness;
use crate::utf8;
use crate::FormSet;
use crate::NormalizationForm;
use crate::NormalizeError;

/// первый байт UTF-8 символа U+0300: символы до него NFC-нормализованы
const NFC_FIRST_BYTE_BOUNDARY: u8 = 0xCC;

/// заглушка: справляется только с уже нормализованными строками из символов до U+0300
pub struct StubEngine
{
    descriptor: EngineDescriptor,
}

impl StubEngine
{
    pub const STUB: &'static str = "stub";

    pub fn new() -> Self
    {
        Self {
            descriptor: EngineDescriptor {
                identifier: Self::STUB,
                conformance_level: "0.0.0".to_owned(),
                strictness: Strictness::Loose,
                forms: FormSet::EMPTY
                    .with(NormalizationForm::None)
                    .with(NormalizationForm::Nfc),
                availability: || true,
            },
        }
    }

    /// строка состоит только из символов, которые NFC не меняет?
    fn is_trivial(input: &[u8]) -> Result<bool, NormalizeError>
    {
        utf8::decode(input)?;

        Ok(input.iter().all(|&byte| byte < NFC_FIRST_BYTE_BOUNDARY))
    }
}

impl Default for StubEngine
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl NormalizerEngine for StubEngine
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

        if form == NormalizationForm::None || Self::is_trivial(input)? {
            return Ok(Cow::Borrowed(input));
        }

        Err(NormalizeError::UnsupportedInput {
            engine: self.identifier().to_owned(),
            form,
        })
    }

    fn is_normalized(&self, input: &[u8], form: NormalizationForm) -> Result<bool, NormalizeError>
    {
        self.check_form(form)?;

        if form == NormalizationForm::None {
            return Ok(true);
        }

        Ok(Self::is_trivial(input).unwrap_or(false))
    }
}
