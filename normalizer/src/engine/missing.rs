use std::borrow::Cow;

use super::EngineDescriptor;
use super::NormalizerEngine;
use super::Strictness;
use crate::FormSet;
use crate::NormalizationForm;
use crate::NormalizeError;

/// отсутствующая реализация: выбирается, когда ни один движок не подошёл.
/// любая операция завершается ошибкой EngineUnavailable
pub struct MissingEngine
{
    descriptor: EngineDescriptor,
    reason: String,
}

impl MissingEngine
{
    pub const MISSING: &'static str = "missing";

    pub fn new(reason: impl Into<String>) -> Self
    {
        Self {
            descriptor: EngineDescriptor {
                identifier: Self::MISSING,
                conformance_level: "0.0.0".to_owned(),
                strictness: Strictness::Loose,
                forms: FormSet::EMPTY,
                availability: || false,
            },
            reason: reason.into(),
        }
    }

    fn unavailable(&self) -> NormalizeError
    {
        NormalizeError::EngineUnavailable {
            reason: self.reason.clone(),
        }
    }
}

impl NormalizerEngine for MissingEngine
{
    fn descriptor(&self) -> &EngineDescriptor
    {
        &self.descriptor
    }

    fn normalize<'a>(
        &self,
        _input: &'a [u8],
        _form: NormalizationForm,
    ) -> Result<Cow<'a, [u8]>, NormalizeError>
    {
        Err(self.unavailable())
    }

    fn is_normalized(&self, _input: &[u8], _form: NormalizationForm) -> Result<bool, NormalizeError>
    {
        Err(self.unavailable())
    }
}
