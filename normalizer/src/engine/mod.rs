use std::borrow::Cow;

use crate::FormSet;
use crate::NormalizationForm;
use crate::NormalizeError;

#[cfg(feature = "icu")]
pub use icu::IcuEngine;
pub use missing::MissingEngine;
pub use stub::StubEngine;
pub use table::TableEngine;

#[cfg(feature = "icu")]
mod icu;
mod missing;
mod stub;
mod table;

/// строгость проверки нормализованности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strictness
{
    /// результат "возможно" быстрой проверки проверяется полной нормализацией
    Strict,
    /// результат "возможно" считается ненормализованной строкой
    Loose,
}

/// описание движка нормализации
#[derive(Debug, Clone)]
pub struct EngineDescriptor
{
    /// идентификатор движка
    pub identifier: &'static str,
    /// версия Unicode
    pub conformance_level: String,
    pub strictness: Strictness,
    /// поддерживаемые формы
    pub forms: FormSet,
    /// доступен ли движок; проверка должна быть дешёвой и без побочных эффектов
    pub availability: fn() -> bool,
}

/// реализация нормализации
pub trait NormalizerEngine: Send + Sync
{
    fn descriptor(&self) -> &EngineDescriptor;

    /// нормализация байт UTF-8. Cow::Borrowed - данные не изменились
    fn normalize<'a>(
        &self,
        input: &'a [u8],
        form: NormalizationForm,
    ) -> Result<Cow<'a, [u8]>, NormalizeError>;

    /// нормализованы ли данные. некорректный UTF-8 не является нормализованным
    fn is_normalized(&self, input: &[u8], form: NormalizationForm) -> Result<bool, NormalizeError>;

    fn identifier(&self) -> &'static str
    {
        self.descriptor().identifier
    }

    fn conformance_level(&self) -> &str
    {
        &self.descriptor().conformance_level
    }

    fn supported_forms(&self) -> FormSet
    {
        self.descriptor().forms
    }

    fn is_strict(&self) -> bool
    {
        self.descriptor().strictness == Strictness::Strict
    }

    fn is_available(&self) -> bool
    {
        (self.descriptor().availability)()
    }

    fn supports(&self, form: NormalizationForm) -> bool
    {
        self.descriptor().forms.contains(form)
    }

    /// UnsupportedForm, если форма не поддерживается
    fn check_form(&self, form: NormalizationForm) -> Result<(), NormalizeError>
    {
        match self.supports(form) {
            true => Ok(()),
            false => Err(NormalizeError::UnsupportedForm {
                engine: self.identifier().to_owned(),
                form,
            }),
        }
    }
}

impl core::fmt::Debug for dyn NormalizerEngine
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.debug_struct("NormalizerEngine")
            .field("identifier", &self.identifier())
            .field("strict", &self.is_strict())
            .field("forms", &self.supported_forms())
            .finish()
    }
}

/// результат нормализации строки в виде байт
#[inline(always)]
fn into_bytes<'a>(input: &'a [u8], normalized: Cow<'_, str>) -> Cow<'a, [u8]>
{
    match normalized {
        Cow::Borrowed(_) => Cow::Borrowed(input),
        Cow::Owned(string) => Cow::Owned(string.into_bytes()),
    }
}
