use core::fmt;
use core::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::NormalizeError;

/// форма нормализации. числовые значения стабильны и используются в конфигурации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NormalizationForm
{
    /// без нормализации
    None = 1,
    /// каноническая декомпозиция
    Nfd = 2,
    /// декомпозиция совместимости
    Nfkd = 3,
    /// каноническая декомпозиция + каноническая композиция
    Nfc = 4,
    /// декомпозиция совместимости + каноническая композиция
    Nfkc = 5,
    /// вариант NFD файловых систем Apple
    NfdMac = 32,
}

impl NormalizationForm
{
    pub const ALL: [NormalizationForm; 6] = [
        NormalizationForm::None,
        NormalizationForm::Nfd,
        NormalizationForm::Nfkd,
        NormalizationForm::Nfc,
        NormalizationForm::Nfkc,
        NormalizationForm::NfdMac,
    ];

    /// числовой код формы
    #[inline(always)]
    pub fn code(self) -> u8
    {
        self as u8
    }

    /// требуется ли композиция
    #[inline(always)]
    pub fn is_composing(self) -> bool
    {
        matches!(self, NormalizationForm::Nfc | NormalizationForm::Nfkc)
    }

    /// используется ли декомпозиция совместимости
    #[inline(always)]
    pub fn is_compatibility(self) -> bool
    {
        matches!(self, NormalizationForm::Nfkd | NormalizationForm::Nfkc)
    }

    /// первый байт UTF-8, начиная с которого символы могут измениться при нормализации:
    /// NFC - U+0300, NFD - U+00C0, NFKC и NFKD - U+0080
    #[inline(always)]
    pub fn first_byte_boundary(self) -> u8
    {
        match self {
            NormalizationForm::None => u8::MAX,
            NormalizationForm::Nfc => 0xCC,
            NormalizationForm::Nfd | NormalizationForm::NfdMac => 0xC3,
            NormalizationForm::Nfkd | NormalizationForm::Nfkc => 0xC2,
        }
    }

    /// название формы
    pub fn name(self) -> &'static str
    {
        match self {
            NormalizationForm::None => "NONE",
            NormalizationForm::Nfd => "NFD",
            NormalizationForm::Nfkd => "NFKD",
            NormalizationForm::Nfc => "NFC",
            NormalizationForm::Nfkc => "NFKC",
            NormalizationForm::NfdMac => "NFD_MAC",
        }
    }
}

impl fmt::Display for NormalizationForm
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for NormalizationForm
{
    type Error = NormalizeError;

    fn try_from(code: i64) -> Result<Self, Self::Error>
    {
        NormalizationForm::ALL
            .into_iter()
            .find(|form| form.code() as i64 == code)
            .ok_or(NormalizeError::InvalidForm(code))
    }
}

/// множество форм нормализации
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FormSet(u8);

impl FormSet
{
    pub const EMPTY: FormSet = FormSet(0);

    /// все формы, включая NFD_MAC
    pub const ALL: FormSet = FormSet(0b_0011_1111);

    /// NONE и четыре стандартные формы
    pub const STANDARD: FormSet = FormSet(0b_0001_1111);

    #[inline(always)]
    fn bit(form: NormalizationForm) -> u8
    {
        match form {
            NormalizationForm::None => 1 << 0,
            NormalizationForm::Nfd => 1 << 1,
            NormalizationForm::Nfkd => 1 << 2,
            NormalizationForm::Nfc => 1 << 3,
            NormalizationForm::Nfkc => 1 << 4,
            NormalizationForm::NfdMac => 1 << 5,
        }
    }

    pub fn with(self, form: NormalizationForm) -> Self
    {
        Self(self.0 | Self::bit(form))
    }

    #[inline(always)]
    pub fn contains(&self, form: NormalizationForm) -> bool
    {
        self.0 & Self::bit(form) != 0
    }

    pub fn is_empty(&self) -> bool
    {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = NormalizationForm> + '_
    {
        NormalizationForm::ALL
            .into_iter()
            .filter(|form| self.contains(*form))
    }
}

impl FromIterator<NormalizationForm> for FormSet
{
    fn from_iter<I: IntoIterator<Item = NormalizationForm>>(iter: I) -> Self
    {
        iter.into_iter().fold(FormSet::EMPTY, FormSet::with)
    }
}

impl fmt::Debug for FormSet
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// настройка формы: нормализация отключена (код 0) или задана форма
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSetting
{
    Disabled,
    Enabled(NormalizationForm),
}

impl FormSetting
{
    pub fn code(self) -> u8
    {
        match self {
            FormSetting::Disabled => 0,
            FormSetting::Enabled(form) => form.code(),
        }
    }

    /// форма, которую нужно применять; отключенная нормализация ведёт себя как NONE
    pub fn form(self) -> NormalizationForm
    {
        match self {
            FormSetting::Disabled => NormalizationForm::None,
            FormSetting::Enabled(form) => form,
        }
    }

    pub fn is_enabled(self) -> bool
    {
        self != FormSetting::Disabled
    }
}

impl fmt::Display for FormSetting
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            FormSetting::Disabled => f.write_str("disabled"),
            FormSetting::Enabled(form) => form.fmt(f),
        }
    }
}

impl TryFrom<i64> for FormSetting
{
    type Error = NormalizeError;

    fn try_from(code: i64) -> Result<Self, Self::Error>
    {
        match code {
            0 => Ok(FormSetting::Disabled),
            _ => NormalizationForm::try_from(code).map(FormSetting::Enabled),
        }
    }
}

impl FromStr for FormSetting
{
    type Err = NormalizeError;

    /// разбор названия формы или её синонима
    fn from_str(value: &str) -> Result<Self, Self::Err>
    {
        let trimmed = value.trim();

        if let "0" | "1" | "2" | "3" | "4" | "5" | "32" = trimmed {
            return trimmed
                .parse::<i64>()
                .map_err(|_| NormalizeError::InvalidArgument(value.to_owned()))
                .and_then(FormSetting::try_from);
        }

        let name = trimmed
            .to_uppercase()
            .replace('-', "_")
            .replace("NF", "")
            .replace("FORM_", "");

        let form = match name.as_str() {
            "" | "NULL" | "FALSE" => return Ok(FormSetting::Disabled),
            "NONE" | "TRUE" | "BINARY" | "DEFAULT" | "VALIDATE" => NormalizationForm::None,
            "D" | "DECOMPOSE" | "COLLATION" => NormalizationForm::Nfd,
            "KD" => NormalizationForm::Nfkd,
            "C" | "COMPOSE" | "RECOMPOSE" | "LEGACY" | "HTML5" => NormalizationForm::Nfc,
            "KC" | "MATCHING" => NormalizationForm::Nfkc,
            "D_MAC" | "MAC" => NormalizationForm::NfdMac,
            _ => return Err(NormalizeError::InvalidArgument(value.to_owned())),
        };

        Ok(FormSetting::Enabled(form))
    }
}

/// значение формы в конфигурации: число, логическое значение или строка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue
{
    Bool(bool),
    Int(i64),
    Text(String),
}

impl From<NormalizationForm> for FormValue
{
    fn from(form: NormalizationForm) -> Self
    {
        FormValue::Int(form.code() as i64)
    }
}

impl From<&str> for FormValue
{
    fn from(value: &str) -> Self
    {
        FormValue::Text(value.to_owned())
    }
}

/// получить форму из значения конфигурации. пустое значение отключает нормализацию
pub fn resolve(value: Option<&FormValue>) -> Result<FormSetting, NormalizeError>
{
    match value {
        None => Ok(FormSetting::Disabled),
        Some(FormValue::Bool(true)) => Ok(FormSetting::Enabled(NormalizationForm::None)),
        Some(FormValue::Bool(false)) => Ok(FormSetting::Disabled),
        Some(FormValue::Int(code)) => FormSetting::try_from(*code)
            .map_err(|_| NormalizeError::InvalidArgument(code.to_string())),
        Some(FormValue::Text(text)) => text.parse(),
    }
}
