use unicode_normalization_source::NormalizationTables;
use unicode_normalization_source::TABLES;

pub use unicode_normalization_source::QuickCheck;

use crate::utf8::stable_prefix_len;
use crate::NormalizationForm;

/// свойство "стабильности" кодпоинта для формы
type QuickCheckProperty = fn(&NormalizationTables, u32) -> QuickCheck;

#[inline(always)]
fn property(form: NormalizationForm) -> QuickCheckProperty
{
    match form {
        NormalizationForm::None => |_, _| QuickCheck::Yes,
        NormalizationForm::Nfd => NormalizationTables::qc_nfd,
        NormalizationForm::Nfkd => NormalizationTables::qc_nfkd,
        NormalizationForm::Nfc => NormalizationTables::qc_nfc,
        NormalizationForm::Nfkc => NormalizationTables::qc_nfkc,
        NormalizationForm::NfdMac => NormalizationTables::qc_nfd_mac,
    }
}

/// быстрая проверка: порядок CCC + свойство кодпоинтов формы.
/// "нет" - строка точно не нормализована, "возможно" - требуется полная проверка
pub fn quick_check(input: &str, form: NormalizationForm) -> QuickCheck
{
    if form == NormalizationForm::None {
        return QuickCheck::Yes;
    }

    let property = property(form);
    let stable = stable_prefix_len(input, form.first_byte_boundary());

    let mut result = QuickCheck::Yes;
    let mut last_ccc = 0;

    for c in input[stable ..].chars() {
        let code = u32::from(c);
        let ccc = TABLES.ccc(code);

        if ccc != 0 && last_ccc > ccc {
            return QuickCheck::No;
        }

        match property(&TABLES, code) {
            QuickCheck::No => return QuickCheck::No,
            QuickCheck::Maybe => result = QuickCheck::Maybe,
            QuickCheck::Yes => (),
        }

        last_ccc = ccc;
    }

    result
}

/// быстрая проверка по одной лишь границе стабильных символов формы: "да" или "возможно"
pub fn quick_check_boundary(input: &str, form: NormalizationForm) -> QuickCheck
{
    if form == NormalizationForm::None {
        return QuickCheck::Yes;
    }

    match stable_prefix_len(input, form.first_byte_boundary()) == input.len() {
        true => QuickCheck::Yes,
        false => QuickCheck::Maybe,
    }
}
