use unicode_normalization_source::hangul::decompose_hangul_syllable;
use unicode_normalization_source::mac::is_mac_decomposition_exception;
use unicode_normalization_source::mac::mac_substitution;
use unicode_normalization_source::tables::FLAG_COMPAT;
use unicode_normalization_source::tables::FLAG_HANGUL;
use unicode_normalization_source::TABLES;

use crate::Codepoint;

/// полная декомпозиция последовательности символов.
///
/// для форм совместимости используется декомпозиция совместимости, если она есть, иначе - каноническая.
/// в варианте NFD_MAC кодпоинты из диапазонов-исключений не декомпозируются
pub fn decompose<I>(input: I, compatibility: bool, mac_variant: bool) -> Vec<Codepoint>
where
    I: IntoIterator<Item = char>,
{
    let iter = input.into_iter();
    let mut result = Vec::with_capacity(iter.size_hint().0);

    for c in iter {
        decompose_code(u32::from(c), compatibility, mac_variant, &mut result);
    }

    result
}

/// записать декомпозицию кодпоинта в буфер
#[inline(always)]
pub fn decompose_code(code: u32, compatibility: bool, mac_variant: bool, buffer: &mut Vec<Codepoint>)
{
    let entry = TABLES.entry(code);

    if mac_variant {
        if let Some(replacement) = mac_substitution(code) {
            buffer.push(Codepoint::from_code_and_ccc(replacement, TABLES.ccc(replacement)));
            return;
        }

        if is_mac_decomposition_exception(code) {
            buffer.push(Codepoint::from_code_and_ccc(code, entry.ccc));
            return;
        }
    }

    if entry.has(FLAG_HANGUL) {
        let (jamo, len) = decompose_hangul_syllable(code);

        jamo[.. len]
            .iter()
            .for_each(|c| buffer.push(Codepoint::from_code(*c)));

        return;
    }

    let expansion = match compatibility && entry.has(FLAG_COMPAT) {
        true => TABLES.compatibility(&entry),
        false => TABLES.canonical(&entry),
    };

    match expansion.is_empty() {
        true => buffer.push(Codepoint::from_code_and_ccc(code, entry.ccc)),
        false => expansion
            .iter()
            .for_each(|c| buffer.push(Codepoint::from_baked(*c))),
    }
}
