use std::borrow::Cow;

use crate::composition::compose;
use crate::decomposition::decompose_code;
use crate::ordering::reorder;
use crate::quick_check::quick_check;
use crate::quick_check::QuickCheck;
use crate::utf8::stable_prefix_len;
use crate::Codepoint;
use crate::NormalizationForm;

/// нормализация последовательности кодпоинтов: декомпозиция -> канонический порядок -> (композиция)
pub fn normalize_codepoints<I>(input: I, form: NormalizationForm) -> Vec<Codepoint>
where
    I: IntoIterator<Item = char>,
{
    let compatibility = form.is_compatibility();
    let mac_variant = form == NormalizationForm::NfdMac;

    let mut buffer = Vec::new();

    if form == NormalizationForm::None {
        input
            .into_iter()
            .for_each(|c| buffer.push(Codepoint::from_code(u32::from(c))));

        return buffer;
    }

    for c in input {
        decompose_code(u32::from(c), compatibility, mac_variant, &mut buffer);
    }

    reorder(&mut buffer);

    match form.is_composing() {
        true => compose(&buffer),
        false => buffer,
    }
}

/// нормализация строки. если строка не изменилась - возвращается заимствованная исходная строка
pub fn normalize_str(input: &str, form: NormalizationForm) -> Cow<'_, str>
{
    if form == NormalizationForm::None {
        return Cow::Borrowed(input);
    }

    let stable = stable_prefix_len(input, form.first_byte_boundary());

    // текст, состоящий только из символов до границы формы, уже нормализован
    if stable == input.len() {
        return Cow::Borrowed(input);
    }

    // последний стабильный символ может оказаться стартером для последующей композиции
    let split = input[.. stable]
        .char_indices()
        .next_back()
        .map_or(0, |(i, _)| i);

    let (prefix, tail) = input.split_at(split);

    let mut result = String::with_capacity(input.len() + input.len() / 2);
    result.push_str(prefix);

    normalize_codepoints(tail.chars(), form)
        .into_iter()
        .for_each(|c| result.push(char::from(c)));

    match result == input {
        true => Cow::Borrowed(input),
        false => Cow::Owned(result),
    }
}

/// строгая проверка нормализованности: быстрая проверка, в случае "возможно" - полная нормализация
pub fn is_normalized_str(input: &str, form: NormalizationForm) -> bool
{
    match quick_check(input, form) {
        QuickCheck::Yes => true,
        QuickCheck::No => false,
        QuickCheck::Maybe => {
            tracing::trace!(%form, len = input.len(), "quick check is inconclusive, normalizing");

            matches!(normalize_str(input, form), Cow::Borrowed(_))
        }
    }
}
