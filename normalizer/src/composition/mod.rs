use unicode_normalization_source::TABLES;

use crate::Codepoint;

pub use hangul::compose_hangul;
mod hangul;

/// каноническая композиция последовательности, прошедшей декомпозицию и канонический порядок.
///
/// кодпоинт комбинируется с последним стартером, если между ними нет блокирующего кодпоинта -
/// стартера или нескомбинированного нестартера с CCC не меньше текущего, и результат не является
/// исключением композиции
pub fn compose(codepoints: &[Codepoint]) -> Vec<Codepoint>
{
    let mut result: Vec<Codepoint> = Vec::with_capacity(codepoints.len());

    // позиция стартера в результате
    let mut starter: Option<usize> = None;
    // CCC последнего нескомбинированного кодпоинта после стартера
    let mut recent_skipped_ccc: Option<u8> = None;

    for &codepoint in codepoints {
        let ccc = codepoint.ccc();

        if let Some(index) = starter {
            let blocked = match recent_skipped_ccc {
                Some(skipped) => skipped == 0 || skipped >= ccc,
                None => false,
            };

            if !blocked {
                if let Some(composite) = combine(result[index].code(), codepoint.code()) {
                    result[index] = Codepoint::from_code(composite);
                    continue;
                }
            }
        }

        match codepoint.is_starter() {
            true => {
                starter = Some(result.len());
                recent_skipped_ccc = None;
            }
            false => recent_skipped_ccc = Some(ccc),
        }

        result.push(codepoint);
    }

    result
}

/// композиция пары кодпоинтов с учётом исключений
#[inline(always)]
pub fn combine(first: u32, second: u32) -> Option<u32>
{
    if let Some(composite) = compose_hangul(first, second) {
        return Some(composite);
    }

    TABLES
        .composition(first, second)
        .filter(|composite| !TABLES.is_composition_exclusion(*composite))
}
