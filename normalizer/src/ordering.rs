use crate::Codepoint;

/// канонический порядок: в каждом отрезке нестартеров стабильно сортируем кодпоинты по CCC.
/// стартеры остаются на своих местах, нестартеры в начале последовательности образуют отдельный отрезок
pub fn reorder(codepoints: &mut [Codepoint])
{
    let len = codepoints.len();
    let mut start = 0;

    while start < len {
        if codepoints[start].is_starter() {
            start += 1;
            continue;
        }

        let end = codepoints[start ..]
            .iter()
            .position(|c| c.is_starter())
            .map_or(len, |offset| start + offset);

        if end - start > 1 {
            codepoints[start .. end].sort_by_key(|c| c.ccc());
        }

        start = end;
    }
}
