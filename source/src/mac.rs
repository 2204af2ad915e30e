//! данные варианта NFD, используемого файловыми системами Apple (NFD_MAC)

use core::ops::RangeInclusive;

/// диапазоны, кодпоинты которых не декомпозируются в NFD_MAC:
/// общая пунктуация и символы, CJK-совместимость и её дополнение
pub const MAC_DECOMPOSITION_EXCEPTIONS: [RangeInclusive<u32>; 3] =
    [0x2000 ..= 0x2FFF, 0xF900 ..= 0xFAFF, 0x2F800 ..= 0x2FAFF];

/// явные замены: дополнение CJK-совместимости не представимо в именах файлов и заменяется на U+FFFD
pub const MAC_SUBSTITUTIONS: [(RangeInclusive<u32>, u32); 1] = [(0x2F800 ..= 0x2FAFF, 0xFFFD)];

/// кодпоинт не декомпозируется в NFD_MAC?
#[inline(always)]
pub fn is_mac_decomposition_exception(code: u32) -> bool
{
    MAC_DECOMPOSITION_EXCEPTIONS
        .iter()
        .any(|range| range.contains(&code))
}

/// замена кодпоинта в NFD_MAC, если она есть
#[inline(always)]
pub fn mac_substitution(code: u32) -> Option<u32>
{
    MAC_SUBSTITUTIONS
        .iter()
        .find(|(range, _)| range.contains(&code))
        .map(|(_, replacement)| *replacement)
}
