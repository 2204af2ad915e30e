use crate::NormalizeError;

/// проверяем, что входные данные - корректный UTF-8
#[inline(always)]
pub fn decode(input: &[u8]) -> Result<&str, NormalizeError>
{
    core::str::from_utf8(input).map_err(|error| NormalizeError::InvalidEncoding {
        valid_up_to: error.valid_up_to(),
    })
}

/// длина отрезка строки, все символы которого меньше граничного значения первого байта UTF-8.
/// байты продолжения (0x80..0xBF) меньше любой используемой границы, поэтому отрезок всегда
/// заканчивается на границе символа
#[inline(always)]
pub fn stable_prefix_len(input: &str, first_byte_boundary: u8) -> usize
{
    input
        .as_bytes()
        .iter()
        .position(|&byte| byte >= first_byte_boundary)
        .unwrap_or(input.len())
}
