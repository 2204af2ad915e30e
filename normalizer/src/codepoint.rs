/// кодпоинт для нормализации в виде u32: код в старших битах, CCC - в младшем байте
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Codepoint(u32);

impl From<Codepoint> for char
{
    #[inline(always)]
    fn from(value: Codepoint) -> Self
    {
        // кодпоинты берутся только из char или из таблиц, построенных по char
        char::from_u32(value.code()).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl core::fmt::Debug for Codepoint
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "{{ code: U+{:04X}, ccc: {} }}",
            self.0 >> 8,
            self.0 as u8
        )
    }
}

impl Codepoint
{
    #[inline(always)]
    pub fn code(&self) -> u32
    {
        self.0 >> 8
    }

    #[inline(always)]
    pub fn ccc(&self) -> u8
    {
        self.0 as u8
    }

    #[inline(always)]
    pub fn is_starter(&self) -> bool
    {
        self.0 as u8 == 0
    }

    /// значение из массива расширений таблиц
    #[inline(always)]
    pub fn from_baked(value: u32) -> Self
    {
        Self(value)
    }

    #[inline(always)]
    pub fn from_code_and_ccc(code: u32, ccc: u8) -> Self
    {
        Self(code << 8 | (ccc as u32))
    }

    /// стартер
    #[inline(always)]
    pub fn from_code(code: u32) -> Self
    {
        Self(code << 8)
    }
}
