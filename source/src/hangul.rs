// слоги хангыль не хранятся в таблицах - их декомпозиция и композиция вычисляются.
// в блоке чамо (U+1100..U+11FF) могут быть скомбинированы кодпоинты:
//  - U+1100..=U+1112 (L, ведущие согласные)
//  - U+1161..=U+1175 (V, гласные)
//  - U+11A8..=U+11C2 (T, завершающие согласные)

/// начало блока ведущих согласных чамо
pub const HANGUL_L_BASE: u32 = 0x1100;
/// количество ведущих согласных
pub const HANGUL_L_COUNT: u32 = 19;
/// начало блока гласных чамо
pub const HANGUL_V_BASE: u32 = 0x1161;
/// количество гласных
pub const HANGUL_V_COUNT: u32 = 21;
/// начало блока завершающих согласных
pub const HANGUL_T_BASE: u32 = 0x11A8;
/// количество завершающих согласных
pub const HANGUL_T_COUNT: u32 = 27;
/// количество кодпоинтов на блок LV
pub const HANGUL_T_BLOCK_SIZE: u32 = HANGUL_T_COUNT + 1;
/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = 11172;
/// количество гласных * количество завершающих согласных
pub const HANGUL_N_COUNT: u32 = 588;

/// слог хангыль?
#[inline(always)]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// гласная или завершающая согласная чамо, которая может быть скомбинирована с предыдущим кодпоинтом
#[inline(always)]
pub fn is_hangul_vt(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_V_BASE) < HANGUL_V_COUNT
        || code.wrapping_sub(HANGUL_T_BASE) < HANGUL_T_COUNT
}

/// декомпозиция слога хангыль: L, V и (возможно) T
#[inline(always)]
pub fn decompose_hangul_syllable(code: u32) -> ([u32; 3], usize)
{
    let lvt = code.wrapping_sub(HANGUL_S_BASE);

    let l = HANGUL_L_BASE + lvt / HANGUL_N_COUNT;
    let v = HANGUL_V_BASE + (lvt % HANGUL_N_COUNT) / HANGUL_T_BLOCK_SIZE;
    let t = lvt % HANGUL_T_BLOCK_SIZE;

    match t {
        0 => ([l, v, 0], 2),
        _ => ([l, v, HANGUL_T_BASE + t - 1], 3),
    }
}
