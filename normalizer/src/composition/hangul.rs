use unicode_normalization_source::hangul::*;

/// скомбинировать чамо хангыль: L + V -> LV, LV + T -> LVT
#[inline(always)]
pub fn compose_hangul(first: u32, second: u32) -> Option<u32>
{
    let l = first.wrapping_sub(HANGUL_L_BASE);

    if l < HANGUL_L_COUNT {
        let v = second.wrapping_sub(HANGUL_V_BASE);

        return match v < HANGUL_V_COUNT {
            true => Some(HANGUL_S_BASE + l * HANGUL_N_COUNT + v * HANGUL_T_BLOCK_SIZE),
            false => None,
        };
    }

    let lv = first.wrapping_sub(HANGUL_S_BASE);

    if lv < HANGUL_S_COUNT && lv % HANGUL_T_BLOCK_SIZE == 0 {
        let t = second.wrapping_sub(HANGUL_T_BASE);

        return match t < HANGUL_T_COUNT {
            true => Some(first + t + 1),
            false => None,
        };
    }

    None
}
