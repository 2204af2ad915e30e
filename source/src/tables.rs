use std::collections::HashMap;
use std::collections::HashSet;

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::char::decompose_canonical;
use unicode_normalization::char::decompose_compatible;
use unicode_normalization::UNICODE_VERSION;

use crate::compositions::derive_compositions;
use crate::hangul::is_hangul_syllable;
use crate::hangul::is_hangul_vt;

lazy_static! {
    /// таблицы нормализации, строятся один раз на процесс
    pub static ref TABLES: NormalizationTables = NormalizationTables::build();
    /// версия Unicode, которой соответствуют таблицы
    pub static ref CONFORMANCE_LEVEL: String = format!(
        "{}.{}.{}",
        UNICODE_VERSION.0, UNICODE_VERSION.1, UNICODE_VERSION.2
    );
}

/// последний просматриваемый кодпоинт. в плоскостях 4..16 нет ни декомпозиций, ни ненулевых CCC
pub const LAST_SCANNED_CODEPOINT: u32 = 0x3FFFF;

/// количество бит, отводимых под смещение кодпоинта внутри блока
pub const BLOCK_BITS: u32 = 7;
/// размер блока
pub const BLOCK_SIZE: usize = 1 << BLOCK_BITS;
/// маска смещения внутри блока
const BLOCK_MASK: usize = BLOCK_SIZE - 1;

/// есть каноническая декомпозиция (в т.ч. слоги хангыль)
pub const FLAG_CANONICAL: u8 = 0b_0000_0001;
/// есть декомпозиция совместимости (включает каноническую)
pub const FLAG_COMPAT: u8 = 0b_0000_0010;
/// декомпозиция совместимости отличается от канонической
pub const FLAG_COMPAT_ONLY: u8 = 0b_0000_0100;
/// исключение композиции (Full_Composition_Exclusion)
pub const FLAG_EXCLUDED: u8 = 0b_0000_1000;
/// может быть скомбинирован с предыдущим кодпоинтом
pub const FLAG_COMBINES_BACKWARDS: u8 = 0b_0001_0000;
/// слог хангыль, декомпозиция вычисляется
pub const FLAG_HANGUL: u8 = 0b_0010_0000;

/// отрезок массива расширений
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expansion
{
    pub index: u32,
    pub len: u8,
}

/// данные кодпоинта
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodepointEntry
{
    /// класс канонического комбинирования
    pub ccc: u8,
    /// флаги FLAG_*
    pub flags: u8,
    /// полная каноническая декомпозиция
    pub canonical: Expansion,
    /// полная декомпозиция совместимости
    pub compat: Expansion,
}

impl CodepointEntry
{
    #[inline(always)]
    pub fn has(&self, flag: u8) -> bool
    {
        self.flags & flag != 0
    }
}

/// запечённый кодпоинт: код в старших битах, CCC - в младшем байте
#[inline(always)]
pub fn bake(code: u32, ccc: u8) -> u32
{
    code << 8 | ccc as u32
}

/// двухуровневая таблица: индекс блоков + данные.
/// блоки, состоящие только из значений по умолчанию, ссылаются на пустой блок в конце данных
#[derive(Debug)]
pub struct BlockTable<T>
{
    index: Vec<u16>,
    data: Vec<T>,
    /// коды до этого значения (не включительно) адресуются в данных напрямую
    continuous_end: u32,
}

impl<T: Copy + Default + PartialEq> BlockTable<T>
{
    /// собрать таблицу из значений, индексированных кодом
    pub fn from_values(values: &[T]) -> Self
    {
        let mut index = Vec::with_capacity(values.len() / BLOCK_SIZE + 1);
        let mut data: Vec<T> = vec![];
        let mut stubbed = vec![];

        let mut continuous = true;
        let mut continuous_end = 0;

        for (i, block) in values.chunks(BLOCK_SIZE).enumerate() {
            if block.iter().all(|value| *value == T::default()) {
                continuous = false;
                stubbed.push(i);
                index.push(0);

                continue;
            }

            index.push((data.len() / BLOCK_SIZE) as u16);
            data.extend_from_slice(block);
            data.resize(data.len().next_multiple_of(BLOCK_SIZE), T::default());

            if continuous {
                continuous_end = ((i + 1) * BLOCK_SIZE) as u32;
            }
        }

        let stub = (data.len() / BLOCK_SIZE) as u16;
        data.resize(data.len() + BLOCK_SIZE, T::default());

        for i in stubbed {
            index[i] = stub;
        }

        Self {
            index,
            data,
            continuous_end,
        }
    }

    #[inline(always)]
    pub fn get(&self, code: u32) -> T
    {
        if code < self.continuous_end {
            return self.data[code as usize];
        }

        match self.index.get((code >> BLOCK_BITS) as usize) {
            Some(&block) => self.data[(block as usize) << BLOCK_BITS | (code as usize & BLOCK_MASK)],
            None => T::default(),
        }
    }

    /// количество блоков данных, включая пустой
    pub fn blocks(&self) -> usize
    {
        self.data.len() / BLOCK_SIZE
    }
}

/// таблицы данных Unicode, необходимые для нормализации
pub struct NormalizationTables
{
    entries: BlockTable<CodepointEntry>,
    /// запечённые кодпоинты декомпозиций
    expansions: Vec<u32>,
    /// пары (первый, второй) -> композиция, включая исключённые композиции
    compositions: HashMap<(u32, u32), u32>,
    /// исключения композиции
    exclusions: HashSet<u32>,
}

impl NormalizationTables
{
    /// данные кодпоинта
    #[inline(always)]
    pub fn entry(&self, code: u32) -> CodepointEntry
    {
        self.entries.get(code)
    }

    /// класс канонического комбинирования, по умолчанию - 0
    #[inline(always)]
    pub fn ccc(&self, code: u32) -> u8
    {
        self.entries.get(code).ccc
    }

    /// полная каноническая декомпозиция (запечённые кодпоинты), пусто - если её нет
    #[inline(always)]
    pub fn canonical(&self, entry: &CodepointEntry) -> &[u32]
    {
        self.expansion(entry.canonical)
    }

    /// полная декомпозиция совместимости (запечённые кодпоинты), пусто - если её нет
    #[inline(always)]
    pub fn compatibility(&self, entry: &CodepointEntry) -> &[u32]
    {
        self.expansion(entry.compat)
    }

    #[inline(always)]
    fn expansion(&self, expansion: Expansion) -> &[u32]
    {
        let from = expansion.index as usize;

        &self.expansions[from .. from + expansion.len as usize]
    }

    /// композиция пары без учёта исключений
    #[inline(always)]
    pub fn composition(&self, first: u32, second: u32) -> Option<u32>
    {
        self.compositions.get(&(first, second)).copied()
    }

    /// является ли кодпоинт исключением композиции?
    #[inline(always)]
    pub fn is_composition_exclusion(&self, code: u32) -> bool
    {
        self.exclusions.contains(&code)
    }

    /// количество пар композиции
    pub fn compositions_count(&self) -> usize
    {
        self.compositions.len()
    }

    /// количество исключений композиции
    pub fn exclusions_count(&self) -> usize
    {
        self.exclusions.len()
    }

    /// построение таблиц по данным unicode-normalization
    fn build() -> Self
    {
        let mut entries = vec![CodepointEntry::default(); LAST_SCANNED_CODEPOINT as usize + 1];
        let mut expansions = vec![];
        let mut decompositions = vec![];

        for code in 0 ..= LAST_SCANNED_CODEPOINT {
            let c = match char::from_u32(code) {
                Some(c) => c,
                None => continue,
            };

            let entry = &mut entries[code as usize];
            entry.ccc = canonical_combining_class(c);

            if is_hangul_syllable(code) {
                entry.flags |= FLAG_HANGUL | FLAG_CANONICAL | FLAG_COMPAT;
                continue;
            }

            let canonical = decomposition(c, false);
            let compat = decomposition(c, true);

            if canonical != [c] {
                assert!(
                    canonical.len() <= 4,
                    "U+{:04X}: canonical decomposition longer than 4 code points",
                    code
                );

                entry.flags |= FLAG_CANONICAL;
                entry.canonical = push_expansion(&mut expansions, &canonical);

                decompositions.push((code, canonical.clone()));
            }

            if compat != [c] {
                entry.flags |= FLAG_COMPAT;
                entry.compat = match compat == canonical {
                    true => entry.canonical,
                    false => {
                        entry.flags |= FLAG_COMPAT_ONLY;
                        push_expansion(&mut expansions, &compat)
                    }
                };
            }
        }

        let compositions = derive_compositions(&decompositions);

        for &code in compositions.exclusions.iter() {
            entries[code as usize].flags |= FLAG_EXCLUDED;
        }

        for &code in compositions.combines_backwards.iter() {
            entries[code as usize].flags |= FLAG_COMBINES_BACKWARDS;
        }

        for code in 0 ..= LAST_SCANNED_CODEPOINT {
            if is_hangul_vt(code) {
                entries[code as usize].flags |= FLAG_COMBINES_BACKWARDS;
            }
        }

        let tables = Self {
            entries: BlockTable::from_values(&entries),
            expansions,
            compositions: compositions.pairs,
            exclusions: compositions.exclusions,
        };

        tables.validate(&decompositions);

        tracing::debug!(
            unicode = CONFORMANCE_LEVEL.as_str(),
            blocks = tables.entries.blocks(),
            expansions = tables.expansions.len(),
            compositions = tables.compositions_count(),
            exclusions = tables.exclusions_count(),
            "normalization tables built"
        );

        tables
    }

    /// декомпозиции полные (неподвижная точка), пары композиций обратимы.
    /// нарушение означает ошибку в исходных данных - дальнейшая работа невозможна
    fn validate(&self, decompositions: &[(u32, Vec<char>)])
    {
        for (code, _) in decompositions {
            let entry = self.entry(*code);

            for &baked in self.canonical(&entry) {
                let inner = self.entry(baked >> 8);

                assert!(
                    !inner.has(FLAG_CANONICAL),
                    "U+{:04X}: canonical decomposition is not a fixed point",
                    code
                );
            }

            for &baked in self.compatibility(&entry) {
                let inner = self.entry(baked >> 8);

                assert!(
                    !inner.has(FLAG_COMPAT),
                    "U+{:04X}: compatibility decomposition is not a fixed point",
                    code
                );
            }
        }

        for (&(first, second), &composite) in self.compositions.iter() {
            let mut expected: Vec<u32> = match self.entry(first) {
                entry if entry.has(FLAG_CANONICAL) => {
                    self.canonical(&entry).iter().map(|c| c >> 8).collect()
                }
                _ => vec![first],
            };
            expected.push(second);

            let entry = self.entry(composite);
            let actual: Vec<u32> = self.canonical(&entry).iter().map(|c| c >> 8).collect();

            assert_eq!(
                actual, expected,
                "U+{:04X}: composition pair does not match its decomposition",
                composite
            );
        }
    }
}

/// полная декомпозиция символа; символ без декомпозиции раскладывается сам в себя
fn decomposition(c: char, compatibility: bool) -> Vec<char>
{
    let mut result = Vec::with_capacity(4);

    match compatibility {
        true => decompose_compatible(c, |d| result.push(d)),
        false => decompose_canonical(c, |d| result.push(d)),
    }

    result
}

/// дописать декомпозицию в массив расширений
fn push_expansion(expansions: &mut Vec<u32>, decomposition: &[char]) -> Expansion
{
    let index = expansions.len() as u32;

    for &c in decomposition {
        expansions.push(bake(u32::from(c), canonical_combining_class(c)));
    }

    Expansion {
        index,
        len: decomposition.len() as u8,
    }
}
