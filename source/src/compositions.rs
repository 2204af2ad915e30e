use std::collections::HashMap;
use std::collections::HashSet;

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::char::compose;
use unicode_normalization::UnicodeNormalization;

/// пары композиции и производные от них множества
pub struct Compositions
{
    /// (первый, второй) -> композиция
    pub pairs: HashMap<(u32, u32), u32>,
    /// исключения композиции (Full_Composition_Exclusion)
    pub exclusions: HashSet<u32>,
    /// вторые кодпоинты пар, которые комбинируются с предыдущими
    pub combines_backwards: HashSet<u32>,
}

/// вычисляем пары композиции по полным каноническим декомпозициям.
///
/// первый кодпоинт пары - NFC всей декомпозиции, кроме последнего кодпоинта, второй - последний кодпоинт.
/// кодпоинт является первичной композицией, только если его пару комбинирует и unicode-normalization;
/// синглтоны, нестартеры с декомпозицией и явные исключения туда не попадают.
pub fn derive_compositions(decompositions: &[(u32, Vec<char>)]) -> Compositions
{
    let mut pairs = HashMap::new();
    let mut excluded_pairs = vec![];
    let mut exclusions = HashSet::new();
    let mut combines_backwards = HashSet::new();

    for (code, decomposition) in decompositions {
        let code = *code;

        let (second, prefix) = match decomposition.split_last() {
            Some((second, prefix)) if !prefix.is_empty() => (*second, prefix),
            // синглтон
            _ => {
                exclusions.insert(code);
                continue;
            }
        };

        let first: String = prefix.iter().copied().nfc().collect();
        let mut chars = first.chars();

        let first = match (chars.next(), chars.next()) {
            (Some(first), None) => first,
            _ => {
                exclusions.insert(code);
                continue;
            }
        };

        let is_primary = char::from_u32(code)
            .map(|c| canonical_combining_class(c) == 0 && compose(first, second) == Some(c))
            .unwrap_or(false);

        match is_primary {
            true => {
                pairs.insert((u32::from(first), u32::from(second)), code);
                combines_backwards.insert(u32::from(second));
            }
            false => {
                exclusions.insert(code);
                excluded_pairs.push(((u32::from(first), u32::from(second)), code));
            }
        }
    }

    // пары исключений храним только если они не перекрывают первичные композиции
    for (pair, code) in excluded_pairs {
        pairs.entry(pair).or_insert(code);
    }

    Compositions {
        pairs,
        exclusions,
        combines_backwards,
    }
}
