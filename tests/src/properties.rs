use std::borrow::Cow;
use std::ops::RangeInclusive;

use icu_normalizer::ComposingNormalizer;
use icu_normalizer::DecomposingNormalizer;
use proptest::prelude::*;
use unicode_normalizer::NormalizationForm;
use unicode_normalizer::NormalizerEngine;
use unicode_normalizer::TableEngine;

use crate::data::engines;

/// строки с комбинируемыми символами, хангылем, совместимыми и исключёнными из композиции символами
fn text() -> impl Strategy<Value = String>
{
    let chars = prop_oneof![
        proptest::char::range('a', 'z'),
        proptest::char::range('\u{C0}', '\u{17F}'),
        proptest::char::range('\u{300}', '\u{36F}'),
        proptest::char::range('\u{1100}', '\u{1112}'),
        proptest::char::range('\u{1161}', '\u{1175}'),
        proptest::char::range('\u{11A8}', '\u{11C2}'),
        proptest::char::range('\u{AC00}', '\u{AC40}'),
        proptest::char::range('\u{F900}', '\u{F910}'),
        proptest::char::range('\u{2F800}', '\u{2F810}'),
        prop::sample::select(vec![
            '\u{212B}', '\u{2126}', '\u{FB01}', '\u{B2}', '\u{2122}', '\u{249C}', '\u{F76}', '\u{F81}',
            '\u{344}', '\u{958}', '\u{1E9B}', '\u{323}', '\u{20D0}', '\u{FF76}', '\u{FF9E}',
        ]),
    ];

    proptest::collection::vec(chars, 0 .. 24).prop_map(|chars| chars.into_iter().collect())
}

fn normalize(engine: &dyn NormalizerEngine, text: &str, form: NormalizationForm) -> String
{
    let bytes = engine.normalize(text.as_bytes(), form).unwrap().into_owned();

    String::from_utf8(bytes).unwrap()
}

/// количество символов строки из диапазона
fn count(text: &str, range: RangeInclusive<u32>) -> usize
{
    text.chars().filter(|c| range.contains(&u32::from(*c))).count()
}

const FORMS: [NormalizationForm; 5] = [
    NormalizationForm::Nfd,
    NormalizationForm::Nfkd,
    NormalizationForm::Nfc,
    NormalizationForm::Nfkc,
    NormalizationForm::NfdMac,
];

proptest! {
    #[test]
    fn idempotence(s in text())
    {
        let engine = TableEngine::mac();

        for form in FORMS {
            let once = normalize(&engine, &s, form);
            let twice = normalize(&engine, &once, form);

            prop_assert_eq!(&once, &twice, "{}", form);
        }
    }

    #[test]
    fn none_is_identity(bytes in proptest::collection::vec(any::<u8>(), 0 .. 64))
    {
        for engine in engines() {
            prop_assert_eq!(
                engine.normalize(&bytes, NormalizationForm::None),
                Ok(Cow::Borrowed(bytes.as_slice()))
            );
        }
    }

    #[test]
    fn quick_check_soundness(s in text())
    {
        for engine in engines() {
            for form in FORMS.into_iter().filter(|form| engine.supports(*form)) {
                let normalized = normalize(engine.as_ref(), &s, form) == s;
                let is_normalized = engine.is_normalized(s.as_bytes(), form).unwrap();

                // "да" - только для действительно нормализованных строк
                prop_assert!(!is_normalized || normalized, "{} {}", engine.identifier(), form);

                if engine.is_strict() {
                    prop_assert_eq!(is_normalized, normalized, "{} {}", engine.identifier(), form);
                }
            }
        }
    }

    #[test]
    fn cross_form(s in text())
    {
        let engine = TableEngine::strict();

        let nfc = normalize(&engine, &s, NormalizationForm::Nfc);
        let nfkc = normalize(&engine, &s, NormalizationForm::Nfkc);

        prop_assert_eq!(normalize(&engine, &normalize(&engine, &s, NormalizationForm::Nfd), NormalizationForm::Nfc), nfc.clone());
        prop_assert_eq!(normalize(&engine, &normalize(&engine, &s, NormalizationForm::Nfkd), NormalizationForm::Nfkc), nfkc.clone());
        prop_assert_eq!(normalize(&engine, &nfc, NormalizationForm::Nfkc), nfkc);
    }

    #[test]
    fn matches_icu(s in text())
    {
        let engine = TableEngine::strict();

        prop_assert_eq!(normalize(&engine, &s, NormalizationForm::Nfc), ComposingNormalizer::new_nfc().normalize(&s));
        prop_assert_eq!(normalize(&engine, &s, NormalizationForm::Nfkc), ComposingNormalizer::new_nfkc().normalize(&s));
        prop_assert_eq!(normalize(&engine, &s, NormalizationForm::Nfd), DecomposingNormalizer::new_nfd().normalize(&s));
        prop_assert_eq!(normalize(&engine, &s, NormalizationForm::Nfkd), DecomposingNormalizer::new_nfkd().normalize(&s));
    }

    #[test]
    fn mac_substitutions(s in text())
    {
        let mac = normalize(&TableEngine::mac(), &s, NormalizationForm::NfdMac);

        prop_assert!(
            count(&mac, 0x2F800 ..= 0x2FAFF) == 0,
            "CJK compatibility supplement left in {:?}",
            mac
        );
        // CJK-совместимость BMP не раскладывается, дополнение заменяется на U+FFFD
        prop_assert_eq!(count(&mac, 0xF900 ..= 0xFAFF), count(&s, 0xF900 ..= 0xFAFF));
        prop_assert_eq!(count(&mac, 0xFFFD ..= 0xFFFD), count(&s, 0x2F800 ..= 0x2FAFF));
    }
}
