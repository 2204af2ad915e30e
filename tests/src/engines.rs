use std::borrow::Cow;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use unicode_normalizer::probe::file_name;
use unicode_normalizer::Capability;
use unicode_normalizer::CapabilityProbe;
use unicode_normalizer::FilesystemProbe;
use unicode_normalizer::FormSetting;
use unicode_normalizer::NormalizationForm;
use unicode_normalizer::NormalizeError;
use unicode_normalizer::NormalizerEngine;
use unicode_normalizer::UnicodeNormalizer;
use unicode_normalizer::FILESYSTEM_MODES;

use crate::data::engines;
use crate::data::hex;

use NormalizationForm::*;

// déjà 훈쇼™⒜你
const S_NFC: &str = "64c3a96ac3a020ed9b88ec87bce284a2e2929ce4bda0";
const S_NFD: &str = "6465cc816a61cc8020e18492e185aee186abe18489e185ade284a2e2929ce4bda0";
const S_NFKC: &str = "64c3a96ac3a020ed9b88ec87bc544d286129e4bda0";
const S_NFKD: &str = "6465cc816a61cc8020e18492e185aee186abe18489e185ad544d286129e4bda0";
const S_MAC: &str = "6465cc816a61cc8020e18492e185aee186abe18489e185ade284a2e2929ce4bda0";

/// имена тестовых файлов проверки файловой системы
const FILESYSTEM_NAMES: [(FormSetting, &str); 5] = [
    (
        FormSetting::Disabled,
        "c396c3a9c3b6c484c486c5bbc498c486c487c485c5bcc499c3b3ce98d0a9d7a9dd90e0b88be180a4e2929ce38182eab2abe4bda0f0afa084e299a5efb88ee298baefb88e2e747874",
    ),
    (
        FormSetting::Enabled(None),
        "c396c3a9c3b6c484c486c5bbc498c48663cc8161cca87acc8765cca8c3b3ce98d0a9d7a9dd90e0b88be180a4e2929ce38182eab2abe4bda0f0afa084e299a5efb88ee298baefb88e2e747874",
    ),
    (
        FormSetting::Enabled(Nfd),
        "4fcc8865cc816fcc8841cca843cc815acc8745cca843cc8163cc8161cca87acc8765cca86fcc81ce98d0a9d7a9dd90e0b88be180a4e2929ce38182e18480e185a7e186aae4bda0e4bda0e299a5efb88ee298baefb88e2e747874",
    ),
    (
        FormSetting::Enabled(NfdMac),
        "4fcc8865cc816fcc8841cca843cc815acc8745cca843cc8163cc8161cca87acc8765cca86fcc81ce98d0a9d7a9dd90e0b88be180a4e2929ce38182e18480e185a7e186aae4bda0efbfbde299a5efb88ee298baefb88e2e747874",
    ),
    (
        FormSetting::Enabled(Nfc),
        "c396c3a9c3b6c484c486c5bbc498c486c487c485c5bcc499c3b3ce98d0a9d7a9dd90e0b88be180a4e2929ce38182eab2abe4bda0e4bda0e299a5efb88ee298baefb88e2e747874",
    ),
];

fn normalized(engine: &dyn NormalizerEngine, input: &[u8], form: NormalizationForm) -> Vec<u8>
{
    engine.normalize(input, form).unwrap().into_owned()
}

/// ожидаемые результаты isNormalized: (ожидание, строка, форма)
fn is_normalized_cases(engine: &dyn NormalizerEngine) -> Vec<(bool, Vec<u8>, NormalizationForm)>
{
    let strict = engine.is_strict();
    let forms = engine.supported_forms();

    let (nfc, nfd, nfkc, nfkd, mac) = (hex(S_NFC), hex(S_NFD), hex(S_NFKC), hex(S_NFKD), hex(S_MAC));

    let mut cases = vec![
        (true, b"abc".to_vec(), Nfc),
        (false, b"\xFF".to_vec(), Nfc),
        (true, b"".to_vec(), None),
        (true, b"\xFF".to_vec(), None),
    ];

    if forms.contains(Nfc) {
        // нестрогие движки отвечают "нет" вместо "возможно"
        cases.push((strict, nfc.clone(), Nfc));
        cases.push((strict, nfkc.clone(), Nfc));
        cases.push((false, nfd.clone(), Nfc));
        cases.push((false, nfkd.clone(), Nfc));
        cases.push((false, mac.clone(), Nfc));
        cases.push((true, vec![], Nfc));
    }

    if forms.contains(Nfd) {
        cases.push((strict, nfd.clone(), Nfd));
        cases.push((strict, nfkd.clone(), Nfd));
        cases.push((strict, mac.clone(), Nfd));
        cases.push((false, nfc.clone(), Nfd));
        cases.push((false, nfkc.clone(), Nfd));
        cases.push((true, vec![], Nfd));
    }

    if forms.contains(Nfkc) {
        cases.push((strict, nfkc.clone(), Nfkc));
        cases.push((false, nfc.clone(), Nfkc));
        cases.push((false, nfd.clone(), Nfkc));
        cases.push((false, nfkd.clone(), Nfkc));
        cases.push((false, mac.clone(), Nfkc));
        cases.push((true, vec![], Nfkc));
    }

    if forms.contains(Nfkd) {
        cases.push((strict, nfkd.clone(), Nfkd));
        cases.push((false, nfc.clone(), Nfkd));
        cases.push((false, nfd.clone(), Nfkd));
        cases.push((false, nfkc.clone(), Nfkd));
        cases.push((false, mac.clone(), Nfkd));
        cases.push((true, vec![], Nfkd));
    }

    if forms.contains(NfdMac) {
        cases.push((strict, mac.clone(), NfdMac));
        cases.push((strict, nfd.clone(), NfdMac));
        cases.push((strict, nfkd.clone(), NfdMac));
        cases.push((false, nfc.clone(), NfdMac));
        cases.push((false, nfkc.clone(), NfdMac));
        cases.push((true, vec![], NfdMac));
    }

    cases
}

#[test]
fn is_normalized()
{
    for engine in engines() {
        for (expected, input, form) in is_normalized_cases(engine.as_ref()) {
            assert_eq!(
                engine.is_normalized(&input, form),
                Ok(expected),
                "{}: {:02x?} for {}",
                engine.identifier(),
                input,
                form
            );
        }
    }
}

#[test]
fn normalize()
{
    let (nfc, nfd, nfkc, nfkd, mac) = (hex(S_NFC), hex(S_NFD), hex(S_NFKC), hex(S_NFKD), hex(S_MAC));
    let combined = [nfc.clone(), nfd.clone(), nfkc.clone(), nfkd.clone()].concat();
    let combined_mac = [combined.clone(), mac.clone()].concat();

    for engine in engines() {
        let engine = engine.as_ref();
        let id = engine.identifier();

        assert_eq!(normalized(engine, &combined, None), combined, "{}", id);
        assert_eq!(normalized(engine, &combined_mac, None), combined_mac, "{}", id);
        assert_eq!(normalized(engine, b"", Nfc), b"", "{}", id);
        assert_eq!(
            engine.normalize(b"\xFF", Nfc),
            Err(NormalizeError::InvalidEncoding { valid_up_to: 0 }),
            "{}",
            id
        );

        assert_eq!(normalized(engine, &nfd, Nfc), nfc, "{}", id);
        assert_eq!(normalized(engine, &nfc, Nfd), nfd, "{}", id);
        assert_eq!(normalized(engine, &nfc, Nfkc), nfkc, "{}", id);
        assert_eq!(normalized(engine, &nfkc, Nfc), nfkc, "{}", id);
        assert_eq!(normalized(engine, &nfc, Nfkd), nfkd, "{}", id);
        assert_eq!(normalized(engine, &nfkd, Nfc), nfkc, "{}", id);
        assert_eq!(normalized(engine, &mac, Nfc), nfc, "{}", id);
        assert_eq!(normalized(engine, &nfd, Nfkc), nfkc, "{}", id);
        assert_eq!(normalized(engine, &nfkc, Nfd), nfkd, "{}", id);
        assert_eq!(normalized(engine, &nfd, Nfkd), nfkd, "{}", id);
        assert_eq!(normalized(engine, &nfkd, Nfd), nfkd, "{}", id);
        assert_eq!(normalized(engine, &nfkc, Nfkd), nfkd, "{}", id);
        assert_eq!(normalized(engine, &nfkd, Nfkc), nfkc, "{}", id);

        assert_eq!(
            normalized(engine, "\u{303}\u{D2}\u{55B}".as_bytes(), Nfc),
            "\u{303}\u{D2}\u{55B}".as_bytes(),
            "{}",
            id
        );
        assert_eq!(
            normalized(engine, "\u{F76}\u{F81}".as_bytes(), Nfd),
            "\u{FB2}\u{F71}\u{F80}\u{F80}".as_bytes(),
            "{}",
            id
        );

        assert_eq!(
            normalized(engine, &combined, Nfc),
            [nfc.as_slice(), nfc.as_slice(), nfkc.as_slice(), nfkc.as_slice()].concat(),
            "{}",
            id
        );
        assert_eq!(
            normalized(engine, &combined, Nfd),
            [nfd.as_slice(), nfd.as_slice(), nfkd.as_slice(), nfkd.as_slice()].concat(),
            "{}",
            id
        );
        assert_eq!(
            normalized(engine, &combined, Nfkc),
            [nfkc.as_slice(), nfkc.as_slice(), nfkc.as_slice(), nfkc.as_slice()].concat(),
            "{}",
            id
        );
        assert_eq!(
            normalized(engine, &combined, Nfkd),
            [nfkd.as_slice(), nfkd.as_slice(), nfkd.as_slice(), nfkd.as_slice()].concat(),
            "{}",
            id
        );

        if engine.supports(NfdMac) {
            assert_eq!(normalized(engine, &nfc, NfdMac), mac, "{}", id);
            assert_eq!(normalized(engine, &mac, NfdMac), mac, "{}", id);
            assert_eq!(
                normalized(engine, &combined_mac, NfdMac),
                [mac.as_slice(), mac.as_slice(), nfkd.as_slice(), nfkd.as_slice(), mac.as_slice()].concat(),
                "{}",
                id
            );
            assert_eq!(
                engine.normalize(b"\xFF", NfdMac),
                Err(NormalizeError::InvalidEncoding { valid_up_to: 0 })
            );
        }
    }
}

/// неизменённые данные возвращаются без копирования
#[test]
fn unchanged_input_is_borrowed()
{
    let nfc = hex(S_NFC);

    for engine in engines() {
        assert!(
            matches!(engine.normalize(&nfc, Nfc), Ok(Cow::Borrowed(_))),
            "{}",
            engine.identifier()
        );
        assert!(matches!(engine.normalize(&nfc, Nfd), Ok(Cow::Owned(_))));
    }
}

#[test]
fn invalid_form_codes()
{
    for engine in engines() {
        let normalizer = UnicodeNormalizer::with_engine(Arc::clone(&engine), FormSetting::Enabled(Nfc));

        assert_eq!(normalizer.normalize_code(&hex(S_NFC), -1), Err(NormalizeError::InvalidForm(-1)));
        assert_eq!(normalizer.is_normalized_code(b"", -1), Err(NormalizeError::InvalidForm(-1)));
        assert_eq!(normalizer.normalize(&hex(S_NFD), Option::None).unwrap().into_owned(), hex(S_NFC));
    }
}

/// имена файлов проверки файловой системы совпадают с эталонными байтами
#[test]
fn filesystem_file_names()
{
    assert_eq!(FILESYSTEM_MODES.len(), FILESYSTEM_NAMES.len());

    for (mode, name) in FILESYSTEM_NAMES {
        assert!(FILESYSTEM_MODES.contains(&mode));
        assert_eq!(file_name(mode).as_bytes(), hex(name), "{}", mode);
    }
}

/// проверка временного каталога: все имена записываются и находятся, каталог остаётся пустым
#[test]
fn filesystem_capabilities()
{
    let dir = tempfile::tempdir().unwrap();
    let probe = FilesystemProbe::new(dir.path());

    let capabilities = probe.capabilities();

    for mode in FILESYSTEM_MODES {
        assert_ne!(capabilities[&mode], Capability::Unknown, "{}", mode);
        assert_eq!(probe.probe(mode), capabilities[&mode], "{}", mode);

        #[cfg(target_os = "linux")]
        assert_eq!(capabilities[&mode], Capability::Supported, "{}", mode);
    }

    assert_eq!(probe.probe(FormSetting::Enabled(Nfkc)), Capability::Unsupported);
    assert_eq!(probe.probe(FormSetting::Enabled(Nfkd)), Capability::Unsupported);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
