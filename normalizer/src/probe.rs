use std::collections::HashMap;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use parking_lot::Mutex;

use crate::normalization::normalize_str;
use crate::FormSetting;
use crate::NormalizationForm;

/// временная папка для проверки возможностей файловой системы
pub const DETECTION_FOLDER_NAME: &str = ".utf8-filesystem-capabilities-detection";

/// исходное имя файла: не нормализовано, содержит символы с особой обработкой в NFD файловых систем Apple
pub const RAW_FILE_NAME: &str = "\u{D6}\u{E9}\u{F6}\u{104}\u{106}\u{17B}\u{118}\u{106}\u{107}\u{105}\u{17C}\u{119}\u{F3}\
    \u{398}\u{429}\u{5E9}\u{750}\u{E0B}\u{1024}\u{249C}\u{3042}\u{ACAB}\u{4F60}\u{2F804}\u{2665}\u{FE0E}\u{263A}\u{FE0E}.txt";

/// исходное имя, в котором часть символов разложена: смесь форм
pub const MIXED_FILE_NAME: &str = "\u{D6}\u{E9}\u{F6}\u{104}\u{106}\u{17B}\u{118}\u{106}c\u{301}a\u{328}z\u{307}e\u{328}\u{F3}\
    \u{398}\u{429}\u{5E9}\u{750}\u{E0B}\u{1024}\u{249C}\u{3042}\u{ACAB}\u{4F60}\u{2F804}\u{2665}\u{FE0E}\u{263A}\u{FE0E}.txt";

/// проверяемые режимы: исходные байты (ключ - отключенная нормализация), смесь форм, NFD, NFD_MAC, NFC
pub const FILESYSTEM_MODES: [FormSetting; 5] = [
    FormSetting::Disabled,
    FormSetting::Enabled(NormalizationForm::None),
    FormSetting::Enabled(NormalizationForm::Nfd),
    FormSetting::Enabled(NormalizationForm::NfdMac),
    FormSetting::Enabled(NormalizationForm::Nfc),
];

/// результат проверки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability
{
    Unsupported,
    Supported,
    Unknown,
}

/// проверка, сохраняет ли хранилище имена в данной форме
pub trait CapabilityProbe
{
    fn probe(&self, form: FormSetting) -> Capability;
}

/// имя тестового файла для режима
pub fn file_name(mode: FormSetting) -> String
{
    match mode {
        FormSetting::Disabled => RAW_FILE_NAME.to_owned(),
        FormSetting::Enabled(NormalizationForm::None) => MIXED_FILE_NAME.to_owned(),
        FormSetting::Enabled(form) => normalize_str(RAW_FILE_NAME, form).into_owned(),
    }
}

/// проверка файловой системы: в каталоге создаются файлы с именами в разных формах,
/// после чего проверяется, какие из них находятся в листинге под тем же именем.
/// результат первой проверки запоминается, повторная - только после forget
#[derive(Debug)]
pub struct FilesystemProbe
{
    root: PathBuf,
    detected: Mutex<Option<HashMap<FormSetting, Capability>>>,
}

impl FilesystemProbe
{
    pub fn new(root: impl Into<PathBuf>) -> Self
    {
        Self {
            root: root.into(),
            detected: Mutex::new(None),
        }
    }

    pub fn root(&self) -> &Path
    {
        &self.root
    }

    /// запомненный результат проверки; при первом обращении проверка выполняется
    pub fn capabilities(&self) -> HashMap<FormSetting, Capability>
    {
        let mut detected = self.detected.lock();

        if let Some(capabilities) = detected.as_ref() {
            return capabilities.clone();
        }

        let capabilities = self.detect();
        *detected = Some(capabilities.clone());

        capabilities
    }

    /// забыть результат: следующий probe проверит файловую систему заново
    pub fn forget(&self)
    {
        *self.detected.lock() = None;
    }

    /// полная проверка файловой системы, без запоминания результата.
    /// NFKC и NFKD для имён файлов не поддерживаются
    pub fn detect(&self) -> HashMap<FormSetting, Capability>
    {
        let mut capabilities: HashMap<FormSetting, Capability> = [
            (FormSetting::Enabled(NormalizationForm::Nfkd), Capability::Unsupported),
            (FormSetting::Enabled(NormalizationForm::Nfkc), Capability::Unsupported),
        ]
        .into_iter()
        .collect();

        match self.create_folder() {
            Some(folder) => capabilities.extend(Self::detect_in(&folder)),
            None => capabilities.extend(FILESYSTEM_MODES.map(|mode| (mode, Capability::Unknown))),
        }

        capabilities
    }

    fn create_folder(&self) -> Option<ScratchFolder>
    {
        let path = self.root.join(DETECTION_FOLDER_NAME);

        // папка могла остаться от другой проверки - её не трогаем
        if path.exists() {
            tracing::warn!(path = %path.display(), "capability detection folder already exists");
            return None;
        }

        match fs::create_dir(&path) {
            Ok(()) => Some(ScratchFolder(path)),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "cannot create capability detection folder");
                None
            }
        }
    }

    fn detect_in(folder: &ScratchFolder) -> Vec<(FormSetting, Capability)>
    {
        let files: Vec<(FormSetting, String, bool)> = FILESYSTEM_MODES
            .into_iter()
            .map(|mode| {
                let name = format!("{}-{}", mode.code(), file_name(mode));
                let written = match fs::File::create(folder.0.join(&name)) {
                    Ok(_) => true,
                    Err(error) => {
                        tracing::debug!(mode = %mode, %error, "cannot write capability detection file");
                        false
                    }
                };

                (mode, name, written)
            })
            .collect();

        let listed: HashSet<OsString> = match fs::read_dir(&folder.0) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .map(|entry| entry.file_name())
                .collect(),
            Err(error) => {
                tracing::warn!(path = %folder.0.display(), %error, "cannot list capability detection folder");
                HashSet::new()
            }
        };

        files
            .into_iter()
            .map(|(mode, name, written)| {
                let read = listed.contains(OsStr::new(&name));

                let capability = match (written, read) {
                    (true, true) => Capability::Supported,
                    (false, false) => Capability::Unsupported,
                    _ => Capability::Unknown,
                };

                tracing::debug!(mode = %mode, ?capability, "filesystem capability detected");

                (mode, capability)
            })
            .collect()
    }
}

impl CapabilityProbe for FilesystemProbe
{
    fn probe(&self, form: FormSetting) -> Capability
    {
        self.capabilities()
            .get(&form)
            .copied()
            .unwrap_or(Capability::Unsupported)
    }
}

/// временная папка, удаляется вместе с содержимым
struct ScratchFolder(PathBuf);

impl Drop for ScratchFolder
{
    fn drop(&mut self)
    {
        if let Err(error) = fs::remove_dir_all(&self.0) {
            tracing::warn!(path = %self.0.display(), %error, "cannot remove capability detection folder");
        }
    }
}
