use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use parking_lot::RwLock;

#[cfg(feature = "icu")]
use crate::engine::IcuEngine;
use crate::engine::MissingEngine;
use crate::engine::NormalizerEngine;
use crate::engine::StubEngine;
use crate::engine::TableEngine;
use crate::FormSet;
use crate::FormSetting;
use crate::NormalizationForm;
use crate::NormalizeError;
use crate::NormalizerConfig;

lazy_static! {
    /// реестр встроенных движков процесса
    static ref REGISTRY: EngineRegistry = EngineRegistry::with_builtin_engines();
}

/// реестр встроенных движков
pub fn registry() -> &'static EngineRegistry
{
    &REGISTRY
}

/// порядок предпочтения движков по умолчанию
pub fn default_preference() -> Vec<&'static str>
{
    vec![
        #[cfg(feature = "icu")]
        IcuEngine::ICU,
        TableEngine::TABLE,
        TableEngine::SHIM,
        TableEngine::MAC,
        StubEngine::STUB,
    ]
}

/// выбор движка: первый доступный, поддерживающий требуемую форму (для NONE - любой доступный).
/// если таких нет - отсутствующая реализация, ошибки возникнут при использовании
pub fn select_engine(
    preference: &[Arc<dyn NormalizerEngine>],
    required: NormalizationForm,
) -> Arc<dyn NormalizerEngine>
{
    let selected = preference.iter().find(|engine| {
        engine.is_available() && (required == NormalizationForm::None || engine.supports(required))
    });

    match selected {
        Some(engine) => {
            tracing::debug!(engine = engine.identifier(), form = %required, "unicode normalizer selected");
            Arc::clone(engine)
        }
        None => {
            let candidates: Vec<&str> = preference.iter().map(|engine| engine.identifier()).collect();

            tracing::warn!(
                form = %required,
                candidates = ?candidates,
                "no available unicode normalizer supports the required form"
            );

            Arc::new(MissingEngine::new(format!(
                "none of [{}] is available and supports {}",
                candidates.join(", "),
                required
            )))
        }
    }
}

/// область конфигурации, для которой движок выбирается один раз
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ScopeKey
{
    engine: Option<String>,
    preference: Vec<String>,
    form: FormSetting,
}

/// реестр движков с кешем выбора по областям конфигурации
pub struct EngineRegistry
{
    engines: Vec<Arc<dyn NormalizerEngine>>,
    /// выбранные движки
    resolved: RwLock<HashMap<ScopeKey, Arc<dyn NormalizerEngine>>>,
    /// блокировка инициализации: выбор для области выполняется один раз
    init: Mutex<()>,
}

impl EngineRegistry
{
    pub fn new(engines: Vec<Arc<dyn NormalizerEngine>>) -> Self
    {
        Self {
            engines,
            resolved: RwLock::new(HashMap::new()),
            init: Mutex::new(()),
        }
    }

    /// встроенные движки в порядке предпочтения по умолчанию
    pub fn with_builtin_engines() -> Self
    {
        Self::new(vec![
            #[cfg(feature = "icu")]
            Arc::new(IcuEngine::new()),
            Arc::new(TableEngine::strict()),
            Arc::new(TableEngine::loose()),
            Arc::new(TableEngine::mac()),
            Arc::new(StubEngine::new()),
        ])
    }

    pub fn engines(&self) -> &[Arc<dyn NormalizerEngine>]
    {
        &self.engines
    }

    /// движок по идентификатору
    pub fn engine(&self, identifier: &str) -> Option<Arc<dyn NormalizerEngine>>
    {
        self.engines
            .iter()
            .find(|engine| engine.identifier() == identifier)
            .cloned()
    }

    fn known_engine(&self, identifier: &str) -> Result<Arc<dyn NormalizerEngine>, NormalizeError>
    {
        self.engine(identifier)
            .ok_or_else(|| NormalizeError::EngineUnavailable {
                reason: format!("unknown unicode normalizer `{}`", identifier),
            })
    }

    /// поддерживаемые движком формы
    pub fn supported_forms(&self, identifier: &str) -> Result<FormSet, NormalizeError>
    {
        Ok(self.known_engine(identifier)?.supported_forms())
    }

    /// версия Unicode движка
    pub fn conformance_level(&self, identifier: &str) -> Result<String, NormalizeError>
    {
        Ok(self.known_engine(identifier)?.conformance_level().to_owned())
    }

    /// доступен ли движок; неизвестный движок недоступен
    pub fn is_available(&self, identifier: &str) -> bool
    {
        self.engine(identifier)
            .is_some_and(|engine| engine.is_available())
    }

    /// движок для конфигурации. выбор выполняется один раз на область конфигурации
    pub fn resolve(&self, config: &NormalizerConfig) -> Result<Arc<dyn NormalizerEngine>, NormalizeError>
    {
        let key = ScopeKey {
            engine: config.engine.clone(),
            preference: config.preference(),
            form: config.form_setting()?,
        };

        if let Some(engine) = self.resolved.read().get(&key) {
            return Ok(Arc::clone(engine));
        }

        let _guard = self.init.lock();

        // пока ждали блокировку, выбор мог сделать другой поток
        if let Some(engine) = self.resolved.read().get(&key) {
            return Ok(Arc::clone(engine));
        }

        let engine = self.select(&key);
        self.resolved.write().insert(key, Arc::clone(&engine));

        Ok(engine)
    }

    /// сбросить выбранные движки, например после изменения конфигурации
    pub fn invalidate(&self)
    {
        let _guard = self.init.lock();

        self.resolved.write().clear();
        tracing::debug!("unicode normalizer selection cache cleared");
    }

    fn select(&self, key: &ScopeKey) -> Arc<dyn NormalizerEngine>
    {
        let required = key.form.form();

        let candidates: Vec<Arc<dyn NormalizerEngine>> = match &key.engine {
            Some(identifier) => self.lookup(identifier).into_iter().collect(),
            None => key
                .preference
                .iter()
                .filter_map(|identifier| self.lookup(identifier))
                .collect(),
        };

        select_engine(&candidates, required)
    }

    fn lookup(&self, identifier: &str) -> Option<Arc<dyn NormalizerEngine>>
    {
        let engine = self.engine(identifier);

        if engine.is_none() {
            tracing::warn!(engine = identifier, "unknown unicode normalizer in configuration");
        }

        engine
    }
}
