#[macro_use]
extern crate lazy_static;

pub use codepoint::Codepoint;
pub use composition::compose;
pub use config::ConfigError;
pub use config::NormalizerConfig;
pub use decomposition::decompose;
#[cfg(feature = "icu")]
pub use engine::IcuEngine;
pub use engine::EngineDescriptor;
pub use engine::MissingEngine;
pub use engine::NormalizerEngine;
pub use engine::Strictness;
pub use engine::StubEngine;
pub use engine::TableEngine;
pub use error::NormalizeError;
pub use facade::UnicodeNormalizer;
pub use facade::LEADING_COMBINATOR;
pub use form::resolve;
pub use form::FormSet;
pub use form::FormSetting;
pub use form::FormValue;
pub use form::NormalizationForm;
pub use normalization::is_normalized_str;
pub use normalization::normalize_codepoints;
pub use normalization::normalize_str;
pub use ordering::reorder;
pub use probe::Capability;
pub use probe::CapabilityProbe;
pub use probe::FilesystemProbe;
pub use probe::FILESYSTEM_MODES;
pub use quick_check::quick_check;
pub use quick_check::quick_check_boundary;
pub use quick_check::QuickCheck;
pub use registry::default_preference;
pub use registry::registry;
pub use registry::select_engine;
pub use registry::EngineRegistry;

mod codepoint;
mod composition;
mod config;
mod decomposition;
mod engine;
mod error;
mod facade;
mod form;
mod normalization;
mod ordering;
pub mod probe;
mod quick_check;
mod registry;
mod utf8;

/// поддерживаемые движком формы
pub fn supported_forms(engine: &str) -> Result<FormSet, NormalizeError>
{
    registry().supported_forms(engine)
}

/// версия Unicode, которой соответствует движок
pub fn conformance_level(engine: &str) -> Result<String, NormalizeError>
{
    registry().conformance_level(engine)
}

/// доступен ли движок. дешёвая проверка без побочных эффектов
pub fn is_available(engine: &str) -> bool
{
    registry().is_available(engine)
}
