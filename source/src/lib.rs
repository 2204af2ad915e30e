#[macro_use]
extern crate lazy_static;

pub mod hangul;
pub mod mac;
pub mod tables;

mod compositions;
mod quick_checks;

pub use normalization_tests::parse_normalization_tests;
pub use normalization_tests::FixtureError;
pub use normalization_tests::NormalizationTest;

pub use tables::BlockTable;
pub use tables::CodepointEntry;
pub use tables::Expansion;
pub use tables::NormalizationTables;
pub use tables::CONFORMANCE_LEVEL;
pub use tables::TABLES;

pub use quick_checks::QuickCheck;
