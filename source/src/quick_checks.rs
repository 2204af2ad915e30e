use crate::mac::is_mac_decomposition_exception;
use crate::mac::mac_substitution;
use crate::tables::*;

/// результат быстрой проверки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickCheck
{
    Yes,
    No,
    Maybe,
}

impl NormalizationTables
{
    /// быстрая проверка NFD, Y/N
    #[inline(always)]
    pub fn qc_nfd(&self, code: u32) -> QuickCheck
    {
        match self.entry(code).has(FLAG_CANONICAL) {
            true => QuickCheck::No,
            false => QuickCheck::Yes,
        }
    }

    /// быстрая проверка NFKD, Y/N
    #[inline(always)]
    pub fn qc_nfkd(&self, code: u32) -> QuickCheck
    {
        match self.entry(code).has(FLAG_COMPAT) {
            true => QuickCheck::No,
            false => QuickCheck::Yes,
        }
    }

    /// быстрая проверка NFC, Y/N/M
    #[inline(always)]
    pub fn qc_nfc(&self, code: u32) -> QuickCheck
    {
        let entry = self.entry(code);

        if entry.has(FLAG_EXCLUDED) {
            return QuickCheck::No;
        }

        match entry.has(FLAG_COMBINES_BACKWARDS) {
            true => QuickCheck::Maybe,
            false => QuickCheck::Yes,
        }
    }

    /// быстрая проверка NFKC, Y/N/M
    #[inline(always)]
    pub fn qc_nfkc(&self, code: u32) -> QuickCheck
    {
        let entry = self.entry(code);

        if entry.has(FLAG_EXCLUDED) || entry.has(FLAG_COMPAT_ONLY) {
            return QuickCheck::No;
        }

        match entry.has(FLAG_COMBINES_BACKWARDS) {
            true => QuickCheck::Maybe,
            false => QuickCheck::Yes,
        }
    }

    /// быстрая проверка NFD_MAC, Y/N
    #[inline(always)]
    pub fn qc_nfd_mac(&self, code: u32) -> QuickCheck
    {
        if mac_substitution(code).is_some() {
            return QuickCheck::No;
        }

        match self.entry(code).has(FLAG_CANONICAL) && !is_mac_decomposition_exception(code) {
            true => QuickCheck::No,
            false => QuickCheck::Yes,
        }
    }
}
