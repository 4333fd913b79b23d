//! One-shot hardware detection.

use crate::info::{CpuInfo, FeatureWord};
use cpui_cpuid::{
    BrandString, CpuidRanges, Leaf01h, Leaf06h, Leaf07h, Leaf80000001h, cpuid_supported,
};

/// Failure modes of [`detect`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    /// The processor does not implement the `CPUID` instruction.
    #[error("CPUID instruction is not supported")]
    CpuidUnsupported,
}

/// Query the processor once and decode the result.
///
/// Leaves the hardware does not report keep their zero defaults, so feature
/// words from absent leaves read as empty rather than stale.
///
/// # Errors
/// [`DetectError::CpuidUnsupported`] when the availability probe fails.
pub fn detect() -> Result<CpuInfo, DetectError> {
    if !cpuid_supported() {
        return Err(DetectError::CpuidUnsupported);
    }

    // SAFETY: the probe above confirmed CPUID is implemented; every leaf read
    // below re-checks its own range.
    let ranges = unsafe { CpuidRanges::read() };

    let mut info = CpuInfo {
        max_basic: ranges.max_basic,
        max_extended: ranges.max_extended,
        vendor: ranges.vendor,
        family: 0,
        model: 0,
        stepping: 0,
        brand: None,
        words: [0; FeatureWord::COUNT],
    };

    unsafe {
        if let Some(leaf1) = Leaf01h::read(&ranges) {
            info.family = leaf1.version.display_family();
            info.model = leaf1.version.display_model();
            info.stepping = leaf1.version.stepping();
            info.words[FeatureWord::Leaf01Ecx as usize] = leaf1.feature_ecx;
            info.words[FeatureWord::Leaf01Edx as usize] = leaf1.feature_edx;
        }

        if let Some(leaf6) = Leaf06h::read(&ranges) {
            info.words[FeatureWord::Leaf06Eax as usize] = leaf6.feature_eax;
        }

        if let Some(leaf7) = Leaf07h::read(&ranges) {
            info.words[FeatureWord::Leaf07Ebx as usize] = leaf7.feature_ebx;
            info.words[FeatureWord::Leaf07Ecx as usize] = leaf7.feature_ecx;
            info.words[FeatureWord::Leaf07Edx as usize] = leaf7.feature_edx;
            info.words[FeatureWord::Leaf07S1Eax as usize] = leaf7.feature_s1_eax;
        }

        if let Some(ext1) = Leaf80000001h::read(&ranges) {
            info.words[FeatureWord::Ext01Ecx as usize] = ext1.feature_ecx;
            info.words[FeatureWord::Ext01Edx as usize] = ext1.feature_edx;
        }

        info.brand = BrandString::read(&ranges);
    }

    Ok(info)
}

#[cfg(all(test, target_arch = "x86_64"))]
mod tests {
    use super::*;
    use crate::features;

    #[test]
    fn detection_succeeds_on_x86_64() {
        let cpu = detect().expect("CPUID exists in 64-bit mode");
        assert!(cpu.max_basic >= 1);
        assert!(cpu.max_extended >= 0x8000_0000);
    }

    #[test]
    fn vendor_string_is_ascii() {
        let cpu = detect().unwrap();
        assert_eq!(cpu.vendor.as_str().len(), 12);
        assert!(cpu.vendor.as_str().is_ascii());
    }

    #[test]
    fn every_x86_64_part_has_an_fpu() {
        let cpu = detect().unwrap();
        assert!(cpu.has(FeatureWord::Leaf01Edx, features::EDX_FPU));
        // Long mode must be advertised, or we would not be running.
        assert!(cpu.word(FeatureWord::Ext01Edx) & cpui_cpuid::EXT_EDX_LM != 0);
    }

    #[test]
    fn version_fields_are_populated() {
        let cpu = detect().unwrap();
        // Family 0 has never shipped; 64-bit parts start at family 6.
        assert!(cpu.family >= 6);
    }
}
