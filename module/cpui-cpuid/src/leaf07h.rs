use crate::{CpuidRanges, cpuid};

pub const LEAF_07H: u32 = 0x07;

/// CPUID.07H — Structured Extended Feature Flags.
///
/// Subleaf 0 always; the subleaf-1 EAX word only when subleaf 0's EAX says
/// the subleaf exists.
#[derive(Copy, Clone, Debug)]
pub struct Leaf07h {
    /// Maximum supported subleaf (EAX of subleaf 0).
    pub max_subleaf: u32,
    pub feature_ebx: u32,
    pub feature_ecx: u32,
    pub feature_edx: u32,
    /// Subleaf 1 EAX; zero when the subleaf is absent.
    pub feature_s1_eax: u32,
}

impl Leaf07h {
    /// Query CPUID.07H if `ranges` reports it present.
    ///
    /// # Safety
    /// `CPUID` must be available.
    pub unsafe fn read(ranges: &CpuidRanges) -> Option<Self> {
        if !ranges.has_basic(LEAF_07H) {
            return None;
        }
        let s0 = unsafe { cpuid(LEAF_07H, 0) };
        let feature_s1_eax = if s0.eax >= 1 {
            unsafe { cpuid(LEAF_07H, 1) }.eax
        } else {
            0
        };
        Some(Self {
            max_subleaf: s0.eax,
            feature_ebx: s0.ebx,
            feature_ecx: s0.ecx,
            feature_edx: s0.edx,
            feature_s1_eax,
        })
    }
}
