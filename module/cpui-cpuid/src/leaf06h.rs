use crate::{CpuidRanges, cpuid};

pub const LEAF_06H: u32 = 0x06;

/// CPUID.06H — Thermal and Power Management.
///
/// Only the EAX feature word is consumed (digital thermal sensor, turbo,
/// ARAT, HWP bits); EBX/ECX carry interrupt-threshold and effective-frequency
/// details the module does not report.
#[derive(Copy, Clone, Debug)]
pub struct Leaf06h {
    /// Feature word EAX.
    pub feature_eax: u32,
}

impl Leaf06h {
    /// Query CPUID.06H if `ranges` reports it present.
    ///
    /// # Safety
    /// `CPUID` must be available.
    pub unsafe fn read(ranges: &CpuidRanges) -> Option<Self> {
        if !ranges.has_basic(LEAF_06H) {
            return None;
        }
        let r = unsafe { cpuid(LEAF_06H, 0) };
        Some(Self { feature_eax: r.eax })
    }
}
