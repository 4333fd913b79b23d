use crate::{CpuidRanges, cpuid};

pub const LEAF_8000_0001H: u32 = 0x8000_0001;

/// CPUID.8000_0001H:EDX — SYSCALL/SYSRET implemented.
pub const EXT_EDX_SYSCALL: u32 = 1 << 11;
/// CPUID.8000_0001H:EDX — no-execute paging implemented.
pub const EXT_EDX_NX: u32 = 1 << 20;
/// CPUID.8000_0001H:EDX — long mode implemented.
pub const EXT_EDX_LM: u32 = 1 << 29;

/// CPUID.8000_0001H — Extended Processor Info and Feature Bits.
///
/// Any of the SYSCALL/NX/LM bits in EDX implies the part carries `IA32_EFER`.
#[derive(Copy, Clone, Debug)]
pub struct Leaf80000001h {
    pub feature_ecx: u32,
    pub feature_edx: u32,
}

impl Leaf80000001h {
    /// Query CPUID.8000_0001H if `ranges` reports it present.
    ///
    /// # Safety
    /// `CPUID` must be available.
    pub unsafe fn read(ranges: &CpuidRanges) -> Option<Self> {
        if !ranges.has_extended(LEAF_8000_0001H) {
            return None;
        }
        let r = unsafe { cpuid(LEAF_8000_0001H, 0) };
        Some(Self {
            feature_ecx: r.ecx,
            feature_edx: r.edx,
        })
    }
}
