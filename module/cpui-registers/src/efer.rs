use crate::msr::Msr;
use bitfield_struct::bitfield;

#[cfg(feature = "asm")]
use crate::LoadRegisterUnsafe;

/// `IA32_EFER` — Extended Feature Enable Register (MSR `0xC000_0080`).
///
/// Controls `SYSCALL`/`SYSRET`, long mode, and no-execute paging. LMA is the
/// read-only "long mode active" status bit. The AMD K6 legacy bits and the
/// newer AMD extensions above bit 15 are kept raw.
#[bitfield(u64, order = Lsb)]
#[derive(Eq, PartialEq)]
pub struct Efer {
    /// Bit 0 — SCE: System Call Extensions (SYSCALL/SYSRET enable).
    pub sce: bool,
    #[bits(7)]
    _k6_legacy: u8,
    /// Bit 8 — LME: Long Mode Enable.
    pub lme: bool,
    _rsv9: bool,
    /// Bit 10 — LMA: Long Mode Active (read-only).
    pub lma: bool,
    /// Bit 11 — NXE: No-Execute Enable.
    pub nxe: bool,
    /// Bit 12 — SVME: Secure Virtual Machine Enable (AMD).
    pub svme: bool,
    /// Bit 13 — LMSLE: Long Mode Segment Limit Enable.
    pub lmsle: bool,
    /// Bit 14 — FFXSR: Fast FXSAVE/FXRSTOR.
    pub ffxsr: bool,
    /// Bit 15 — TCE: Translation Cache Extension.
    pub tce: bool,
    #[bits(48)]
    _rsv16: u64,
}

impl Efer {
    /// MSR index for `IA32_EFER`.
    pub const MSR: Msr = Msr::new(0xC000_0080);
}

#[cfg(feature = "asm")]
impl LoadRegisterUnsafe for Efer {
    unsafe fn load_unsafe() -> Self {
        let raw = unsafe { Self::MSR.load_raw() };
        Self::from_bits(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_mode_kernel_value_decodes() {
        // Typical 64-bit kernel: SCE | LME | LMA | NXE.
        let efer = Efer::from_bits(0xD01);
        assert!(efer.sce());
        assert!(efer.lme());
        assert!(efer.lma());
        assert!(efer.nxe());
        assert!(!efer.svme());
    }

    #[test]
    fn amd_bits_decode() {
        let efer = Efer::from_bits((1 << 12) | (1 << 13) | (1 << 14) | (1 << 15));
        assert!(efer.svme());
        assert!(efer.lmsle());
        assert!(efer.ffxsr());
        assert!(efer.tce());
        assert!(!efer.sce());
    }

    #[test]
    fn msr_index_matches_the_manuals() {
        assert_eq!(Efer::MSR.raw(), 0xC000_0080);
    }
}
