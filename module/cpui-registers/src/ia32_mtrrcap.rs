use crate::msr::Msr;
use bitfield_struct::bitfield;

#[cfg(feature = "asm")]
use crate::LoadRegisterUnsafe;

/// `IA32_MTRRCAP` (MSR `0xFE`) — memory type range register capabilities.
#[bitfield(u64, order = Lsb)]
#[derive(Eq, PartialEq)]
pub struct Ia32Mtrrcap {
    /// Bits 0–7 — VCNT: number of variable-range registers.
    #[bits(8)]
    pub variable_count: u8,
    /// Bit 8 — FIX: fixed-range registers supported.
    pub fixed_supported: bool,
    _rsv9: bool,
    /// Bit 10 — WC: write-combining memory type supported.
    pub write_combining: bool,
    /// Bit 11 — SMRR: system-management range registers supported.
    pub smrr: bool,
    #[bits(52)]
    _rsv12: u64,
}

impl Ia32Mtrrcap {
    /// MSR index for `IA32_MTRRCAP`.
    pub const MSR: Msr = Msr::new(0xFE);
}

#[cfg(feature = "asm")]
impl LoadRegisterUnsafe for Ia32Mtrrcap {
    unsafe fn load_unsafe() -> Self {
        let raw = unsafe { Self::MSR.load_raw() };
        Self::from_bits(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_desktop_value_decodes() {
        // 8 variable ranges, fixed ranges and WC supported.
        let cap = Ia32Mtrrcap::from_bits(0x508);
        assert_eq!(cap.variable_count(), 8);
        assert!(cap.fixed_supported());
        assert!(cap.write_combining());
        assert!(!cap.smrr());
    }
}
