use crate::msr::Msr;
use bitfield_struct::bitfield;

#[cfg(feature = "asm")]
use crate::LoadRegisterUnsafe;

/// `IA32_APIC_BASE` (MSR `0x1B`) — local APIC base address and enables.
#[bitfield(u64, order = Lsb)]
#[derive(Eq, PartialEq)]
pub struct Ia32ApicBase {
    #[bits(8)]
    _rsv0: u8,
    /// Bit 8 — BSP: this processor is the bootstrap processor.
    pub bsp: bool,
    _rsv9: bool,
    /// Bit 10 — EXTD: x2APIC mode enable.
    pub x2apic_enable: bool,
    /// Bit 11 — EN: xAPIC global enable.
    pub global_enable: bool,
    /// Bits 12–51 — APIC base, as a physical page number.
    #[bits(40)]
    pub base_page: u64,
    #[bits(12)]
    _rsv52: u16,
}

impl Ia32ApicBase {
    /// MSR index for `IA32_APIC_BASE`.
    pub const MSR: Msr = Msr::new(0x1B);

    /// The APIC MMIO base as a physical byte address.
    #[must_use]
    pub const fn base_address(self) -> u64 {
        self.base_page() << 12
    }
}

#[cfg(feature = "asm")]
impl LoadRegisterUnsafe for Ia32ApicBase {
    unsafe fn load_unsafe() -> Self {
        let raw = unsafe { Self::MSR.load_raw() };
        Self::from_bits(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_processor_value_decodes() {
        // The reset default on the BSP: base 0xFEE0_0000, enabled.
        let apic = Ia32ApicBase::from_bits(0xFEE0_0900);
        assert!(apic.bsp());
        assert!(apic.global_enable());
        assert!(!apic.x2apic_enable());
        assert_eq!(apic.base_address(), 0xFEE0_0000);
    }

    #[test]
    fn base_address_is_page_aligned() {
        let apic = Ia32ApicBase::new().with_base_page(0x12345);
        assert_eq!(apic.base_address(), 0x1234_5000);
    }
}
