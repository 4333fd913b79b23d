//! # CPUID Primitives
//!
//! Thin wrappers around the x86 `CPUID` instruction: an availability probe,
//! the raw instruction, and typed views of the leaves the module consumes.
//!
//! Every leaf wrapper re-checks its own range via [`CpuidRanges`] before
//! executing the query, so callers cannot read a leaf the part never
//! advertised.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod brand;
mod leaf01h;
mod leaf06h;
mod leaf07h;
mod leaf80000001h;
mod ranges;

pub use brand::BrandString;
pub use leaf01h::{LEAF_01H, Leaf01h, VersionInfo};
pub use leaf06h::{LEAF_06H, Leaf06h};
pub use leaf07h::{LEAF_07H, Leaf07h};
pub use leaf80000001h::{
    EXT_EDX_LM, EXT_EDX_NX, EXT_EDX_SYSCALL, LEAF_8000_0001H, Leaf80000001h,
};
pub use ranges::{CpuVendor, CpuidRanges, VendorString};

/// RFLAGS.ID (bit 21); writable exactly when the part implements `CPUID`.
const RFLAGS_ID: u64 = 1 << 21;

/// Returns whether the `CPUID` instruction is available.
///
/// Probes by flipping the ID flag in RFLAGS and checking whether the flip
/// sticks. The original flags are restored before returning.
#[must_use]
pub fn cpuid_supported() -> bool {
    let diff: u64;
    unsafe {
        core::arch::asm!(
            "pushfq",                        // keep the original RFLAGS
            "pushfq",
            "xor qword ptr [rsp], 0x200000", // flip ID in the copy
            "popfq",                         // try to latch the flipped value
            "pushfq",
            "pop {diff}",                    // what the CPU actually kept
            "xor {diff}, [rsp]",             // compare against the original
            "popfq",                         // restore the original RFLAGS
            diff = out(reg) diff,
            options(preserves_flags),
        );
    }
    diff & RFLAGS_ID != 0
}

/// Execute `CPUID` with the given leaf and subleaf.
///
/// # Safety
/// The `CPUID` instruction must be available; probe with [`cpuid_supported`]
/// first on parts where that is in question.
#[inline(always)]
#[must_use]
#[allow(unused_assignments, clippy::inline_always)]
pub unsafe fn cpuid(leaf: u32, subleaf: u32) -> CpuidResult {
    let (mut eax, mut ebx, mut ecx, mut edx) = (leaf, 0u32, subleaf, 0u32);
    unsafe {
        core::arch::asm!(
            // LLVM reserves RBX; shuffle the output through a scratch register.
            "push rbx",
            "cpuid",
            "mov {ebx_out:e}, ebx",
            "pop rbx",
            ebx_out = lateout(reg) ebx,
            inlateout("eax") eax,
            inlateout("ecx") ecx,
            lateout("edx") edx,
            options(nomem, preserves_flags),
        );
    }
    CpuidResult { eax, ebx, ecx, edx }
}

/// The four registers a `CPUID` query fills.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(C)]
pub struct CpuidResult {
    pub eax: u32,
    pub ebx: u32,
    pub ecx: u32,
    pub edx: u32,
}

#[cfg(all(test, target_arch = "x86_64"))]
mod tests {
    use super::*;

    #[test]
    fn cpuid_is_available_on_x86_64() {
        // Architecturally guaranteed in 64-bit mode; the probe must agree.
        assert!(cpuid_supported());
    }

    #[test]
    fn leaf0_reports_a_leaf_range() {
        let r = unsafe { cpuid(0, 0) };
        // Leaf 1 has existed since the original Pentium.
        assert!(r.eax >= 1);
    }
}
