//! Feature-word decode tables.
//!
//! One constant table per tracked word, naming the notable bits the report
//! spells out. Raw words are always logged in full; the tables only drive the
//! human-readable rendering, so an unlisted bit is still visible in the hex
//! dump.

use crate::info::FeatureWord;
use core::fmt;

/// CPUID.01H:EDX — RDMSR/WRMSR implemented; gates the whole MSR dump.
pub const EDX_MSR: u32 = 1 << 5;
/// CPUID.01H:EDX — on-chip APIC present; gates the `IA32_APIC_BASE` read.
pub const EDX_APIC: u32 = 1 << 9;
/// CPUID.01H:EDX — MTRRs implemented; gates the `IA32_MTRRCAP` read.
pub const EDX_MTRR: u32 = 1 << 12;
/// CPUID.01H:EDX — x87 FPU on chip.
pub const EDX_FPU: u32 = 1 << 0;

/// A named bit within a feature word.
#[derive(Copy, Clone, Debug)]
pub struct Flag {
    pub bit: u8,
    pub name: &'static str,
}

const fn flag(bit: u8, name: &'static str) -> Flag {
    Flag { bit, name }
}

/// Notable bits of CPUID.01H:ECX.
pub const LEAF01_ECX: &[Flag] = &[
    flag(0, "sse3"),
    flag(1, "pclmulqdq"),
    flag(3, "monitor"),
    flag(5, "vmx"),
    flag(9, "ssse3"),
    flag(12, "fma"),
    flag(13, "cx16"),
    flag(17, "pcid"),
    flag(19, "sse4_1"),
    flag(20, "sse4_2"),
    flag(21, "x2apic"),
    flag(22, "movbe"),
    flag(23, "popcnt"),
    flag(24, "tsc_deadline"),
    flag(25, "aes"),
    flag(26, "xsave"),
    flag(27, "osxsave"),
    flag(28, "avx"),
    flag(29, "f16c"),
    flag(30, "rdrand"),
    flag(31, "hypervisor"),
];

/// Notable bits of CPUID.01H:EDX.
pub const LEAF01_EDX: &[Flag] = &[
    flag(0, "fpu"),
    flag(4, "tsc"),
    flag(5, "msr"),
    flag(6, "pae"),
    flag(8, "cx8"),
    flag(9, "apic"),
    flag(11, "sep"),
    flag(12, "mtrr"),
    flag(13, "pge"),
    flag(15, "cmov"),
    flag(16, "pat"),
    flag(19, "clfsh"),
    flag(23, "mmx"),
    flag(24, "fxsr"),
    flag(25, "sse"),
    flag(26, "sse2"),
    flag(28, "htt"),
];

/// Notable bits of CPUID.06H:EAX.
pub const LEAF06_EAX: &[Flag] = &[
    flag(0, "dts"),
    flag(1, "turbo"),
    flag(2, "arat"),
    flag(4, "pln"),
    flag(5, "ecmd"),
    flag(6, "ptm"),
    flag(7, "hwp"),
    flag(8, "hwp_notify"),
    flag(9, "hwp_act_window"),
    flag(10, "hwp_epp"),
    flag(13, "hdc"),
];

/// Notable bits of CPUID.07H(0):EBX.
pub const LEAF07_EBX: &[Flag] = &[
    flag(0, "fsgsbase"),
    flag(1, "tsc_adjust"),
    flag(2, "sgx"),
    flag(3, "bmi1"),
    flag(4, "hle"),
    flag(5, "avx2"),
    flag(7, "smep"),
    flag(8, "bmi2"),
    flag(9, "erms"),
    flag(10, "invpcid"),
    flag(11, "rtm"),
    flag(14, "mpx"),
    flag(16, "avx512f"),
    flag(18, "rdseed"),
    flag(19, "adx"),
    flag(20, "smap"),
    flag(23, "clflushopt"),
    flag(24, "clwb"),
    flag(29, "sha"),
];

/// Notable bits of CPUID.07H(0):ECX.
pub const LEAF07_ECX: &[Flag] = &[
    flag(2, "umip"),
    flag(3, "pku"),
    flag(5, "waitpkg"),
    flag(8, "gfni"),
    flag(9, "vaes"),
    flag(10, "vpclmulqdq"),
    flag(22, "rdpid"),
    flag(25, "cldemote"),
    flag(27, "movdiri"),
    flag(28, "movdir64b"),
];

/// Notable bits of CPUID.07H(0):EDX.
pub const LEAF07_EDX: &[Flag] = &[
    flag(10, "md_clear"),
    flag(14, "serialize"),
    flag(15, "hybrid"),
    flag(26, "ibrs_ibpb"),
    flag(27, "stibp"),
    flag(28, "l1d_flush"),
    flag(29, "arch_capabilities"),
    flag(31, "ssbd"),
];

/// Notable bits of CPUID.07H(1):EAX.
pub const LEAF07_S1_EAX: &[Flag] = &[
    flag(4, "avx_vnni"),
    flag(5, "avx512_bf16"),
    flag(10, "fzrm"),
    flag(11, "fsrs"),
    flag(12, "fsrc"),
    flag(22, "hreset"),
    flag(26, "lam"),
];

/// Notable bits of CPUID.8000_0001H:ECX.
pub const EXT01_ECX: &[Flag] = &[
    flag(0, "lahf_lm"),
    flag(2, "svm"),
    flag(5, "lzcnt"),
    flag(6, "sse4a"),
    flag(8, "3dnowprefetch"),
    flag(11, "xop"),
    flag(16, "fma4"),
    flag(21, "tbm"),
];

/// Notable bits of CPUID.8000_0001H:EDX.
pub const EXT01_EDX: &[Flag] = &[
    flag(11, "syscall"),
    flag(20, "nx"),
    flag(22, "mmxext"),
    flag(26, "pdpe1gb"),
    flag(27, "rdtscp"),
    flag(29, "lm"),
    flag(30, "3dnowext"),
    flag(31, "3dnow"),
];

/// The decode table for `word`.
#[must_use]
pub const fn table(word: FeatureWord) -> &'static [Flag] {
    match word {
        FeatureWord::Leaf01Ecx => LEAF01_ECX,
        FeatureWord::Leaf01Edx => LEAF01_EDX,
        FeatureWord::Leaf06Eax => LEAF06_EAX,
        FeatureWord::Leaf07Ebx => LEAF07_EBX,
        FeatureWord::Leaf07Ecx => LEAF07_ECX,
        FeatureWord::Leaf07Edx => LEAF07_EDX,
        FeatureWord::Leaf07S1Eax => LEAF07_S1_EAX,
        FeatureWord::Ext01Ecx => EXT01_ECX,
        FeatureWord::Ext01Edx => EXT01_EDX,
    }
}

/// Renders the set, named bits of a feature word, space separated.
///
/// No allocation; flags stream straight into the formatter.
pub struct SetFlags {
    value: u32,
    table: &'static [Flag],
}

impl SetFlags {
    #[must_use]
    pub const fn new(value: u32, table: &'static [Flag]) -> Self {
        Self { value, table }
    }
}

impl fmt::Display for SetFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for flag in self.table {
            if self.value & (1 << flag.bit) != 0 {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(flag.name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bits_render_their_names() {
        let rendered = format!("{}", SetFlags::new((1 << 0) | (1 << 28), LEAF01_ECX));
        assert_eq!(rendered, "sse3 avx");
    }

    #[test]
    fn zero_word_renders_empty() {
        let rendered = format!("{}", SetFlags::new(0, LEAF01_EDX));
        assert_eq!(rendered, "");
    }

    #[test]
    fn unlisted_bits_are_ignored_by_the_renderer() {
        // Bit 7 of 01h:ECX is not in the table; only the listed bit shows.
        let rendered = format!("{}", SetFlags::new((1 << 7) | (1 << 5), LEAF01_ECX));
        assert_eq!(rendered, "vmx");
    }

    #[test]
    fn tables_stay_within_a_32_bit_word() {
        for word in crate::info::FeatureWord::ALL {
            for flag in table(word) {
                assert!(flag.bit < 32, "{} out of range", flag.name);
            }
        }
    }

    #[test]
    fn gate_masks_match_their_table_entries() {
        assert!(LEAF01_EDX.iter().any(|f| f.name == "msr" && 1 << f.bit == EDX_MSR));
        assert!(LEAF01_EDX.iter().any(|f| f.name == "apic" && 1 << f.bit == EDX_APIC));
        assert!(LEAF01_EDX.iter().any(|f| f.name == "mtrr" && 1 << f.bit == EDX_MTRR));
        assert!(LEAF01_EDX.iter().any(|f| f.name == "fpu" && 1 << f.bit == EDX_FPU));
    }
}
