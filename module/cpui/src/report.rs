//! Logging of the detected record.

use crate::features::{self, SetFlags};
use crate::info::{CpuInfo, FeatureWord};
use cpui_cpuid::{EXT_EDX_LM, EXT_EDX_NX, EXT_EDX_SYSCALL};
use cpui_registers::LoadRegisterUnsafe;
use cpui_registers::efer::Efer;
use cpui_registers::ia32_apic_base::Ia32ApicBase;
use cpui_registers::ia32_mtrrcap::Ia32Mtrrcap;
use log::info;

/// Log the CPUID-derived parts of the record.
pub fn report(cpu: &CpuInfo) {
    info!("maximum basic CPUID leaf = {:#x}", cpu.max_basic);
    info!("maximum extended CPUID leaf = {:#x}", cpu.max_extended);
    info!(
        "identity string = {} ({})",
        cpu.vendor,
        cpu.vendor_kind().as_str()
    );
    if let Some(brand) = &cpu.brand {
        info!("brand string = {brand}");
    }
    info!(
        "family {} ({:#x}), model {} ({:#x}), stepping {}",
        cpu.family, cpu.family, cpu.model, cpu.model, cpu.stepping
    );

    for word in FeatureWord::ALL {
        let value = cpu.word(word);
        info!(
            "features {:>14} = {:#010x} [{}]",
            word.source(),
            value,
            SetFlags::new(value, features::table(word))
        );
    }
}

/// Dump the MSRs whose presence the CPUID pass established.
///
/// # Safety
/// Must run at CPL 0; `RDMSR` is privileged.
pub unsafe fn report_msrs(cpu: &CpuInfo) {
    if !cpu.has(FeatureWord::Leaf01Edx, features::EDX_MSR) {
        info!("RDMSR/WRMSR not supported, skipping MSR dump");
        return;
    }

    if cpu.word(FeatureWord::Ext01Edx) & (EXT_EDX_SYSCALL | EXT_EDX_NX | EXT_EDX_LM) != 0 {
        // SAFETY: any of SYSCALL/NX/LM implies IA32_EFER exists; CPL 0 per
        // the caller's contract.
        let efer = unsafe { Efer::load_unsafe() };
        info!(
            "IA32_EFER = {:#018x} (SCE={} LME={} LMA={} NXE={})",
            efer.into_bits(),
            u8::from(efer.sce()),
            u8::from(efer.lme()),
            u8::from(efer.lma()),
            u8::from(efer.nxe())
        );
    }

    if cpu.has(FeatureWord::Leaf01Edx, features::EDX_APIC) {
        // SAFETY: the APIC feature bit implies IA32_APIC_BASE.
        let apic = unsafe { Ia32ApicBase::load_unsafe() };
        info!(
            "IA32_APIC_BASE = {:#018x} (BSP={} EXTD={} EN={} base={:#x})",
            apic.into_bits(),
            u8::from(apic.bsp()),
            u8::from(apic.x2apic_enable()),
            u8::from(apic.global_enable()),
            apic.base_address()
        );
    }

    if cpu.has(FeatureWord::Leaf01Edx, features::EDX_MTRR) {
        // SAFETY: the MTRR feature bit implies IA32_MTRRCAP.
        let cap = unsafe { Ia32Mtrrcap::load_unsafe() };
        info!(
            "IA32_MTRRCAP = {:#018x} (VCNT={} FIX={} WC={} SMRR={})",
            cap.into_bits(),
            cap.variable_count(),
            u8::from(cap.fixed_supported()),
            u8::from(cap.write_combining()),
            u8::from(cap.smrr())
        );
    }
}
