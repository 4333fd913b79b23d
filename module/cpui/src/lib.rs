//! # `cpui` — CPU identification diagnostics
//!
//! Queries the x86-64 `CPUID` instruction (and a handful of MSRs) once at
//! initialization, decodes the result, and logs it through the `log` facade:
//! vendor identity, display family/model/stepping, raw feature words with the
//! notable flags spelled out, and feature-gated register dumps (`IA32_EFER`,
//! `IA32_APIC_BASE`, `IA32_MTRRCAP`).
//!
//! The module does exactly one thing at load: probe, detect, report. The
//! detected [`CpuInfo`] stays resident in a static for later readers; there
//! is nothing to tear down at unload beyond a farewell log line.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod detect;
mod features;
mod info;
mod report;

pub use detect::{DetectError, detect};
pub use features::{Flag, SetFlags};
pub use info::{CpuInfo, FeatureWord};
pub use report::{report, report_msrs};

use cpui_qemu::QemuLogger;
use cpui_sync::SyncOnceCell;
use log::{LevelFilter, error, info};

/// The record captured at init; written once, read only afterwards.
static CPU: SyncOnceCell<CpuInfo> = SyncOnceCell::new();

/// Failure modes of [`init`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    /// The processor does not implement the `CPUID` instruction.
    #[error("CPUID instruction is not supported")]
    CpuidUnsupported,
}

impl From<DetectError> for InitError {
    fn from(value: DetectError) -> Self {
        match value {
            DetectError::CpuidUnsupported => Self::CpuidUnsupported,
        }
    }
}

/// Module load path: probe, detect once, log everything.
///
/// Installs the QEMU debug-port logger best-effort; an embedder that already
/// set a `log` backend keeps it. A second call reuses the record detected by
/// the first and reports it again.
///
/// # Errors
/// [`InitError::CpuidUnsupported`] when the availability probe fails; an
/// error line is logged before returning.
///
/// # Safety
/// Must run at CPL 0: the MSR dump executes `RDMSR`.
pub unsafe fn init() -> Result<&'static CpuInfo, InitError> {
    let _ = QemuLogger::new(LevelFilter::Trace).init();

    let detected = match detect() {
        Ok(info) => info,
        Err(err) => {
            error!("{err}, aborting");
            return Err(err.into());
        }
    };
    info!("CPUID instruction is supported");

    let cpu = CPU.get_or_init(|| detected);
    report(cpu);
    // SAFETY: CPL 0 per this function's contract.
    unsafe { report_msrs(cpu) };
    Ok(cpu)
}

/// Module unload path.
pub fn exit() {
    info!("exit complete");
}

/// The record captured by [`init`], if initialization has run.
#[must_use]
pub fn cpu() -> Option<&'static CpuInfo> {
    CPU.get()
}
