//! Process-wide SDK state.
//!
//! The HTTP transport needs no global setup, but the SDK keeps the
//! `init`/`cleanup` pair so applications can bracket their use of it. The
//! flag is an atomic, so racing first calls from several threads are safe.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::WasmifyResult;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Mark the SDK as initialized. Calling it again is a no-op.
pub fn init() -> WasmifyResult<()> {
    if INITIALIZED
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
    {
        tracing::debug!("Wasmify SDK initialized");
    }
    Ok(())
}

/// Tear down the SDK state. Does nothing unless [`init`] ran before.
pub fn cleanup() {
    if INITIALIZED
        .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
    {
        tracing::debug!("Wasmify SDK cleaned up");
    }
}

pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::Acquire)
}
