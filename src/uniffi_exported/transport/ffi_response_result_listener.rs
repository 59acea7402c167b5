use crate::prelude::*;

/// Implemented FFI side by the embedded caller, receives the result of a
/// submitted request exactly once.
#[uniffi::export(with_foreign)]
pub trait FFIResponseResultListener: Send + Sync {
    fn on_result(&self, result: FFIResponseResult);
}
