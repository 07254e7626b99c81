use redline_core::errors::{ExError, RedlineError};
use redline_core::{log_op_end, log_op_error, log_op_start};
use redline_core_types::RequestContext;

/// Run one engine operation between start/end log events.
///
/// Errors are converted to `ExError` carrying the operation name and the
/// request's correlation IDs.
pub(crate) fn instrumented<T>(
    op: &'static str,
    ctx: &RequestContext,
    f: impl FnOnce() -> Result<T, RedlineError>,
) -> Result<T, ExError> {
    log_op_start!(op, request_id = ctx.request_id.as_str());
    let start = std::time::Instant::now();

    let result = f().map_err(|e| ExError::from(e).with_op(op).with_context(ctx));

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = elapsed, request_id = ctx.request_id.as_str());
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = elapsed, request_id = ctx.request_id.as_str());
        }
    }
    result
}
