/// Diagnostic sink injected into the inventory writer.
///
/// Any `Fn(&str, &str)` closure works as a logger, which keeps tests free of
/// global subscriber state.
pub trait InventoryLogger {
    fn log(&self, facility: &str, message: &str);
}

impl<F> InventoryLogger for F
where
    F: Fn(&str, &str),
{
    fn log(&self, facility: &str, message: &str) {
        self(facility, message)
    }
}

/// Forwards diagnostics to `tracing` at INFO level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl InventoryLogger for TracingLogger {
    fn log(&self, facility: &str, message: &str) {
        tracing::info!(facility = %facility, "{}", message);
    }
}
