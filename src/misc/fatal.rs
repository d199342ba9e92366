use crate::misc::log::targets;

/// Reports an unrecoverable condition and terminates.
///
/// Used when a store reaches its architectural maximum capacity.
/// The maxima are chosen to exceed any practical need, so exhausting one
/// indicates a configuration or scale problem outside the library, and there
/// is nothing to retry.
pub fn fatal(message: &str) -> ! {
    log::error!(target: targets::FATAL, "{message}");
    panic!("{message}");
}
