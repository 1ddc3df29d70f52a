//! Internal logging helpers for structured keyseek events.

/// Single logging target for keyseek.
pub(crate) const LOG_TARGET: &str = "keyseek";

macro_rules! keyseek_log {
    ($level:expr, $event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!($level) {
            log::log!(
                target: crate::logging::LOG_TARGET,
                $level,
                "event={} {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use keyseek_log;
