use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Turn verbose diagnostics on or off for the rest of the process.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Write a diagnostic line to stderr. Use `verbose_eprintln!` instead.
pub fn trace(msg: String) {
    eprintln!("{}", msg);
}

/// Works like `eprintln!` but only prints when `--verbose` is set, keeping
/// stdout free for results.
#[macro_export]
macro_rules! verbose_eprintln {
    ($($arg:tt)*) => {
        if $crate::diagnostics::is_verbose() {
            $crate::diagnostics::trace(format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_verbose() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
