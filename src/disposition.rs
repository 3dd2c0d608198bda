//! What happens to the process after a failing check.

use std::process;
use std::thread;
use std::time::Duration;

use crate::config::{Environment, SLEEP_VAR};

/// Exit status for a run stopped by a failing check.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// How long a failing process waits for a debugger to attach.
pub const SUSPEND_INTERVAL: Duration = Duration::from_secs(300);

/// The fate of the process after a failure has been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Terminate immediately with the given status.
    Exit(i32),
    /// Block the whole process, then let the test continue.
    Suspend(Duration),
}

impl Disposition {
    /// Suspends if `TESTME_SLEEP` is present (any value), exits otherwise.
    pub fn decide(env: &dyn Environment) -> Self {
        if env.is_set(SLEEP_VAR) {
            Disposition::Suspend(SUSPEND_INTERVAL)
        } else {
            Disposition::Exit(FAILURE_EXIT_CODE)
        }
    }

    pub fn apply(self) {
        match self {
            Disposition::Exit(code) => process::exit(code),
            Disposition::Suspend(interval) => thread::sleep(interval),
        }
    }
}

#[cfg(test)]
mod disposition_tests {
    use super::*;
    use crate::config::MapEnv;

    #[test]
    fn test_exit_when_sleep_unset() {
        assert_eq!(Disposition::decide(&MapEnv::new()), Disposition::Exit(1));
    }

    #[test]
    fn test_suspend_on_presence_regardless_of_value() {
        for value in ["1", "0", "", "no"] {
            let env = MapEnv::new().with(SLEEP_VAR, value);
            assert_eq!(
                Disposition::decide(&env),
                Disposition::Suspend(Duration::from_secs(300))
            );
        }
    }

    #[test]
    fn test_zero_suspend_returns() {
        Disposition::Suspend(Duration::ZERO).apply();
    }
}
