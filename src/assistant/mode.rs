//! Live/demo mode flag.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

/// Which path the resolver takes for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Live,
    Demo,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Live => write!(f, "live"),
            Mode::Demo => write!(f, "demo"),
        }
    }
}

/// Shared mode flag.
///
/// Only ever moves from `Live` to `Demo`. Concurrent downgrades all store
/// the same value, so relaxed ordering is enough.
#[derive(Debug)]
pub struct ModeFlag {
    demo: AtomicBool,
}

impl ModeFlag {
    pub fn new(mode: Mode) -> Self {
        Self {
            demo: AtomicBool::new(mode == Mode::Demo),
        }
    }

    pub fn get(&self) -> Mode {
        if self.demo.load(Ordering::Relaxed) {
            Mode::Demo
        } else {
            Mode::Live
        }
    }

    /// Switch to demo mode. Returns `true` if this call changed the mode.
    pub fn downgrade(&self) -> bool {
        !self.demo.swap(true, Ordering::Relaxed)
    }
}
