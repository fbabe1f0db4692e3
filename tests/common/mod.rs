// Shared helpers for integration tests.
//
// Provides a host that records every call the dispatcher makes instead of
// running anything, so tests can assert on which applet ran, with which
// arguments, and in what order relative to priming.
#![allow(dead_code)]

use std::cell::RefCell;
use std::ffi::{OsStr, OsString};

use magisk_applets::host::Host;
use magisk_applets::registry::Applet;

/// One observed call on a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// `prime` with the given `argv[0]`.
    Prime(OsString),
    /// `invoke` with the selected applet and its argument vector.
    Invoke(Applet, Vec<OsString>),
}

/// A [`Host`] that records calls and returns a fixed status from `invoke`.
#[derive(Debug, Default)]
pub struct RecordingHost {
    calls: RefCell<Vec<Call>>,
    status: i32,
}

impl RecordingHost {
    /// A host whose applets all succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose applets all return `status`.
    pub fn returning(status: i32) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            status,
        }
    }

    /// All calls observed so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// The single `invoke` call, if exactly one happened.
    pub fn invoked(&self) -> Option<(Applet, Vec<String>)> {
        let invokes: Vec<_> = self
            .calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Invoke(applet, argv) => Some((
                    *applet,
                    argv.iter()
                        .map(|a| a.to_string_lossy().into_owned())
                        .collect(),
                )),
                Call::Prime(_) => None,
            })
            .collect();
        match invokes.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        }
    }
}

impl Host for RecordingHost {
    fn prime(&self, argv0: &OsStr) {
        self.calls
            .borrow_mut()
            .push(Call::Prime(argv0.to_os_string()));
    }

    fn invoke(&self, applet: Applet, argv: &[OsString]) -> i32 {
        self.calls
            .borrow_mut()
            .push(Call::Invoke(applet, argv.to_vec()));
        self.status
    }
}

/// Build an owned argument vector.
pub fn args(items: &[&str]) -> Vec<OsString> {
    items.iter().map(OsString::from).collect()
}

/// Dispatch `items` through `host`, returning the exit status and whatever
/// was written to the error stream.
pub fn dispatch(host: &RecordingHost, items: &[&str]) -> (i32, String) {
    let mut stderr = Vec::new();
    let code = magisk_applets::run(host, &args(items), &mut stderr);
    (code, String::from_utf8_lossy(&stderr).into_owned())
}
