//! `magisk` multi-call binary.
use std::ffi::OsString;

use magisk_applets::host::System;

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();
    let host = System::new();
    let code = magisk_applets::run(&host, &args, &mut std::io::stderr());
    std::process::exit(code);
}
