// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Panics reported through tracing, so they land in the `-err` log file.

use std::{any::Any, panic, thread};

use backtrace::Backtrace;

/// Log every panic at error level, with the panicking thread, its location
/// and a backtrace, then run the previously installed hook.
pub fn set_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let thread = thread::current();
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
        tracing::error!(
            thread = thread.name().unwrap_or("<unnamed>"),
            location = location.as_deref().unwrap_or("<unknown>"),
            backtrace = ?Backtrace::new(),
            "panicked: {}",
            payload_message(info.payload()),
        );
        previous(info);
    }));
}

/// The message carried by a panic payload, for `panic!` with a literal or a
/// formatted string.
fn payload_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string payload>")
}
