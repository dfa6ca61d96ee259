//! Locale-independent decimal formatting scope.
//!
//! Numeric text produced and consumed by this crate always uses `.` as the
//! decimal separator and ASCII digits. [`DecimalScope`] marks the region in
//! which that holds for the current thread. Scopes nest, are tracked per
//! thread, and are released when the guard drops, including on early returns
//! and unwinding.

use std::{cell::Cell, fmt::Display, marker::PhantomData, str::FromStr};

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Guard holding the "C" decimal rules for the current thread.
///
/// The guard is `!Send`: it must be dropped on the thread that acquired it.
#[derive(Debug)]
#[must_use = "the scope is released as soon as the guard is dropped"]
pub struct DecimalScope {
    _not_send: PhantomData<*const ()>,
}

impl DecimalScope {
    /// Enters a decimal scope on the current thread.
    pub fn acquire() -> Self {
        DEPTH.with(|d| d.set(d.get() + 1));
        Self {
            _not_send: PhantomData,
        }
    }

    /// Returns `true` while the current thread holds at least one scope.
    pub fn is_active() -> bool {
        DEPTH.with(|d| d.get() > 0)
    }
}

impl Drop for DecimalScope {
    fn drop(&mut self) {
        DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

/// Renders `value` using locale-independent decimal rules.
pub fn print_value<T: Display + ?Sized>(value: &T) -> String {
    let _scope = DecimalScope::acquire();
    value.to_string()
}

/// Parses `text` using locale-independent decimal rules.
///
/// Returns `None` when the text does not parse as `T`.
pub fn scan_value<T: FromStr>(text: &str) -> Option<T> {
    let _scope = DecimalScope::acquire();
    text.parse().ok()
}
