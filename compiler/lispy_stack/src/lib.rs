//! Stack growth for recursion over nested expressions.
//!
//! Both the parser and the evaluator recurse once per level of parenthesis
//! nesting. Wrapping each recursive step in [`ensure_sufficient_stack`]
//! lets input like `+ 1 (+ 1 (+ 1 ...))` nest far deeper than the native
//! thread stack would otherwise allow.
//!
//! On native targets the stack is grown on demand with `stacker`. On WASM
//! the closure is called directly.

/// Headroom to keep before each recursive step.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Size of each freshly allocated stack segment.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if less than the red
/// zone remains on the current one.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
