//! # tolerance-core
//!
//! Runtime support for tolerant functions: wrappers that swallow
//! configured failures and return a substitute value instead, with a
//! per-call opt-out switch and a process-wide kill-switch.
//!
//! See the main `tolerance` crate for usage examples.

mod global;
mod kwargs;
mod switch;
mod tolerate;

pub use global::{DisabledGuard, disabled, is_disabled, set_disabled};
pub use kwargs::{Kwargs, Value};
pub use switch::{
    FAIL_SILENTLY, SwitchDecision, SwitchFn, SwitchOptions, SwitchSpec, argument_switch,
};
pub use tolerate::{ErrorFilter, Tolerant, ToleranceConfig, tolerate};
