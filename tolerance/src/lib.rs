//! # tolerance
//!
//! Tolerance makes functions fail silently: a wrapped function swallows
//! configured errors and returns a substitute value instead of
//! propagating them. Tolerance can be opted out of per call through a
//! switch argument, and killed process-wide through a global flag.
//!
//! # Quick Start
//!
//! ```rust
//! use tolerance::*;
//!
//! let parse_int = tolerate::<&str, i32, _>().wrap(|input, _| input.parse::<i32>());
//!
//! assert_eq!(parse_int.invoke("0"), Ok(0));
//! // the parse error is swallowed; the default substitute comes back
//! assert_eq!(parse_int.invoke("zero"), Ok(0));
//! // opt out for one call: the original error propagates
//! assert!(
//!     parse_int
//!         .call("zero", Kwargs::new().arg("fail_silently", false))
//!         .is_err()
//! );
//! ```
//!
//! # Examples
//!
//! ## Substitutes
//!
//! ```rust
//! use tolerance::*;
//!
//! // a fixed substitute value
//! let parse_int = tolerate()
//!     .with_substitute(-1)
//!     .wrap(|input: &&str, _: &Kwargs| input.parse::<i32>());
//! assert_eq!(parse_int.invoke("zero"), Ok(-1));
//!
//! // or a substitute computed from the call's own arguments
//! let prefer_len = tolerate()
//!     .with_substitute_fn(|input: &&str, _| input.len() as i32)
//!     .wrap(|input: &&str, _: &Kwargs| input.parse::<i32>());
//! assert_eq!(prefer_len.invoke("four"), Ok(4));
//! ```
//!
//! ## Filtering which errors are swallowed
//!
//! ```rust
//! use tolerance::*;
//!
//! #[derive(Debug, PartialEq)]
//! enum LookupError {
//!     Missing,
//!     Denied,
//! }
//!
//! let lookup = tolerate::<&str, i32, _>()
//!     .with_exceptions(|e| matches!(e, LookupError::Missing))
//!     .wrap(|key, _| match *key {
//!         "answer" => Ok(42),
//!         "secret" => Err(LookupError::Denied),
//!         _ => Err(LookupError::Missing),
//!     });
//!
//! assert_eq!(lookup.invoke("answer"), Ok(42));
//! assert_eq!(lookup.invoke("nope"), Ok(0));
//! // not in the allow-set: propagated unchanged
//! assert_eq!(lookup.invoke("secret"), Err(LookupError::Denied));
//! ```
//!
//! ## Switches
//!
//! ```rust
//! use tolerance::*;
//!
//! // a differently named switch argument
//! let parse_int = tolerate::<&str, i32, _>()
//!     .with_switch("patient")
//!     .wrap(|input, _| input.parse::<i32>());
//! assert!(
//!     parse_int
//!         .call("zero", Kwargs::new().arg("patient", false))
//!         .is_err()
//! );
//!
//! // reversed: tolerance off when the argument is truthy
//! let parse_int = tolerate::<&str, i32, _>()
//!     .with_switch(SwitchOptions::named("aggressive").reversed())
//!     .wrap(|input, _| input.parse::<i32>());
//! assert!(
//!     parse_int
//!         .call("zero", Kwargs::new().arg("aggressive", true))
//!         .is_err()
//! );
//!
//! // no switch at all: tolerance is always active
//! let parse_int = tolerate::<&str, i32, _>()
//!     .without_switch()
//!     .wrap(|input, _| input.parse::<i32>());
//! assert_eq!(
//!     parse_int.call("zero", Kwargs::new().arg("fail_silently", false)),
//!     Ok(0)
//! );
//! ```
//!
//! ## Disabling tolerance globally
//!
//! ```rust
//! use tolerance::*;
//!
//! let parse_int = tolerate::<&str, i32, _>().wrap(|input, _| input.parse::<i32>());
//!
//! {
//!     let _guard = disabled();
//!     // every wrapped function now behaves as the raw target
//!     assert!(parse_int.invoke("zero").is_err());
//! } // previous state restored
//! assert_eq!(parse_int.invoke("zero"), Ok(0));
//! ```
//!
//! ## The `#[tolerant]` attribute
//!
//! ```rust
//! use tolerance::*;
//!
//! #[tolerant(substitute = 8080)]
//! fn parse_port(input: &str) -> Result<u16, std::num::ParseIntError> {
//!     input.parse()
//! }
//!
//! assert_eq!(parse_port("6667"), Ok(6667));
//! assert_eq!(parse_port("default"), Ok(8080));
//! ```

pub use tolerance_core::*;
pub use tolerance_macro::*;

pub extern crate tolerance_core;
