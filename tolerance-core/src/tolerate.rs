use crate::global;
use crate::kwargs::Kwargs;
use crate::switch::{FAIL_SILENTLY, SwitchFn, SwitchOptions, SwitchSpec, argument_switch};

/// Which errors a tolerant function is allowed to swallow.
pub enum ErrorFilter<E> {
    /// Every error is eligible for suppression.
    All,
    /// Only errors accepted by the predicate are suppressed; the rest
    /// are returned to the caller unchanged.
    Matching(Box<dyn Fn(&E) -> bool>),
}

impl<E> ErrorFilter<E> {
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(&E) -> bool + 'static,
    {
        ErrorFilter::Matching(Box::new(predicate))
    }

    pub fn allows(&self, error: &E) -> bool {
        match self {
            ErrorFilter::All => true,
            ErrorFilter::Matching(predicate) => predicate(error),
        }
    }
}

impl<E> Default for ErrorFilter<E> {
    fn default() -> Self {
        ErrorFilter::All
    }
}

#[cfg(feature = "anyhow")]
impl ErrorFilter<anyhow::Error> {
    /// Suppress only failures whose cause chain downcasts to `K`.
    pub fn of_kind<K>() -> Self
    where
        K: std::error::Error + Send + Sync + 'static,
    {
        ErrorFilter::matching(|error: &anyhow::Error| error.downcast_ref::<K>().is_some())
    }
}

#[cfg(feature = "eyre")]
impl ErrorFilter<eyre::Report> {
    /// Suppress only failures whose cause chain downcasts to `K`.
    pub fn of_kind<K>() -> Self
    where
        K: std::error::Error + Send + Sync + 'static,
    {
        ErrorFilter::matching(|error: &eyre::Report| error.downcast_ref::<K>().is_some())
    }
}

type SubstituteFn<A, T> = Box<dyn Fn(&A, &Kwargs) -> T>;
type TargetFn<A, T, E> = Box<dyn Fn(&A, &Kwargs) -> Result<T, E>>;

/// Per-wrapped-function configuration, built once and immutable after
/// [`wrap`](ToleranceConfig::wrap).
///
/// `A` is the positional argument type (typically a tuple), `T` the
/// success value, `E` the caller's error type. The config owns three
/// policies: the substitute produced in place of a swallowed failure,
/// the [`ErrorFilter`] deciding which failures are swallowed, and an
/// optional switch deciding per call whether tolerance applies at all.
///
/// ```rust
/// use tolerance_core::{Kwargs, ToleranceConfig};
///
/// let parse_int = ToleranceConfig::<&str, i32, _>::new()
///     .wrap(|input, _| input.parse::<i32>());
///
/// assert_eq!(parse_int.invoke("7"), Ok(7));
/// // the parse error is swallowed and the default substitute returned
/// assert_eq!(parse_int.invoke("seven"), Ok(0));
/// // per-call opt-out: the original error comes back unchanged
/// assert!(
///     parse_int
///         .call("seven", Kwargs::new().arg("fail_silently", false))
///         .is_err()
/// );
/// ```
pub struct ToleranceConfig<A, T, E> {
    substitute: SubstituteFn<A, T>,
    filter: ErrorFilter<E>,
    switch: Option<SwitchFn<A>>,
    on_tolerated: Option<Box<dyn Fn(&E)>>,
}

impl<A: 'static, T: 'static, E> ToleranceConfig<A, T, E> {
    /// A config with the "absent" substitute (`T::default()`), an
    /// unrestricted filter, and the default `fail_silently` switch.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self {
            substitute: Box::new(|_, _| T::default()),
            filter: ErrorFilter::All,
            switch: Some(Box::new(argument_switch(SwitchOptions::named(
                FAIL_SILENTLY,
            )))),
            on_tolerated: None,
        }
    }

    /// Return this value in place of a swallowed failure.
    pub fn with_substitute(mut self, value: T) -> Self
    where
        T: Clone,
    {
        self.substitute = Box::new(move |_, _| value.clone());
        self
    }

    /// Call this function with the (switch-adjusted) arguments to produce
    /// the value returned in place of a swallowed failure. If the
    /// substitute panics, the panic propagates; it is not swallowed a
    /// second time.
    pub fn with_substitute_fn<F>(mut self, substitute: F) -> Self
    where
        F: Fn(&A, &Kwargs) -> T + 'static,
    {
        self.substitute = Box::new(substitute);
        self
    }

    /// Restrict suppression to errors accepted by the predicate.
    pub fn with_exceptions<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + 'static,
    {
        self.filter = ErrorFilter::matching(predicate);
        self
    }

    pub fn with_filter(mut self, filter: ErrorFilter<E>) -> Self {
        self.filter = filter;
        self
    }

    /// Install a switch: an argument name, [`SwitchOptions`], or a custom
    /// switch via [`SwitchSpec::custom`]. Resolved here, once, into the
    /// canonical switch form.
    pub fn with_switch(mut self, switch: impl Into<SwitchSpec<A>>) -> Self {
        self.switch = Some(switch.into().resolve());
        self
    }

    /// Remove the switch entirely: tolerance is active on every call with
    /// no per-call opt-out.
    pub fn without_switch(mut self) -> Self {
        self.switch = None;
        self
    }

    /// Hook invoked with each swallowed error, before the substitute is
    /// produced.
    pub fn on_tolerated<F>(mut self, hook: F) -> Self
    where
        F: Fn(&E) + 'static,
    {
        self.on_tolerated = Some(Box::new(hook));
        self
    }

    /// Wrap a target function with this configuration.
    pub fn wrap<F>(self, target: F) -> Tolerant<A, T, E>
    where
        F: Fn(&A, &Kwargs) -> Result<T, E> + 'static,
    {
        Tolerant {
            config: self,
            target: Box::new(target),
        }
    }
}

impl<A: 'static, T: Default + 'static, E> Default for ToleranceConfig<A, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for [`ToleranceConfig::new`].
pub fn tolerate<A: 'static, T: Default + 'static, E>() -> ToleranceConfig<A, T, E> {
    ToleranceConfig::new()
}

/// A wrapped function that swallows configured failures instead of
/// propagating them.
pub struct Tolerant<A, T, E> {
    config: ToleranceConfig<A, T, E>,
    target: TargetFn<A, T, E>,
}

impl<A, T, E> Tolerant<A, T, E> {
    /// Call the wrapped function.
    ///
    /// Exactly one of three paths is taken: the target's result passes
    /// through (success, or tolerance bypassed by the global flag or the
    /// switch), the failure is swallowed and the substitute returned as
    /// `Ok`, or the original error comes back unchanged because the
    /// filter rejected it. No error is ever wrapped in another type.
    pub fn call(&self, args: A, kwargs: Kwargs) -> Result<T, E> {
        if global::is_disabled() {
            return (self.target)(&args, &kwargs);
        }
        let (args, kwargs) = match &self.config.switch {
            Some(switch) => {
                let decision = switch(args, kwargs);
                if !decision.enabled {
                    return (self.target)(&decision.args, &decision.kwargs);
                }
                (decision.args, decision.kwargs)
            }
            None => (args, kwargs),
        };
        match (self.target)(&args, &kwargs) {
            Ok(value) => Ok(value),
            Err(error) if self.config.filter.allows(&error) => {
                if let Some(hook) = &self.config.on_tolerated {
                    hook(&error);
                }
                Ok((self.config.substitute)(&args, &kwargs))
            }
            Err(error) => Err(error),
        }
    }

    /// [`call`](Tolerant::call) with an empty keyword mapping.
    pub fn invoke(&self, args: A) -> Result<T, E> {
        self.call(args, Kwargs::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switch::SwitchDecision;
    use std::cell::Cell;
    use std::num::ParseIntError;
    use std::rc::Rc;

    fn parse_int() -> Tolerant<&'static str, i32, ParseIntError> {
        tolerate().wrap(|input: &&str, _: &Kwargs| input.parse::<i32>())
    }

    #[test]
    fn success_passes_through_unchanged() {
        let wrapped = parse_int();
        assert_eq!(wrapped.invoke("42"), Ok(42));
        assert_eq!(
            wrapped.call("42", Kwargs::new().arg("fail_silently", false)),
            Ok(42)
        );
    }

    #[test]
    fn failure_returns_default_substitute() {
        let wrapped = parse_int();
        assert_eq!(wrapped.invoke("forty-two"), Ok(0));
    }

    #[test]
    fn failure_returns_configured_substitute() {
        let wrapped = tolerate()
            .with_substitute(-1)
            .wrap(|input: &&str, _: &Kwargs| input.parse::<i32>());
        assert_eq!(wrapped.invoke("nope"), Ok(-1));
    }

    #[test]
    fn substitute_fn_sees_switch_adjusted_arguments() {
        let wrapped = ToleranceConfig::<&str, String, ParseIntError>::new()
            .with_substitute_fn(|input, kwargs| {
                assert!(!kwargs.contains(FAIL_SILENTLY));
                format!("<{input}>")
            })
            .wrap(|input, _| input.parse::<i32>().map(|n| n.to_string()));
        assert_eq!(
            wrapped.call("oops", Kwargs::new().arg(FAIL_SILENTLY, true)),
            Ok("<oops>".to_string())
        );
    }

    #[test]
    fn default_switch_opts_out_per_call() {
        let wrapped = parse_int();
        let result = wrapped.call("nope", Kwargs::new().arg("fail_silently", false));
        assert!(result.is_err());
        // truthy and absent both leave tolerance on
        assert_eq!(
            wrapped.call("nope", Kwargs::new().arg("fail_silently", true)),
            Ok(0)
        );
        assert_eq!(wrapped.invoke("nope"), Ok(0));
    }

    #[derive(Clone, Debug, PartialEq)]
    enum NumberError {
        Unknown,
        Malformed,
    }

    fn force_int() -> Tolerant<&'static str, i32, NumberError> {
        tolerate()
            .with_exceptions(|error: &NumberError| matches!(error, NumberError::Malformed))
            .wrap(|input: &&str, _: &Kwargs| match *input {
                "zero" => Ok(0),
                "one" => Ok(1),
                "ten" => Err(NumberError::Unknown),
                _ => Err(NumberError::Malformed),
            })
    }

    #[test]
    fn filter_swallows_listed_errors_only() {
        let wrapped = force_int();
        assert_eq!(wrapped.invoke("one"), Ok(1));
        assert_eq!(wrapped.invoke("foo"), Ok(0));
        // not in the allow-set: the original error comes back unchanged
        assert_eq!(wrapped.invoke("ten"), Err(NumberError::Unknown));
    }

    #[test]
    fn custom_switch_controls_tolerance() {
        let wrapped = ToleranceConfig::<&str, i32, ParseIntError>::new()
            .with_switch(SwitchSpec::custom(|args, kwargs| SwitchDecision {
                enabled: false,
                args,
                kwargs,
            }))
            .wrap(|input, _| input.parse::<i32>());
        assert!(wrapped.invoke("nope").is_err());
    }

    #[test]
    fn named_switch_spec_uses_defaults() {
        let wrapped = ToleranceConfig::<&str, i32, ParseIntError>::new()
            .with_switch("patient")
            .wrap(|input, _| input.parse::<i32>());
        assert_eq!(wrapped.invoke("nope"), Ok(0));
        assert!(
            wrapped
                .call("nope", Kwargs::new().arg("patient", false))
                .is_err()
        );
        // the default switch was replaced, fail_silently is inert now
        assert_eq!(
            wrapped.call("nope", Kwargs::new().arg("fail_silently", false)),
            Ok(0)
        );
    }

    #[test]
    fn reversed_switch_spec() {
        let wrapped = ToleranceConfig::<&str, i32, ParseIntError>::new()
            .with_switch(SwitchOptions::named("aggressive").reversed())
            .wrap(|input, _| input.parse::<i32>());
        assert_eq!(wrapped.invoke("nope"), Ok(0));
        assert_eq!(
            wrapped.call("nope", Kwargs::new().arg("aggressive", false)),
            Ok(0)
        );
        assert!(
            wrapped
                .call("nope", Kwargs::new().arg("aggressive", true))
                .is_err()
        );
    }

    #[test]
    fn without_switch_tolerance_is_always_active() {
        let wrapped = ToleranceConfig::<&str, i32, ParseIntError>::new()
            .without_switch()
            .wrap(|input, _| input.parse::<i32>());
        assert_eq!(
            wrapped.call("nope", Kwargs::new().arg("fail_silently", false)),
            Ok(0)
        );
    }

    #[test]
    fn kept_argument_reaches_the_target() {
        let wrapped = ToleranceConfig::<(), i32, NumberError>::new()
            .with_switch(SwitchOptions::named(FAIL_SILENTLY).keep_argument())
            .wrap(|_, kwargs| {
                assert!(kwargs.contains(FAIL_SILENTLY));
                Ok(7)
            });
        assert_eq!(
            wrapped.call((), Kwargs::new().arg(FAIL_SILENTLY, true)),
            Ok(7)
        );
    }

    #[test]
    fn on_tolerated_hook_fires_for_swallowed_errors_only() {
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        let wrapped = tolerate()
            .with_exceptions(|error: &NumberError| matches!(error, NumberError::Malformed))
            .on_tolerated(move |_| counter.set(counter.get() + 1))
            .wrap(|input: &&str, _: &Kwargs| match *input {
                "one" => Ok(1),
                "ten" => Err(NumberError::Unknown),
                _ => Err(NumberError::Malformed),
            });
        let _ = wrapped.invoke("one");
        let _ = wrapped.invoke("ten");
        assert_eq!(seen.get(), 0);
        let _ = wrapped.invoke("foo");
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let wrapped = force_int();
        for _ in 0..3 {
            assert_eq!(wrapped.invoke("foo"), Ok(0));
            assert_eq!(wrapped.invoke("ten"), Err(NumberError::Unknown));
        }
    }

    #[cfg(feature = "anyhow")]
    #[test]
    fn anyhow_filter_matches_by_downcast() {
        let wrapped = ToleranceConfig::<&str, i32, anyhow::Error>::new()
            .with_filter(ErrorFilter::of_kind::<ParseIntError>())
            .wrap(|input, _| Ok(input.parse::<i32>()?));
        assert_eq!(wrapped.invoke("nope").unwrap(), 0);

        let wrapped = ToleranceConfig::<&str, i32, anyhow::Error>::new()
            .with_filter(ErrorFilter::of_kind::<std::io::Error>())
            .wrap(|input, _| Ok(input.parse::<i32>()?));
        assert!(wrapped.invoke("nope").is_err());
    }
}
