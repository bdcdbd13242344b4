use crate::kwargs::Kwargs;

/// Name of the keyword argument the default switch inspects.
pub const FAIL_SILENTLY: &str = "fail_silently";

/// The result of evaluating a switch for one call: whether tolerance is
/// enabled, plus the arguments to forward to the wrapped function.
///
/// Positional arguments are always returned unchanged; the keyword mapping
/// may have had the switch's own control key removed.
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchDecision<A> {
    pub enabled: bool,
    pub args: A,
    pub kwargs: Kwargs,
}

/// Configuration for an argument switch.
///
/// `new()` builds the absent-name form: no keyword is inspected and every
/// call resolves to `default`. `named(...)` inspects a keyword argument.
#[derive(Clone, Debug)]
pub struct SwitchOptions {
    argument_name: Option<String>,
    default: bool,
    reverse: bool,
    keep: bool,
}

impl Default for SwitchOptions {
    fn default() -> Self {
        Self {
            argument_name: None,
            default: true,
            reverse: false,
            keep: false,
        }
    }
}

impl SwitchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(argument_name: impl Into<String>) -> Self {
        Self {
            argument_name: Some(argument_name.into()),
            ..Self::default()
        }
    }

    /// Status used when the argument is absent from the kwargs.
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    /// Invert the status of a supplied argument. The default is never
    /// inverted, only a value the caller actually passed.
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Leave the control argument in the kwargs instead of removing it.
    pub fn keep_argument(mut self) -> Self {
        self.keep = true;
        self
    }
}

impl From<&str> for SwitchOptions {
    fn from(argument_name: &str) -> Self {
        SwitchOptions::named(argument_name)
    }
}

impl From<String> for SwitchOptions {
    fn from(argument_name: String) -> Self {
        SwitchOptions::named(argument_name)
    }
}

/// The canonical boxed switch form stored in a tolerance config.
pub type SwitchFn<A> = Box<dyn Fn(A, Kwargs) -> SwitchDecision<A>>;

/// Create a switch function that reads its status from a named keyword
/// argument.
///
/// The switch only ever inspects and mutates keyword arguments; positional
/// arguments pass through untouched.
///
/// ```rust
/// use tolerance_core::{argument_switch, Kwargs, SwitchOptions};
///
/// let switch = argument_switch("fail_silently");
/// let decision = switch((), Kwargs::new());
/// assert!(decision.enabled);
///
/// let decision = switch((), Kwargs::new().arg("fail_silently", false));
/// assert!(!decision.enabled);
/// // the control key is removed before the kwargs are forwarded
/// assert!(!decision.kwargs.contains("fail_silently"));
///
/// let switch = argument_switch(SwitchOptions::named("aggressive").reversed());
/// let decision = switch((), Kwargs::new().arg("aggressive", true));
/// assert!(!decision.enabled);
/// ```
pub fn argument_switch<A>(
    options: impl Into<SwitchOptions>,
) -> impl Fn(A, Kwargs) -> SwitchDecision<A> {
    let options = options.into();
    move |args: A, mut kwargs: Kwargs| {
        let enabled = match options.argument_name.as_deref() {
            Some(name) if kwargs.contains(name) => {
                let raw = if options.keep {
                    kwargs.get(name).cloned()
                } else {
                    kwargs.remove(name)
                };
                let status = raw.map_or(options.default, |value| value.truthy());
                if options.reverse { !status } else { status }
            }
            _ => options.default,
        };
        SwitchDecision {
            enabled,
            args,
            kwargs,
        }
    }
}

/// How a tolerance config obtains its switch, resolved once at wrap time
/// into the canonical [`SwitchFn`] form.
pub enum SwitchSpec<A> {
    /// Build an argument switch from options (or a bare argument name).
    Argument(SwitchOptions),
    /// Use a caller-supplied switch function as-is.
    Custom(SwitchFn<A>),
}

impl<A: 'static> SwitchSpec<A> {
    pub fn custom<F>(switch: F) -> Self
    where
        F: Fn(A, Kwargs) -> SwitchDecision<A> + 'static,
    {
        SwitchSpec::Custom(Box::new(switch))
    }

    pub(crate) fn resolve(self) -> SwitchFn<A> {
        match self {
            SwitchSpec::Argument(options) => Box::new(argument_switch(options)),
            SwitchSpec::Custom(switch) => switch,
        }
    }
}

impl<A> From<&str> for SwitchSpec<A> {
    fn from(argument_name: &str) -> Self {
        SwitchSpec::Argument(SwitchOptions::named(argument_name))
    }
}

impl<A> From<String> for SwitchSpec<A> {
    fn from(argument_name: String) -> Self {
        SwitchSpec::Argument(SwitchOptions::named(argument_name))
    }
}

impl<A> From<SwitchOptions> for SwitchSpec<A> {
    fn from(options: SwitchOptions) -> Self {
        SwitchSpec::Argument(options)
    }
}
