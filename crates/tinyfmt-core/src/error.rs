//! Error taxonomy and the process-wide error reporting hook.
//!
//! Every failure detected while parsing or dispatching a format string is
//! funneled through [`report`], which invokes the installed hook (if any),
//! applies the active [`ErrorPolicy`], and hands the error back for `?`
//! propagation. The formatting engine never recovers on its own.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use thiserror::Error;

/// Failures raised by the format engine.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A directive slot was reached but the cursor was not at `%`.
    #[error("not enough conversion specifiers in format string")]
    NotEnoughConversionSpecifiers,
    /// `%a`, `%A` and `%n` are rejected.
    #[error("the %{conversion} conversion spec is not supported")]
    UnsupportedConversion { conversion: char },
    /// Any other character in conversion position.
    #[error("unknown conversion spec %{conversion}")]
    UnknownConversion { conversion: char },
    /// The format string ended inside a directive.
    #[error("conversion spec incorrectly terminated by end of string")]
    UnterminatedDirective,
    /// `*` width with no argument left.
    #[error("not enough arguments to read variable width")]
    MissingVariableWidth,
    /// `.*` precision with no argument left.
    #[error("not enough arguments to read variable precision")]
    MissingVariablePrecision,
    /// The argument index ran past the supplied arguments.
    #[error("not enough format arguments")]
    NotEnoughFormatArguments,
    /// Trailing literal text still holds an unconsumed directive.
    #[error("too many conversion specifiers in format string")]
    TooManyConversionSpecifiers,
    /// Requested width exceeds [`MAX_WIDTH`](crate::config::MAX_WIDTH).
    #[error("width {requested} exceeds the maximum of {max}")]
    WidthTooLarge { requested: usize, max: usize },
    /// Requested precision exceeds [`MAX_PRECISION`](crate::config::MAX_PRECISION).
    #[error("precision {requested} exceeds the maximum of {max}")]
    PrecisionTooLarge { requested: usize, max: usize },
    /// A `*` width/precision consumed an argument that is not integral.
    #[error("cannot convert from argument type {type_name} to integer for use as variable width or precision")]
    NotAnInteger { type_name: &'static str },
    /// The sink refused a write.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    /// Stable short identifier, used by fixtures and structured logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotEnoughConversionSpecifiers => "not_enough_conversion_specifiers",
            Self::UnsupportedConversion { .. } => "unsupported_conversion",
            Self::UnknownConversion { .. } => "unknown_conversion",
            Self::UnterminatedDirective => "unterminated_directive",
            Self::MissingVariableWidth => "missing_variable_width",
            Self::MissingVariablePrecision => "missing_variable_precision",
            Self::NotEnoughFormatArguments => "not_enough_format_arguments",
            Self::TooManyConversionSpecifiers => "too_many_conversion_specifiers",
            Self::WidthTooLarge { .. } => "width_too_large",
            Self::PrecisionTooLarge { .. } => "precision_too_large",
            Self::NotAnInteger { .. } => "not_an_integer",
            Self::Io(_) => "io",
        }
    }
}

/// What [`report`] does after the hook has seen an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return the error to the caller.
    #[default]
    Propagate,
    /// Panic with the error message (assert-style builds).
    Panic,
}

/// Callback invoked for every reported error.
pub type ErrorHook = Arc<dyn Fn(&FormatError) + Send + Sync>;

#[derive(Default)]
struct Reporting {
    policy: ErrorPolicy,
    hook: Option<ErrorHook>,
}

fn reporting() -> &'static RwLock<Reporting> {
    static REPORTING: OnceLock<RwLock<Reporting>> = OnceLock::new();
    REPORTING.get_or_init(|| RwLock::new(Reporting::default()))
}

/// Install a hook observing every reported error, replacing any previous one.
pub fn set_error_hook<F>(hook: F)
where
    F: Fn(&FormatError) + Send + Sync + 'static,
{
    reporting().write().hook = Some(Arc::new(hook));
}

/// Remove the installed hook.
pub fn clear_error_hook() {
    reporting().write().hook = None;
}

/// Select the reporting policy for the whole process.
pub fn set_error_policy(policy: ErrorPolicy) {
    reporting().write().policy = policy;
}

/// Currently active policy.
#[must_use]
pub fn error_policy() -> ErrorPolicy {
    reporting().read().policy
}

/// Route an error through the hook and policy, returning it for propagation.
///
/// # Panics
///
/// Panics when the active policy is [`ErrorPolicy::Panic`].
pub fn report(err: FormatError) -> FormatError {
    // The hook runs unlocked: it may format or replace itself.
    let (hook, policy) = {
        let reporting = reporting().read();
        (reporting.hook.clone(), reporting.policy)
    };
    if let Some(hook) = hook {
        hook(&err);
    }
    if policy == ErrorPolicy::Panic {
        panic!("tinyfmt: {err}");
    }
    err
}
