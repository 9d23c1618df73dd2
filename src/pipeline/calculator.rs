use crate::{config::Config, error::ParseError, pipeline::function::Function};

/// Result type used by the converter and the builder.
pub type ParseResult<T> = Result<T, ParseError>;

/// Runs the conversion, building and evaluation stages under one
/// configuration.
///
/// ## Usage
///
/// A `Calculator` holds no state besides its [`Config`], so one instance can
/// process any number of expressions:
///
/// ```
/// use infixtree::{
///     config::{Config, NumericMode},
///     pipeline::{calculator::Calculator, value::Number},
/// };
///
/// let calculator = Calculator::new(Config::new(NumericMode::Integer));
///
/// let postfix = calculator.convert("7 / 2").unwrap();
/// let tree = calculator.build(&postfix).unwrap();
/// assert_eq!(calculator.evaluate(&tree).unwrap(), Number::Integer(3));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator {
    config: Config,
}

impl Calculator {
    /// Creates a calculator for the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves an identifier token to a function, enforcing the numeric
    /// mode.
    ///
    /// # Errors
    /// - `FunctionsDisabled` for any identifier in integer mode.
    /// - `UnknownFunction` for identifiers outside the fixed function set.
    pub(crate) fn resolve_function(&self, name: &str, position: usize) -> ParseResult<Function> {
        if !self.config.functions_enabled() {
            return Err(ParseError::FunctionsDisabled { name: name.to_string(),
                                                       position });
        }

        Function::from_name(name).ok_or_else(|| ParseError::UnknownFunction { name: name.to_string(),
                                                                                position })
    }
}
