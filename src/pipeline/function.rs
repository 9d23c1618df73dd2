/// A unary function that may be applied to a parenthesized group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// Sine, in radians.
    Sin,
    /// Cosine, in radians.
    Cos,
    /// Tangent, in radians.
    Tan,
    /// Square root.
    Sqrt,
}

/// Defines the recognized function names by generating a lookup table and a
/// name list.
///
/// Each entry maps a spelling to the [`Function`] it denotes, so aliases are
/// simply additional entries.
macro_rules! function_names {
    (
        $(
            $name:literal => $function:expr
        ),* $(,)?
    ) => {
        static FUNCTION_TABLE: &[(&str, Function)] = &[
            $(
                ($name, $function),
            )*
        ];
        /// Every accepted function spelling, aliases included.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

function_names! {
    "sin"  => Function::Sin,
    "sen"  => Function::Sin,
    "cos"  => Function::Cos,
    "tan"  => Function::Tan,
    "sqrt" => Function::Sqrt,
    "raiz" => Function::Sqrt,
}

impl Function {
    /// Looks up a function by any of its spellings.
    ///
    /// # Example
    /// ```
    /// use infixtree::pipeline::function::Function;
    ///
    /// assert_eq!(Function::from_name("raiz"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("log"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTION_TABLE.iter()
                      .find(|(spelling, _)| *spelling == name)
                      .map(|&(_, function)| function)
    }

    /// Applies the function to `x`. Negative square roots yield `NaN`.
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Sqrt => x.sqrt(),
        }
    }
}
