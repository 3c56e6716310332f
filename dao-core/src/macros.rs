/// Build the parameters of a statement from a list of values.
///
/// Expands to an `Option<Parameters>` suitable for the `execute` and `query` functions. Without arguments it expands
/// to `None`, i.e. a statement without parameters.
#[macro_export]
macro_rules! params {
    () => {
        Option::<$crate::parameters::Parameters>::None
    };
    ($($param:expr),+ $(,)?) => {
        Some($crate::parameters::Parameters::Positional(vec![$($crate::values::Value::from($param)),+]))
    };
}
