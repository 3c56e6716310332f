use crate::values::Value;

/// The parameters bound to a statement.
///
/// Parameters are positional: the n-th parameter substitutes the n-th `?` placeholder of the statement.
#[derive(Debug, PartialEq)]
pub enum Parameters {
    None,
    Positional(Vec<Value>),
}

impl Parameters {
    pub fn from_slice(values: &[Value]) -> Self {
        if values.is_empty() {
            Parameters::None
        } else {
            Parameters::Positional(values.to_vec())
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Parameters::None => 0,
            Parameters::Positional(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.as_slice().get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.as_slice().iter()
    }

    fn as_slice(&self) -> &[Value] {
        match self {
            Parameters::None => &[],
            Parameters::Positional(values) => values,
        }
    }
}

impl From<Vec<Value>> for Parameters {
    fn from(values: Vec<Value>) -> Self {
        if values.is_empty() {
            Parameters::None
        } else {
            Parameters::Positional(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn test_parameters() {
        let parameters = Parameters::from_slice(&[Value::from(1i64), Value::from("hello"), Value::Null]);
        assert_eq!(parameters.len(), 3);
        assert!(!parameters.is_empty());
        assert_eq!(parameters.get(0), Some(&Value::Int64(1)));
        assert_eq!(parameters.get(1), Some(&Value::String("hello".to_string())));
        assert_eq!(parameters.get(2), Some(&Value::Null));
        assert_eq!(parameters.get(3), None);
        assert_eq!(parameters.iter().count(), 3);

        assert!(Parameters::from_slice(&[]).is_empty());
        assert_eq!(Parameters::None.len(), 0);
        assert_eq!(Parameters::None.get(0), None);
        assert_eq!(Parameters::None.iter().count(), 0);
    }

    #[test]
    fn test_params_macro() {
        assert_eq!(params!(), None);
        let parameters = params!(1i64, "hello", 1.5f64).unwrap();
        assert_eq!(parameters.len(), 3);
        assert_eq!(parameters.get(0), Some(&Value::Int64(1)));
        assert_eq!(parameters.get(1), Some(&Value::String("hello".to_string())));
        assert_eq!(parameters.get(2), Some(&Value::Float64(1.5)));
    }
}
