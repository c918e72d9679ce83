use smallvec::SmallVec;
use std::{fmt, rc::Rc};

/// A concrete value bound to one parameter of an action.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamValue {
    Int(i64),
    Label(Rc<str>),
}

impl ParamValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(value) => Some(*value),
            ParamValue::Label(_) => None,
        }
    }

    /// The value as an index, i.e. a non-negative integer.
    pub fn as_index(&self) -> Option<usize> {
        self.as_int().and_then(|value| usize::try_from(value).ok())
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            ParamValue::Int(_) => None,
            ParamValue::Label(label) => Some(&**label),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Label(value.into())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Label(value.into())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(value) => write!(f, "{}", value),
            ParamValue::Label(label) => write!(f, "{}", label),
        }
    }
}

pub type ParamTuple = SmallVec<[ParamValue; 4]>;

/// Action struct that represents an instantiated action schema: the schema
/// name together with the concrete parameters it was called with. Only used
/// for reporting paths, the search never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    name: Rc<str>,
    params: ParamTuple,
}

impl Action {
    pub fn new(name: Rc<str>, params: ParamTuple) -> Self {
        Self { name, params }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[ParamValue] {
        &self.params
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        write!(f, "{}({})", self.name, params.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn display_lists_parameters() {
        let action = Action::new("move_kiwi".into(), smallvec![ParamValue::Int(0), "A".into()]);
        assert_eq!(action.to_string(), "move_kiwi(0, A)");
        assert_eq!(action.name(), "move_kiwi");
    }

    #[test]
    fn index_rejects_negative_and_labels() {
        assert_eq!(ParamValue::Int(3).as_index(), Some(3));
        assert_eq!(ParamValue::Int(-1).as_index(), None);
        assert_eq!(ParamValue::from("B").as_index(), None);
        assert_eq!(ParamValue::from("B").as_label(), Some("B"));
    }
}
