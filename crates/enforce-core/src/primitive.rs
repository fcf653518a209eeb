//! Primitive type predicates.
//!
//! Every predicate is total: it accepts any [`Value`] and answers with a
//! boolean. `Object` and `Array` never overlap.

use crate::value::{ClassRef, Value};

/// Primitive value kinds recognised by type clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Parameter not supplied.
    Void,
    /// Explicit null.
    Null,
    /// String values.
    String,
    /// Numeric values.
    Number,
    /// Boolean values.
    Boolean,
    /// Arrays.
    Array,
    /// Plain key-value records (never arrays).
    Object,
    /// Callables.
    Function,
}

impl Primitive {
    /// Every primitive kind.
    pub const ALL: [Self; 8] = [
        Self::Void,
        Self::Null,
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Array,
        Self::Object,
        Self::Function,
    ];

    /// Tests whether `value` is of this kind.
    #[must_use]
    pub fn test(self, value: &Value) -> bool {
        match self {
            Self::Void => matches!(value, Value::Void),
            Self::Null => matches!(value, Value::Null),
            Self::String => matches!(value, Value::String(_)),
            Self::Number => matches!(value, Value::Number(_)),
            Self::Boolean => matches!(value, Value::Boolean(_)),
            Self::Array => matches!(value, Value::Array(_)),
            Self::Object => matches!(value, Value::Object(_)),
            Self::Function => matches!(value, Value::Function(_)),
        }
    }

    /// Returns the lowercase noun used in rule phrases.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Null => "null",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Function => "function",
        }
    }
}

/// Tests whether `value` is an instance of `class`.
#[must_use]
pub fn is_instance_of(value: &Value, class: ClassRef) -> bool {
    matches!(value, Value::Instance(inst) if inst.class() == class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct Post;
    struct Comment;

    fn samples() -> Vec<Value> {
        vec![
            Value::Void,
            Value::Null,
            Value::from("s"),
            Value::from(1),
            Value::from(true),
            Value::Array(vec![]),
            Value::Object(BTreeMap::new()),
            Value::function("f", |_| Value::Null),
        ]
    }

    #[test]
    fn each_sample_has_exactly_one_kind() {
        for (i, value) in samples().iter().enumerate() {
            let kinds: Vec<Primitive> = Primitive::ALL
                .into_iter()
                .filter(|p| p.test(value))
                .collect();
            assert_eq!(kinds, vec![Primitive::ALL[i]], "value {value}");
        }
    }

    #[test]
    fn array_is_not_object() {
        let array = Value::from(vec![1, 2]);
        assert!(Primitive::Array.test(&array));
        assert!(!Primitive::Object.test(&array));
    }

    #[test]
    fn instances_are_not_objects() {
        let post = Value::instance(Post);
        assert!(!Primitive::Object.test(&post));
        assert!(is_instance_of(&post, ClassRef::of::<Post>()));
        assert!(!is_instance_of(&post, ClassRef::of::<Comment>()));
        assert!(!is_instance_of(&Value::Null, ClassRef::of::<Post>()));
    }
}
