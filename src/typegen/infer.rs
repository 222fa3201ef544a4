//! Structural type inference over JSON values
//!
//! A [`Shape`] is the language-neutral schema inferred from a JSON value.
//! Array elements are unified pairwise; object shapes merge field-by-field,
//! marking fields optional when they are missing from some occurrences or
//! null in some of them.

use indexmap::IndexMap;
use serde_json::Value;

/// Inferred schema of a JSON value
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Null,
    Bool,
    Int,
    Int64,
    Float,
    String,
    /// Irreconcilable union, rendered as the target's dynamic type
    Any,
    Array(Box<Shape>),
    Object(IndexMap<String, Field>),
}

/// A named object field and whether it may be absent or null
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub shape: Shape,
    pub optional: bool,
}

/// Infer the shape of a single JSON value.
pub fn shape_of(value: &Value) -> Shape {
    match value {
        Value::Null => Shape::Null,
        Value::Bool(_) => Shape::Bool,
        Value::Number(n) => {
            if n.is_f64() {
                Shape::Float
            } else if let Some(i) = n.as_i64() {
                if i > i32::MAX as i64 || i < i32::MIN as i64 {
                    Shape::Int64
                } else {
                    Shape::Int
                }
            } else {
                // u64 beyond i64 range
                Shape::Int64
            }
        }
        Value::String(_) => Shape::String,
        Value::Array(items) => {
            let mut element: Option<Shape> = None;
            for item in items {
                let shape = shape_of(item);
                element = Some(match element {
                    None => shape,
                    Some(prev) => unify(prev, shape),
                });
            }
            Shape::Array(Box::new(element.unwrap_or(Shape::Any)))
        }
        Value::Object(map) => {
            let mut fields = IndexMap::new();
            for (key, value) in map {
                fields.insert(
                    key.clone(),
                    Field {
                        shape: shape_of(value),
                        optional: false,
                    },
                );
            }
            Shape::Object(fields)
        }
    }
}

/// Unify two shapes into the narrowest shape describing both.
pub fn unify(a: Shape, b: Shape) -> Shape {
    use Shape::*;
    match (a, b) {
        (Null, other) | (other, Null) => other,
        (Any, _) | (_, Any) => Any,
        (Bool, Bool) => Bool,
        (String, String) => String,
        (Int, Int) => Int,
        (Int, Int64) | (Int64, Int) | (Int64, Int64) => Int64,
        (Float, other) | (other, Float) if matches!(other, Int | Int64 | Float) => Float,
        (Array(x), Array(y)) => Array(Box::new(unify(*x, *y))),
        (Object(x), Object(y)) => Object(merge_fields(x, y)),
        _ => Any,
    }
}

fn merge_fields(
    mut merged: IndexMap<String, Field>,
    other: IndexMap<String, Field>,
) -> IndexMap<String, Field> {
    for (name, field) in merged.iter_mut() {
        if !other.contains_key(name) {
            field.optional = true;
        }
    }
    for (name, theirs) in other {
        match merged.get_mut(&name) {
            Some(ours) => {
                // Null on one side only means the field is nullable
                let saw_null = matches!(ours.shape, Shape::Null) != matches!(theirs.shape, Shape::Null);
                let prev = std::mem::replace(&mut ours.shape, Shape::Null);
                ours.shape = unify(prev, theirs.shape);
                ours.optional = ours.optional || theirs.optional || saw_null;
            }
            None => {
                merged.insert(
                    name,
                    Field {
                        shape: theirs.shape,
                        optional: true,
                    },
                );
            }
        }
    }
    merged
}

/// Split an arbitrary JSON key into identifier words, breaking on
/// punctuation and lower-to-upper camelCase transitions.
pub(crate) fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if c.is_uppercase() && prev_lower && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = c.is_lowercase() || c.is_numeric();
            current.push(c);
        } else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(shape: Shape, optional: bool) -> Field {
        Field { shape, optional }
    }

    #[test]
    fn test_scalar_shapes() {
        assert_eq!(shape_of(&json!(null)), Shape::Null);
        assert_eq!(shape_of(&json!(true)), Shape::Bool);
        assert_eq!(shape_of(&json!(7)), Shape::Int);
        assert_eq!(shape_of(&json!(5_000_000_000_i64)), Shape::Int64);
        assert_eq!(shape_of(&json!(1.5)), Shape::Float);
        assert_eq!(shape_of(&json!("x")), Shape::String);
    }

    #[test]
    fn test_numeric_unification() {
        assert_eq!(unify(Shape::Int, Shape::Int64), Shape::Int64);
        assert_eq!(unify(Shape::Int, Shape::Float), Shape::Float);
        assert_eq!(unify(Shape::Int64, Shape::Float), Shape::Float);
    }

    #[test]
    fn test_null_unifies_to_other_side() {
        assert_eq!(unify(Shape::Null, Shape::String), Shape::String);
        assert_eq!(unify(Shape::Null, Shape::Null), Shape::Null);
    }

    #[test]
    fn test_conflicting_shapes_become_any() {
        assert_eq!(unify(Shape::Bool, Shape::String), Shape::Any);
    }

    #[test]
    fn test_array_element_unification() {
        assert_eq!(
            shape_of(&json!([1, 2.5])),
            Shape::Array(Box::new(Shape::Float))
        );
        assert_eq!(
            shape_of(&json!([1, "x"])),
            Shape::Array(Box::new(Shape::Any))
        );
        assert_eq!(shape_of(&json!([])), Shape::Array(Box::new(Shape::Any)));
    }

    #[test]
    fn test_object_merge_marks_missing_fields_optional() {
        let shape = shape_of(&json!([{"a": 1, "b": "x"}, {"a": 2}]));
        let Shape::Array(element) = shape else {
            panic!("expected array shape");
        };
        let Shape::Object(fields) = *element else {
            panic!("expected object element");
        };
        assert_eq!(fields["a"], field(Shape::Int, false));
        assert_eq!(fields["b"], field(Shape::String, true));
    }

    #[test]
    fn test_object_merge_marks_null_fields_optional() {
        let shape = shape_of(&json!([{"a": 1}, {"a": null}]));
        let Shape::Array(element) = shape else {
            panic!("expected array shape");
        };
        let Shape::Object(fields) = *element else {
            panic!("expected object element");
        };
        assert_eq!(fields["a"], field(Shape::Int, true));
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("user_name"), vec!["user", "name"]);
        assert_eq!(split_words("userName"), vec!["user", "Name"]);
        assert_eq!(split_words("URL"), vec!["URL"]);
        assert_eq!(split_words("x-api-key"), vec!["x", "api", "key"]);
        assert!(split_words("---").is_empty());
    }
}
