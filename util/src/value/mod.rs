use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of type tags a candidate value can carry.
///
/// Booleans are a distinct tag: a `Boolean` is never classified as an
/// `Integer` here, even though the notebooks' host language conflates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Integer,
    Float,
    Boolean,
    Text,
    Sequence,
    Tuple,
    Array,
    Table,
    Crs,
    Plot,
}

impl TypeTag {
    /// Article-form noun used in feedback lines ("is an integer, good job!").
    pub fn article_name(&self) -> &'static str {
        match self {
            TypeTag::Integer => "an integer",
            TypeTag::Float => "a float",
            TypeTag::Boolean => "a boolean",
            TypeTag::Text => "a string",
            TypeTag::Sequence => "a list",
            TypeTag::Tuple => "a tuple",
            TypeTag::Array => "an array",
            TypeTag::Table => "a geospatial table",
            TypeTag::Crs => "a CRS object",
            TypeTag::Plot => "a plot",
        }
    }

    /// Bare noun used when talking about element types ("float values").
    pub fn noun(&self) -> &'static str {
        match self {
            TypeTag::Integer => "integer",
            TypeTag::Float => "float",
            TypeTag::Boolean => "boolean",
            TypeTag::Text => "string",
            TypeTag::Sequence => "list",
            TypeTag::Tuple => "tuple",
            TypeTag::Array => "array",
            TypeTag::Table => "geospatial table",
            TypeTag::Crs => "CRS object",
            TypeTag::Plot => "plot",
        }
    }
}

/// Summary of a geospatial table candidate. The producing library is opaque;
/// only the structural properties asserted by lessons are carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableInfo {
    pub rows: usize,
}

/// Summary of a coordinate reference system candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrsInfo {
    pub name: String,
}

/// Summary of a plot axis candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotInfo {
    pub kind: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

/// A candidate value as resolved by the caller. The caller owns name
/// resolution; an absent variable is simply never registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
    Sequence(Vec<Value>),
    Tuple(Vec<Value>),
    Array(Vec<f64>),
    Table(TableInfo),
    Crs(CrsInfo),
    Plot(PlotInfo),
}

impl Value {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Integer(_) => TypeTag::Integer,
            Value::Float(_) => TypeTag::Float,
            Value::Boolean(_) => TypeTag::Boolean,
            Value::Text(_) => TypeTag::Text,
            Value::Sequence(_) => TypeTag::Sequence,
            Value::Tuple(_) => TypeTag::Tuple,
            Value::Array(_) => TypeTag::Array,
            Value::Table(_) => TypeTag::Table,
            Value::Crs(_) => TypeTag::Crs,
            Value::Plot(_) => TypeTag::Plot,
        }
    }

    /// Article-form noun for this value's type.
    pub fn type_name(&self) -> &'static str {
        self.type_tag().article_name()
    }

    /// Whether this value counts as `tag`.
    ///
    /// With `strict_booleans` a boolean never counts as an integer; without
    /// it the host-language classification (`True` is an integer) applies.
    pub fn matches_tag(&self, tag: TypeTag, strict_booleans: bool) -> bool {
        match (self, tag) {
            (Value::Boolean(_), TypeTag::Integer) => !strict_booleans,
            _ => self.type_tag() == tag,
        }
    }

    /// Equality with integer/float coercion, applied element-wise through
    /// sequences and tuples. `Integer(1)` equals `Float(1.0)`; booleans only
    /// equal booleans.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Float(b)) | (Value::Float(b), Value::Integer(a)) => {
                *a as f64 == *b
            }
            (Value::Sequence(a), Value::Sequence(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loosely_equals(y))
            }
            _ => self == other,
        }
    }

    /// Element rendering inside containers: text is quoted so
    /// `[1, 20.23, "inches"]` reads unambiguously.
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "\"{s}\""),
            other => write!(f, "{other}"),
        }
    }

    fn fmt_elements(values: &[Value], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            v.fmt_element(f)?;
        }
        Ok(())
    }
}

/// Floats always render with a decimal point so `46.0` cannot be mistaken
/// for the integer `46` in feedback messages.
fn float_repr(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 {
        format!("{x:.1}")
    } else {
        x.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{}", float_repr(*x)),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Sequence(values) => {
                write!(f, "[")?;
                Value::fmt_elements(values, f)?;
                write!(f, "]")
            }
            Value::Tuple(values) => {
                write!(f, "(")?;
                Value::fmt_elements(values, f)?;
                write!(f, ")")
            }
            Value::Array(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", float_repr(*v))?;
                }
                write!(f, "]")
            }
            Value::Table(info) => write!(f, "a geospatial table with {} rows", info.rows),
            Value::Crs(info) => write!(f, "{}", info.name),
            Value::Plot(info) => write!(f, "a {} plot", info.kind),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Sequence(values)
    }
}
