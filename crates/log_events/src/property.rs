use std::fmt;

/// Substituted for property names that fail [`is_valid_property_name`].
pub const UNNAMED_PROPERTY: &str = "UnnamedProperty";

/// Whether `name` may be attached to an event verbatim: non-empty and not
/// whitespace-only.
pub fn is_valid_property_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// One cached rendering of a template placeholder reference.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rendering {
    /// The placeholder text exactly as it appeared in the template.
    pub placeholder: String,
    /// Format the text was rendered with; empty when the rendering was
    /// reconstructed from raw property values.
    pub format: String,
    pub rendered: String,
}

/// One primitive value.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => f.write_str("null"),
            ScalarValue::Bool(value) => write!(f, "{value}"),
            ScalarValue::Int(value) => write!(f, "{value}"),
            ScalarValue::Uint(value) => write!(f, "{value}"),
            ScalarValue::Float(value) => write!(f, "{value}"),
            ScalarValue::String(value) => f.write_str(value),
        }
    }
}

/// A named property of an event or of a structured value.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The value of a single property.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// A primitive, optionally carrying cached per-format renderings.
    Scalar {
        value: ScalarValue,
        renderings: Vec<Rendering>,
    },
    /// Ordered named sub-properties plus an optional type tag. Duplicate
    /// sub-property names are preserved as-is.
    Structured {
        type_tag: Option<String>,
        properties: Vec<Property>,
    },
    /// Ordered, heterogeneous elements.
    Sequence { elements: Vec<PropertyValue> },
}

impl PropertyValue {
    /// A scalar with no cached renderings.
    pub fn scalar(value: ScalarValue) -> Self {
        PropertyValue::Scalar {
            value,
            renderings: Vec::new(),
        }
    }

    /// Renders the value as display text.
    ///
    /// A scalar asked for a format that matches a cached [`Rendering`]
    /// replays the cached text verbatim; every other case falls through to
    /// default formatting of the underlying value.
    pub fn render(&self, format: Option<&str>) -> String {
        if let (PropertyValue::Scalar { renderings, .. }, Some(format)) = (self, format) {
            if let Some(cached) = renderings.iter().find(|r| r.format == format) {
                return cached.rendered.clone();
            }
        }
        self.to_string()
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Scalar { value, .. } => value.fmt(f),
            PropertyValue::Structured {
                type_tag,
                properties,
            } => {
                if let Some(tag) = type_tag {
                    write!(f, "{tag} ")?;
                }
                f.write_str("{")?;
                for (i, property) in properties.iter().enumerate() {
                    f.write_str(if i == 0 { " " } else { ", " })?;
                    write!(f, "{}: {}", property.name, property.value)?;
                }
                f.write_str(" }")
            }
            PropertyValue::Sequence { elements } => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    element.fmt(f)?;
                }
                f.write_str("]")
            }
        }
    }
}
