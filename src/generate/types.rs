//! Maps OData type descriptors onto target-language expressions.
//!
//! A descriptor is classified once into a [`PropertyType`] (a scalar kind
//! plus a collection flag) and each backend renders that shape. Adding a
//! target language means adding rendering functions, not another copy of
//! the classification rules.

/// Scalar categories the generator distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Identifier,
    DateTime,
    DateOnly,
    Text,
    Integer,
    Number,
    Boolean,
    Unknown,
}

impl ScalarKind {
    /// Classify a scalar descriptor, first match wins.
    ///
    /// Guid/DateTime/Date match by containment: Business Central embeds
    /// them as type-name substrings (`Edm.DateTimeOffset`) rather than as
    /// distinct primitives. DateTime must be tried before Date.
    pub fn classify(descriptor: &str) -> Self {
        match descriptor {
            d if d.contains("Guid") => Self::Identifier,
            d if d.contains("DateTime") => Self::DateTime,
            d if d.contains("Date") => Self::DateOnly,
            "Edm.String" => Self::Text,
            "Edm.Int32" | "Edm.Int64" => Self::Integer,
            "Edm.Decimal" | "Edm.Double" => Self::Number,
            "Edm.Boolean" => Self::Boolean,
            _ => Self::Unknown,
        }
    }
}

/// A parsed property type: scalar kind plus collection wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyType {
    pub scalar: ScalarKind,
    pub is_collection: bool,
}

impl PropertyType {
    /// Parse an OData descriptor such as `Edm.String` or
    /// `Collection(Edm.String)`.
    ///
    /// Scalar classification runs on the raw descriptor before the
    /// collection wrapper is considered, so a substring marker wins even
    /// inside a wrapper: `Collection(Edm.Guid)` is a plain Guid, while
    /// `Collection(Edm.String)` (no marker, exact match can't fire on the
    /// wrapped string) becomes an array of strings.
    pub fn parse(descriptor: &str) -> Self {
        match ScalarKind::classify(descriptor) {
            ScalarKind::Unknown => match strip_collection(descriptor) {
                Some(inner) => Self {
                    scalar: Self::parse(inner).scalar,
                    is_collection: true,
                },
                None => Self {
                    scalar: ScalarKind::Unknown,
                    is_collection: false,
                },
            },
            scalar => Self {
                scalar,
                is_collection: false,
            },
        }
    }
}

/// Render the zod schema expression for a property type.
pub fn zod_type(property_type: PropertyType) -> String {
    let scalar = match property_type.scalar {
        ScalarKind::Identifier => "Guid",
        ScalarKind::DateTime => "DateTime",
        ScalarKind::DateOnly => "DateOnly",
        ScalarKind::Text => "z.string()",
        ScalarKind::Integer => "z.number().int()",
        ScalarKind::Number => "z.number()",
        ScalarKind::Boolean => "z.boolean()",
        ScalarKind::Unknown => "z.unknown()",
    };

    if property_type.is_collection {
        format!("z.array({})", scalar)
    } else {
        scalar.to_string()
    }
}

/// Render the structural TypeScript annotation for a property type.
pub fn ts_type(property_type: PropertyType) -> String {
    let scalar = match property_type.scalar {
        ScalarKind::Identifier | ScalarKind::DateTime | ScalarKind::DateOnly | ScalarKind::Text => {
            "string"
        }
        ScalarKind::Integer | ScalarKind::Number => "number",
        ScalarKind::Boolean => "boolean",
        ScalarKind::Unknown => "unknown",
    };

    if property_type.is_collection {
        format!("{}[]", scalar)
    } else {
        scalar.to_string()
    }
}

/// Strip a `Collection(...)` wrapper, returning the inner descriptor.
pub fn strip_collection(descriptor: &str) -> Option<&str> {
    descriptor.strip_prefix("Collection(")?.strip_suffix(')')
}

/// Strip a namespace qualifier: `Microsoft.NAV.customer` → `customer`.
pub fn unqualified_name(type_name: &str) -> &str {
    type_name.rsplit('.').next().unwrap_or(type_name)
}

/// Target entity name of a navigation property descriptor, collection
/// wrapper and namespace both stripped.
pub fn navigation_target(descriptor: &str) -> &str {
    unqualified_name(strip_collection(descriptor).unwrap_or(descriptor))
}

/// Whether a descriptor names a vendor complex type (or a collection of
/// one). Complex fields have no flat representation in the output and are
/// skipped from every emitted schema.
pub fn is_complex(descriptor: &str, namespace: &str) -> bool {
    !namespace.is_empty() && descriptor.contains(namespace)
}
