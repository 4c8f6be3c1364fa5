//! In-memory model of an EDMX metadata document.
//!
//! These are passive data structures mirroring the XML: the parser fills
//! them in document order and nothing mutates them afterwards. Complex and
//! enum types are carried along even though the TypeScript generator does
//! not consume them yet.

/// Root of a parsed metadata document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub schema: Schema,
}

/// The single `<Schema>` element of the document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    pub namespace: String,
    pub entity_types: Vec<EntityType>,
    pub complex_types: Vec<ComplexType>,
    pub enum_types: Vec<EnumType>,
    pub entity_container: EntityContainer,
}

/// The declared API surface: which entity sets the service exposes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityContainer {
    pub name: String,
    pub entity_sets: Vec<EntitySet>,
}

/// An exposed entity set. `entity_type` is a string reference (possibly
/// namespace-qualified), resolved by name lookup against the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySet {
    pub name: String,
    pub entity_type: String,
}

/// A named entity record with its key, properties and relationships.
///
/// Names are unique within a schema; a duplicate name does not fail the
/// parse but makes emission order for that name undefined.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityType {
    pub name: String,
    pub key: Key,
    pub properties: Vec<Property>,
    pub navigation_properties: Vec<NavigationProperty>,
}

impl EntityType {
    /// Whether `name` is one of this entity's key properties.
    pub fn is_key_property(&self, name: &str) -> bool {
        self.key.property_refs.iter().any(|r| r.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComplexType {
    pub name: String,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub value: String,
}

/// Ordered property names forming an entity's identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Key {
    pub property_refs: Vec<PropertyRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRef {
    pub name: String,
}

/// A scalar field. `type_name` is the raw OData descriptor, either a
/// primitive like `Edm.String` or a `Collection(X)` wrapper. `nullable`
/// keeps the attribute's tri-state as written; absence means non-nullable.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub type_name: String,
    pub nullable: Option<String>,
}

/// A relationship to another entity type (or a collection of one).
/// `contains_target` and `partner` are preserved for relationship-aware
/// generation but unused by the current emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationProperty {
    pub name: String,
    pub type_name: String,
    pub contains_target: Option<String>,
    pub partner: Option<String>,
}
