//! Parses EDMX metadata XML into the in-memory model.
//!
//! The parser is a structural mirror of the document: it matches element
//! and attribute names and nothing else. Cardinality, reference
//! resolvability and EDMX schema conformance are not checked here; a
//! well-formed but semantically nonsensical document parses fine and is
//! the generator's problem.

use anyhow::Result;
use log::debug;
use roxmltree::{Document, Node};

use super::models::{
    ComplexType, EntityContainer, EntitySet, EntityType, EnumMember, EnumType, Model,
    NavigationProperty, Property, PropertyRef, Schema,
};

/// Parse a metadata XML document into a [`Model`].
///
/// Fails only when the input is not well-formed XML.
pub fn parse(metadata_xml: &str) -> Result<Model> {
    debug!("Parsing metadata XML, {} bytes", metadata_xml.len());

    let doc = Document::parse(metadata_xml)
        .map_err(|e| anyhow::anyhow!("Failed to parse metadata XML: {}", e))?;

    // In EDMX the model lives under <Edmx><DataServices><Schema>. A missing
    // Schema element yields an empty model, not an error.
    let schema = doc
        .descendants()
        .find(|n| n.has_tag_name("Schema"))
        .map(parse_schema)
        .unwrap_or_default();

    debug!(
        "Parsed {} entity types, {} complex types, {} enum types, {} entity sets",
        schema.entity_types.len(),
        schema.complex_types.len(),
        schema.enum_types.len(),
        schema.entity_container.entity_sets.len()
    );

    Ok(Model { schema })
}

fn parse_schema(node: Node) -> Schema {
    let mut schema = Schema {
        namespace: node.attribute("Namespace").unwrap_or_default().to_string(),
        ..Default::default()
    };

    for entity_type in node.children().filter(|n| n.has_tag_name("EntityType")) {
        schema.entity_types.push(parse_entity_type(entity_type));
    }

    for complex_type in node.children().filter(|n| n.has_tag_name("ComplexType")) {
        schema.complex_types.push(parse_complex_type(complex_type));
    }

    for enum_type in node.children().filter(|n| n.has_tag_name("EnumType")) {
        schema.enum_types.push(parse_enum_type(enum_type));
    }

    if let Some(container) = node.children().find(|n| n.has_tag_name("EntityContainer")) {
        schema.entity_container = parse_entity_container(container);
    }

    schema
}

fn parse_entity_type(node: Node) -> EntityType {
    let mut entity = EntityType {
        name: node.attribute("Name").unwrap_or_default().to_string(),
        ..Default::default()
    };

    if let Some(key) = node.children().find(|n| n.has_tag_name("Key")) {
        for property_ref in key.children().filter(|n| n.has_tag_name("PropertyRef")) {
            if let Some(name) = property_ref.attribute("Name") {
                entity.key.property_refs.push(PropertyRef {
                    name: name.to_string(),
                });
            }
        }
    }

    for property in node.children().filter(|n| n.has_tag_name("Property")) {
        if let Some(parsed) = parse_property(property) {
            entity.properties.push(parsed);
        }
    }

    for nav_prop in node.children().filter(|n| n.has_tag_name("NavigationProperty")) {
        if let Some(name) = nav_prop.attribute("Name") {
            entity.navigation_properties.push(NavigationProperty {
                name: name.to_string(),
                type_name: nav_prop.attribute("Type").unwrap_or_default().to_string(),
                contains_target: nav_prop.attribute("ContainsTarget").map(|s| s.to_string()),
                partner: nav_prop.attribute("Partner").map(|s| s.to_string()),
            });
        }
    }

    entity
}

fn parse_property(node: Node) -> Option<Property> {
    let name = node.attribute("Name")?;
    Some(Property {
        name: name.to_string(),
        type_name: node.attribute("Type").unwrap_or_default().to_string(),
        nullable: node.attribute("Nullable").map(|s| s.to_string()),
    })
}

fn parse_complex_type(node: Node) -> ComplexType {
    ComplexType {
        name: node.attribute("Name").unwrap_or_default().to_string(),
        properties: node
            .children()
            .filter(|n| n.has_tag_name("Property"))
            .filter_map(parse_property)
            .collect(),
    }
}

fn parse_enum_type(node: Node) -> EnumType {
    let mut members = Vec::new();
    for member in node.children().filter(|n| n.has_tag_name("Member")) {
        if let Some(name) = member.attribute("Name") {
            members.push(EnumMember {
                name: name.to_string(),
                value: member.attribute("Value").unwrap_or_default().to_string(),
            });
        }
    }

    EnumType {
        name: node.attribute("Name").unwrap_or_default().to_string(),
        members,
    }
}

fn parse_entity_container(node: Node) -> EntityContainer {
    let mut container = EntityContainer {
        name: node.attribute("Name").unwrap_or_default().to_string(),
        ..Default::default()
    };

    for entity_set in node.children().filter(|n| n.has_tag_name("EntitySet")) {
        if let Some(name) = entity_set.attribute("Name") {
            container.entity_sets.push(EntitySet {
                name: name.to_string(),
                entity_type: entity_set.attribute("EntityType").unwrap_or_default().to_string(),
            });
        }
    }

    container
}
