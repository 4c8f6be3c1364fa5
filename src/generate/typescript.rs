//! TypeScript backend: emits one flat module of zod schemas plus derived
//! create/update payload types.

use anyhow::Result;
use log::debug;

use crate::metadata::{EntityType, Model, NavigationProperty, Property};

use super::Generator;
use super::config::GeneratorConfig;
use super::reachability::reachable_entities;
use super::types::{self, PropertyType};

/// Generates the TypeScript module. Holds only policy; the text buffer
/// lives in a per-run writer so the generator can be reused.
#[derive(Debug, Default)]
pub struct TypeScriptGenerator {
    config: GeneratorConfig,
}

impl TypeScriptGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl Generator for TypeScriptGenerator {
    fn generate(&self, model: &Model) -> Result<String> {
        let schema = &model.schema;
        let entities = reachable_entities(schema, &self.config);
        debug!("Generating TypeScript module for {} entities", entities.len());

        let mut writer = ModuleWriter {
            config: &self.config,
            namespace: &schema.namespace,
            buffer: String::new(),
        };

        writer.write_header();

        // All base schemas first, then the derived payload types, every
        // pass over the same ordering so derived types follow their base
        // schema deterministically.
        for entity in &entities {
            writer.write_entity_schema(entity);
        }
        for entity in &entities {
            writer.write_create_type(entity);
            writer.write_update_type(entity);
        }

        Ok(writer.buffer)
    }
}

struct ModuleWriter<'a> {
    config: &'a GeneratorConfig,
    namespace: &'a str,
    buffer: String,
}

impl ModuleWriter<'_> {
    fn write_header(&mut self) {
        self.buffer.push_str("import { z } from \"zod\";\n");
        self.buffer.push('\n');

        self.buffer.push_str("// Branded types for Business Central\n");
        self.buffer.push_str("const Guid = z.string().brand<\"Guid\">();\n");
        self.buffer.push_str("const DateTime = z.string().brand<\"DateTime\">();\n");
        self.buffer.push_str("const DateOnly = z.string().brand<\"DateOnly\">();\n");
        self.buffer.push('\n');

        self.buffer.push_str("// Generic reference types\n");
        self.buffer.push_str("const RefOne = z.object({ id: Guid });\n");
        self.buffer.push_str("const RefMany = z.array(RefOne);\n");
        self.buffer.push('\n');
        self.buffer.push_str("export type RefOne = z.infer<typeof RefOne>;\n");
        self.buffer.push_str("export type RefMany = z.infer<typeof RefMany>;\n");
        self.buffer.push('\n');
    }

    fn write_entity_schema(&mut self, entity: &EntityType) {
        let schema_name = pascal_case(&entity.name);

        self.buffer.push_str(&format!("export const {} = z.object({{\n", schema_name));

        for property in &entity.properties {
            if self.is_complex_property(property) {
                continue;
            }
            self.write_schema_property(property);
        }

        for nav_prop in &entity.navigation_properties {
            self.write_navigation_property(nav_prop);
        }

        self.buffer.push_str("});\n");
        self.buffer.push('\n');
        self.buffer.push_str(&format!(
            "export type {} = z.infer<typeof {}>;\n",
            schema_name, schema_name
        ));
        self.buffer.push('\n');
    }

    fn write_schema_property(&mut self, property: &Property) {
        let zod = types::zod_type(PropertyType::parse(&property.type_name));
        let field = camel_case(&property.name);

        if property.nullable.as_deref() == Some("true") {
            self.buffer.push_str(&format!("  {}: {}.optional(),\n", field, zod));
        } else {
            self.buffer.push_str(&format!("  {}: {},\n", field, zod));
        }
    }

    /// Relationships are emitted as generic id references for now; full
    /// materialization of the target schema is deferred.
    fn write_navigation_property(&mut self, nav_prop: &NavigationProperty) {
        let field = camel_case(&nav_prop.name);

        if types::strip_collection(&nav_prop.type_name).is_some() {
            self.buffer.push_str(&format!("  {}: RefMany.optional(),\n", field));
        } else {
            self.buffer.push_str(&format!("  {}: RefOne.optional(),\n", field));
        }
    }

    fn write_create_type(&mut self, entity: &EntityType) {
        self.buffer.push_str(&format!("export type {}Create = {{\n", pascal_case(&entity.name)));

        for property in &entity.properties {
            if self.is_complex_property(property)
                || self.config.read_only_on_create.contains(&property.name)
            {
                continue;
            }
            self.write_payload_property(property);
        }

        self.buffer.push_str("};\n");
        self.buffer.push('\n');
    }

    fn write_update_type(&mut self, entity: &EntityType) {
        self.buffer.push_str(&format!("export type {}Update = {{\n", pascal_case(&entity.name)));

        for property in &entity.properties {
            if self.is_complex_property(property)
                || self.config.read_only_on_update.contains(&property.name)
                || entity.is_key_property(&property.name)
            {
                continue;
            }
            self.write_payload_property(property);
        }

        self.buffer.push_str("};\n");
        self.buffer.push('\n');
    }

    /// Payload fields are always optional: both create and update accept
    /// partial bodies, whatever the source nullability says.
    fn write_payload_property(&mut self, property: &Property) {
        let annotation = types::ts_type(PropertyType::parse(&property.type_name));
        self.buffer.push_str(&format!("  {}?: {};\n", camel_case(&property.name), annotation));
    }

    fn is_complex_property(&self, property: &Property) -> bool {
        if types::is_complex(&property.type_name, self.namespace) {
            debug!(
                "Skipping complex property '{}' ({})",
                property.name, property.type_name
            );
            return true;
        }
        false
    }
}

fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
