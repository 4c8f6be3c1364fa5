//! Generation policy: which entities and fields stay out of the output.
//!
//! The resolver and the emitters take a [`GeneratorConfig`] by reference,
//! so callers with different policy needs can supply their own sets. The
//! defaults are the Business Central ones.

use std::collections::HashSet;

/// Infrastructure entities hidden from generated API types even when an
/// entity set or navigation property references them.
const EXCLUDED_ENTITIES: &[&str] = &["company", "entityMetadata", "apicategoryroutes"];

/// Fields the service populates itself; omitted from create payloads.
/// `id` is not listed: Business Central accepts a caller-provided id on
/// create.
const READ_ONLY_ON_CREATE: &[&str] = &[
    "systemVersion",
    "timestamp",
    "systemCreatedAt",
    "systemCreatedBy",
    "systemModifiedAt",
    "systemModifiedBy",
    "lastModifiedDateTime",
    "entryNumber",
    "number",
];

/// Fields omitted from update payloads. Key properties are excluded per
/// entity on top of this list, since identity is immutable after create.
const READ_ONLY_ON_UPDATE: &[&str] = &[
    "id",
    "systemVersion",
    "timestamp",
    "systemCreatedAt",
    "systemCreatedBy",
    "systemModifiedAt",
    "systemModifiedBy",
    "lastModifiedDateTime",
    "entryNumber",
    "number",
];

/// Entity and field exclusion policy for the generators. Names match
/// exactly and case-sensitively; entity names are compared against the
/// unqualified type name (namespace prefix stripped).
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub excluded_entities: HashSet<String>,
    pub read_only_on_create: HashSet<String>,
    pub read_only_on_update: HashSet<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            excluded_entities: to_set(EXCLUDED_ENTITIES),
            read_only_on_create: to_set(READ_ONLY_ON_CREATE),
            read_only_on_update: to_set(READ_ONLY_ON_UPDATE),
        }
    }
}

fn to_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}
