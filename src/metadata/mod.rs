//! EDMX/OData metadata model and parser.

pub mod models;
pub mod parser;

pub use models::{
    ComplexType, EntityContainer, EntitySet, EntityType, EnumMember, EnumType, Key, Model,
    NavigationProperty, Property, PropertyRef, Schema,
};
pub use parser::parse;
