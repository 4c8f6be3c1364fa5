use anyhow::Result;
use bc_codegen::metadata;

const SAMPLE_METADATA: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema Namespace="Microsoft.NAV" xmlns="http://docs.oasis-open.org/odata/ns/edm">
      <EntityType Name="salesOrder">
        <Key>
          <PropertyRef Name="id"/>
        </Key>
        <Property Name="id" Type="Edm.Guid" Nullable="false"/>
        <Property Name="number" Type="Edm.String"/>
        <Property Name="totalAmountExcludingTax" Type="Edm.Decimal" Nullable="true"/>
        <NavigationProperty Name="customer" Type="Microsoft.NAV.customer" Partner="salesOrders"/>
        <NavigationProperty Name="salesOrderLines" Type="Collection(Microsoft.NAV.salesOrderLine)" ContainsTarget="true"/>
      </EntityType>
      <EntityType Name="salesOrderLine">
        <Key>
          <PropertyRef Name="documentId"/>
          <PropertyRef Name="sequence"/>
        </Key>
        <Property Name="documentId" Type="Edm.Guid"/>
        <Property Name="sequence" Type="Edm.Int32"/>
      </EntityType>
      <ComplexType Name="postalAddress">
        <Property Name="street" Type="Edm.String"/>
        <Property Name="city" Type="Edm.String"/>
      </ComplexType>
      <EnumType Name="orderStatus">
        <Member Name="open" Value="0"/>
        <Member Name="released" Value="1"/>
      </EnumType>
      <EntityContainer Name="NavService">
        <EntitySet Name="salesOrders" EntityType="Microsoft.NAV.salesOrder"/>
        <EntitySet Name="salesOrderLines" EntityType="Microsoft.NAV.salesOrderLine"/>
      </EntityContainer>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

#[test]
fn parses_document_structure() -> Result<()> {
    let model = metadata::parse(SAMPLE_METADATA)?;
    let schema = &model.schema;

    assert_eq!(schema.namespace, "Microsoft.NAV");
    assert_eq!(schema.entity_types.len(), 2);
    assert_eq!(schema.complex_types.len(), 1);
    assert_eq!(schema.enum_types.len(), 1);
    assert_eq!(schema.entity_container.name, "NavService");
    assert_eq!(schema.entity_container.entity_sets.len(), 2);

    let sales_order = &schema.entity_types[0];
    assert_eq!(sales_order.name, "salesOrder");
    assert_eq!(sales_order.properties.len(), 3);
    assert_eq!(sales_order.navigation_properties.len(), 2);

    Ok(())
}

#[test]
fn keeps_key_property_order() -> Result<()> {
    let model = metadata::parse(SAMPLE_METADATA)?;
    let line = &model.schema.entity_types[1];

    let key_names: Vec<&str> = line.key.property_refs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(key_names, vec!["documentId", "sequence"]);
    assert!(line.is_key_property("documentId"));
    assert!(!line.is_key_property("description"));

    Ok(())
}

#[test]
fn nullable_attribute_is_tri_state() -> Result<()> {
    let model = metadata::parse(SAMPLE_METADATA)?;
    let sales_order = &model.schema.entity_types[0];

    assert_eq!(sales_order.properties[0].nullable.as_deref(), Some("false"));
    assert_eq!(sales_order.properties[1].nullable, None);
    assert_eq!(sales_order.properties[2].nullable.as_deref(), Some("true"));

    Ok(())
}

#[test]
fn preserves_relationship_metadata() -> Result<()> {
    let model = metadata::parse(SAMPLE_METADATA)?;
    let sales_order = &model.schema.entity_types[0];

    let customer = &sales_order.navigation_properties[0];
    assert_eq!(customer.type_name, "Microsoft.NAV.customer");
    assert_eq!(customer.partner.as_deref(), Some("salesOrders"));
    assert_eq!(customer.contains_target, None);

    let lines = &sales_order.navigation_properties[1];
    assert_eq!(lines.type_name, "Collection(Microsoft.NAV.salesOrderLine)");
    assert_eq!(lines.contains_target.as_deref(), Some("true"));

    Ok(())
}

#[test]
fn parses_complex_and_enum_types() -> Result<()> {
    let model = metadata::parse(SAMPLE_METADATA)?;
    let schema = &model.schema;

    assert_eq!(schema.complex_types[0].name, "postalAddress");
    assert_eq!(schema.complex_types[0].properties.len(), 2);

    assert_eq!(schema.enum_types[0].name, "orderStatus");
    assert_eq!(schema.enum_types[0].members[1].name, "released");
    assert_eq!(schema.enum_types[0].members[1].value, "1");

    Ok(())
}

#[test]
fn malformed_xml_fails_to_parse() {
    let result = metadata::parse("<Edmx><Unclosed></Edmx>");
    let err = result.expect_err("malformed XML must not parse");
    assert!(err.to_string().contains("Failed to parse metadata XML"));
}

#[test]
fn document_without_schema_yields_empty_model() -> Result<()> {
    let model = metadata::parse("<Edmx></Edmx>")?;
    assert!(model.schema.entity_types.is_empty());
    assert!(model.schema.entity_container.entity_sets.is_empty());
    Ok(())
}

#[test]
fn dangling_references_parse_without_error() -> Result<()> {
    // Semantically incomplete metadata is the generator's problem, not a
    // parse failure.
    let xml = r#"<Edmx><DataServices><Schema Namespace="Microsoft.NAV">
        <EntityType Name="a">
          <NavigationProperty Name="ghost" Type="Microsoft.NAV.ghost"/>
        </EntityType>
        <EntityContainer Name="C">
          <EntitySet Name="ghosts" EntityType="Microsoft.NAV.ghost"/>
        </EntityContainer>
    </Schema></DataServices></Edmx>"#;

    let model = metadata::parse(xml)?;
    assert_eq!(model.schema.entity_types.len(), 1);
    assert_eq!(model.schema.entity_container.entity_sets.len(), 1);
    Ok(())
}
