//! Table configuration types (Functional Core - pure data).

use productstore_core::product::ID_ATTRIBUTE;

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl AttributeType {
    /// DynamoDB type descriptor, as reported by DescribeTable.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "S",
        }
    }
}

impl KeyAttribute {
    /// Formats the attribute as `name (type)`, the form used by `TableState`.
    pub fn describe(&self) -> String {
        format!("{} ({})", self.name, self.attribute_type.as_str())
    }
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the canonical products table configuration.
/// This is a pure function - no I/O.
pub fn products_table_config() -> TableConfig {
    TableConfig {
        table_name: productstore::config::DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute {
            name: ID_ATTRIBUTE.to_string(),
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_table_is_keyed_by_id() {
        let config = products_table_config();

        assert_eq!(config.table_name, "products");
        assert_eq!(config.partition_key.name, "id");
        assert_eq!(config.partition_key.attribute_type, AttributeType::String);
    }

    #[test]
    fn test_partition_key_description_includes_type() {
        assert_eq!(products_table_config().partition_key.describe(), "id (S)");
    }

    #[test]
    fn test_with_table_name() {
        let config = products_table_config().with_table_name("catalog");
        assert_eq!(config.table_name, "catalog");
    }
}
