//! Business key formatting for categories and items.

/// Prefix of every category code.
pub const CATEGORY_CODE_PREFIX: &str = "CAT-";

/// Zero-padded width of the sequence part of a category code.
pub const CATEGORY_CODE_DIGITS: usize = 7;

/// Prefix of every item SKU.
pub const ITEM_SKU_PREFIX: &str = "SKU-";

/// Zero-padded width of the sequence part of an item SKU.
pub const ITEM_SKU_DIGITS: usize = 9;

/// Category code for sequence number `index` (1-based), e.g. `CAT-0000001`.
pub fn category_code(index: u64) -> String {
    format!(
        "{CATEGORY_CODE_PREFIX}{index:0width$}",
        width = CATEGORY_CODE_DIGITS
    )
}

/// Display name for category `index`.
pub fn category_name(index: u64) -> String {
    format!("Category {index}")
}

/// Item SKU for sequence number `index` (1-based), e.g. `SKU-000000001`.
pub fn item_sku(index: u64) -> String {
    format!("{ITEM_SKU_PREFIX}{index:0width$}", width = ITEM_SKU_DIGITS)
}

/// Display name for item `index`.
pub fn item_name(index: u64) -> String {
    format!("Item {index}")
}

/// Parse the sequence number out of a category code.
///
/// Returns `None` unless the value is exactly the prefix followed by
/// [`CATEGORY_CODE_DIGITS`] ASCII digits.
pub fn parse_category_code(code: &str) -> Option<u64> {
    parse_sequence(code, CATEGORY_CODE_PREFIX, CATEGORY_CODE_DIGITS)
}

/// Parse the sequence number out of an item SKU.
pub fn parse_item_sku(sku: &str) -> Option<u64> {
    parse_sequence(sku, ITEM_SKU_PREFIX, ITEM_SKU_DIGITS)
}

fn parse_sequence(value: &str, prefix: &str, digits: usize) -> Option<u64> {
    let rest = value.strip_prefix(prefix)?;
    if rest.len() != digits || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_code_padding() {
        assert_eq!(category_code(1), "CAT-0000001");
        assert_eq!(category_code(2000), "CAT-0002000");
        assert_eq!(category_code(9_999_999), "CAT-9999999");
    }

    #[test]
    fn test_item_sku_padding() {
        assert_eq!(item_sku(1), "SKU-000000001");
        assert_eq!(item_sku(100_000), "SKU-000100000");
    }

    #[test]
    fn test_names() {
        assert_eq!(category_name(7), "Category 7");
        assert_eq!(item_name(12), "Item 12");
    }

    #[test]
    fn test_parse_category_code() {
        assert_eq!(parse_category_code("CAT-0000042"), Some(42));
        assert_eq!(parse_category_code("CAT-42"), None);
        assert_eq!(parse_category_code("CAT-00000042"), None);
        assert_eq!(parse_category_code("SKU-0000042"), None);
        assert_eq!(parse_category_code("CAT-00000a2"), None);
        assert_eq!(parse_category_code("CAT-+000042"), None);
    }

    #[test]
    fn test_parse_item_sku() {
        assert_eq!(parse_item_sku(&item_sku(123_456)), Some(123_456));
        assert_eq!(parse_item_sku("SKU-0000001"), None);
        assert_eq!(parse_item_sku(""), None);
    }
}
