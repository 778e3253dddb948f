use heck::{ToShoutySnakeCase, ToUpperCamelCase};

/// Returns `true` if `name` is a plain SQL identifier: an ASCII letter or
/// underscore followed by ASCII letters, digits or underscores.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Name of the record type generated for table `name`.
pub fn record_name(table: &str) -> String {
    table.to_upper_camel_case()
}

/// Name of the constant generated for `label` of enum table `table`.
pub fn constant_name(table: &str, label: &str) -> String {
    format!("{table}_{label}").to_shouty_snake_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_identifier("user"));
        assert!(is_identifier("_tmp"));
        assert!(is_identifier("t_int64"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier("drop table"));
        assert!(!is_identifier("a-b"));
    }

    #[test]
    fn generated_names() {
        assert_eq!(record_name("user_address"), "UserAddress");
        assert_eq!(record_name("userAddress"), "UserAddress");
        assert_eq!(constant_name("sex", "female"), "SEX_FEMALE");
        assert_eq!(constant_name("t", "fooBar"), "T_FOO_BAR");
    }
}
