//! Property tests for template parsing and formatting.

use proptest::prelude::*;

use breakdown::{FieldMap, TemplatePattern};

const PATTERN: &str = "/jobs/show/{step}/{asset}/v{version}/{asset_basename}";

fn template() -> TemplatePattern {
    TemplatePattern::new("general", PATTERN).unwrap()
}

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,11}").unwrap()
}

fn fields() -> impl Strategy<Value = FieldMap> {
    (name(), name(), 0u32..5000, name()).prop_map(|(step, asset, version, ext)| {
        [
            ("step", step),
            ("asset", asset.clone()),
            ("version", version.to_string()),
            ("asset_basename", format!("{}.{}", asset, ext)),
        ]
        .into_iter()
        .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing a formatted path yields the fields it was formatted from.
    #[test]
    fn property_format_then_parse(f in fields()) {
        let t = template();
        let path = t.format(&f).unwrap();
        prop_assert_eq!(t.parse(&path).unwrap(), f);
    }

    /// PROPERTY: Formatting a parsed path reproduces it byte for byte.
    #[test]
    fn property_parse_then_format(f in fields()) {
        let t = template();
        let path = t.format(&f).unwrap();
        let reparsed = t.parse(&path).unwrap();
        prop_assert_eq!(t.format(&reparsed).unwrap(), path);
    }

    /// PROPERTY: Versions are rendered with at least three digits.
    #[test]
    fn property_version_is_zero_padded(f in fields()) {
        let path = template().format(&f).unwrap();
        let version_dir = path.rsplit('/').nth(1).unwrap();
        prop_assert!(version_dir.len() >= 4, "{}", version_dir);
        prop_assert_eq!(
            version_dir[1..].parse::<u32>().unwrap(),
            f.version().unwrap()
        );
    }

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = template().parse(&s);
    }

    /// PROPERTY: Building a template never panics on arbitrary patterns.
    #[test]
    fn property_new_never_panics(s in "(?s).{0,128}") {
        let _ = TemplatePattern::new("random", s);
    }
}
