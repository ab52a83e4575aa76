//! Stable identifiers for the reference tables the encoder reads.
//!
//! Doctype names match the host system's table names verbatim (spaces included).
//! Table aliases are the short snake_case keys used in catalog files.

// Doctypes
pub const DOCTYPE_FIXTURE_TEMPLATE: &str = "ilL-Fixture-Template";
pub const DOCTYPE_TAPE_OFFERING: &str = "ilL-Rel-Tape Offering";
pub const DOCTYPE_CCT: &str = "ilL-Attribute-CCT";
pub const DOCTYPE_OUTPUT_LEVEL: &str = "ilL-Attribute-Output Level";
pub const DOCTYPE_LENS_APPEARANCE: &str = "ilL-Attribute-Lens Appearance";
pub const DOCTYPE_MOUNTING_METHOD: &str = "ilL-Attribute-Mounting Method";
pub const DOCTYPE_FINISH: &str = "ilL-Attribute-Finish";
pub const DOCTYPE_ENVIRONMENT_RATING: &str = "ilL-Attribute-Environment Rating";
pub const DOCTYPE_FEED_DIRECTION: &str = "ilL-Attribute-Feed-Direction";

// Fields: shared
pub const FIELD_NAME: &str = "name";
pub const FIELD_CODE: &str = "code";

// Fields: ilL-Fixture-Template
pub const FIELD_DEFAULT_PROFILE_FAMILY: &str = "default_profile_family";

// Fields: ilL-Rel-Tape Offering
pub const FIELD_LED_PACKAGE: &str = "led_package";
pub const FIELD_CCT: &str = "cct";
pub const FIELD_OUTPUT_LEVEL: &str = "output_level";

// Fields: ilL-Attribute-Output Level
pub const FIELD_VALUE: &str = "value";
pub const FIELD_SKU_CODE: &str = "sku_code";
pub const FIELD_IS_FIXTURE_LEVEL: &str = "is_fixture_level";

// Fields: ilL-Attribute-Lens Appearance
pub const FIELD_TRANSMISSION: &str = "transmission";

/// Catalog-file table aliases, paired with the doctype they populate.
pub const TABLE_ALIASES: &[(&str, &str)] = &[
    ("fixture_template", DOCTYPE_FIXTURE_TEMPLATE),
    ("tape_offering", DOCTYPE_TAPE_OFFERING),
    ("cct", DOCTYPE_CCT),
    ("output_level", DOCTYPE_OUTPUT_LEVEL),
    ("lens_appearance", DOCTYPE_LENS_APPEARANCE),
    ("mounting_method", DOCTYPE_MOUNTING_METHOD),
    ("finish", DOCTYPE_FINISH),
    ("environment_rating", DOCTYPE_ENVIRONMENT_RATING),
    ("feed_direction", DOCTYPE_FEED_DIRECTION),
];

/// Resolve a catalog-file alias (or a doctype name used verbatim) to its doctype.
pub fn doctype_for_alias(alias: &str) -> Option<&'static str> {
    TABLE_ALIASES
        .iter()
        .find(|(a, d)| *a == alias || *d == alias)
        .map(|(_, d)| *d)
}
