use fixture_ident_domain::EncoderConfig;

/// Preset profiles.
///
/// `preview` matches what the configurator shows while a customer is still selecting:
/// lowercase placeholders for unselected options.
pub fn preset(profile: &str) -> EncoderConfig {
    match profile {
        "preview" => preview_profile(),
        // default
        _ => standard_profile(),
    }
}

fn standard_profile() -> EncoderConfig {
    EncoderConfig::default()
}

fn preview_profile() -> EncoderConfig {
    EncoderConfig {
        profile: "preview".to_string(),
        placeholder: "xx".to_string(),
        ..EncoderConfig::default()
    }
}
