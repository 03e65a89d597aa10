#[cfg(test)]
pub mod test {
    use std::collections::HashMap;

    use crate::env::env_from_pairs;

    pub const SAMPLE_YAML: &str = r#"
system: "${SYSTEM:testing}"
testing:
  demo: "${ENVIRONMENT_VARIABLE:default}"
plain: value
boolean: "${BOOLEAN_VALUE:True}"
integer: "${INT_VALUE:1}"
float: "${FLOAT_VALUE:1.0}"
env_val: "${ENV_VAL}"
"#;

    pub const SAMPLE_JSON: &str = r#"{
    "system": "${SYSTEM:testing}",
    "testing": { "demo": "${ENVIRONMENT_VARIABLE:default}" },
    "plain": "value",
    "boolean": "${BOOLEAN_VALUE:True}",
    "integer": "${INT_VALUE:1}",
    "float": "${FLOAT_VALUE:1.0}",
    "env_val": "${ENV_VAL}"
}"#;

    pub const SAMPLE_TOML: &str = r#"
system = "${SYSTEM:testing}"
plain = "value"
boolean = "${BOOLEAN_VALUE:True}"
integer = "${INT_VALUE:1}"
float = "${FLOAT_VALUE:1.0}"

[testing]
demo = "${ENVIRONMENT_VARIABLE:default}"
"#;

    pub const SAMPLE_INI: &str = r#"
[default]
system = ${SYSTEM:testing}
plain = value
boolean = ${BOOLEAN_VALUE:True}
integer = ${INT_VALUE:1}
float = ${FLOAT_VALUE:1.0}

[testing]
demo = ${ENVIRONMENT_VARIABLE:default}
"#;

    /// Overrides for every variable the samples reference.
    pub fn env_overrides() -> HashMap<String, String> {
        env_from_pairs([
            ("SYSTEM", "env_value"),
            ("ENVIRONMENT_VARIABLE", "value"),
            ("INT_VALUE", "2"),
            ("FLOAT_VALUE", "2.0"),
            ("BOOLEAN_VALUE", "False"),
            ("ENV_VAL", "Value"),
        ])
    }
}
