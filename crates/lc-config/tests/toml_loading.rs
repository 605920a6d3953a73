//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use std::path::PathBuf;

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use lc_config::{ConfigError, LcConfig, QuestionLayout};

#[test]
fn loads_output_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[output]
dir = "public/content"
extension = "json"
question_layout = "list"
"#,
        )?;

        let config: LcConfig = Figment::from(Serialized::defaults(LcConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.output.dir, PathBuf::from("public/content"));
        assert_eq!(config.output.question_layout, QuestionLayout::List);
        assert!(!config.validation.strict);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[validation]\nstrict = true\n")?;

        let config: LcConfig = Figment::from(Serialized::defaults(LcConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.validation.strict);
        assert_eq!(config.output.dir, PathBuf::from("src/data"));
        assert_eq!(config.output.question_layout, QuestionLayout::Map);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            lc_config::PROJECT_CONFIG_FILE,
            "[output]\ndir = \"site/data\"\n",
        )?;

        let config = LcConfig::load().expect("config loads");
        assert_eq!(config.output.dir, PathBuf::from("site/data"));
        Ok(())
    });
}

#[test]
fn unknown_layout_is_an_extraction_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            lc_config::PROJECT_CONFIG_FILE,
            "[output]\nquestion_layout = \"tree\"\n",
        )?;

        assert!(matches!(LcConfig::load(), Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn invalid_extension_is_rejected_after_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            lc_config::PROJECT_CONFIG_FILE,
            "[output]\nextension = \".json\"\n",
        )?;

        let result = LcConfig::load();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "output.extension"
        ));
        Ok(())
    });
}
