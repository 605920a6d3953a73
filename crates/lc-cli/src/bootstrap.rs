use anyhow::Context;

use crate::cli::GlobalFlags;

/// Load layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<lc_config::LcConfig> {
    let config =
        lc_config::LcConfig::load_with_dotenv().context("failed to load lifecourse configuration")?;
    apply_overrides(config, flags)
}

pub fn apply_overrides(
    mut config: lc_config::LcConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<lc_config::LcConfig> {
    if let Some(dir) = &flags.out_dir {
        config.output.dir.clone_from(dir);
    }
    if flags.strict {
        config.validation.strict = true;
    }
    config.validate().context("invalid command-line override")?;

    tracing::debug!(
        dir = %config.output.dir.display(),
        extension = %config.output.extension,
        layout = ?config.output.question_layout,
        strict = config.validation.strict,
        "resolved configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(out_dir: Option<&str>, strict: bool) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Text,
            quiet: false,
            out_dir: out_dir.map(PathBuf::from),
            strict,
        }
    }

    #[test]
    fn flags_override_config() {
        let config =
            apply_overrides(lc_config::LcConfig::default(), &flags(Some("public/data"), true))
                .unwrap();
        assert_eq!(config.output.dir, PathBuf::from("public/data"));
        assert!(config.validation.strict);
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut base = lc_config::LcConfig::default();
        base.validation.strict = true;
        let config = apply_overrides(base, &flags(None, false)).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("src/data"));
        assert!(config.validation.strict);
    }

    #[test]
    fn empty_out_dir_is_rejected() {
        let result = apply_overrides(lc_config::LcConfig::default(), &flags(Some(""), false));
        assert!(result.is_err());
    }
}
