//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigInitArgs, ConfigShowArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use std::path::PathBuf;

/// Handle the config command
pub async fn handle_config(
    args: ConfigArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Path => handle_config_path(output),
    }
}

/// Handle config show subcommand
fn handle_config_show(args: ConfigShowArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let content = match args.format {
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
        ConfigFormat::Json => format!("{}\n", serde_json::to_string_pretty(config)?),
    };
    output.write(&content)
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => Config::user_config_path()?,
    };

    if path.exists() && !args.force {
        return Err(Error::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save(&path)?;
    tracing::info!(path = %path.display(), "Configuration file written");
    output.success(&format!("✓ Created configuration file {}", path.display()))
}

/// Handle config path subcommand
fn handle_config_path(output: &mut OutputWriter) -> Result<()> {
    let paths: Vec<PathBuf> = Config::default_config_paths();

    if !output.is_human() {
        return output.data(&paths);
    }

    output.info("Configuration files are searched in this order:")?;
    for path in paths {
        let marker = if path.exists() { "✓" } else { " " };
        output.writeln(&format!("  {} {}", marker, path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::test_support::capture;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_show_yaml() {
        let (mut output, buffer) = capture(OutputFormat::Human);
        let args = ConfigArgs {
            action: ConfigAction::Show(ConfigShowArgs {
                format: ConfigFormat::Yaml,
            }),
        };

        handle_config(args, &Config::default(), &mut output).await.unwrap();

        let shown: Config = serde_yaml::from_str(&buffer.contents()).unwrap();
        assert_eq!(shown, Config::default());
        assert!(buffer.contents().contains("file_name: vercel.json"));
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wp2vercel.yaml");
        let (mut output, _) = capture(OutputFormat::Human);

        let init = |force| ConfigArgs {
            action: ConfigAction::Init(ConfigInitArgs {
                path: Some(path.clone()),
                force,
            }),
        };

        handle_config(init(false), &Config::default(), &mut output).await.unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());

        let err = handle_config(init(false), &Config::default(), &mut output)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        handle_config(init(true), &Config::default(), &mut output).await.unwrap();
    }

    #[tokio::test]
    async fn test_path_json() {
        let (mut output, buffer) = capture(OutputFormat::Json);
        let args = ConfigArgs {
            action: ConfigAction::Path,
        };

        handle_config(args, &Config::default(), &mut output).await.unwrap();

        let paths: Vec<String> = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(paths[0], ".wp2vercel.yaml");
    }
}
