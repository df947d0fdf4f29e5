//! facility-icons - render catalog icons from the command line
//!
//! Usage:
//!   facility-icons list [--json]
//!   facility-icons render FireAlarm --color '#ff0000' --size 64
//!   facility-icons render Pump --png pump.png --px 256

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use facility_icons::{IconConfig, IconRegistry, IconSize, MissPolicy, RegistryOptions, rasterize};

#[derive(Parser)]
#[command(name = "facility-icons")]
#[command(about = "Render icons from the facility icon catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every catalog key
    List {
        /// Print the keys as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Render one icon as SVG (default) or PNG
    Render {
        /// Catalog key, e.g. FireAlarm
        key: String,

        /// Icon color; inherits from context when omitted
        #[arg(long)]
        color: Option<String>,

        /// Size in logical units, or a length such as 2em
        #[arg(long)]
        size: Option<String>,

        /// Extra root attribute as name=value (repeatable)
        #[arg(long = "attr", value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,

        /// Fail on unknown keys instead of rendering the placeholder
        #[arg(long)]
        strict: bool,

        /// Write a PNG to this path instead of printing SVG
        #[arg(long)]
        png: Option<PathBuf>,

        /// Pixel size of the larger PNG dimension
        #[arg(long, default_value = "128")]
        px: u32,
    },
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("attribute name missing in `{raw}`"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn parse_size(raw: &str) -> IconSize {
    match raw.parse::<f64>() {
        Ok(units) => IconSize::Units(units),
        Err(_) => IconSize::Length(raw.to_string()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List { json } => {
            let registry = IconRegistry::builtin().context("icon catalog is invalid")?;
            let keys: Vec<_> = registry.keys().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&keys)?);
            } else {
                for key in keys {
                    println!("{key}");
                }
            }
        }
        Command::Render {
            key,
            color,
            size,
            attributes,
            strict,
            png,
            px,
        } => {
            let policy = if strict { MissPolicy::Strict } else { MissPolicy::Fallback };
            let registry = IconRegistry::new(
                facility_icons::catalog::CATALOG,
                RegistryOptions::new().with_miss_policy(policy),
            )
            .context("icon catalog is invalid")?;
            let renderer = registry.lookup(&key)?;

            let mut config = IconConfig::new();
            if let Some(color) = color {
                config = config.with_color(color);
            }
            if let Some(size) = size {
                config = config.with_size(parse_size(&size));
            }
            config.extra_attributes.extend(attributes);

            let drawing = renderer.render(&config);
            match png {
                Some(path) => {
                    let Some(image) = rasterize(&drawing, px) else {
                        bail!("could not rasterize `{}` at {} px", renderer.key(), px);
                    };
                    image
                        .save(&path)
                        .with_context(|| format!("writing {}", path.display()))?;
                    tracing::info!(key = renderer.key(), path = %path.display(), "wrote png");
                }
                None => println!("{drawing}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_splits_on_first_equals() {
        assert_eq!(parse_attribute("a=b"), Ok(("a".to_string(), "b".to_string())));
        assert_eq!(
            parse_attribute("style=fill:red;x=1"),
            Ok(("style".to_string(), "fill:red;x=1".to_string()))
        );
    }

    #[test]
    fn attribute_value_may_be_empty() {
        assert_eq!(parse_attribute("a="), Ok(("a".to_string(), String::new())));
    }

    #[test]
    fn attribute_without_name_or_equals_is_rejected() {
        assert!(parse_attribute("=b").is_err());
        assert!(parse_attribute("ab").is_err());
    }

    #[test]
    fn size_accepts_units_and_lengths() {
        assert_eq!(parse_size("64"), IconSize::Units(64.0));
        assert_eq!(parse_size("2em"), IconSize::Length("2em".to_string()));
    }

    #[test]
    fn cli_parses_render_flags() {
        let cli = Cli::try_parse_from([
            "facility-icons", "render", "FireAlarm", "--size", "2em", "--attr", "class=icon", "--strict",
        ])
        .unwrap();
        let Command::Render { key, size, attributes, strict, px, .. } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(key, "FireAlarm");
        assert_eq!(size.as_deref(), Some("2em"));
        assert_eq!(attributes, vec![("class".to_string(), "icon".to_string())]);
        assert!(strict);
        assert_eq!(px, 128);
    }
}
