//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Printer;
use crate::ConfigArgs;

/// Renders the configuration the command would print
pub fn render_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<String> {
    if args.defaults {
        CliConfig::default().to_yaml()
    } else {
        config.to_yaml()
    }
}

/// Execute the config command
pub fn execute_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    let yaml = render_config(config, args)?;
    Printer::default().raw(&yaml);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_effective() {
        let config = CliConfig::new().with_display_width(7);
        let yaml = render_config(&config, &ConfigArgs { defaults: false }).unwrap();
        assert!(yaml.contains("display_width: 7"));
    }

    #[test]
    fn test_render_defaults_ignores_overrides() {
        let config = CliConfig::new().with_display_width(7);
        let yaml = render_config(&config, &ConfigArgs { defaults: true }).unwrap();
        assert!(yaml.contains("display_width: 11"));
        assert!(yaml.contains("history_capacity: 100"));
    }

    #[test]
    fn test_rendered_yaml_reloads() {
        let yaml = render_config(&CliConfig::new(), &ConfigArgs { defaults: false }).unwrap();
        assert_eq!(CliConfig::from_yaml(&yaml).unwrap(), CliConfig::new());
    }
}
