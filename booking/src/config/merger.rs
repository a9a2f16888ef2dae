//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use booking::config::{Config, ConfigMerger};
///
/// let low = Config { dark_mode: Some(false), ..Default::default() };
/// let high = Config { dark_mode: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.dark_mode, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Services: the whole catalog is replaced, never combined, so a
    ///   higher layer can drop services a lower one offered
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.services.is_some() {
            target.services.clone_from(&source.services);
        }

        if source.dark_mode.is_some() {
            target.dark_mode = source.dark_mode;
        }

        if source.id_strategy.is_some() {
            target.id_strategy = source.id_strategy;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::OutputFormat;
    use crate::service::ServiceOption;
    use crate::store::IdStrategy;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty_sources_is_default() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }

    #[test]
    fn test_none_does_not_clear_lower_value() {
        let merged = ConfigMerger::merge(vec![
            source(
                1,
                Config {
                    id_strategy: Some(IdStrategy::CountPlusOne),
                    ..Default::default()
                },
            ),
            source(2, Config::default()),
        ]);
        assert_eq!(merged.id_strategy, Some(IdStrategy::CountPlusOne));
    }

    #[test]
    fn test_services_are_replaced_not_combined() {
        let merged = ConfigMerger::merge(vec![
            source(
                1,
                Config {
                    services: Some(vec![
                        ServiceOption::new("Haircut", "Corte"),
                        ServiceOption::new("Shave", "Afeitado"),
                    ]),
                    ..Default::default()
                },
            ),
            source(
                2,
                Config {
                    services: Some(vec![ServiceOption::new("Nails", "Manicure")]),
                    output_format: Some(OutputFormat::Csv),
                    ..Default::default()
                },
            ),
        ]);
        assert_eq!(
            merged.services,
            Some(vec![ServiceOption::new("Nails", "Manicure")])
        );
        assert_eq!(merged.output_format, Some(OutputFormat::Csv));
    }
}
