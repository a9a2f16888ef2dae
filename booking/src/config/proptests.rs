//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use crate::service::ServiceOption;
use crate::store::IdStrategy;
use proptest::prelude::*;

fn services_strategy() -> impl Strategy<Value = Vec<ServiceOption>> {
    prop::collection::vec(("[A-Z][a-z]{2,10}", "[A-Za-z ]{1,12}"), 1..5).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(value, label)| ServiceOption::new(value, label))
            .collect()
    })
}

fn id_strategy_strategy() -> impl Strategy<Value = IdStrategy> {
    prop_oneof![Just(IdStrategy::Monotonic), Just(IdStrategy::CountPlusOne)]
}

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Table),
        Just(OutputFormat::Cards),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(services_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(id_strategy_strategy()),
        prop::option::of(output_format_strategy()),
    )
        .prop_map(|(services, dark_mode, id_strategy, output_format)| Config {
            services,
            dark_mode,
            id_strategy,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher layer wins; unset fields keep the lower value.
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        let expected_services = if high.services.is_some() {
            high.services.clone()
        } else {
            low.services.clone()
        };
        prop_assert_eq!(&result.services, &expected_services);
        prop_assert_eq!(result.dark_mode, high.dark_mode.or(low.dark_mode));
        prop_assert_eq!(result.id_strategy, high.id_strategy.or(low.id_strategy));
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Merging a config into itself changes nothing.
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Merging the default config is a no-op.
    #[test]
    fn merge_default_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }
}
