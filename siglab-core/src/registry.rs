//! Strategy registry — required parameters, defaults, and warm-up rules as
//! data.
//!
//! Adding a strategy means adding a registry entry, not touching the
//! simulator or the search. The warm-up offset rule is uniform: the maximum
//! of the bound values of the strategy's declared lookback parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::StrategyId;
use crate::params::{ParamSet, ParamValue};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
}

/// Everything the search needs to know about one strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySpec {
    pub id: StrategyId,
    /// Required parameter names with their defaults, in declaration order.
    pub defaults: Vec<(String, ParamValue)>,
    /// Names whose bound max determines the alignment offset.
    pub lookback_params: Vec<String>,
}

impl StrategySpec {
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.defaults.iter().map(|(name, _)| name.as_str())
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.defaults.iter().any(|(n, _)| n == name)
    }

    /// Warm-up length for a bound assignment: max over the lookback params.
    ///
    /// Lookback names missing from the assignment contribute nothing; grid
    /// validation guarantees they are bound before a search runs.
    pub fn offset(&self, params: &ParamSet) -> usize {
        self.lookback_params
            .iter()
            .filter_map(|name| params.get(name))
            .map(|value| value.as_period())
            .max()
            .unwrap_or(0)
    }

    /// The default assignment: every required name bound to its default.
    pub fn default_params(&self) -> ParamSet {
        self.defaults
            .iter()
            .map(|(name, value)| (name.clone(), *value))
            .collect()
    }
}

/// Fixed mapping from strategy id to its spec.
#[derive(Debug, Clone, Default)]
pub struct StrategyRegistry {
    specs: Vec<StrategySpec>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spec, replacing any existing entry with the same id.
    pub fn register(&mut self, spec: StrategySpec) {
        if let Some(existing) = self.specs.iter_mut().find(|s| s.id == spec.id) {
            *existing = spec;
        } else {
            self.specs.push(spec);
        }
    }

    pub fn get(&self, id: &str) -> Option<&StrategySpec> {
        self.specs.iter().find(|s| s.id == id)
    }

    /// Lookup that treats a miss as the fatal input-validation failure it is.
    pub fn require(&self, id: &str) -> Result<&StrategySpec, RegistryError> {
        self.get(id)
            .ok_or_else(|| RegistryError::UnknownStrategy(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrategySpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The built-in strategy repertoire.
    pub fn builtin() -> Self {
        fn spec(id: &str, defaults: &[(&str, ParamValue)], lookbacks: &[&str]) -> StrategySpec {
            StrategySpec {
                id: id.to_string(),
                defaults: defaults
                    .iter()
                    .map(|(name, value)| (name.to_string(), *value))
                    .collect(),
                lookback_params: lookbacks.iter().map(|s| s.to_string()).collect(),
            }
        }

        let composite_defaults: &[(&str, ParamValue)] = &[
            ("macd_short_period", ParamValue::Int(7)),
            ("macd_long_period", ParamValue::Int(54)),
            ("macd_signal_period", ParamValue::Int(8)),
            ("rsi_period", ParamValue::Int(4)),
            ("supertrend_period", ParamValue::Int(5)),
            ("supertrend_multiplier", ParamValue::Float(8.5)),
        ];
        let composite_lookbacks = &["macd_long_period", "rsi_period", "supertrend_period"];

        let mut registry = Self::new();
        registry.register(spec(
            "macd",
            &[
                ("short_period", ParamValue::Int(12)),
                ("long_period", ParamValue::Int(26)),
                ("signal_period", ParamValue::Int(9)),
            ],
            &["long_period"],
        ));
        registry.register(spec(
            "rsi",
            &[
                ("period", ParamValue::Int(14)),
                ("overbought", ParamValue::Int(70)),
                ("oversold", ParamValue::Int(30)),
            ],
            &["period"],
        ));
        registry.register(spec(
            "supertrend",
            &[
                ("period", ParamValue::Int(10)),
                ("multiplier", ParamValue::Float(3.0)),
            ],
            &["period"],
        ));
        registry.register(spec(
            "macd_rsi_swing",
            &[
                ("macd_short_period", ParamValue::Int(7)),
                ("macd_long_period", ParamValue::Int(54)),
                ("macd_signal_period", ParamValue::Int(8)),
                ("rsi_period", ParamValue::Int(4)),
            ],
            &["macd_long_period", "rsi_period"],
        ));
        registry.register(spec(
            "mean_reversion",
            &[
                ("rsi_period", ParamValue::Int(4)),
                ("supertrend_period", ParamValue::Int(5)),
                ("supertrend_multiplier", ParamValue::Float(8.5)),
            ],
            &["rsi_period", "supertrend_period"],
        ));
        registry.register(spec(
            "advanced_parameter_optimization",
            composite_defaults,
            composite_lookbacks,
        ));
        registry.register(spec("momentum_breakout", composite_defaults, composite_lookbacks));
        registry.register(spec("multi_timeframe", composite_defaults, composite_lookbacks));
        registry.register(spec("adaptive_ensemble", composite_defaults, composite_lookbacks));
        registry.register(spec("dynamic_parameter", composite_defaults, composite_lookbacks));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_repertoire() {
        let registry = StrategyRegistry::builtin();
        assert_eq!(registry.len(), 10);
        assert!(registry.get("macd").is_some());
        assert!(registry.get("advanced_parameter_optimization").is_some());
        assert!(registry.get("adaptive_ensemble").is_some());
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn require_rejects_unknown() {
        let registry = StrategyRegistry::builtin();
        let err = registry.require("hodl").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownStrategy(id) if id == "hodl"));
    }

    #[test]
    fn macd_offset_is_long_period() {
        let registry = StrategyRegistry::builtin();
        let macd = registry.get("macd").unwrap();

        let mut params = macd.default_params();
        assert_eq!(macd.offset(&params), 26);

        params.insert("long_period".into(), 54i64.into());
        assert_eq!(macd.offset(&params), 54);

        // short_period is not a lookback param; raising it changes nothing.
        params.insert("short_period".into(), 200i64.into());
        assert_eq!(macd.offset(&params), 54);
    }

    #[test]
    fn composite_offset_is_max_of_lookbacks() {
        let registry = StrategyRegistry::builtin();
        let spec = registry.get("momentum_breakout").unwrap();

        let params = spec.default_params();
        // max(macd_long_period=54, rsi_period=4, supertrend_period=5)
        assert_eq!(spec.offset(&params), 54);

        let mut params = params;
        params.insert("rsi_period".into(), 80i64.into());
        assert_eq!(spec.offset(&params), 80);
    }

    #[test]
    fn default_params_bind_every_name() {
        let registry = StrategyRegistry::builtin();
        for spec in registry.iter() {
            let params = spec.default_params();
            for name in spec.param_names() {
                assert!(params.contains_key(name), "{}: missing {name}", spec.id);
            }
        }
    }

    #[test]
    fn lookback_params_are_required_params() {
        // A lookback name outside the defaults would silently contribute
        // nothing to the offset; make sure the built-ins never do that.
        let registry = StrategyRegistry::builtin();
        for spec in registry.iter() {
            for name in &spec.lookback_params {
                assert!(spec.has_param(name), "{}: stray lookback {name}", spec.id);
            }
        }
    }

    #[test]
    fn register_replaces_same_id() {
        let mut registry = StrategyRegistry::new();
        registry.register(StrategySpec {
            id: "x".into(),
            defaults: vec![("p".into(), ParamValue::Int(1))],
            lookback_params: vec!["p".into()],
        });
        registry.register(StrategySpec {
            id: "x".into(),
            defaults: vec![("p".into(), ParamValue::Int(2))],
            lookback_params: vec!["p".into()],
        });
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("x").unwrap().defaults[0].1, ParamValue::Int(2));
    }
}
