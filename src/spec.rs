//! # Specifications
//!
//! Turns declarative descriptions into [Distribution]s. A specification is
//! either a plain number (a [FixedValue]) or a mapping with a `type` tag and
//! the parameters of that family:
//!
//! | type          | required fields                 |
//! |---------------|---------------------------------|
//! | `fixed`       | `value`                         |
//! | `uniform`     | `low`, `high`                   |
//! | `triangular`  | `left`, `mode`, `right`         |
//! | `normal`      | `mean`, `std`                   |
//! | `lognormal`   | `mean`, `sigma`                 |
//! | `exponential` | `scale`                         |
//! | `weibull`     | `shape`, `scale`                |
//! | `gamma`       | `shape`, `scale`                |
//! | `beta`        | `alpha`, `beta`                 |
//! | `poisson`     | `lam`                           |
//! | `discrete`    | `values`, `probs` (number lists) |
//!
//! Every field is required, there are no defaults. Extra fields are ignored.
//!
//! ```
//! use osrisk::spec::from_spec;
//! use serde_json::json;
//!
//! let cost = from_spec(&json!({ "type": "normal", "mean": 1000.0, "std": 100.0 })).unwrap();
//! let fixed = from_spec(&json!(5)).unwrap();
//! assert_eq!(fixed.sample_from_entropy(), 5.0);
//! # let _ = cost;
//! ```

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{Level, debug, instrument};

use crate::{
    configuration::MISSING_TYPE_TAG,
    distributions::{
        Beta, Discrete, Distribution, Exponential, FixedValue, Gamma, LogNormal, Normal, Poisson,
        Triangular, Uniform, Weibull,
    },
    errors::DistributionError,
};

/// Builds the [Distribution] described by `spec`.
///
/// Fails without building anything if the specification is malformed. The
/// same input always gives an equal distribution or the same kind of error.
pub fn from_spec(spec: &Value) -> Result<Distribution, DistributionError> {
    let result: Result<Distribution, DistributionError> = parse(spec);

    match &result {
        Ok(distribution) => debug!(%distribution, "built distribution"),
        Err(err) => debug!(%err, %spec, "rejected distribution specification"),
    }

    return result;
}

/// Builds every entry of a collection of named specifications.
///
/// The result keeps the names and their order. If any entry is invalid the
/// whole call fails with a [DistributionError::Named] that points at it.
#[instrument(level = Level::TRACE, skip_all, fields(count = specs.len()))]
pub fn from_specs(
    specs: &Map<String, Value>,
) -> Result<IndexMap<String, Distribution>, DistributionError> {
    let mut ret: IndexMap<String, Distribution> = IndexMap::with_capacity(specs.len());

    for (name, spec) in specs {
        let distribution: Distribution =
            from_spec(spec).map_err(|source| DistributionError::Named {
                name: name.clone(),
                source: Box::new(source),
            })?;
        ret.insert(name.clone(), distribution);
    }

    return Ok(ret);
}

/// Parses a JSON document whose top level is an object of named
/// specifications, as found in simulation configuration files:
///
/// ```json
/// {
///     "duration": { "type": "weibull", "shape": 1.5, "scale": 10.0 },
///     "crew": 4
/// }
/// ```
pub fn from_json_str(text: &str) -> Result<IndexMap<String, Distribution>, DistributionError> {
    let document: Value = serde_json::from_str(text)?;

    return match &document {
        Value::Object(specs) => from_specs(specs),
        other => Err(DistributionError::InvalidSpecification {
            spec: other.to_string(),
        }),
    };
}

fn parse(spec: &Value) -> Result<Distribution, DistributionError> {
    let fields: &Map<String, Value> = match spec {
        Value::Number(number) => {
            let value: f64 = number.as_f64().ok_or_else(|| DistributionError::InvalidSpecification {
                spec: spec.to_string(),
            })?;
            return Ok(FixedValue::new(value)?.into());
        }
        Value::Object(fields) => fields,
        _ => {
            return Err(DistributionError::InvalidSpecification {
                spec: spec.to_string(),
            });
        }
    };

    let tag: &str = match fields.get("type") {
        Some(Value::String(tag)) => tag.as_str(),
        Some(other) => {
            return Err(DistributionError::UnknownType {
                tag: other.to_string(),
            });
        }
        None => {
            return Err(DistributionError::UnknownType {
                tag: MISSING_TYPE_TAG.to_string(),
            });
        }
    };

    let distribution: Distribution = match tag {
        FixedValue::TAG => {
            let p = Params::new(FixedValue::TAG, fields);
            FixedValue::new(p.number("value")?)?.into()
        }
        Uniform::TAG => {
            let p = Params::new(Uniform::TAG, fields);
            Uniform::new(p.number("low")?, p.number("high")?)?.into()
        }
        Triangular::TAG => {
            let p = Params::new(Triangular::TAG, fields);
            Triangular::new(p.number("left")?, p.number("mode")?, p.number("right")?)?.into()
        }
        Normal::TAG => {
            let p = Params::new(Normal::TAG, fields);
            Normal::new(p.number("mean")?, p.number("std")?)?.into()
        }
        LogNormal::TAG => {
            let p = Params::new(LogNormal::TAG, fields);
            LogNormal::new(p.number("mean")?, p.number("sigma")?)?.into()
        }
        Exponential::TAG => {
            let p = Params::new(Exponential::TAG, fields);
            Exponential::new(p.number("scale")?)?.into()
        }
        Weibull::TAG => {
            let p = Params::new(Weibull::TAG, fields);
            Weibull::new(p.number("shape")?, p.number("scale")?)?.into()
        }
        Gamma::TAG => {
            let p = Params::new(Gamma::TAG, fields);
            Gamma::new(p.number("shape")?, p.number("scale")?)?.into()
        }
        Beta::TAG => {
            let p = Params::new(Beta::TAG, fields);
            Beta::new(p.number("alpha")?, p.number("beta")?)?.into()
        }
        Poisson::TAG => {
            let p = Params::new(Poisson::TAG, fields);
            Poisson::new(p.number("lam")?)?.into()
        }
        Discrete::TAG => {
            let p = Params::new(Discrete::TAG, fields);
            Discrete::new(p.numbers("values")?, p.numbers("probs")?)?.into()
        }
        unknown => {
            return Err(DistributionError::UnknownType {
                tag: unknown.to_string(),
            });
        }
    };

    return Ok(distribution);
}

/// Typed access to the parameters of one family.
struct Params<'a> {
    distribution: &'static str,
    fields: &'a Map<String, Value>,
}

impl<'a> Params<'a> {
    const fn new(distribution: &'static str, fields: &'a Map<String, Value>) -> Params<'a> {
        return Params {
            distribution,
            fields,
        };
    }

    fn get(&self, parameter: &'static str) -> Result<&'a Value, DistributionError> {
        return self
            .fields
            .get(parameter)
            .ok_or(DistributionError::MissingParameter {
                distribution: self.distribution,
                parameter,
            });
    }

    fn number(&self, parameter: &'static str) -> Result<f64, DistributionError> {
        let value: &Value = self.get(parameter)?;
        return value.as_f64().ok_or_else(|| {
            DistributionError::invalid(
                self.distribution,
                parameter,
                format!("expected a number, found {value}"),
            )
        });
    }

    fn numbers(&self, parameter: &'static str) -> Result<Vec<f64>, DistributionError> {
        let value: &Value = self.get(parameter)?;
        let Some(items) = value.as_array() else {
            return Err(DistributionError::invalid(
                self.distribution,
                parameter,
                format!("expected a list of numbers, found {value}"),
            ));
        };

        return items
            .iter()
            .map(|item| {
                item.as_f64().ok_or_else(|| {
                    DistributionError::invalid(
                        self.distribution,
                        parameter,
                        format!("expected a number, found {item}"),
                    )
                })
            })
            .collect::<Result<Vec<f64>, DistributionError>>();
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::errors::ErrorKind;

    use super::*;

    #[test]
    fn numbers_are_fixed() {
        assert_eq!(
            from_spec(&json!(5)).unwrap(),
            Distribution::Fixed(FixedValue::new(5.0).unwrap())
        );
        assert_eq!(
            from_spec(&json!({ "type": "fixed", "value": 2.5 })).unwrap(),
            Distribution::Fixed(FixedValue::new(2.5).unwrap())
        );
    }

    #[test]
    fn every_tag_is_recognised() {
        let specs: Vec<Value> = vec![
            json!({ "type": "fixed", "value": 1 }),
            json!({ "type": "uniform", "low": 0, "high": 1 }),
            json!({ "type": "triangular", "left": 0, "mode": 5, "right": 10 }),
            json!({ "type": "normal", "mean": 0, "std": 1 }),
            json!({ "type": "lognormal", "mean": 0, "sigma": 1 }),
            json!({ "type": "exponential", "scale": 2 }),
            json!({ "type": "weibull", "shape": 2, "scale": 3 }),
            json!({ "type": "gamma", "shape": 2, "scale": 3 }),
            json!({ "type": "beta", "alpha": 2, "beta": 3 }),
            json!({ "type": "poisson", "lam": 3 }),
            json!({ "type": "discrete", "values": [1, 2], "probs": [0.3, 0.7] }),
        ];

        for spec in &specs {
            let distribution: Distribution = from_spec(spec).unwrap();
            assert_eq!(Some(distribution.tag()), spec["type"].as_str());
        }
    }

    #[test]
    fn missing_parameter_is_named() {
        let err: DistributionError = from_spec(&json!({ "type": "gamma", "shape": 2 })).unwrap_err();
        match err {
            DistributionError::MissingParameter {
                distribution,
                parameter,
            } => {
                assert_eq!(distribution, "gamma");
                assert_eq!(parameter, "scale");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrongly_typed_parameters() {
        let err: DistributionError =
            from_spec(&json!({ "type": "normal", "mean": "zero", "std": 1 })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);

        let err: DistributionError =
            from_spec(&json!({ "type": "discrete", "values": 1, "probs": [1.0] })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);

        let err: DistributionError =
            from_spec(&json!({ "type": "discrete", "values": [1, "b"], "probs": [0.5, 0.5] }))
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn type_tag_problems() {
        let err: DistributionError = from_spec(&json!({ "mean": 0, "std": 1 })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownType);
        assert_eq!(err.to_string(), "unknown distribution type: <missing>");

        let err: DistributionError = from_spec(&json!({ "type": "cauchy" })).unwrap_err();
        assert_eq!(err.to_string(), "unknown distribution type: cauchy");

        let err: DistributionError = from_spec(&json!({ "type": 3 })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownType);
    }

    #[test]
    fn not_a_number_nor_a_mapping() {
        for spec in [json!("5"), json!(true), json!(null), json!([1, 2])] {
            assert_eq!(
                from_spec(&spec).unwrap_err().kind(),
                ErrorKind::InvalidSpecification
            );
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        let d: Distribution =
            from_spec(&json!({ "type": "exponential", "scale": 2, "comment": "hours" })).unwrap();
        assert_eq!(d, Distribution::Exponential(Exponential::new(2.0).unwrap()));
    }
}
