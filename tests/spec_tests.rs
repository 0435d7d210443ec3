use osrisk::{
    Distribution, DistributionError, ErrorKind, from_json_str, from_spec, from_specs,
    random_source::{RandomSource, random_source, seeded},
};
use serde_json::{Value, json};

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn numbers_are_fixed_values() {
        for x in [0, 5, -12] {
            let d: Distribution = from_spec(&json!(x)).unwrap();
            let mut rng: RandomSource = seeded(x as u64);
            assert_eq!(d.sample(&mut rng), x as f64);
        }
        let d: Distribution = from_spec(&json!(0.125)).unwrap();
        assert_eq!(d.sample_from_entropy(), 0.125);
    }

    #[test]
    fn normal_is_reproducible() {
        let d: Distribution = from_spec(&json!({ "type": "normal", "mean": 0, "std": 1 })).unwrap();

        let first: f64 = d.sample(&mut seeded(1234));
        let second: f64 = d.sample(&mut seeded(1234));
        assert!(first.is_finite());
        assert_eq!(first, second);
    }

    #[test]
    fn discrete_scenario() {
        let d: Distribution = from_spec(&json!({
            "type": "discrete",
            "values": [1, 2],
            "probs": [0.3, 0.7]
        }))
        .unwrap();

        let mut rng: RandomSource = seeded(77);
        for _ in 0..1_000 {
            let x: f64 = d.sample(&mut rng);
            assert!(x == 1.0 || x == 2.0);
        }
    }

    #[test]
    fn triangular_scenario() {
        let d: Distribution =
            from_spec(&json!({ "type": "triangular", "left": 0, "mode": 5, "right": 10 })).unwrap();
        let mut rng: RandomSource = seeded(78);
        for _ in 0..1_000 {
            let x: f64 = d.sample(&mut rng);
            assert!((0.0..=10.0).contains(&x));
        }
    }

    #[test]
    fn uniform_scenario() {
        let d: Distribution =
            from_spec(&json!({ "type": "uniform", "low": 0.0, "high": 1.0 })).unwrap();
        let mut rng: RandomSource = seeded(79);
        assert!(d.sample_multiple(1_000, &mut rng).iter().all(|x| (0.0..=1.0).contains(x)));
    }

    #[test]
    fn poisson_with_zero_rate_always_samples_zero() {
        let d: Distribution = from_spec(&json!({ "type": "poisson", "lam": 0 })).unwrap();
        let mut rng: RandomSource = seeded(80);
        assert!(d.sample_multiple(1_000, &mut rng).iter().all(|x| *x == 0.0));
        assert_eq!(from_spec(&d.to_spec()).unwrap(), d);

        let err: DistributionError =
            from_spec(&json!({ "type": "poisson", "lam": -3 })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn weibull_with_negative_shape_fails_at_construction() {
        let err: DistributionError =
            from_spec(&json!({ "type": "weibull", "shape": -1, "scale": 2 })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn string_is_an_invalid_specification() {
        let err: DistributionError = from_spec(&json!("not-a-number-or-mapping")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSpecification);
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn malformed_input_is_classified_deterministically() {
        let inputs: Vec<Value> = vec![
            json!("text"),
            json!({ "type": "pareto", "scale": 1 }),
            json!({ "type": "normal", "mean": 0 }),
            json!({ "type": "gamma", "shape": 0, "scale": 1 }),
            json!({ "type": "discrete", "values": [1, 2], "probs": [0.5] }),
            json!({ "type": "discrete", "values": [1, 2], "probs": [0.5, 0.6] }),
        ];
        let expected: Vec<ErrorKind> = vec![
            ErrorKind::InvalidSpecification,
            ErrorKind::UnknownType,
            ErrorKind::MissingParameter,
            ErrorKind::InvalidParameter,
            ErrorKind::InvalidParameter,
            ErrorKind::InvalidParameter,
        ];

        for (input, kind) in inputs.iter().zip(expected) {
            let first: ErrorKind = from_spec(input).unwrap_err().kind();
            let second: ErrorKind = from_spec(input).unwrap_err().kind();
            assert_eq!(first, kind, "input: {input}");
            assert_eq!(first, second);
        }
    }

    #[test]
    fn every_required_field_is_mandatory() {
        let complete: Vec<Value> = vec![
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

        for spec in &complete {
            assert!(from_spec(spec).is_ok(), "{spec}");

            let fields: Vec<&String> = spec.as_object().unwrap().keys().filter(|k| *k != "type").collect();
            for field in fields {
                let mut partial: Value = spec.clone();
                partial.as_object_mut().unwrap().remove(field.as_str());

                match from_spec(&partial).unwrap_err() {
                    DistributionError::MissingParameter { parameter, .. } => {
                        assert_eq!(parameter, field.as_str());
                    }
                    other => panic!("expected a missing parameter, got {other}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod collection_tests {
    use super::*;

    #[test]
    fn named_specs_keep_their_order() {
        let specs: Value = json!({
            "duration": { "type": "weibull", "shape": 1.5, "scale": 10.0 },
            "cost": { "type": "normal", "mean": 1000.0, "std": 100.0 },
            "downtime_factor": { "type": "uniform", "low": 0.8, "high": 1.2 },
            "crew": 4
        });

        let built = from_specs(specs.as_object().unwrap()).unwrap();
        let names: Vec<&str> = built.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["duration", "cost", "downtime_factor", "crew"]);
        assert_eq!(built["crew"].tag(), "fixed");
        assert_eq!(built["cost"].tag(), "normal");
    }

    #[test]
    fn failing_entry_is_named() {
        let specs: Value = json!({
            "ok": 1,
            "broken": { "type": "beta", "alpha": 1 },
        });

        let err: DistributionError = from_specs(specs.as_object().unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingParameter);
        match err {
            DistributionError::Named { name, .. } => assert_eq!(name, "broken"),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn json_documents() {
        let text: &str = r#"
        {
            "repair_hours": { "type": "gamma", "shape": 2.0, "scale": 1.5 },
            "failures": { "type": "poisson", "lam": 0.7 },
            "severity": { "type": "discrete", "values": [1, 2, 3], "probs": [0.6, 0.3, 0.1] }
        }"#;

        let built = from_json_str(text).unwrap();
        assert_eq!(built.len(), 3);
        assert_eq!(built.get_index(1).map(|(name, _)| name.as_str()), Some("failures"));

        assert_eq!(from_json_str("[1, 2]").unwrap_err().kind(), ErrorKind::InvalidSpecification);
        assert!(matches!(from_json_str("{ not json").unwrap_err(), DistributionError::Json(_)));
    }

    #[test]
    fn to_spec_rebuilds_an_equal_distribution() {
        let specs: Value = json!({
            "a": 3,
            "b": { "type": "uniform", "low": -1, "high": 1 },
            "c": { "type": "triangular", "left": 1, "mode": 2, "right": 4 },
            "d": { "type": "normal", "mean": 0.5, "std": 0.1 },
            "e": { "type": "lognormal", "mean": 1, "sigma": 0.25 },
            "f": { "type": "exponential", "scale": 9 },
            "g": { "type": "weibull", "shape": 0.8, "scale": 2 },
            "h": { "type": "gamma", "shape": 5, "scale": 0.2 },
            "i": { "type": "beta", "alpha": 0.5, "beta": 0.5 },
            "j": { "type": "poisson", "lam": 12 },
            "k": { "type": "discrete", "values": [5, 1, 3], "probs": [0.2, 0.2, 0.6] },
        });

        for (name, d) in from_specs(specs.as_object().unwrap()).unwrap() {
            let rebuilt: Distribution = from_spec(&d.to_spec()).unwrap();
            assert_eq!(rebuilt, d, "{name}");
        }
    }
}

#[cfg(test)]
mod concurrency_tests {
    use super::*;

    #[test]
    fn shared_distribution_independent_sources() {
        let d: Distribution = from_spec(&json!({ "type": "gamma", "shape": 2, "scale": 2 })).unwrap();

        let run = |stream: u64| -> Vec<f64> {
            let mut rng: RandomSource = random_source().seed(2024).stream(stream).call();
            d.sample_multiple(100, &mut rng)
        };

        let sequential: Vec<Vec<f64>> = (0..4).map(run).collect();
        let parallel: Vec<Vec<f64>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|stream| scope.spawn(move || run(stream))).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential, parallel);
        assert_ne!(parallel[0], parallel[1]);
    }
}
