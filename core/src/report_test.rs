#[cfg(test)]
mod tests {
    use crate::{
        measurement::Measurement,
        report::{Comparison, duration_line, format_general, percent_slower, sweep_line, write_json, write_text},
        strategy::{BenchmarkCase, Strategy},
        suite::{Axis, Section, Suite, SuiteReport},
    };
    use anyhow::Result;
    use std::time::Duration;

    fn ms(case: &str, millis: u64) -> Measurement {
        Measurement::new(case, 10, 1_000, Duration::from_millis(millis))
    }

    #[test]
    fn test_format_general_fixed_notation() {
        assert_eq!(format_general(0.0, 9), "0");
        assert_eq!(format_general(0.5, 6), "0.5");
        assert_eq!(format_general(1234.5, 6), "1234.5");
        assert_eq!(format_general(1.23456789, 6), "1.23457");
        assert_eq!(format_general(9.9999999, 6), "10");
        assert_eq!(format_general(250.0, 9), "250");
        assert_eq!(format_general(-2.5, 6), "-2.5");
    }

    #[test]
    fn test_format_general_exponent_notation() {
        assert_eq!(format_general(1_250_000_000.0, 6), "1.25e9");
        assert_eq!(format_general(0.000_001_5, 6), "1.5e-6");
        assert_eq!(format_general(0.000_012_34, 6), "1.234e-5");
        assert_eq!(format_general(0.000_099_999_9, 6), "9.99999e-5");
        assert_eq!(format_general(0.000_123_4, 6), "0.0001234");
    }

    #[test]
    fn test_percent_is_symmetric() {
        assert_eq!(percent_slower(50.0, 100.0), 50.0);
        assert_eq!(percent_slower(100.0, 50.0), 50.0);
        assert_eq!(percent_slower(3.0, 7.0), percent_slower(7.0, 3.0));
        assert_eq!(percent_slower(0.0, 0.0), 0.0);
        assert_eq!(percent_slower(4.0, 4.0), 0.0);
    }

    #[test]
    fn test_comparison_names_slower_case() {
        let cmp = Comparison::between(&ms("map2vec_ce()", 300), &ms("map2vec_ref()", 200));
        assert_eq!(cmp.slower, "map2vec_ce()");
        assert_eq!(cmp.faster, "map2vec_ref()");
        assert!(!cmp.tie);
        assert!((cmp.percent - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(cmp.summary(), "map2vec_ce() is slower than map2vec_ref() by 33.3333%");
        assert_eq!(cmp.recommendation(), "USE map2vec_ref() IMPLEMENTATION FOR BEST PERFORMANCES");

        let swapped = Comparison::between(&ms("map2vec_ref()", 200), &ms("map2vec_ce()", 300));
        assert_eq!(swapped.slower, cmp.slower);
        assert_eq!(swapped.percent, cmp.percent);
    }

    #[test]
    fn test_comparison_tie() {
        let cmp = Comparison::between(&ms("a", 5), &ms("b", 5));
        assert!(cmp.tie);
        assert_eq!(cmp.percent, 0.0);
        assert_eq!(cmp.summary(), "a is slower than b by 0%");
    }

    #[test]
    fn test_duration_line_units() {
        let line = duration_line(&Measurement::new("x", 1, 1, Duration::from_micros(1_500)));
        assert_eq!(line, "Duration = 0.0015s ≈ 1.5ms ≈ 1500µs ≈ 1500000ns");
    }

    #[test]
    fn test_sweep_line() {
        let m = Measurement::new("copy-elision", 1, 10_000_000, Duration::from_micros(123_456));
        assert_eq!(sweep_line(m.repetitions(), &m), "10000000,123.456");
    }

    fn sweep_report() -> SuiteReport {
        SuiteReport {
            suite: Suite::Items,
            axis: Axis::Items,
            sections: vec![
                Section {
                    case: BenchmarkCase::new("NRVO", Strategy::ConstructAndReturn),
                    measurements: vec![
                        Measurement::new("NRVO", 1000, 10, Duration::from_millis(2)),
                        Measurement::new("NRVO", 2000, 10, Duration::from_millis(4)),
                    ],
                },
                Section {
                    case: BenchmarkCase::new("reference + clear", Strategy::ReferenceClear),
                    measurements: vec![Measurement::new("reference + clear", 1000, 10, Duration::from_millis(1))],
                },
            ],
            comparison: None,
        }
    }

    #[test]
    fn test_write_text_sweep_sections() -> Result<()> {
        let mut out = Vec::new();
        write_text(&mut out, &sweep_report())?;
        let text = String::from_utf8(out)?;
        assert_eq!(text, "NRVO\n1000,2\n2000,4\n\nreference + clear\n1000,1\n");
        Ok(())
    }

    #[test]
    fn test_write_text_compare_layout() -> Result<()> {
        let ce = ms("map2vec_ce()", 300);
        let by_ref = ms("map2vec_ref()", 200);
        let report = SuiteReport {
            suite: Suite::Compare,
            axis: Axis::Repetitions,
            comparison: Some(Comparison::between(&ce, &by_ref)),
            sections: vec![
                Section {
                    case: BenchmarkCase::new("map2vec_ce()", Strategy::ConstructAndReturn),
                    measurements: vec![ce],
                },
                Section {
                    case: BenchmarkCase::new("map2vec_ref()", Strategy::ReferenceClear),
                    measurements: vec![by_ref],
                },
            ],
        };
        let mut out = Vec::new();
        write_text(&mut out, &report)?;
        let text = String::from_utf8(out)?;
        assert!(text.contains(" ITERATIONS: 1000\n"));
        assert!(text.contains("Benchmark with map2vec_ce\nDuration = 0.3s ≈ 300ms"));
        assert!(text.contains("Benchmark with map2vec_ref\nDuration = 0.2s ≈ 200ms"));
        assert!(!text.contains("Benchmark with map2vec_ce()"));
        assert!(text.contains(" map2vec_ce() is slower than map2vec_ref() by 33.3333%\n"));
        assert!(text.ends_with(" USE map2vec_ref() IMPLEMENTATION FOR BEST PERFORMANCES\n"));
        Ok(())
    }

    #[test]
    fn test_write_json_carries_measurements() -> Result<()> {
        let mut out = Vec::new();
        write_json(&mut out, &[sweep_report()])?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert!(value["generated_at"].is_string());
        let suite = &value["suites"][0];
        assert_eq!(suite["suite"], "items");
        assert_eq!(suite["axis"], "items");
        assert_eq!(suite["sections"][0]["case"]["strategy"], "construct-and-return");
        assert_eq!(suite["sections"][0]["measurements"][1]["elapsed_ns"], 4_000_000);
        assert_eq!(suite["derived"].as_array().map(Vec::len), Some(3));
        let millis = suite["derived"][0]["millis"].as_f64().unwrap_or_default();
        assert!((millis - 2.0).abs() < 1e-9);
        assert!(suite.get("comparison").is_none());
        Ok(())
    }
}
