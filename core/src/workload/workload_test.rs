#[cfg(test)]
mod tests {
    use crate::case::{Algorithm, ConcurrencyMode};
    use crate::workload::{DivisionKernel, LeibnizTerm, RunParams};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_division_kernels_agree() {
        for (start, stop) in [(0, 0), (0, 7), (1, 10_000), (2_500, 10_003), (9, 8)] {
            let expected: f64 = (start..stop).map(|i| i as f64 / 5.0).sum();
            for kernel in [DivisionKernel::Loop, DivisionKernel::Vectorized, DivisionKernel::Accelerated] {
                let got = kernel.apply(start, stop);
                assert!(close(got, expected), "{kernel:?} on {start}..{stop}: {got} != {expected}");
            }
        }
    }

    #[test]
    fn test_leibniz_plan_covers_every_term_once() {
        for workers in 1..=10usize {
            let plan = LeibnizTerm::plan(1_003, workers);
            assert_eq!(plan.len(), workers);
            assert_eq!(plan.iter().map(|t| t.count).sum::<u64>(), 1_003);

            let mut denominators: Vec<u64> = plan
                .iter()
                .flat_map(|t| (0..t.count).map(move |k| t.initial + k * t.spacing))
                .collect();
            denominators.sort_unstable();
            let expected: Vec<u64> = (0..1_003).map(|k| 1 + 2 * k).collect();
            assert_eq!(denominators, expected);
        }
    }

    #[test]
    fn test_leibniz_fan_out_matches_single_stream() {
        let single = LeibnizTerm::single(10_000).sum();
        assert!((4.0 * single - std::f64::consts::PI).abs() < 1e-3);
        for workers in 1..=10usize {
            let split: f64 = LeibnizTerm::plan(10_000, workers).iter().map(LeibnizTerm::sum).sum();
            assert!(close(split, single), "workers={workers}: {split} != {single}");
        }
    }

    #[test]
    fn test_peace_of_pi_thread_run_approximates_pi() {
        let params = RunParams {
            load: 10,
            workers: 4,
            mode: ConcurrencyMode::Thread,
        };
        let outcome = Algorithm::PeaceOfPi.run(&params).unwrap();
        assert_eq!(outcome.partials.len(), 4);
        assert!((outcome.pi_estimate() - std::f64::consts::PI).abs() < 1e-3);
    }

    #[test]
    fn test_division_sequential_starts_at_one() {
        let params = RunParams {
            load: 1,
            workers: 5,
            mode: ConcurrencyMode::Sequential,
        };
        let outcome = Algorithm::SimpleDivision.run(&params).unwrap();
        assert_eq!(outcome.partials.len(), 1);
        let expected: f64 = (1..10_000u64).map(|i| i as f64 / 5.0).sum();
        assert!(close(outcome.total(), expected));
    }

    #[test]
    fn test_division_threads_split_full_range() {
        let expected: f64 = (0..10_000u64).map(|i| i as f64 / 5.0).sum();
        for algorithm in Algorithm::ACTIVE {
            let params = RunParams {
                load: 1,
                workers: 3,
                mode: ConcurrencyMode::Thread,
            };
            let outcome = algorithm.run(&params).unwrap();
            assert_eq!(outcome.partials.len(), 3);
            assert!(close(outcome.total(), expected), "{algorithm}");
        }
    }

    #[test]
    fn test_oversized_load_is_an_error() {
        let params = RunParams {
            load: u64::MAX / 1_000,
            workers: 2,
            mode: ConcurrencyMode::Thread,
        };
        let err = Algorithm::SimpleDivision.run(&params).unwrap_err();
        assert!(err.to_string().contains("too large"), "{err}");
    }
}
