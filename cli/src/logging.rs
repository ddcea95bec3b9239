use std::sync::Once;

use concbench_core::case::Algorithm;
use concbench_core::workload::RunOutcome;
use tracing::info;

static TRACING_INIT: Once = Once::new();

/// Quiet unless `RUST_LOG` asks for more; stdout stays reserved for listings
/// and worker reports.
const DEFAULT_TRACE_FILTER: &str = "warn";

pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_FILTER));
        let _ = fmt().with_writer(std::io::stderr).with_env_filter(filter).try_init();
    });
}

/// Logs the collected partials of a finished case at `info`.
pub fn log_outcome(algorithm: Algorithm, outcome: &RunOutcome) {
    info!(
        "{} finished with {} partial(s), total {:.6}",
        algorithm,
        outcome.partials.len(),
        outcome.total()
    );
    if algorithm == Algorithm::PeaceOfPi {
        info!("pi estimate {:.3}", outcome.pi_estimate());
    }
}
