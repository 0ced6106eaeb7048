pub mod health;
pub mod metrics;
pub mod sampler;

pub use health::HealthState;
pub use metrics::{get_metrics, init_metrics, record_checkout};
pub use sampler::{OutcomeSampler, SeededSampler, ThreadRngSampler};
