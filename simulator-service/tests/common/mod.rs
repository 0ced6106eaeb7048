//! Shared helpers for simulator-service integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use simulator_service::Application;
use simulator_service::config::{Config, RootBehavior, ServerConfig};
use simulator_service::models::{CheckoutOutcome, PaymentMethod};
use simulator_service::services::{OutcomeSampler, ThreadRngSampler};

/// Sampler that always returns the same outcome, so a test can force a
/// specific branch of the checkout handler.
pub struct FixedSampler {
    pub outcome: CheckoutOutcome,
    pub probe_delay_ms: u64,
}

impl FixedSampler {
    pub fn success(delay_ms: u64) -> Self {
        Self {
            outcome: CheckoutOutcome {
                payment_method: PaymentMethod::Card,
                is_error: false,
                delay_ms,
            },
            probe_delay_ms: delay_ms,
        }
    }

    pub fn failure() -> Self {
        Self {
            outcome: CheckoutOutcome {
                payment_method: PaymentMethod::Paypal,
                is_error: true,
                // A non-zero draw: the error path must ignore it.
                delay_ms: 75,
            },
            probe_delay_ms: 0,
        }
    }
}

impl OutcomeSampler for FixedSampler {
    fn sample_checkout(&self) -> CheckoutOutcome {
        self.outcome
    }

    fn sample_probe_delay(&self) -> u64 {
        self.probe_delay_ms
    }
}

pub fn test_config(root_behavior: RootBehavior) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
        },
        root_behavior,
        service_name: "simulator-service-test".to_string(),
        log_level: "info".to_string(),
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(
            test_config(RootBehavior::Redirect),
            Arc::new(ThreadRngSampler),
        )
        .await
    }

    pub async fn spawn_with(config: Config, sampler: Arc<dyn OutcomeSampler>) -> Self {
        let app = Application::build_with_sampler(config, sampler)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        Self { address, port }
    }

    /// Client that does not follow redirects, so root-variant tests can
    /// observe the 302 itself.
    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build test client")
    }
}
