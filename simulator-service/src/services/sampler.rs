//! Outcome sampling for simulated transactions.
//!
//! Each checkout draws three independent uniform values: a payment-method
//! selector, an error/success selector, and a delay. The selectors round
//! the draw to the nearest integer and compare against a fixed threshold,
//! which puts roughly 79% of traffic on card and roughly 21% of requests
//! on the error branch.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{CheckoutOutcome, PaymentMethod};

/// Upper bound of the checkout delay draw, in milliseconds.
pub const CHECKOUT_DELAY_CEILING_MS: f64 = 100.0;

/// Upper bound of the root probe delay draw, in milliseconds.
pub const PROBE_DELAY_CEILING_MS: f64 = 400.0;

/// Rounded percentile draws at or below this select paypal / the error
/// branch; draws above it select card / success.
const SELECTOR_THRESHOLD: u32 = 20;

/// Source of per-request randomness, injected into the application state
/// so tests can substitute deterministic implementations.
pub trait OutcomeSampler: Send + Sync {
    /// Draw payment method, error flag and delay for one checkout request.
    fn sample_checkout(&self) -> CheckoutOutcome;

    /// Draw the delay for one root probe request.
    fn sample_probe_delay(&self) -> u64;
}

fn outcome_from_draws(method_draw: f64, error_draw: f64, delay_draw: f64) -> CheckoutOutcome {
    let payment_method = if method_draw.round() as u32 > SELECTOR_THRESHOLD {
        PaymentMethod::Card
    } else {
        PaymentMethod::Paypal
    };
    let is_error = error_draw.round() as u32 <= SELECTOR_THRESHOLD;

    CheckoutOutcome {
        payment_method,
        is_error,
        delay_ms: delay_draw.round() as u64,
    }
}

fn sample_checkout_with<R: Rng>(rng: &mut R) -> CheckoutOutcome {
    outcome_from_draws(
        rng.gen_range(0.0..=100.0),
        rng.gen_range(0.0..=100.0),
        rng.gen_range(0.0..=CHECKOUT_DELAY_CEILING_MS),
    )
}

/// Production sampler backed by the thread-local generator.
pub struct ThreadRngSampler;

impl OutcomeSampler for ThreadRngSampler {
    fn sample_checkout(&self) -> CheckoutOutcome {
        sample_checkout_with(&mut rand::thread_rng())
    }

    fn sample_probe_delay(&self) -> u64 {
        rand::thread_rng()
            .gen_range(0.0..=PROBE_DELAY_CEILING_MS)
            .round() as u64
    }
}

/// Seedable sampler producing a reproducible sequence of outcomes.
pub struct SeededSampler {
    rng: Mutex<StdRng>,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl OutcomeSampler for SeededSampler {
    fn sample_checkout(&self) -> CheckoutOutcome {
        let mut rng = self.rng.lock().expect("sampler rng lock poisoned");
        sample_checkout_with(&mut *rng)
    }

    fn sample_probe_delay(&self) -> u64 {
        let mut rng = self.rng.lock().expect("sampler rng lock poisoned");
        rng.gen_range(0.0..=PROBE_DELAY_CEILING_MS).round() as u64
    }
}
