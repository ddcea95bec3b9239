use std::hint::black_box;

use serde::{Deserialize, Serialize};

pub const DIVISOR: f64 = 5.0;

/// Buffer length for the vectorized kernel; bounds memory at large loads.
const VECTOR_CHUNK: u64 = 1 << 20;
const LANES: usize = 8;

/// Interchangeable implementations of "divide every item by 5".
///
/// Each returns the sum of its quotients so equivalence is observable; the
/// runners throw the value away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionKernel {
    Loop,
    Vectorized,
    Accelerated,
}

impl DivisionKernel {
    pub fn apply(self, start: u64, stop: u64) -> f64 {
        let sum = match self {
            DivisionKernel::Loop => divide_loop(start, stop),
            DivisionKernel::Vectorized => divide_vectorized(start, stop),
            DivisionKernel::Accelerated => divide_accelerated(start, stop),
        };
        black_box(sum)
    }
}

fn divide_loop(start: u64, stop: u64) -> f64 {
    let mut sum = 0.0;
    for i in start..stop {
        sum += black_box(i as f64 / DIVISOR);
    }
    sum
}

fn divide_vectorized(start: u64, stop: u64) -> f64 {
    let mut buffer: Vec<f64> = Vec::with_capacity(stop.saturating_sub(start).min(VECTOR_CHUNK) as usize);
    let mut sum = 0.0;
    let mut lo = start;
    while lo < stop {
        let hi = lo.saturating_add(VECTOR_CHUNK).min(stop);
        buffer.clear();
        buffer.extend((lo..hi).map(|v| v as f64));
        buffer.iter_mut().for_each(|v| *v /= DIVISOR);
        sum += black_box(&buffer).iter().sum::<f64>();
        lo = hi;
    }
    sum
}

fn divide_accelerated(start: u64, stop: u64) -> f64 {
    let mut lanes = [0.0f64; LANES];
    let mut base = start;
    while base.saturating_add(LANES as u64) <= stop {
        for (k, lane) in lanes.iter_mut().enumerate() {
            *lane += (base + k as u64) as f64 / DIVISOR;
        }
        base += LANES as u64;
    }
    let mut sum: f64 = lanes.iter().sum();
    for i in base..stop {
        sum += i as f64 / DIVISOR;
    }
    sum
}

/// One interleaved slice of the Leibniz series `1 - 1/3 + 1/5 - ...`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeibnizTerm {
    pub initial: u64,
    pub count: u64,
    pub sign: f64,
    pub sign_diff: f64,
    pub spacing: u64,
}

impl LeibnizTerm {
    /// The whole series as a single stream of `count` terms.
    pub fn single(count: u64) -> Self {
        Self {
            initial: 1,
            count,
            sign: 1.0,
            sign_diff: -1.0,
            spacing: 2,
        }
    }

    /// Splits `items` terms into `workers` interleaved streams. Worker `w`
    /// takes terms `w, w + workers, w + 2 * workers, ...`; the first
    /// `items % workers` workers take one extra term.
    pub fn plan(items: u64, workers: usize) -> Vec<Self> {
        if workers == 0 {
            return Vec::new();
        }
        let w = workers as u64;
        let count = items / w;
        let excess = items % w;
        let spacing = 2 * w;
        let sign_diff = if workers % 2 == 0 { 1.0 } else { -1.0 };

        (0..w)
            .map(|idx| Self {
                initial: 1 + idx * 2,
                count: if idx < excess { count + 1 } else { count },
                sign: if idx % 2 == 0 { 1.0 } else { -1.0 },
                sign_diff,
                spacing,
            })
            .collect()
    }

    pub fn sum(&self) -> f64 {
        let mut total = 0.0;
        let mut val = self.initial as f64;
        let mut sign = self.sign;
        for _ in 0..self.count {
            total += sign / val;
            val += self.spacing as f64;
            sign *= self.sign_diff;
        }
        total
    }
}
