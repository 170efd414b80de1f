//! Fixtures shared by the k1ecies integration tests and benchmarks
pub mod backends;
pub mod vectors;
