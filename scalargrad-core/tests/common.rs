use rand::rngs::StdRng;
use rand::SeedableRng;

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Inputs of the four-sample toy dataset.
#[allow(dead_code)]
pub const XS: [[f64; 3]; 4] = [
    [2.0, 3.0, -1.0],
    [3.0, -1.0, 0.5],
    [0.5, 1.0, 1.0],
    [1.0, 1.0, -1.0],
];

/// Targets of the toy dataset.
#[allow(dead_code)]
pub const YS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];
