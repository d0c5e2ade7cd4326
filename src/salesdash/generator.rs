//! Mock sales records for the initial dashboard state.
//!
//! Ids are `item-<index>` and only unique within one call. Values are whole
//! numbers in `[100, 1099]`; dates fall between 2020-01-01 and 2023-12-31.

use crate::model::{Category, NewRecord, Record, DATE_FORMAT};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_RECORD_COUNT: usize = 25;

const VALUE_MIN: u32 = 100;
const VALUE_MAX: u32 = 1099;

const WINDOW_START: NaiveDate = match NaiveDate::from_ymd_opt(2020, 1, 1) {
    Some(date) => date,
    None => panic!("invalid window start"),
};
const WINDOW_END: NaiveDate = match NaiveDate::from_ymd_opt(2023, 12, 31) {
    Some(date) => date,
    None => panic!("invalid window end"),
};

/// Generates `count` records from the given random source.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Record> {
    let span = (WINDOW_END - WINDOW_START).num_days().max(0) as u64;

    (0..count)
        .map(|i| {
            let value = rng.gen_range(VALUE_MIN..=VALUE_MAX);
            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            let date = WINDOW_START
                .checked_add_days(Days::new(rng.gen_range(0..=span)))
                .unwrap_or(WINDOW_START);

            Record::new(
                format!("item-{}", i),
                NewRecord::new(
                    format!("Product {}", i + 1),
                    f64::from(value),
                    category,
                    date.format(DATE_FORMAT).to_string(),
                ),
            )
        })
        .collect()
}

/// Reproducible records for a given seed.
pub fn generate_seeded(count: usize, seed: u64) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(count, &mut rng)
}

/// Records from thread-local entropy.
pub fn generate_random(count: usize) -> Vec<Record> {
    generate(count, &mut rand::thread_rng())
}
