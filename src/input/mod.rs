//! Array input: validation, file import and random arrays.
//!
//! Everything that turns outside data into an array for [`generate`] goes
//! through [`validate_with`]. Validation is all-or-nothing: a rejected input
//! produces an error and no values, so the caller's current array stays as it
//! was.
//!
//! [`generate`]: crate::trace::generate

pub mod share;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Number of elements the visualizer works with
pub const ARRAY_SIZE: usize = 10;
pub const MIN_VALUE: i64 = 1;
pub const MAX_VALUE: i64 = 99;
/// Longest array a configuration may ask for
pub const MAX_LENGTH: usize = 64;

/// Range used for random arrays, so bars are never too short or too tall
const RANDOM_LOW: i64 = 10;
const RANDOM_HIGH: i64 = 94;

/// Rejection reasons for array input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected {expected} numbers, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// `position` is 1-based
    #[error("'{token}' (number {position}) is not an integer between {min} and {max}")]
    InvalidValue {
        token: String,
        position: usize,
        min: i64,
        max: i64,
    },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no 'data' parameter in '{0}'")]
    MissingData(String),
}

/// Accepted value range and array length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
    pub len: usize,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            min: MIN_VALUE,
            max: MAX_VALUE,
            len: ARRAY_SIZE,
        }
    }
}

impl Bounds {
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Validate with the default bounds (10 numbers, each in 1..=99)
pub fn validate(text: &str) -> Result<Vec<i64>, ValidationError> {
    validate_with(text, &Bounds::default())
}

/// Split `text` on commas and whitespace and parse every token.
///
/// Value errors are reported before the length is checked, using the first
/// offending token.
pub fn validate_with(text: &str, bounds: &Bounds) -> Result<Vec<i64>, ValidationError> {
    let mut values = Vec::with_capacity(bounds.len);

    for (i, token) in tokens(text).enumerate() {
        match token.parse::<i64>() {
            Ok(value) if bounds.contains(value) => values.push(value),
            _ => {
                return Err(ValidationError::InvalidValue {
                    token: token.to_string(),
                    position: i + 1,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
    }

    if values.len() != bounds.len {
        return Err(ValidationError::InvalidLength {
            expected: bounds.len,
            got: values.len(),
        });
    }

    Ok(values)
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

/// Read a text or CSV file and validate its contents
pub fn load_file(path: &Path, bounds: &Bounds) -> Result<Vec<i64>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match validate_with(&text, bounds) {
        Ok(values) => {
            debug!(path = %path.display(), "loaded array from file");
            Ok(values)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "rejected array file");
            Err(e.into())
        }
    }
}

/// A random array of `bounds.len` values.
///
/// Values are drawn from 10..=94, narrowed to the bounds when they overlap.
pub fn random_array<R: Rng + ?Sized>(rng: &mut R, bounds: &Bounds) -> Vec<i64> {
    let low = RANDOM_LOW.max(bounds.min);
    let high = RANDOM_HIGH.min(bounds.max);
    let (low, high) = if low <= high {
        (low, high)
    } else {
        (bounds.min, bounds.max)
    };

    (0..bounds.len).map(|_| rng.random_range(low..=high)).collect()
}

/// Where the starting array comes from.
///
/// [`resolve`](DataSource::resolve) uses the first one present: `data` (a
/// list, or a `?data=` query or URL), then `file`, then a random array seeded
/// with `seed` or from the OS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSource {
    pub data: Option<String>,
    pub file: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl DataSource {
    pub fn resolve(&self, bounds: &Bounds) -> Result<Vec<i64>, InputError> {
        if let Some(text) = &self.data {
            return if share::is_query(text) {
                share::parse_query(text, bounds)
            } else {
                Ok(validate_with(text, bounds)?)
            };
        }

        if let Some(path) = &self.file {
            return load_file(path, bounds);
        }

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(random_array(&mut rng, bounds))
    }
}
