//! Domain errors.
//!
//! The solver reports exactly one kind of failure, [`InvalidInput`]; its
//! variants only say *which* input was bad. Team construction has its own
//! [`TeamError`]. File loading and the binary use `anyhow` on top of these.

/// Rejected solver input. Nothing is computed when this is returned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    /// An option costs less than zero.
    #[error("option #{index} '{label}' has negative cost {cost}")]
    NegativeCost { index: usize, label: String, cost: f64 },

    /// An option yields less than zero.
    #[error("option #{index} '{label}' has negative yield {value}")]
    NegativeYield { index: usize, label: String, value: f64 },

    /// The budget is below zero.
    #[error("budget must not be negative (got {0})")]
    NegativeBudget(f64),

    /// NaN or infinity where a finite number is required.
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: String, value: f64 },
}

impl InvalidInput {
    pub(crate) fn not_finite(field: impl Into<String>, value: f64) -> Self {
        Self::NotFinite { field: field.into(), value }
    }
}

/// Rejected team composition.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TeamError {
    #[error("a team cannot contain more than {max} pets (got {count})")]
    TooManyPets { count: usize, max: usize },

    #[error("all pets must have power if manual speed is not set")]
    MissingPower,

    #[error("unknown genetic '{0}'")]
    UnknownGenetic(String),

    #[error("unknown team label '{0}'")]
    UnknownTeam(String),
}
