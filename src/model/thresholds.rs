use crate::model::errors::ModelError;
use crate::model::weights::WeightVector;

pub const DEFAULT_LAMBDA: f64 = 0.6;

/// Read-only configuration of the outranking classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierParams {
    pub weights: WeightVector,
    pub lambda: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    Pessimistic,
    Optimistic,
}

impl ClassifierParams {
    pub fn new(weights: WeightVector, lambda: f64) -> Result<Self, ModelError> {
        Ok(Self {
            weights,
            lambda: validate_lambda(lambda)?,
        })
    }

    pub fn default_v1() -> Self {
        Self {
            weights: WeightVector::default_v1(),
            lambda: DEFAULT_LAMBDA,
        }
    }

    pub fn with_lambda(&self, lambda: f64) -> Result<Self, ModelError> {
        Self::new(self.weights.clone(), lambda)
    }
}

pub fn validate_lambda(lambda: f64) -> Result<f64, ModelError> {
    if lambda > 0.0 && lambda <= 1.0 {
        Ok(lambda)
    } else {
        Err(ModelError::InvalidLambda(lambda))
    }
}

impl Procedure {
    pub const ALL: [Procedure; 2] = [Procedure::Pessimistic, Procedure::Optimistic];

    pub fn name(self) -> &'static str {
        match self {
            Procedure::Pessimistic => "pessimistic",
            Procedure::Optimistic => "optimistic",
        }
    }
}
