//! Vector field configuration
//!
//! The codec only guarantees vector shape. The distance metric is carried as
//! a tag for the storage collaborator that performs similarity search.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};

/// Distance metric for similarity calculation
///
/// All metrics are normalized to "higher = more similar" by the index that
/// interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Cosine similarity: dot(a,b) / (||a|| * ||b||)
    /// Range: [-1, 1], higher = more similar
    #[default]
    Cosine,

    /// Euclidean similarity: 1 / (1 + l2_distance)
    /// Range: (0, 1], higher = more similar
    Euclidean,

    /// Dot product (raw value)
    /// Range: unbounded, higher = more similar
    DotProduct,
}

impl DistanceMetric {
    /// Human-readable name, also the wire tag
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Cosine => "cosine",
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::DotProduct => "dot_product",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cosine" | "cosine_similarity" => Some(DistanceMetric::Cosine),
            "euclidean" | "l2" => Some(DistanceMetric::Euclidean),
            "dot_product" | "dot" | "inner_product" => Some(DistanceMetric::DotProduct),
            _ => None,
        }
    }
}

/// Validated vector field configuration - immutable after schema build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorConfig {
    /// Embedding dimension (e.g., 384, 768, 1536)
    /// Always > 0.
    pub dimension: usize,

    /// Distance metric tag for the storage collaborator
    pub metric: DistanceMetric,
}

impl VectorConfig {
    /// Create a new VectorConfig with validation
    ///
    /// Returns an error if dimension is not positive.
    pub fn new(field: &str, dimension: i64, metric: DistanceMetric) -> Result<Self, SchemaError> {
        match usize::try_from(dimension) {
            Ok(dimension) if dimension > 0 => Ok(VectorConfig { dimension, metric }),
            _ => Err(SchemaError::InvalidVectorDimension {
                field: field.to_string(),
                dimension,
            }),
        }
    }

    /// Config for MiniLM (384 dims)
    pub fn for_minilm() -> Self {
        VectorConfig {
            dimension: 384,
            metric: DistanceMetric::Cosine,
        }
    }

    /// Config for sentence-transformers/all-mpnet-base-v2 (768 dims)
    pub fn for_mpnet() -> Self {
        VectorConfig {
            dimension: 768,
            metric: DistanceMetric::Cosine,
        }
    }

    /// Config for OpenAI text-embedding-ada-002 (1536 dims)
    pub fn for_openai_ada() -> Self {
        VectorConfig {
            dimension: 1536,
            metric: DistanceMetric::Cosine,
        }
    }
}
