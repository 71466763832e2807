// Bias axis construction.
//
// Each pole's expanded keywords are averaged into a centroid. The two
// centroids are stacked as a 2 x D point set and reduced to their dominant
// principal direction, which for two points is the line through them. The
// reduction alone leaves the sign arbitrary, so the axis is then oriented to
// point from the left centroid towards the right one: left-leaning text
// projects negative, right-leaning text positive.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::embeddings::EmbeddingStore;
use crate::error::BiasError;

const POWER_ITERATIONS: usize = 100;
const CONVERGENCE_EPSILON: f64 = 1e-12;

/// A unit direction in embedding space separating the two poles.
#[derive(Debug, Clone, PartialEq)]
pub struct BiasAxis {
    direction: Vec<f64>,
}

impl BiasAxis {
    /// Wrap an explicit direction, normalized to unit length.
    /// Returns `None` for zero-length or non-finite directions.
    pub fn from_direction(direction: Vec<f64>) -> Option<Self> {
        let norm = l2_norm(&direction);
        if !norm.is_finite() || norm < f64::EPSILON {
            return None;
        }
        Some(Self {
            direction: direction.into_iter().map(|x| x / norm).collect(),
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.direction
    }

    pub fn dim(&self) -> usize {
        self.direction.len()
    }

    /// Scalar position of `vector` along the axis.
    pub fn project(&self, vector: &[f32]) -> f64 {
        self.direction
            .iter()
            .zip(vector)
            .map(|(a, &v)| a * v as f64)
            .sum()
    }

    fn negated(self) -> Self {
        Self {
            direction: self.direction.into_iter().map(|x| -x).collect(),
        }
    }
}

/// Centroid of the store vectors for every keyword present in the store.
///
/// Returns the centroid and how many keywords were absent. The centroid is
/// `None` when no keyword has a vector.
pub fn centroid(
    store: &EmbeddingStore,
    keywords: &BTreeSet<String>,
) -> (Option<Vec<f64>>, usize) {
    let mut sum = vec![0.0_f64; store.dim()];
    let mut present = 0usize;

    for vector in keywords.iter().filter_map(|k| store.lookup(k)) {
        for (acc, &v) in sum.iter_mut().zip(vector) {
            *acc += v as f64;
        }
        present += 1;
    }

    let absent = keywords.len() - present;
    if present == 0 {
        return (None, absent);
    }

    let n = present as f64;
    for val in &mut sum {
        *val /= n;
    }
    (Some(sum), absent)
}

/// Dominant principal direction of a point set (rows of equal width).
///
/// Power iteration on the centred points, starting from the first non-zero
/// centred row so the result is deterministic. The sign is normalized so the
/// largest-magnitude component is positive. Returns `None` when the points
/// have no variance.
pub fn principal_axis(points: &[Vec<f64>]) -> Option<Vec<f64>> {
    let dim = points.first()?.len();
    if dim == 0 || points.iter().any(|p| p.len() != dim) {
        return None;
    }

    let n = points.len() as f64;
    let mut mean = vec![0.0_f64; dim];
    for p in points {
        for (m, &x) in mean.iter_mut().zip(p) {
            *m += x / n;
        }
    }
    let centred: Vec<Vec<f64>> = points
        .iter()
        .map(|p| p.iter().zip(&mean).map(|(x, m)| x - m).collect())
        .collect();

    let start = centred.iter().find(|row| l2_norm(row) > f64::EPSILON)?;
    let mut v = normalized(start)?;

    for _ in 0..POWER_ITERATIONS {
        // w = X^T X v without materializing the D x D covariance
        let mut w = vec![0.0_f64; dim];
        for row in &centred {
            let weight = dot(row, &v);
            for (acc, &x) in w.iter_mut().zip(row) {
                *acc += weight * x;
            }
        }
        let next = normalized(&w)?;
        let converged = (1.0 - dot(&next, &v).abs()) < CONVERGENCE_EPSILON;
        v = next;
        if converged {
            break;
        }
    }

    let pivot = v
        .iter()
        .copied()
        .max_by(|a, b| a.abs().total_cmp(&b.abs()))
        .unwrap_or(0.0);
    if pivot < 0.0 {
        v.iter_mut().for_each(|x| *x = -*x);
    }
    Some(v)
}

/// Build the bias axis from the two expanded keyword sets.
pub fn build_axis(
    store: &EmbeddingStore,
    left_keywords: &BTreeSet<String>,
    right_keywords: &BTreeSet<String>,
) -> Result<BiasAxis, BiasError> {
    let (left, left_absent) = centroid(store, left_keywords);
    let (right, right_absent) = centroid(store, right_keywords);

    debug!(
        left_absent = left_absent,
        right_absent = right_absent,
        "Filtered keywords without vectors"
    );

    let (left, right) = match (left, right) {
        (Some(l), Some(r)) => (l, r),
        (None, None) => {
            return Err(BiasError::axis(
                "neither pole has any keyword in the embedding vocabulary",
            ))
        }
        (None, _) => {
            return Err(BiasError::axis(
                "left pole has no keyword in the embedding vocabulary",
            ))
        }
        (_, None) => {
            return Err(BiasError::axis(
                "right pole has no keyword in the embedding vocabulary",
            ))
        }
    };

    let direction = principal_axis(&[left.clone(), right.clone()])
        .ok_or_else(|| BiasError::axis("left and right centroids coincide"))?;
    let axis = BiasAxis::from_direction(direction)
        .ok_or_else(|| BiasError::axis("principal direction is degenerate"))?;

    let separation: Vec<f64> = right.iter().zip(&left).map(|(r, l)| r - l).collect();
    let flipped = dot(axis.as_slice(), &separation) < 0.0;
    let axis = if flipped { axis.negated() } else { axis };

    info!(
        dim = axis.dim(),
        left_keywords = left_keywords.len() - left_absent,
        right_keywords = right_keywords.len() - right_absent,
        flipped = flipped,
        "Built bias axis"
    );

    Ok(axis)
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn l2_norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

fn normalized(v: &[f64]) -> Option<Vec<f64>> {
    let norm = l2_norm(v);
    if norm < f64::EPSILON {
        return None;
    }
    Some(v.iter().map(|x| x / norm).collect())
}
