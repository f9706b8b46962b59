//! Similarity ranking of indexed passages against a query embedding

use std::cmp::Ordering;

use dqa_core::{Error, Result, ScoredMatch, VectorIndex};

/// Score every indexed passage against the query and return the top `k`
///
/// Pure function of its inputs. The sort is stable, so passages with equal
/// scores keep their index order and repeated queries against an unchanged
/// index return the same ranking. A corpus shorter than `k` returns all of
/// its records.
pub fn rank(query: &[f32], index: &VectorIndex, k: usize) -> Result<Vec<ScoredMatch>> {
    if query.len() != index.dimension() {
        return Err(Error::DimensionMismatch {
            expected: index.dimension(),
            actual: query.len(),
        });
    }

    let mut matches: Vec<ScoredMatch> = index
        .records()
        .iter()
        .map(|record| ScoredMatch {
            text: record.text.clone(),
            score: cosine_similarity(query, &record.values),
        })
        .collect();

    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    matches.truncate(k);

    Ok(matches)
}

/// Calculate cosine similarity between two vectors
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}
