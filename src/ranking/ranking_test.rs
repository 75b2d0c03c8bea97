use crate::ranking::{top1, top_k, LabelSet, RankedPrediction, RankingError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn labels(names: &[&str]) -> LabelSet {
    names.iter().copied().collect()
}

#[test]
fn test_top1_picks_highest_confidence() {
    let probabilities = [0.1, 0.05, 0.6, 0.2, 0.05];

    let prediction = top1(&probabilities, &labels(&["A", "B", "C", "D", "E"])).unwrap();

    assert_eq!(
        prediction,
        RankedPrediction {
            label: "C".to_string(),
            confidence: 0.6,
            rank: 1,
        }
    );
}

#[test]
fn test_top_k_is_sorted_by_descending_confidence() {
    let probabilities = [0.3, 0.01, 0.25, 0.9, 0.0, 0.44];
    let labels = labels(&["A", "B", "C", "D", "E", "F"]);

    let ranked = top_k(&probabilities, &labels, 6).unwrap();

    for pair in ranked.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
    let order: Vec<&str> = ranked.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(order, vec!["D", "F", "A", "C", "B", "E"]);
    let ranks: Vec<usize> = ranked.iter().map(|p| p.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_ties_break_by_original_index() {
    let probabilities = [0.2, 0.4, 0.2, 0.4, 0.2];
    let labels = labels(&["A", "B", "C", "D", "E"]);

    let first = top_k(&probabilities, &labels, 5).unwrap();
    let order: Vec<&str> = first.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(order, vec!["B", "D", "A", "C", "E"]);

    for _ in 0..10 {
        assert_eq!(top_k(&probabilities, &labels, 5).unwrap(), first);
    }
}

#[test]
fn test_top1_on_tie_returns_lowest_index() {
    let prediction = top1(&[0.5, 0.5], &labels(&["A", "B"])).unwrap();

    assert_eq!(prediction.label, "A");
}

#[test]
fn test_k_larger_than_vector_returns_every_entry() {
    let ranked = top_k(&[0.1, 0.7, 0.2], &labels(&["A", "B", "C"]), 10).unwrap();

    assert_eq!(ranked.len(), 3);
}

#[test]
fn test_top_three_of_bisindo() {
    let mut probabilities = vec![0.0; 26];
    probabilities[0] = 0.1;
    probabilities[7] = 0.5;
    probabilities[25] = 0.3;

    let ranked = top_k(&probabilities, &LabelSet::bisindo(), 3).unwrap();

    let order: Vec<&str> = ranked.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(order, vec!["H", "Z", "A"]);
}

#[test]
fn test_shape_mismatch() {
    let result = top_k(&[0.1, 0.9], &labels(&["A", "B", "C"]), 1);

    assert_eq!(
        result,
        Err(RankingError::ShapeMismatch {
            expected: 3,
            actual: 2,
        })
    );
    assert!(matches!(
        top1(&[0.1, 0.9], &labels(&["A"])),
        Err(RankingError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_empty_input() {
    assert_eq!(top1(&[], &labels(&[])), Err(RankingError::EmptyInput));
    assert_eq!(top1(&[], &labels(&["A"])), Err(RankingError::EmptyInput));
}

#[test]
fn test_zero_k_is_rejected() {
    assert_eq!(
        top_k(&[1.0], &labels(&["A"]), 0),
        Err(RankingError::InvalidK)
    );
}

#[test]
fn test_scores_are_not_normalized() {
    let ranked = top_k(&[3.5, -1.0, 12.0], &labels(&["A", "B", "C"]), 2).unwrap();

    assert_eq!(ranked[0].confidence, 12.0);
    assert_eq!(ranked[1].confidence, 3.5);
}

#[test]
fn test_nan_ranks_last() {
    let ranked = top_k(&[f32::NAN, 0.2, 0.1], &labels(&["A", "B", "C"]), 3).unwrap();

    let order: Vec<&str> = ranked.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(order, vec!["B", "C", "A"]);
}

#[test]
fn test_bisindo_labels() {
    let labels = LabelSet::bisindo();

    assert_eq!(labels.len(), 26);
    assert_eq!(labels.get(0), Some("A"));
    assert_eq!(labels.get(25), Some("Z"));
    assert_eq!(labels.get(26), None);
}

/// Scores drawn from a small pool so that ties are common.
fn random_scores(rng: &mut StdRng, len: usize) -> Vec<f32> {
    let pool = [0.0, 0.05, 0.1, 0.25, 0.5, 0.75, 1.0];
    (0..len)
        .map(|_| {
            if rng.random_bool(0.5) {
                pool[rng.random_range(0..pool.len())]
            } else {
                rng.random::<f32>()
            }
        })
        .collect()
}

fn indexed_labels(len: usize) -> LabelSet {
    (0..len).map(|i| i.to_string()).collect()
}

#[test]
fn test_random_vectors_rank_by_confidence_then_index() {
    let mut rng = StdRng::seed_from_u64(26);

    for _ in 0..500 {
        let len = rng.random_range(1..40);
        let mut scores = random_scores(&mut rng, len);
        // force at least one tie
        if len > 1 {
            let (a, b) = (rng.random_range(0..len), rng.random_range(0..len));
            scores[b] = scores[a];
        }
        let labels = indexed_labels(len);
        let k = rng.random_range(1..len + 5);

        let ranked = top_k(&scores, &labels, k).unwrap();

        assert_eq!(ranked.len(), k.min(len));
        for (position, prediction) in ranked.iter().enumerate() {
            assert_eq!(prediction.rank, position + 1);
            let index: usize = prediction.label.parse().unwrap();
            assert_eq!(prediction.confidence, scores[index]);
        }
        for pair in ranked.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
            if pair[0].confidence == pair[1].confidence {
                let first: usize = pair[0].label.parse().unwrap();
                let second: usize = pair[1].label.parse().unwrap();
                assert!(first < second);
            }
        }
        assert_eq!(top_k(&scores, &labels, k).unwrap(), ranked);
        assert_eq!(top1(&scores, &labels).unwrap(), ranked[0]);
    }
}

#[test]
fn test_k_equal_to_length_returns_every_entry() {
    let probabilities = [0.4, 0.1, 0.4, 0.1];
    let labels = labels(&["A", "B", "C", "D"]);

    let ranked = top_k(&probabilities, &labels, 4).unwrap();

    let order: Vec<&str> = ranked.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(order, vec!["A", "C", "B", "D"]);
}
