//! End-to-end: hinge gradients → node statistics → split scoring.
//!
//! The split scan here stands in for a tree grower: it sorts samples by one
//! feature, evaluates every threshold with the configured term, and picks
//! the best one. Candidates are scored in parallel against one shared term.

use std::sync::Arc;

use rayon::prelude::*;

use tree_omega::testing::DEFAULT_TOLERANCE;
use tree_omega::{
    assert_approx_eq, GradStats, Gradients, HingeLoss, ObjectiveFn, RegularizationTerm,
    TreeOmegaConfig,
};

struct Candidate {
    threshold_idx: usize,
    gain: f64,
}

/// Prefix sums of gradient statistics in feature order.
fn prefix_stats(gradients: &Gradients, order: &[u32]) -> Vec<GradStats> {
    order
        .iter()
        .scan(GradStats::default(), |acc, &row| {
            let (g, h) = gradients.get(row as usize, 0);
            acc.add_pair(g, h);
            Some(*acc)
        })
        .collect()
}

fn best_split(term: &Arc<dyn RegularizationTerm>, prefix: &[GradStats]) -> Candidate {
    let total = *prefix.last().unwrap();
    (0..prefix.len() - 1)
        .into_par_iter()
        .map(|i| {
            let left = prefix[i];
            let right = total - left;
            Candidate {
                threshold_idx: i,
                gain: term.calc_split_gain(left, right),
            }
        })
        .max_by(|a, b| a.gain.total_cmp(&b.gain))
        .unwrap()
}

/// One feature whose lower half is negative and upper half positive.
fn separable_problem() -> (Vec<f32>, Vec<f32>) {
    let feature: Vec<f32> = (0..16).map(|i| i as f32).collect();
    let labels: Vec<f32> = feature.iter().map(|&x| if x >= 8.0 { 1.0 } else { 0.0 }).collect();
    (feature, labels)
}

fn hinge_gradients(labels: &[f32]) -> Gradients {
    let objective = HingeLoss;
    let mut gradients = Gradients::new(labels.len(), 1);
    let base = objective.compute_base_score(labels, &[]);
    let predictions = vec![base[0]; labels.len()];
    objective.compute_gradients(&predictions, labels, &[], &mut gradients);
    gradients
}

#[test]
fn split_separates_classes() {
    let (feature, labels) = separable_problem();
    let gradients = hinge_gradients(&labels);

    let mut order: Vec<u32> = (0..feature.len() as u32).collect();
    order.sort_by(|&a, &b| feature[a as usize].total_cmp(&feature[b as usize]));
    let prefix = prefix_stats(&gradients, &order);

    let config = TreeOmegaConfig::builder()
        .name("weight_decay")
        .params([("reg_lambda", "1.0"), ("reg_gamma", "0.5")])
        .build()
        .unwrap();
    let term = config.build_term().unwrap();

    let best = best_split(&term, &prefix);
    assert_eq!(best.threshold_idx, 7);

    // Left: eight negatives at margin 0 → grad +1 each; right: grad -1 each.
    let left = prefix[7];
    let right = *prefix.last().unwrap() - left;
    assert_eq!(left, GradStats::new(8.0, 8.0));
    assert_eq!(right, GradStats::new(-8.0, 8.0));

    assert_approx_eq!(best.gain, 2.0 * (64.0 / 9.0 - 0.5), DEFAULT_TOLERANCE);
    assert_approx_eq!(term.calc_weight(left), -8.0 / 9.0, DEFAULT_TOLERANCE);
    assert_approx_eq!(term.calc_weight(right), 8.0 / 9.0, DEFAULT_TOLERANCE);

    // The root alone has no gradient signal.
    let root = gradients.sum(0, None);
    assert_eq!(root, GradStats::new(0.0, 16.0));
    assert_approx_eq!(term.calc_gain(root), -0.5, DEFAULT_TOLERANCE);
}

#[test]
fn leaf_weights_move_predictions_towards_labels() {
    let (_, labels) = separable_problem();
    let gradients = hinge_gradients(&labels);

    let term = TreeOmegaConfig::builder()
        .name("no_regularization")
        .build()
        .unwrap()
        .build_term()
        .unwrap();

    let negatives: Vec<u32> = (0..8).collect();
    let positives: Vec<u32> = (8..16).collect();
    let mut predictions = vec![0.0f32; labels.len()];
    for rows in [&negatives, &positives] {
        let weight = term.calc_weight(gradients.sum(0, Some(rows.as_slice()))) as f32;
        for &row in rows.iter() {
            predictions[row as usize] += weight;
        }
    }

    HingeLoss.transform_predictions_inplace(&mut predictions);
    assert_eq!(predictions, labels);
}

#[test]
fn shared_term_gives_identical_results_across_threads() {
    let term = TreeOmegaConfig::builder()
        .params([("lambda", "0.3"), ("gamma", "0.1")])
        .build()
        .unwrap()
        .build_term()
        .unwrap();

    let stats: Vec<(GradStats, GradStats)> = (0..1000)
        .map(|i| {
            let x = i as f64 * 0.01;
            (GradStats::new(x.sin(), 1.0 + x), GradStats::new(-x.cos(), 0.5 + x))
        })
        .collect();

    let sequential: Vec<f64> = stats
        .iter()
        .map(|&(l, r)| term.calc_split_gain(l, r))
        .collect();
    let parallel: Vec<f64> = stats
        .par_iter()
        .map(|&(l, r)| term.calc_split_gain(l, r))
        .collect();

    assert_eq!(sequential, parallel);
}
