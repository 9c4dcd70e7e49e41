use transeval::{EvalConfig, Evaluator, SimilarityConfig, SimilarityMode, TextPair};

fn corpus() -> Vec<TextPair> {
    vec![
        TextPair::new("The cat sat on the mat", "A cat was sitting on the mat"),
        TextPair::new("The cat sat on the mat", "An airplane flew across the sky"),
        TextPair::new(
            "The quick brown fox jumps over the lazy dog",
            "The quick brown fox jumps",
        ),
        TextPair::new("Short sentence for testing", "Short sentence"),
        TextPair::new("", ""),
        TextPair::new("Привет, как дела?", "Привет, как у тебя дела?"),
    ]
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let evaluator = Evaluator::default();
    for pair in corpus() {
        let first = evaluator.evaluate(&pair);
        let second = evaluator.evaluate(&pair);
        assert_eq!(first, second, "pair {pair:?} changed between runs");
        assert_eq!(
            first.precision_brevity.to_bits(),
            second.precision_brevity.to_bits()
        );
        assert_eq!(first.semantic.to_bits(), second.semantic.to_bits());
    }
}

#[test]
fn separate_evaluators_agree() {
    // Fresh evaluators re-run strategy selection; the outcome must not drift.
    let pairs = corpus();
    let a = Evaluator::new(EvalConfig::default()).evaluate_batch(&pairs);
    let b = Evaluator::new(EvalConfig::default()).evaluate_batch(&pairs);
    assert_eq!(a, b);
}

#[test]
fn whitespace_layout_does_not_change_scores() {
    let evaluator = Evaluator::new(EvalConfig {
        similarity: SimilarityConfig {
            mode: SimilarityMode::Jaccard,
            ..Default::default()
        },
        ..Default::default()
    });
    let tidy = evaluator.evaluate(&TextPair::new("hello world again", "hello there world"));
    let messy = evaluator.evaluate(&TextPair::new(
        "  hello\tworld\n again ",
        "hello   there\u{00A0}world",
    ));
    assert_eq!(tidy, messy);
}

#[test]
fn sequential_and_parallel_batches_match() {
    let pairs: Vec<TextPair> = corpus().into_iter().cycle().take(120).collect();
    let sequential = Evaluator::default().evaluate_batch(&pairs);
    let parallel = Evaluator::new(EvalConfig {
        use_parallel: true,
        ..Default::default()
    })
    .evaluate_batch(&pairs);
    assert_eq!(sequential, parallel);
}
