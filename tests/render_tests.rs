use std::fmt::Display;

use growseq::{growseq, GrowableSequence};

#[test]
fn test_empty_renders_brackets() {
    let numbers: GrowableSequence<u64> = GrowableSequence::new();
    assert_eq!(numbers.to_string(), "[]");
}

#[test]
fn test_nested_sequences() {
    let names = growseq!["Teddy", "Gerry"];
    let numbers = growseq![10, 20];
    let dates: GrowableSequence<String> = GrowableSequence::new();

    let nested: GrowableSequence<Box<dyn Display>> = growseq![
        Box::new(names) as Box<dyn Display>,
        Box::new(numbers) as Box<dyn Display>,
        Box::new(dates) as Box<dyn Display>,
    ];

    assert_eq!(nested.to_string(), "[[Teddy, Gerry], [10, 20], []]");
}

#[test]
fn test_homogeneous_nesting() {
    let grid = growseq![growseq![1, 2], growseq![3, 4], GrowableSequence::new()];
    assert_eq!(grid.to_string(), "[[1, 2], [3, 4], []]");
}

#[test]
fn test_deep_nesting() {
    let deep = growseq![growseq![growseq!['a'], growseq![]], growseq![growseq!['b', 'c']]];
    assert_eq!(deep.to_string(), "[[[a], []], [[b, c]]]");
}

#[test]
fn test_large_rendering() {
    let mut numbers = GrowableSequence::new();
    numbers.add_range(1000..3000);

    let expected = format!(
        "[{}]",
        (1000..3000).map(|n| n.to_string()).collect::<Vec<_>>().join(", ")
    );
    assert_eq!(numbers.to_string(), expected);
}

#[test]
fn test_debug_rendering() {
    let words = growseq!["x".to_string(), "y".to_string()];
    assert_eq!(format!("{words:?}"), r#"["x", "y"]"#);
}
