use core::fmt;

use crate::core::GrowableSequence;

/// Renders as `[a, b, c]`, each element through its own `Display`.
///
/// Nested sequences therefore render as nested bracket groups.
impl<T: fmt::Display> fmt::Display for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, item) in self.items().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn test_empty() {
        let sequence: GrowableSequence<i32> = GrowableSequence::new();
        assert_eq!(sequence.to_string(), "[]");
    }

    #[test]
    fn test_separator() {
        let sequence = GrowableSequence::from_items([1, 2, 3]);
        assert_eq!(sequence.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn test_unused_slots_not_rendered() {
        let mut sequence = GrowableSequence::from_items([1, 2, 3]);
        sequence.remove_at(2).unwrap();
        assert_eq!(sequence.to_string(), "[1, 2]");
    }

    #[test]
    fn test_debug_quotes_strings() {
        let sequence = GrowableSequence::from_items(["a", "b"]);
        assert_eq!(format!("{sequence:?}"), r#"["a", "b"]"#);
        assert_eq!(sequence.to_string(), "[a, b]");
    }
}
