//! Pluralization for log messages.

/// Return "s" suffix for plural counts
#[inline]
fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun: `1 mark`, `0 marks`, `5 marks`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "mark"), "0 marks");
        assert_eq!(plural_count(1, "mark"), "1 mark");
        assert_eq!(plural_count(12, "file"), "12 files");
    }
}
