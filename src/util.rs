//! Small text helpers shared by both renderers.

/// Number of spaces per indent level.
pub const INDENT_WIDTH: usize = 2;

/// Prefix `src` with `depth` indent units.
///
/// Only the first line is indented. Multi-line input keeps whatever
/// indentation its later lines already carry, which is how nested bodies
/// end up correctly aligned inside their wrapping block.
///
/// # Examples
///
/// ```
/// use goss::indent_str;
///
/// assert_eq!(indent_str("color: red;", 2), "    color: red;");
/// assert_eq!(indent_str("a\nb", 1), "  a\nb");
/// ```
pub fn indent_str(src: &str, depth: usize) -> String {
    let mut out = String::with_capacity(depth * INDENT_WIDTH + src.len());
    for _ in 0..depth * INDENT_WIDTH {
        out.push(' ');
    }
    out.push_str(src);
    out
}

/// Whether a selector names the virtual root for class-naming purposes.
///
/// Both `""` and the literal `"root"` qualify. Only `""` also suppresses
/// brace wrapping.
#[inline]
pub fn is_root_like(selector: &str) -> bool {
    selector.is_empty() || selector == "root"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_str_zero_depth() {
        assert_eq!(indent_str("x: 1", 0), "x: 1");
    }

    #[test]
    fn test_indent_str_only_first_line() {
        assert_eq!(indent_str("a {\n  b\n}", 1), "  a {\n  b\n}");
    }

    #[test]
    fn test_is_root_like() {
        assert!(is_root_like(""));
        assert!(is_root_like("root"));
        assert!(!is_root_like(":root"));
        assert!(!is_root_like(".root"));
    }
}
