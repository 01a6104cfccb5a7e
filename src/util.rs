// Small helpers shared by the movement code

/// Formats a CSS pixel number the way the browser prints it: `20`, `-5.5`, never `-0`.
pub fn fmt_px(v: f64) -> String {
    format!("{}", v + 0.0)
}

#[cfg(test)]
mod tests {
    use super::fmt_px;

    #[test]
    fn px_formatting() {
        assert_eq!(fmt_px(20.0), "20");
        assert_eq!(fmt_px(-5.5), "-5.5");
        assert_eq!(fmt_px(-0.0), "0");
    }
}
