//! Fixed-precision rendering of a metrics report.

use crate::record::{MetricValue, Number, Report};

/// Number rendering configuration.
///
/// Stands in for process-global locale state: built once, usually from the
/// environment at startup, and passed by reference into every formatting
/// call. Only thousands grouping and the decimal point are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Separator inserted between groups of three integer digits. `None`
    /// disables grouping, matching the `C` locale.
    pub thousands_sep: Option<char>,
    /// Character between the integer and fractional parts.
    pub decimal_point: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands_sep: Some(','),
            decimal_point: '.',
        }
    }
}

impl NumberFormat {
    /// Derives the configuration from the process environment.
    ///
    /// Checks `LC_ALL`, then `LC_NUMERIC`, then `LANG`, taking the first one
    /// set to a non-empty value. `C`, `POSIX` and an entirely unset locale
    /// disable grouping; a handful of common European locales swap the
    /// separator and the decimal point; everything else gets the default
    /// `1,234,567.89` rendering.
    #[must_use]
    pub fn from_env() -> Self {
        let tag = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.is_empty());
        match tag.as_deref() {
            None | Some("C" | "POSIX") => Self {
                thousands_sep: None,
                decimal_point: '.',
            },
            Some(tag) => {
                let lang = tag.split(['_', '.', '@']).next().unwrap_or(tag);
                match lang {
                    "de" | "es" | "it" | "nl" | "pt" => Self {
                        thousands_sep: Some('.'),
                        decimal_point: ',',
                    },
                    "fr" | "ru" => Self {
                        thousands_sep: Some(' '),
                        decimal_point: ',',
                    },
                    _ => Self::default(),
                }
            }
        }
    }

    /// Renders an integer with thousands grouping.
    #[must_use]
    pub fn integer(&self, value: i64) -> String {
        self.group_digits(&value.to_string())
    }

    /// Renders a float to exactly five decimal places, with thousands
    /// grouping applied to the integer part.
    #[must_use]
    pub fn float(&self, value: f64) -> String {
        let rendered = format!("{value:.5}");
        // NaN and the infinities carry no decimal point.
        let Some((int_part, frac_part)) = rendered.split_once('.') else {
            return rendered;
        };
        let mut out = self.group_digits(int_part);
        out.push(self.decimal_point);
        out.push_str(frac_part);
        out
    }

    fn group_digits(&self, rendered: &str) -> String {
        let Some(sep) = self.thousands_sep else {
            return rendered.to_string();
        };
        let (sign, digits) = match rendered.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rendered),
        };
        let mut out = String::with_capacity(rendered.len() + digits.len() / 3);
        out.push_str(sign);
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                out.push(sep);
            }
            out.push(c);
        }
        out
    }
}

/// Renders a report into a line-per-metric string.
///
/// Each entry becomes one `"<name>: <value>\n"` line, in the report's
/// iteration order, with no sorting.
#[must_use]
pub fn format_debug_string(report: &Report, fmt: &NumberFormat) -> String {
    let mut out = String::new();
    for (name, value) in report.iter() {
        let rendered = match value {
            MetricValue::Float(v) => fmt.float(*v),
            MetricValue::Int(v) => fmt.integer(*v),
            MetricValue::Seq(items) => render_sequence(items, fmt),
            MetricValue::Text(text) => text.clone(),
        };
        out.push_str(name);
        out.push_str(": ");
        out.push_str(&rendered);
        out.push('\n');
    }
    out
}

// Float elements get the fixed five-decimal rendering; other elements fall
// back to their default conversion plus a separator, stripped again if it
// ends up dangling before the closing bracket.
fn render_sequence(items: &[Number], fmt: &NumberFormat) -> String {
    let rendered: Vec<String> = items
        .iter()
        .map(|item| match item {
            Number::Float(v) => fmt.float(*v),
            Number::Int(v) => format!("{v},"),
        })
        .collect();
    let mut joined = rendered.join(" ");
    if joined.ends_with(',') {
        joined.pop();
    }
    format!("[{joined}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_round_to_five_decimals() {
        let mut report = Report::new();
        report.insert("a", 3.141_592_65_f64);
        assert_eq!(
            format_debug_string(&report, &NumberFormat::default()),
            "a: 3.14159\n"
        );
    }

    #[test]
    fn integers_get_thousands_grouping() {
        let mut report = Report::new();
        report.insert("b", 1_234_567_i64);
        assert_eq!(
            format_debug_string(&report, &NumberFormat::default()),
            "b: 1,234,567\n"
        );
    }

    #[test]
    fn float_sequence_has_no_stray_separator() {
        let mut report = Report::new();
        report.insert("c", vec![1.0_f64, 2.5]);
        assert_eq!(
            format_debug_string(&report, &NumberFormat::default()),
            "c: [1.00000 2.50000]\n"
        );
    }

    #[test]
    fn integer_sequence_keeps_interior_separators() {
        let mut report = Report::new();
        report.insert("steps", vec![1_i64, 2, 3]);
        assert_eq!(
            format_debug_string(&report, &NumberFormat::default()),
            "steps: [1, 2, 3]\n"
        );
    }

    #[test]
    fn mixed_sequence_only_strips_a_trailing_separator() {
        let mut report = Report::new();
        report.insert(
            "mixed",
            MetricValue::Seq(vec![Number::Int(2), Number::Float(1.5)]),
        );
        assert_eq!(
            format_debug_string(&report, &NumberFormat::default()),
            "mixed: [2, 1.50000]\n"
        );
    }

    #[test]
    fn negative_values_keep_their_sign() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.integer(-1_234_567), "-1,234,567");
        assert_eq!(fmt.float(-0.5), "-0.50000");
    }

    #[test]
    fn large_floats_group_the_integer_part() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.float(1_234_567.5), "1,234,567.50000");
    }

    #[test]
    fn c_locale_disables_grouping() {
        let fmt = NumberFormat {
            thousands_sep: None,
            decimal_point: '.',
        };
        assert_eq!(fmt.integer(1_234_567), "1234567");
        assert_eq!(fmt.float(1_234_567.5), "1234567.50000");
    }

    #[test]
    fn european_format_swaps_separators() {
        let fmt = NumberFormat {
            thousands_sep: Some('.'),
            decimal_point: ',',
        };
        assert_eq!(fmt.integer(1_234_567), "1.234.567");
        assert_eq!(fmt.float(1_234_567.5), "1.234.567,50000");
    }

    #[test]
    fn text_values_fall_through_unchanged() {
        let mut report = Report::new();
        report.insert("status", "collecting");
        assert_eq!(
            format_debug_string(&report, &NumberFormat::default()),
            "status: collecting\n"
        );
    }

    #[test]
    fn non_finite_floats_render_without_grouping() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.float(f64::NAN), "NaN");
        assert_eq!(fmt.float(f64::INFINITY), "inf");
    }

    #[test]
    fn from_env_prefers_lc_all_and_understands_posix() {
        std::env::set_var("LC_ALL", "C");
        std::env::set_var("LANG", "de_DE.UTF-8");
        assert_eq!(NumberFormat::from_env().thousands_sep, None);

        std::env::set_var("LC_ALL", "de_DE.UTF-8");
        let fmt = NumberFormat::from_env();
        assert_eq!(fmt.thousands_sep, Some('.'));
        assert_eq!(fmt.decimal_point, ',');

        std::env::remove_var("LC_ALL");
        std::env::remove_var("LANG");
    }
}
