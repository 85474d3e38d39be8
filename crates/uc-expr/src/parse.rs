//! Unit expression parsing and normalization.
//!
//! Grammar: `expr := term ('/' term)?`, `term := '' | factor ('*' factor)*`,
//! `factor := unit | '1'`. Whitespace is insignificant anywhere. The empty
//! string and the literal `1` denote the dimensionless identity.

/// A unit expression split into numerator and denominator factors, plus
/// the canonical display text of each side (factors joined with `" * "`).
///
/// Empty factors (doubled or dangling separators) and the literal `1`
/// contribute nothing. Only the first `/` is a fraction bar; anything after
/// it belongs to the denominator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
    numerator: Vec<String>,
    denominator: Vec<String>,
    numerator_text: String,
    denominator_text: String,
}

impl ParsedExpression {
    pub fn parse(raw: &str) -> Self {
        let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let (numerator_raw, denominator_raw) = match stripped.split_once('/') {
            Some((numerator, denominator)) => (numerator, denominator),
            None => (stripped.as_str(), ""),
        };
        let numerator = split_factors(numerator_raw);
        let denominator = split_factors(denominator_raw);
        let numerator_text = numerator.join(" * ");
        let denominator_text = denominator.join(" * ");
        Self {
            numerator,
            denominator,
            numerator_text,
            denominator_text,
        }
    }

    /// Factors above the fraction bar.
    pub fn numerator(&self) -> &[String] {
        &self.numerator
    }

    /// Factors below the fraction bar.
    pub fn denominator(&self) -> &[String] {
        &self.denominator
    }

    /// Canonical display text of the numerator; empty for the identity.
    pub fn numerator_text(&self) -> &str {
        &self.numerator_text
    }

    /// Canonical display text of the denominator; empty when absent.
    pub fn denominator_text(&self) -> &str {
        &self.denominator_text
    }

    /// True for the dimensionless identity (`""` or `"1"`).
    pub fn is_identity(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty()
    }
}

fn split_factors(side: &str) -> Vec<String> {
    side.split('*')
        .filter(|token| !token.is_empty() && *token != "1")
        .map(str::to_owned)
        .collect()
}
