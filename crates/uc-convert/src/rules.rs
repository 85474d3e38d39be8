//! Conversion rule model and the flat CSV loader.

use std::path::Path;

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};

/// One conversion rule: 1 unit of `from` equals `ratio` units of `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub from: String,
    pub to: String,
    pub ratio: BigDecimal,
}

/// Parse `from,to,ratio` records, one per line.
///
/// Blank lines are skipped. A malformed row, an unparsable ratio or a
/// non-positive ratio aborts the whole load: a partially applied rule set
/// would leave the graph half-built. Labels are taken verbatim
/// (case-sensitive); fields beyond the third are ignored. Repeated rules
/// between the same pair are kept: they become additional edges, and path
/// resolution uses whichever comes first in insertion order.
pub fn parse_rules(input: &str) -> ConvertResult<Vec<Rule>> {
    let mut rules = Vec::new();
    for (idx, raw_line) in input.lines().enumerate() {
        let line = idx + 1;
        let row = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if row.is_empty() {
            continue;
        }

        let mut fields = row.split(',');
        let (Some(from), Some(to), Some(ratio)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(ConvertError::InvalidRule {
                line,
                reason: format!("expected from,to,ratio, got {row:?}"),
            });
        };
        if from.is_empty() || to.is_empty() {
            return Err(ConvertError::InvalidRule {
                line,
                reason: "empty unit label".into(),
            });
        }

        let ratio: BigDecimal = ratio.parse().map_err(|err| ConvertError::InvalidRule {
            line,
            reason: format!("bad ratio {ratio:?}: {err}"),
        })?;
        if ratio <= BigDecimal::zero() {
            return Err(ConvertError::InvalidRule {
                line,
                reason: format!("ratio must be positive, got {ratio}"),
            });
        }

        rules.push(Rule {
            from: from.to_owned(),
            to: to.to_owned(),
            ratio,
        });
    }
    Ok(rules)
}

/// Read a rule file from disk.
pub fn load_rules(path: &Path) -> ConvertResult<Vec<Rule>> {
    let content = std::fs::read_to_string(path)?;
    let rules = parse_rules(&content)?;
    tracing::info!(path = %path.display(), rules = rules.len(), "loaded conversion rules");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_rows_in_file_order() {
        let rules = parse_rules("km,m,1000\nhour,s,3600\n").unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].from, "km");
        assert_eq!(rules[0].to, "m");
        assert_eq!(rules[0].ratio, BigDecimal::from_str("1000").unwrap());
        assert_eq!(rules[1].from, "hour");
    }

    #[test]
    fn skips_blank_lines_and_crlf() {
        let rules = parse_rules("km,m,1000\r\n\r\nhour,s,3600\r\n").unwrap();
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn rejects_missing_fields() {
        let err = parse_rules("km,m\n").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidRule { line: 1, .. }));
    }

    #[test]
    fn rejects_unparsable_ratio() {
        let err = parse_rules("km,m,1000\nkm,m,abc\n").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidRule { line: 2, .. }));
    }

    #[test]
    fn rejects_non_positive_ratio() {
        assert!(matches!(
            parse_rules("km,m,0\n").unwrap_err(),
            ConvertError::InvalidRule { line: 1, .. }
        ));
        assert!(matches!(
            parse_rules("km,m,-5\n").unwrap_err(),
            ConvertError::InvalidRule { line: 1, .. }
        ));
    }

    #[test]
    fn decimal_ratios_are_kept_exact() {
        let rules = parse_rules("inch,cm,2.54\n").unwrap();
        assert_eq!(rules[0].ratio, BigDecimal::from_str("2.54").unwrap());
    }
}
