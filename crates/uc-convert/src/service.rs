//! The user-facing conversion service.

use std::path::Path;

use bigdecimal::BigDecimal;
use uc_core::decimal;
use uc_expr::{ParsedExpression, evaluate};
use uc_graph::{ConversionGraph, GraphBuilder};

use crate::error::{ConvertError, ConvertResult};
use crate::rules::{self, Rule};

/// Immutable conversion service.
///
/// The graph is built once from the rule set; every `convert` call is a
/// pure function of the frozen graph and the two input strings, so any
/// number of calls may run concurrently. Rule updates mean constructing a
/// new service and swapping it in.
pub struct ConversionService {
    graph: ConversionGraph,
}

impl ConversionService {
    /// Build the conversion graph from a rule set.
    ///
    /// Every rule adds both endpoint vertices (if new) and a reciprocal
    /// edge pair, in file order.
    pub fn new(rules: &[Rule]) -> ConvertResult<Self> {
        let mut builder = GraphBuilder::new();
        for rule in rules {
            builder.add_rule(&rule.from, &rule.to, rule.ratio.clone())?;
        }
        let graph = builder.build();
        tracing::debug!(
            vertices = graph.vertices().len(),
            components = graph.components().len(),
            "conversion service ready"
        );
        Ok(Self { graph })
    }

    /// Load a `from,to,ratio` rule file and build the service from it.
    pub fn from_csv_path(path: &Path) -> ConvertResult<Self> {
        Self::new(&rules::load_rules(path)?)
    }

    /// The underlying frozen graph.
    pub fn graph(&self) -> &ConversionGraph {
        &self.graph
    }

    /// Raw conversion ratio: how many units of `to` make up 1 `from`.
    ///
    /// Rounded to 15 significant digits, half-up, trailing zeros stripped.
    pub fn convert_ratio(&self, from: &str, to: &str) -> ConvertResult<BigDecimal> {
        let from_expr = ParsedExpression::parse(from);
        let to_expr = ParsedExpression::parse(to);
        self.ratio_of(&from_expr, &to_expr)
    }

    /// Formatted report: `"1 <from> = <ratio> <to>"`, with the normalized
    /// expression texts and empty sides omitted.
    pub fn convert(&self, from: &str, to: &str) -> ConvertResult<String> {
        let from_expr = ParsedExpression::parse(from);
        let to_expr = ParsedExpression::parse(to);
        let ratio = self.ratio_of(&from_expr, &to_expr)?;

        let mut out = String::from("1");
        push_side(&mut out, &from_expr);
        out.push_str(" = ");
        out.push_str(&ratio.to_plain_string());
        push_side(&mut out, &to_expr);
        Ok(out)
    }

    fn ratio_of(
        &self,
        from: &ParsedExpression,
        to: &ParsedExpression,
    ) -> ConvertResult<BigDecimal> {
        let lhs = evaluate(from, &self.graph)?;
        let rhs = evaluate(to, &self.graph)?;
        if !lhs.has_equal_powers(&rhs) {
            return Err(ConvertError::UnableToConvert);
        }
        let ratio = decimal::div_half_up(lhs.ratio(), rhs.ratio(), decimal::REPORT_DIGITS);
        Ok(ratio.normalized())
    }
}

fn push_side(out: &mut String, expr: &ParsedExpression) {
    if !expr.numerator_text().is_empty() {
        out.push(' ');
        out.push_str(expr.numerator_text());
    }
    if !expr.denominator_text().is_empty() {
        out.push_str(" / ");
        out.push_str(expr.denominator_text());
    }
}
