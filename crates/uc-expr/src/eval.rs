//! Expression evaluation against the conversion graph.

use std::collections::BTreeMap;

use bigdecimal::{BigDecimal, One};
use uc_core::ComponentId;
use uc_core::decimal;
use uc_graph::ConversionGraph;

use crate::error::{ExprError, ExprResult};
use crate::parse::ParsedExpression;

/// Net signed exponent per graph component: the dimensional signature of
/// an expression. Components whose powers cancel out are pruned, so a
/// fully cancelled axis (e.g. `km/km`) never blocks compatibility checks.
pub type PowerProfile = BTreeMap<ComponentId, i32>;

/// Result of folding an expression over the graph: the power profile plus
/// the value of 1 unit of the expression relative to the component
/// representatives it touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    powers: PowerProfile,
    ratio: BigDecimal,
}

impl Evaluation {
    pub fn powers(&self) -> &PowerProfile {
        &self.powers
    }

    pub fn ratio(&self) -> &BigDecimal {
        &self.ratio
    }

    /// Exact dimensional equality: same components, same signed powers.
    /// Commutative and reflexive by construction.
    pub fn has_equal_powers(&self, other: &Evaluation) -> bool {
        self.powers == other.powers
    }
}

enum Side {
    Numerator,
    Denominator,
}

/// Fold every factor of `expr` into a power profile and a running ratio.
///
/// Numerator factors add +1 to their component's power and multiply the
/// ratio by the factor's ratio to the component representative; denominator
/// factors subtract 1 and divide. Folding runs at 15 significant digits,
/// half-up. Accumulation is strictly sequential so the per-step rounding
/// order stays deterministic.
pub fn evaluate(expr: &ParsedExpression, graph: &ConversionGraph) -> ExprResult<Evaluation> {
    let mut powers = PowerProfile::new();
    let mut ratio = BigDecimal::one();

    for unit in expr.numerator() {
        ratio = fold_factor(unit, graph, &mut powers, ratio, Side::Numerator)?;
    }
    for unit in expr.denominator() {
        ratio = fold_factor(unit, graph, &mut powers, ratio, Side::Denominator)?;
    }

    Ok(Evaluation { powers, ratio })
}

fn fold_factor(
    unit: &str,
    graph: &ConversionGraph,
    powers: &mut PowerProfile,
    ratio: BigDecimal,
    side: Side,
) -> ExprResult<BigDecimal> {
    let vertex = graph
        .vertex_by_label(unit)
        .ok_or_else(|| ExprError::UnknownUnit {
            unit: unit.to_owned(),
        })?;
    let component = graph.component_of(vertex);
    let representative = graph.components()[component.index()].representative();
    // within a component a path always exists
    let unit_ratio = graph.ratio_between(vertex, representative)?;

    let delta = match side {
        Side::Numerator => 1,
        Side::Denominator => -1,
    };
    let power = powers.entry(component).or_insert(0);
    *power += delta;
    if *power == 0 {
        powers.remove(&component);
    }

    Ok(match side {
        Side::Numerator => decimal::mul_half_up(&ratio, &unit_ratio, decimal::REPORT_DIGITS),
        Side::Denominator => decimal::div_half_up(&ratio, &unit_ratio, decimal::REPORT_DIGITS),
    })
}
