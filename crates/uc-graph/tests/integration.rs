//! Integration tests for uc-graph.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use uc_graph::{GraphBuilder, GraphError};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

/// Metric length chain plus a time chain, as a rule file would produce.
fn length_and_time() -> uc_graph::ConversionGraph {
    let mut builder = GraphBuilder::new();
    builder.add_rule("km", "m", dec("1000")).unwrap();
    builder.add_rule("m", "cm", dec("100")).unwrap();
    builder.add_rule("m", "mm", dec("1000")).unwrap();
    builder.add_rule("hour", "min", dec("60")).unwrap();
    builder.add_rule("min", "s", dec("60")).unwrap();
    builder.build()
}

#[test]
fn ratio_across_multi_hop_path() {
    let graph = length_and_time();
    let km = graph.vertex_by_label("km").unwrap();
    let mm = graph.vertex_by_label("mm").unwrap();

    // km -> m -> mm
    assert_eq!(graph.ratio_between(km, mm).unwrap(), dec("1000000"));
    assert_eq!(graph.ratio_between(mm, km).unwrap(), dec("0.000001"));
}

#[test]
fn ratio_round_trip_is_identity() {
    let graph = length_and_time();
    let hour = graph.vertex_by_label("hour").unwrap();
    let s = graph.vertex_by_label("s").unwrap();

    let forward = graph.ratio_between(hour, s).unwrap();
    let back = graph.ratio_between(s, hour).unwrap();
    // the walked path folds reciprocal-rounded weights, so compare at the
    // reporting precision
    let rounded = uc_core::decimal::round_half_up(forward.clone(), uc_core::decimal::REPORT_DIGITS);
    assert_eq!(rounded.normalized(), dec("3600"));

    // forward * back collapses to 1 at the reporting precision
    let product = uc_core::decimal::mul_half_up(&forward, &back, uc_core::decimal::REPORT_DIGITS);
    assert_eq!(product.normalized(), dec("1"));
}

#[test]
fn cross_component_queries_are_rejected_fast() {
    let graph = length_and_time();
    let km = graph.vertex_by_label("km").unwrap();
    let s = graph.vertex_by_label("s").unwrap();

    assert!(graph.find_edge(km, s).is_none());
    assert!(matches!(
        graph.ratio_between(km, s),
        Err(GraphError::NoPath { .. })
    ));
}

#[test]
fn decomposition_covers_every_vertex_exactly_once() {
    let graph = length_and_time();

    let mut seen = vec![0usize; graph.vertices().len()];
    for component in graph.components() {
        for &member in &component.members {
            seen[member.index()] += 1;
            assert_eq!(graph.component_of(member), component.id);
        }
    }
    assert!(seen.iter().all(|&count| count == 1));
}

#[test]
fn ratios_to_representative_are_consistent() {
    let graph = length_and_time();
    let km = graph.vertex_by_label("km").unwrap();
    let m = graph.vertex_by_label("m").unwrap();

    let component = &graph.components()[graph.component_of(km).index()];
    let rep = component.representative();

    // km->rep over m->rep must reproduce km->m, whichever vertex is the
    // representative in this build.
    let km_rep = graph.ratio_between(km, rep).unwrap();
    let m_rep = graph.ratio_between(m, rep).unwrap();
    let ratio = uc_core::decimal::div_half_up(&km_rep, &m_rep, uc_core::decimal::REPORT_DIGITS);
    assert_eq!(ratio.normalized(), dec("1000"));
}
