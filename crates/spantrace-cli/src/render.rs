// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Terminal rendering of traces and comparisons.

use colored::*;
use prettytable::{Cell, Row, Table};
use spantrace_algo::{AlgorithmKind, Comparison, MstResult, Step};

fn decision_text(step: &Step) -> String {
    if step.accepted {
        "added".to_string()
    } else {
        format!("skipped ({})", step.reason.note())
    }
}

pub fn print_trace(result: &MstResult) {
    println!();
    println!(
        "{} {}",
        result.algorithm.title().bold(),
        format!("(cost: {})", result.total_cost).cyan()
    );
    println!("  {}", result.preamble());

    if result.steps.is_empty() {
        println!("  No edges to consider.");
        return;
    }

    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("#").style_spec("bf"),
        Cell::new("Edge").style_spec("bf"),
        Cell::new("Weight").style_spec("bf"),
        Cell::new("Decision").style_spec("bf"),
        Cell::new("Running Cost").style_spec("bf"),
    ]));

    for step in &result.steps {
        let color = if step.accepted { "Fg" } else { "Fr" };
        let decision = Cell::new(&decision_text(step)).style_spec(color);
        table.add_row(Row::new(vec![
            Cell::new(&(step.index + 1).to_string()),
            Cell::new(&step.edge.label()),
            Cell::new(&step.edge.weight.to_string()),
            decision,
            Cell::new(&step.running_cost.to_string()),
        ]));
    }
    table.printstd();

    let tree: Vec<String> = result.mst_edges.iter().map(|e| e.label()).collect();
    println!("  MST: {}", tree.join(", "));
}

pub fn print_agreement(prim: &MstResult, kruskal: &MstResult) {
    println!();
    if prim.same_cost(kruskal) {
        println!(
            "{} both algorithms found cost {}",
            "Agree:".green(),
            prim.total_cost
        );
    } else {
        println!(
            "{} prim cost {} vs kruskal cost {}",
            "Mismatch:".red(),
            prim.total_cost,
            kruskal.total_cost
        );
    }
    if !prim.same_tree(kruskal) {
        println!(
            "{} edge selections differ (equal-weight ties)",
            "Note:".yellow()
        );
    }
}

pub fn print_comparison(comparison: &Comparison) {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("").style_spec("bf"),
        Cell::new(AlgorithmKind::Prim.title()).style_spec("bf"),
        Cell::new(AlgorithmKind::Kruskal.title()).style_spec("bf"),
    ]));

    let (prim, kruskal) = (&comparison.prim, &comparison.kruskal);
    let rows = [
        (
            "Total cost",
            prim.total_cost.to_string(),
            kruskal.total_cost.to_string(),
        ),
        (
            "Steps",
            prim.steps.len().to_string(),
            kruskal.steps.len().to_string(),
        ),
        (
            "Rejected",
            prim.rejected_count().to_string(),
            kruskal.rejected_count().to_string(),
        ),
        (
            "Tree",
            edge_list(prim),
            edge_list(kruskal),
        ),
    ];
    for (label, p, k) in rows {
        table.add_row(Row::new(vec![
            Cell::new(label).style_spec("b"),
            Cell::new(&p),
            Cell::new(&k),
        ]));
    }
    table.printstd();

    let verdict = if comparison.costs_match {
        "costs match".green()
    } else {
        "costs differ".red()
    };
    let tree = if comparison.same_tree {
        "same tree"
    } else {
        "different trees of equal cost"
    };
    println!("{}, {}", verdict, tree);
}

pub fn print_profiles() {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Aspect").style_spec("bf"),
        Cell::new(AlgorithmKind::Prim.title()).style_spec("bfb"),
        Cell::new(AlgorithmKind::Kruskal.title()).style_spec("bfg"),
    ]));

    let prim = AlgorithmKind::Prim.profile().rows();
    let kruskal = AlgorithmKind::Kruskal.profile().rows();
    for ((aspect, p), (_, k)) in prim.into_iter().zip(kruskal) {
        table.add_row(Row::new(vec![
            Cell::new(aspect),
            Cell::new(p),
            Cell::new(k),
        ]));
    }
    table.printstd();
}

fn edge_list(result: &MstResult) -> String {
    result
        .mst_edges
        .iter()
        .map(|e| e.label())
        .collect::<Vec<_>>()
        .join(" ")
}
