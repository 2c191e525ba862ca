use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use gator_mechanics::TargetNumber;

use super::Session;
use super::args::ContextArgs;

pub fn run(session: &Session, args: &ContextArgs) -> Result<(), String> {
    let tn = session.engine.compute_target_number(&args.to_context());
    if session.json() {
        return session.print_json(&tn);
    }
    print_target_number(&tn);
    Ok(())
}

/// Breakdown table, the colored TN and the one-line sum.
pub(super) fn print_target_number(tn: &TargetNumber) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Modifier", "Value"]);
    for (label, value) in tn.breakdown.terms() {
        table.add_row(vec![label.to_string(), format!("{value:+}")]);
    }
    table.add_row(vec!["Total".to_string(), tn.raw_sum.to_string()]);

    println!("{table}");
    println!();
    println!(
        "  {} {}  {}",
        "Target number:".bold(),
        super::tn_label(tn),
        format!("({} tier)", tn.tier).dimmed()
    );
    println!("  Hit chance: {:.1}%", tn.hit_probability() * 100.0);
    println!("  {}", tn.explain().dimmed());
}
