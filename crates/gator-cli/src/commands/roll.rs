use colored::Colorize;

use gator_mechanics::DiceExpr;

use super::Session;

pub fn run(session: &mut Session, expr: &str) -> Result<(), String> {
    let expr = expr.parse::<DiceExpr>().map_err(|e| e.to_string())?;
    let roll = session.engine.roll_expression(&expr);
    if session.json() {
        return session.print_json(&roll);
    }
    println!("  {} {}", "Roll:".bold(), roll);
    println!("  {} {}", "Total:".bold(), roll.total.to_string().cyan().bold());
    Ok(())
}
