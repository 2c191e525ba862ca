use colored::Colorize;

use gator_mechanics::Facing;

use super::Session;

pub fn run(session: &mut Session, facing: Facing) -> Result<(), String> {
    let hit = session.engine.resolve_hit_location(facing);
    if session.json() {
        return session.print_json(&hit);
    }
    println!(
        "  {} {}  {}",
        "Location:".bold(),
        hit.label().cyan().bold(),
        format!("({facing}, 2d6={})", hit.roll).dimmed()
    );
    Ok(())
}
