use colored::Colorize;

use super::Session;

pub fn run(session: &mut Session) -> Result<(), String> {
    let check = session.engine.resolve_critical();
    if session.json() {
        return session.print_json(&check);
    }
    let line = check.to_string();
    let line = if check.critical_count == 0 {
        line.dimmed()
    } else {
        line.red().bold()
    };
    println!("  {line}");
    Ok(())
}
