use serde::Serialize;

use gator_mechanics::{AttackRoll, CriticalCheck, Facing, HitLocation, TargetNumber};

use super::Session;
use super::args::ContextArgs;

#[derive(Serialize)]
struct AttackReport {
    target_number: TargetNumber,
    attack: AttackRoll,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<HitLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    critical: Option<CriticalCheck>,
}

pub fn run(
    session: &mut Session,
    args: &ContextArgs,
    facing: Option<Facing>,
    crit: bool,
) -> Result<(), String> {
    let tn = session.engine.compute_target_number(&args.to_context());
    let attack = session.engine.roll_attack(&tn);

    // Follow-up rolls only happen on a hit.
    let (location, critical) = if attack.hit {
        (
            facing.map(|f| session.engine.resolve_hit_location(f)),
            crit.then(|| session.engine.resolve_critical()),
        )
    } else {
        (None, None)
    };

    if session.json() {
        return session.print_json(&AttackReport {
            target_number: tn,
            attack,
            location,
            critical,
        });
    }

    super::tn::print_target_number(&tn);
    println!();
    println!(
        "  Roll: {} vs {}  {}",
        attack.roll,
        super::tn_label(&tn),
        super::hit_label(attack.hit)
    );
    if let Some(hit) = location {
        println!("  Location: {hit}");
    }
    if let Some(check) = critical {
        println!("  Critical: {check}");
    }
    Ok(())
}
