use colored::Colorize;
use serde::Serialize;

use gator_mechanics::{ClusterHits, ClusterModifiers, MissileType};

use super::Session;
use super::args::ClusterArgs;

#[derive(Serialize)]
struct ClusterReport {
    cluster: ClusterHits,
    missile: MissileType,
    damage: u32,
    modifiers: ClusterModifiers,
    modifier_total: i32,
}

pub fn run(session: &mut Session, args: &ClusterArgs) -> Result<(), String> {
    let modifiers = args.modifiers();
    let cluster = session
        .engine
        .resolve_cluster(args.size, modifiers.total(), args.streak)
        .map_err(|e| e.to_string())?;
    let damage = cluster.damage(args.missile);

    if session.json() {
        return session.print_json(&ClusterReport {
            cluster,
            missile: args.missile,
            damage,
            modifiers,
            modifier_total: modifiers.total(),
        });
    }

    let launcher = if args.streak {
        format!("Streak {}-{}", args.missile, args.size)
    } else {
        format!("{}-{}", args.missile, args.size)
    };
    println!(
        "  {} {}  {}",
        launcher.bold(),
        cluster.to_string().cyan().bold(),
        format!("{damage} damage").yellow()
    );

    let labels = modifiers.labels();
    if !labels.is_empty() && !args.streak {
        println!("  {}", format!("mods: {}", labels.join(", ")).dimmed());
    }
    Ok(())
}
