//! priest: the chapel routine on the rust_ua decision engine.
//!
//! A priest walks to the altar and says prayers, over and over.  Each
//! finished prayer scores a point for the chapel; the game ends when it
//! reaches `WINNING_SCORE`.  A thief and a villager share the graph: the only
//! root open to them is the unimplemented "cure poison" goal, so both are
//! faulted at start-up and stay put.
//!
//! Usage:
//!
//! ```text
//! priest [config.json]
//! RUST_LOG=debug priest
//! ```
//!
//! The optional JSON file is a `SimConfig`; missing fields keep their
//! defaults.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ua_agent::{NpcStatus, NpcStore, NpcStoreBuilder};
use ua_core::{AgentKind, KindSet, PlayerId, SimConfig, Tick, Vec3};
use ua_events::{GameEvent, GameEventKind};
use ua_sim::{SimBuilder, SimObserver};
use ua_utility::{Goal, UtilityDef, UtilityGraph, UtilityGraphBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64 = 7;
const TOTAL_TICKS:      u64 = 600;
const WINNING_SCORE:    i64 = 5;
const REPORT_EVERY:     u64 = 15;
const ALTAR:            Vec3 = Vec3::ZERO;
const PRIEST_START:     Vec3 = Vec3::new(5.0, 5.0, 5.0);
const PRIEST_SPEED:     f32 = 2.0;

// ── Utility graph ─────────────────────────────────────────────────────────────

fn build_graph() -> Result<UtilityGraph> {
    let graph = UtilityGraphBuilder::new()
        .add(UtilityDef::root("priest-routine-start", Goal::move_to(ALTAR))
            .kinds(KindSet::PRIEST)
            .next("priest-say-prayers"))
        .add(UtilityDef::new("priest-say-prayers", Goal::Patrol {
                waypoints: vec![Vec3::new(0.0, 0.0, 1.5), ALTAR],
            })
            .kinds(KindSet::PRIEST)
            .next("priest-meditate"))
        .add(UtilityDef::new("priest-meditate", Goal::Wait { secs: 2.0 })
            .kinds(KindSet::PRIEST))
        .add(UtilityDef::root("cure-poison", Goal::Unimplemented))
        .add(UtilityDef::root("search-scroll", Goal::Unimplemented).kinds(KindSet::PRIEST))
        .build()?;
    Ok(graph)
}

fn load_config() -> Result<SimConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SimConfig { total_ticks: TOTAL_TICKS, seed: SEED, ..SimConfig::default() });
    };
    let text = std::fs::read_to_string(Path::new(&path))
        .with_context(|| format!("reading config {path}"))?;
    let config: SimConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

// ── Observer ──────────────────────────────────────────────────────────────────

struct PositionReport {
    every: u64,
}

impl SimObserver for PositionReport {
    fn on_tick_end(&mut self, tick: Tick, npcs: &NpcStore) {
        if tick.0 % self.every != 0 {
            return;
        }
        for npc in npcs.iter().filter(|n| n.kind == AgentKind::Priest) {
            println!("{:>6}  {:<8} {}", tick.to_string(), npc.kind.to_string(), npc.body.position);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!("simulation ended at {final_tick}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = load_config()?;
    println!("=== priest: rust_ua decision engine ===");
    println!(
        "Ticks: {}  |  dt: {:.3}s  |  Seed: {}",
        config.total_ticks, config.tick_duration_secs, config.seed
    );
    println!();

    // 1. Graph and agents.
    let graph = build_graph()?;
    let prayers = graph.id_of("priest-say-prayers")?;
    let (npcs, rngs) = NpcStoreBuilder::new(config.seed)
        .npc(AgentKind::Priest, PRIEST_START, PRIEST_SPEED)
        .npc(AgentKind::Thief, Vec3::new(-3.0, 0.0, 2.0), 3.0)
        .npc(AgentKind::Villager, Vec3::new(4.0, 0.0, -1.0), 1.0)
        .build();

    // 2. Sim.
    let mut sim = SimBuilder::new(config, graph, npcs, rngs)
        .players(["Chapel"])
        .winning_score(WINNING_SCORE)
        .build()?;

    // 3. Score a point per finished prayer.
    let chapel = PlayerId(0);
    sim.subscribe(GameEventKind::UtilityComplete, move |world, dispatcher, event| {
        let &GameEvent::UtilityComplete { utility, .. } = event else {
            return Ok(());
        };
        if utility != prayers {
            return Ok(());
        }
        let score = world.scoreboard.apply(chapel, 1)?;
        dispatcher.trigger(world, GameEvent::ScoreChanged { player: chapel, score })?;
        if world.scoreboard.is_winning(score) && world.scoreboard.set_winner(chapel)? {
            dispatcher.trigger(world, GameEvent::GameOver { winner: chapel })?;
        }
        Ok(())
    });

    // 4. Narrate.
    for kind in [
        GameEventKind::UtilityStarted,
        GameEventKind::AgentIdle,
        GameEventKind::ScoreChanged,
        GameEventKind::GameOver,
    ] {
        sim.subscribe(kind, |world, _, event| {
            let line = match *event {
                GameEvent::UtilityStarted { utility, agent, reason } => {
                    let name = world.graph.get(utility).map_or("?", |u| u.name.as_str());
                    format!("{agent} starts {name} ({reason:?})")
                }
                GameEvent::AgentIdle { agent } => format!("{agent} is idle for good"),
                GameEvent::ScoreChanged { player, score } => {
                    let name = world.scoreboard.player(player).map_or("?", |p| p.name.as_str());
                    format!("{name} score: {score}")
                }
                GameEvent::GameOver { winner } => format!("game over, {winner} wins"),
                _ => return Ok(()),
            };
            println!("{:>6}  {line}", world.tick.to_string());
            Ok(())
        });
    }

    // 5. Run.
    sim.start_all()?;
    sim.run(&mut PositionReport { every: REPORT_EVERY })?;
    info!(stats = ?sim.dispatch_stats(), "dispatcher totals");

    // 6. Summary.
    println!();
    println!("{:<12} {:<10} {:<28} {}", "Agent", "Kind", "Status", "Position");
    println!("{}", "-".repeat(72));
    for npc in sim.world.npcs.iter() {
        let status = match npc.status() {
            NpcStatus::Idle => "idle".to_string(),
            NpcStatus::Executing => {
                let name = npc
                    .current_utility()
                    .and_then(|u| sim.graph().get(u))
                    .map_or("?", |u| u.name.as_str());
                format!("running {name}")
            }
            NpcStatus::Terminal(reason) => format!("terminal: {reason:?}"),
        };
        let status: String = status.chars().take(28).collect();
        println!(
            "{:<12} {:<10} {:<28} {}",
            npc.id.to_string(),
            npc.kind.to_string(),
            status,
            npc.body.position
        );
    }

    Ok(())
}
