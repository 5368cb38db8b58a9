//! Integration tests for ua-sim.

use std::sync::{Arc, Mutex};

use ua_agent::{AgentError, NpcStatus, NpcStoreBuilder, TerminalReason};
use ua_behavior::Outcome;
use ua_core::{AgentId, AgentKind, FailurePolicy, KindSet, PlayerId, SimConfig, Tick, UtilityId, Vec3};
use ua_events::{GameEvent, GameEventKind, StartReason};
use ua_utility::{Goal, RootSelector, TieBreak, UtilityDef, UtilityError, UtilityGraph, UtilityGraphBuilder};

use crate::{NoopObserver, Sim, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

type Log = Arc<Mutex<Vec<GameEvent>>>;

const START: UtilityId = UtilityId(0);
const PRAY: UtilityId = UtilityId(1);

fn test_config() -> SimConfig {
    SimConfig {
        tick_duration_secs: 0.1,
        total_ticks:        1_000,
        seed:               42,
        ..SimConfig::default()
    }
}

/// Priest start → say prayers, plus two unimplemented roots.
fn priest_graph() -> UtilityGraph {
    UtilityGraphBuilder::new()
        .add(UtilityDef::root("priest-start", Goal::move_to(Vec3::ZERO))
            .kinds(KindSet::PRIEST)
            .next("priest-pray"))
        .add(UtilityDef::new("priest-pray", Goal::move_to(Vec3::ZERO)).kinds(KindSet::PRIEST))
        .add(UtilityDef::root("cure-poison", Goal::Unimplemented))
        .add(UtilityDef::root("search-scroll", Goal::Unimplemented).kinds(KindSet::PRIEST))
        .build()
        .unwrap()
}

fn priest_sim() -> Sim {
    let (npcs, rngs) = NpcStoreBuilder::new(42)
        .npc(AgentKind::Priest, Vec3::new(5.0, 5.0, 5.0), 2.0)
        .build();
    SimBuilder::new(test_config(), priest_graph(), npcs, rngs).build().unwrap()
}

fn sim_with(graph: UtilityGraph, kinds: &[AgentKind], config: SimConfig) -> Sim {
    let mut b = NpcStoreBuilder::new(config.seed);
    for &kind in kinds {
        b = b.npc(kind, Vec3::ZERO, 1.0);
    }
    let (npcs, rngs) = b.build();
    SimBuilder::new(config, graph, npcs, rngs).build().unwrap()
}

/// Record every event of the given kinds, in dispatch order.
fn record(sim: &mut Sim, kinds: &[GameEventKind]) -> Log {
    let log: Log = Arc::default();
    for &kind in kinds {
        let log = Arc::clone(&log);
        sim.subscribe(kind, move |_, _, event| {
            log.lock().unwrap().push(event.clone());
            Ok(())
        });
    }
    log
}

fn record_utility_events(sim: &mut Sim) -> Log {
    record(sim, &[
        GameEventKind::UtilityStarted,
        GameEventKind::UtilityComplete,
        GameEventKind::UtilityFailure,
        GameEventKind::AgentIdle,
    ])
}

fn started(log: &Log) -> Vec<(UtilityId, StartReason)> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|e| match *e {
            GameEvent::UtilityStarted { utility, reason, .. } => Some((utility, reason)),
            _ => None,
        })
        .collect()
}

fn count(log: &Log, kind: GameEventKind) -> usize {
    use ua_events::Event;
    log.lock().unwrap().iter().filter(|e| e.kind() == kind).count()
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = priest_sim();
        assert_eq!(sim.current_tick(), Tick::ZERO);
        assert_eq!(sim.graph().len(), 4);
        assert_eq!(sim.npc(AgentId(0)).unwrap().status(), &NpcStatus::Idle);
        assert_eq!(sim.world.rngs.seed(), 42);
    }

    #[test]
    fn invalid_config_rejected() {
        let (npcs, rngs) = NpcStoreBuilder::new(0).build();
        let config = SimConfig { tick_duration_secs: 0.0, ..SimConfig::default() };
        let result = SimBuilder::new(config, priest_graph(), npcs, rngs).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn rng_count_mismatch_rejected() {
        let (npcs, _) = NpcStoreBuilder::new(0).npc(AgentKind::Priest, Vec3::ZERO, 1.0).build();
        let (_, rngs) = NpcStoreBuilder::new(0).build();
        let result = SimBuilder::new(test_config(), priest_graph(), npcs, rngs).build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { expected: 1, got: 0, .. })));
    }

    #[test]
    fn failure_policy_override() {
        let (npcs, rngs) = NpcStoreBuilder::new(0).build();
        let sim = SimBuilder::new(test_config(), priest_graph(), npcs, rngs)
            .failure_policy(FailurePolicy::Propagate)
            .build()
            .unwrap();
        assert_eq!(sim.config.failure_policy, FailurePolicy::Propagate);
        assert_eq!(sim.dispatcher.policy(), FailurePolicy::Propagate);
    }
}

// ── Priest routine ────────────────────────────────────────────────────────────

#[cfg(test)]
mod priest_tests {
    use super::*;

    #[test]
    fn start_selects_priest_root() {
        let mut sim = priest_sim();
        let log = record_utility_events(&mut sim);
        sim.start_all().unwrap();
        assert_eq!(started(&log), [(START, StartReason::Reselected)]);
        assert_eq!(sim.npc(AgentId(0)).unwrap().status(), &NpcStatus::Executing);
    }

    #[test]
    fn arrival_completes_once_and_successor_starts() {
        let mut sim = priest_sim();
        let log = record_utility_events(&mut sim);
        sim.start_all().unwrap();

        // 8.66 units at 0.2 units per tick: arrival on the 44th tick.
        sim.run_ticks(43, &mut NoopObserver).unwrap();
        assert_eq!(count(&log, GameEventKind::UtilityComplete), 0);

        sim.step(&mut NoopObserver).unwrap();
        let events = log.lock().unwrap().clone();
        assert_eq!(events, [
            GameEvent::UtilityStarted { utility: START, agent: AgentId(0), reason: StartReason::Reselected },
            GameEvent::UtilityComplete { utility: START, agent: AgentId(0) },
            GameEvent::UtilityStarted { utility: PRAY, agent: AgentId(0), reason: StartReason::Successor },
        ]);

        let npc = sim.npc(AgentId(0)).unwrap();
        assert!(npc.body.position.approx_eq(Vec3::ZERO, 0.01));
        assert_eq!(npc.current_utility(), Some(PRAY));
    }

    #[test]
    fn chain_end_reselects_root() {
        let mut sim = priest_sim();
        let log = record_utility_events(&mut sim);
        sim.start_all().unwrap();
        sim.run_ticks(45, &mut NoopObserver).unwrap();
        assert_eq!(started(&log), [
            (START, StartReason::Reselected),
            (PRAY, StartReason::Successor),
            (START, StartReason::Reselected),
        ]);
        assert_eq!(count(&log, GameEventKind::UtilityFailure), 0);
    }

    #[test]
    fn run_is_deterministic() {
        let run = || {
            let mut sim = priest_sim();
            let log = record_utility_events(&mut sim);
            sim.start_all().unwrap();
            sim.run_ticks(120, &mut NoopObserver).unwrap();
            let events = log.lock().unwrap().clone();
            events
        };
        assert_eq!(run(), run());
    }
}

// ── Selection and faults ──────────────────────────────────────────────────────

#[cfg(test)]
mod selection_tests {
    use super::*;

    #[test]
    fn excluded_kind_gets_other_root() {
        let graph = UtilityGraphBuilder::new()
            .add(UtilityDef::root("priests", Goal::Idle).kinds(KindSet::PRIEST))
            .add(UtilityDef::root("everyone", Goal::Idle))
            .build()
            .unwrap();
        let mut sim = sim_with(graph, &[AgentKind::Thief, AgentKind::Priest], test_config());
        sim.start_all().unwrap();
        assert_eq!(sim.npc(AgentId(0)).unwrap().current_utility(), Some(UtilityId(1)));
        assert_eq!(sim.npc(AgentId(1)).unwrap().current_utility(), Some(UtilityId(0)));
    }

    #[test]
    fn no_eligible_root_goes_terminal() {
        let graph = UtilityGraphBuilder::new()
            .add(UtilityDef::root("priests", Goal::Idle).kinds(KindSet::PRIEST))
            .build()
            .unwrap();
        let mut sim = sim_with(graph, &[AgentKind::Guard], test_config());
        let log = record_utility_events(&mut sim);
        sim.start_all().unwrap();

        let npc = sim.npc(AgentId(0)).unwrap();
        assert_eq!(npc.status(), &NpcStatus::Terminal(TerminalReason::NoEligibleRoot));
        assert_eq!(*log.lock().unwrap(), [GameEvent::AgentIdle { agent: AgentId(0) }]);

        // Terminal agents are skipped from then on.
        sim.run_ticks(10, &mut NoopObserver).unwrap();
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn unimplemented_root_faults_agent() {
        let mut sim = sim_with(priest_graph(), &[AgentKind::Villager], test_config());
        let log = record_utility_events(&mut sim);
        sim.start_all().unwrap();

        let npc = sim.npc(AgentId(0)).unwrap();
        assert!(matches!(npc.status(), NpcStatus::Terminal(TerminalReason::Faulted(_))));
        assert_eq!(count(&log, GameEventKind::UtilityStarted), 0);
        assert_eq!(count(&log, GameEventKind::AgentIdle), 1);
    }

    #[test]
    fn unimplemented_root_propagates_under_propagate() {
        let config = SimConfig { failure_policy: FailurePolicy::Propagate, ..test_config() };
        let mut sim = sim_with(priest_graph(), &[AgentKind::Villager], config);
        let err = sim.start_all().unwrap_err();
        assert!(matches!(err, SimError::Utility(UtilityError::Unimplemented { .. })));
    }

    fn walk_then_todo() -> UtilityGraph {
        UtilityGraphBuilder::new()
            .add(UtilityDef::root("walk", Goal::move_to(Vec3::new(0.1, 0.0, 0.0))).next("todo"))
            .add(UtilityDef::new("todo", Goal::Unimplemented))
            .build()
            .unwrap()
    }

    #[test]
    fn unimplemented_successor_is_isolated() {
        let mut sim = sim_with(walk_then_todo(), &[AgentKind::Villager], test_config());
        sim.start_all().unwrap();
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert!(sim.npc(AgentId(0)).unwrap().is_terminal());
        assert_eq!(sim.dispatch_stats().handler_failures, 1);
    }

    #[test]
    fn unimplemented_successor_propagates() {
        let config = SimConfig { failure_policy: FailurePolicy::Propagate, ..test_config() };
        let mut sim = sim_with(walk_then_todo(), &[AgentKind::Villager], config);
        sim.start_all().unwrap();
        let err = sim.run_ticks(3, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Event(_)));
        assert!(sim.npc(AgentId(0)).unwrap().is_terminal());
    }

    #[test]
    fn propagated_failure_still_reports_rest_of_tick() {
        let config = SimConfig { failure_policy: FailurePolicy::Propagate, ..test_config() };
        let mut sim = sim_with(walk_then_todo(), &[AgentKind::Villager, AgentKind::Villager], config);
        sim.start_all().unwrap();

        // Both walks finish on tick 0; the first successor fault is returned.
        assert!(sim.run_ticks(1, &mut NoopObserver).is_err());
        assert_eq!(sim.current_tick(), Tick(1));
        for agent in [AgentId(0), AgentId(1)] {
            let npc = sim.npc(agent).unwrap();
            assert!(
                matches!(npc.status(), NpcStatus::Terminal(TerminalReason::Faulted(_))),
                "{agent} left {:?}",
                npc.status()
            );
        }
    }
}

// ── Assign / interrupt ────────────────────────────────────────────────────────

#[cfg(test)]
mod control_tests {
    use super::*;

    #[test]
    fn assign_starts_utility() {
        let mut sim = priest_sim();
        let log = record_utility_events(&mut sim);
        sim.assign(AgentId(0), PRAY).unwrap();
        assert_eq!(started(&log), [(PRAY, StartReason::Assigned)]);
    }

    #[test]
    fn assign_busy_agent_fails() {
        let mut sim = priest_sim();
        sim.start_all().unwrap();
        let err = sim.assign(AgentId(0), PRAY).unwrap_err();
        assert!(matches!(err, SimError::Agent(AgentError::Busy { utility: START, .. })));
    }

    #[test]
    fn assign_ineligible_fails_without_fault() {
        let mut sim = sim_with(priest_graph(), &[AgentKind::Thief], test_config());
        let err = sim.assign(AgentId(0), START).unwrap_err();
        assert!(matches!(err, SimError::Utility(UtilityError::Ineligible { .. })));
        assert_eq!(sim.npc(AgentId(0)).unwrap().status(), &NpcStatus::Idle);
    }

    #[test]
    fn assign_unknown_agent_fails() {
        let mut sim = priest_sim();
        let err = sim.assign(AgentId(9), START).unwrap_err();
        assert!(matches!(err, SimError::Agent(AgentError::NotFound(AgentId(9)))));
    }

    #[test]
    fn interrupt_fails_then_reselects_same_root() {
        let mut sim = priest_sim();
        let log = record_utility_events(&mut sim);
        sim.start_all().unwrap();
        sim.run_ticks(5, &mut NoopObserver).unwrap();

        assert!(sim.interrupt(AgentId(0)).unwrap());
        let events = log.lock().unwrap().clone();
        assert_eq!(&events[1..], [
            GameEvent::UtilityFailure { utility: START, agent: AgentId(0) },
            GameEvent::UtilityStarted { utility: START, agent: AgentId(0), reason: StartReason::Reselected },
        ]);
    }

    #[test]
    fn interrupt_idle_agent_is_noop() {
        let mut sim = priest_sim();
        let log = record_utility_events(&mut sim);
        assert!(!sim.interrupt(AgentId(0)).unwrap());
        assert_eq!(count(&log, GameEventKind::UtilityFailure), 0);
    }

    #[test]
    fn random_reselection_replays_for_same_seed() {
        let graph = || {
            let mut b = UtilityGraphBuilder::new();
            for i in 0..6 {
                b = b.add(UtilityDef::root(format!("idle-{i}"), Goal::Idle));
            }
            b.build().unwrap()
        };
        let run = |seed: u64| {
            let (npcs, rngs) = NpcStoreBuilder::new(seed)
                .npcs(AgentKind::Villager, [Vec3::ZERO, Vec3::ZERO], 1.0)
                .build();
            let config = SimConfig { seed, ..test_config() };
            let mut sim = SimBuilder::new(config, graph(), npcs, rngs)
                .selector(RootSelector::default().with_tie_break(TieBreak::Random))
                .build()
                .unwrap();
            let log = record_utility_events(&mut sim);
            sim.start_all().unwrap();
            for _ in 0..10 {
                sim.interrupt(AgentId(0)).unwrap();
                sim.interrupt(AgentId(1)).unwrap();
            }
            started(&log)
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut sim = priest_sim();
        let log = record_utility_events(&mut sim);
        sim.start_all().unwrap();
        sim.trigger(GameEvent::UtilityComplete { utility: PRAY, agent: AgentId(0) }).unwrap();
        sim.trigger(GameEvent::UtilityComplete { utility: START, agent: AgentId(0) }).unwrap();
        assert_eq!(started(&log).len(), 1);
        assert_eq!(sim.npc(AgentId(0)).unwrap().current_utility(), Some(START));
    }
}

// ── Watchdog ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod watchdog_tests {
    use super::*;

    fn idle_graph() -> UtilityGraph {
        UtilityGraphBuilder::new()
            .add(UtilityDef::root("idle", Goal::Idle))
            .build()
            .unwrap()
    }

    #[test]
    fn stalled_behavior_runs_forever_by_default() {
        let mut sim = sim_with(idle_graph(), &[AgentKind::Villager], test_config());
        let log = record_utility_events(&mut sim);
        sim.start_all().unwrap();
        sim.run_ticks(100, &mut NoopObserver).unwrap();
        assert_eq!(count(&log, GameEventKind::UtilityFailure), 0);
    }

    #[test]
    fn timeout_cancels_and_reselects() {
        let config = SimConfig { behavior_timeout_ticks: Some(5), ..test_config() };
        let mut sim = sim_with(idle_graph(), &[AgentKind::Villager], config);
        let log = record_utility_events(&mut sim);
        sim.start_all().unwrap();
        // Cancelled on ticks 5, 10, and 15.
        sim.run_ticks(20, &mut NoopObserver).unwrap();
        assert_eq!(count(&log, GameEventKind::UtilityFailure), 3);
        assert_eq!(count(&log, GameEventKind::UtilityStarted), 4);
    }
}

// ── Scores ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod score_tests {
    use super::*;

    const ALICE: PlayerId = PlayerId(0);
    const BOB: PlayerId = PlayerId(1);

    fn scored_sim() -> (Sim, Log) {
        let (npcs, rngs) = NpcStoreBuilder::new(0).build();
        let mut sim = SimBuilder::new(test_config(), priest_graph(), npcs, rngs)
            .players(["Alice", "Bob"])
            .winning_score(10)
            .build()
            .unwrap();
        let log = record(&mut sim, &[GameEventKind::ScoreChanged, GameEventKind::GameOver]);
        (sim, log)
    }

    #[test]
    fn start_announces_zero_scores() {
        let (mut sim, log) = scored_sim();
        sim.start_all().unwrap();
        assert_eq!(*log.lock().unwrap(), [
            GameEvent::ScoreChanged { player: ALICE, score: 0 },
            GameEvent::ScoreChanged { player: BOB, score: 0 },
        ]);
    }

    #[test]
    fn winning_score_ends_game_once() {
        let (mut sim, log) = scored_sim();
        assert_eq!(sim.add_score(ALICE, 6).unwrap(), 6);
        assert_eq!(sim.add_score(ALICE, 5).unwrap(), 11);
        assert_eq!(sim.add_score(BOB, 20).unwrap(), 20);
        assert!(!sim.declare_winner(BOB).unwrap());

        assert_eq!(count(&log, GameEventKind::GameOver), 1);
        assert!(log.lock().unwrap().contains(&GameEvent::GameOver { winner: ALICE }));
        assert_eq!(sim.scoreboard().winner(), Some(ALICE));
    }

    #[test]
    fn unknown_player_rejected() {
        let (mut sim, _) = scored_sim();
        assert!(matches!(sim.add_score(PlayerId(5), 1), Err(SimError::PlayerNotFound(_))));
    }

    #[test]
    fn add_player_announces() {
        let (mut sim, log) = scored_sim();
        let carol = sim.add_player("Carol").unwrap();
        assert_eq!(carol, PlayerId(2));
        assert_eq!(*log.lock().unwrap(), [GameEvent::ScoreChanged { player: carol, score: 0 }]);
        assert_eq!(sim.scoreboard().player(carol).unwrap().name, "Carol");
    }

    #[test]
    fn run_stops_at_game_over() {
        let (mut sim, _) = scored_sim();
        sim.declare_winner(BOB).unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.current_tick(), Tick::ZERO);
    }
}

// ── Run / observer ────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        starts:   u64,
        ends:     u64,
        outcomes: Vec<Outcome>,
        finished: Option<Tick>,
    }

    impl SimObserver for Counter {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_outcome(&mut self, _tick: Tick, outcome: &Outcome) {
            self.outcomes.push(*outcome);
        }
        fn on_tick_end(&mut self, _tick: Tick, _npcs: &ua_agent::NpcStore) {
            self.ends += 1;
        }
        fn on_sim_end(&mut self, final_tick: Tick) {
            self.finished = Some(final_tick);
        }
    }

    #[test]
    fn run_to_end_tick() {
        let config = SimConfig { total_ticks: 50, ..test_config() };
        let (npcs, rngs) = NpcStoreBuilder::new(0)
            .npc(AgentKind::Priest, Vec3::new(5.0, 5.0, 5.0), 2.0)
            .build();
        let mut sim = SimBuilder::new(config, priest_graph(), npcs, rngs).build().unwrap();
        sim.start_all().unwrap();

        let mut obs = Counter::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(sim.current_tick(), Tick(50));
        assert_eq!((obs.starts, obs.ends), (50, 50));
        assert_eq!(obs.finished, Some(Tick(50)));
        // Start arrives on tick 43, prayers on 44, start again on 45, …
        assert!(obs.outcomes.iter().all(Outcome::is_complete));
        assert_eq!(obs.outcomes.len(), 7);
    }

    #[test]
    fn agents_step_in_id_order() {
        let graph = UtilityGraphBuilder::new()
            .add(UtilityDef::root("here", Goal::move_to(Vec3::ZERO)))
            .build()
            .unwrap();
        let mut sim = sim_with(graph, &[AgentKind::Villager; 3], test_config());
        sim.start_all().unwrap();
        let mut obs = Counter::default();
        sim.step(&mut obs).unwrap();
        let agents: Vec<AgentId> = obs.outcomes.iter().map(|o| o.binding.agent).collect();
        assert_eq!(agents, [AgentId(0), AgentId(1), AgentId(2)]);
    }
}

// ── Session reset ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod reset_tests {
    use super::*;

    #[test]
    fn reset_restores_initial_state() {
        let (npcs, rngs) = NpcStoreBuilder::new(0)
            .npc(AgentKind::Priest, Vec3::new(5.0, 5.0, 5.0), 2.0)
            .build();
        let mut sim = SimBuilder::new(test_config(), priest_graph(), npcs, rngs)
            .players(["Alice"])
            .winning_score(1)
            .build()
            .unwrap();
        sim.start_all().unwrap();
        sim.run_ticks(20, &mut NoopObserver).unwrap();
        sim.add_score(PlayerId(0), 3).unwrap();
        assert!(sim.is_game_over());

        sim.reset_session();
        assert_eq!(sim.current_tick(), Tick::ZERO);
        assert!(!sim.is_game_over());
        assert_eq!(sim.pending_events(), 0);
        assert_eq!(sim.scoreboard().player(PlayerId(0)).unwrap().score, 0);
        let npc = sim.npc(AgentId(0)).unwrap();
        assert_eq!(npc.status(), &NpcStatus::Idle);
        assert!(!npc.is_executing());
        assert_eq!(npc.body.position, Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn session_replays_after_reset() {
        let mut sim = priest_sim();
        let log = record_utility_events(&mut sim);

        sim.start_all().unwrap();
        sim.run_ticks(60, &mut NoopObserver).unwrap();
        let first = std::mem::take(&mut *log.lock().unwrap());

        sim.reset_session();
        sim.start_all().unwrap();
        sim.run_ticks(60, &mut NoopObserver).unwrap();
        let second = log.lock().unwrap().clone();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn reset_inside_handler_drops_pending_events() {
        let mut sim = priest_sim();
        let log = record_utility_events(&mut sim);
        sim.subscribe(GameEventKind::UtilityComplete, |world, dispatcher, _| {
            dispatcher.reset();
            world.scoreboard.reset();
            Ok(())
        });
        sim.start_all().unwrap();
        sim.run_ticks(44, &mut NoopObserver).unwrap();

        // The successor's UtilityStarted was queued behind the reset.
        assert_eq!(count(&log, GameEventKind::UtilityStarted), 1);
        assert_eq!(sim.pending_events(), 0);
        sim.trigger(GameEvent::AgentIdle { agent: AgentId(0) }).unwrap();
        assert_eq!(count(&log, GameEventKind::AgentIdle), 1);
    }
}
