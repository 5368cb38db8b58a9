//! Unit tests for ua-utility.

use ua_behavior::{Behavior, BehaviorState, DoNothingBehavior};
use ua_core::{AgentId, AgentKind, AgentRng, KindSet, UtilityId, Vec3};

use crate::{
    AgentView, Goal, RootSelector, StaticPriority, TieBreak, Utility, UtilityDef, UtilityError,
    UtilityGraph, UtilityGraphBuilder,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn view(kind: AgentKind) -> AgentView {
    AgentView { id: AgentId(0), kind, position: Vec3::ZERO }
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

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn ids_follow_declaration_order() {
        let g = priest_graph();
        assert_eq!(g.len(), 4);
        assert_eq!(g.id_of("priest-start").unwrap(), UtilityId(0));
        assert_eq!(g.id_of("search-scroll").unwrap(), UtilityId(3));
        assert_eq!(g.by_name("priest-start").unwrap().next, Some(UtilityId(1)));
    }

    #[test]
    fn successor_may_be_declared_later() {
        let g = UtilityGraphBuilder::new()
            .add(UtilityDef::root("a", Goal::Idle).next("b"))
            .add(UtilityDef::new("b", Goal::Idle))
            .build()
            .unwrap();
        assert_eq!(g.by_name("a").unwrap().next, g.by_name("b").map(|u| u.id));
    }

    #[test]
    fn duplicate_name_rejected() {
        let err = UtilityGraphBuilder::new()
            .add(UtilityDef::root("a", Goal::Idle))
            .add(UtilityDef::new("a", Goal::Idle))
            .build()
            .unwrap_err();
        assert_eq!(err, UtilityError::DuplicateName("a".into()));
    }

    #[test]
    fn unknown_successor_rejected() {
        let err = UtilityGraphBuilder::new()
            .add(UtilityDef::root("a", Goal::Idle).next("missing"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            UtilityError::UnknownSuccessor { from: "a".into(), to: "missing".into() }
        );
    }

    #[test]
    fn cycle_rejected_with_path() {
        let err = UtilityGraphBuilder::new()
            .add(UtilityDef::root("entry", Goal::Idle).next("a"))
            .add(UtilityDef::new("a", Goal::Idle).next("b"))
            .add(UtilityDef::new("b", Goal::Idle).next("a"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            UtilityError::Cycle { path: vec!["a".into(), "b".into(), "a".into()] }
        );
    }

    #[test]
    fn self_loop_rejected() {
        let err = UtilityGraphBuilder::new()
            .add(UtilityDef::root("a", Goal::Idle).next("a"))
            .build()
            .unwrap_err();
        assert!(matches!(err, UtilityError::Cycle { .. }));
    }

    #[test]
    fn shared_tail_is_not_a_cycle() {
        let g = UtilityGraphBuilder::new()
            .add(UtilityDef::root("a", Goal::Idle).next("c"))
            .add(UtilityDef::root("b", Goal::Idle).next("c"))
            .add(UtilityDef::new("c", Goal::Idle))
            .build();
        assert!(g.is_ok());
    }

    #[test]
    fn chain_walks_successors() {
        let g = priest_graph();
        let names: Vec<&str> = g.chain(UtilityId(0)).map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["priest-start", "priest-pray"]);
    }
}

// ── Utility / Goal ────────────────────────────────────────────────────────────

#[cfg(test)]
mod utility_tests {
    use super::*;
    use ua_behavior::{BehaviorParams, Binding};

    #[test]
    fn availability_is_kind_membership() {
        let g = priest_graph();
        let start = g.by_name("priest-start").unwrap();
        assert!(start.is_available_for(AgentKind::Priest));
        assert!(!start.is_available_for(AgentKind::Thief));
        assert!(g.by_name("cure-poison").unwrap().is_available_for(AgentKind::Thief));
    }

    #[test]
    fn instantiate_configures_binding() {
        let g = priest_graph();
        let b = g.by_name("priest-start").unwrap().instantiate(AgentId(4)).unwrap();
        assert_eq!(b.name(), "move");
        assert_eq!(b.state(), BehaviorState::Ready);
        assert_eq!(b.binding(), Some(Binding::new(UtilityId(0), AgentId(4))));
    }

    #[test]
    fn unimplemented_goal_is_an_error() {
        let g = priest_graph();
        let err = g.by_name("cure-poison").unwrap().instantiate(AgentId(0)).err().unwrap();
        assert_eq!(err, UtilityError::Unimplemented { utility: "cure-poison".into() });
    }

    #[test]
    fn bad_params_surface_as_behavior_error() {
        let u = Utility {
            id:       UtilityId(0),
            name:     "stuck".into(),
            is_root:  true,
            kinds:    KindSet::all(),
            next:     None,
            priority: 0,
            goal:     Goal::Patrol { waypoints: vec![] },
        };
        assert!(matches!(u.instantiate(AgentId(0)), Err(UtilityError::Behavior(_))));
    }

    #[test]
    fn custom_goal_uses_factory_and_params() {
        let goal = Goal::custom(
            || Box::new(DoNothingBehavior::new()) as Box<dyn Behavior>,
            BehaviorParams::duration(2.0),
        );
        assert_eq!(goal.params().duration_secs, Some(2.0));
        let b = goal.spawn().unwrap();
        assert_eq!(b.name(), "do-nothing");
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection_tests {
    use super::*;

    #[test]
    fn first_match_picks_first_declared_eligible_root() {
        let g = priest_graph();
        let mut rng = AgentRng::new(0, AgentId(0));
        let sel = RootSelector::default();
        assert_eq!(sel.select(&g, &view(AgentKind::Priest), &mut rng).unwrap(), UtilityId(0));
        assert_eq!(sel.select(&g, &view(AgentKind::Villager), &mut rng).unwrap(), UtilityId(2));
    }

    #[test]
    fn excluded_kind_never_selected() {
        let g = priest_graph();
        let sel = RootSelector::default().with_tie_break(TieBreak::Random);
        for seed in 0..50 {
            let mut rng = AgentRng::new(seed, AgentId(0));
            let id = sel.select(&g, &view(AgentKind::Thief), &mut rng).unwrap();
            assert!(g.get(id).unwrap().is_available_for(AgentKind::Thief));
            assert_eq!(id, UtilityId(2));
        }
    }

    #[test]
    fn no_eligible_root() {
        let g = UtilityGraphBuilder::new()
            .add(UtilityDef::root("guards-only", Goal::Idle).kinds(KindSet::GUARD))
            .build()
            .unwrap();
        let mut rng = AgentRng::new(0, AgentId(0));
        let err = RootSelector::default()
            .select(&g, &view(AgentKind::Villager), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            UtilityError::NoEligibleRoot { agent: AgentId(0), kind: AgentKind::Villager }
        );
    }

    #[test]
    fn static_priority_prefers_highest() {
        let g = UtilityGraphBuilder::new()
            .add(UtilityDef::root("low", Goal::Idle).priority(1))
            .add(UtilityDef::root("high", Goal::Idle).priority(5))
            .build()
            .unwrap();
        let mut rng = AgentRng::new(0, AgentId(0));
        let id = RootSelector::new(StaticPriority)
            .select(&g, &view(AgentKind::Villager), &mut rng)
            .unwrap();
        assert_eq!(g.get(id).unwrap().name, "high");
    }

    #[test]
    fn closure_scorer_and_nan_skip() {
        let g = UtilityGraphBuilder::new()
            .add(UtilityDef::root("nan", Goal::Idle))
            .add(UtilityDef::root("near", Goal::Idle))
            .build()
            .unwrap();
        let sel = RootSelector::new(|u: &Utility, _a: &AgentView| {
            if u.name == "nan" { f32::NAN } else { -1.0 }
        });
        let mut rng = AgentRng::new(0, AgentId(0));
        assert_eq!(sel.select(&g, &view(AgentKind::Villager), &mut rng).unwrap(), UtilityId(1));
    }

    #[test]
    fn random_tie_break_is_reproducible() {
        let mut b = UtilityGraphBuilder::new();
        for i in 0..8 {
            b = b.add(UtilityDef::root(format!("r{i}"), Goal::Idle));
        }
        let g = b.build().unwrap();
        let sel = RootSelector::default().with_tie_break(TieBreak::Random);

        let pick = |seed| {
            let mut rng = AgentRng::new(seed, AgentId(3));
            (0..10)
                .map(|_| sel.select(&g, &view(AgentKind::Villager), &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(pick(11), pick(11));
    }
}
