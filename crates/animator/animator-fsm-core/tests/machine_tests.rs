use animator_fsm_core::{
    AnimatorError, BlendTree, Condition, ConditionMode, Motion, StateId, StateMachine,
};

fn clip(name: &str) -> Option<Motion> {
    Some(Motion::Clip(name.to_string()))
}

#[test]
fn add_and_find_states() {
    let mut sm = StateMachine::new();
    let idle = sm.add_state("Idle", clip("RifleIdle")).unwrap();
    let run = sm.add_state("Run", clip("RifleRun")).unwrap();

    assert_eq!(sm.len(), 2);
    assert_eq!(sm.find_state("Idle"), Some(idle));
    assert_eq!(sm.find_state("Run"), Some(run));
    assert_eq!(sm.find_state("Walk"), None);
    assert_eq!(sm.state(idle).unwrap().name(), "Idle");
}

#[test]
fn duplicate_state_name_rejected() {
    let mut sm = StateMachine::new();
    sm.add_state("Idle", clip("RifleIdle")).unwrap();
    assert_eq!(
        sm.add_state("Idle", None),
        Err(AnimatorError::DuplicateState {
            name: "Idle".into()
        })
    );
    assert_eq!(sm.len(), 1);
}

#[test]
fn default_state_must_exist() {
    let mut sm = StateMachine::new();
    let idle = sm.add_state("Idle", clip("RifleIdle")).unwrap();
    assert!(matches!(
        sm.set_default_state(StateId(5)),
        Err(AnimatorError::UnknownStateId { .. })
    ));
    assert_eq!(sm.default_state(), None);
    sm.set_default_state(idle).unwrap();
    assert_eq!(sm.default_state(), Some(idle));
}

#[test]
fn transition_destinations_validated_at_configuration_time() {
    let mut sm = StateMachine::new();
    let idle = sm.add_state("Idle", clip("RifleIdle")).unwrap();

    assert!(matches!(
        sm.add_transition(idle, StateId(9)),
        Err(AnimatorError::UnknownStateId { id: StateId(9) })
    ));
    assert!(matches!(
        sm.add_transition(StateId(9), idle),
        Err(AnimatorError::UnknownStateId { .. })
    ));
    assert!(sm.state(idle).unwrap().transitions().is_empty());
}

#[test]
fn transition_configuration() {
    let mut sm = StateMachine::new();
    let idle = sm.add_state("Idle", clip("RifleIdle")).unwrap();
    let run = sm.add_state("Run", clip("RifleRun")).unwrap();

    let t = sm.add_transition(idle, run).unwrap();
    t.add_condition(ConditionMode::If, 0.0, "isRunning")
        .set_duration(0.5)
        .set_offset(0.1);

    let state = sm.state(idle).unwrap();
    assert_eq!(state.transitions().len(), 1);
    let t = &state.transitions()[0];
    assert_eq!(t.destination(), run);
    assert_eq!(t.conditions().len(), 1);
    assert_eq!(t.conditions()[0].parameter, "isRunning");
    assert_eq!(t.duration, 0.5);
    assert_eq!(t.offset, 0.1);
    assert!(!t.has_exit_time);
    assert!(!t.mute);
}

#[test]
fn exit_time_variant_gates_only_when_positive() {
    let mut sm = StateMachine::new();
    let reload = sm.add_state("Reload", clip("Reloading")).unwrap();
    let idle = sm.add_state("Idle", clip("RifleIdle")).unwrap();

    let gated = sm.add_transition_with_exit_time(reload, idle, 0.95).unwrap();
    assert!(gated.has_exit_time);
    assert_eq!(gated.exit_time(), 0.95);

    let ungated = sm.add_transition_with_exit_time(idle, reload, 0.0).unwrap();
    assert!(!ungated.has_exit_time);

    let clamped = sm.add_transition_with_exit_time(idle, reload, 3.0).unwrap();
    assert_eq!(clamped.exit_time(), 1.0);
}

#[test]
fn transition_list_mutation() {
    let mut sm = StateMachine::new();
    let a = sm.add_state("A", None).unwrap();
    let b = sm.add_state("B", None).unwrap();
    sm.add_transition(a, b).unwrap();
    sm.add_transition(a, a).unwrap();

    let state = sm.state_mut(a).unwrap();
    state.transition_mut(0).unwrap().mute = true;
    assert!(state.transitions()[0].mute);

    state.remove_transition(0);
    assert_eq!(state.transitions().len(), 1);
    assert_eq!(state.transitions()[0].destination(), a);
}

#[test]
fn authored_data_round_trips_through_serde() {
    let mut tree = BlendTree::with_thresholds("Locomotion", "moveSpeed", 0.0, 2.0);
    tree.add_child("Walk", 0.0).time_scale = 0.8;
    tree.add_child("Run", 2.0).time_scale = 1.2;
    let json = serde_json::to_string(&Motion::BlendTree(tree.clone())).unwrap();
    let back: Motion = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Motion::BlendTree(tree));

    let cond = Condition {
        parameter: "isRunning".into(),
        mode: ConditionMode::If,
        threshold: 0.0,
    };
    let json = serde_json::to_string(&cond).unwrap();
    let back: Condition = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cond);
}

#[test]
fn state_rename() {
    let mut sm = StateMachine::new();
    let id = sm.add_state("Walk", clip("RifleWalk")).unwrap();
    sm.state_mut(id).unwrap().set_name("Jog");
    assert_eq!(sm.find_state("Walk"), None);
    assert_eq!(sm.find_state("Jog"), Some(id));
}
