//! Property-based tests for the dialogue engine.
//!
//! These tests use proptest to drive the engine with random intents, slot
//! values and session attributes, and check the properties every turn must
//! keep.

use proptest::prelude::*;
use winnebago::catalog::{
    self, Branch, CaActivity, CatalogEntry, NavigationPath, NhPlace, TravelState,
};
use winnebago::core::State;
use winnebago::dialogue::{
    slots, Conversation, DialogueEngine, DialogueError, DispatchError, Intent, SessionAttributes,
    Slots,
};

fn arbitrary_branch() -> impl Strategy<Value = Branch> {
    prop_oneof![
        Just(Branch::Place(NhPlace::Hike)),
        Just(Branch::Place(NhPlace::Seacoast)),
        Just(Branch::Activity(CaActivity::Family)),
        Just(Branch::Activity(CaActivity::Adult)),
    ]
}

prop_compose! {
    fn arbitrary_attributes()(variant in 0..3u8, state in any::<bool>(), branch in arbitrary_branch())
        -> SessionAttributes
    {
        let state = if state { TravelState::NewHampshire } else { TravelState::California };
        match variant {
            0 => SessionAttributes::new(),
            1 => SessionAttributes::new().with_state(state),
            _ => SessionAttributes::new().with_branch(branch),
        }
    }
}

fn arbitrary_intent() -> impl Strategy<Value = Intent> {
    prop::sample::select(Intent::ALL.to_vec())
}

/// Slot values drawn mostly from the vocabulary the catalog knows, with
/// some noise mixed in.
fn arbitrary_value() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "new hampshire", "California", "hike", "hike a mountain", "Seacoast",
            "family friendly", "adults", "stay", "mountain", "town", "park",
            "thrill", "unwind", "phone", "",
        ])
        .prop_map(str::to_string),
        "[a-z ]{0,12}",
    ]
}

fn randomize_case(value: &str, mask: &[bool]) -> String {
    value
        .chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

fn slots_for(intent: Intent, value: &str) -> Slots {
    match intent.slot() {
        Some(slot) => slots([(slot, value)]),
        None => Slots::new(),
    }
}

fn branch_agrees_with_state(attributes: &SessionAttributes) -> bool {
    match attributes.branch() {
        Some(branch) => attributes.current_state() == Some(branch.state()),
        None => true,
    }
}

proptest! {
    #[test]
    fn pick_state_ignores_case(
        state in prop_oneof![Just(TravelState::NewHampshire), Just(TravelState::California)],
        mask in prop::collection::vec(any::<bool>(), 1..8),
        attributes in arbitrary_attributes(),
    ) {
        let engine = DialogueEngine::default();
        let spoken = randomize_case(state.as_str(), &mask);

        let response = engine
            .handle_turn("PickStateIntent", &slots([("State", spoken.as_str())]), &attributes)
            .unwrap();

        prop_assert_eq!(response.session_attributes.current_state(), Some(state));
        prop_assert_eq!(response.session_attributes.branch(), None);

        let canonical = engine
            .handle_turn("PickStateIntent", &slots([("State", state.as_str())]), &attributes)
            .unwrap();
        prop_assert_eq!(&response.speech_text, &canonical.speech_text);
        prop_assert_eq!(&response.reprompt_text, &canonical.reprompt_text);
        let node = match catalog::lookup(&NavigationPath::State(state)) {
            CatalogEntry::Authored(node) => node,
            other => return Err(TestCaseError::fail(format!("state node missing: {other:?}"))),
        };
        prop_assert_eq!(response.speech_text.as_str(), node.speech);
    }

    #[test]
    fn start_over_ignores_session(attributes in arbitrary_attributes()) {
        let engine = DialogueEngine::default();

        let response = engine
            .handle_turn("StartOverIntent", &Slots::new(), &attributes)
            .unwrap();

        prop_assert_eq!(response.speech_text.as_str(), catalog::ROOT.speech);
        prop_assert!(response.session_attributes.is_empty());
        prop_assert!(!response.end_session);
    }

    #[test]
    fn stop_always_ends_and_echoes(
        attributes in arbitrary_attributes(),
        name in prop_oneof![Just("AMAZON.StopIntent"), Just("AMAZON.CancelIntent")],
    ) {
        let engine = DialogueEngine::default();

        let response = engine.handle_turn(name, &Slots::new(), &attributes).unwrap();

        prop_assert_eq!(response.speech_text.as_str(), catalog::FAREWELL);
        prop_assert!(response.end_session);
        prop_assert_eq!(response.reprompt_text, None);
        prop_assert_eq!(response.session_attributes, attributes);
    }

    #[test]
    fn back_at_root_is_idempotent(steps in 1..5usize) {
        let engine = DialogueEngine::default();
        let mut attributes = SessionAttributes::new();
        let first = engine.handle_turn("BackIntent", &Slots::new(), &attributes).unwrap();

        for _ in 0..steps {
            let response = engine.handle_turn("BackIntent", &Slots::new(), &attributes).unwrap();
            prop_assert_eq!(&response, &first);
            attributes = response.session_attributes;
        }
        prop_assert!(attributes.is_empty());
    }

    #[test]
    fn every_turn_keeps_attributes_consistent(
        start in arbitrary_attributes(),
        turns in prop::collection::vec((arbitrary_intent(), arbitrary_value()), 1..12),
    ) {
        let engine = DialogueEngine::default();
        let mut attributes = start;

        for (intent, value) in turns {
            let response = engine
                .handle_turn(intent.name(), &slots_for(intent, &value), &attributes)
                .unwrap();

            let next = response.session_attributes;
            prop_assert!(branch_agrees_with_state(&next));
            prop_assert_eq!(SessionAttributes::decode(&next.to_wire()).unwrap(), next.clone());
            attributes = next;
        }
    }

    #[test]
    fn silent_turns_leave_attributes_alone(
        attributes in arbitrary_attributes(),
        intent in arbitrary_intent(),
        value in arbitrary_value(),
    ) {
        let engine = DialogueEngine::default();

        let response = engine
            .handle_turn(intent.name(), &slots_for(intent, &value), &attributes)
            .unwrap();

        if response.is_silent() {
            prop_assert_eq!(response.session_attributes, attributes);
        }
    }

    #[test]
    fn names_outside_the_intent_set_are_rejected(name in "[A-Za-z.]{1,24}") {
        prop_assume!(Intent::ALL.iter().all(|intent| intent.name() != name));
        let engine = DialogueEngine::default();

        let result = engine.handle_turn(&name, &Slots::new(), &SessionAttributes::new());

        prop_assert!(
            matches!(
                result,
                Err(DialogueError::Dispatch(DispatchError::UnknownIntent(ref rejected))) if *rejected == name
            ),
            "expected UnknownIntent for {}",
            name
        );
    }

    #[test]
    fn history_follows_conversation(
        turns in prop::collection::vec((arbitrary_intent(), arbitrary_value()), 1..10),
    ) {
        let engine = DialogueEngine::default();
        let mut conversation = Conversation::new(&engine);
        conversation.launch();

        let mut recorded = 1;
        for (intent, value) in turns {
            let ended_before = conversation.is_ended();
            conversation.say(intent.name(), &slots_for(intent, &value)).unwrap();
            if !ended_before {
                recorded += 1;
            }
        }

        let history = conversation.history();
        prop_assert_eq!(history.transitions().len(), recorded);

        let path = history.get_path();
        prop_assert_eq!(path.len(), recorded + 1);
        for (transition, reached) in history.transitions().iter().zip(path.iter().skip(1)) {
            prop_assert_eq!(&transition.to, *reached);
        }
        for pair in history.transitions().windows(2) {
            prop_assert_eq!(&pair[0].to, &pair[1].from);
            prop_assert!(!pair[0].to.is_final());
        }
        prop_assert_eq!(conversation.state(), *path[path.len() - 1]);
    }
}
