//! Property tests for the question list operations.

use std::collections::BTreeSet;

use proptest::prelude::*;
use survey_builder::{
    Direction, Question, QuestionId, QuestionKind, QuestionList, QuestionPatch, QuestionType,
};

fn arb_kind() -> impl Strategy<Value = QuestionKind> {
    let options = prop::collection::vec("[A-Za-z ]{0,8}", 0..4);
    (prop::sample::select(QuestionType::ALL.to_vec()), options)
        .prop_map(|(question_type, options)| QuestionKind::new(question_type, options))
}

fn arb_list() -> impl Strategy<Value = QuestionList> {
    prop::collection::vec(("[a-z ]{0,12}", arb_kind(), any::<bool>()), 0..12).prop_map(
        |questions| {
            questions
                .into_iter()
                .enumerate()
                .map(|(i, (prompt, kind, required))| {
                    Question::new(i.to_string(), prompt, kind).with_required(required)
                })
                .collect::<QuestionList>()
        },
    )
}

fn arb_patch() -> impl Strategy<Value = QuestionPatch> {
    (
        prop::option::of("[a-z ]{0,12}"),
        prop::option::of(prop::sample::select(QuestionType::ALL.to_vec())),
        prop::option::of(prop::collection::vec("[A-Z]{1,4}", 0..4)),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(prompt, question_type, options, required)| QuestionPatch {
            prompt,
            question_type,
            options,
            required,
        })
}

fn ids(list: &QuestionList) -> Vec<QuestionId> {
    list.ids().cloned().collect()
}

proptest! {
    /// Appending and removing leaves exactly the ids that were appended and not removed.
    #[test]
    fn prop_append_remove_keeps_survivors(
        list in arb_list(),
        extra in 0usize..6,
        removals in prop::collection::vec(0usize..24, 0..8),
    ) {
        let mut list = list;
        let mut expected: BTreeSet<QuestionId> = list.ids().cloned().collect();
        for _ in 0..extra {
            let id = list.append(Question::unassigned("added", QuestionKind::Text));
            prop_assert!(expected.insert(id), "appended id must be fresh");
        }
        for removal in removals {
            let id = QuestionId::new(removal.to_string());
            let removed = list.remove_by_id(&id);
            prop_assert_eq!(removed.is_some(), expected.remove(&id));
        }

        let actual: BTreeSet<QuestionId> = list.ids().cloned().collect();
        prop_assert_eq!(actual.len(), list.len(), "ids stay unique");
        prop_assert_eq!(actual, expected);
    }

    /// Moving a question and moving it back restores the original order.
    #[test]
    fn prop_move_round_trip(list in arb_list(), from in 0usize..12, to in 0usize..12) {
        let mut list = list;
        let before = ids(&list);
        let in_range = from < list.len() && to < list.len();

        prop_assert_eq!(list.move_by_index(from, to), in_range);
        if in_range {
            prop_assert_eq!(list.questions()[to].id(), &before[from]);
            prop_assert!(list.move_by_index(to, from));
        }
        prop_assert_eq!(ids(&list), before);
    }

    /// Applying the same patch twice is the same as applying it once.
    #[test]
    fn prop_update_is_idempotent(list in arb_list(), target in 0usize..12, patch in arb_patch()) {
        let id = QuestionId::new(target.to_string());
        let mut once = list.clone();
        let found = once.update_by_id(&id, &patch);
        prop_assert_eq!(found, list.contains(&id));

        let mut twice = once.clone();
        twice.update_by_id(&id, &patch);
        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(ids(&once), ids(&list));
    }

    /// Unknown ids and out-of-range indices never change the list.
    #[test]
    fn prop_stale_references_are_no_ops(
        list in arb_list(),
        index in 12usize..100,
        patch in arb_patch(),
    ) {
        let mut list = list;
        let before = list.clone();
        let stale = QuestionId::new("deleted");
        let first = list.ids().next().cloned().unwrap_or_else(|| stale.clone());

        prop_assert!(list.remove_by_id(&stale).is_none());
        prop_assert!(!list.update_by_id(&stale, &patch));
        prop_assert!(!list.move_adjacent(&stale, Direction::Down));
        prop_assert!(!list.reorder(&stale, &first));
        prop_assert!(!list.reorder(&first, &stale));
        prop_assert!(!list.move_by_index(index, 0));
        prop_assert!(!list.move_by_index(0, index));
        prop_assert_eq!(list, before);
    }
}
