//! 多选组合框 `Session` 的行为测试。

use combo_core::{
    key_event::{Action, InputEvent},
    session::Session,
    store::CandidateStore,
};
use rstest::rstest;

fn session_with(menu: &[&str]) -> Session {
    Session::new(CandidateStore::new(menu.iter().map(|s| s.to_string()).collect()))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[rstest]
#[case("banana")]
#[case("BANANA")]
#[case("Banana")]
fn typing_exact_match_selects_menu_item(#[case] typed: &str) {
    let mut session = session_with(&["Apple", "Banana"]);
    let (view, actions) = session.handle(InputEvent::TextChanged(typed.into()));
    assert_eq!(view.selected, strings(&["Banana"]));
    assert_eq!(view.value, "");
    assert_eq!(actions.iter().filter(|a| **a == Action::FocusInput).count(), 1);
}

#[test]
fn retyping_selected_item_is_idempotent() {
    let mut session = session_with(&["Apple", "Banana"]);
    session.handle(InputEvent::TextChanged("Banana".into()));
    let (view, actions) = session.handle(InputEvent::TextChanged("Banana".into()));
    assert_eq!(view.selected, strings(&["Banana"]));
    assert!(!actions.contains(&Action::FocusInput));
}

#[test]
fn delete_key_pops_most_recent() {
    let mut session = session_with(&["Apple", "Banana"]);
    session.handle(InputEvent::CandidateChosen("Apple".into()));
    session.handle(InputEvent::CandidateChosen("Banana".into()));
    let (view, actions) = session.handle(InputEvent::DeleteKeyOnEmptyInput);
    assert_eq!(view.selected, strings(&["Apple"]));
    assert_eq!(actions, vec![Action::FocusInput]);
}

#[test]
fn delete_key_on_empty_selection_is_noop() {
    let mut session = session_with(&["Apple"]);
    let (view, _) = session.handle(InputEvent::DeleteKeyOnEmptyInput);
    assert!(view.selected.is_empty());
    assert_eq!(view.value, "");
}

#[test]
fn delete_key_with_pending_text_is_ignored() {
    let mut session = session_with(&["Apple", "Banana"]);
    session.handle(InputEvent::CandidateChosen("Apple".into()));
    session.handle(InputEvent::TextChanged("Ba".into()));
    let (view, actions) = session.handle(InputEvent::DeleteKeyOnEmptyInput);
    assert_eq!(view.selected, strings(&["Apple"]));
    assert_eq!(view.value, "Ba");
    assert!(actions.is_empty());
}

#[test]
fn filter_preserves_menu_order() {
    let mut session = session_with(&["Apple", "Apricot", "Banana"]);
    let (view, _) = session.handle(InputEvent::TextChanged("Ap".into()));
    assert_eq!(view.filtered, strings(&["Apple", "Apricot"]));
    assert_eq!(view.value, "Ap");
}

#[rstest]
#[case("Apple", &["Banana"])]
#[case("Cherry", &["Apple", "Banana"])]
#[case("apple", &["Apple", "Banana"])]
fn removing_token(#[case] removed: &str, #[case] expected: &[&str]) {
    let mut session = session_with(&["Apple", "Banana"]);
    session.handle(InputEvent::CandidateChosen("Apple".into()));
    session.handle(InputEvent::CandidateChosen("Banana".into()));
    let (view, actions) = session.handle(InputEvent::TokenRemoved(removed.into()));
    assert_eq!(view.selected, strings(expected));
    assert_eq!(view.value, "");
    assert_eq!(actions, vec![Action::FocusInput]);
}

#[test]
fn removed_token_returns_to_menu() {
    let mut session = session_with(&["Apple", "Banana"]);
    session.handle(InputEvent::CandidateChosen("Apple".into()));
    assert_eq!(session.view().filtered, strings(&["Banana"]));
    let (view, _) = session.handle(InputEvent::TokenRemoved("Apple".into()));
    assert_eq!(view.filtered, strings(&["Apple", "Banana"]));
}

#[test]
fn container_click_opens_menu_and_focuses() {
    let mut session = session_with(&["Apple"]);
    let before = session.context().clone();
    let (_, actions) = session.handle(InputEvent::ContainerActivated);
    assert_eq!(actions, vec![Action::OpenMenu, Action::FocusInput]);
    assert_eq!(session.context(), &before);
}

#[test]
fn case_variants_resolve_to_first_in_list() {
    let mut session = session_with(&["Banana", "BANANA"]);
    let (view, _) = session.handle(InputEvent::TextChanged("banana".into()));
    assert_eq!(view.selected, strings(&["Banana"]));
    assert_eq!(view.filtered, strings(&["BANANA"]));
}

#[test]
fn auto_select_ignores_custom_predicate_case_rules() {
    let mut session = session_with(&["Apple", "Banana"]);
    session.set_filter_menu(Box::new(|input: &str, item: &str| item.starts_with(input)));
    let (view, _) = session.handle(InputEvent::TextChanged("apple".into()));
    assert_eq!(view.selected, strings(&["Apple"]));
}

#[test]
fn replacing_menu_list_refreshes_filter() {
    let mut session = session_with(&["Apple"]);
    session.set_menu_list(strings(&["Cherry", "Apple"]));
    assert_eq!(session.view().filtered, strings(&["Cherry", "Apple"]));
}
