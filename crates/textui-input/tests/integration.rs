//! Entries driven in sequence over one scripted terminal.

use chrono::NaiveDate;
use textui_input::{
    DateEntry, Entry, HiddenEntry, InputError, MultiSelector, NumberEntry, NumberKind,
    SingleSelector, TextEntry, TextMultiLineEntry,
};
use textui_render::{MockTerminal, Value};

fn questionnaire() -> Vec<Box<dyn Entry>> {
    vec![
        Box::new(TextEntry::new("Name: ")),
        Box::new(NumberEntry::new("Age: ").kind(NumberKind::Integer)),
        Box::new(DateEntry::new("Born: ", "%d/%m/%Y")),
        Box::new(SingleSelector::new("Gender:", [("M", "Male"), ("F", "Female")]).unwrap()),
        Box::new(
            MultiSelector::new("Hobbies:", [("1", "Music"), ("2", "Games"), ("3", "Books")])
                .unwrap()
                .clear_screen(false),
        ),
        Box::new(TextMultiLineEntry::new("Notes:")),
        Box::new(HiddenEntry::new("web")),
    ]
}

#[test]
fn entries_consume_input_in_order() {
    let mut term = MockTerminal::new(80, 24).with_responses([
        "John", "43", "15/04/1981", "M", "3", "1", "", "likes tea", "",
    ]);

    let answers: Vec<Value> = questionnaire()
        .iter_mut()
        .map(|entry| entry.read(&mut term))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        answers,
        vec![
            Value::from("John"),
            Value::Integer(43),
            Value::from(NaiveDate::from_ymd_opt(1981, 4, 15).unwrap()),
            Value::from("Male"),
            Value::List(vec!["Music".into(), "Books".into()]),
            Value::List(vec!["likes tea".into()]),
            Value::from("web"),
        ]
    );
    assert_eq!(term.pending_responses(), 0);
}

#[test]
fn running_out_of_input_cancels() {
    let mut term = MockTerminal::new(80, 24).with_responses(["John"]);
    let mut entries = questionnaire();
    assert!(entries[0].read(&mut term).is_ok());
    assert!(matches!(
        entries[1].read(&mut term),
        Err(InputError::PromptCancelled)
    ));
}

#[test]
fn reviewable_flags() {
    let flags: Vec<bool> = questionnaire().iter().map(|e| e.reviewable()).collect();
    assert_eq!(flags, vec![true, true, true, true, true, true, false]);
}
