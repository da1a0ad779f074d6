//! End-to-end CRUD screen sessions on a scripted terminal.

use std::cell::Cell;
use std::rc::Rc;

use textui::tabular::Align;
use textui::widgets::TextBox;
use textui::{
    Binding, ColumnSpec, Crud, CrudError, CrudText, Flow, MockTerminal, Record, RenderError,
    Terminal,
};

fn records(n: usize) -> Vec<Record> {
    (1..=n)
        .map(|i| Record::new().with("id", i as i64).with("name", format!("r{}", i)))
        .collect()
}

fn name(record: Option<&Record>) -> Option<String> {
    record.and_then(|r| r.get("name")).map(ToString::to_string)
}

/// 15 lines leave room for three rows per page.
fn term(responses: &[&str]) -> MockTerminal {
    MockTerminal::new(100, 15).with_responses(responses.iter().copied())
}

#[test]
fn five_records_paged_by_three() {
    let mut crud = Crud::builder("Records").data(records(5)).build().unwrap();
    let mut t = term(&["+", "2", "2"]);

    assert_eq!(crud.run(&mut t).unwrap(), Flow::Continue);
    assert!(t.last_screen().contains("Page 1 / 2 [Selected page: p#]"));
    assert_eq!(crud.state().current_page(), 2);

    crud.run(&mut t).unwrap();
    assert!(t.last_screen().contains("Page 2 / 2"));
    assert_eq!(name(crud.state().selected_record()).as_deref(), Some("r5"));
    assert_eq!(crud.state().selected_index(), Some(4));

    crud.run(&mut t).unwrap();
    assert!(t.last_screen().contains(">  2 "));
    assert_eq!(crud.state().selected_index(), None);
}

#[test]
fn pages_concatenate_to_the_dataset() {
    let mut crud = Crud::builder("Records").data(records(7)).build().unwrap();
    let mut t = term(&["1"]);
    crud.run(&mut t).unwrap();

    let pager = crud.state().pager();
    let pages: Vec<Record> = (1..=pager.page_count())
        .flat_map(|p| pager.page(p).to_vec())
        .collect();
    assert_eq!(pager.page_count(), 3);
    assert_eq!(pages, records(7));
}

#[test]
fn update_without_selection_leaves_a_message() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut crud = Crud::builder("Records")
        .data(records(3))
        .update(Binding::new('E', "Edit").on(move |_, _| {
            counter.set(counter.get() + 1);
            Ok(Flow::Continue)
        }))
        .build()
        .unwrap();
    let mut t = term(&["E", "3", "e"]);

    crud.run(&mut t).unwrap();
    assert_eq!(calls.get(), 0);

    crud.run(&mut t).unwrap();
    assert!(t.last_screen().contains("⚠ No record selected!"));
    assert_eq!(name(crud.state().selected_record()).as_deref(), Some("r3"));

    crud.run(&mut t).unwrap();
    assert_eq!(calls.get(), 1);
}

#[test]
fn insert_handler_replaces_data() {
    let mut crud = Crud::builder("Records")
        .data(records(2))
        .insert(Binding::new('N', "New").on(|state, _| {
            let mut data = state.data().to_vec();
            data.push(Record::new().with("id", 3).with("name", "r3"));
            state.set_data(data);
            state.set_message("Record added.");
            Ok(Flow::Continue)
        }))
        .build()
        .unwrap();
    let mut t = term(&["n", "q"]);

    crud.run_loop(&mut t).unwrap();
    assert_eq!(crud.state().data().len(), 3);
    assert!(t.last_screen().contains("Record added."));
    assert!(t.last_screen().contains("<[N] New> <[Q] Quit>"));
    assert_eq!(t.pending_responses(), 0);
}

#[test]
fn navigation_mistakes() {
    let mut crud = Crud::builder("Records").data(records(5)).build().unwrap();
    let mut t = term(&["p3", "+5", "zz", "1"]);

    crud.run(&mut t).unwrap();
    assert_eq!(crud.state().current_page(), 1);

    crud.run(&mut t).unwrap();
    assert!(t.last_screen().contains("This page does not exist."));
    assert_eq!(crud.state().current_page(), 2);

    crud.run(&mut t).unwrap();
    assert!(!t.last_screen().contains("This page does not exist."));

    crud.run(&mut t).unwrap();
    assert!(t.last_screen().contains("⚠️ Unknown command."));
}

#[test]
fn screen_layout() {
    let mut crud = Crud::builder("Inventory")
        .column(ColumnSpec::new("id", "Id").weight(0.2).align(Align::Right))
        .column(ColumnSpec::new("name", "Name"))
        .data(records(2))
        .build()
        .unwrap();
    let mut t = term(&["1"]);
    crud.run(&mut t).unwrap();

    // 100 columns leave 94 for cells: 18 and 75, each cell one narrower.
    let expected = [
        "=".repeat(100),
        "Inventory".to_string(),
        "=".repeat(100),
        " ".to_string(),
        format!("   # {:>17} {:<74}", "Id", "Name"),
        "-".repeat(100),
        format!("   1 {:>17} {:<74}", "1", "r1"),
        format!("   2 {:>17} {:<74}", "2", "r2"),
        "-".repeat(100),
        "Page 1 / 1".to_string(),
        format!("{:>100}", "[Select/Deselect row: #] <[Q] Quit>"),
        "> ".to_string(),
    ];
    let screen: Vec<&str> = t.last_screen().split('\n').collect();
    assert_eq!(screen, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn translated_text() {
    let text = CrudText::from_yaml(
        r#"
page: Página
select_row: Marcar linha
"#,
    )
    .unwrap();
    let mut crud = Crud::builder("Registros")
        .text(text)
        .data(records(1))
        .build()
        .unwrap();
    let mut t = term(&["1"]);
    crud.run(&mut t).unwrap();
    assert!(t.last_screen().contains("Página 1 / 1"));
    assert!(t.last_screen().contains("[Marcar linha: #]"));
}

#[test]
fn handlers_can_use_the_terminal() {
    let mut crud = Crud::builder("Records")
        .data(records(2))
        .view(Binding::new('V', "View").on(|state, term| {
            let detail = format!("{:?}", state.selected_record());
            TextBox::new(detail).draw(term)?;
            term.write("Press enter to go back")?;
            term.read_line()?;
            Ok(Flow::Continue)
        }))
        .build()
        .unwrap();
    let mut t = term(&["2", "v", "", "q"]);
    crud.run_loop(&mut t).unwrap();
    assert!(t.output().contains("Press enter to go back"));
    assert!(t.output().contains("r2"));
}

#[test]
fn narrow_terminal_is_fatal() {
    let mut crud = Crud::builder("Records").data(records(1)).build().unwrap();
    let mut t = MockTerminal::new(80, 24).with_responses(["1"]);
    let err = crud.run(&mut t).unwrap_err();
    assert!(matches!(
        err,
        CrudError::TerminalTooNarrow {
            required: 100,
            actual: 80
        }
    ));
    assert!(t.output().contains("minimum of 100 columns"));

    let mut crud = Crud::builder("Records")
        .data(records(1))
        .min_columns(0)
        .build()
        .unwrap();
    assert!(crud.run(&mut t).is_ok());
}

#[test]
fn undetectable_size_is_fatal() {
    let mut crud = Crud::builder("Records").build().unwrap();
    let err = crud.run(&mut MockTerminal::without_size()).unwrap_err();
    assert!(matches!(
        err,
        CrudError::Render(RenderError::TerminalSizeUnavailable)
    ));
}

#[test]
fn end_of_input_closes_the_screen() {
    let mut crud = Crud::builder("Records").data(records(1)).build().unwrap();
    let err = crud.run_loop(&mut term(&[])).unwrap_err();
    assert!(matches!(err, CrudError::InputClosed));
}

#[test]
fn shrinking_data_keeps_a_valid_page() {
    let mut crud = Crud::builder("Records").data(records(7)).build().unwrap();
    let mut t = term(&["p3", "1"]);
    crud.run(&mut t).unwrap();
    assert_eq!(crud.state().current_page(), 3);

    crud.set_data(records(2));
    crud.run(&mut t).unwrap();
    assert_eq!(crud.state().current_page(), 1);
    assert_eq!(name(crud.state().selected_record()).as_deref(), Some("r1"));
}
