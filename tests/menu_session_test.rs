//! Tests for the interactive menu driven by scripted input

use std::io::Cursor;

use bstree::application::MenuSession;
use bstree::config::Settings;

fn quiet_settings() -> Settings {
    Settings {
        clear_screen: false,
        pause: false,
        separator: " ".into(),
    }
}

fn run_script(script: &str) -> (Vec<i64>, String) {
    let mut session = MenuSession::new(quiet_settings(), Cursor::new(script.to_string()), Vec::new());
    session.run().expect("session runs");
    let (tree, output) = session.into_parts();
    (tree.in_order(), String::from_utf8(output).expect("utf8 output"))
}

#[test]
fn given_inserts_and_traversals_when_running_then_prints_both_orders() {
    // Arrange
    let script = "1\n50\n1\n30\n1\n70\n4\n5\n6\n";

    // Act
    let (keys, output) = run_script(script);

    // Assert
    assert_eq!(keys, vec![30, 50, 70]);
    assert_eq!(output.matches("Value inserted.").count(), 3);
    assert!(output.contains("Inorder traversal:\n30 50 70\n"));
    assert!(output.contains("Level-order traversal:\n50 30 70\n"));
    assert!(output.trim_end().ends_with("Exiting program..."));
}

#[test]
fn given_search_and_delete_when_running_then_reports_outcomes() {
    let script = "1\n10\n3\n10\n3\n11\n2\n10\n2\n10\n6\n";

    let (keys, output) = run_script(script);

    assert!(keys.is_empty());
    assert!(output.contains("Value found in the tree."));
    assert!(output.contains("Value NOT found."));
    assert!(output.contains("Value deleted."));
    assert!(output.contains("Value not found."));
}

#[test]
fn given_duplicate_insert_when_running_then_reports_already_present() {
    let (keys, output) = run_script("1\n10\n1\n10\n6\n");

    assert_eq!(keys, vec![10]);
    assert!(output.contains("Value already present."));
}

#[test]
fn given_invalid_choices_when_running_then_reprompts() {
    let (keys, output) = run_script("abc\n9\n1\n5\n6\n");

    assert_eq!(keys, vec![5]);
    assert!(output.contains("Invalid input."));
    assert!(output.contains("Invalid choice."));
    assert_eq!(output.matches("--- Binary Search Tree Menu ---").count(), 4);
}

#[test]
fn given_non_numeric_operand_when_running_then_asks_again() {
    let (keys, output) = run_script("1\nforty\n40\n6\n");

    assert_eq!(keys, vec![40]);
    assert_eq!(output.matches("Enter value to insert: ").count(), 2);
    assert!(output.contains("Please enter an integer."));
}

#[test]
fn given_input_ends_early_when_running_then_stops_cleanly() {
    let (keys, output) = run_script("1\n7\n1\n");

    assert_eq!(keys, vec![7]);
    assert!(!output.contains("Exiting program..."));
}

#[test]
fn given_interactive_settings_when_running_then_clears_and_pauses() {
    let settings = Settings {
        clear_screen: true,
        pause: true,
        separator: ",".into(),
    };
    // operand, then Enter for the pause, then exit
    let script = "1\n3\n\n4\n\n6\n";
    let mut session = MenuSession::new(settings, Cursor::new(script.to_string()), Vec::new());

    session.run().expect("session runs");

    assert_eq!(session.tree().in_order(), vec![3]);
    let (_, output) = session.into_parts();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("\x1B[2J"));
    assert_eq!(output.matches("Press Enter to continue...").count(), 2);
    assert!(output.contains("Inorder traversal:\n3\n"));
}

#[test]
fn given_out_of_range_choice_when_clearing_then_screen_cleared_before_message() {
    let settings = Settings {
        clear_screen: true,
        pause: false,
        separator: " ".into(),
    };
    let script = "9\nabc\n6\n";
    let mut session = MenuSession::new(settings, Cursor::new(script.to_string()), Vec::new());

    session.run().expect("session runs");

    let (_, output) = session.into_parts();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("\x1B[2J\x1B[1;1HInvalid choice."));
    // unparseable text keeps the menu on screen
    assert!(output.contains("Enter your choice: Invalid input."));
}
