use assert_cmd::Command;
use predicates::str::contains;

// Piped stdin puts the binary in non-interactive mode: every "press any key"
// pause consumes one line, so scripts interleave choices with blank lines.

#[test]
fn menu_renders_and_exit_terminates() {
    Command::cargo_bin("td")
        .expect("binary")
        .write_stdin("4\n\n")
        .assert()
        .success()
        .stdout(contains("=== MY TODO LIST ==="))
        .stdout(contains("1. Add task"))
        .stdout(contains("Closing the program gracefully. Bye!"));
}

#[test]
fn end_of_input_terminates_cleanly() {
    Command::cargo_bin("td")
        .expect("binary")
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Choose an option:"));
}

#[test]
fn invalid_choice_returns_to_the_menu() {
    Command::cargo_bin("td")
        .expect("binary")
        .write_stdin("9\n\n4\n\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice. Please try again."));
}

#[test]
fn add_then_list_round_trip() {
    let stdin = "1\n  Buy milk  \n\n2\n\n4\n\n";
    Command::cargo_bin("td")
        .expect("binary")
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(contains("Task \"Buy milk\" has been added."))
        .stdout(contains("1. [ ] Buy milk"));
}

#[test]
fn sixth_add_reports_the_capacity_limit() {
    let mut stdin = String::new();
    for i in 1..=5 {
        stdin.push_str(&format!("1\ntask {i}\n\n"));
    }
    stdin.push_str("1\n\n"); // rejected before the title prompt
    stdin.push_str("4\n\n");

    Command::cargo_bin("td")
        .expect("binary")
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(contains("You can have at most 5 tasks. You cannot add more."));
}

#[test]
fn mark_and_remark_full_flow() {
    let stdin = "1\nWrite report\n\n3\n1\n\n3\n1\n\n3\nabc\n\n3\n9\n\n4\n\n";
    Command::cargo_bin("td")
        .expect("binary")
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(contains("\"Write report\" is now marked as done."))
        .stdout(contains("That task is already marked as done."))
        .stdout(contains("Please enter a valid number."))
        .stdout(contains("That number does not exist."));
}
