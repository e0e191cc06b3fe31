use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

#[test]
fn quit_says_goodbye() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .current_dir(dir.path())
        .env_remove("CONTACTS_FILE")
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(contains("Welcome to the Contact Manager!"))
        .stdout(contains("5. Search for a contact by name"))
        .stdout(contains("Enter your choice (1-8): Goodbye!\n"));

    Ok(())
}

#[test]
fn unknown_choice_redisplays_menu() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .current_dir(dir.path())
        .env_remove("CONTACTS_FILE")
        .write_stdin("hello\n 1\n9\n8\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output)?;
    assert_eq!(
        stdout
            .matches("Invalid input. Please enter a number between 1 and 8.")
            .count(),
        3
    );
    assert_eq!(stdout.matches("Welcome to the Contact Manager!").count(), 4);

    Ok(())
}

#[test]
fn closed_input_exits_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .current_dir(dir.path())
        .env_remove("CONTACTS_FILE")
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(contains("There are no contacts to display."));

    Ok(())
}
