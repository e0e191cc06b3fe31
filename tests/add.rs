use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn add_then_display() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .current_dir(dir.path())
        .env_remove("CONTACTS_FILE")
        .write_stdin("2\nAnn\nLee\nann@x.com\n123\n2\nBob\nStone\nbob@y.org\n456\n1\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully."))
        .stdout(predicate::str::contains(
            "Ann Lee (ann@x.com, 123)\nBob Stone (bob@y.org, 456)\n",
        ));

    Ok(())
}

#[test]
fn add_reprompts_on_invalid_email_and_phone() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .current_dir(dir.path())
        .env_remove("CONTACTS_FILE")
        .write_stdin("2\nAnn\nLee\nnot-an-email\n ann@x.com\nann@x.com\n080-123\n080123\n1\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter email address: Invalid email address. Please enter a valid email address.\n\
             Enter email address: Invalid email address. Please enter a valid email address.\n\
             Enter email address: Enter phone number: ",
        ))
        .stdout(predicate::str::contains(
            "Invalid phone number. Please enter a valid phone number.",
        ))
        .stdout(predicate::str::contains("Ann Lee (ann@x.com, 080123)"));

    Ok(())
}
