use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "dealer_desk_cli";

fn desk_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("DEALER_DESK_HOME", home.path());
    cmd
}

#[test]
fn no_arguments_prints_the_overview() {
    let home = TempDir::new().expect("tempdir");
    desk_command(&home)
        .assert()
        .success()
        .stdout(contains("Commands:").and(contains("buy")));
}

#[test]
fn version_prints_version_info() {
    let home = TempDir::new().expect("tempdir");
    desk_command(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(contains("dealer-desk"));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = TempDir::new().expect("tempdir");
    desk_command(&home)
        .arg("sumary")
        .assert()
        .failure()
        .stderr(contains("did you mean `summary`"));
}

#[test]
fn purchases_flow_into_the_reports() {
    let home = TempDir::new().expect("tempdir");

    desk_command(&home)
        .args(["add-car", "sedan", "100", "5"])
        .assert()
        .success()
        .stdout(contains("Added `sedan`"));

    desk_command(&home)
        .args(["buy", "sedan", "2"])
        .assert()
        .success()
        .stdout(contains("Purchased 2 x `sedan`").and(contains("3 left")));

    desk_command(&home)
        .args(["cars"])
        .assert()
        .success()
        .stdout(contains("sedan").and(contains("100.00")));

    desk_command(&home)
        .args(["summary"])
        .assert()
        .success()
        .stdout(contains("200.00"));

    desk_command(&home)
        .args(["yearly"])
        .assert()
        .success()
        .stdout(contains("sedan").and(contains("x2")));

    desk_command(&home)
        .args(["top-cars"])
        .assert()
        .success()
        .stdout(contains("sedan"));
}

#[test]
fn reports_can_render_json() {
    let home = TempDir::new().expect("tempdir");

    desk_command(&home)
        .args(["add-car", "sedan", "100", "5"])
        .assert()
        .success();
    desk_command(&home)
        .args(["buy", "sedan", "1"])
        .assert()
        .success();

    desk_command(&home)
        .args(["summary", "--json"])
        .assert()
        .success()
        .stdout(contains("total_revenue").and(contains("100.0")));

    desk_command(&home)
        .args(["top-cars-revenue", "--json"])
        .assert()
        .success()
        .stdout(contains("total_price"));
}

#[test]
fn overselling_is_rejected_with_a_clear_error() {
    let home = TempDir::new().expect("tempdir");

    desk_command(&home)
        .args(["add-car", "coupe", "250", "1"])
        .assert()
        .success();

    desk_command(&home)
        .args(["buy", "coupe", "5"])
        .assert()
        .failure()
        .stderr(contains("Not enough stock"));

    desk_command(&home)
        .args(["buy", "unknown-car", "1"])
        .assert()
        .failure()
        .stderr(contains("Car not found"));
}

#[test]
fn restock_extends_the_sellable_inventory() {
    let home = TempDir::new().expect("tempdir");

    desk_command(&home)
        .args(["add-car", "coupe", "250", "1"])
        .assert()
        .success();
    desk_command(&home)
        .args(["buy", "coupe", "1"])
        .assert()
        .success();
    desk_command(&home)
        .args(["buy", "coupe", "1"])
        .assert()
        .failure()
        .stderr(contains("Out of stock"));

    desk_command(&home)
        .args(["restock", "coupe", "4"])
        .assert()
        .success()
        .stdout(contains("now 4"));
    desk_command(&home)
        .args(["buy", "coupe", "1"])
        .assert()
        .success();
}

#[test]
fn renames_surface_dangling_references_in_check() {
    let home = TempDir::new().expect("tempdir");

    desk_command(&home)
        .args(["add-car", "sedan", "100", "2"])
        .assert()
        .success();
    desk_command(&home)
        .args(["buy", "sedan", "1"])
        .assert()
        .success();
    desk_command(&home)
        .args(["edit-car", "sedan", "--name", "saloon"])
        .assert()
        .success();

    desk_command(&home)
        .args(["check"])
        .assert()
        .success()
        .stdout(contains("sedan").and(contains("saloon")));
}

#[test]
fn lots_and_backups_round_trip() {
    let home = TempDir::new().expect("tempdir");

    desk_command(&home)
        .args(["add-car", "sedan", "100", "2"])
        .assert()
        .success();

    desk_command(&home)
        .args(["lots"])
        .assert()
        .success()
        .stdout(contains("main").and(contains("1 cars")));

    desk_command(&home)
        .args(["backup", "nightly"])
        .assert()
        .success()
        .stdout(contains("Backup created").and(contains("nightly")));
}
