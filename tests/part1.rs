use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("demo_inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("After 5 cycle(s)").and(str::contains("there are 37 seats")));
}

#[test]
fn part1_sequential_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.args(["--sequential", "demo_inputs.txt"]);

    cmd.assert().success().stdout(str::contains("there are 37 seats"));
}

#[test]
fn part1_shows_every_cycle() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.args(["--show", "demo_inputs.txt"]);

    cmd.assert().success().stdout(
        str::contains("Cycle 1:\n#.##.##.##\n#######.##")
            .and(str::contains("Cycle 2:\n#.LL.L#.##"))
            .and(str::contains("Cycle 6:"))
            .and(str::contains("Cycle 7:").not()),
    );
}

#[test]
fn part1_fails_without_enough_cycles() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.args(["--max-cycles", "5", "demo_inputs.txt"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("doesn't stabilize in 5 cycle(s)"));
}

#[test]
fn part1_fails_on_missing_input() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("no_such_inputs.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("no_such_inputs.txt"));
}
