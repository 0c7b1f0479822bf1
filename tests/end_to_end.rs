//! End-to-end tests driving the built `pera` binary against small source
//! files, checked the way `faxc-drv`'s e2e suite does
//! (`examples/Luvion1-Fax/faxc/crates/faxc-drv/tests/e2e/cli_tests.rs`):
//! `assert_cmd` spawns the binary, `predicates` checks the captured stdout.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn run_source(source: &str) -> assert_cmd::assert::Assert {
    let mut file = NamedTempFile::new().expect("create temp source file");
    file.write_all(source.as_bytes()).expect("write source");
    let mut cmd = Command::cargo_bin("pera").expect("find pera binary");
    cmd.arg(file.path());
    cmd.assert()
}

#[test]
fn prints_the_sum_of_two_numbers() {
    run_source("(print (+ 1 2))")
        .success()
        .stdout(predicate::str::contains("3"));
}

#[test]
fn concatenates_two_strings() {
    run_source(r#"(print (.. "foo" "bar"))"#)
        .success()
        .stdout(predicate::str::contains("\"foobar\""));
}

#[test]
fn do_block_mutates_a_local_and_the_result_survives_scope_close() {
    run_source("(do (put x 10) (put x (+ x 5)) (print x))")
        .success()
        .stdout(predicate::str::contains("15"));
}

#[test]
fn global_put_is_visible_to_a_later_top_level_form() {
    run_source("(put _g 7) (print _g)")
        .success()
        .stdout(predicate::str::contains("7"));
}

#[test]
fn function_call_computes_its_result() {
    run_source("(on (sq n) (* n n)) (print (sq 6))")
        .success()
        .stdout(predicate::str::contains("36"));
}

#[test]
fn while_loop_counts_up_to_its_bound() {
    run_source("(put i 0) (while (not (= i 3)) (do (print i) (put i (+ i 1))))")
        .success()
        .stdout(
            predicate::str::contains("0")
                .and(predicate::str::contains("1"))
                .and(predicate::str::contains("2")),
        );
}

#[test]
fn if_picks_the_then_branch_when_condition_is_truthy() {
    run_source("(print (if (= 1 1) 10 20))")
        .success()
        .stdout(predicate::str::contains("10"));
}

#[test]
fn if_picks_the_else_branch_when_condition_is_falsy() {
    run_source("(print (if (= 1 2) 10 20))")
        .success()
        .stdout(predicate::str::contains("20"));
}

#[test]
fn recursive_global_function_computes_a_factorial() {
    run_source(
        "(on (_fact n) (if (= n 0) 1 (* n (_fact (- n 1))))) (print (_fact 5))",
    )
    .success()
    .stdout(predicate::str::contains("120"));
}

#[test]
fn calling_an_undeclared_global_is_a_compile_error() {
    run_source("(print _nope)")
        .failure()
        .stderr(predicate::str::contains("pera:"));
}

#[test]
fn a_source_file_that_does_not_exist_fails_cleanly() {
    Command::cargo_bin("pera")
        .unwrap()
        .arg("/no/such/file.pera")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pera:"));
}
