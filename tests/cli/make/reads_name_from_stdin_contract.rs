use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn make_reads_missing_name_from_stdin() {
    let ctx = TestContext::new();

    ctx.cli().arg("make").write_stdin("UserProfile\n").assert().success();

    ctx.assert_file_exists("app/Http/Livewire/UserProfile.php");
    ctx.assert_file_exists("resources/views/livewire/user-profile.blade.php");
}

#[test]
fn make_rejects_empty_stdin_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("make")
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid component name"));
}
