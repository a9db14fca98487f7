use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn resolve_prints_derived_names() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["resolve", "UserProfile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user-profile"))
        .stdout(predicate::str::contains("UserProfile"))
        .stdout(predicate::str::contains("livewire.user-profile"));

    ctx.assert_file_not_exists("app/Http/Livewire/UserProfile.php");
}

#[test]
fn resolve_rejects_separator_only_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["r", "////"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid component name"));
}
