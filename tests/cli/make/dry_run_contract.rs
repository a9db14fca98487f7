use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn make_dry_run_prints_without_writing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["make", "Counter", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would be created"))
        .stdout(predicate::str::contains("class Counter extends Component"));

    ctx.assert_file_not_exists("app/Http/Livewire/Counter.php");
    ctx.assert_file_not_exists("resources/views/livewire/counter.blade.php");
}
