use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn make_inline_creates_only_the_class() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["make", "Counter", "--inline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VIEW:").not());

    let class = ctx.read_file("app/Http/Livewire/Counter.php");
    assert!(class.contains("<<<'blade'"));
    ctx.assert_file_not_exists("resources/views/livewire/counter.blade.php");
}
