use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn make_creates_class_and_view() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["make", "admin.settings.Theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created component 'theme'"))
        .stdout(predicate::str::contains("app/Http/Livewire/Admin/Settings/Theme.php"))
        .stdout(predicate::str::contains(
            "resources/views/livewire/admin/settings/theme.blade.php",
        ));

    let class = ctx.read_file("app/Http/Livewire/Admin/Settings/Theme.php");
    assert!(class.contains("namespace App\\Http\\Livewire\\Admin\\Settings;"));
    assert!(class.contains("class Theme extends Component"));
    assert!(class.contains("view('livewire.admin.settings.theme')"));

    ctx.assert_file_exists("resources/views/livewire/admin/settings/theme.blade.php");
}

#[test]
fn make_alias_accepts_path_style_names() {
    let ctx = TestContext::new();

    ctx.cli().args(["mk", "users/ShowPosts"]).assert().success();

    ctx.assert_file_exists("app/Http/Livewire/Users/ShowPosts.php");
    ctx.assert_file_exists("resources/views/livewire/users/show-posts.blade.php");
}

#[test]
fn make_uses_project_config() {
    let ctx = TestContext::new();
    ctx.write_config(
        r#"
[app]
namespace = "Acme"
path = "src"

[components]
class_namespace = "Acme\\Ui"
view_path = "templates/ui"
views_root = "templates"
view_suffix = ".html.twig"
"#,
    );

    ctx.cli().args(["make", "Button"]).assert().success();

    let class = ctx.read_file("src/Ui/Button.php");
    assert!(class.contains("namespace Acme\\Ui;"));
    assert!(class.contains("view('ui.button')"));
    ctx.assert_file_exists("templates/ui/button.html.twig");
}
