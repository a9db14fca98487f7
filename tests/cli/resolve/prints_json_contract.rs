use crate::harness::TestContext;

#[test]
fn resolve_json_is_machine_readable() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["resolve", "admin/settings/Theme", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["component"], "theme");
    assert_eq!(value["class_name"], "Theme");
    assert_eq!(value["class_namespace"], "App\\Http\\Livewire\\Admin\\Settings");
    assert_eq!(value["class_path"], "app/Http/Livewire/Admin/Settings/Theme.php");
    assert_eq!(value["view_name"], "livewire.admin.settings.theme");
}
