mod creates_class_and_view_contract;
mod creates_inline_component_contract;
mod dry_run_contract;
mod reads_name_from_stdin_contract;
