use af_core::Role;
use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Role", "Uses name", "Example"]);

    for role in Role::all() {
        let personal = if role.personalizes() { "yes" } else { "no" };
        table.add_row(vec![
            role.label().to_string(),
            personal.to_string(),
            role.prank("Alice"),
        ]);
    }

    println!("{table}");
    println!();
    println!("  Any other role receives the \"{}\" prank.", Role::Other);

    Ok(())
}
