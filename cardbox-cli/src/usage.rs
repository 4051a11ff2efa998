//! Static command/usage table
//!
//! This is configuration data, not logic: one usage line per command,
//! rendered as a numbered list at startup.

/// Command name and usage example, in display order
pub const COMMANDS: &[(&str, &str)] = &[
    (
        "create-task",
        "create-task [task name] [dd-mm-yyyy|null] [labels (comma separated, no spaces)] [todo|doing|done]",
    ),
    ("show-all-tasks", "show-all-tasks"),
    ("edit-task", "edit-task [card number]"),
    ("add (while editing labels)", "add [color name]"),
    ("remove (while editing labels)", "remove [color name]"),
    ("changeto (while editing status)", "changeto [status name]"),
    ("delete-task", "delete-task 3"),
    ("show-detail", "show-detail 2"),
    ("filter-by", "filter-by [status|label|subject] [value]"),
];

/// Render the numbered command table printed at startup
pub fn render_command_table() -> String {
    let mut text =
        String::from("You can use the commands below to interact with the application:\n");
    for (index, (name, example)) in COMMANDS.iter().enumerate() {
        text.push_str(&format!("\n{}-  {}\n  Ex: {}", index + 1, name, example));
    }
    text
}
