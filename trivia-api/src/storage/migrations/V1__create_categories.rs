/// Create the categories table
pub fn migration() -> String {
    r#"
CREATE TABLE categories (
    id INTEGER PRIMARY KEY,
    type TEXT NOT NULL
);
"#
    .to_string()
}
