/// Create the questions table; every question references a category
pub fn migration() -> String {
    r#"
CREATE TABLE questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    difficulty INTEGER NOT NULL CHECK (difficulty >= 1),
    category INTEGER NOT NULL,
    FOREIGN KEY (category) REFERENCES categories (id)
);

CREATE INDEX idx_questions_category
    ON questions(category);
"#
    .to_string()
}
