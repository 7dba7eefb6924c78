//! Author a small quiz and print its wire-format JSON.
//!
//! Run with: cargo run -p quiz-draft --example build_quiz

use quiz_draft::{AnswerMode, QuizEditor, RecordingSurface};

fn main() -> anyhow::Result<()> {
    let mut editor = QuizEditor::new(RecordingSurface::new());
    editor.set_title("Rust Warmup");

    let q1 = editor.add_question();
    editor.set_question_text(q1, "What does `Vec::new()` allocate?");
    editor.set_choice_text(q1, 0, "Nothing until the first push");
    editor.add_choice(q1);
    editor.set_choice_text(q1, 1, "One machine word on the heap");
    editor.set_choice_selected(q1, 0, true);

    let q2 = editor.add_question();
    editor.set_question_text(q2, "Which of these compile?");
    editor.set_code_snippet(q2, "let x = 1;\nlet y = &x;");
    editor.set_question_mode(q2, AnswerMode::Multiple);
    editor.set_choice_text(q2, 0, "As written");
    editor.add_choice(q2);
    editor.set_choice_text(q2, 1, "With `mut` added to `y`");
    editor.set_choice_selected(q2, 0, true);
    editor.set_choice_selected(q2, 1, true);

    editor.validate()?;
    println!("{}", serde_json::to_string_pretty(&editor.to_document())?);
    Ok(())
}
