use exam_cli::admin::{add_question, delete_question, list_questions};
use question_store::{InMemoryStore, NewQuestion, QuestionStore};

fn new_question() -> NewQuestion {
    NewQuestion::new(
        "Which number is correct?",
        vec!["4".to_string(), "5".to_string(), "22".to_string()],
        2,
    )
}

#[tokio::test]
async fn list_marks_correct_option() {
    let store = InMemoryStore::new();
    add_question(&store, new_question(), &mut Vec::<u8>::new())
        .await
        .unwrap();

    let mut output = Vec::new();
    list_questions(&store, &mut output).await.unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with("Existing Questions (1)"));
    assert!(output.contains("Which number is correct?"));
    assert!(output.contains("  - 22 (Correct)"));
    assert!(output.contains("  - 4\n"));
}

#[tokio::test]
async fn add_rejects_out_of_range_index() {
    let store = InMemoryStore::new();
    let mut output: Vec<u8> = Vec::new();

    let result = add_question(
        &store,
        NewQuestion::new("Pick one", vec!["a".to_string(), "b".to_string()], 2),
        &mut output,
    )
    .await;

    assert!(result.is_err());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_asks_for_confirmation() {
    let store = InMemoryStore::new();
    let question = add_question(&store, new_question(), &mut Vec::<u8>::new())
        .await
        .unwrap();

    let mut output = Vec::new();
    let deleted = delete_question(&store, &question.id, false, &mut "n\n".as_bytes(), &mut output)
        .await
        .unwrap();
    assert!(!deleted);
    assert_eq!(store.list().await.unwrap().len(), 1);

    let deleted = delete_question(&store, &question.id, false, &mut "y\n".as_bytes(), &mut output)
        .await
        .unwrap();
    assert!(deleted);
    assert!(store.list().await.unwrap().is_empty());

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Are you sure you want to delete this question? [y/N] "));
    assert!(output.contains("Question deleted"));
}

#[tokio::test]
async fn confirmed_delete_of_unknown_id_fails() {
    let store = InMemoryStore::new();
    let mut output: Vec<u8> = Vec::new();

    let result = delete_question(&store, "missing", true, &mut "".as_bytes(), &mut output).await;

    assert!(result.is_err());
}
