//! Integration tests driving the GraphQL schema over in-memory adapters.
//!
//! These tests verify the resolver wiring end to end:
//! 1. Arguments reach the right handler
//! 2. Results come back in the schema's shape
//! 3. Failures carry `code` and `field` extensions

use std::sync::Arc;

use async_graphql::{Request, Value, Variables};
use serde_json::{json, Value as Json};

use muscle_management::adapters::graphql::{build_schema, AppSchema, GraphqlHandlers};
use muscle_management::adapters::memory::{
    InMemoryExerciseRepository, InMemoryStore, InMemoryTrainingSessionRepository,
    InMemoryUnitOfWork,
};
use muscle_management::domain::exercise::ExerciseOrderPolicy;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn schema() -> (AppSchema, InMemoryStore) {
    let store = InMemoryStore::new();
    let handlers = GraphqlHandlers::new(
        Arc::new(InMemoryTrainingSessionRepository::new(store.clone())),
        Arc::new(InMemoryExerciseRepository::new(store.clone())),
        Arc::new(InMemoryUnitOfWork::new(store.clone())),
        ExerciseOrderPolicy::First,
    );
    (build_schema(handlers), store)
}

/// Runs an operation that is expected to succeed and returns its data.
async fn run(schema: &AppSchema, query: &str, variables: Json) -> Json {
    let response = schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await;
    assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
    response.data.into_json().unwrap()
}

/// Runs an operation that is expected to fail and returns (message, code, field).
async fn run_err(schema: &AppSchema, query: &str, variables: Json) -> (String, Option<Value>, Option<Value>) {
    let response = schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await;
    let error = response.errors.first().expect("an error").clone();
    let ext = error.extensions.as_ref();
    (
        error.message,
        ext.and_then(|e| e.get("code").cloned()),
        ext.and_then(|e| e.get("field").cloned()),
    )
}

fn code(s: &str) -> Option<Value> {
    Some(Value::String(s.to_string()))
}

const CREATE: &str = r#"
    mutation Create($input: CreateTrainingSessionInput!) {
        createTrainingSession(input: $input) {
            id
            date
            bodyWeight
            exercises { id exerciseName reps durationSeconds sets order }
        }
    }
"#;

fn create_input(date: &str) -> Json {
    json!({
        "input": {
            "date": date,
            "bodyWeight": 72.5,
            "exercises": [
                { "exerciseName": "squat", "weight": 100.0, "reps": 5, "sets": 5 },
                { "exerciseName": "plank", "durationSeconds": 60, "sets": 3 }
            ]
        }
    })
}

async fn create_session(schema: &AppSchema, date: &str) -> Json {
    run(schema, CREATE, create_input(date)).await["createTrainingSession"].clone()
}

// =============================================================================
// Training sessions
// =============================================================================

#[tokio::test]
async fn create_then_read_by_date() {
    let (schema, _) = schema();
    let created = create_session(&schema, "2024-01-15").await;

    assert_eq!(created["date"], "2024-01-15");
    assert_eq!(created["bodyWeight"], 72.5);
    assert_eq!(created["exercises"][0]["order"], 1);
    assert_eq!(created["exercises"][1]["order"], 2);
    assert_eq!(created["exercises"][1]["reps"], Json::Null);

    let data = run(
        &schema,
        r#"query($date: Date!) {
            trainingSessionByDate(date: $date) {
                id
                createdAt
                exercises { exerciseName order }
            }
        }"#,
        json!({ "date": "2024-01-15" }),
    )
    .await;

    let session = &data["trainingSessionByDate"];
    assert_eq!(session["id"], created["id"]);
    assert_eq!(session["exercises"][0]["exerciseName"], "squat");
    assert!(session["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn duplicate_date_fails_with_constraint_code() {
    let (schema, store) = schema();
    create_session(&schema, "2024-01-15").await;

    let (_, code_value, field) = run_err(&schema, CREATE, create_input("2024-01-15")).await;
    assert_eq!(code_value, code("CONSTRAINT_VIOLATION"));
    assert_eq!(field, Some(Value::String("date".to_string())));
    assert_eq!(store.session_count(), 1);
}

#[tokio::test]
async fn invalid_exercise_reports_nested_field_and_writes_nothing() {
    let (schema, store) = schema();
    let mut input = create_input("2024-01-15");
    input["input"]["exercises"][0]["durationSeconds"] = json!(30);

    let (message, code_value, field) = run_err(&schema, CREATE, input).await;
    assert_eq!(code_value, code("VALIDATION_FAILED"));
    assert_eq!(field, Some(Value::String("exercises[0].reps".to_string())));
    assert!(message.contains("Cannot provide both reps and durationSeconds"));
    assert_eq!(store.session_count(), 0);
    assert_eq!(store.exercise_count(), 0);
}

#[tokio::test]
async fn malformed_date_is_rejected_by_scalar() {
    let (schema, _) = schema();
    let response = schema
        .execute(r#"{ trainingSessionByDate(date: "15-01-2024") { id } }"#)
        .await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn impossible_date_is_rejected_with_field() {
    let (schema, _) = schema();
    let (_, code_value, field) = run_err(
        &schema,
        r#"{ trainingSessionByDate(date: "2024-02-30") { id } }"#,
        json!({}),
    )
    .await;
    assert_eq!(code_value, code("VALIDATION_FAILED"));
    assert_eq!(field, Some(Value::String("date".to_string())));
}

#[tokio::test]
async fn sessions_are_paged_newest_first() {
    let (schema, _) = schema();
    for day in 10..15 {
        create_session(&schema, &format!("2024-01-{}", day)).await;
    }

    let data = run(
        &schema,
        "{ trainingSessions(limit: 2, offset: 1) { totalCount items { date } } }",
        json!({}),
    )
    .await;
    assert_eq!(data["trainingSessions"]["totalCount"], 5);
    assert_eq!(
        data["trainingSessions"]["items"],
        json!([{ "date": "2024-01-13" }, { "date": "2024-01-12" }])
    );
}

#[tokio::test]
async fn update_clears_notes_with_null_and_keeps_omitted_fields() {
    let (schema, _) = schema();
    let created = create_session(&schema, "2024-01-15").await;
    let id = created["id"].clone();

    run(
        &schema,
        r#"mutation($id: Int!) {
            updateTrainingSession(id: $id, input: { notes: "felt strong" }) { id }
        }"#,
        json!({ "id": id }),
    )
    .await;

    let data = run(
        &schema,
        r#"mutation($id: Int!) {
            updateTrainingSession(id: $id, input: { notes: null }) { notes bodyWeight date }
        }"#,
        json!({ "id": id }),
    )
    .await;
    let updated = &data["updateTrainingSession"];
    assert_eq!(updated["notes"], Json::Null);
    assert_eq!(updated["bodyWeight"], 72.5);
    assert_eq!(updated["date"], "2024-01-15");
}

#[tokio::test]
async fn delete_session_then_lookup_is_null() {
    let (schema, store) = schema();
    let created = create_session(&schema, "2024-01-15").await;
    let id = created["id"].clone();

    let data = run(
        &schema,
        "mutation($id: Int!) { deleteTrainingSession(id: $id) { success deletedId } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(data["deleteTrainingSession"], json!({ "success": true, "deletedId": id }));
    assert_eq!(store.exercise_count(), 0);

    let data = run(
        &schema,
        "query($id: Int!) { trainingSession(id: $id) { id } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(data["trainingSession"], Json::Null);

    let (_, code_value, _) = run_err(
        &schema,
        "mutation($id: Int!) { deleteTrainingSession(id: $id) { success } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(code_value, code("TRAINING_SESSION_NOT_FOUND"));
}

// =============================================================================
// Exercises
// =============================================================================

#[tokio::test]
async fn add_exercise_to_missing_session_fails() {
    let (schema, _) = schema();
    let (_, code_value, _) = run_err(
        &schema,
        r#"mutation {
            addExercise(trainingSessionId: 99, input: { exerciseName: "row", reps: 10, sets: 3 }) { id }
        }"#,
        json!({}),
    )
    .await;
    assert_eq!(code_value, code("TRAINING_SESSION_NOT_FOUND"));
}

#[tokio::test]
async fn update_exercise_switches_measure() {
    let (schema, _) = schema();
    let created = create_session(&schema, "2024-01-15").await;
    let squat_id = created["exercises"][0]["id"].clone();

    let data = run(
        &schema,
        r#"mutation($id: Int!) {
            updateExercise(id: $id, input: { reps: null, durationSeconds: 45 }) {
                reps durationSeconds weight
            }
        }"#,
        json!({ "id": squat_id }),
    )
    .await;
    assert_eq!(
        data["updateExercise"],
        json!({ "reps": null, "durationSeconds": 45, "weight": 100.0 })
    );
}

#[tokio::test]
async fn update_exercise_with_lone_reps_key_fails() {
    let (schema, _) = schema();
    let created = create_session(&schema, "2024-01-15").await;
    let squat_id = created["exercises"][0]["id"].clone();

    let (message, code_value, _) = run_err(
        &schema,
        "mutation($id: Int!) { updateExercise(id: $id, input: { reps: 8 }) { id } }",
        json!({ "id": squat_id }),
    )
    .await;
    assert_eq!(code_value, code("VALIDATION_FAILED"));
    assert!(message.contains("provide both fields"));
}

#[tokio::test]
async fn null_for_a_required_column_is_a_field_error() {
    let (schema, _) = schema();
    let created = create_session(&schema, "2024-01-15").await;
    let session_id = created["id"].clone();
    let squat_id = created["exercises"][0]["id"].clone();

    let (_, code_value, field) = run_err(
        &schema,
        "mutation($id: Int!) { updateTrainingSession(id: $id, input: { date: null }) { id } }",
        json!({ "id": session_id }),
    )
    .await;
    assert_eq!(code_value, code("VALIDATION_FAILED"));
    assert_eq!(field, Some(Value::String("date".to_string())));

    for key in ["sets", "exerciseName", "order"] {
        let query = format!(
            "mutation($id: Int!) {{ updateExercise(id: $id, input: {{ {}: null }}) {{ id }} }}",
            key
        );
        let (_, code_value, field) = run_err(&schema, &query, json!({ "id": squat_id })).await;
        assert_eq!(code_value, code("VALIDATION_FAILED"));
        assert_eq!(field, Some(Value::String(key.to_string())));
    }

    let data = run(
        &schema,
        r#"{ trainingSessionByDate(date: "2024-01-15") { exercises { exerciseName sets order } } }"#,
        json!({}),
    )
    .await;
    assert_eq!(
        data["trainingSessionByDate"]["exercises"][0],
        json!({ "exerciseName": "squat", "sets": 5, "order": 1 })
    );
}

#[tokio::test]
async fn weights_must_fit_their_columns() {
    let (schema, store) = schema();
    let mut input = create_input("2024-01-15");
    input["input"]["bodyWeight"] = json!(70.55);

    let (_, code_value, field) = run_err(&schema, CREATE, input).await;
    assert_eq!(code_value, code("VALIDATION_FAILED"));
    assert_eq!(field, Some(Value::String("bodyWeight".to_string())));

    let mut input = create_input("2024-01-15");
    input["input"]["exercises"][0]["weight"] = json!(1000.0);
    let (_, _, field) = run_err(&schema, CREATE, input).await;
    assert_eq!(field, Some(Value::String("exercises[0].weight".to_string())));

    assert_eq!(store.session_count(), 0);
}

#[tokio::test]
async fn reorder_and_names_and_history() {
    let (schema, _) = schema();
    let created = create_session(&schema, "2024-01-15").await;
    create_session(&schema, "2024-01-17").await;
    let squat = created["exercises"][0]["id"].clone();
    let plank = created["exercises"][1]["id"].clone();

    let data = run(
        &schema,
        r#"mutation($session: Int!, $squat: Int!, $plank: Int!) {
            reorderExercises(trainingSessionId: $session, exercises: [
                { id: $squat, order: 2 },
                { id: $plank, order: 1 }
            ]) { exerciseName order }
        }"#,
        json!({ "session": created["id"], "squat": squat, "plank": plank }),
    )
    .await;
    assert_eq!(
        data["reorderExercises"],
        json!([
            { "exerciseName": "plank", "order": 1 },
            { "exerciseName": "squat", "order": 2 }
        ])
    );

    let data = run(
        &schema,
        r#"{
            exerciseNames
            exerciseHistory(exerciseName: "squat") { totalCount items { date reps } }
        }"#,
        json!({}),
    )
    .await;
    assert_eq!(data["exerciseNames"], json!(["plank", "squat"]));
    assert_eq!(data["exerciseHistory"]["totalCount"], 2);
    assert_eq!(data["exerciseHistory"]["items"][0]["date"], "2024-01-17");
}

// =============================================================================
// Summaries
// =============================================================================

#[tokio::test]
async fn streak_info_is_zero_without_sessions() {
    let (schema, _) = schema();
    let data = run(
        &schema,
        "{ streakInfo { currentStreak longestStreak lastTrainingDate thisMonthCount totalCount } }",
        json!({}),
    )
    .await;
    assert_eq!(
        data["streakInfo"],
        json!({
            "currentStreak": 0,
            "longestStreak": 0,
            "lastTrainingDate": null,
            "thisMonthCount": 0,
            "totalCount": 0
        })
    );
}

#[tokio::test]
async fn training_days_in_month() {
    let (schema, _) = schema();
    for date in ["2024-02-01", "2024-02-14", "2024-03-01"] {
        create_session(&schema, date).await;
    }

    let data = run(&schema, "{ trainingDaysInMonth(year: 2024, month: 2) }", json!({})).await;
    assert_eq!(data["trainingDaysInMonth"], json!(["2024-02-14", "2024-02-01"]));
}
