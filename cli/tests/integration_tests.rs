use std::path::Path;
use std::process::{Command, Output};

fn write_json(dir: &Path, name: &str, value: serde_json::Value) {
    std::fs::write(dir.join(name), serde_json::to_string_pretty(&value).unwrap())
        .expect("failed to write corpus");
}

/// Minimal versions of the four standard corpora.
fn write_corpora(dir: &Path) {
    std::fs::create_dir_all(dir).unwrap();
    write_json(
        dir,
        "tanakh.json",
        serde_json::json!({"Genesis": {"1": [
            {"verse_he": "בְּרֵאשִׁית בָּרָא אֱלֹהִים"},
            {"verse_en": "In the beginning God created"}
        ]}}),
    );
    write_json(
        dir,
        "septuagint.json",
        serde_json::json!({"Genesis": {"1": {"1": "Ἐν ἀρχῇ ἐποίησεν ὁ θεὸς"}}}),
    );
    write_json(
        dir,
        "textus_receptus.json",
        serde_json::json!({"books": [{"name": "John", "chapters": [
            {"chapter": 1, "verses": [{"verse": 1, "text": "Ἐν ἀρχῇ ἦν ὁ λόγος"}]}
        ]}]}),
    );
    write_json(
        dir,
        "kjv.json",
        serde_json::json!({"Matthew": {"5": {"3": "Blessed are the poor in spirit"}}}),
    );
}

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scripture-load"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run scripture-load")
}

fn verse_count(db: &Path) -> i64 {
    let conn = rusqlite::Connection::open(db).unwrap();
    conn.query_row("SELECT COUNT(*) FROM verses", [], |row| row.get(0))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

#[test]
fn load_without_arguments_uses_default_paths() {
    let dir = tempfile::tempdir().unwrap();
    write_corpora(&dir.path().join("texts"));

    let output = run(&[], dir.path());
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let loading: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("Loading"))
        .collect();
    assert_eq!(
        loading,
        vec![
            "Loading Tanakh...",
            "Loading Septuagint...",
            "Loading Textus Receptus...",
            "Loading KJV..."
        ]
    );
    assert!(stdout.contains("Database successfully built."));
    assert_eq!(verse_count(&dir.path().join("bible_study.db")), 5);
}

#[test]
fn load_with_explicit_paths() {
    let texts = tempfile::tempdir().unwrap();
    write_corpora(texts.path());
    let out = tempfile::tempdir().unwrap();
    let db = out.path().join("verses.db");

    let output = run(
        &[
            "load",
            "--texts-dir",
            texts.path().to_str().unwrap(),
            "--db",
            db.to_str().unwrap(),
        ],
        out.path(),
    );
    assert!(output.status.success());
    assert_eq!(verse_count(&db), 5);

    // Second run adds nothing.
    let output = run(
        &[
            "--texts-dir",
            texts.path().to_str().unwrap(),
            "--db",
            db.to_str().unwrap(),
        ],
        out.path(),
    );
    assert!(output.status.success());
    assert_eq!(verse_count(&db), 5);
}

#[test]
fn load_with_yaml_config() {
    let dir = tempfile::tempdir().unwrap();
    write_corpora(&dir.path().join("corpora"));
    let config = dir.path().join("loader.yml");
    std::fs::write(
        &config,
        r#"
texts_dir: corpora
database: custom.db
corpora:
  - name: Septuagint
    file: septuagint.json
    format: numbered
    source: septuagint
"#,
    )
    .unwrap();

    let output = run(&["--config", config.to_str().unwrap()], dir.path());
    assert!(output.status.success());
    assert_eq!(verse_count(&dir.path().join("custom.db")), 1);
}

#[test]
fn missing_corpus_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let texts = dir.path().join("texts");
    write_corpora(&texts);
    std::fs::remove_file(texts.join("kjv.json")).unwrap();

    let output = run(&[], dir.path());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("kjv.json"), "stderr: {stderr}");

    // Corpora loaded before the failure were kept.
    assert_eq!(verse_count(&dir.path().join("bible_study.db")), 4);
}

// ---------------------------------------------------------------------------
// Status / refresh
// ---------------------------------------------------------------------------

#[test]
fn status_reports_per_source_counts() {
    let dir = tempfile::tempdir().unwrap();
    write_corpora(&dir.path().join("texts"));
    assert!(run(&[], dir.path()).status.success());

    let output = run(&["status"], dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Table exists: yes"));
    assert!(stdout.contains("Verse count: 5"));
    assert!(stdout.contains("tanakh_hebrew: 1"));
    assert!(stdout.contains("kjv: 1"));
}

#[test]
fn status_on_fresh_database() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["status"], dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Table exists: no"));
    assert!(stdout.contains("Verse count: 0"));
}

#[test]
fn refresh_replaces_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let texts = dir.path().join("texts");
    write_corpora(&texts);
    assert!(run(&[], dir.path()).status.success());

    write_json(
        &texts,
        "kjv.json",
        serde_json::json!({"Matthew": {"5": {"3": "Blessed are the meek"}}}),
    );
    let output = run(&["refresh"], dir.path());
    assert!(output.status.success());

    let conn = rusqlite::Connection::open(dir.path().join("bible_study.db")).unwrap();
    let text: String = conn
        .query_row(
            "SELECT text FROM verses WHERE source = 'kjv'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(text, "Blessed are the meek");
}
