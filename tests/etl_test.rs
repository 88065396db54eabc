//! Integration tests for the offline ETL stages: table reading, the
//! inner join, JSON column decoding and entity extraction. No external
//! store is required.

use std::path::{Path, PathBuf};

use cinegraph::etl::{extract_records, normalize, read_credits, read_movies, MovieRecord};
use cinegraph::CinegraphError;
use tempfile::TempDir;

fn write_csv(path: &Path, headers: &[&str], rows: &[Vec<String>]) {
    let mut writer = csv::Writer::from_path(path).unwrap();
    writer.write_record(headers).unwrap();
    for row in rows {
        writer.write_record(row).unwrap();
    }
    writer.flush().unwrap();
}

fn movies_csv(dir: &Path, rows: &[Vec<String>]) -> PathBuf {
    let path = dir.join("movies.csv");
    write_csv(&path, &["id", "title", "release_date", "genres"], rows);
    path
}

fn credits_csv(dir: &Path, rows: &[Vec<String>]) -> PathBuf {
    let path = dir.join("credits.csv");
    write_csv(&path, &["movie_id", "title", "cast", "crew"], rows);
    path
}

fn inception_movie() -> Vec<String> {
    vec![
        "1".to_string(),
        "Inception".to_string(),
        "2010-07-16".to_string(),
        r#"[{"id": 28, "name": "Action"}, {"id": 12, "name": "Adventure"}]"#.to_string(),
    ]
}

fn inception_credits() -> Vec<String> {
    vec![
        "1".to_string(),
        "Inception".to_string(),
        r#"[{"name": "L. DiCaprio", "order": 0}, {"name": "J. Gordon-Levitt", "order": 1}]"#
            .to_string(),
        r#"[{"job": "Editor", "name": "L. Smith"}, {"job": "Director", "name": "C. Nolan"}]"#
            .to_string(),
    ]
}

#[test]
fn test_worked_example_derivation() {
    let dir = TempDir::new().unwrap();
    let movies = read_movies(&movies_csv(dir.path(), &[inception_movie()])).unwrap();
    let credits = read_credits(&credits_csv(dir.path(), &[inception_credits()])).unwrap();

    let joined = normalize(movies, credits).unwrap();
    assert_eq!(joined.len(), 1);

    let records = extract_records(joined);
    assert_eq!(
        records,
        vec![MovieRecord {
            title: "Inception".to_string(),
            year: 2010,
            genre: "Action".to_string(),
            director: "C. Nolan".to_string(),
            actors: vec!["L. DiCaprio".to_string(), "J. Gordon-Levitt".to_string()],
        }]
    );
}

#[test]
fn test_inner_join_drops_unmatched_rows() {
    let dir = TempDir::new().unwrap();
    let movies = read_movies(&movies_csv(
        dir.path(),
        &[
            inception_movie(),
            vec![
                "2".to_string(),
                "No Credits".to_string(),
                "2001-01-01".to_string(),
                r#"[{"name": "Drama"}]"#.to_string(),
            ],
        ],
    ))
    .unwrap();
    let credits = read_credits(&credits_csv(
        dir.path(),
        &[
            inception_credits(),
            vec![
                "3".to_string(),
                "No Movie".to_string(),
                r#"[{"name": "A", "order": 0}]"#.to_string(),
                r#"[{"job": "Director", "name": "B"}]"#.to_string(),
            ],
        ],
    ))
    .unwrap();

    let joined = normalize(movies, credits).unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].title, "Inception");
}

#[test]
fn test_movie_table_title_is_authoritative() {
    let dir = TempDir::new().unwrap();
    let movies = read_movies(&movies_csv(dir.path(), &[inception_movie()])).unwrap();

    let mut credit = inception_credits();
    credit[1] = "Wrong Title".to_string();
    let credits = read_credits(&credits_csv(dir.path(), &[credit])).unwrap();

    let joined = normalize(movies, credits).unwrap();
    assert_eq!(joined[0].title, "Inception");
}

#[test]
fn test_absent_columns_decode_to_empty_sequences() {
    let dir = TempDir::new().unwrap();
    let movies = read_movies(&movies_csv(
        dir.path(),
        &[vec![
            "1".to_string(),
            "Bare".to_string(),
            "2010-07-16".to_string(),
            String::new(),
        ]],
    ))
    .unwrap();
    let credits = read_credits(&credits_csv(
        dir.path(),
        &[vec![
            "1".to_string(),
            "Bare".to_string(),
            String::new(),
            String::new(),
        ]],
    ))
    .unwrap();

    let joined = normalize(movies, credits).unwrap();
    assert_eq!(joined.len(), 1);
    assert!(joined[0].genres.is_empty());
    assert!(joined[0].cast.is_empty());
    assert!(joined[0].crew.is_empty());

    // Missing essentials: the row is filtered out, not an error.
    assert!(extract_records(joined).is_empty());
}

#[test]
fn test_malformed_column_is_a_hard_error() {
    let dir = TempDir::new().unwrap();
    let movies = read_movies(&movies_csv(
        dir.path(),
        &[vec![
            "1".to_string(),
            "Broken".to_string(),
            "2010-07-16".to_string(),
            "{not valid json".to_string(),
        ]],
    ))
    .unwrap();
    let credits = read_credits(&credits_csv(dir.path(), &[inception_credits()])).unwrap();

    let err = normalize(movies, credits).unwrap_err();
    match err {
        CinegraphError::Decode { column, .. } => assert_eq!(column, "genres"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_row_without_director_is_excluded() {
    let dir = TempDir::new().unwrap();
    let movies = read_movies(&movies_csv(dir.path(), &[inception_movie()])).unwrap();

    let mut credit = inception_credits();
    credit[3] = "[]".to_string();
    let credits = read_credits(&credits_csv(dir.path(), &[credit])).unwrap();

    let joined = normalize(movies, credits).unwrap();
    assert!(extract_records(joined).is_empty());
}

#[test]
fn test_row_without_cast_is_excluded() {
    let dir = TempDir::new().unwrap();
    let movies = read_movies(&movies_csv(dir.path(), &[inception_movie()])).unwrap();

    let mut credit = inception_credits();
    credit[2] = "[]".to_string();
    let credits = read_credits(&credits_csv(dir.path(), &[credit])).unwrap();

    let joined = normalize(movies, credits).unwrap();
    assert!(extract_records(joined).is_empty());
}

#[test]
fn test_unparseable_release_date_excludes_row() {
    let dir = TempDir::new().unwrap();
    let mut movie = inception_movie();
    movie[2] = "someday soon".to_string();
    let movies = read_movies(&movies_csv(dir.path(), &[movie])).unwrap();
    let credits = read_credits(&credits_csv(dir.path(), &[inception_credits()])).unwrap();

    let joined = normalize(movies, credits).unwrap();
    assert!(extract_records(joined).is_empty());
}

#[test]
fn test_actors_capped_at_five_in_billing_order() {
    let dir = TempDir::new().unwrap();
    let movies = read_movies(&movies_csv(dir.path(), &[inception_movie()])).unwrap();

    let mut credit = inception_credits();
    // Billing order deliberately shuffled, one entry without an order.
    credit[2] = r#"[
        {"name": "f", "order": 5},
        {"name": "a", "order": 0},
        {"name": "unordered-extra"},
        {"name": "d", "order": 3},
        {"name": "b", "order": 1},
        {"name": "c", "order": 2},
        {"name": "e", "order": 4}
    ]"#
    .to_string();
    let credits = read_credits(&credits_csv(dir.path(), &[credit])).unwrap();

    let joined = normalize(movies, credits).unwrap();
    let records = extract_records(joined);
    assert_eq!(records[0].actors, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_extraction_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let movies = read_movies(&movies_csv(dir.path(), &[inception_movie()])).unwrap();
    let credits = read_credits(&credits_csv(dir.path(), &[inception_credits()])).unwrap();

    let joined = normalize(movies, credits).unwrap();
    let first = extract_records(joined.clone());
    let second = extract_records(joined);
    assert_eq!(first, second);
}

#[test]
fn test_extra_csv_columns_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("movies_wide.csv");
    write_csv(
        &path,
        &["id", "budget", "title", "release_date", "genres", "runtime"],
        &[vec![
            "1".to_string(),
            "160000000".to_string(),
            "Inception".to_string(),
            "2010-07-16".to_string(),
            r#"[{"name": "Action"}]"#.to_string(),
            "148".to_string(),
        ]],
    );

    let movies = read_movies(&path).unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Inception");
    assert_eq!(movies[0].release_date.as_deref(), Some("2010-07-16"));
}
