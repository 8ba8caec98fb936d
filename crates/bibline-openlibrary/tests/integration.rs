//! End-to-end loader test over realistic dump content

use std::fs;

use bibline_core::ProgressContext;
use bibline_openlibrary::{Author, Book, LoadConfig, UNKNOWN_AUTHOR, run};
use bibline_store::{RecordKind, Store};
use chrono::NaiveDate;

const AUTHOR_DUMP: &str = "\
/type/author\t/authors/OL23919A\t2\t2008-08-20T17:57:09.66187\t{\"name\": \"J. K. Rowling\", \"personal_name\": \"Joanne Rowling\", \"key\": \"/authors/OL23919A\", \"type\": {\"key\": \"/type/author\"}, \"revision\": 2}
/type/author\t/authors/OL26320A\t1\t2008-04-29T13:35:46.87638\t{\"name\": \"Kenneth Grahame\", \"key\": \"/authors/OL26320A\", \"type\": {\"key\": \"/type/author\"}, \"revision\": 1}
/type/redirect\t/authors/OL999A\t1\tno json payload on this one
/type/author\t/authors/OL31818A\t1\t2008-04-29T13:35:46.87638\t{\"key\": \"/authors/OL31818A\", \"type\": {\"key\": \"/type/author\"}}
";

const WORKS_DUMP: &str = "\
/type/work\t/works/OL82563W\t3\t2010-07-21T13:28:34.918183\t{\"title\": \"Harry Potter and the Philosopher's Stone\", \"key\": \"/works/OL82563W\", \"authors\": [{\"type\": {\"key\": \"/type/author_role\"}, \"author\": {\"key\": \"/authors/OL23919A\"}}], \"covers\": [8739161, 10521270], \"created\": {\"type\": \"/type/datetime\", \"value\": \"2009-10-15T11:41:44.773228\"}, \"description\": {\"type\": \"/type/text\", \"value\": \"The boy who lived.\"}}
/type/work\t/works/OL1168007W\t2\t2010-01-01T00:00:00.000000\t{\"title\": \"The Wind in the Willows\", \"key\": \"/works/OL1168007W\", \"authors\": [{\"author\": {\"key\": \"/authors/OL26320A\"}}, {\"author\": {\"key\": \"/authors/OL404A\"}}], \"created\": {\"type\": \"/type/datetime\", \"value\": \"2008-07-01T00:00:00.000000\"}}
/type/work\t/works/OL55W\t1\t2010-01-01T00:00:00.000000\t{\"title\": \"Broken Date\", \"key\": \"/works/OL55W\", \"created\": {\"value\": \"yesterday\"}}
/type/work\t/works/OL77W\t1\t2010-01-01T00:00:00.000000\t{\"title\": \"Plain One\", \"key\": \"/works/OL77W\", \"description\": \"A bare string description.\"}
";

#[test]
fn loads_both_dumps_and_resolves_references() {
    let dir = tempfile::tempdir().unwrap();
    let authors_dump = dir.path().join("ol_dump_authors.txt");
    let works_dump = dir.path().join("ol_dump_works.txt");
    fs::write(&authors_dump, AUTHOR_DUMP).unwrap();
    fs::write(&works_dump, WORKS_DUMP).unwrap();

    let store = Store::open(&dir.path().join("data")).unwrap();
    let config = LoadConfig::new(&authors_dump, &works_dump);
    let progress = ProgressContext::new();

    let (authors, works) = run(&config, &store, &progress).unwrap();

    // One redirect line in the author dump has no payload
    assert_eq!(authors.lines_scanned, 4);
    assert_eq!(authors.records_written, 3);
    assert_eq!(authors.lines_skipped, 1);

    // One works line has a malformed created timestamp
    assert_eq!(works.lines_scanned, 4);
    assert_eq!(works.records_written, 3);
    assert_eq!(works.lines_skipped, 1);

    let rowling: Author = store
        .get(RecordKind::Authors, "OL23919A")
        .unwrap()
        .expect("author persisted");
    assert_eq!(rowling.name, "J. K. Rowling");
    assert_eq!(rowling.personal_name, "Joanne Rowling");

    // Author with no name fields persists with empty strings
    let nameless: Author = store.get(RecordKind::Authors, "OL31818A").unwrap().unwrap();
    assert_eq!(nameless.name, "");

    let potter: Book = store
        .get(RecordKind::Books, "OL82563W")
        .unwrap()
        .expect("book persisted");
    assert_eq!(potter.name, "Harry Potter and the Philosopher's Stone");
    assert_eq!(potter.description.as_deref(), Some("The boy who lived."));
    assert_eq!(potter.published_date, NaiveDate::from_ymd_opt(2009, 10, 15));
    assert_eq!(potter.cover_ids, vec!["8739161", "10521270"]);
    assert_eq!(potter.author_ids, vec!["OL23919A"]);
    assert_eq!(potter.author_names, vec!["J. K. Rowling"]);

    // Second author reference dangles: sentinel, same length, same order
    let willows: Book = store.get(RecordKind::Books, "OL1168007W").unwrap().unwrap();
    assert_eq!(willows.author_ids, vec!["OL26320A", "OL404A"]);
    assert_eq!(willows.author_names, vec!["Kenneth Grahame", UNKNOWN_AUTHOR]);

    // The broken-date line was skipped, nothing persisted for it
    assert!(store.get::<Book>(RecordKind::Books, "OL55W").unwrap().is_none());

    // Bare-string description accepted
    let plain: Book = store.get(RecordKind::Books, "OL77W").unwrap().unwrap();
    assert_eq!(plain.description.as_deref(), Some("A bare string description."));
}

#[test]
fn rerun_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let authors_dump = dir.path().join("authors.txt");
    let works_dump = dir.path().join("works.txt");
    fs::write(&authors_dump, AUTHOR_DUMP).unwrap();
    fs::write(&works_dump, WORKS_DUMP).unwrap();

    let store = Store::open(&dir.path().join("data")).unwrap();
    let config = LoadConfig::new(&authors_dump, &works_dump);
    let progress = ProgressContext::new();

    run(&config, &store, &progress).unwrap();
    run(&config, &store, &progress).unwrap();

    assert_eq!(store.count(RecordKind::Authors).unwrap(), 3);
    assert_eq!(store.count(RecordKind::Books).unwrap(), 3);
}

#[test]
fn max_books_is_an_explicit_ceiling() {
    let dir = tempfile::tempdir().unwrap();
    let authors_dump = dir.path().join("authors.txt");
    let works_dump = dir.path().join("works.txt");
    fs::write(&authors_dump, AUTHOR_DUMP).unwrap();
    fs::write(&works_dump, WORKS_DUMP).unwrap();

    let store = Store::open(&dir.path().join("data")).unwrap();
    let mut config = LoadConfig::new(&authors_dump, &works_dump);
    config.max_books = Some(1);
    let progress = ProgressContext::new();

    let (_, works) = run(&config, &store, &progress).unwrap();
    assert_eq!(works.lines_scanned, 1);
    assert_eq!(store.count(RecordKind::Books).unwrap(), 1);
}
