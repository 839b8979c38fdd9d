//! Resource accounting: every handle, cursor and session is released
//! exactly once, on every code path.

use relq_core::Row;
use relq_engine::scripted::{CannedResult, ScriptedEngine};
use relq_engine::{EngineSession, ProtocolError, ResultHandle};
use relq_repl::Repl;
use relq_session::{NullSink, StatementExecutor};

fn all_kinds_engine() -> ScriptedEngine {
    ScriptedEngine::new()
        .respond("CREATE", CannedResult::Definition)
        .respond("INSERT", CannedResult::Modification(1))
        .respond("SELECT COUNT", CannedResult::Scalar("2".to_string()))
        .respond(
            "SELECT",
            CannedResult::Tabular(vec![
                Row::from_pairs([("t.x", "1")]),
                Row::from_pairs([("t.x", "2")]),
            ]),
        )
        .respond("BAD", CannedResult::Failure("syntax error".to_string()))
        .respond("PING", CannedResult::Unclassified)
}

#[test]
fn test_every_classification_path_releases_its_handle() {
    // GIVEN one statement per branch, including failure and misuse
    let engine = all_kinds_engine();
    let script = "CREATE TABLE t (x INT); INSERT INTO t VALUES (1); \
                  SELECT COUNT(t); SELECT t; BAD; PING;";

    // WHEN the whole batch runs through the terminal
    {
        let mut repl = Repl::new(engine.open_session());
        repl.run_script(script).unwrap();
        repl.close();
    }

    // THEN six handles opened, six released, one cursor, one session
    let log = engine.log();
    assert!(log.is_balanced(), "unbalanced log: {:?}", log);
    assert_eq!(log.handles_opened, 6);
    assert_eq!(log.cursors_opened, 1);
    assert_eq!(log.sessions_opened, 1);
    assert_eq!(log.sessions_closed, 1);
}

#[test]
fn test_no_overlap_between_statement_resources() {
    // GIVEN
    let engine = all_kinds_engine();
    let mut executor = StatementExecutor::new(engine.open_session());

    // WHEN checking the log between statements
    executor.execute("SELECT t;", &mut NullSink).unwrap();
    let after_first = engine.log();
    executor.execute("SELECT t;", &mut NullSink).unwrap();
    let after_second = engine.log();
    executor.close();

    // THEN each handle/cursor pair was released before the next submission
    assert_eq!(after_first.handles_opened, after_first.handles_released);
    assert_eq!(after_first.cursors_opened, after_first.cursors_released);
    assert_eq!(after_second.handles_opened, 2);
    assert_eq!(after_second.handles_released, 2);
}

#[test]
fn test_session_closes_once_even_after_fatal_failure() {
    // GIVEN an unreachable engine
    let engine = ScriptedEngine::unavailable("connection refused");

    // WHEN the batch dies on the first statement
    {
        let mut repl = Repl::new(engine.open_session());
        let result = repl.run_script("SELECT t;");
        assert!(result.is_err());
        repl.close();
    }

    // THEN the session still closed exactly once, and nothing else leaked
    let log = engine.log();
    assert!(log.is_balanced());
    assert_eq!(log.sessions_opened, 1);
    assert_eq!(log.sessions_closed, 1);
    assert_eq!(log.handles_opened, 0);
}

#[test]
fn test_direct_cursor_misuse_still_releases_the_handle() {
    // GIVEN a non-tabular result
    let engine = all_kinds_engine();
    {
        let mut session = engine.open_session();
        let mut handle = session.submit("CREATE TABLE t (x INT);").unwrap();

        // WHEN a cursor is opened against the contract
        let misuse = handle.open_cursor();
        assert!(matches!(misuse, Err(ProtocolError::NotTabular)));
    }

    // THEN the handle and session were released regardless
    let log = engine.log();
    assert!(log.is_balanced());
    assert_eq!(log.handles_opened, 1);
    assert_eq!(log.cursors_opened, 0);
}

#[test]
fn test_teardown_is_per_script_not_per_statement() {
    // GIVEN
    let engine = all_kinds_engine();

    // WHEN several statements run in one script
    {
        let mut repl = Repl::new(engine.open_session());
        repl.run_script("CREATE TABLE a (x INT); CREATE TABLE b (x INT); CREATE TABLE c (x INT);")
            .unwrap();
        assert_eq!(engine.log().sessions_closed, 0);
        repl.close();
    }

    // THEN exactly one teardown for the whole script
    assert_eq!(engine.log().sessions_closed, 1);
}
