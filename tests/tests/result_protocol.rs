//! Result classification and rendering, end to end.
//!
//! Every statement must produce exactly one of the five result kinds and
//! exactly one rendered block, chosen by the engine's predicates.

use relq_tests::prelude::*;

fn people_rows() -> Vec<Row> {
    vec![
        Row::from_pairs([("people.name", "alice"), ("people.age", "30")]),
        Row::from_pairs([("people.name", "bob"), ("people.age", "25")]),
    ]
}

mod classification {
    use super::*;

    #[test]
    fn test_definition_renders_success_notice() {
        Scenario::new("definition")
            .rule("CREATE", CannedResult::Definition)
            .script("CREATE TABLE t (x INT);")
            .expect(Expect::Definition)
            .run()
            .unwrap();
    }

    #[test]
    fn test_modification_renders_success_notice() {
        Scenario::new("modification")
            .rule("INSERT", CannedResult::Modification(1))
            .script("INSERT INTO t VALUES (1);")
            .expect(Expect::Modification(1))
            .run()
            .unwrap();
    }

    #[test]
    fn test_scalar_renders_calculated_value_line() {
        Scenario::new("scalar")
            .rule("SELECT 1", CannedResult::Scalar("1".to_string()))
            .script("SELECT 1;")
            .expect(Expect::Scalar("1"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_tabular_renders_table_with_row_count() {
        Scenario::new("tabular")
            .rule("SELECT", CannedResult::Tabular(people_rows()))
            .script("SELECT people;")
            .expect(Expect::Tabular(2))
            .run()
            .unwrap();
    }

    #[test]
    fn test_empty_tabular_renders_no_results() {
        Scenario::new("empty_tabular")
            .rule("SELECT", CannedResult::Tabular(vec![]))
            .script("SELECT empty;")
            .expect(Expect::Tabular(0))
            .run()
            .unwrap();
    }

    #[test]
    fn test_failure_renders_error_with_statement_text() {
        // The statement text itself is attached to the error block.
        Scenario::new("failure")
            .rule("SELEKT", CannedResult::Failure("syntax error".to_string()))
            .script("SELEKT people;")
            .expect(Expect::Error("SELEKT people;"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_failure_carries_engine_diagnostic() {
        Scenario::new("failure_diagnostic")
            .rule("SELEKT", CannedResult::Failure("syntax error".to_string()))
            .script("SELEKT people;")
            .expect(Expect::Error("syntax error"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_unclassifiable_result_renders_error_block() {
        // A successful handle that satisfies no kind predicate still
        // produces exactly one block: an error.
        Scenario::new("unclassifiable")
            .rule("PING", CannedResult::Unclassified)
            .script("PING;")
            .expect(Expect::Error("unclassifiable"))
            .run()
            .unwrap();
    }
}
