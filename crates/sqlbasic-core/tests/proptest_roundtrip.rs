//! Property test: every generated statement parses, its dump parses back
//! to the same tree, and dumping is idempotent.

use proptest::prelude::*;
use sqlbasic_core::{check_sql, parse, pretty, Keyword};

/// Generate a random identifier that is not a keyword.
fn arb_ident() -> BoxedStrategy<String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,5}")
        .expect("valid regex")
        .prop_filter("must not be keyword", |s| Keyword::from_str(s).is_none())
        .boxed()
}

/// Generate a one- or two-part column reference.
fn arb_column() -> BoxedStrategy<String> {
    prop_oneof![
        arb_ident(),
        (arb_ident(), arb_ident()).prop_map(|(t, c)| format!("{t}.{c}")),
    ]
    .boxed()
}

/// Generate a random literal value.
fn arb_literal() -> BoxedStrategy<String> {
    prop_oneof![
        (0u32..100_000).prop_map(|n| n.to_string()),
        (1u32..1000).prop_map(|n| format!("{n}.{}", n % 100)),
        "[a-z ']{0,6}".prop_map(|s| format!("'{}'", s.replace('\'', "''"))),
        Just("NULL".to_string()),
        Just("TRUE".to_string()),
        Just("FALSE".to_string()),
    ]
    .boxed()
}

/// Generate a random expression of bounded depth.
fn arb_expr(depth: u32) -> BoxedStrategy<String> {
    let leaf = prop_oneof![arb_literal(), arb_column()].boxed();
    if depth == 0 {
        return leaf;
    }

    prop_oneof![
        4 => leaf,
        3 => (arb_expr(depth - 1), prop_oneof![
            Just("+"), Just("-"), Just("*"), Just("/"), Just("%"),
            Just("="), Just("<>"), Just("<"), Just("<="), Just(">"), Just(">="),
            Just("AND"), Just("OR"), Just("LIKE"), Just("NOT LIKE"),
        ], arb_expr(depth - 1))
            .prop_map(|(l, op, r)| format!("({l} {op} {r})")),
        1 => arb_expr(depth - 1).prop_map(|e| format!("-({e})")),
        1 => arb_expr(depth - 1).prop_map(|e| format!("(NOT ({e}))")),
        1 => (arb_expr(depth - 1), any::<bool>()).prop_map(|(e, not)| {
            format!("({e} IS {}NULL)", if not { "NOT " } else { "" })
        }),
        1 => (arb_expr(depth - 1), any::<bool>(), prop::collection::vec(arb_expr(0), 0..4))
            .prop_map(|(e, not, items)| {
                format!("({e} {}IN ({}))", if not { "NOT " } else { "" }, items.join(", "))
            }),
        1 => (arb_ident(), prop::collection::vec(arb_expr(0), 0..3))
            .prop_map(|(name, args)| format!("{name}({})", args.join(", "))),
        1 => arb_ident().prop_map(|name| format!("{name}(*)")),
    ]
    .boxed()
}

/// Generate a FROM item: a table or, when `depth > 0`, a derived table.
fn arb_from_item(depth: u32) -> BoxedStrategy<String> {
    let table = (arb_column(), prop::option::of(arb_ident()))
        .prop_map(|(t, alias)| match alias {
            Some(a) => format!("{t} AS {a}"),
            None => t,
        })
        .boxed();
    if depth == 0 {
        return table;
    }
    prop_oneof![
        3 => table,
        1 => (arb_select(depth - 1), arb_ident()).prop_map(|(q, a)| format!("({q}) {a}")),
    ]
    .boxed()
}

/// Generate a random SELECT statement.
fn arb_select(depth: u32) -> BoxedStrategy<String> {
    let join = (
        prop_oneof![
            Just("JOIN"),
            Just("INNER JOIN"),
            Just("LEFT JOIN"),
            Just("LEFT OUTER JOIN"),
            Just("RIGHT JOIN"),
            Just("FULL OUTER JOIN"),
        ],
        arb_from_item(depth),
        arb_expr(1),
    )
        .prop_map(|(kind, item, on)| format!(" {kind} {item} ON {on}"));

    let items = prop::collection::vec(
        prop_oneof![
            3 => (arb_expr(1), prop::option::of(arb_ident())).prop_map(|(e, alias)| {
                alias.map_or_else(|| e.clone(), |a| format!("{e} AS {a}"))
            }),
            1 => Just("*".to_string()),
            1 => arb_ident().prop_map(|t| format!("{t}.*")),
        ],
        1..4,
    );

    (
        any::<bool>(),
        items,
        prop::option::of((arb_from_item(depth), prop::collection::vec(join, 0..3))),
        prop::option::of(arb_expr(2)),
        prop::collection::vec(arb_column(), 0..3),
        prop::collection::vec((arb_expr(1), prop_oneof![Just(""), Just(" ASC"), Just(" DESC")]), 0..3),
        prop::option::of((0u32..1000, prop::option::of(0u32..1000))),
    )
        .prop_map(|(distinct, items, from, where_clause, group_by, order_by, limit)| {
            let mut sql = String::from("SELECT ");
            if distinct {
                sql.push_str("DISTINCT ");
            }
            sql.push_str(&items.join(", "));
            if let Some((base, joins)) = from {
                sql.push_str(&format!(" FROM {base}{}", joins.concat()));
            }
            if let Some(w) = where_clause {
                sql.push_str(&format!(" WHERE {w}"));
            }
            if !group_by.is_empty() {
                sql.push_str(&format!(" GROUP BY {}", group_by.join(", ")));
            }
            if !order_by.is_empty() {
                let keys: Vec<String> = order_by.iter().map(|(e, dir)| format!("{e}{dir}")).collect();
                sql.push_str(&format!(" ORDER BY {}", keys.join(", ")));
            }
            match limit {
                Some((n, Some(m))) => sql.push_str(&format!(" LIMIT {n} OFFSET {m}")),
                Some((n, None)) => sql.push_str(&format!(" LIMIT {n}")),
                None => {}
            }
            sql
        })
        .boxed()
}

/// Generate a random statement of any kind.
fn arb_statement() -> BoxedStrategy<String> {
    prop_oneof![
        6 => arb_select(1),
        2 => (arb_column(), prop::collection::vec(prop::collection::vec(arb_expr(1), 2..=2), 1..3))
            .prop_map(|(t, rows)| {
                let rows: Vec<String> = rows.iter().map(|r| format!("({})", r.join(", "))).collect();
                format!("INSERT INTO {t} (a, b) VALUES {}", rows.join(", "))
            }),
        1 => (arb_ident(), arb_select(0)).prop_map(|(t, q)| format!("INSERT INTO {t} {q}")),
        2 => (arb_column(), arb_column(), arb_expr(1), prop::option::of(arb_expr(1)))
            .prop_map(|(t, c, v, w)| {
                let mut sql = format!("UPDATE {t} SET {c} = {v}");
                if let Some(w) = w {
                    sql.push_str(&format!(" WHERE {w}"));
                }
                sql
            }),
        2 => (arb_column(), prop::option::of(arb_expr(2)))
            .prop_map(|(t, w)| match w {
                Some(w) => format!("DELETE FROM {t} WHERE {w}"),
                None => format!("DELETE FROM {t}"),
            }),
        1 => (arb_column(), prop::collection::vec((arb_ident(), prop_oneof![
            Just("INTEGER"), Just("TEXT"), Just("VARCHAR(64)"), Just("DECIMAL(10, 2) NOT NULL"),
        ]), 1..4))
            .prop_map(|(t, cols)| {
                let cols: Vec<String> = cols.iter().map(|(c, ty)| format!("{c} {ty}")).collect();
                format!("CREATE TABLE {t} ({})", cols.join(", "))
            }),
        1 => (arb_ident(), arb_column(), prop::collection::vec(arb_ident(), 1..3))
            .prop_map(|(i, t, cols)| format!("CREATE INDEX {i} ON {t} ({})", cols.join(", "))),
        1 => arb_column().prop_map(|t| format!("DROP TABLE {t}")),
        1 => (arb_ident(), prop::option::of(arb_ident())).prop_map(|(i, t)| match t {
            Some(t) => format!("DROP INDEX {i} ON {t}"),
            None => format!("DROP INDEX {i}"),
        }),
        1 => (arb_column(), arb_ident()).prop_map(|(t, c)| format!("ALTER TABLE {t} ADD COLUMN {c} TEXT")),
    ]
    .boxed()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn dump_round_trips(sql in arb_statement()) {
        let ast1 = parse(&sql);
        prop_assert!(ast1.is_ok(), "generated statement rejected: {sql}\n{ast1:?}");
        let ast1 = ast1.unwrap();
        prop_assert!(check_sql(&sql).is_ok());

        let rendered1 = ast1.to_string();
        let ast2 = parse(&rendered1);
        prop_assert!(ast2.is_ok(), "dump rejected: {rendered1}\n{ast2:?}");
        let ast2 = ast2.unwrap();
        prop_assert_eq!(&ast1, &ast2, "tree changed through dump: {}", rendered1);

        let rendered2 = ast2.to_string();
        prop_assert_eq!(rendered1, rendered2);
    }

    #[test]
    fn layout_round_trips(sql in arb_statement(), indent in 0usize..6) {
        let ast = parse(&sql).unwrap();
        let text = pretty::format_statement(&ast, indent);
        let reparsed = parse(&text);
        prop_assert!(reparsed.is_ok(), "layout rejected:\n{text}\n{reparsed:?}");
        prop_assert_eq!(reparsed.unwrap(), ast);
    }

    #[test]
    fn arbitrary_text_never_panics(sql in "\\PC{0,40}") {
        let _ = parse(&sql);
        let _ = check_sql(&sql);
    }
}
