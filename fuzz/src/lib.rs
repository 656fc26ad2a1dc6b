use ion_ci::{
    CiStruct, CiStructMut, DuplicatePolicy, OwnStruct, OwnValue, from_value_ci, to_value, wrap,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SimpleRow {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Mode {
    Off,
    Level(i32),
    Span { from: i32, to: i32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct WithMode {
    #[serde(default)]
    mode: Option<Mode>,
    #[serde(default)]
    rows: Vec<SimpleRow>,
}

/// Splits the input into field names (before the first empty line) and
/// queries (after it).
fn names_and_queries(data: &[u8]) -> (Vec<String>, Vec<String>) {
    let text = String::from_utf8_lossy(data);
    let mut lines = text.split('\n');
    let names = lines
        .by_ref()
        .take_while(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    let queries = lines.map(str::to_owned).collect();
    (names, queries)
}

fn swap_case(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Linear scan: the position a lookup of `query` must resolve to.
fn expected(names: &[&str], query: &str, policy: DuplicatePolicy) -> Option<usize> {
    let exact = match policy {
        DuplicatePolicy::PreferExact => names.iter().position(|name| *name == query),
        DuplicatePolicy::FirstWins => None,
    };
    exact.or_else(|| names.iter().position(|name| name.eq_ignore_ascii_case(query)))
}

fn check_lookups(fields: &OwnStruct, queries: &[String]) {
    let names: Vec<&str> = fields.field_names().collect();
    for policy in [DuplicatePolicy::FirstWins, DuplicatePolicy::PreferExact] {
        let view = CiStruct::new(fields).with_policy(policy);
        for query in queries.iter().map(String::as_str).chain(names.iter().copied()) {
            for query in [query.to_owned(), swap_case(query), query.to_ascii_uppercase()] {
                let want = expected(&names, &query, policy);
                let got = view.get(&query).map(|value| value.as_int());
                assert_eq!(got, want.map(|position| Some(position as i64)), "{query:?}");
                assert_eq!(view.resolve(&query), want.map(|position| names[position]));

                let all: Vec<_> = view.get_all(&query).filter_map(|value| value.as_int()).collect();
                let all_want: Vec<_> = (0..names.len())
                    .filter(|&position| names[position].eq_ignore_ascii_case(&query))
                    .map(|position| position as i64)
                    .collect();
                assert_eq!(all, all_want);
            }
        }
    }
}

pub fn test_lookup(data: &[u8]) {
    let (names, queries) = names_and_queries(data);
    let mut fields: OwnStruct = names
        .iter()
        .enumerate()
        .map(|(position, name)| (name.as_str(), position as i64))
        .collect();
    check_lookups(&fields, &queries);

    // Mutate through the decorator, renumbering so values stay positions.
    {
        let mut view = CiStructMut::new(&mut fields);
        for query in &queries {
            if let Some(name) = view.resolve(query).map(str::to_owned) {
                view.remove(&name);
            } else {
                view.add(query.as_str(), 0);
            }
            let current: Vec<String> = view.field_names().map(str::to_owned).collect();
            let current: Vec<&str> = current.iter().map(String::as_str).collect();
            let want = expected(&current, query, DuplicatePolicy::FirstWins);
            assert_eq!(view.resolve(query), want.map(|position| current[position]));
        }
    }
    let renumbered: OwnStruct = fields
        .field_names()
        .enumerate()
        .map(|(position, name)| (name.to_owned(), position as i64))
        .collect();
    check_lookups(&renumbered, &queries);
}

pub fn test_serde(data: &[u8]) {
    let (names, queries) = names_and_queries(data);
    let fields: OwnStruct = names
        .iter()
        .zip(queries.iter().chain(std::iter::repeat(&String::new())))
        .map(|(name, text)| (name.as_str(), text.as_str()))
        .collect();
    let value = OwnValue::from(fields);

    if let Ok(row) = from_value_ci::<SimpleRow>(&value) {
        let back = to_value(&row).expect("a row always serializes");
        assert_eq!(from_value_ci::<SimpleRow>(&back).ok(), Some(row));
    }
    if let Ok(with_mode) = from_value_ci::<WithMode>(&value) {
        let _ = to_value(&with_mode);
    }

    let direct = to_value(&value).expect("a value always serializes");
    let decorated = to_value(&wrap(&value)).expect("a view always serializes");
    assert_eq!(direct, decorated);
}

pub fn test(data: &[u8]) {
    test_lookup(data);
    test_serde(data);
}
