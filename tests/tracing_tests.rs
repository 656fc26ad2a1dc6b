use std::{
    io,
    sync::{Arc, Mutex},
};

use ion_ci::{OwnStruct, OwnValue, wrap};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[test]
fn test_index_build_is_traced_once_per_view() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let fields: OwnStruct = [("Id", 1), ("ID", 2), ("name", 3)].into_iter().collect();
    let value = OwnValue::from(fields);

    tracing::subscriber::with_default(subscriber, || {
        let view = wrap(&value);
        view.get("id").unwrap();
        view.get("NAME").unwrap();
        view.get("missing").unwrap();
    });

    let text = captured.text();
    assert_eq!(text.matches("built case-insensitive name index").count(), 1, "{text}");
    assert!(text.contains("fields=3"), "{text}");
    assert!(text.contains("keys=2"), "{text}");
}

#[test]
fn test_enumeration_does_not_build_the_index() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let fields: OwnStruct = [("a", 1), ("b", 2)].into_iter().collect();
    let value = OwnValue::from(fields);

    tracing::subscriber::with_default(subscriber, || {
        let view = wrap(&value).into_struct().unwrap();
        assert_eq!(view.iter().count(), 2);
        assert_eq!(view.field_names().count(), 2);
    });

    assert!(captured.text().is_empty());
}
