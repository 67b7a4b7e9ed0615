//! A logging decorator for pure functions.

use serde::Serialize;

/// Wrap `f` so each invocation logs its label and JSON-rendered result.
///
/// The wrapper forwards the argument, returns `f`'s result unchanged, and
/// does not alter `f`'s panic behavior. The sink receives one line before the
/// call and one after it.
pub fn with_logging<A, R, F, L>(f: F, label: impl Into<String>, mut sink: L) -> impl FnMut(A) -> R
where
    F: Fn(A) -> R,
    R: Serialize,
    L: FnMut(&str),
{
    let label = label.into();
    move |arg| {
        sink(&format!("Running: {label}"));
        let result = f(arg);
        let rendered = serde_json::to_string_pretty(&result)
            .unwrap_or_else(|e| format!("<unserializable: {e}>"));
        sink(&format!("Result: {rendered}"));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::demo_catalog;
    use crate::query::calculate_total;
    use std::cell::RefCell;

    #[test]
    fn decorator_logs_label_and_result_and_forwards_the_value() {
        let lines: RefCell<Vec<String>> = RefCell::new(Vec::new());
        let mut doubled = with_logging(|x: i64| x * 2, "double", |l: &str| {
            lines.borrow_mut().push(l.to_owned())
        });

        assert_eq!(doubled(21), 42);
        assert_eq!(*lines.borrow(), ["Running: double", "Result: 42"]);

        // A second invocation keeps appending.
        assert_eq!(doubled(5), 10);
        assert_eq!(lines.borrow().len(), 4);
    }

    #[test]
    fn decorator_composes_with_catalog_queries() {
        let catalog = demo_catalog();
        let lines: RefCell<Vec<String>> = RefCell::new(Vec::new());
        let mut logged_total = with_logging(calculate_total, "total value", |l: &str| {
            lines.borrow_mut().push(l.to_owned())
        });

        assert_eq!(logged_total(&catalog), 83_080.0);
        assert_eq!(lines.borrow()[0], "Running: total value");
        assert!(lines.borrow()[1].starts_with("Result: 83080"));
    }
}
