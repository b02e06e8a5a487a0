/// List helpers shared by table views (sorting and header indicators)
use std::cmp::Ordering;

/// Rows that can be ordered by a named column
pub trait Sortable {
    /// Compare two rows by the given field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort rows in place by `field`
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS modifier for the header cell of the active sort column
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sortable-header table__sortable-header--active"
    } else {
        "table__sortable-header"
    }
}

/// Total order for f64 columns (NaN sorts first)
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()).reverse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        score: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "score" => compare_f64(self.score, other.score),
                _ => self.name.cmp(other.name),
            }
        }
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![
            Row { name: "b", score: 2.0 },
            Row { name: "a", score: 3.0 },
            Row { name: "c", score: 1.0 },
        ];
        sort_list(&mut rows, "score", true);
        assert_eq!(rows[0].name, "c");
        sort_list(&mut rows, "name", false);
        assert_eq!(rows[0].name, "c");
        assert_eq!(rows[2].name, "a");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "score", true), " ⇅");
        assert_eq!(get_sort_class("name", "score"), "table__sortable-header");
    }
}
