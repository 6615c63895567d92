//! Greedy shortest-column-first assignment of brand blocks.

/// One output column: the brands assigned to it, in assignment order, and
/// the running pixel height (including the starting offset).
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPlan {
    pub brands: Vec<String>,
    pub height: f32,
}

impl ColumnPlan {
    fn new(start_y: f32) -> Self {
        Self {
            brands: Vec::new(),
            height: start_y,
        }
    }
}

/// Assign brand blocks to two columns, always appending to the currently
/// shorter column (tie goes to column 0). Blocks are consumed in iteration
/// order, which callers derive from the ordered brand list.
///
/// This is a pure fold; both the height estimator and the renderer consume
/// its output, one keeping only the heights and the other only the
/// membership lists.
pub fn assign_columns<'a, I>(blocks: I, start_y: f32) -> [ColumnPlan; 2]
where
    I: IntoIterator<Item = (&'a str, f32)>,
{
    let mut first = ColumnPlan::new(start_y);
    let mut second = ColumnPlan::new(start_y);
    for (name, height) in blocks {
        let target = if first.height <= second.height {
            &mut first
        } else {
            &mut second
        };
        target.brands.push(name.to_string());
        target.height += height;
    }
    [first, second]
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_goes_to_first_column() {
        let [a, b] = assign_columns([("X", 100.0)], 200.0);
        assert_eq!(a.brands, vec!["X"]);
        assert!(b.brands.is_empty());
        assert_eq!(a.height, 300.0);
        assert_eq!(b.height, 200.0);
    }

    #[test]
    fn test_blocks_go_to_shorter_column() {
        let blocks = [("C", 220.0), ("A", 120.0), ("B", 60.0)];
        let [col0, col1] = assign_columns(blocks, 200.0);
        assert_eq!(col0.brands, vec!["C"]);
        assert_eq!(col1.brands, vec!["A", "B"]);
        assert_eq!(col0.height, 420.0);
        assert_eq!(col1.height, 380.0);
    }

    #[test]
    fn test_empty_input_keeps_start_height() {
        let [a, b] = assign_columns(std::iter::empty(), 210.0);
        assert_eq!(a.height, 210.0);
        assert_eq!(b.height, 210.0);
    }
}
