pub mod input;

use extremis_taylor::{SquareMatrix, TaylorSeries};

fn format_matrix(matrix: &SquareMatrix<f64>, precision: usize) -> String {
    let mut out = String::new();
    for row in 0..matrix.size() {
        let cells: Vec<String> = matrix
            .row_slice(row)
            .iter()
            .map(|v| format!("{:>width$.prec$}", v, width = precision + 6, prec = precision))
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Base matrix and approximation as fixed-precision text blocks.
pub fn render_series(series: &TaylorSeries, precision: usize) -> String {
    format!(
        "matrix ({}x{}):\n{}exp approximation (order {}):\n{}",
        series.size(),
        series.size(),
        format_matrix(series.matrix(), precision),
        series.order(),
        format_matrix(series.approximation(), precision)
    )
}
