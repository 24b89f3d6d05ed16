//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}',
//! use [format_endpoint].

/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to delete a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route to fetch the most recently rendered chart artifact of a type.
pub const LATEST_PLOT: &str = "/latest_plot/{plot_type}";

/// Replace the first `{parameter}` segment in `endpoint_path` with `id`.
///
/// Returns the path unchanged if it has no parameter segment.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
