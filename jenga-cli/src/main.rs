//! jenga — block-extraction solver front-end.
//!
//! Reads a whitespace-separated query from stdin (`N M`, N×M grid
//! labels with `?` allowed for unknown cells, then the target label)
//! and prints either `"{cost} via {side}"` or `"invalid"` to stdout.
//! Every failure mode maps to `"invalid"` with exit status 0; details
//! go to stderr through the logger.

mod input;
mod logging;

use std::io::Read;

use jenga_paths::extract;

fn main() {
    logging::init();

    let mut raw = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut raw) {
        log::error!("failed to read stdin: {err}");
        println!("invalid");
        return;
    }

    let query = match input::parse_query(&raw) {
        Ok(q) => q,
        Err(err) => {
            log::warn!("rejecting input: {err}");
            println!("invalid");
            return;
        }
    };

    match extract(&query.grid, query.target) {
        Ok(found) => println!("{} via {}", found.cost, found.side),
        Err(err) => {
            log::info!("query has no answer: {err}");
            println!("invalid");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::input::parse_query;
    use jenga_core::Side;
    use jenga_paths::{ExtractError, extract};

    #[test]
    fn two_by_two_query_end_to_end() {
        let q = parse_query("2 2\n1 2\n1 3\n3\n").unwrap();
        let found = extract(&q.grid, q.target).unwrap();
        assert_eq!((found.cost, found.side), (3, Side::Down));
    }

    #[test]
    fn unknown_target_end_to_end() {
        let q = parse_query("2 2 1 2 1 3 42").unwrap();
        assert_eq!(
            extract(&q.grid, q.target),
            Err(ExtractError::UnknownBlock(42))
        );
    }

    #[test]
    fn unknown_cells_get_the_fill_label() {
        // The `?` west of the target becomes label 7, making the left
        // exit (3 + 7) cheaper than any wall of 9s (3 + 9).
        let q = parse_query("3 3  9 9 9  ? 3 9  9 9 9  3").unwrap();
        let found = extract(&q.grid, q.target).unwrap();
        assert_eq!((found.cost, found.side), (10, Side::Left));
    }
}
