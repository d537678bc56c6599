use ndarray::Array2;
use num_traits::PrimInt;
use std::{
    fmt::{Debug, Display},
    io::{self, Write},
};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("{weights} weights were given for {values} values")]
    LengthMismatch { weights: usize, values: usize },

    #[error("total value overflowed while filling the table")]
    Overflow,
}

/// Solve the [0/1 knapsack problem](https://en.wikipedia.org/wiki/Knapsack_problem#0-1_knapsack_problem)
/// bottom-up in O(n * capacity) time and space.
///
/// Returns the highest total value of a subset of items whose weights fit within `capacity`.
pub fn knapsack<V: PrimInt + Debug>(
    capacity: usize,
    weights: &[usize],
    values: &[V],
) -> Result<V, KnapsackError> {
    let table = fill_table(capacity, weights, values)?;
    let best = table[[values.len(), capacity]];
    info!(
        "Best value for {} items within capacity {} is {:?}",
        values.len(),
        capacity,
        best
    );
    Ok(best)
}

/// Report the best value for a knapsack of the given capacity on one line.
pub fn write_best<V: Display>(out: &mut impl Write, capacity: usize, best: V) -> io::Result<()> {
    writeln!(
        out,
        "Maximum value that can be put in a knapsack of capacity W = {} is {}",
        capacity, best
    )
}

/// Cell `[i, w]` holds the best value using the first `i` items within weight `w`.
///
/// Row 0 and column 0 stay zero.
fn fill_table<V: PrimInt + Debug>(
    capacity: usize,
    weights: &[usize],
    values: &[V],
) -> Result<Array2<V>, KnapsackError> {
    if weights.len() != values.len() {
        return Err(KnapsackError::LengthMismatch {
            weights: weights.len(),
            values: values.len(),
        });
    }

    let mut table = Array2::zeros((values.len() + 1, capacity + 1));
    for (i, (&weight, &value)) in weights.iter().zip(values).enumerate() {
        let i = i + 1;
        for w in 1..=capacity {
            let excluded = table[[i - 1, w]];
            table[[i, w]] = if weight > w {
                excluded
            } else {
                let included = value
                    .checked_add(&table[[i - 1, w - weight]])
                    .ok_or(KnapsackError::Overflow)?;
                excluded.max(included)
            };
        }
        debug!(item = i, weight, ?value, best = ?table[[i, capacity]], "Filled row");
    }
    Ok(table)
}
