//! Linear systems over `F_p`.

use fqext_integers::{Integer, PrimeField};
use num_traits::Zero;

/// Solves `A x = b` over `F_p` by Gauss-Jordan elimination.
///
/// `rows` holds `A` in row-major order. Free variables are set to zero.
/// Returns `None` if the system is inconsistent.
pub(crate) fn solve(rows: &[Vec<Integer>], rhs: &[Integer], field: &PrimeField) -> Option<Vec<Integer>> {
    let num_rows = rows.len();
    let num_cols = rows.first().map_or(0, Vec::len);

    // Augmented matrix [A | b]
    let mut m: Vec<Vec<Integer>> = rows
        .iter()
        .zip(rhs)
        .map(|(row, b)| {
            let mut r = row.clone();
            r.push(b.clone());
            r
        })
        .collect();

    let mut pivots = Vec::new();
    let mut pivot_row = 0;

    for col in 0..num_cols {
        if pivot_row >= num_rows {
            break;
        }

        // Find pivot (first non-zero in column)
        let Some(found) = (pivot_row..num_rows).find(|&r| !m[r][col].is_zero()) else {
            continue;
        };
        m.swap(pivot_row, found);

        // Scale pivot row to make pivot = 1
        let inv = field.inv(&m[pivot_row][col])?;
        for c in &mut m[pivot_row] {
            *c = field.mul(c, &inv);
        }

        // Eliminate the column everywhere else
        let pivot = m[pivot_row].clone();
        for (r, row) in m.iter_mut().enumerate() {
            if r == pivot_row || row[col].is_zero() {
                continue;
            }
            let factor = row[col].clone();
            for (c, p) in row.iter_mut().zip(&pivot) {
                *c = field.sub(c, &field.mul(&factor, p));
            }
        }

        pivots.push((pivot_row, col));
        pivot_row += 1;
    }

    // A zero row with a non-zero right-hand side is inconsistent
    if m[pivot_row..].iter().any(|row| !row[num_cols].is_zero()) {
        return None;
    }

    let mut x = vec![Integer::zero(); num_cols];
    for (r, c) in pivots {
        x[c] = m[r][num_cols].clone();
    }
    Some(x)
}
