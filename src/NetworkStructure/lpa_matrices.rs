//! # Lumped Stoichiometric Matrices (LPA)
//!
//! ## Aim
//! Given the reactant (alpha) and product (beta) stoichiometric coefficients of a well-mixed
//! system and a partition of its species into slow and fast ones, build the enlarged pair of
//! coefficient matrices of the lumped system. Slow species are split into a *global* and a
//! *local* copy which are coupled only through the fast species.
//!
//! ## Layout of the result
//! rows: `[global slow ..., fast ..., local slow ...]`, shape `(2 * no_slow + no_fast, 2 * no_reactions)`
//! columns: `[original reactions ..., duplicated reactions ...]`
//!
//! | block       | alpha                      | beta                                 |
//! |-------------|----------------------------|--------------------------------------|
//! | global slow | `[alpha_s, 0]`             | `[beta_s, 0]`                        |
//! | fast        | `[alpha_f, alpha_f]`       | `[beta_f, beta_f modified per rule]` |
//! | local slow  | `[0, alpha_s]`             | `[0, beta_s]`                        |
//!
//! The local (duplicated) block of a fast beta row is modified reaction by reaction:
//! 1) the fast species is produced and a global slow species is consumed: entry set to 0,
//!    mass arriving from the global slow variable may not also show up for the local one;
//! 2) the fast species is consumed and a global slow species is produced: entry set to
//!    `alpha[fast, r]`, the fast species then acts as a catalyst for the local block.
//!    Rule 2 is applied after rule 1 and wins when both hold.
//!
//! ## Usage
//! ```rust, ignore
//! let lumped = lpa_alpha_beta(&alpha, &beta, &[0, 2])?;
//! lumped.pretty_print();
//! ```
use log::{debug, info};
use nalgebra::{DMatrix, RowDVector};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

/// errors raised while validating the input of the LPA construction
#[derive(Debug, Error, PartialEq)]
pub enum LpaError {
    #[error("alpha and beta need to have the same number of columns (reactions): {alpha} != {beta}")]
    ReactionCountMismatch { alpha: usize, beta: usize },
    #[error("alpha and beta need to have the same number of rows (substances): {alpha} != {beta}")]
    SubstanceCountMismatch { alpha: usize, beta: usize },
    #[error(
        "no fast species present in system: fast species are required to connect the global and local slow subgraphs"
    )]
    NoFastSpecies,
    #[error("slow index {index} is out of range for {no_substances} substances")]
    SlowIndexOutOfRange { index: usize, no_substances: usize },
    #[error("negative stoichiometric coefficient {value} in {matrix} at ({row}, {column})")]
    NegativeCoefficient {
        matrix: &'static str,
        row: usize,
        column: usize,
        value: f64,
    },
}

/// lumped reactant/product matrices together with the partition they were built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpedMatrices {
    pub alpha: DMatrix<f64>,
    pub beta: DMatrix<f64>,
    /// row indices of the original system, in caller order
    pub slow_indices: Vec<usize>,
    /// complement of the slow indices, ascending
    pub fast_indices: Vec<usize>,
}

impl LumpedMatrices {
    pub fn no_slow(&self) -> usize {
        self.slow_indices.len()
    }

    pub fn no_fast(&self) -> usize {
        self.fast_indices.len()
    }

    /// reactions of the original system
    pub fn no_reactions(&self) -> usize {
        self.alpha.ncols() / 2
    }

    pub fn global_slow_rows(&self) -> Range<usize> {
        0..self.no_slow()
    }

    pub fn fast_rows(&self) -> Range<usize> {
        self.no_slow()..self.no_slow() + self.no_fast()
    }

    pub fn local_slow_rows(&self) -> Range<usize> {
        self.no_slow() + self.no_fast()..2 * self.no_slow() + self.no_fast()
    }

    /// row labels: `global i`, `fast i`, `local i` with i the row of the original system
    pub fn row_labels(&self) -> Vec<String> {
        let global = self.slow_indices.iter().map(|i| format!("global {}", i));
        let fast = self.fast_indices.iter().map(|i| format!("fast {}", i));
        let local = self.slow_indices.iter().map(|i| format!("local {}", i));
        global.chain(fast).chain(local).collect()
    }

    /// one table per matrix, reactions of the duplicated block are primed
    pub fn to_tables(&self) -> (Table, Table) {
        (self.matrix_table(&self.alpha), self.matrix_table(&self.beta))
    }

    fn matrix_table(&self, matrix: &DMatrix<f64>) -> Table {
        let no_rxn = self.no_reactions();
        let mut table = Table::new();
        let mut header = vec![Cell::new("")];
        header.extend((0..no_rxn).map(|r| Cell::new(&format!("r{}", r))));
        header.extend((0..no_rxn).map(|r| Cell::new(&format!("r{}'", r))));
        table.add_row(Row::new(header));
        for (label, row) in self.row_labels().iter().zip(matrix.row_iter()) {
            let mut cells = vec![Cell::new(label)];
            cells.extend(row.iter().map(|v| Cell::new(&v.to_string())));
            table.add_row(Row::new(cells));
        }
        table
    }

    pub fn pretty_print(&self) {
        let (alpha, beta) = self.to_tables();
        println!("LPA alpha (reactants):");
        alpha.printstd();
        println!("LPA beta (products):");
        beta.printstd();
    }
}

/// complement of the slow indices within `0..no_substances`, ascending
pub fn fast_indices(no_substances: usize, slow_indices: &[usize]) -> Vec<usize> {
    (0..no_substances)
        .filter(|i| !slow_indices.contains(i))
        .collect()
}

fn check_non_negative(matrix: &DMatrix<f64>, name: &'static str) -> Result<(), LpaError> {
    for column in 0..matrix.ncols() {
        for row in 0..matrix.nrows() {
            let value = matrix[(row, column)];
            if value < 0.0 {
                return Err(LpaError::NegativeCoefficient {
                    matrix: name,
                    row,
                    column,
                    value,
                });
            }
        }
    }
    Ok(())
}

/// checks shapes, coefficients and the partition, returns the fast indices
fn validate(
    alpha: &DMatrix<f64>,
    beta: &DMatrix<f64>,
    slow_indices: &[usize],
) -> Result<Vec<usize>, LpaError> {
    if alpha.ncols() != beta.ncols() {
        return Err(LpaError::ReactionCountMismatch {
            alpha: alpha.ncols(),
            beta: beta.ncols(),
        });
    }
    if alpha.nrows() != beta.nrows() {
        return Err(LpaError::SubstanceCountMismatch {
            alpha: alpha.nrows(),
            beta: beta.nrows(),
        });
    }
    let no_sub = alpha.nrows();
    if let Some(&index) = slow_indices.iter().find(|&&i| i >= no_sub) {
        return Err(LpaError::SlowIndexOutOfRange {
            index,
            no_substances: no_sub,
        });
    }
    check_non_negative(alpha, "alpha")?;
    check_non_negative(beta, "beta")?;
    let fast = fast_indices(no_sub, slow_indices);
    if fast.is_empty() {
        return Err(LpaError::NoFastSpecies);
    }
    Ok(fast)
}

/// `[left, right]` as one row
fn join_rows(left: &RowDVector<f64>, right: &RowDVector<f64>) -> RowDVector<f64> {
    RowDVector::from_iterator(
        left.len() + right.len(),
        left.iter().chain(right.iter()).copied(),
    )
}

/// lumped alpha and beta of the system with the given slow species
pub fn lpa_alpha_beta(
    alpha: &DMatrix<f64>,
    beta: &DMatrix<f64>,
    slow_indices: &[usize],
) -> Result<LumpedMatrices, LpaError> {
    let fast = validate(alpha, beta, slow_indices)?;
    let no_rxn = alpha.ncols();
    let no_slow = slow_indices.len();
    let no_fast = fast.len();
    info!(
        "LPA: {} substances ({} slow, {} fast), {} reactions",
        alpha.nrows(),
        no_slow,
        no_fast,
        no_rxn
    );
    let zeros = RowDVector::<f64>::zeros(no_rxn);

    // does reaction r consume / produce any global slow species
    let consumes_slow: Vec<bool> = (0..no_rxn)
        .map(|r| slow_indices.iter().any(|&s| alpha[(s, r)] > 0.0))
        .collect();
    let produces_slow: Vec<bool> = (0..no_rxn)
        .map(|r| slow_indices.iter().any(|&s| beta[(s, r)] > 0.0))
        .collect();

    let mut alpha_rows: Vec<RowDVector<f64>> = Vec::with_capacity(2 * no_slow + no_fast);
    let mut beta_rows: Vec<RowDVector<f64>> = Vec::with_capacity(2 * no_slow + no_fast);

    // global slow variables
    for &slow_i in slow_indices {
        alpha_rows.push(join_rows(&alpha.row(slow_i).into_owned(), &zeros));
        beta_rows.push(join_rows(&beta.row(slow_i).into_owned(), &zeros));
    }
    // fast variables
    for &fast_i in fast.iter() {
        let alpha_row = alpha.row(fast_i).into_owned();
        alpha_rows.push(join_rows(&alpha_row, &alpha_row));

        let beta_row = beta.row(fast_i).into_owned();
        let mut beta_local = beta_row.clone();
        for rxn_i in 0..no_rxn {
            if beta[(fast_i, rxn_i)] > 0.0 && consumes_slow[rxn_i] {
                beta_local[rxn_i] = 0.0;
            }
            if alpha[(fast_i, rxn_i)] > 0.0 && produces_slow[rxn_i] {
                beta_local[rxn_i] = alpha[(fast_i, rxn_i)];
                debug!(
                    "fast species {} acts as catalyst of local block in reaction {}",
                    fast_i, rxn_i
                );
            }
        }
        beta_rows.push(join_rows(&beta_row, &beta_local));
    }
    // local slow variables
    for &slow_i in slow_indices {
        alpha_rows.push(join_rows(&zeros, &alpha.row(slow_i).into_owned()));
        beta_rows.push(join_rows(&zeros, &beta.row(slow_i).into_owned()));
    }

    Ok(LumpedMatrices {
        alpha: DMatrix::from_rows(&alpha_rows),
        beta: DMatrix::from_rows(&beta_rows),
        slow_indices: slow_indices.to_vec(),
        fast_indices: fast,
    })
}
