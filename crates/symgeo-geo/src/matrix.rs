//! Dynamically-shaped matrix treated as a flat Lie group.
//!
//! [`Matrix`] is a runtime-shaped 2-D container of scalars that is
//! simultaneously:
//!
//! - a flat numeric buffer ([`Storage`]),
//! - an element of the additive group of same-shaped matrices ([`Group`]),
//! - a point on a globally flat manifold whose tangent space is the matrix
//!   space itself ([`LieGroup`]).
//!
//! The container and the algebraic capabilities are kept separate: the type
//! owns its storage, and each concept is a trait implementation rather than
//! an inheritance relationship.
//!
//! # Mathematical Properties
//!
//! - **Group operation**: elementwise addition; the identity is the zero
//!   matrix of the operand's shape, the inverse is negation
//! - **Tangent space**: T_m M = M for every m; `to_tangent` is row-major
//!   flattening and `from_tangent` its inverse
//! - **Flattening order**: row-major throughout (`(0,0), (0,1), ..., (1,0)`),
//!   for storage, tangent vectors, and reshapes alike
//!
//! # Naming caveat
//!
//! `identity`/`inverse` from [`Group`] are the *additive group* operations.
//! The linear-algebra identity matrix and matrix inverse are the separately
//! named [`Matrix::matrix_identity`] and [`Matrix::matrix_inverse`].

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use num_traits::FromPrimitive;
use symgeo_core::error::{GeoError, Result};
use symgeo_core::ops::{self, Group, LieGroup, Storage};
use symgeo_core::scalar::{ScalarExpr, SymbolicExpr};

/// A dynamically-shaped matrix of symbolic or numeric scalars.
///
/// Shape is fixed at construction; every algebraic operation returns a new
/// value rather than mutating its operand. Equality is elementwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T: ScalarExpr> {
    rows: usize,
    cols: usize,
    /// Row-major element storage, always `rows * cols` long.
    data: Vec<T>,
}

fn shape_str(rows: usize, cols: usize) -> String {
    format!("({rows}, {cols})")
}

impl<T: ScalarExpr> Matrix<T> {
    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ShapeMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(GeoError::shape_mismatch(
                format!("{} elements for shape {}", rows * cols, shape_str(rows, cols)),
                format!("{} elements", data.len()),
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from nested row vectors.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ShapeMismatch`] if the rows have unequal lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(GeoError::shape_mismatch(
                    format!("rows of length {ncols}"),
                    format!("row of length {}", row.len()),
                ));
            }
            data.extend(row);
        }
        Ok(Self {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    /// Creates a column vector from the given scalars.
    pub fn col_vec(data: Vec<T>) -> Self {
        Self {
            rows: data.len(),
            cols: 1,
            data,
        }
    }

    /// Creates a row vector from the given scalars.
    pub fn row_vec(data: Vec<T>) -> Self {
        Self {
            rows: 1,
            cols: data.len(),
            data,
        }
    }

    /// Matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Matrix of ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::one(); rows * cols],
        }
    }

    /// Square matrix with the given diagonal and zeros elsewhere.
    pub fn diag(diagonal: Vec<T>) -> Self {
        let n = diagonal.len();
        let mut mat = Self::zeros(n, n);
        for (i, value) in diagonal.into_iter().enumerate() {
            mat.data[i * n + i] = value;
        }
        mat
    }

    /// Square identity matrix of the given dimension.
    pub fn eye(rows: usize) -> Self {
        Self::eye_rect(rows, rows)
    }

    /// Rectangular identity pattern: ones along the `min(rows, cols)`
    /// diagonal entries, zeros elsewhere.
    pub fn eye_rect(rows: usize, cols: usize) -> Self {
        let mut mat = Self::zeros(rows, cols);
        for i in 0..rows.min(cols) {
            mat.data[i * cols + i] = T::one();
        }
        mat
    }

    /// Matrix of freshly-named symbols.
    ///
    /// Naming is deterministic so generated expressions reproduce exactly:
    /// `"{name}{row}"` for column vectors, `"{name}{row}_{col}"` otherwise.
    pub fn symbolic(name: &str, rows: usize, cols: usize) -> Self
    where
        T: SymbolicExpr,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let sym = if cols == 1 {
                    format!("{name}{r}")
                } else {
                    format!("{name}{r}_{c}")
                };
                data.push(T::symbol(&sym));
            }
        }
        Self { rows, cols, data }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether this matrix is a vector (a single row or a single column).
    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    /// Elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Mutable element at `(row, col)`, or `None` if out of range.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Zero matrix with `self`'s shape.
    pub fn zeros_like(&self) -> Self {
        Self::zeros(self.rows, self.cols)
    }

    /// Matrix of ones with `self`'s shape.
    pub fn ones_like(&self) -> Self {
        Self::ones(self.rows, self.cols)
    }

    /// Reinterpret the elements under a new shape, preserving row-major
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ShapeMismatch`] unless
    /// `new_rows * new_cols == rows * cols`.
    pub fn reshape(&self, new_rows: usize, new_cols: usize) -> Result<Self> {
        if new_rows * new_cols != self.rows * self.cols {
            return Err(GeoError::shape_mismatch(
                format!("{} elements", self.rows * self.cols),
                format!(
                    "{} elements for shape {}",
                    new_rows * new_cols,
                    shape_str(new_rows, new_cols)
                ),
            ));
        }
        Ok(Self {
            rows: new_rows,
            cols: new_cols,
            data: self.data.clone(),
        })
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c].clone());
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    fn map<F: Fn(&T) -> T>(&self, f: F) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    fn zip_map<F: Fn(&T, &T) -> T>(&self, other: &Self, f: F) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(GeoError::shape_mismatch(
                shape_str(self.rows, self.cols),
                shape_str(other.rows, other.cols),
            ));
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }

    /// Elementwise difference, shape checked.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ShapeMismatch`] if the shapes differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, |a, b| a.clone() - b.clone())
    }

    /// Broadcast a scalar over every element by addition.
    ///
    /// Scalar broadcast is explicit and separately named; `+` is reserved
    /// for matrix operands, so a 1x1 matrix on the right is never ambiguous.
    pub fn add_scalar(&self, rhs: &T) -> Self {
        self.map(|x| x.clone() + rhs.clone())
    }

    /// Broadcast a scalar over every element by multiplication.
    pub fn mul_scalar(&self, rhs: &T) -> Self {
        self.map(|x| x.clone() * rhs.clone())
    }

    /// Broadcast a scalar over every element by division.
    pub fn div_scalar(&self, rhs: &T) -> Self {
        self.map(|x| x.clone() / rhs.clone())
    }

    /// Matrix product, shape checked.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::ShapeMismatch`] unless `self.cols == other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(GeoError::shape_mismatch(
                format!("left cols == right rows ({})", self.cols),
                format!("{} rows", other.rows),
            ));
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for r in 0..self.rows {
            for c in 0..other.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc = acc
                        + self.data[r * self.cols + k].clone()
                            * other.data[k * other.cols + c].clone();
                }
                data.push(acc);
            }
        }
        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Dot product of two vectors of equal tangent dimension.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NotAVector`] if either operand is not a vector,
    /// or [`GeoError::ShapeMismatch`] if their lengths differ.
    pub fn dot(&self, other: &Self) -> Result<T> {
        if !self.is_vector() {
            return Err(GeoError::not_a_vector(self.rows, self.cols));
        }
        if !other.is_vector() {
            return Err(GeoError::not_a_vector(other.rows, other.cols));
        }
        if self.data.len() != other.data.len() {
            return Err(GeoError::shape_mismatch(
                format!("vector of length {}", self.data.len()),
                format!("vector of length {}", other.data.len()),
            ));
        }
        let mut acc = T::zero();
        for (a, b) in self.data.iter().zip(&other.data) {
            acc = acc + a.clone() * b.clone();
        }
        Ok(acc)
    }

    /// Cross product of two 3-dimensional vectors, as a column vector.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NotAVector`] for non-vector operands and
    /// [`GeoError::ShapeMismatch`] for vectors of length other than 3.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        for m in [self, other] {
            if !m.is_vector() {
                return Err(GeoError::not_a_vector(m.rows, m.cols));
            }
        }
        if self.data.len() != 3 || other.data.len() != 3 {
            return Err(GeoError::shape_mismatch(
                "3-dimensional vectors",
                format!("lengths {} and {}", self.data.len(), other.data.len()),
            ));
        }
        let a = &self.data;
        let b = &other.data;
        Ok(Self::col_vec(vec![
            a[1].clone() * b[2].clone() - a[2].clone() * b[1].clone(),
            a[2].clone() * b[0].clone() - a[0].clone() * b[2].clone(),
            a[0].clone() * b[1].clone() - a[1].clone() * b[0].clone(),
        ]))
    }

    /// Squared norm of a vector: the dot product with itself.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NotAVector`] on non-vector shapes.
    pub fn squared_norm(&self) -> Result<T> {
        if !self.is_vector() {
            return Err(GeoError::not_a_vector(self.rows, self.cols));
        }
        self.dot(self)
    }

    /// Norm of a vector: `sqrt(squared_norm + epsilon)`.
    ///
    /// `epsilon` is added *inside* the square root: it guards the
    /// zero-derivative singularity at the origin when the expression is
    /// later symbolically differentiated, which an outer addition would not.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NotAVector`] on non-vector shapes.
    pub fn norm(&self, epsilon: &T) -> Result<T> {
        Ok((self.squared_norm()? + epsilon.clone()).sqrt())
    }

    /// Unit vector in this direction: `self / norm(self, epsilon)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NotAVector`] on non-vector shapes.
    pub fn normalized(&self, epsilon: &T) -> Result<Self> {
        let n = self.norm(epsilon)?;
        Ok(self.div_scalar(&n))
    }

    /// Returns 1 if `a` and `b` are parallel within `epsilon`, 0 otherwise.
    ///
    /// Computed as `(1 - sign(|a x b| - epsilon)) / 2`. The result is a
    /// scalar acting as a boolean; the sign convention is load-bearing
    /// because downstream code differentiates through this expression.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NotAVector`] or [`GeoError::ShapeMismatch`] if
    /// the operands are not 3-dimensional vectors.
    pub fn are_parallel(a: &Self, b: &Self, epsilon: &T) -> Result<T> {
        let cross_norm = a.cross(b)?.norm(&T::zero())?;
        Ok((T::one() - (cross_norm - epsilon.clone()).sign()) / T::from_f64(2.0))
    }

    /// Linear-algebra identity matrix of `self`'s shape.
    ///
    /// Not the group identity; see [`Group::identity`] for that.
    pub fn matrix_identity(&self) -> Self {
        Self::eye_rect(self.rows, self.cols)
    }

    /// Linear-algebra inverse via Gauss-Jordan elimination.
    ///
    /// Entries may be symbolic, so elimination uses exact scalar division
    /// and structural zero tests for pivots.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::SingularMatrix`] for non-square matrices and
    /// when no nonzero pivot exists in some column.
    pub fn matrix_inverse(&self) -> Result<Self> {
        if self.rows != self.cols {
            return Err(GeoError::singular(format!(
                "{}x{} matrix is not square",
                self.rows, self.cols
            )));
        }
        let n = self.rows;
        // Augmented system [A | I], reduced in place to [I | A^-1].
        let mut aug: Vec<Vec<T>> = (0..n)
            .map(|r| {
                let mut row: Vec<T> = (0..n).map(|c| self.data[r * n + c].clone()).collect();
                row.extend((0..n).map(|c| if c == r { T::one() } else { T::zero() }));
                row
            })
            .collect();

        for col in 0..n {
            let pivot = (col..n)
                .find(|&r| !aug[r][col].is_zero())
                .ok_or_else(|| GeoError::singular(format!("no nonzero pivot in column {col}")))?;
            aug.swap(col, pivot);

            let p = aug[col][col].clone();
            for entry in &mut aug[col] {
                *entry = entry.clone() / p.clone();
            }

            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = aug[r][col].clone();
                if factor.is_zero() {
                    continue;
                }
                for c in 0..2 * n {
                    aug[r][c] = aug[r][c].clone() - factor.clone() * aug[col][c].clone();
                }
            }
        }

        let data = aug
            .into_iter()
            .flat_map(|row| row.into_iter().skip(n))
            .collect();
        Ok(Self {
            rows: n,
            cols: n,
            data,
        })
    }

    /// Simplify every element, returning a matrix of the same shape.
    pub fn simplify(&self) -> Self {
        self.map(ScalarExpr::simplify)
    }

    /// Numerically evaluate every element, preserving the concrete type.
    ///
    /// Delegates to the generic storage round-trip, so any type built on
    /// [`Storage`] evaluates the same way.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NonNumeric`] if any element contains free
    /// symbols or leaves the requested domain.
    pub fn evalf(&self, real: bool) -> Result<Self> {
        ops::evalf(self, real)
    }

    /// Dense numeric matrix of the requested scalar width.
    ///
    /// Evaluates every element and hands off a row-major
    /// [`nalgebra::DMatrix`] for numeric-only consumers.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NonNumeric`] if any element cannot be evaluated
    /// or represented in the target scalar type.
    pub fn to_numeric<N>(&self) -> Result<nalgebra::DMatrix<N>>
    where
        N: nalgebra::Scalar + FromPrimitive,
    {
        let evaluated = self.evalf(true)?;
        let mut values = Vec::with_capacity(evaluated.data.len());
        for x in &evaluated.data {
            let v = x.eval_numeric(true)?;
            let n = N::from_f64(v).ok_or_else(|| {
                GeoError::non_numeric(format!("cannot represent {v} in the target scalar type"))
            })?;
            values.push(n);
        }
        Ok(nalgebra::DMatrix::from_row_iterator(
            self.rows, self.cols, values,
        ))
    }

    /// Stack 1-D vectors of equal tangent dimension as the columns of a
    /// single 2-D matrix. An empty input yields the 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NotAVector`] if any input is not a vector, or
    /// [`GeoError::ShapeMismatch`] if the lengths disagree.
    pub fn column_stack(columns: &[Self]) -> Result<Self> {
        let Some(first) = columns.first() else {
            return Ok(Self::zeros(0, 0));
        };
        let n = first.data.len();
        for col in columns {
            if !col.is_vector() {
                return Err(GeoError::not_a_vector(col.rows, col.cols));
            }
            if col.data.len() != n {
                return Err(GeoError::shape_mismatch(
                    format!("vectors of length {n}"),
                    format!("vector of length {}", col.data.len()),
                ));
            }
        }
        let mut data = Vec::with_capacity(n * columns.len());
        for r in 0..n {
            for col in columns {
                data.push(col.data[r].clone());
            }
        }
        Ok(Self {
            rows: n,
            cols: columns.len(),
            data,
        })
    }
}

// -------------------------------------------------------------------------
// Concept implementations
// -------------------------------------------------------------------------

impl<T: ScalarExpr> Storage for Matrix<T> {
    type Scalar = T;

    fn storage_dim(&self) -> usize {
        self.rows * self.cols
    }

    // Storage and tangent representations coincide for this type; this is a
    // designed special case that does not hold for curved manifold types.
    fn to_storage(&self) -> Vec<T> {
        self.to_tangent(&T::zero())
    }

    fn from_storage(&self, flat: &[T]) -> Result<Self> {
        self.from_tangent(flat, &T::zero())
    }
}

impl<T: ScalarExpr> Group for Matrix<T> {
    fn identity(&self) -> Self {
        self.zeros_like()
    }

    fn compose(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, |a, b| a.clone() + b.clone())
    }

    fn inverse(&self) -> Self {
        self.map(|x| -x.clone())
    }
}

impl<T: ScalarExpr> LieGroup for Matrix<T> {
    fn tangent_dim(&self) -> usize {
        self.rows * self.cols
    }

    fn to_tangent(&self, _epsilon: &T) -> Vec<T> {
        self.data.clone()
    }

    fn from_tangent(&self, vec: &[T], _epsilon: &T) -> Result<Self> {
        if vec.len() != self.tangent_dim() {
            return Err(GeoError::shape_mismatch(
                format!("{} elements for shape {}", self.tangent_dim(), shape_str(self.rows, self.cols)),
                format!("{} elements", vec.len()),
            ));
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: vec.to_vec(),
        })
    }
}

// -------------------------------------------------------------------------
// Operators
// -------------------------------------------------------------------------

impl<T: ScalarExpr> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Some(x) => x,
            None => panic!(
                "index ({row}, {col}) out of bounds for {}x{} matrix",
                self.rows, self.cols
            ),
        }
    }
}

impl<T: ScalarExpr> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let (rows, cols) = (self.rows, self.cols);
        match self.get_mut(row, col) {
            Some(x) => x,
            None => panic!("index ({row}, {col}) out of bounds for {rows}x{cols} matrix"),
        }
    }
}

/// Elementwise sum.
///
/// # Panics
///
/// Panics on shape mismatch; use [`Group::compose`] for the checked form.
impl<T: ScalarExpr> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Matrix<T> {
        match self.compose(rhs) {
            Ok(m) => m,
            Err(e) => panic!("matrix addition: {e}"),
        }
    }
}

impl<T: ScalarExpr> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Matrix<T> {
        &self + &rhs
    }
}

/// Elementwise difference.
///
/// # Panics
///
/// Panics on shape mismatch; use [`Matrix::checked_sub`] for the checked
/// form.
impl<T: ScalarExpr> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Self) -> Matrix<T> {
        match self.checked_sub(rhs) {
            Ok(m) => m,
            Err(e) => panic!("matrix subtraction: {e}"),
        }
    }
}

impl<T: ScalarExpr> Sub for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Self) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: ScalarExpr> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.inverse()
    }
}

impl<T: ScalarExpr> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -&self
    }
}

/// Matrix product.
///
/// # Panics
///
/// Panics on incompatible inner dimensions; use [`Matrix::matmul`] for the
/// checked form.
impl<T: ScalarExpr> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Matrix<T> {
        match self.matmul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("matrix multiplication: {e}"),
        }
    }
}

impl<T: ScalarExpr> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: ScalarExpr> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..self.rows {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[r * self.cols + c])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
