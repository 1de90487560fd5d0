//! 2×2 matrices over the integers modulo 26.

use std::fmt::{self, Display};

use crate::modular;

/// A 2×2 integer matrix used as a Hill cipher key.
///
/// Entries are stored exactly as given and may be negative or larger than 25;
/// every arithmetic operation reduces them modulo 26 first. Two matrices with the
/// same [`reduced`](Self::reduced) form therefore encrypt identically.
///
/// Blocks are multiplied as row vectors: `[v0, v1] × M`.
///
/// # Examples
///
/// ```
/// use cryptosuite_core::Matrix2;
///
/// let key = Matrix2::new([[3, 3], [2, 5]]);
/// assert_eq!(key.determinant(), 9);
///
/// let inverse = key.inverse().unwrap();
/// assert_eq!(inverse, Matrix2::new([[15, 17], [20, 9]]));
/// assert_eq!(key.mul_mod(&inverse), Matrix2::IDENTITY);
///
/// // "HE" = [7, 4]
/// assert_eq!(key.apply([7, 4]), [3, 15]);
/// assert_eq!(inverse.apply([3, 15]), [7, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix2 {
    rows: [[i64; 2]; 2],
}

impl Matrix2 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([[1, 0], [0, 1]]);

    /// Creates a matrix from its rows.
    #[must_use]
    pub const fn new(rows: [[i64; 2]; 2]) -> Self {
        Self { rows }
    }

    /// Returns the rows of the matrix, as stored.
    #[must_use]
    pub const fn rows(&self) -> [[i64; 2]; 2] {
        self.rows
    }

    /// Returns the entry at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not 0 or 1.
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> i64 {
        self.rows[row][col]
    }

    /// Returns a copy with every entry reduced into the range `0..26`.
    #[must_use]
    pub fn reduced(&self) -> Self {
        let [[a, b], [c, d]] = self.rows;
        Self::new([
            [modular::reduce(a), modular::reduce(b)],
            [modular::reduce(c), modular::reduce(d)],
        ])
    }

    /// Returns the determinant modulo 26.
    #[must_use]
    pub fn determinant(&self) -> i64 {
        let [[a, b], [c, d]] = self.reduced().rows;
        modular::reduce(a * d - b * c)
    }

    /// Returns `true` if the determinant is invertible modulo 26.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        modular::is_invertible(self.determinant())
    }

    /// Returns the inverse modulo 26, or `None` if the determinant shares a factor with 26.
    ///
    /// The inverse is `det⁻¹ · [[d, -b], [-c, a]]` with every entry reduced.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det_inv = modular::mod_inverse(self.determinant())?;
        let [[a, b], [c, d]] = self.reduced().rows;
        Some(
            Self::new([
                [d * det_inv, -b * det_inv],
                [-c * det_inv, a * det_inv],
            ])
            .reduced(),
        )
    }

    /// Returns the matrix product `self × rhs` modulo 26.
    #[must_use]
    pub fn mul_mod(&self, rhs: &Self) -> Self {
        let [[a, b], [c, d]] = self.reduced().rows;
        let [[e, f], [g, h]] = rhs.reduced().rows;
        Self::new([[a * e + b * g, a * f + b * h], [c * e + d * g, c * f + d * h]]).reduced()
    }

    /// Multiplies the row vector `block` by this matrix modulo 26.
    ///
    /// `u0 = v0·m00 + v1·m10` and `u1 = v0·m01 + v1·m11`.
    #[must_use]
    pub fn apply(&self, block: [i64; 2]) -> [i64; 2] {
        let [[a, b], [c, d]] = self.reduced().rows;
        let [v0, v1] = block.map(modular::reduce);
        [modular::reduce(v0 * a + v1 * c), modular::reduce(v0 * b + v1 * d)]
    }
}

impl From<[[i64; 2]; 2]> for Matrix2 {
    fn from(rows: [[i64; 2]; 2]) -> Self {
        Self::new(rows)
    }
}

/// Formats the matrix as two lines of whitespace-separated entries.
///
/// ```
/// use cryptosuite_core::Matrix2;
///
/// assert_eq!(Matrix2::new([[3, 3], [2, 5]]).to_string(), "3 3\n2 5");
/// ```
impl Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [[a, b], [c, d]] = self.rows;
        write!(f, "{a} {b}\n{c} {d}")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_determinant_reduces_entries() {
        assert_eq!(Matrix2::new([[3, 3], [2, 5]]).determinant(), 9);
        assert_eq!(Matrix2::new([[1, 2], [3, 4]]).determinant(), 24);
        assert_eq!(Matrix2::new([[-1, 0], [0, 1]]).determinant(), 25);
        assert_eq!(Matrix2::new([[27, 0], [0, 53]]).determinant(), 1);
    }

    #[test]
    fn test_inverse_of_singular_matrix() {
        // det = 2 * 2 - 1 * 0 = 4, which shares the factor 2 with 26
        assert_eq!(Matrix2::new([[2, 1], [0, 2]]).inverse(), None);
        // det = 13
        assert_eq!(Matrix2::new([[13, 0], [0, 1]]).inverse(), None);
        assert!(!Matrix2::new([[0, 0], [0, 0]]).is_invertible());
    }

    #[test]
    fn test_inverse_of_textbook_key() {
        let key = Matrix2::new([[5, 8], [17, 3]]);
        let inverse = key.inverse().unwrap();
        assert_eq!(inverse, Matrix2::new([[9, 2], [1, 15]]));
        assert_eq!(inverse.mul_mod(&key), Matrix2::IDENTITY);
    }

    #[test]
    fn test_apply_uses_row_vector_convention() {
        let key = Matrix2::new([[1, 2], [3, 4]]);
        // [1, 0] picks the first row, [0, 1] the second
        assert_eq!(key.apply([1, 0]), [1, 2]);
        assert_eq!(key.apply([0, 1]), [3, 4]);
        assert_eq!(key.apply([1, 1]), [4, 6]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Matrix2::new([[-1, 2], [30, 4]]).to_string(), "-1 2\n30 4");
        assert_eq!(Matrix2::IDENTITY.to_string(), "1 0\n0 1");
    }

    fn arb_matrix() -> impl Strategy<Value = Matrix2> {
        prop::array::uniform2(prop::array::uniform2(-1000_i64..1000)).prop_map(Matrix2::new)
    }

    proptest! {
        #[test]
        fn inverse_undoes_apply(key in arb_matrix(), v0 in 0_i64..26, v1 in 0_i64..26) {
            match key.inverse() {
                Some(inverse) => {
                    prop_assert!(key.is_invertible());
                    prop_assert_eq!(key.mul_mod(&inverse), Matrix2::IDENTITY);
                    prop_assert_eq!(inverse.mul_mod(&key), Matrix2::IDENTITY);
                    prop_assert_eq!(inverse.apply(key.apply([v0, v1])), [v0, v1]);
                }
                None => prop_assert!(!key.is_invertible()),
            }
        }

        #[test]
        fn reduced_form_behaves_identically(key in arb_matrix(), v0 in 0_i64..26, v1 in 0_i64..26) {
            prop_assert_eq!(key.apply([v0, v1]), key.reduced().apply([v0, v1]));
            prop_assert_eq!(key.determinant(), key.reduced().determinant());
        }
    }
}
