use log::trace;
use ndarray::{Array2, ArrayView2};

/// Every ordered antenna pair `(i, j)` with `i != j`, as `pos_i - pos_j`.
///
/// Rows follow the row-major `(i, j)` order of the full `N x N` product with
/// the diagonal left out, so the output has `N(N-1)` rows. Fewer than two
/// antennas give an empty `(0, 2)` array.
pub fn get_baselines(ants: ArrayView2<f64>) -> Array2<f64> {
    let nants = ants.nrows();
    let nbl = nants * nants.saturating_sub(1);
    let mut bl = Array2::<f64>::zeros((nbl, 2));
    let mut k = 0;
    for (i, a1) in ants.rows().into_iter().enumerate() {
        for (j, a2) in ants.rows().into_iter().enumerate() {
            if i == j {
                continue;
            }
            bl[(k, 0)] = a1[0] - a2[0];
            bl[(k, 1)] = a1[1] - a2[1];
            k += 1;
        }
    }
    trace!("{} antennas -> {} baselines", nants, nbl);
    bl
}
