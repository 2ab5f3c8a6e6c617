//! Axis and origin conventions shared by the rasterizer and the imaging
//! routines.
//!
//! * Spectra from [crate::fft::fft2_real] keep the DC term at `[0, 0]`.
//!   [fftshift2] moves it to `[h/2, w/2]`, [ifftshift2] moves it back; both
//!   work on odd sizes the way `numpy.fft.fftshift` / `ifftshift` do.
//! * A uv-plane is built as a histogram indexed `[u_bin, v_bin]` and then
//!   passed through [uv_display_orientation], giving `[v_bin, n - 1 - u_bin]`.
//!   Masks derived from it are centred, so they pair with [fftshift2]ed
//!   spectra, and their inverse transforms are origin-centred until
//!   [ifftshift2]ed for display.

use ndarray::{s, Array2, ArrayView2};

/// Cyclic roll by `r0` rows and `r1` columns:
/// `out[(i + r0) % h, (j + r1) % w] = in[i, j]`.
pub fn roll2<T>(in_data: ArrayView2<T>, r0: usize, r1: usize) -> Array2<T>
where
    T: Clone,
{
    let h = in_data.nrows();
    let w = in_data.ncols();
    if h == 0 || w == 0 {
        return in_data.to_owned();
    }
    let r0 = r0 % h;
    let r1 = r1 % w;
    let mut result = in_data.to_owned();

    result
        .slice_mut(s![r0..h, r1..w])
        .assign(&in_data.slice(s![0..h - r0, 0..w - r1]));
    result
        .slice_mut(s![r0..h, 0..r1])
        .assign(&in_data.slice(s![0..h - r0, w - r1..w]));
    result
        .slice_mut(s![0..r0, r1..w])
        .assign(&in_data.slice(s![h - r0..h, 0..w - r1]));
    result
        .slice_mut(s![0..r0, 0..r1])
        .assign(&in_data.slice(s![h - r0..h, w - r1..w]));
    result
}

/// Move the zero-frequency element to the centre.
pub fn fftshift2<T>(in_data: ArrayView2<T>) -> Array2<T>
where
    T: Clone,
{
    let h = in_data.nrows();
    let w = in_data.ncols();
    roll2(in_data, h / 2, w / 2)
}

/// Inverse of [fftshift2].
pub fn ifftshift2<T>(in_data: ArrayView2<T>) -> Array2<T>
where
    T: Clone,
{
    let h = in_data.nrows();
    let w = in_data.ncols();
    roll2(in_data, h - h / 2, w - w / 2)
}

/// Transpose, then reverse the column order.
///
/// Turns a `[u_bin, v_bin]` histogram into the layout used for every uv-plane
/// in this crate.
pub fn uv_display_orientation<T>(hist: ArrayView2<T>) -> Array2<T>
where
    T: Clone,
{
    hist.t().slice(s![.., ..;-1]).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn shift_even() {
        let a = array![[0, 1, 2, 3], [4, 5, 6, 7]];
        let shifted = fftshift2(a.view());
        assert_eq!(shifted, array![[6, 7, 4, 5], [2, 3, 0, 1]]);
        assert_eq!(ifftshift2(shifted.view()), a);
    }

    #[test]
    fn shift_odd() {
        // numpy.fft.fftshift([[0,1,2],[3,4,5],[6,7,8]])
        let a = array![[0, 1, 2], [3, 4, 5], [6, 7, 8]];
        let shifted = fftshift2(a.view());
        assert_eq!(shifted, array![[8, 6, 7], [2, 0, 1], [5, 3, 4]]);
        assert_eq!(ifftshift2(shifted.view()), a);
    }

    #[test]
    fn dc_lands_in_centre() {
        let mut a = Array2::<i32>::zeros((5, 6));
        a[(0, 0)] = 1;
        let shifted = fftshift2(a.view());
        assert_eq!(shifted[(2, 3)], 1);
        assert_eq!(shifted.sum(), 1);
    }

    #[test]
    fn display_orientation() {
        // hist[u][v]
        let hist = array![[1, 2], [3, 4]];
        let out = uv_display_orientation(hist.view());
        assert_eq!(out, array![[3, 1], [4, 2]]);
    }
}
