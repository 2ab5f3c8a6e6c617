//! Rasterizing a (u,v) track onto a square grid, and the sampling mask
//! derived from it.

use log::{debug, warn};
use ndarray::{Array2, ArrayView2};

use crate::{axis_convention::uv_display_orientation, constants::MIN_UV_EXTENT};

/// Largest finite `|u|` or `|v|` in the track; an empty track gives 0.
pub fn uv_extent(track: ArrayView2<f64>) -> f64 {
    track
        .iter()
        .filter(|x| x.is_finite())
        .fold(0.0_f64, |acc, &x| acc.max(x.abs()))
}

/// `n + 1` equally spaced bin edges from `lo` to `hi`, the last one exactly
/// `hi`.
fn bin_edges(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / n as f64;
    let mut edges: Vec<f64> = (0..=n).map(|i| i as f64 * step + lo).collect();
    edges[n] = hi;
    edges
}

/// Bin of `x` given its edges. A point on an inner edge goes to the bin on
/// its right; the upper edge belongs to the last bin.
fn bin_index(x: f64, edges: &[f64]) -> Option<usize> {
    let n = edges.len() - 1;
    if !x.is_finite() || x < edges[0] || x > edges[n] {
        return None;
    }
    // edges <= x, at least one since x >= edges[0]
    let count = edges.partition_point(|&e| e <= x);
    Some((count - 1).min(n - 1))
}

/// Count the track points falling in each cell of a `uv_dim x uv_dim` grid
/// spanning `[-L, L]` on both axes, `L` being [uv_extent].
///
/// The counts are returned in the orientation given by
/// [uv_display_orientation]. A zero extent falls back to
/// [MIN_UV_EXTENT]. Non-finite points are dropped.
pub fn get_uv_plane(track: ArrayView2<f64>, uv_dim: usize) -> Array2<f64> {
    let mut lim = uv_extent(track);
    if lim <= 0.0 {
        warn!(
            "uv track has zero extent ({} points); using +/-{} for the grid",
            track.nrows(),
            MIN_UV_EXTENT
        );
        lim = MIN_UV_EXTENT;
    }
    debug!("uv grid: {0}x{0} cells over +/-{1}", uv_dim, lim);

    let mut hist = Array2::<f64>::zeros((uv_dim, uv_dim));
    if uv_dim == 0 {
        return hist;
    }
    let edges = bin_edges(-lim, lim, uv_dim);
    for uv in track.rows() {
        if let (Some(iu), Some(iv)) = (bin_index(uv[0], &edges), bin_index(uv[1], &edges)) {
            hist[(iu, iv)] += 1.0;
        }
    }
    uv_display_orientation(hist.view())
}

/// Counts divided by their total. Not part of the default pipeline.
pub fn normalize_uv_plane(uv_plane: ArrayView2<f64>) -> Array2<f64> {
    let total = uv_plane.sum();
    if total > 0.0 {
        uv_plane.mapv(|x| x / total)
    } else {
        uv_plane.to_owned()
    }
}

/// 1 in every cell with a positive count; other cells keep their value.
pub fn get_uv_mask(uv_plane: ArrayView2<f64>) -> Array2<f64> {
    let mut mask = uv_plane.to_owned();
    mask.iter_mut().filter(|x| **x > 0.0).for_each(|x| *x = 1.0);
    mask
}

/// Nearest-neighbour resampling of a mask to `shape`, so it can be applied
/// to a spectrum of a different size. Cell centres are mapped onto each
/// other.
pub fn resample_mask(mask: ArrayView2<f64>, shape: (usize, usize)) -> Array2<f64> {
    let (h, w) = mask.dim();
    if (h, w) == shape {
        return mask.to_owned();
    }
    if h == 0 || w == 0 {
        return Array2::zeros(shape);
    }
    let nearest = |i: usize, n_out: usize, n_in: usize| {
        let x = ((i as f64 + 0.5) * n_in as f64 / n_out as f64).floor() as usize;
        x.min(n_in - 1)
    };
    Array2::from_shape_fn(shape, |(i, j)| {
        mask[(nearest(i, shape.0, h), nearest(j, shape.1, w))]
    })
}
