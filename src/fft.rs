//! Two-dimensional discrete Fourier transforms.
//!
//! Same normalization as numpy: the forward transform is unscaled, the
//! inverse one is divided by the number of elements. Neither shifts its
//! output, see [crate::axis_convention] for that.

use num::{Complex, Zero};

use rustfft::{FftDirection, FftNum, FftPlanner};

use ndarray::{Array2, ArrayView2, Axis};

fn fft_along_axis<T: FftNum>(
    planner: &mut FftPlanner<T>,
    data: &mut Array2<Complex<T>>,
    axis: Axis,
    direction: FftDirection,
) {
    let len = data.len_of(axis);
    if len == 0 {
        return;
    }
    let fft = planner.plan_fft(len, direction);
    let mut buffer = vec![Complex::zero(); len];
    let mut scratch = vec![Complex::zero(); fft.get_inplace_scratch_len()];
    for mut lane in data.lanes_mut(axis) {
        buffer
            .iter_mut()
            .zip(lane.iter())
            .for_each(|(b, &x)| *b = x);
        fft.process_with_scratch(&mut buffer, &mut scratch);
        lane.iter_mut()
            .zip(buffer.iter())
            .for_each(|(x, &b)| *x = b);
    }
}

fn _fft2<T: FftNum>(data: &mut Array2<Complex<T>>, direction: FftDirection) {
    let mut planner = FftPlanner::new();
    fft_along_axis(&mut planner, data, Axis(1), direction);
    fft_along_axis(&mut planner, data, Axis(0), direction);
}

pub fn ifft2(input: ArrayView2<Complex<f64>>) -> Array2<Complex<f64>> {
    let mut output = input.to_owned();
    _fft2(&mut output, FftDirection::Inverse);
    let n = output.len();
    if n > 0 {
        let norm = n as f64;
        output.iter_mut().for_each(|x| *x = x.unscale(norm));
    }
    output
}

/// Forward transform of a real array.
pub fn fft2_real(input: ArrayView2<f64>) -> Array2<Complex<f64>> {
    let mut output = input.mapv(Complex::<f64>::from);
    _fft2(&mut output, FftDirection::Forward);
    output
}

/// Inverse transform of a real array (a mask, typically).
pub fn ifft2_real(input: ArrayView2<f64>) -> Array2<Complex<f64>> {
    ifft2(input.mapv(Complex::<f64>::from).view())
}
