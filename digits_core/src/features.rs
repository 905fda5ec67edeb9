use ndarray::Array2;

/// Rows are time frames, columns are feature coefficients.
pub type FeatureMatrix = Array2<f32>;

/// Rescale every column of `matrix` to `[0, 1]` using that column's own
/// min and max.
///
/// Normalization is per utterance: statistics never cross matrices. A
/// constant column has no range to scale by and becomes all `0.0`.
pub fn normalize(mut matrix: FeatureMatrix) -> FeatureMatrix {
    for mut column in matrix.columns_mut() {
        let (min, max) = column
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let range = max - min;
        if range > 0.0 {
            column.mapv_inplace(|v| (v - min) / range);
        } else {
            column.fill(0.0);
        }
    }
    matrix
}
