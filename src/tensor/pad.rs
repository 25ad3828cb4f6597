use super::Tensor;
use crate::errors::TensorError;
use ndarray::Array2;

impl Tensor {
    /// 以边缘复制的方式在上下左右各填充`radius`行/列，返回形状为`[rows + 2r, cols + 2r]`的新张量：
    /// 新增的格子取原张量中距其最近的边界值（四角取对应角上的值）。
    /// `radius`为0时返回与原张量相等的副本。
    pub fn pad(&self, radius: usize) -> Result<Tensor, TensorError> {
        if self.is_empty() {
            return Err(TensorError::EmptyTensor);
        }
        let [rows, cols] = self.shape();
        let new_shape = (rows + 2 * radius, cols + 2 * radius);

        // 先减去radius再夹到[0, len-1]，即最近的边界下标
        let nearest = |i: usize, len: usize| i.saturating_sub(radius).min(len - 1);
        let data = Array2::from_shape_fn(new_shape, |(r, c)| {
            self.data[[nearest(r, rows), nearest(c, cols)]]
        });
        Ok(Tensor { data })
    }
}
