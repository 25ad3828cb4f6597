use super::Tensor;
use crate::errors::TensorError;
use ndarray::{Array2, s};

impl Tensor {
    /// 有效（valid）二维互相关：步长1、不填充，卷积核须为边长为奇数`k`的方阵。
    /// 输出形状为`[rows - k + 1, cols - k + 1]`，其中
    /// `out[r][c] = Σ_{a,b} self[r + a][c + b] * kernel[a][b]`（卷积核不翻转）。
    ///
    /// 3×3卷积核时每个输出格的累加顺序与逐项展开的写法一致（先行后列）。
    ///
    /// 注意：`kernel[a][b]`中`a`为行、`b`为列。waifu2x的Go版本按`(x + b, y + a)`取像素，
    /// 相当于把卷积核转置后使用；对非对称的卷积核，两者的输出会有差异。
    pub fn correlate(&self, kernel: &Tensor) -> Result<Tensor, TensorError> {
        let [k_rows, k_cols] = kernel.shape();
        if k_rows != k_cols || k_rows % 2 == 0 {
            return Err(TensorError::InvalidKernel {
                shape: kernel.shape(),
            });
        }
        let k = k_rows;
        let [rows, cols] = self.shape();
        if rows < k || cols < k {
            return Err(TensorError::KernelTooLarge {
                tensor_shape: self.shape(),
                kernel_shape: kernel.shape(),
            });
        }

        let out_rows = rows - k + 1;
        let out_cols = cols - k + 1;
        let mut out = Array2::<f64>::zeros((out_rows, out_cols));
        // 每个核元素对应输入的一个平移窗口，逐个累加
        for ((a, b), &w) in kernel.data.indexed_iter() {
            let window = self.data.slice(s![a..a + out_rows, b..b + out_cols]);
            out.scaled_add(w, &window);
        }

        Ok(Tensor { data: out })
    }
}
