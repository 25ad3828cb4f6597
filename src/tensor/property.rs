/*
 * @Description  : 本类仅包含一些属性方法，不包含任何运算方法，所以不会需要用到mut
 */

use super::Tensor;
use ndarray::ArrayView2;

impl Tensor {
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// 形状，顺序为`[行数, 列数]`
    pub fn shape(&self) -> [usize; 2] {
        let (rows, cols) = self.data.dim();
        [rows, cols]
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// 计算张量中所有元素的数量
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 判断两个张量的形状是否严格一致
    pub fn is_same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// 带越界检查地读取单个元素，越界时返回None
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// 按行优先顺序导出所有元素
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }
}
