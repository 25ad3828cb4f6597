/*
 * @Description  : 张量的加法，实现了两个张量“逐元素”（或张量与纯数）相加的运算，并返回一个新的张量。
 *                 该运算支持以下情况：
 *                 1. 其中一个操作数为纯数而另一个为张量：则返回的张量形状与该张量相同；
 *                 2. 两个操作数均为张量：形状必须严格一致（不做广播）。
 *                 运算符形式在形状不一致时panic，需要错误返回值时请用`try_add`。
 */

use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use std::ops::Add;

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的张量 + f64↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
impl Add<f64> for Tensor {
    type Output = Self;

    fn add(self, scalar: f64) -> Self {
        Self {
            data: self.data + scalar,
        }
    }
}
impl Add<f64> for &Tensor {
    type Output = Tensor;

    fn add(self, scalar: f64) -> Tensor {
        Tensor {
            data: &self.data + scalar,
        }
    }
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的张量 + f64↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的张量 +（不）带引用的张量↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
impl Add for Tensor {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        add_within_tensors(&self, &other)
    }
}

impl<'a> Add<&'a Self> for Tensor {
    type Output = Self;

    fn add(self, other: &'a Self) -> Self {
        add_within_tensors(&self, other)
    }
}

impl<'b> Add<&'b Tensor> for &Tensor {
    type Output = Tensor;

    fn add(self, other: &'b Tensor) -> Tensor {
        add_within_tensors(self, other)
    }
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的张量 +（不）带引用的张量↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

impl Tensor {
    /// 逐元素相加，形状不一致时返回`DimensionMismatch`
    pub fn try_add(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        if !self.is_same_shape(other) {
            return Err(TensorError::DimensionMismatch {
                operator: Operator::Add,
                tensor1_shape: self.shape(),
                tensor2_shape: other.shape(),
            });
        }
        Ok(Tensor {
            data: &self.data + &other.data,
        })
    }
}

/// # Panics
/// 如果两个张量形状不一致
fn add_within_tensors(tensor_1: &Tensor, tensor_2: &Tensor) -> Tensor {
    match tensor_1.try_add(tensor_2) {
        Ok(sum) => sum,
        Err(e) => panic!("{}", e),
    }
}
