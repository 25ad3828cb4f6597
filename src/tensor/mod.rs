/*
 * @Description  : 二维张量（矩阵），推理引擎唯一的数值载体。
 *                 所有运算均不修改输入，而是返回新的张量，
 *                 因此同一个张量可被多个线程同时只读共享。
 */

use ndarray::Array2;

use crate::errors::{ComparisonOperator, TensorError};

mod ops {
    pub mod add;
    pub mod mul;
    pub mod others;
}

mod correlate;
mod pad;
mod print;
mod property;


/// 定义张量的结构体：行数、列数固定的二维实数网格。
/// 底层用`Array2`存储，故“每行长度一致”由类型保证。
#[derive(Debug, Clone)]
pub struct Tensor {
    data: Array2<f64>,
}

impl Tensor {
    /// 按行优先顺序创建一个`rows`行`cols`列的张量。
    /// 注：`data`的长度必须等于`rows * cols`，否则会panic。
    pub fn new(data: &[f64], rows: usize, cols: usize) -> Tensor {
        assert!(
            data.len() == rows * cols,
            "{}",
            TensorError::ValueMustSatisfyComparison {
                value_name: "data的长度".to_string(),
                operator: ComparisonOperator::Equal,
                threshold: rows * cols,
                value: data.len(),
            }
        );
        let data = Array2::from_shape_vec((rows, cols), data.to_vec()).unwrap();
        Tensor { data }
    }

    /// 创建一个全零张量
    pub fn zeros(rows: usize, cols: usize) -> Tensor {
        Tensor {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// 由若干行创建张量，用于将模型文件中的嵌套数组转为张量。
    /// 各行长度不一致时返回`InconsistentShape`，无任何行时返回`EmptyList`。
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Tensor, TensorError> {
        let first = rows.first().ok_or(TensorError::EmptyList)?;
        let cols = first.as_ref().len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(TensorError::InconsistentShape {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Tensor::new(&data, rows.len(), cols))
    }
}

impl From<Array2<f64>> for Tensor {
    fn from(data: Array2<f64>) -> Self {
        Tensor { data }
    }
}
