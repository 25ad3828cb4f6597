use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    DimensionMismatch {
        operator: Operator,
        tensor1_shape: [usize; 2],
        tensor2_shape: [usize; 2],
    },

    // 数字比较用
    #[error("{value_name}须{operator}{threshold}，实际为{value}")]
    ValueMustSatisfyComparison {
        value_name: String,
        operator: ComparisonOperator,
        threshold: usize,
        value: usize,
    },

    #[error("卷积核须为边长为奇数的方阵，实际形状为{shape:?}")]
    InvalidKernel { shape: [usize; 2] },
    #[error("张量（形状{tensor_shape:?}）小于卷积核（形状{kernel_shape:?}），无法做有效（valid）互相关")]
    KernelTooLarge {
        tensor_shape: [usize; 2],
        kernel_shape: [usize; 2],
    },

    #[error("张量列表为空")]
    EmptyList,
    #[error("张量没有任何元素")]
    EmptyTensor,
    #[error("张量各行长度不一致：第{row}行长度为{got}，期望为{expected}")]
    InconsistentShape {
        row: usize,
        expected: usize,
        got: usize,
    },
}
