use crate::tensor::Tensor;

/// Leaky ReLU 负半轴斜率
pub const LEAKY_SLOPE: f64 = 0.1;

/// 对张量逐元素做 Leaky ReLU：`f(x) = max(x, 0) + 0.1 * min(x, 0)`，返回新张量
pub fn leaky_relu(tensor: &Tensor) -> Tensor {
    tensor.maximum(0.0) + tensor.minimum(0.0) * LEAKY_SLOPE
}
