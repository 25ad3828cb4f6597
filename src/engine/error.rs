use crate::errors::TensorError;
use thiserror::Error;

/// 推理过程中的致命错误，均不可重试
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("输入的亮度平面为空")]
    EmptyInput,

    #[error("填充输入失败: {0}")]
    Pad(#[source] TensorError),

    #[error("第{layer}层第{output}个输出平面与第{input}个输入平面的互相关失败: {source}")]
    Convolution {
        layer: usize,
        output: usize,
        input: usize,
        source: TensorError,
    },

    #[error("第{layer}层第{output}个输出平面累加部分和失败: {source}")]
    Reduction {
        layer: usize,
        output: usize,
        source: TensorError,
    },

    #[error("第{layer}层第{output}个输出平面没有可用的输入平面")]
    NoInputPlanes { layer: usize, output: usize },

    #[error("全部{layers}层执行完毕后应只剩1个平面，实际为{planes}个")]
    ShapeInvariantViolation { layers: usize, planes: usize },

    #[error("创建线程池失败: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
