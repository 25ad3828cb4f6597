//! 模型加载错误类型定义

use crate::errors::TensorError;
use std::path::PathBuf;
use thiserror::Error;

/// 模型文件缺失、无法读取或格式错误等配置类错误，推理开始前即返回
#[derive(Debug, Error)]
pub enum ModelError {
    /// 读取模型文件失败
    #[error("读取模型文件{path}失败: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON 解析失败
    #[error("模型JSON格式错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 卷积核尺寸须为奇数且kW == kH
    #[error("不支持的卷积核尺寸: kW={k_w}, kH={k_h}（须为相等的奇数）")]
    InvalidKernelSize { k_w: usize, k_h: usize },

    /// 第`output`个输出平面、第`input`个输入平面对应的卷积核有误
    #[error("卷积核weight[{output}][{input}]有误: {source}")]
    InvalidKernel {
        output: usize,
        input: usize,
        source: TensorError,
    },

    /// 附带层号的错误
    #[error("第{layer}层: {source}")]
    Layer {
        layer: usize,
        source: Box<ModelError>,
    },
}
