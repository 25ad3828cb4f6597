//! # waifu2x
//!
//! 用纯rust实现的[waifu2x](https://github.com/nagadomi/waifu2x)图像超分辨率重建：
//! 先将图像最近邻放大，再用预训练的卷积神经网络在CPU上重建亮度通道，
//! 最后与原色度拼回。
//!
//! 推理引擎只处理二维实数平面（见[`tensor::Tensor`]），与像素、文件无关；
//! 图像相关的步骤集中在[`vision`]模块，端到端流程见[`upscaler::Upscaler`]。
//!

pub mod engine;
pub mod errors;
pub mod nn;
pub mod tensor;
pub mod upscaler;
pub mod utils;
pub mod vision;

pub use engine::{Engine, EngineConfig, EngineError, Progress};
pub use nn::{Layer, ModelError, Network};
pub use tensor::Tensor;
pub use upscaler::{Error, UpscaleConfig, Upscaler};
pub use vision::VisionError;
