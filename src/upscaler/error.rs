use crate::engine::EngineError;
use crate::nn::ModelError;
use crate::vision::VisionError;
use thiserror::Error;

/// 本crate对外的汇总错误
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Vision(#[from] VisionError),
}
