/*
 * @Description  : 网络模型：层（Layer）、网络（Network）、激活函数以及模型JSON的加载。
 *                 网络在一次推理中只读，可被所有并行任务无锁共享。
 */

mod activation;
mod error;
mod layer;
mod network;

pub use activation::{LEAKY_SLOPE, leaky_relu};
pub use error::ModelError;
pub use layer::{Layer, LayerDesc};
pub use network::Network;

#[cfg(test)]
mod tests;
