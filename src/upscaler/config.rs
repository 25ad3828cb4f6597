use crate::engine::EngineConfig;

/// 默认的预放大倍数
pub const DEFAULT_SCALE: u32 = 2;

/// 端到端放大的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpscaleConfig {
    /// 最近邻预放大的倍数
    pub scale: u32,
    pub engine: EngineConfig,
}

impl Default for UpscaleConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            engine: EngineConfig::default(),
        }
    }
}

impl UpscaleConfig {
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}
