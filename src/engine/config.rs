/// 推理引擎配置，只影响耗时而不影响计算结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// 最大工作线程数，`None`为rayon默认值（逻辑CPU数）
    pub workers: Option<usize>,
}

impl EngineConfig {
    /// 设置工作线程数，0视为使用默认值
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = (workers > 0).then_some(workers);
        self
    }
}
