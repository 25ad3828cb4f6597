//! 进度旁路：只观察已完成的卷积次数，不参与计算

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// 进度观察者。引擎保证同一时刻只有一个线程调用`report`，且`completed`严格递增
pub trait Progress: Sync {
    /// `completed`为已完成的卷积次数，`total`为按声明平面数统计的总次数
    fn report(&self, completed: usize, total: usize);
}

impl<F> Progress for F
where
    F: Fn(usize, usize) + Sync,
{
    fn report(&self, completed: usize, total: usize) {
        self(completed, total)
    }
}

/// 完成比例，声明的总数偏小时封顶为1
pub fn fraction(completed: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        (completed as f64 / total as f64).min(1.0)
    }
}

/// 不汇报进度
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn report(&self, _completed: usize, _total: usize) {}
}

/// 每跨过一个整百分点输出一条info日志
#[derive(Debug, Default)]
pub struct LogProgress {
    last_percent: AtomicUsize,
}

impl Progress for LogProgress {
    fn report(&self, completed: usize, total: usize) {
        let percent = (fraction(completed, total) * 100.0) as usize;
        if self.last_percent.fetch_max(percent, Ordering::Relaxed) < percent {
            info!("推理进度：{percent}%（{completed}/{total}）");
        }
    }
}

pub(crate) struct ProgressTracker<'a> {
    observer: &'a dyn Progress,
    total: usize,
    completed: AtomicUsize,
    last_reported: Mutex<usize>,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(observer: &'a dyn Progress, total: usize) -> Self {
        Self {
            observer,
            total,
            completed: AtomicUsize::new(0),
            last_reported: Mutex::new(0),
        }
    }

    /// 由卷积任务在完成后调用
    pub(crate) fn advance(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
        // 拿不到锁说明另一个任务正在汇报，直接跳过，卷积任务不等待
        if let Ok(mut last) = self.last_reported.try_lock() {
            self.report_locked(&mut last);
        }
    }

    /// 全部完成后由协调线程调用，确保最终值一定被汇报
    pub(crate) fn finish(&self) {
        let mut last = self
            .last_reported
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        self.report_locked(&mut last);
    }

    fn report_locked(&self, last: &mut usize) {
        let done = self.completed.load(Ordering::Relaxed);
        if done > *last {
            *last = done;
            self.observer.report(done, self.total);
        }
    }
}
