use serde::Serialize;

/// 发给展示层的进度事件，可直接序列化为 JSON。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// 已收到响应头
    Started {
        order: usize,
        name: String,
        total_bytes: Option<u64>,
    },
    /// 整数百分比发生变化
    Progress {
        order: usize,
        bytes_transferred: u64,
        percentage: u8,
    },
    /// 测速采样
    Sample {
        order: usize,
        bytes_transferred: u64,
        bytes_per_second: f64,
        speed: String,
    },
    /// 任务结束；`error` 为 `None` 表示成功
    Finished {
        order: usize,
        name: String,
        bytes_transferred: Option<u64>,
        error: Option<String>,
    },
}

impl ProgressEvent {
    pub fn order(&self) -> usize {
        match self {
            ProgressEvent::Started { order, .. }
            | ProgressEvent::Progress { order, .. }
            | ProgressEvent::Sample { order, .. }
            | ProgressEvent::Finished { order, .. } => *order,
        }
    }
}
