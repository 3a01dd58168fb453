/// 内部导出的模块
mod internal;


/// 导出核心入口函数
pub use internal::entrance::patch::*;

/// 补丁清单与运行配置
pub mod config {
    use crate::internal;
    pub use internal::config::manifest;
    pub use internal::config::manifest::{APP_NAME, BASE_URL, FILES};
    pub use internal::config::structs::*;
}

/// 下载器：单文件流式下载、进度与测速
pub mod fetcher {
    use crate::internal;
    // 结构体模型
    pub use internal::fetcher::structs::*;
    // 观察者接口
    pub use internal::fetcher::traits::*;
    // 下载与格式化函数
    pub use internal::fetcher::functions::*;
}

/// 解压器：.tar.gz 解包
pub mod extractor {
    use crate::internal;
    pub use internal::extractor::functions::*;
    pub use internal::extractor::structs::*;
}

/// 调度器：并发下载 + 屏障 + 顺序解压
pub mod driver {
    use crate::internal;
    pub use internal::driver::structs::*;
}

pub mod states {
    pub mod reactive_core {
        use crate::internal;
        pub use internal::states::reactive_core::*;
    }

    pub mod queue_reactive {
        use crate::internal;
        pub use internal::states::queue_reactive::*;
    }
}
