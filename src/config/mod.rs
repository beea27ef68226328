// ==========================================
// 多区域投入产出冲击核算 - 配置层
// ==========================================
// 职责: 仿真级固定配置（维度常数 NN/RR/UU + 基准替换掩码）
// 红线: 一次构建, 引擎调用期间只读
// ==========================================

pub mod model_config;

// 重导出核心配置类型
pub use model_config::{ConfigError, ModelConfig, ModelDimensions};
