// ==========================================
// 多区域投入产出冲击核算 - 领域模型层
// ==========================================
// 职责: 定义稠密矩阵、基准替换掩码等核心值对象
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod mask;
pub mod matrix;

// 重导出核心类型
pub use mask::BaselineMask;
pub use matrix::{Matrix, MatrixError, MatrixResult};
