// ==========================================
// 多区域投入产出冲击核算 - API 层
// ==========================================
// 职责: 稳定的对外调用面（三个纯函数）
// ==========================================

pub mod production_api;

// 重导出核算接口
pub use production_api::{
    compute_max_production, compute_overproduction_signal, compute_production,
};
