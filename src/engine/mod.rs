// ==========================================
// 多区域投入产出冲击核算 - 引擎层
// ==========================================
// 职责: 实现三类生产约束核算引擎, 纯同步只读变换
// 红线: 引擎不持有可变状态, 所有失败必须输出显式原因
// ==========================================

pub mod error;
pub mod overproduction;
pub mod production;
pub mod production_max;
pub mod stock_constraint;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use overproduction::OverproductionEngine;
pub use production::ProductionEngine;
pub use production_max::MaxProductionEngine;
pub use stock_constraint::{StockConstraint, BASELINE_OVERRIDE_FACTOR};
