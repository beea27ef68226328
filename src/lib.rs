// ==========================================
// 多区域投入产出冲击核算 - 核心库
// ==========================================
// 系统定位: 灾害冲击/供给冲击传导仿真的生产约束核算核心
// 模型结构: NN 部门 × RR 区域 => RR*NN 个"部门-区域"列,
//           UU 个流入/流出类别行
// ==========================================
// 范围红线: 时间步进编排、表格数据摄入、可视化均由外部
// 协作方承担; 本库只做纯数值只读变换。
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 矩阵与掩码值对象
pub mod domain;

// 引擎层 - 生产约束核算
pub mod engine;

// 配置层 - 维度常数与掩码
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 对外核算接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{BaselineMask, Matrix, MatrixError, MatrixResult};

// 引擎
pub use engine::{
    EngineError, EngineResult, MaxProductionEngine, OverproductionEngine, ProductionEngine,
    StockConstraint, BASELINE_OVERRIDE_FACTOR,
};

// 配置
pub use config::{ConfigError, ModelConfig, ModelDimensions};

// 核算接口
pub use api::{compute_max_production, compute_overproduction_signal, compute_production};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "多区域投入产出冲击核算核心";

// ==========================================
// 预编译检查
// ==========================================
