// ==========================================
// 多区域投入产出冲击核算 - 引擎层错误类型
// ==========================================
// 职责: 将矩阵层技术错误与引擎层业务前置校验错误统一上抛
// 红线: 引擎内部不做任何恢复, 由外部仿真驱动器决定中止或回退
// ==========================================

use crate::domain::MatrixError;
use thiserror::Error;

/// 引擎层错误类型
/// 所有错误信息必须包含显式原因（可解释性红线）
#[derive(Error, Debug)]
pub enum EngineError {
    // ==========================================
    // 矩阵层错误透传
    // ==========================================
    #[error("矩阵运算失败: {0}")]
    Matrix(#[from] MatrixError),

    // ==========================================
    // 引擎前置校验错误
    // ==========================================
    /// 跨矩阵列对齐失败（所有输入列宽必须等于 RR*NN）
    #[error("列宽不对齐: {entity}期望{expected}列, 实际{actual}列")]
    ColumnMismatch {
        entity: &'static str,
        expected: usize,
        actual: usize,
    },

    /// 基准替换掩码坐标超出库存比值矩阵边界
    #[error("掩码坐标越界: ({row},{col}) 超出 {rows}x{cols}")]
    MaskOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
