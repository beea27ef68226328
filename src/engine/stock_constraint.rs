// ==========================================
// 多区域投入产出冲击核算 - 库存约束引擎
// ==========================================
// 职责: 库存 ÷ 效率系数 => 有效可产量 ZX, 并对掩码单元做基准替换
// 红线: 掩码单元不按库存比值解释, 一律替换为基准表行的固定倍数
// ==========================================
// 输入: 库存矩阵 (NN x RR*NN) + 效率矩阵 (同形) + 基准表 IOX_0 + 掩码
// 输出: 基准替换后的 ZX (NN x RR*NN)
// ==========================================

use crate::domain::{BaselineMask, Matrix, MatrixError};
use crate::engine::error::{EngineError, EngineResult};

/// 基准替换倍数: 掩码单元取基准表首行值的 1.25 倍
pub const BASELINE_OVERRIDE_FACTOR: f64 = 1.25;

// ==========================================
// StockConstraint - 库存约束引擎
// ==========================================
pub struct StockConstraint {
    // 无状态引擎，不需要注入依赖
}

impl StockConstraint {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 计算基准替换后的有效可产量矩阵 ZX
    ///
    /// 步骤（两个产量引擎共用）：
    /// 1) ZX = 库存 ÷ 效率（逐元素, 零效率报错）
    /// 2) temp = 基准表首行复制 NN 行 × 1.25
    /// 3) 对掩码中每个坐标, 用 temp 同位值覆盖 ZX
    ///
    /// # 参数
    /// - `stock`: 库存矩阵 StockMat (NN x RR*NN)
    /// - `efficiency`: 效率矩阵（与库存同形）
    /// - `baseline`: 基准表 IOX_0（首行为规范基准行, 列宽须为 RR*NN）
    /// - `mask`: 基准替换掩码（坐标须落在 ZX 边界内）
    ///
    /// # 返回
    /// 替换后的 ZX
    pub fn apply(
        &self,
        stock: &Matrix,
        efficiency: &Matrix,
        baseline: &Matrix,
        mask: &BaselineMask,
    ) -> EngineResult<Matrix> {
        // 1. 逐元素比值
        let mut ratio = stock.elementwise_div(efficiency)?;

        // 2. 基准表列宽必须与 ZX 对齐
        if baseline.cols() != ratio.cols() {
            return Err(EngineError::ColumnMismatch {
                entity: "基准表",
                expected: ratio.cols(),
                actual: baseline.cols(),
            });
        }

        // 3. 掩码边界前置校验（整体失败, 不做部分替换）
        if let Some((row, col)) = mask.first_out_of_range(ratio.rows(), ratio.cols()) {
            return Err(EngineError::MaskOutOfRange {
                row,
                col,
                rows: ratio.rows(),
                cols: ratio.cols(),
            });
        }

        // 4. 基准覆盖矩阵: 首行广播至 NN 行后整体放大
        let override_values = baseline
            .row_matrix(0)?
            .broadcast_rows(ratio.rows())?
            .scale(BASELINE_OVERRIDE_FACTOR);

        // 5. 掩码单元覆盖（步骤3已保证在界, 越界在此必须报错而非跳过）
        for (row, col) in mask.iter() {
            let value = override_values
                .get(row, col)
                .ok_or(MatrixError::IndexOutOfRange {
                    row,
                    col,
                    rows: ratio.rows(),
                    cols: ratio.cols(),
                })?;
            ratio.set(row, col, value)?;
        }

        Ok(ratio)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for StockConstraint {
    fn default() -> Self {
        Self::new()
    }
}
